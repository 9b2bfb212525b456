use clap::{Args, Parser, Subcommand};
use layoutbind::codegen::{parse_fields, render_bean, BeanSpec, BindingStyle};
use layoutbind::discovery::{load_layout, LayoutDirectory};
use layoutbind::layout::{layout_name_in_line, Extractor, NamingConvention, XmlTag};
use layoutbind::report::{write_output, ReportFormat, Reporter};
use layoutbind::Config;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// layoutbind - Generate view bindings and data classes for Android (Java)
#[derive(Parser, Debug)]
#[command(name = "layoutbind")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project directory; config files and resource roots are looked up here
    #[arg(short, long, default_value = ".", global = true)]
    project: PathBuf,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate view fields for the views with an id in a layout
    Bind(BindArgs),

    /// Generate a data class with getters and setters from a field list
    Bean(BeanArgs),
}

#[derive(Args, Debug)]
struct BindArgs {
    /// Layout name (e.g. activity_main) or path to a layout XML file
    layout: Option<String>,

    /// Source line to take the layout from, e.g. "setContentView(R.layout.main);"
    #[arg(long, conflicts_with = "layout")]
    line: Option<String>,

    /// Resource directory to search (can be specified multiple times)
    #[arg(long = "res", value_name = "DIR")]
    res: Vec<PathBuf>,

    /// Field naming convention
    #[arg(short, long, value_enum)]
    naming: Option<NamingArg>,

    /// Skip views with a malformed id instead of failing
    #[arg(long)]
    lenient: bool,

    /// Binding style
    #[arg(short, long, value_enum)]
    style: Option<StyleArg>,

    /// Also generate a click handler for every view
    #[arg(long)]
    click: bool,

    /// Access modifier for generated members
    #[arg(long)]
    access: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "code")]
    format: FormatArg,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct BeanArgs {
    /// Class name
    name: String,

    /// File with one `name Type` per line; `-` reads stdin
    #[arg(long, value_name = "FILE", default_value = "-")]
    fields: PathBuf,

    /// Package declaration for the generated file
    #[arg(long)]
    package: Option<String>,

    /// Access modifier for fields and accessors
    #[arg(long)]
    access: Option<String>,

    /// Interface to implement (can be specified multiple times)
    #[arg(long = "implements", value_name = "INTERFACE")]
    implements: Vec<String>,

    /// Implement no interfaces at all
    #[arg(long, conflicts_with = "implements")]
    no_interfaces: bool,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum NamingArg {
    Snake,
    Camel,
    Hungarian,
}

impl From<NamingArg> for NamingConvention {
    fn from(arg: NamingArg) -> Self {
        match arg {
            NamingArg::Snake => NamingConvention::Snake,
            NamingArg::Camel => NamingConvention::Camel,
            NamingArg::Hungarian => NamingConvention::HungarianMember,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum StyleArg {
    Butterknife,
    FindView,
}

impl From<StyleArg> for BindingStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Butterknife => BindingStyle::ButterKnife,
            StyleArg::FindView => BindingStyle::FindViewById,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
enum FormatArg {
    #[default]
    Code,
    Json,
    List,
}

impl From<FormatArg> for ReportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Code => ReportFormat::Code,
            FormatArg::Json => ReportFormat::Json,
            FormatArg::List => ReportFormat::List,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    debug!("layoutbind v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;

    match &cli.command {
        Command::Bind(args) => run_bind(&config, &cli, args),
        Command::Bean(args) => run_bean(&config, args),
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    // Generated code goes to stdout, so logs must not
    fmt()
        .with_env_filter(EnvFilter::new(log_level(verbose, quiet)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn log_level(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(config_path) = &cli.config {
        Config::from_file(config_path)
    } else {
        Config::from_default_locations(&cli.project)
    }
}

fn run_bind(config: &Config, cli: &Cli, args: &BindArgs) -> Result<()> {
    let roots = if args.res.is_empty() {
        config.res_roots(&cli.project)
    } else {
        args.res.clone()
    };
    let layouts = LayoutDirectory::scan(&roots, config);
    info!("Indexed {} layouts", layouts.len());

    let (name, root) = select_layout(&layouts, args)?;

    let mut elements = Extractor::with_options(config.extract.clone())
        .with_strict(config.extract.strict && !args.lenient)
        .extract_named(&name, &root, &layouts)
        .wrap_err_with(|| format!("Failed to extract views from layout `{}`", name))?;

    if elements.is_empty() {
        warn!("No views with an id in {}", name);
    }

    if args.click || config.binding.click_handlers {
        for element in elements.iter_mut() {
            element.include_click_handler = true;
        }
    }

    let convention = args
        .naming
        .map(NamingConvention::from)
        .unwrap_or(config.naming.convention);
    let style = args
        .style
        .map(BindingStyle::from)
        .unwrap_or(config.binding.style);
    let access = args.access.as_deref().unwrap_or(&config.binding.access);
    let emitter = style.emitter(access);

    Reporter::new(args.format.into(), args.output.clone()).report(
        &name,
        &mut elements,
        convention,
        emitter.as_ref(),
    )
}

/// Work out which layout to bind: a file path, a layout name, or the
/// `R.layout.<name>` found in `--line`
fn select_layout(layouts: &LayoutDirectory, args: &BindArgs) -> Result<(String, XmlTag)> {
    match (&args.layout, &args.line) {
        (Some(layout), _) if layout.ends_with(".xml") => {
            let path = Path::new(layout);
            let name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or(layout.as_str())
                .to_string();
            Ok((name, load_layout(path)?))
        }
        (Some(layout), _) => Ok((layout.clone(), layouts.root(layout)?)),
        (None, Some(line)) => {
            let name = layout_name_in_line(line)
                .ok_or_else(|| miette::miette!("No R.layout reference in `{}`", line.trim()))?;
            Ok((name.to_string(), layouts.root(name)?))
        }
        (None, None) => Err(miette::miette!(
            "Give a layout name, a layout file, or a source line with --line"
        )),
    }
}

fn run_bean(config: &Config, args: &BeanArgs) -> Result<()> {
    let text = if args.fields == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .into_diagnostic()
            .wrap_err("Failed to read field list from stdin")?;
        text
    } else {
        std::fs::read_to_string(&args.fields)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read field list: {}", args.fields.display()))?
    };

    let fields = parse_fields(&text)?;

    let interfaces = if args.no_interfaces {
        Vec::new()
    } else if !args.implements.is_empty() {
        args.implements.clone()
    } else {
        config.bean.interfaces.clone()
    };

    let spec = BeanSpec {
        class_name: args.name.clone(),
        package: args.package.clone(),
        access: args
            .access
            .clone()
            .unwrap_or_else(|| config.bean.access.clone()),
        interfaces,
    };

    info!("Generating {} with {} fields", spec.class_name, fields.len());
    write_output(args.output.as_ref(), &render_bean(&spec, &fields))
}
