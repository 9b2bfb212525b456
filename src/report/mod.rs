mod json;
mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

use crate::codegen::Emitter;
use crate::layout::{Element, NamingConvention};
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

/// Output format for `bind`
#[derive(Debug, Clone, Copy, Default)]
pub enum ReportFormat {
    /// Generated Java source
    #[default]
    Code,
    Json,
    /// Colored table of the extracted views
    List,
}

/// Reporter for the views extracted from a layout
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>) -> Self {
        Self { format, output_path }
    }

    pub fn report(
        &self,
        layout: &str,
        elements: &mut [Element],
        convention: NamingConvention,
        emitter: &dyn Emitter,
    ) -> Result<()> {
        match self.format {
            ReportFormat::Code => {
                let code = emitter.emit(elements, convention);
                write_output(self.output_path.as_ref(), &code)
            }
            ReportFormat::Json => {
                let reporter = JsonReporter::new(self.output_path.clone());
                reporter.report(layout, elements, convention)
            }
            ReportFormat::List => {
                let reporter = TerminalReporter::new();
                reporter.report(layout, elements, convention)
            }
        }
    }
}

/// Write text to a file, or to stdout when no path is given
pub fn write_output(path: Option<&PathBuf>, text: &str) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, text).into_diagnostic()?;
        tracing::info!("Written to: {}", path.display());
    } else {
        print!("{}", text);
    }

    Ok(())
}
