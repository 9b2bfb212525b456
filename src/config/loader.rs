use crate::codegen::BindingStyle;
use crate::layout::{ExtractOptions, NamingConvention};
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for layoutbind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Resource roots searched for `layout*` directories, relative to the project
    pub res_dirs: Vec<PathBuf>,

    /// Patterns of paths never indexed as layouts
    pub exclude: Vec<String>,

    /// Extraction behaviour
    pub extract: ExtractOptions,

    /// Field naming
    pub naming: NamingConfig,

    /// View binding output
    pub binding: BindingConfig,

    /// Data-class output
    pub bean: BeanConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// snake, camel or hungarian
    pub convention: NamingConvention,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    /// butter_knife or find_view_by_id
    pub style: BindingStyle,

    /// Generate a click handler for every view
    pub click_handlers: bool,

    /// Access modifier for generated members, empty for package-private
    pub access: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BeanConfig {
    /// Access modifier for fields and accessors
    pub access: String,

    /// Interfaces the generated class implements
    pub interfaces: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            res_dirs: vec![PathBuf::from("app/src/main/res")],
            exclude: vec![
                "**/build/**".to_string(),
                "**/generated/**".to_string(),
                "**/.gradle/**".to_string(),
            ],
            extract: ExtractOptions::default(),
            naming: NamingConfig::default(),
            binding: BindingConfig::default(),
            bean: BeanConfig::default(),
        }
    }
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            style: BindingStyle::ButterKnife,
            click_handlers: false,
            access: String::new(),
        }
    }
}

impl Default for BeanConfig {
    fn default() -> Self {
        Self {
            access: "public".to_string(),
            interfaces: vec!["Serializable".to_string()],
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(project_root: &Path) -> Result<Self> {
        let default_names = [
            ".layoutbind.yml",
            ".layoutbind.yaml",
            ".layoutbind.toml",
            "layoutbind.yml",
            "layoutbind.yaml",
            "layoutbind.toml",
        ];

        for name in &default_names {
            let path = project_root.join(name);
            if path.exists() {
                debug!("Using config file {}", path.display());
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Resource roots resolved against the project directory
    pub fn res_roots(&self, project_root: &Path) -> Vec<PathBuf> {
        self.res_dirs.iter().map(|dir| project_root.join(dir)).collect()
    }

    /// Check if a path matches one of the exclusion patterns
    pub fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy().replace('\\', "/");
        self.exclude.iter().any(|pattern| glob_match(pattern, &path_str))
    }
}

/// Minimal glob matching: `**/dir/**`, `*suffix`, `prefix*` and exact names
fn glob_match(pattern: &str, text: &str) -> bool {
    if let Some(dir) = pattern
        .strip_prefix("**/")
        .and_then(|rest| rest.strip_suffix("/**"))
    {
        // Whole directory names only: "/build/" but not "/buildSrc/"
        return text.contains(&format!("/{}/", dir)) || text.starts_with(&format!("{}/", dir));
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        return text.ends_with(suffix);
    }

    if let Some(prefix) = pattern.strip_suffix('*') {
        return text.starts_with(prefix);
    }

    text == pattern
}
