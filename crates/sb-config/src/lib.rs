//! Configuration management for sidebar registries.
//!
//! Parses `sidebars.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! Embedding engines can override file values during load via
//! [`ConfigOverrides`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `sidebars.path` (an expansion yielding an empty path is rejected; an
//!   absolute result is used as is instead of being joined to the config
//!   directory)

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    /// Override sidebar file path.
    pub sidebars_path: Option<PathBuf>,
    /// Override handling of duplicate sibling entries.
    pub duplicate_entries: Option<DuplicateEntries>,
    /// Override handling of empty categories.
    pub empty_categories: Option<EmptyCategories>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sidebars.toml";

/// Sidebar file used when none is configured.
const DEFAULT_SIDEBARS_PATH: &str = "sidebars.yaml";

/// Accepted sidebar file extensions.
const SIDEBAR_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sidebar file configuration (path is a relative string from TOML).
    sidebars: SidebarsConfigRaw,
    /// Validation policy.
    pub validation: ValidationConfig,

    /// Resolved sidebar file configuration (set after loading).
    #[serde(skip)]
    pub sidebars_resolved: SidebarsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw sidebar file configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SidebarsConfigRaw {
    path: Option<String>,
}

/// Resolved sidebar file configuration with an absolute path.
#[derive(Debug, Default)]
pub struct SidebarsConfig {
    /// Sidebar definition file (`.json`, `.yaml` or `.yml`).
    pub path: PathBuf,
}

/// Validation policy for soft findings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Handling of a document listed twice in one `items` list.
    pub duplicate_entries: DuplicateEntries,
    /// Handling of categories with no items and no link.
    pub empty_categories: EmptyCategories,
}

/// Handling of duplicate sibling entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateEntries {
    /// Log and record a warning.
    #[default]
    Warn,
    /// Abort loading.
    Error,
}

/// Handling of empty categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyCategories {
    /// Accept silently.
    Allow,
    /// Log and record a warning.
    #[default]
    Warn,
    /// Abort loading.
    Error,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`sidebars.path`").
        field: String,
        /// Error message (e.g., "${`DOCS_DIR`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional overrides.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sidebars.toml` in current directory and parents.
    ///
    /// Overrides are applied after loading and path resolution, so they take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply overrides to the configuration.
    fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(path) = &overrides.sidebars_path {
            self.sidebars_resolved.path.clone_from(path);
        }
        if let Some(duplicate_entries) = overrides.duplicate_entries {
            self.validation.duplicate_entries = duplicate_entries;
        }
        if let Some(empty_categories) = overrides.empty_categories {
            self.validation.empty_categories = empty_categories;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            sidebars: SidebarsConfigRaw::default(),
            validation: ValidationConfig::default(),
            sidebars_resolved: SidebarsConfig {
                path: base.join(DEFAULT_SIDEBARS_PATH),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after applying
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_sidebars()
    }

    /// Validate sidebar file configuration.
    fn validate_sidebars(&self) -> Result<(), ConfigError> {
        let path = &self.sidebars_resolved.path;
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "sidebars.path cannot be empty".to_owned(),
            ));
        }

        let extension = path.extension().and_then(|ext| ext.to_str());
        if !extension.is_some_and(|ext| SIDEBAR_EXTENSIONS.contains(&ext)) {
            return Err(ConfigError::Validation(format!(
                "sidebars.path must end with .json, .yaml or .yml: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// Expand environment variables in configured paths and resolve them
    /// against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let sidebars_path = match self.sidebars.path.as_deref() {
            Some(raw) => expand::expand_path(raw, "sidebars.path")?,
            None => PathBuf::from(DEFAULT_SIDEBARS_PATH),
        };
        self.sidebars_resolved = SidebarsConfig {
            path: config_dir.join(sidebars_path),
        };
        Ok(())
    }
}
