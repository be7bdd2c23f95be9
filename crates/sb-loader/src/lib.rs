//! Sidebar file loading.
//!
//! Reads the sidebar definition named by [`Config`], parses it as JSON or
//! YAML into a [`RawRegistry`] and validates it into an immutable
//! [`SidebarRegistry`] under the configured validation policy.
//!
//! # Example
//!
//! ```ignore
//! use sb_config::Config;
//!
//! let config = Config::load(None, None)?;
//! let registry = sb_loader::load_registry(&config)?;
//! let order = registry.resolve_order("docsSidebar");
//! ```

use std::path::{Path, PathBuf};

use sb_config::{Config, DuplicateEntries, EmptyCategories, ValidationConfig};
use sb_sidebars::{
    DuplicatePolicy, EmptyCategoryPolicy, RawRegistry, SchemaError, SidebarRegistry,
    ValidationPolicy,
};

/// Error loading a sidebar file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Sidebar file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Malformed JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Malformed YAML.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// File extension is neither JSON nor YAML.
    #[error("Unsupported sidebar file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Literal failed structural validation.
    #[error("Invalid sidebars: {0}")]
    Schema(#[from] SchemaError),
}

/// Source format of a sidebar file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Detect the format from a file extension.
    ///
    /// Returns `None` for anything other than `.json`, `.yaml` or `.yml`.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Load and validate the sidebar file named by `config`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or fails validation.
pub fn load_registry(config: &Config) -> Result<SidebarRegistry, LoadError> {
    load_from_path(
        &config.sidebars_resolved.path,
        &policy_from_config(&config.validation),
    )
}

/// Load and validate a sidebar file under an explicit policy.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or fails validation.
pub fn load_from_path(
    path: &Path,
    policy: &ValidationPolicy,
) -> Result<SidebarRegistry, LoadError> {
    let format =
        SourceFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.into()))?;
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw = parse_registry(&content, format)?;
    let registry = SidebarRegistry::validate(&raw, policy)?;

    tracing::info!(
        path = %path.display(),
        sidebar_count = registry.len(),
        warning_count = registry.warnings().len(),
        "Loaded sidebars"
    );

    Ok(registry)
}

/// Parse sidebar file content into the raw literal.
///
/// Empty content yields an empty registry.
///
/// # Errors
///
/// Returns `LoadError::Json` or `LoadError::Yaml` if the content is malformed.
pub fn parse_registry(content: &str, format: SourceFormat) -> Result<RawRegistry, LoadError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(RawRegistry::default());
    }

    let raw = match format {
        SourceFormat::Json => serde_json::from_str(trimmed)?,
        SourceFormat::Yaml => serde_yaml::from_str(trimmed)?,
    };
    Ok(raw)
}

/// Translate configured policies into a [`ValidationPolicy`].
pub fn policy_from_config(validation: &ValidationConfig) -> ValidationPolicy {
    ValidationPolicy {
        duplicate_entries: match validation.duplicate_entries {
            DuplicateEntries::Warn => DuplicatePolicy::Warn,
            DuplicateEntries::Error => DuplicatePolicy::Error,
        },
        empty_categories: match validation.empty_categories {
            EmptyCategories::Allow => EmptyCategoryPolicy::Allow,
            EmptyCategories::Warn => EmptyCategoryPolicy::Warn,
            EmptyCategories::Error => EmptyCategoryPolicy::Error,
        },
    }
}
