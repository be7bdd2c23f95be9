//! `${VAR}` and `${VAR:-default}` expansion for configured paths.

use std::env::VarError;
use std::path::PathBuf;

use crate::ConfigError;

/// Expand environment variable references in a configured path.
///
/// Values without `${` are taken literally, so a bare `$` stays as written.
/// An expansion that leaves nothing but whitespace is an error: it would
/// otherwise resolve to the config directory itself.
pub(crate) fn expand_path(value: &str, field: &str) -> Result<PathBuf, ConfigError> {
    if !value.contains("${") {
        return Ok(PathBuf::from(value));
    }

    let expanded = shellexpand::env_with_context(value, |var| std::env::var(var).map(Some))
        .map_err(|e| {
            let message = match e.cause {
                VarError::NotPresent => format!("${{{}}} not set", e.var_name),
                VarError::NotUnicode(_) => format!("${{{}}} is not valid unicode", e.var_name),
            };
            ConfigError::EnvVar {
                field: field.to_owned(),
                message,
            }
        })?;

    if expanded.trim().is_empty() {
        return Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("`{value}` expands to an empty path"),
        });
    }

    Ok(PathBuf::from(expanded.into_owned()))
}
