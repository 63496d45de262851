use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Prefix for environment overrides (`FORGE__OUTPUT__DIR` -> `output.dir`).
pub const ENV_PREFIX: &str = "FORGE";

/// Base name of the settings file looked up in the working directory when none is given.
pub const DEFAULT_SETTINGS_FILE: &str = "forge";

/// Custom error type for config loading.
#[forge_derive::forge_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads runtime settings: a file layer plus `FORGE__`-prefixed environment overrides.
///
/// 1. **Base File**: `path` when given (must exist); otherwise an optional `forge.{toml,json,yaml}`
///    in the working directory.
/// 2. **Environment Overrides**: nested keys are joined with double underscores
///    (e.g., `FORGE__LOGGING__LEVEL` maps to `logging.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is malformed,
/// or the merged tree does not match `T`.
///
/// # Example
/// ```rust
/// use forge_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     retries: u8,
/// }
///
/// let cfg: Settings = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(p) => {
            debug!(path = %p.as_ref().display(), "Loading settings");
            File::from(p.as_ref()).required(true)
        },
        None => {
            debug!(name = DEFAULT_SETTINGS_FILE, "Loading optional settings file");
            File::with_name(DEFAULT_SETTINGS_FILE).required(false)
        },
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<T>()
        .context("Failed to deserialize settings")?;

    Ok(config)
}

/// Loads a single document (TOML, JSON or YAML by extension) without environment overlay.
///
/// Used for project configurations, which must compile the same way on every machine.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, unparsable, or does not match `T`.
pub fn load_document<T>(path: impl AsRef<Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading document");

    let document = Config::builder()
        .add_source(File::from(path).required(true))
        .build()
        .context(format!("Failed to read {}", path.display()))?
        .try_deserialize::<T>()
        .context(format!("Invalid document {}", path.display()))?;

    Ok(document)
}
