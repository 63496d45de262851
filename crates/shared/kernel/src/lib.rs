//! Kernel utilities shared across the workspace.
//! Keep this crate lightweight: it owns settings loading and the runtime settings schema.
//!
//! ## Config loading
//! ```rust,no_run
//! use forge_kernel::config::load_config;
//! use forge_kernel::settings::ForgeSettings;
//!
//! let settings: ForgeSettings = load_config(Some("forge.toml")).unwrap_or_default();
//! assert!(settings.output.write_budget_secs > 0);
//! ```
pub mod config;
pub mod settings;

pub use crate::config::{ConfigError, ConfigErrorExt};
