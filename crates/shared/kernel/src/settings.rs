//! Runtime settings for the command-line front end.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ForgeSettings {
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

/// Where and how compiled archives are written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub dir: PathBuf,
    /// Wall-clock budget for persisting one archive.
    pub write_budget_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    /// Enables rolling file logs in this directory.
    pub dir: Option<PathBuf>,
    /// JSON lines for the file log.
    pub json: bool,
}

impl OutputSettings {
    #[must_use]
    pub const fn write_budget(&self) -> Duration {
        Duration::from_secs(self.write_budget_secs)
    }
}

// --- Default ---

impl Default for OutputSettings {
    fn default() -> Self {
        Self { dir: PathBuf::from("dist"), write_budget_secs: 30 }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: "warn".to_owned(), dir: None, json: false }
    }
}
