use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};

/// Compilation phases, in execution order.
///
/// `Validate` either ends the run (rejected) or hands over to the generation phases.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Phase {
    Validate,
    Structure,
    ProgramSources,
    FeatureFiles,
    ConfigDocs,
    Packaging,
    Done,
}
