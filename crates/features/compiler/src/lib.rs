//! # Compiler Orchestrator
//!
//! `Validate → Structure → ProgramSources → FeatureFiles → ConfigDocs → Packaging → Done`.
//!
//! Validation failures stop the run before anything is generated. Generation faults, including
//! panics, are caught at [`Compiler::compile`] and reported as one generic error, so a caller
//! receives either a complete archive or no archive at all.

mod compiler;
mod error;
mod phase;
mod pipeline;
mod result;

pub use crate::compiler::Compiler;
pub use crate::error::{CompileError, CompileErrorExt};
pub use crate::phase::Phase;
pub use crate::result::{
    CompilationManifest, CompilationResult, CompiledPackage, GENERIC_FAILURE, ManifestEntry,
};
