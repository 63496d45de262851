//! Facade crate for `DappForge`.
//! Re-exports the domain model, settings loader, validator, generators and packager, and
//! exposes the one-call [`compile`] entry point.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use forge_archive as archive;
pub use forge_compiler as compiler;
pub use forge_domain as domain;
pub use forge_entitlements as entitlements;
pub use forge_kernel as kernel;
pub use forge_programs as programs;
pub use forge_templates as templates;

pub use forge_compiler::{CompilationResult, Compiler};
pub use forge_domain::config::ProjectConfig;

/// Compiles `config` with the standard tier table and the builtin feature registry.
#[must_use]
pub fn compile(config: &ProjectConfig) -> CompilationResult {
    Compiler::default().compile(config)
}

/// Validates `config` against the standard tier table.
#[must_use]
pub fn validate(config: &ProjectConfig) -> entitlements::Verdict {
    entitlements::validate(config, &domain::tiers::TierTable::standard())
}
