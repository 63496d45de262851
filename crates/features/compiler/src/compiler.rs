use crate::error::CompileError;
use crate::phase::Phase;
use crate::pipeline::Build;
use crate::result::{
    CompilationManifest, CompilationResult, CompiledPackage, ManifestEntry, sha256_hex,
};
use forge_archive::Packager;
use forge_domain::config::ProjectConfig;
use forge_domain::tiers::TierTable;
use forge_entitlements::{Validator, Verdict};
use forge_templates::FeatureRegistry;
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::{error, info, instrument};
use typed_builder::TypedBuilder;

const GENERATION: [Phase; 4] =
    [Phase::Structure, Phase::ProgramSources, Phase::FeatureFiles, Phase::ConfigDocs];

/// Turns a [`ProjectConfig`] into a packaged source archive.
///
/// Lookup tables are injected once and shared: cloning a `Compiler` is cheap and clones can be
/// used from several threads.
///
/// ```rust
/// use forge_compiler::Compiler;
/// use forge_domain::config::ProjectConfig;
/// use forge_domain::tiers::Tier;
///
/// let compiler = Compiler::builder().build();
/// let result = compiler.compile(&ProjectConfig::new("Acme", Tier::Starter));
/// assert!(result.is_success());
/// ```
#[derive(Debug, Clone, TypedBuilder)]
pub struct Compiler {
    #[builder(default)]
    tiers: TierTable,
    #[builder(default)]
    registry: FeatureRegistry,
    #[builder(default)]
    packager: Packager,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Compiler {
    #[must_use]
    pub const fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    #[must_use]
    pub const fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    /// Runs only the validation phase.
    #[must_use]
    pub fn validate(&self, config: &ProjectConfig) -> Verdict {
        Validator::new(self.tiers.clone(), self.registry.clone()).validate(config)
    }

    /// Validates `config`, generates every file and packages them.
    ///
    /// Invalid input yields [`CompilationResult::Rejected`] before any file is generated. Any
    /// error or panic during generation or packaging yields [`CompilationResult::Failed`] with
    /// a generic message; the cause is logged, never returned.
    #[instrument(skip_all, fields(project = %config.project.name, tier = %config.project.tier))]
    pub fn compile(&self, config: &ProjectConfig) -> CompilationResult {
        let verdict = self.validate(config);
        if !verdict.valid {
            info!(errors = verdict.errors.len(), "Compilation rejected");
            return CompilationResult::Rejected { errors: verdict.errors };
        }

        match self.guarded(config) {
            Ok(package) => {
                info!(
                    files = package.file_count,
                    bytes = package.archive.len(),
                    "Compilation succeeded"
                );
                CompilationResult::Compiled(package)
            },
            Err(fault) => {
                error!(
                    phase = %fault.phase,
                    kind = fault.kind,
                    cause = %fault.cause,
                    "Compilation failed"
                );
                CompilationResult::failed()
            },
        }
    }

    /// Runs generation and packaging, turning errors and panics into a [`Fault`] tagged with
    /// the phase that was running.
    fn guarded(&self, config: &ProjectConfig) -> Result<CompiledPackage, Fault> {
        let mut phase = Phase::Validate;
        let outcome = catch_unwind(AssertUnwindSafe(|| self.generate(config, &mut phase)));

        match outcome {
            Ok(Ok(package)) => Ok(package),
            Ok(Err(err)) => Err(Fault { phase, kind: err.kind(), cause: err.to_string() }),
            Err(payload) => Err(Fault {
                phase,
                kind: "panic",
                cause: panic_message(payload.as_ref()).to_owned(),
            }),
        }
    }

    fn generate(
        &self,
        config: &ProjectConfig,
        phase: &mut Phase,
    ) -> Result<CompiledPackage, CompileError> {
        let mut build = Build::new(config, &self.registry);
        for next in GENERATION {
            *phase = next;
            build.run(next)?;
        }

        *phase = Phase::Packaging;
        let packed = self.packager.pack(&build.files)?;

        let programs = build.programs.as_ref();
        let manifest = CompilationManifest {
            project: config.project.name.clone(),
            tier: config.project.tier.clone(),
            token_program: programs.map(|set| set.token_id().to_string()),
            staking_program: programs.and_then(|set| set.staking_id()).map(ToString::to_string),
            archive_sha256: sha256_hex(&packed.bytes),
            archive_bytes: packed.bytes.len(),
            entries: ManifestEntry::list(&build.files),
        };

        *phase = Phase::Done;
        Ok(CompiledPackage { file_count: packed.member_count, archive: packed.bytes, manifest })
    }
}

/// An internal generation fault. Logged, never returned to the caller.
#[derive(Debug)]
struct Fault {
    phase: Phase,
    kind: &'static str,
    cause: String,
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
