//! # Program Source Generator
//!
//! Produces the Anchor workspace of a token project: the token program, an optional staking
//! program, their manifests and a deployment script. Program identifiers are derived
//! deterministically from the token symbol and the project name.

pub mod deploy;
mod error;
pub mod id;
pub mod staking;
mod template;
pub mod token;
pub mod workspace;

pub use crate::error::{ProgramError, ProgramErrorExt};
pub use crate::id::ProgramId;

use crate::staking::StakingTarget;
use crate::workspace::ProgramCrate;
use forge_domain::config::ProjectConfig;
use tracing::debug;

/// Scope mixed into the staking program identifier.
pub const STAKING_SCOPE: &str = "staking";

/// Largest decimal count the generated mint accepts.
pub const MAX_DECIMALS: u32 = 18;

/// Generated program sources in emission order, with the identifiers they embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSet {
    pub token: ProgramCrate,
    pub staking: Option<ProgramCrate>,
    pub files: Vec<(String, String)>,
}

impl ProgramSet {
    #[must_use]
    pub const fn token_id(&self) -> &ProgramId {
        &self.token.id
    }

    #[must_use]
    pub fn staking_id(&self) -> Option<&ProgramId> {
        self.staking.as_ref().map(|program| &program.id)
    }
}

/// Generates every on-chain file for `config`.
///
/// The token must be enabled, its symbol must be 2 to 10 uppercase ASCII letters since crate
/// names derive from it, and its decimals must fit [`MAX_DECIMALS`]. A staking crate is added
/// when staking is selected.
pub fn generate(config: &ProjectConfig) -> Result<ProgramSet, ProgramError> {
    if !config.token.enabled {
        return Err(ProgramError::TokenDisabled { context: None });
    }

    let symbol = config.token.symbol.as_str();
    if !(2..=10).contains(&symbol.len()) || !symbol.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(ProgramError::InvalidSymbol { symbol: symbol.to_owned(), context: None });
    }
    if config.token.decimals > MAX_DECIMALS {
        return Err(ProgramError::InvalidDecimals {
            decimals: config.token.decimals,
            max: MAX_DECIMALS,
            context: None,
        });
    }

    let project = config.project.name.as_str();
    let prefix = symbol.to_ascii_lowercase();

    let token = ProgramCrate {
        name: format!("{prefix}_token"),
        id: ProgramId::derive(symbol, project),
    };
    let staking = config.staking().map(|params| {
        let program = ProgramCrate {
            name: format!("{prefix}_staking"),
            id: ProgramId::derive_scoped(symbol, project, STAKING_SCOPE),
        };
        (program, params)
    });

    let mut crates = vec![token.clone()];
    crates.extend(staking.iter().map(|(program, _)| program.clone()));

    let mut files = vec![
        ("Anchor.toml".to_owned(), workspace::anchor_toml(&crates, config.infra.chain)),
        ("Cargo.toml".to_owned(), workspace::workspace_manifest()),
        (
            token.manifest_path(),
            workspace::program_manifest(&token, &format!("{symbol} token program")),
        ),
        (token.source_path(), token::token_program(&config.token, &token.name, &token.id)?),
    ];

    if let Some((program, params)) = &staking {
        let target = StakingTarget {
            crate_name: &program.name,
            id: &program.id,
            token_crate: &token.name,
            token_id: &token.id,
            symbol,
        };
        files.push((
            program.manifest_path(),
            workspace::program_manifest(program, &format!("{symbol} staking program")),
        ));
        files.push((program.source_path(), staking::staking_program(target, *params)?));
    }

    let staking_id = staking.as_ref().map(|(program, _)| &program.id);
    files.push((
        "deploy/deploy-token.ts".to_owned(),
        deploy::deploy_script(config, &token.id, staking_id).context("rendering deploy script")?,
    ));

    debug!(
        token = %token.id,
        staking = staking.is_some(),
        files = files.len(),
        "Program sources generated"
    );

    Ok(ProgramSet { token, staking: staking.map(|(program, _)| program), files })
}
