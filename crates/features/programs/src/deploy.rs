use crate::error::ProgramError;
use crate::id::ProgramId;
use crate::template::{fill, ts_string};
use forge_domain::config::ProjectConfig;

const TEMPLATE: &str = include_str!("../templates/deploy_token.ts.tmpl");

/// `deploy/deploy-token.ts`: initializes the token mint on the configured cluster.
pub fn deploy_script(
    config: &ProjectConfig,
    token: &ProgramId,
    staking: Option<&ProgramId>,
) -> Result<String, ProgramError> {
    let token_program_id = token.to_string();
    let staking_program_id =
        staking.map_or_else(|| String::from("null"), |id| ts_string(&id.to_string()));
    let token_name = ts_string(&config.token.name);
    let token_symbol = ts_string(&config.token.symbol);
    let rpc_url = ts_string(config.infra.chain.devnet_rpc());

    fill(
        TEMPLATE,
        &[
            ("token_program_id", token_program_id.as_str()),
            ("staking_program_id", staking_program_id.as_str()),
            ("token_name", token_name.as_str()),
            ("token_symbol", token_symbol.as_str()),
            ("rpc_url", rpc_url.as_str()),
        ],
    )
}
