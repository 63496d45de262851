use crate::error::ProgramError;
use crate::id::ProgramId;
use crate::template::{fill, rust_string};
use forge_domain::config::StakingParams;

const TEMPLATE: &str = include_str!("../templates/staking_program.rs.tmpl");

/// Identifiers and names the staking program embeds.
#[derive(Debug, Clone, Copy)]
pub struct StakingTarget<'a> {
    pub crate_name: &'a str,
    pub id: &'a ProgramId,
    pub token_crate: &'a str,
    pub token_id: &'a ProgramId,
    pub symbol: &'a str,
}

/// `programs/<symbol>_staking/src/lib.rs`: `initialize`, `stake`, `unstake` and `claim`.
pub fn staking_program(
    target: StakingTarget<'_>,
    params: StakingParams,
) -> Result<String, ProgramError> {
    let program_id = target.id.to_string();
    let token_program_id = target.token_id.to_string();
    let token_symbol = rust_string(target.symbol);
    let rate = params.reward_rate_bps.to_string();
    let lock = params.lock_days.to_string();

    fill(
        TEMPLATE,
        &[
            ("program_id", program_id.as_str()),
            ("token_crate", target.token_crate),
            ("token_program_id", token_program_id.as_str()),
            ("token_symbol", token_symbol.as_str()),
            ("reward_rate_bps", rate.as_str()),
            ("lock_days", lock.as_str()),
            ("crate_name", target.crate_name),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_params_and_token_program() {
        let token_id = ProgramId::derive("ABC", "Acme");
        let id = ProgramId::derive_scoped("ABC", "Acme", "staking");
        let target = StakingTarget {
            crate_name: "abc_staking",
            id: &id,
            token_crate: "abc_token",
            token_id: &token_id,
            symbol: "ABC",
        };

        let source =
            staking_program(target, StakingParams { reward_rate_bps: 1200, lock_days: 14 })
                .unwrap();
        assert!(source.contains(&format!("declare_id!(\"{id}\");")));
        assert!(source.contains(&format!("pub const TOKEN_PROGRAM_ID: &str = \"{token_id}\";")));
        assert!(source.contains("pub const REWARD_RATE_BPS: u64 = 1200;"));
        assert!(source.contains("pub const LOCK_DAYS: i64 = 14;"));
        assert!(source.contains("pub mod abc_staking {"));
        for instruction in ["pub fn stake(", "pub fn unstake(", "pub fn claim("] {
            assert!(source.contains(instruction), "{instruction}");
        }
        assert!(source.contains("StakingError::InsufficientFunds"));
        assert!(!source.contains("{{"));
    }
}
