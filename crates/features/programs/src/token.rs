use crate::error::ProgramError;
use crate::id::ProgramId;
use crate::template::{fill, rust_string};
use forge_domain::config::TokenConfig;

const TEMPLATE: &str = include_str!("../templates/token_program.rs.tmpl");

/// `programs/<symbol>_token/src/lib.rs`: `initialize`, `open_holder`, `mint_to` and `transfer`.
///
/// Non-fungible tokens keep the same instruction set; minting is limited to one unit per call.
pub fn token_program(
    token: &TokenConfig,
    crate_name: &str,
    id: &ProgramId,
) -> Result<String, ProgramError> {
    let program_id = id.to_string();
    let token_name = rust_string(&token.name);
    let token_symbol = rust_string(&token.symbol);
    let decimals = token.decimals.to_string();
    let max_supply = token.total_supply.to_string();
    let non_fungible = token.nft.to_string();

    fill(
        TEMPLATE,
        &[
            ("program_id", program_id.as_str()),
            ("token_name", token_name.as_str()),
            ("token_symbol", token_symbol.as_str()),
            ("decimals", decimals.as_str()),
            ("max_supply", max_supply.as_str()),
            ("non_fungible", non_fungible.as_str()),
            ("crate_name", crate_name),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> TokenConfig {
        TokenConfig {
            enabled: true,
            name: "Acme \"Gold\"".to_owned(),
            symbol: "ABC".to_owned(),
            decimals: 6,
            total_supply: 1_000_000,
            ..TokenConfig::default()
        }
    }

    #[test]
    fn embeds_parameters() {
        let id = ProgramId::derive("ABC", "Acme");
        let source = token_program(&token(), "abc_token", &id).unwrap();

        assert!(source.contains(&format!("declare_id!(\"{id}\");")));
        assert!(source.contains(r#"pub const TOKEN_NAME: &str = "Acme \"Gold\"";"#));
        assert!(source.contains("pub const DECIMALS: u8 = 6;"));
        assert!(source.contains("pub const MAX_SUPPLY: u64 = 1000000;"));
        assert!(source.contains("pub const IS_NON_FUNGIBLE: bool = false;"));
        assert!(source.contains("pub mod abc_token {"));
        assert!(!source.contains("{{"));
    }

    #[test]
    fn uses_checked_arithmetic_and_insufficient_funds() {
        let id = ProgramId::derive("ABC", "Acme");
        let source = token_program(&token(), "abc_token", &id).unwrap();
        for instruction in ["pub fn initialize(", "pub fn mint_to(", "pub fn transfer("] {
            assert!(source.contains(instruction), "{instruction}");
        }
        let guard = "require!(from.balance >= amount, TokenError::InsufficientFunds);";
        assert!(source.contains(guard));
        assert!(source.contains("checked_add(amount)"));
        assert!(source.contains("checked_sub(amount)"));
    }

    #[test]
    fn nft_flag_reaches_source() {
        let mut token = token();
        token.nft = true;
        let source = token_program(&token, "abc_token", &ProgramId::derive("ABC", "Acme")).unwrap();
        assert!(source.contains("pub const IS_NON_FUNGIBLE: bool = true;"));
    }
}
