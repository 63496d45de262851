//! The project configuration submitted for compilation.
//!
//! Field names are `snake_case`, enum values kebab-case. Only `project` is mandatory; every
//! other section falls back to its default.

use crate::features::Feature;
use crate::tiers::{Tier, TierName};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project: ProjectSection,
    #[serde(default)]
    pub token: TokenConfig,
    #[serde(default)]
    pub dapp: DappConfig,
    #[serde(default)]
    pub infra: InfraConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSection {
    pub name: String,
    #[serde(default)]
    pub product: ProductType,
    pub tier: TierName,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProductType {
    TokenLaunch,
    #[default]
    Dapp,
    NftCollection,
    Dao,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub enabled: bool,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub total_supply: u64,
    pub nft: bool,
    pub staking: Option<StakingParams>,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            name: String::new(),
            symbol: String::new(),
            decimals: 9,
            total_supply: 0,
            nft: false,
            staking: None,
        }
    }
}

/// Staking program parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StakingParams {
    /// Annual reward rate in basis points.
    pub reward_rate_bps: u32,
    pub lock_days: u32,
}

impl Default for StakingParams {
    fn default() -> Self {
        Self { reward_rate_bps: 500, lock_days: 7 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DappConfig {
    /// Selected features, in the order they were picked.
    pub features: Vec<Feature>,
    pub brand_color: String,
    /// Extra page slugs beyond those implied by features.
    pub pages: Vec<String>,
}

impl Default for DappConfig {
    fn default() -> Self {
        Self { features: Vec::new(), brand_color: "#6366f1".to_owned(), pages: Vec::new() }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfraConfig {
    pub chain: Chain,
    pub database: Database,
    pub auth: AuthMode,
    pub hosting: Hosting,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Chain {
    #[default]
    Solana,
    Eclipse,
    Sonic,
}

impl Chain {
    /// Public devnet RPC endpoint used in generated environment templates.
    #[must_use]
    pub const fn devnet_rpc(self) -> &'static str {
        match self {
            Self::Solana => "https://api.devnet.solana.com",
            Self::Eclipse => "https://testnet.dev2.eclipsenetwork.xyz",
            Self::Sonic => "https://api.testnet.sonic.game",
        }
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Database {
    #[default]
    None,
    Postgres,
    Mysql,
    Sqlite,
}

impl Database {
    /// Prisma datasource provider, if a database is configured.
    #[must_use]
    pub const fn prisma_provider(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Postgres => Some("postgresql"),
            Self::Mysql => Some("mysql"),
            Self::Sqlite => Some("sqlite"),
        }
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AuthMode {
    #[default]
    Wallet,
    Email,
    WalletAndEmail,
}

impl AuthMode {
    #[must_use]
    pub const fn uses_wallet(self) -> bool {
        matches!(self, Self::Wallet | Self::WalletAndEmail)
    }

    #[must_use]
    pub const fn uses_email(self) -> bool {
        matches!(self, Self::Email | Self::WalletAndEmail)
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Hosting {
    #[default]
    Vercel,
    Netlify,
    SelfHosted,
}

impl ProjectConfig {
    /// Minimal configuration with default sections.
    pub fn new(name: impl Into<String>, tier: Tier) -> Self {
        Self {
            project: ProjectSection {
                name: name.into(),
                product: ProductType::default(),
                tier: tier.into(),
            },
            token: TokenConfig::default(),
            dapp: DappConfig::default(),
            infra: InfraConfig::default(),
        }
    }

    #[must_use]
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.dapp.features.contains(&feature)
    }

    /// Staking parameters in effect: present only when the token is enabled and the
    /// `staking` feature is selected, defaulting when none were given.
    #[must_use]
    pub fn staking(&self) -> Option<StakingParams> {
        (self.token.enabled && self.has_feature(Feature::Staking))
            .then(|| self.token.staking.unwrap_or_default())
    }

    /// Lowercase, dash-separated form of the project name, e.g. `"Acme Swap!"` -> `"acme-swap"`.
    ///
    /// Falls back to `"project"` when the name has no ASCII alphanumerics.
    #[must_use]
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.project.name.len());
        for c in self.project.name.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        if slug.is_empty() { "project".to_owned() } else { slug }
    }
}
