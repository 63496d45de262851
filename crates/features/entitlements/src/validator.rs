//! # Configuration Validation
//!
//! Checks a [`ProjectConfig`] against a [`TierTable`] before any file is generated.
//! Validation never fails: it collects every violation into a [`Verdict`].
//!
//! Rules, in order:
//! 1. The tier must exist in the table; otherwise the verdict carries that single error.
//! 2. The feature count must not exceed the tier's `max_features`.
//! 3. Every selected feature must be unlocked by the tier, unless the tier is [`Tier::TOP`].
//! 4. The project name must be non-empty after trimming and at most 50 characters.
//! 5. An enabled token needs a name, a 2-10 letter uppercase symbol, a positive supply,
//!    at most 18 decimals and a reward rate within 100%.
//! 6. The brand color must be `#RRGGBB`.
//! 7. Custom pages must fit `max_pages` and be lowercase dash-separated slugs (not `api`).
//! 8. The distinct API routes implied by the features must fit `max_api_routes`.

use forge_domain::config::ProjectConfig;
use forge_domain::features::Feature;
use forge_domain::tiers::{Tier, TierLimits, TierTable};
use forge_templates::registry::FeatureRegistry;
use fxhash::FxHashSet;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

pub const MAX_PROJECT_NAME_CHARS: usize = 50;
pub const MAX_TOKEN_NAME_CHARS: usize = 32;
pub const MAX_DECIMALS: u32 = 18;
pub const MAX_REWARD_RATE_BPS: u32 = 10_000;
pub const RESERVED_PAGE_SLUGS: &[&str] = &["api"];

static SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,10}$").expect("symbol pattern is valid"));
static BRAND_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("color pattern is valid"));
static PAGE_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// Outcome of a validation pass. `valid` is true exactly when `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl Verdict {
    fn from_errors(errors: Vec<String>) -> Self {
        Self { valid: errors.is_empty(), errors }
    }
}

/// Validator bound to a tier table and the registry used to size API routes.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    tiers: TierTable,
    registry: FeatureRegistry,
}

impl Validator {
    #[must_use]
    pub const fn new(tiers: TierTable, registry: FeatureRegistry) -> Self {
        Self { tiers, registry }
    }

    #[must_use]
    pub const fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    /// Runs every rule and reports all violations.
    #[must_use]
    pub fn validate(&self, config: &ProjectConfig) -> Verdict {
        let name = &config.project.tier;
        let Some((tier, limits)) =
            name.known().and_then(|tier| self.tiers.get(tier).map(|limits| (tier, limits)))
        else {
            debug!(tier = %name, "Unknown tier");
            return Verdict::from_errors(vec![format!("Unknown tier '{name}'")]);
        };

        let mut errors = Vec::new();
        check_entitlements(config, tier, limits, &mut errors);
        check_project(config, &mut errors);
        check_token(config, &mut errors);
        check_branding(config, &mut errors);
        check_pages(config, tier, limits, &mut errors);
        self.check_api_routes(config, tier, limits, &mut errors);

        debug!(project = %config.project.name, %tier, errors = errors.len(), "Validated config");
        Verdict::from_errors(errors)
    }

    fn check_api_routes(
        &self,
        config: &ProjectConfig,
        tier: Tier,
        limits: &TierLimits,
        errors: &mut Vec<String>,
    ) {
        let routes = self.registry.required_artifacts(&config.dapp.features).unique_api_routes();
        if !TierLimits::admits(limits.max_api_routes, routes.len()) {
            errors.push(format!(
                "Selected features need {} API routes, but tier '{tier}' allows at most {}",
                routes.len(),
                limits.max_api_routes.unwrap_or_default()
            ));
        }
    }
}

/// Validates against `tiers` with the built-in feature registry.
#[must_use]
pub fn validate(config: &ProjectConfig, tiers: &TierTable) -> Verdict {
    Validator::new(tiers.clone(), FeatureRegistry::builtin()).validate(config)
}

fn check_entitlements(
    config: &ProjectConfig,
    tier: Tier,
    limits: &TierLimits,
    errors: &mut Vec<String>,
) {
    let features = &config.dapp.features;
    if !TierLimits::admits(limits.max_features, features.len()) {
        errors.push(format!(
            "Tier '{tier}' allows at most {} features, but {} were selected",
            limits.max_features.unwrap_or_default(),
            features.len()
        ));
    }

    if tier.is_top() {
        return;
    }

    let mut reported: FxHashSet<Feature> = FxHashSet::default();
    for feature in features {
        if !limits.unlocked.has(*feature) && reported.insert(*feature) {
            errors.push(format!("Feature '{feature}' requires a higher tier than '{tier}'"));
        }
    }
}

fn check_project(config: &ProjectConfig, errors: &mut Vec<String>) {
    let name = config.project.name.trim();
    if name.is_empty() {
        errors.push("Project name is required".to_owned());
    } else if config.project.name.chars().count() > MAX_PROJECT_NAME_CHARS {
        errors.push(format!("Project name must be at most {MAX_PROJECT_NAME_CHARS} characters"));
    }
}

fn check_token(config: &ProjectConfig, errors: &mut Vec<String>) {
    let token = &config.token;
    if !token.enabled {
        return;
    }

    let name = token.name.trim();
    if name.is_empty() {
        errors.push("Token name is required when the token is enabled".to_owned());
    } else if token.name.chars().count() > MAX_TOKEN_NAME_CHARS {
        errors.push(format!("Token name must be at most {MAX_TOKEN_NAME_CHARS} characters"));
    }

    if !SYMBOL.is_match(&token.symbol) {
        errors.push(format!(
            "Token symbol '{}' must be 2-10 uppercase letters (A-Z)",
            token.symbol
        ));
    }

    if token.total_supply == 0 {
        errors.push("Token total supply must be greater than zero".to_owned());
    }

    if token.decimals > MAX_DECIMALS {
        errors.push(format!(
            "Token decimals must be between 0 and {MAX_DECIMALS}, got {}",
            token.decimals
        ));
    }

    if let Some(staking) = token.staking
        && staking.reward_rate_bps > MAX_REWARD_RATE_BPS
    {
        errors.push(format!(
            "Staking reward rate must be at most {MAX_REWARD_RATE_BPS} bps, got {}",
            staking.reward_rate_bps
        ));
    }
}

fn check_branding(config: &ProjectConfig, errors: &mut Vec<String>) {
    let color = &config.dapp.brand_color;
    if !BRAND_COLOR.is_match(color) {
        errors.push(format!("Brand color '{color}' must be a hex color like #6366f1"));
    }
}

fn check_pages(config: &ProjectConfig, tier: Tier, limits: &TierLimits, errors: &mut Vec<String>) {
    let pages = &config.dapp.pages;
    if !TierLimits::admits(limits.max_pages, pages.len()) {
        errors.push(format!(
            "Tier '{tier}' allows at most {} custom pages, but {} were requested",
            limits.max_pages.unwrap_or_default(),
            pages.len()
        ));
    }

    for page in pages {
        if !PAGE_SLUG.is_match(page) {
            errors.push(format!(
                "Page '{page}' must be lowercase letters, digits and single dashes"
            ));
        } else if RESERVED_PAGE_SLUGS.contains(&page.as_str()) {
            errors.push(format!("Page '{page}' is reserved"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_domain::features::FeatureSet;
    use forge_domain::tiers::TierName;

    fn professional() -> ProjectConfig {
        let mut config = ProjectConfig::new("Acme", Tier::Professional);
        config.token.enabled = true;
        config.token.name = "Acme Token".to_owned();
        config.token.symbol = "ABC".to_owned();
        config.token.decimals = 9;
        config.token.total_supply = 1_000_000;
        config.dapp.brand_color = "#6366f1".to_owned();
        config.dapp.features = vec![Feature::Staking];
        config
    }

    #[test]
    fn professional_staking_is_valid() {
        let verdict = validate(&professional(), &TierTable::standard());
        assert!(verdict.valid, "{:?}", verdict.errors);
        assert!(verdict.errors.is_empty());
    }

    #[test]
    fn starter_staking_requires_higher_tier() {
        let mut config = professional();
        config.project.tier = Tier::Starter.into();

        let verdict = validate(&config, &TierTable::standard());
        assert!(!verdict.valid);
        assert_eq!(verdict.errors, ["Feature 'staking' requires a higher tier than 'starter'"]);
    }

    #[test]
    fn duplicate_locked_features_are_reported_once() {
        let mut config = professional();
        config.project.tier = Tier::Starter.into();
        config.dapp.features = vec![Feature::Staking, Feature::Staking];

        let verdict = validate(&config, &TierTable::standard());
        assert_eq!(verdict.errors.len(), 1);
    }

    #[test]
    fn unknown_tier_short_circuits() {
        let tiers: TierTable = TierTable::standard()
            .iter()
            .filter(|(tier, _)| *tier != Tier::Professional)
            .map(|(tier, limits)| (tier, *limits))
            .collect();
        let mut config = professional();
        config.project.name = String::new();
        config.dapp.brand_color = "blue".to_owned();

        let verdict = validate(&config, &tiers);
        assert_eq!(verdict.errors, ["Unknown tier 'professional'"]);
    }

    #[test]
    fn unrecognised_tier_name_yields_a_verdict() {
        let mut config = professional();
        config.project.tier = TierName::Unknown("gold".to_owned());
        config.dapp.brand_color = "blue".to_owned();

        let verdict = validate(&config, &TierTable::standard());
        assert!(!verdict.valid);
        assert_eq!(verdict.errors, ["Unknown tier 'gold'"]);
    }

    #[test]
    fn oversized_decimals_are_reported_with_other_errors() {
        let mut config = professional();
        config.token.decimals = 300;
        config.dapp.brand_color = "blue".to_owned();

        let verdict = validate(&config, &TierTable::standard());
        assert_eq!(verdict.errors.len(), 2);
        assert_eq!(verdict.errors[0], "Token decimals must be between 0 and 18, got 300");
        assert!(verdict.errors[1].contains("blue"));
    }

    #[test]
    fn enterprise_bypasses_unlocked_list() {
        let tiers: TierTable = TierTable::standard()
            .iter()
            .map(|(tier, limits)| {
                let mut limits = *limits;
                limits.unlocked = FeatureSet::empty();
                (tier, limits)
            })
            .collect();
        let mut config = professional();
        config.project.tier = Tier::Enterprise.into();
        config.dapp.features = vec![Feature::Dao, Feature::Swap];

        assert!(validate(&config, &tiers).valid);
    }

    #[test]
    fn name_length_counts_characters() {
        let mut config = professional();
        config.project.name = "é".repeat(MAX_PROJECT_NAME_CHARS);
        assert!(validate(&config, &TierTable::standard()).valid);

        config.project.name.push('é');
        assert!(!validate(&config, &TierTable::standard()).valid);
    }

    #[test]
    fn whitespace_name_is_missing() {
        let mut config = professional();
        config.project.name = "   ".to_owned();
        let verdict = validate(&config, &TierTable::standard());
        assert_eq!(verdict.errors, ["Project name is required"]);
    }

    #[test]
    fn disabled_token_skips_token_rules() {
        let mut config = professional();
        config.token.enabled = false;
        config.token.symbol = "ab".to_owned();
        config.token.total_supply = 0;
        assert!(validate(&config, &TierTable::standard()).valid);
    }

    #[test]
    fn token_rules_collect_every_violation() {
        let mut config = professional();
        config.token.name = String::new();
        config.token.symbol = "ab".to_owned();
        config.token.total_supply = 0;
        config.token.decimals = 19;
        config.token.staking =
            Some(forge_domain::config::StakingParams { reward_rate_bps: 10_001, lock_days: 1 });

        let verdict = validate(&config, &TierTable::standard());
        assert_eq!(verdict.errors.len(), 5, "{:?}", verdict.errors);
        assert!(verdict.errors[1].contains("symbol 'ab'"));
    }

    #[test]
    fn page_rules() {
        let mut config = professional();
        config.dapp.pages = vec!["about".into(), "api".into(), "Team".into(), "a--b".into()];

        let verdict = validate(&config, &TierTable::standard());
        assert_eq!(verdict.errors.len(), 3, "{:?}", verdict.errors);
        assert_eq!(verdict.errors[0], "Page 'api' is reserved");
    }

    #[test]
    fn starter_page_budget() {
        let mut config = ProjectConfig::new("Acme", Tier::Starter);
        config.dapp.pages = (0..6).map(|i| format!("page-{i}")).collect();

        let verdict = validate(&config, &TierTable::standard());
        assert_eq!(
            verdict.errors,
            ["Tier 'starter' allows at most 5 custom pages, but 6 were requested"]
        );
    }

    #[test]
    fn api_route_budget_counts_distinct_routes() {
        let mut tiers: Vec<(Tier, TierLimits)> =
            TierTable::standard().iter().map(|(tier, limits)| (tier, *limits)).collect();
        for (tier, limits) in &mut tiers {
            if *tier == Tier::Enterprise {
                limits.max_api_routes = Some(4);
            }
        }
        let tiers: TierTable = tiers.into_iter().collect();

        let mut config = professional();
        config.project.tier = Tier::Enterprise.into();
        config.dapp.features = vec![Feature::Governance, Feature::Dao];
        assert!(validate(&config, &tiers).valid, "proposals is shared");

        config.dapp.features.push(Feature::Swap);
        let verdict = validate(&config, &tiers);
        assert_eq!(
            verdict.errors,
            ["Selected features need 5 API routes, but tier 'enterprise' allows at most 4"]
        );
    }
}
