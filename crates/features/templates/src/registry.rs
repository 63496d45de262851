//! # Feature Template Registry
//!
//! Maps every [`Feature`] to the pages, API routes, components and data models it contributes.
//! Lookup is total: the registry holds one template per enum variant, built by calling a
//! constructor for each variant, and the built-in constructor is an exhaustive `match`.

use forge_domain::features::Feature;
use forge_domain::template::{FeatureTemplate, RequiredArtifacts};
use std::sync::Arc;
use strum::IntoEnumIterator;

/// Immutable feature -> template table, cheap to clone.
#[derive(Debug, Clone)]
pub struct FeatureRegistry {
    templates: Arc<[FeatureTemplate]>,
}

impl FeatureRegistry {
    /// The registry shipped with the compiler.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_fn(builtin_template)
    }

    /// Builds a registry by asking `make` for every feature.
    pub fn from_fn(make: impl Fn(Feature) -> FeatureTemplate) -> Self {
        Self { templates: Feature::iter().map(make).collect() }
    }

    #[must_use]
    pub fn template_for(&self, feature: Feature) -> &FeatureTemplate {
        &self.templates[feature as usize]
    }

    /// Concatenates the templates of `features` in order; duplicates are kept.
    #[must_use]
    pub fn required_artifacts(&self, features: &[Feature]) -> RequiredArtifacts {
        let mut required = RequiredArtifacts::default();
        for feature in features {
            required.extend(self.template_for(*feature));
        }
        required
    }

    /// `(feature, template)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, &FeatureTemplate)> {
        Feature::iter().map(|feature| (feature, self.template_for(feature)))
    }
}

impl Default for FeatureRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Page slugs are unique across features; routes, components and models may be shared.
const fn builtin_template(feature: Feature) -> FeatureTemplate {
    match feature {
        Feature::Staking => FeatureTemplate {
            pages: &["staking"],
            api_routes: &["stake", "unstake", "rewards"],
            components: &["StakeForm", "RewardsCard"],
            data_models: &["StakePosition"],
        },
        Feature::Governance => FeatureTemplate {
            pages: &["governance"],
            api_routes: &["proposals", "votes"],
            components: &["ProposalCard", "VoteButton"],
            data_models: &["Proposal", "Vote"],
        },
        Feature::Lp => FeatureTemplate {
            pages: &["liquidity"],
            api_routes: &["pools", "liquidity"],
            components: &[],
            data_models: &[],
        },
        Feature::NftMint => FeatureTemplate {
            pages: &["mint"],
            api_routes: &["nft-mint", "metadata"],
            components: &["MintButton", "NftGallery"],
            data_models: &["NftMint"],
        },
        Feature::Dao => FeatureTemplate {
            pages: &["dao", "treasury"],
            api_routes: &["proposals", "treasury", "members"],
            components: &[],
            data_models: &["Proposal", "Member"],
        },
        Feature::Swap => FeatureTemplate {
            pages: &["swap"],
            api_routes: &["quote"],
            components: &["TokenSelect"],
            data_models: &[],
        },
        Feature::Airdrop => FeatureTemplate {
            pages: &["airdrop", "claim"],
            api_routes: &[],
            components: &[],
            data_models: &[],
        },
        Feature::Analytics => FeatureTemplate {
            pages: &["analytics"],
            api_routes: &[],
            components: &[],
            data_models: &[],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;

    #[test]
    fn every_feature_has_a_template() {
        let registry = FeatureRegistry::builtin();
        assert_eq!(registry.iter().count(), Feature::iter().count());
        assert_eq!(registry.template_for(Feature::Staking).pages, ["staking"]);
        assert_eq!(registry.template_for(Feature::Dao).pages, ["dao", "treasury"]);
    }

    #[test]
    fn page_slugs_are_unique_across_features() {
        let registry = FeatureRegistry::builtin();
        let mut seen = FxHashSet::default();
        for (feature, template) in registry.iter() {
            for page in template.pages {
                assert!(seen.insert(*page), "{page} is claimed twice (last by {feature})");
            }
        }
    }

    #[test]
    fn required_artifacts_keep_order_and_duplicates() {
        let registry = FeatureRegistry::builtin();
        let required = registry.required_artifacts(&[Feature::Governance, Feature::Dao]);

        assert_eq!(required.pages, ["governance", "dao", "treasury"]);
        assert_eq!(
            required.api_routes,
            ["proposals", "votes", "proposals", "treasury", "members"]
        );
        assert_eq!(required.unique_api_routes(), ["proposals", "votes", "treasury", "members"]);
        assert_eq!(required.data_models, ["Proposal", "Vote", "Proposal", "Member"]);
    }

    #[test]
    fn empty_selection_requires_nothing() {
        let required = FeatureRegistry::builtin().required_artifacts(&[]);
        assert_eq!(required, RequiredArtifacts::default());
    }

    #[test]
    fn alternate_registry_from_fn() {
        let registry = FeatureRegistry::from_fn(|_| FeatureTemplate {
            api_routes: &["shared"],
            ..FeatureTemplate::default()
        });
        let required = registry.required_artifacts(&[Feature::Swap, Feature::Lp]);
        assert_eq!(required.api_routes, ["shared", "shared"]);
        assert!(required.pages.is_empty());
    }
}
