//! Product tiers and their entitlement limits.

use crate::features::FeatureSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// A purchasable product tier, ordered from lowest to highest.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Tier {
    Starter,
    Professional,
    Enterprise,
}

impl Tier {
    /// The tier that implicitly unlocks every feature.
    pub const TOP: Self = Self::Enterprise;

    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self, Self::TOP)
    }
}

/// A tier as written in a project document.
///
/// Names outside [`Tier`] survive deserialization so that validation can report them in its
/// verdict instead of the document failing to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TierName {
    Known(Tier),
    Unknown(String),
}

impl TierName {
    #[must_use]
    pub const fn known(&self) -> Option<Tier> {
        match self {
            Self::Known(tier) => Some(*tier),
            Self::Unknown(_) => None,
        }
    }
}

impl From<Tier> for TierName {
    fn from(tier: Tier) -> Self {
        Self::Known(tier)
    }
}

impl PartialEq<Tier> for TierName {
    fn eq(&self, other: &Tier) -> bool {
        self.known() == Some(*other)
    }
}

impl fmt::Display for TierName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(tier) => fmt::Display::fmt(tier, f),
            Self::Unknown(name) => f.write_str(name),
        }
    }
}

/// Limits attached to a tier. `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLimits {
    pub max_pages: Option<u32>,
    pub max_features: Option<u32>,
    pub max_api_routes: Option<u32>,
    pub custom_domain: bool,
    pub unlocked: FeatureSet,
}

impl TierLimits {
    /// An unbounded limit admits any count; a bounded one admits `count <= max`.
    #[must_use]
    pub fn admits(limit: Option<u32>, count: usize) -> bool {
        limit.is_none_or(|max| u32::try_from(count).is_ok_and(|count| count <= max))
    }
}

/// Immutable `Tier -> TierLimits` lookup, cheap to clone.
///
/// Alternate tables may omit tiers; callers must treat a missing tier as unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    inner: Arc<BTreeMap<Tier, TierLimits>>,
}

impl TierTable {
    /// The standard commercial table.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_iter([
            (
                Tier::Starter,
                TierLimits {
                    max_pages: Some(5),
                    max_features: Some(3),
                    max_api_routes: Some(10),
                    custom_domain: false,
                    unlocked: FeatureSet::empty(),
                },
            ),
            (
                Tier::Professional,
                TierLimits {
                    max_pages: Some(15),
                    max_features: Some(6),
                    max_api_routes: Some(40),
                    custom_domain: true,
                    unlocked: FeatureSet::STAKING
                        | FeatureSet::GOVERNANCE
                        | FeatureSet::LP
                        | FeatureSet::NFT_MINT
                        | FeatureSet::AIRDROP
                        | FeatureSet::ANALYTICS,
                },
            ),
            (
                Tier::Enterprise,
                TierLimits {
                    max_pages: None,
                    max_features: None,
                    max_api_routes: None,
                    custom_domain: true,
                    unlocked: FeatureSet::ALL,
                },
            ),
        ])
    }

    #[must_use]
    pub fn get(&self, tier: Tier) -> Option<&TierLimits> {
        self.inner.get(&tier)
    }

    /// Entries in tier order.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &TierLimits)> {
        self.inner.iter().map(|(tier, limits)| (*tier, limits))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromIterator<(Tier, TierLimits)> for TierTable {
    fn from_iter<I: IntoIterator<Item = (Tier, TierLimits)>>(iter: I) -> Self {
        Self { inner: Arc::new(iter.into_iter().collect()) }
    }
}

impl Serialize for TierTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}
