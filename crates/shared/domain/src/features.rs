use bitflags::bitflags;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// A selectable product feature.
///
/// The string form (`serde` and `strum` alike) is kebab-case: `nft-mint`, `lp`, ...
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
    EnumCount,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Feature {
    Staking,
    Governance,
    Lp,
    NftMint,
    Dao,
    Swap,
    Airdrop,
    Analytics,
}

impl Feature {
    /// Human-readable label used in navigation and documentation.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Staking => "Staking",
            Self::Governance => "Governance",
            Self::Lp => "Liquidity",
            Self::NftMint => "NFT Mint",
            Self::Dao => "DAO",
            Self::Swap => "Swap",
            Self::Airdrop => "Airdrop",
            Self::Analytics => "Analytics",
        }
    }

    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Staking => "Lock tokens for a period and earn rewards",
            Self::Governance => "Token-weighted proposals and voting",
            Self::Lp => "Liquidity pools and LP positions",
            Self::NftMint => "Mint page with collection gallery",
            Self::Dao => "DAO membership, treasury and proposals",
            Self::Swap => "Token swap interface",
            Self::Airdrop => "Airdrop campaigns with a claim page",
            Self::Analytics => "Holder and volume dashboards",
        }
    }

    /// The single-bit [`FeatureSet`] for this feature.
    #[must_use]
    pub const fn flag(self) -> FeatureSet {
        match self {
            Self::Staking => FeatureSet::STAKING,
            Self::Governance => FeatureSet::GOVERNANCE,
            Self::Lp => FeatureSet::LP,
            Self::NftMint => FeatureSet::NFT_MINT,
            Self::Dao => FeatureSet::DAO,
            Self::Swap => FeatureSet::SWAP,
            Self::Airdrop => FeatureSet::AIRDROP,
            Self::Analytics => FeatureSet::ANALYTICS,
        }
    }
}

bitflags! {
    /// A set of features, used for tier entitlement lists.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureSet: u32 {
        const STAKING = 1 << 0;
        const GOVERNANCE = 1 << 1;
        const LP = 1 << 2;
        const NFT_MINT = 1 << 3;
        const DAO = 1 << 4;
        const SWAP = 1 << 5;
        const AIRDROP = 1 << 6;
        const ANALYTICS = 1 << 7;

        const ALL = Self::STAKING.bits()
            | Self::GOVERNANCE.bits()
            | Self::LP.bits()
            | Self::NFT_MINT.bits()
            | Self::DAO.bits()
            | Self::SWAP.bits()
            | Self::AIRDROP.bits()
            | Self::ANALYTICS.bits();
    }
}

impl FeatureSet {
    #[must_use]
    pub const fn has(self, feature: Feature) -> bool {
        self.contains(feature.flag())
    }

    /// Members in declaration order.
    pub fn features(self) -> impl Iterator<Item = Feature> {
        Feature::iter().filter(move |f| self.has(*f))
    }
}

impl From<Feature> for FeatureSet {
    fn from(feature: Feature) -> Self {
        feature.flag()
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |acc, f| acc | f.flag())
    }
}

/// Serialized as a list of feature names, e.g. `["staking", "lp"]`.
impl Serialize for FeatureSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.bits().count_ones() as usize))?;
        for feature in self.features() {
            seq.serialize_element(&feature)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = FeatureSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of feature names")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut set = FeatureSet::empty();
                while let Some(feature) = seq.next_element::<Feature>()? {
                    set |= feature.flag();
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(SetVisitor)
    }
}
