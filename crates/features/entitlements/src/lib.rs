//! # Entitlements
//!
//! Gatekeeper of the compiler: a project configuration is checked against the tier table
//! (feature allow-lists and page, feature and API-route budgets) and against the field
//! rules for names, token parameters and branding.
//!
//! The top tier ([`Tier::TOP`](forge_domain::tiers::Tier::TOP)) implicitly unlocks every
//! feature, whatever its allow-list says.

pub mod validator;

pub use crate::validator::{Validator, Verdict, validate};
