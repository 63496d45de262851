//! # Domain Models
//!
//! Data shared by every `DappForge` crate: the project configuration submitted for compilation,
//! the feature and tier vocabulary, per-feature templates and the in-memory file set that the
//! generators fill. Keep it lean: no I/O and no generation logic, just data and simple helpers.

pub mod config;
mod error;
pub mod features;
pub mod files;
pub mod template;
pub mod tiers;

pub use crate::error::{DomainError, DomainErrorExt};
