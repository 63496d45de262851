//! # Templates
//!
//! * [`registry`]: which pages, API routes, components and data models each feature needs.
//! * [`render`]: pure text renderers for the generated Next.js application, its styling,
//!   configuration and documentation.
//!
//! Renderers are total: every input yields a document, identical inputs yield identical bytes,
//! and user-supplied strings only reach generated code through escaped literals.

pub mod registry;
pub mod render;

pub use crate::registry::FeatureRegistry;
