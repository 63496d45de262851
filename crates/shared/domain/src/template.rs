//! Per-feature artifact templates.

use fxhash::FxHashSet;
use serde::Serialize;

/// The artifacts a feature contributes to a generated project.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureTemplate {
    /// Page slugs, rendered at `app/<slug>/page.tsx`.
    pub pages: &'static [&'static str],
    /// API route names, rendered at `app/api/<route>/route.ts`.
    pub api_routes: &'static [&'static str],
    /// Component names, rendered at `components/<Name>.tsx`.
    pub components: &'static [&'static str],
    /// Persistence model names.
    pub data_models: &'static [&'static str],
}

/// Concatenation of several features' templates, in selection order, duplicates kept.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredArtifacts {
    pub pages: Vec<&'static str>,
    pub api_routes: Vec<&'static str>,
    pub components: Vec<&'static str>,
    pub data_models: Vec<&'static str>,
}

impl RequiredArtifacts {
    pub fn extend(&mut self, template: &FeatureTemplate) {
        self.pages.extend_from_slice(template.pages);
        self.api_routes.extend_from_slice(template.api_routes);
        self.components.extend_from_slice(template.components);
        self.data_models.extend_from_slice(template.data_models);
    }

    #[must_use]
    pub fn unique_api_routes(&self) -> Vec<&'static str> {
        unique(&self.api_routes)
    }

    #[must_use]
    pub fn unique_components(&self) -> Vec<&'static str> {
        unique(&self.components)
    }

    #[must_use]
    pub fn unique_data_models(&self) -> Vec<&'static str> {
        unique(&self.data_models)
    }
}

/// First occurrence wins; order is otherwise preserved.
#[must_use]
pub fn unique(items: &[&'static str]) -> Vec<&'static str> {
    let mut seen = FxHashSet::default();
    items.iter().copied().filter(|item| seen.insert(*item)).collect()
}
