//! # Code Template Renderer
//!
//! Every function here maps configuration to one document. Output depends only on the
//! arguments; JSON documents go through `serde_json` whose maps are key-sorted.

mod docs;
mod pages;
mod scaffold;
mod shell;

pub use crate::render::docs::{
    architecture_note, deployment_guide, env_example, hosting_config, prisma_schema, seed_script,
};
pub use crate::render::pages::{
    api_stub, component_stub, generic_page, governance_page, nft_mint_page, staking_page,
    swap_page,
};
pub use crate::render::scaffold::{
    eslint_config, gitignore, next_config, package_json, readme, tsconfig,
};
pub use crate::render::shell::{
    global_css, home_page, navigation, postcss_config, root_layout, site_module, tailwind_config,
    wallet_provider,
};

use forge_domain::config::ProjectConfig;
use forge_domain::features::Feature;

/// A navigable page of the generated application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub slug: String,
    pub label: String,
}

impl PageLink {
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        let label = title_case(&slug);
        Self { slug, label }
    }
}

/// Values computed by the compiler that several documents embed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteContext<'a> {
    pub links: &'a [PageLink],
    pub token_program: Option<&'a str>,
    pub staking_program: Option<&'a str>,
}

/// Renders the page `slug` contributed by `feature`.
///
/// Features with a dedicated page get it; every other feature falls back to a generic page.
#[must_use]
pub fn feature_page(feature: Feature, slug: &str, config: &ProjectConfig) -> String {
    match feature {
        Feature::Staking => staking_page(config),
        Feature::Governance => governance_page(config),
        Feature::Swap => swap_page(config),
        Feature::NftMint => nft_mint_page(config),
        _ => generic_page(slug),
    }
}

/// Archive path of a page.
#[must_use]
pub fn page_path(slug: &str) -> String {
    format!("app/{slug}/page.tsx")
}

#[must_use]
pub fn api_route_path(route: &str) -> String {
    format!("app/api/{route}/route.ts")
}

#[must_use]
pub fn component_path(name: &str) -> String {
    format!("components/{}.tsx", pascal_ident(name))
}

/// A JSON string literal, which is also a valid TypeScript string literal.
pub(crate) fn ts_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("\"\""))
}

/// `"nft-mint"` -> `"Nft Mint"`.
pub(crate) fn title_case(slug: &str) -> String {
    slug.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A JavaScript identifier in `PascalCase`; never empty, never starting with a digit.
pub(crate) fn pascal_ident(name: &str) -> String {
    let ident: String = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();

    match ident.chars().next() {
        None => "Generated".to_owned(),
        Some(c) if c.is_ascii_digit() => format!("Generated{ident}"),
        Some(_) => ident,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
