//! Generation phases. Each phase adds files to the build's [`FileSet`].

use crate::error::{CompileError, CompileErrorExt};
use crate::phase::Phase;
use forge_domain::config::ProjectConfig;
use forge_domain::features::Feature;
use forge_domain::files::FileSet;
use forge_domain::template::RequiredArtifacts;
use forge_programs::ProgramSet;
use forge_templates::FeatureRegistry;
use forge_templates::render::{self, PageLink, SiteContext};
#[cfg(test)]
use std::cell::Cell;
use tracing::debug;

/// A page of the generated app and the feature that contributed it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlannedPage {
    pub(crate) slug: String,
    pub(crate) feature: Option<Feature>,
}

/// Feature pages in selection order, then custom pages; the first claim of a slug wins.
pub(crate) fn plan_pages(config: &ProjectConfig, registry: &FeatureRegistry) -> Vec<PlannedPage> {
    let mut pages: Vec<PlannedPage> = Vec::new();
    let claimed = |pages: &[PlannedPage], slug: &str| pages.iter().any(|page| page.slug == slug);

    for &feature in &config.dapp.features {
        for slug in registry.template_for(feature).pages {
            if !claimed(&pages, slug) {
                pages.push(PlannedPage { slug: (*slug).to_owned(), feature: Some(feature) });
            }
        }
    }
    for slug in &config.dapp.pages {
        if !claimed(&pages, slug) {
            pages.push(PlannedPage { slug: slug.clone(), feature: None });
        }
    }
    pages
}

#[cfg(test)]
thread_local! {
    /// Makes [`Build::run`] panic when it reaches this phase on the current thread.
    pub(crate) static FAULT_AT: Cell<Option<Phase>> = const { Cell::new(None) };
}

pub(crate) struct Build<'a> {
    config: &'a ProjectConfig,
    registry: &'a FeatureRegistry,
    artifacts: RequiredArtifacts,
    pub(crate) files: FileSet,
    pub(crate) programs: Option<ProgramSet>,
}

impl<'a> Build<'a> {
    pub(crate) fn new(config: &'a ProjectConfig, registry: &'a FeatureRegistry) -> Self {
        Self {
            config,
            registry,
            artifacts: registry.required_artifacts(&config.dapp.features),
            files: FileSet::new(),
            programs: None,
        }
    }

    /// Runs one generation phase and logs how many files it added.
    pub(crate) fn run(&mut self, phase: Phase) -> Result<(), CompileError> {
        #[cfg(test)]
        if FAULT_AT.get() == Some(phase) {
            panic!("injected fault during {phase}");
        }

        let before = self.files.len();
        match phase {
            Phase::Structure => self.structure(),
            Phase::ProgramSources => self.program_sources(),
            Phase::FeatureFiles => self.feature_files(),
            Phase::ConfigDocs => self.config_docs(),
            Phase::Validate | Phase::Packaging | Phase::Done => Ok(()),
        }?;
        debug!(phase = %phase, added = self.files.len() - before, "Phase complete");
        Ok(())
    }

    fn add(&mut self, path: impl Into<String>, content: String) -> Result<(), CompileError> {
        let path = path.into();
        self.files.insert(path.clone(), content).context(path)?;
        Ok(())
    }

    fn structure(&mut self) -> Result<(), CompileError> {
        let config = self.config;
        self.add("package.json", render::package_json(config))?;
        self.add("tsconfig.json", render::tsconfig(config))?;
        self.add("next.config.mjs", render::next_config(config))?;
        self.add(".eslintrc.json", render::eslint_config(config))?;
        self.add(".gitignore", render::gitignore(config))?;
        self.add("README.md", render::readme(config))
    }

    fn program_sources(&mut self) -> Result<(), CompileError> {
        if !self.config.token.enabled {
            return Ok(());
        }
        let programs = forge_programs::generate(self.config)?;
        for (path, content) in &programs.files {
            self.add(path.as_str(), content.clone())?;
        }
        self.programs = Some(programs);
        Ok(())
    }

    fn feature_files(&mut self) -> Result<(), CompileError> {
        let config = self.config;
        let pages = plan_pages(config, self.registry);
        let links: Vec<PageLink> =
            pages.iter().map(|page| PageLink::new(page.slug.as_str())).collect();

        let token_program = self.programs.as_ref().map(|set| set.token_id().to_string());
        let staking_program =
            self.programs.as_ref().and_then(|set| set.staking_id()).map(ToString::to_string);
        let ctx = SiteContext {
            links: &links,
            token_program: token_program.as_deref(),
            staking_program: staking_program.as_deref(),
        };

        self.add("app/layout.tsx", render::root_layout(config))?;
        self.add("app/page.tsx", render::home_page(config))?;
        self.add("app/globals.css", render::global_css(config))?;
        self.add("components/Navigation.tsx", render::navigation(config))?;
        if config.infra.auth.uses_wallet() {
            self.add("components/WalletProvider.tsx", render::wallet_provider(config))?;
        }
        self.add("lib/site.ts", render::site_module(config, &ctx))?;
        self.add("tailwind.config.ts", render::tailwind_config(config))?;
        self.add("postcss.config.mjs", render::postcss_config(config))?;

        for page in &pages {
            let content = match page.feature {
                Some(feature) => render::feature_page(feature, &page.slug, config),
                None => render::generic_page(&page.slug),
            };
            self.add(render::page_path(&page.slug), content)?;
        }
        for route in self.artifacts.unique_api_routes() {
            self.add(render::api_route_path(route), render::api_stub(route))?;
        }
        for component in self.artifacts.unique_components() {
            self.add(render::component_path(component), render::component_stub(component))?;
        }
        Ok(())
    }

    fn config_docs(&mut self) -> Result<(), CompileError> {
        let config = self.config;
        let token_program = self.programs.as_ref().map(|set| set.token_id().to_string());
        let staking_program =
            self.programs.as_ref().and_then(|set| set.staking_id()).map(ToString::to_string);
        let ctx = SiteContext {
            links: &[],
            token_program: token_program.as_deref(),
            staking_program: staking_program.as_deref(),
        };
        let models = self.artifacts.unique_data_models();

        self.add(".env.example", render::env_example(config, &ctx))?;
        if let Some(schema) = render::prisma_schema(config, &models) {
            self.add("prisma/schema.prisma", schema)?;
        }
        self.add("scripts/seed.ts", render::seed_script(config, &models))?;
        self.add("docs/DEPLOYMENT.md", render::deployment_guide(config, &ctx))?;
        self.add("docs/ARCHITECTURE.md", render::architecture_note(config, &self.artifacts))?;

        let (path, content) = render::hosting_config(config);
        self.add(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_domain::tiers::Tier;

    #[test]
    fn feature_pages_come_first_and_are_not_duplicated() {
        let mut config = ProjectConfig::new("Acme", Tier::Enterprise);
        config.dapp.features = vec![Feature::Dao, Feature::Staking];
        config.dapp.pages = vec!["about".to_owned(), "treasury".to_owned()];

        let pages = plan_pages(&config, &FeatureRegistry::builtin());
        let slugs: Vec<&str> = pages.iter().map(|page| page.slug.as_str()).collect();
        assert_eq!(slugs, ["dao", "treasury", "staking", "about"]);
        assert_eq!(pages[1].feature, Some(Feature::Dao));
        assert_eq!(pages[3].feature, None);
    }

    #[test]
    fn structure_is_feature_independent() {
        let plain = ProjectConfig::new("Acme", Tier::Professional);
        let mut featured = plain.clone();
        featured.dapp.features = vec![Feature::Governance];

        let registry = FeatureRegistry::builtin();
        let mut a = Build::new(&plain, &registry);
        let mut b = Build::new(&featured, &registry);
        a.run(Phase::Structure).unwrap();
        b.run(Phase::Structure).unwrap();
        assert_eq!(a.files.paths().collect::<Vec<_>>(), b.files.paths().collect::<Vec<_>>());
    }
}
