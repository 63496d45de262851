use forge_domain::config::{Database, Hosting, ProjectConfig};
use forge_domain::features::Feature;
use forge_domain::tiers::Tier;
use forge_templates::FeatureRegistry;
use forge_templates::render::{self, PageLink, SiteContext};

fn enterprise() -> ProjectConfig {
    let mut config = ProjectConfig::new("Orbit Labs", Tier::Enterprise);
    config.token.enabled = true;
    config.token.name = "Orbit".to_owned();
    config.token.symbol = "ORB".to_owned();
    config.dapp.features = vec![Feature::Staking, Feature::Dao];
    config.infra.database = Database::Postgres;
    config.infra.hosting = Hosting::SelfHosted;
    config
}

#[test]
fn every_required_page_renders_from_the_registry() {
    let config = enterprise();
    let registry = FeatureRegistry::builtin();

    for feature in &config.dapp.features {
        for slug in registry.template_for(*feature).pages {
            let page = render::feature_page(*feature, slug, &config);
            assert!(page.contains("export default function"), "{slug} has no page component");
        }
    }
}

#[test]
fn documents_agree_on_program_ids() {
    let config = enterprise();
    let links = [PageLink::new("staking"), PageLink::new("treasury")];
    let ctx = SiteContext {
        links: &links,
        token_program: Some("Tok1111111111111111111111111111111111111111"),
        staking_program: Some("Stk1111111111111111111111111111111111111111"),
    };

    let site = render::site_module(&config, &ctx);
    let env = render::env_example(&config, &ctx);
    let guide = render::deployment_guide(&config, &ctx);

    for doc in [&site, &env, &guide] {
        assert!(doc.contains("Tok1111111111111111111111111111111111111111"));
        assert!(doc.contains("Stk1111111111111111111111111111111111111111"));
    }
    assert!(site.contains(r#"{ href: "/treasury", label: "Treasury" },"#));
    assert!(guide.contains("## 2. Database"));
    assert!(guide.contains("docker build"));
}

#[test]
fn architecture_note_lists_deduplicated_artifacts() {
    let mut config = enterprise();
    config.dapp.features = vec![Feature::Governance, Feature::Dao];
    config.dapp.pages = vec!["faq".to_owned()];
    let required = FeatureRegistry::builtin().required_artifacts(&config.dapp.features);

    let note = render::architecture_note(&config, &required);
    assert_eq!(note.matches("- `proposals`").count(), 1);
    assert!(note.contains("- `faq`"));
    assert!(note.contains("- `Member`"));
}

#[test]
fn rendering_twice_is_byte_identical() {
    let config = enterprise();
    let required = FeatureRegistry::builtin().required_artifacts(&config.dapp.features);
    let models = required.unique_data_models();

    assert_eq!(render::package_json(&config), render::package_json(&config));
    assert_eq!(render::prisma_schema(&config, &models), render::prisma_schema(&config, &models));
    assert_eq!(render::readme(&config), render::readme(&config));
}
