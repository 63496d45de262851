use forge_compiler::{CompilationResult, Compiler, GENERIC_FAILURE};
use forge_domain::config::{AuthMode, Database, Hosting, ProjectConfig};
use forge_domain::features::Feature;
use forge_domain::template::FeatureTemplate;
use forge_domain::tiers::{Tier, TierTable};
use forge_programs::ProgramId;
use forge_templates::FeatureRegistry;
use std::io::{Cursor, Read};
use zip::ZipArchive;

fn professional_staking() -> ProjectConfig {
    let mut config = ProjectConfig::new("Acme", Tier::Professional);
    config.token.enabled = true;
    config.token.name = "Acme Token".to_owned();
    config.token.symbol = "ABC".to_owned();
    config.token.decimals = 9;
    config.token.total_supply = 1_000_000;
    config.dapp.brand_color = "#6366f1".to_owned();
    config.dapp.features = vec![Feature::Staking];
    config
}

fn members(archive: &[u8]) -> Vec<String> {
    let mut reader = ZipArchive::new(Cursor::new(archive)).unwrap();
    (0..reader.len()).map(|i| reader.by_index(i).unwrap().name().to_owned()).collect()
}

fn read_member(archive: &[u8], path: &str) -> String {
    let mut reader = ZipArchive::new(Cursor::new(archive)).unwrap();
    let mut body = String::new();
    reader.by_name(path).unwrap().read_to_string(&mut body).unwrap();
    body
}

#[test]
fn starter_with_staking_is_rejected_before_generation() {
    let mut config = ProjectConfig::new("Acme", Tier::Starter);
    config.dapp.features = vec![Feature::Staking];

    let result = Compiler::default().compile(&config);
    assert!(!result.is_success());
    assert!(result.archive().is_none());
    assert!(matches!(result, CompilationResult::Rejected { .. }));
    assert!(result.errors().iter().any(|e| e.contains("staking") && e.contains("higher tier")));
}

#[test]
fn professional_staking_project_compiles() {
    let config = professional_staking();
    let result = Compiler::default().compile(&config);
    assert!(result.is_success(), "{:?}", result.errors());
    assert!(result.errors().is_empty());

    let archive = result.archive().unwrap();
    let paths = members(archive);
    assert_eq!(result.file_count(), Some(paths.len()));
    for expected in [
        "package.json",
        "Anchor.toml",
        "programs/abc_token/src/lib.rs",
        "programs/abc_staking/src/lib.rs",
        "deploy/deploy-token.ts",
        "app/staking/page.tsx",
        "app/api/stake/route.ts",
        "components/StakeForm.tsx",
        "lib/site.ts",
        "docs/ARCHITECTURE.md",
        "vercel.json",
    ] {
        assert!(paths.iter().any(|p| p == expected), "missing {expected}");
    }

    let token_id = ProgramId::derive("ABC", "Acme").to_string();
    let manifest = result.manifest().unwrap();
    assert_eq!(manifest.token_program.as_deref(), Some(token_id.as_str()));
    assert!(read_member(archive, "programs/abc_token/src/lib.rs").contains(&token_id));
    assert!(read_member(archive, "lib/site.ts").contains(&token_id));
    assert!(read_member(archive, "app/staking/page.tsx").contains("const REWARD_RATE_BPS = 500;"));

    let again = Compiler::default().compile(&config);
    assert_eq!(again.manifest().unwrap().token_program, manifest.token_program);
    assert_eq!(again.archive(), result.archive());
}

#[test]
fn manifest_mirrors_archive_order() {
    let result = Compiler::default().compile(&professional_staking());
    let manifest = result.manifest().unwrap();
    let paths: Vec<String> = manifest.entries.iter().map(|entry| entry.path.clone()).collect();
    assert_eq!(paths, members(result.archive().unwrap()));
    assert_eq!(manifest.archive_bytes, result.archive().unwrap().len());
    assert_eq!(&paths[..6], [
        "package.json",
        "tsconfig.json",
        "next.config.mjs",
        ".eslintrc.json",
        ".gitignore",
        "README.md"
    ]);
}

#[test]
fn project_without_token_has_no_programs() {
    let mut config = ProjectConfig::new("Plain", Tier::Starter);
    config.infra.auth = AuthMode::Email;
    config.infra.database = Database::Sqlite;
    config.infra.hosting = Hosting::SelfHosted;

    let result = Compiler::default().compile(&config);
    let paths = members(result.archive().unwrap());
    assert!(!paths.iter().any(|p| p.starts_with("programs/") || p == "Anchor.toml"));
    assert!(!paths.iter().any(|p| p == "components/WalletProvider.tsx"));
    assert!(paths.iter().any(|p| p == "prisma/schema.prisma"));
    assert!(paths.iter().any(|p| p == "Dockerfile"));
    assert!(result.manifest().unwrap().token_program.is_none());
}

#[test]
fn enterprise_headline_features_compile() {
    let mut config = professional_staking();
    config.project.tier = Tier::Enterprise.into();
    config.dapp.features = vec![
        Feature::Staking,
        Feature::Governance,
        Feature::Lp,
        Feature::NftMint,
        Feature::Dao,
        Feature::Swap,
    ];
    config.dapp.pages = vec!["about".to_owned(), "treasury".to_owned()];

    let result = Compiler::default().compile(&config);
    let paths = members(result.archive().unwrap());
    for page in ["staking", "governance", "liquidity", "mint", "dao", "treasury", "swap", "about"] {
        let path = format!("app/{page}/page.tsx");
        assert_eq!(paths.iter().filter(|p| **p == path).count(), 1, "{path}");
    }
    assert_eq!(paths.iter().filter(|p| *p == "app/api/proposals/route.ts").count(), 1);
}

#[test]
fn unknown_tier_in_alternate_table_is_rejected() {
    let tiers: TierTable = TierTable::standard()
        .iter()
        .filter(|(tier, _)| *tier != Tier::Starter)
        .map(|(tier, limits)| (tier, *limits))
        .collect();
    let compiler = Compiler::builder().tiers(tiers).build();

    let result = compiler.compile(&ProjectConfig::new("Acme", Tier::Starter));
    assert_eq!(result.errors(), ["Unknown tier 'starter'"]);
}

#[test]
fn generation_fault_is_reported_generically() {
    let registry = FeatureRegistry::from_fn(|feature| match feature {
        Feature::Analytics => FeatureTemplate { components: &["Navigation"], ..Default::default() },
        _ => FeatureTemplate::default(),
    });
    let compiler = Compiler::builder().registry(registry).build();

    let mut config = ProjectConfig::new("Acme", Tier::Enterprise);
    config.dapp.features = vec![Feature::Analytics];

    let result = compiler.compile(&config);
    assert!(matches!(result, CompilationResult::Failed { .. }));
    assert_eq!(result.errors(), [GENERIC_FAILURE]);
    assert!(result.archive().is_none());
}
