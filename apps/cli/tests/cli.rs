use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::{TempDir, tempdir};

const STAKING_PROJECT: &str = r##"
[project]
name = "Acme"
tier = "professional"

[token]
enabled = true
name = "Acme Token"
symbol = "ABC"
decimals = 9
total_supply = 1000000

[dapp]
features = ["staking"]
brand_color = "#6366f1"
"##;

const STARTER_STAKING: &str = r#"
[project]
name = "Acme"
tier = "starter"

[dapp]
features = ["staking"]
"#;

fn forge(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("forge"));
    cmd.current_dir(dir);
    cmd
}

fn workspace(project: &str) -> TempDir {
    let tmp = tempdir().unwrap();
    std::fs::write(tmp.path().join("project.toml"), project).unwrap();
    tmp
}

#[test]
fn compile_writes_the_archive() {
    let tmp = workspace(STAKING_PROJECT);
    forge(tmp.path())
        .args(["compile", "project.toml", "-o", "out/acme.zip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compiled Acme (professional)"))
        .stdout(predicate::str::contains("Token program:"))
        .stdout(predicate::str::contains("Staking program:"));

    let bytes = std::fs::read(tmp.path().join("out/acme.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    assert!(archive.by_name("programs/abc_staking/src/lib.rs").is_ok());
    assert!(archive.by_name("app/staking/page.tsx").is_ok());
}

#[test]
fn compile_defaults_to_the_output_dir() {
    let tmp = workspace(STAKING_PROJECT);
    std::fs::write(tmp.path().join("forge.toml"), "[output]\ndir = \"build\"\n").unwrap();

    forge(tmp.path()).args(["compile", "project.toml"]).assert().success();
    assert!(tmp.path().join("build/acme.zip").is_file());
}

#[test]
fn compile_is_reproducible() {
    let tmp = workspace(STAKING_PROJECT);
    for out in ["a.zip", "b.zip"] {
        forge(tmp.path()).args(["compile", "project.toml", "-o", out]).assert().success();
    }
    assert_eq!(
        std::fs::read(tmp.path().join("a.zip")).unwrap(),
        std::fs::read(tmp.path().join("b.zip")).unwrap()
    );
}

#[test]
fn rejected_compile_exits_with_failure_and_writes_nothing() {
    let tmp = workspace(STARTER_STAKING);
    forge(tmp.path())
        .args(["compile", "project.toml", "-o", "acme.zip"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Rejected: 1 error(s)"))
        .stdout(predicate::str::contains("requires a higher tier"));
    assert!(!tmp.path().join("acme.zip").exists());
}

#[test]
fn json_report_carries_the_manifest() {
    let tmp = workspace(STAKING_PROJECT);
    let output = forge(tmp.path())
        .args(["compile", "project.toml", "-o", "acme.zip", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["success"], true);
    assert_eq!(report["manifest"]["tier"], "professional");
    let entries = report["manifest"]["entries"].as_array().unwrap();
    assert_eq!(report["file_count"].as_u64(), Some(entries.len() as u64));
    assert_eq!(entries[0]["path"], "package.json");
}

#[test]
fn validate_reports_every_error() {
    let tmp = workspace(
        r#"
[project]
name = "A name that is certainly longer than fifty characters!!"
tier = "professional"

[dapp]
brand_color = "blue"
"#,
    );
    forge(tmp.path())
        .args(["validate", "project.toml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid: 2 error(s)"))
        .stdout(predicate::str::contains("Brand color 'blue'"));
}

#[test]
fn validate_json_for_a_valid_project() {
    let tmp = workspace(STAKING_PROJECT);
    forge(tmp.path())
        .args(["validate", "project.toml", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"));
}

#[test]
fn unknown_tier_still_yields_a_json_verdict() {
    let tmp = workspace(
        r#"
[project]
name = "Acme"
tier = "gold"

[dapp]
brand_color = "blue"
"#,
    );
    let output = forge(tmp.path()).args(["validate", "project.toml", "--json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let verdict: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(verdict["valid"], false);
    assert_eq!(verdict["errors"], serde_json::json!(["Unknown tier 'gold'"]));
}

#[test]
fn out_of_range_decimals_join_the_error_list() {
    let tmp = workspace(
        r#"
[project]
name = "Acme"
tier = "professional"

[token]
enabled = true
name = "Acme Token"
symbol = "ABC"
decimals = 300
total_supply = 1000000

[dapp]
brand_color = "blue"
"#,
    );
    forge(tmp.path())
        .args(["validate", "project.toml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid: 2 error(s)"))
        .stdout(predicate::str::contains("Token decimals must be between 0 and 18, got 300"))
        .stdout(predicate::str::contains("Brand color 'blue'"));
}

#[test]
fn missing_project_file_is_an_error() {
    let tmp = tempdir().unwrap();
    forge(tmp.path())
        .args(["validate", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot load project configuration"));
}

#[test]
fn tiers_and_features_listings() {
    let tmp = tempdir().unwrap();
    forge(tmp.path())
        .arg("tiers")
        .assert()
        .success()
        .stdout(predicate::str::contains("enterprise"))
        .stdout(predicate::str::contains("unlocked:      all"));

    forge(tmp.path())
        .args(["features", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"feature\": \"nft-mint\""));
}
