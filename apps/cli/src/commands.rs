//! Command handlers. Each renders its report into `out` and returns the process exit code.

use anyhow::Context;
use forge::archive::persist;
use forge::domain::features::Feature;
use forge::domain::tiers::TierTable;
use forge::entitlements::Verdict;
use forge::kernel::config::load_document;
use forge::kernel::settings::ForgeSettings;
use forge::templates::FeatureRegistry;
use forge::{CompilationResult, Compiler, ProjectConfig};
use serde_json::{Value, json};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use strum::IntoEnumIterator;
use tracing::info;

fn load_project(path: &Path) -> anyhow::Result<ProjectConfig> {
    load_document(path)
        .with_context(|| format!("Cannot load project configuration {}", path.display()))
}

fn exit_code(success: bool) -> ExitCode {
    if success { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn write_json(out: &mut impl Write, value: &Value) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_errors(out: &mut impl Write, heading: &str, errors: &[String]) -> anyhow::Result<()> {
    writeln!(out, "{heading}: {} error(s)", errors.len())?;
    for error in errors {
        writeln!(out, "  - {error}")?;
    }
    Ok(())
}

pub async fn compile(
    settings: &ForgeSettings,
    config_path: &Path,
    output: Option<&Path>,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    let config = load_project(config_path)?;
    let result = Compiler::default().compile(&config);

    let target = match &result {
        CompilationResult::Compiled(package) => {
            let target = output
                .map_or_else(|| default_archive_path(settings, &config), Path::to_path_buf);
            persist(&target, &package.archive, settings.output.write_budget())
                .await
                .with_context(|| format!("Cannot write archive {}", target.display()))?;
            info!(path = %target.display(), "Archive written");
            Some(target)
        },
        CompilationResult::Rejected { .. } | CompilationResult::Failed { .. } => None,
    };

    if json {
        write_json(out, &compile_report(&result, target.as_deref()))?;
    } else {
        write_compile_summary(out, &config, &result, target.as_deref())?;
    }
    Ok(exit_code(result.is_success()))
}

fn compile_report(result: &CompilationResult, target: Option<&Path>) -> Value {
    json!({
        "success": result.is_success(),
        "errors": result.errors(),
        "file_count": result.file_count(),
        "archive": target.map(|path| path.display().to_string()),
        "manifest": result.manifest(),
    })
}

fn write_compile_summary(
    out: &mut impl Write,
    config: &ProjectConfig,
    result: &CompilationResult,
    target: Option<&Path>,
) -> anyhow::Result<()> {
    match result {
        CompilationResult::Compiled(package) => {
            let target = target.map(Path::display).map(|path| path.to_string()).unwrap_or_default();
            writeln!(
                out,
                "Compiled {} ({}): {} files, {} bytes -> {target}",
                config.project.name,
                config.project.tier,
                package.file_count,
                package.archive.len(),
            )?;
            if let Some(id) = &package.manifest.token_program {
                writeln!(out, "Token program:   {id}")?;
            }
            if let Some(id) = &package.manifest.staking_program {
                writeln!(out, "Staking program: {id}")?;
            }
            writeln!(out, "SHA-256:         {}", package.manifest.archive_sha256)?;
            Ok(())
        },
        CompilationResult::Rejected { errors } => write_errors(out, "Rejected", errors),
        CompilationResult::Failed { errors } => write_errors(out, "Failed", errors),
    }
}

pub fn validate(config_path: &Path, json: bool, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    let config = load_project(config_path)?;
    let verdict: Verdict = Compiler::default().validate(&config);

    if json {
        write_json(out, &serde_json::to_value(&verdict)?)?;
    } else if verdict.valid {
        writeln!(out, "Valid: {} ({})", config.project.name, config.project.tier)?;
    } else {
        write_errors(out, "Invalid", &verdict.errors)?;
    }
    Ok(exit_code(verdict.valid))
}

pub fn tiers(json: bool, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    let table = TierTable::standard();
    if json {
        write_json(out, &serde_json::to_value(&table)?)?;
        return Ok(ExitCode::SUCCESS);
    }

    let limit =
        |value: Option<u32>| value.map_or_else(|| "unbounded".to_owned(), |v| v.to_string());
    for (tier, limits) in table.iter() {
        let unlocked: Vec<String> = if tier.is_top() {
            vec!["all".to_owned()]
        } else {
            limits.unlocked.features().map(|feature| feature.to_string()).collect()
        };
        writeln!(out, "{tier}")?;
        writeln!(out, "  pages:         {}", limit(limits.max_pages))?;
        writeln!(out, "  features:      {}", limit(limits.max_features))?;
        writeln!(out, "  api routes:    {}", limit(limits.max_api_routes))?;
        writeln!(out, "  custom domain: {}", if limits.custom_domain { "yes" } else { "no" })?;
        writeln!(
            out,
            "  unlocked:      {}",
            if unlocked.is_empty() { "(none)".to_owned() } else { unlocked.join(", ") }
        )?;
    }
    Ok(ExitCode::SUCCESS)
}

pub fn features(json: bool, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    let registry = FeatureRegistry::builtin();
    if json {
        let entries: Vec<Value> = Feature::iter()
            .map(|feature| {
                json!({
                    "feature": feature,
                    "title": feature.title(),
                    "summary": feature.summary(),
                    "template": registry.template_for(feature),
                })
            })
            .collect();
        write_json(out, &Value::Array(entries))?;
        return Ok(ExitCode::SUCCESS);
    }

    for (feature, template) in registry.iter() {
        let name: &str = feature.as_ref();
        writeln!(out, "{name:<10} {}: {}", feature.title(), feature.summary())?;
        writeln!(out, "  pages:      {}", template.pages.join(", "))?;
        if !template.api_routes.is_empty() {
            writeln!(out, "  api routes: {}", template.api_routes.join(", "))?;
        }
        if !template.components.is_empty() {
            writeln!(out, "  components: {}", template.components.join(", "))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Default archive location for `config` under `settings`.
#[must_use]
pub fn default_archive_path(settings: &ForgeSettings, config: &ProjectConfig) -> PathBuf {
    settings.output.dir.join(format!("{}.zip", config.slug()))
}
