//! CLI command handlers

use anyhow::{anyhow, bail, Context, Result};
use std::path::{Path, PathBuf};
use webmode_core::detector::{ReflectionHints, WebApplicationTypeDetector};
use webmode_core::models::{Configuration, DetectionReport, ModuleContext, INDICATORS};
use webmode_core::oracle::{ManifestFormat, ModuleManifest, ModuleSet};
use webmode_core::services::logging;

/// Use the explicit path, or the XDG default
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Configuration::default_config_path().context("Failed to locate config file"),
    }
}

/// Load and validate the configuration file
pub fn load_config(path: &Path) -> Result<Configuration> {
    let config = Configuration::load_from_file(path)
        .with_context(|| format!("Failed to load config file: {}", path.display()))?;
    if let Err(errors) = config.validate() {
        bail!(
            "Invalid configuration in {}:\n  {}",
            path.display(),
            errors.join("\n  ")
        );
    }
    Ok(config)
}

/// Read a manifest file without blocking the runtime
async fn read_manifest(path: &Path) -> Result<ModuleSet> {
    let format = ManifestFormat::from_path(path).ok_or_else(|| {
        anyhow!(
            "Unsupported manifest format: {} (expected .toml, .yaml or .yml)",
            path.display()
        )
    })?;
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;
    let manifest = ModuleManifest::parse(&content, format)
        .with_context(|| format!("Failed to parse manifest file: {}", path.display()))?;
    Ok(manifest.into_module_set())
}

/// Combine the manifest (flag first, then config) with names given on the command line
pub async fn build_oracle(
    config: &Configuration,
    manifest: Option<PathBuf>,
    present: Vec<String>,
) -> Result<(ModuleSet, Option<PathBuf>)> {
    let manifest = manifest.or_else(|| config.manifest_path.clone());
    let mut oracle = match &manifest {
        Some(path) => read_manifest(path).await?,
        None => ModuleSet::new(),
    };

    for name in present {
        let name = name.trim();
        if name.is_empty() {
            bail!("--present requires a non-empty module name");
        }
        tracing::debug!(name = name, "Module marked present from command line");
        oracle.insert(name);
    }

    Ok((oracle, manifest))
}

/// Render a detection report as a mode name or pretty JSON
pub fn render_detection(report: &DetectionReport, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(report.mode.to_string())
    }
}

/// Render the fixed indicator table
pub fn render_indicators(json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&INDICATORS)?);
    }

    let width = INDICATORS
        .iter()
        .map(|indicator| indicator.role.as_str().len())
        .max()
        .unwrap_or(0);
    let lines: Vec<String> = INDICATORS
        .iter()
        .map(|indicator| {
            format!(
                "{:width$}  {}",
                indicator.role.as_str(),
                indicator.name,
                width = width
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

/// Handle detect command
pub async fn handle_detect(
    config: &Configuration,
    manifest: Option<PathBuf>,
    present: Vec<String>,
    json: bool,
) -> Result<()> {
    let (oracle, manifest) = build_oracle(config, manifest, present).await?;
    let report = WebApplicationTypeDetector::new(oracle).report();

    let source = manifest.as_ref().map(|path| path.display().to_string());
    logging::log_detection(report.mode, report.present.len(), source.as_deref());

    println!("{}", render_detection(&report, json)?);
    Ok(())
}

/// Collect reflection hints for `context` into a fresh registry
pub fn collect_hints(oracle: ModuleSet, context: Option<&ModuleContext>) -> ReflectionHints {
    let mut hints = ReflectionHints::new();
    WebApplicationTypeDetector::new(oracle).register_hints(&mut hints, context);
    hints
}

/// Handle hints command
pub async fn handle_hints(
    config: &Configuration,
    manifest: Option<PathBuf>,
    present: Vec<String>,
    context: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let (oracle, _) = build_oracle(config, manifest, present).await?;
    let context = match context.or_else(|| config.hints_context.clone()) {
        Some(name) => {
            let name = name.trim();
            if name.is_empty() {
                bail!("--context requires a non-empty context name");
            }
            Some(ModuleContext::new(name))
        }
        None => None,
    };

    let hints = collect_hints(oracle, context.as_ref());
    let content = hints
        .to_json_pretty()
        .context("Failed to serialize reflection hints")?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            tokio::fs::write(&path, content)
                .await
                .with_context(|| format!("Failed to write hints file: {}", path.display()))?;
            eprintln!(
                "Wrote {} reflection hint(s) to {}",
                hints.len(),
                path.display()
            );
        }
        None => println!("{}", content),
    }

    Ok(())
}

/// Handle indicators command
pub fn handle_indicators(json: bool) -> Result<()> {
    println!("{}", render_indicators(json)?);
    Ok(())
}

/// Handle config init command
pub async fn handle_config_init(config_path: &Path) -> Result<()> {
    let exists = tokio::fs::try_exists(config_path)
        .await
        .with_context(|| format!("Failed to check config file: {}", config_path.display()))?;
    if exists {
        println!(
            "Configuration already exists at {}; leaving it unchanged",
            config_path.display()
        );
        return Ok(());
    }

    let config = Configuration::default();
    config
        .save_to_file(config_path)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;
    println!("Configuration written to {}", config_path.display());
    Ok(())
}
