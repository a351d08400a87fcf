//! Scan a source tree for string resources and write the registration manifest.
//!
//! Required environment variables:
//! - GLOSSARIST_SOURCE_DIR
//! - GLOSSARIST_MANIFEST_PATH
//!
//! Optional:
//! - GLOSSARIST_MANIFEST_MODULE (defaults to generated_strings)
//! - GLOSSARIST_RUNTIME_CRATE (defaults to glossarist)
//! - GLOSSARIST_MODULE_PREFIX (defaults to crate)

use anyhow::{Context, Result};
use glossarist::codegen::{self, GenerationOutcome};
use glossarist::config::CodegenConfig;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("glossarist=info".parse()?),
        )
        .init();

    let config = CodegenConfig::from_env()?;
    info!(
        "Scanning {} for string resources",
        config.source_dir.display()
    );

    let outcome = codegen::run(&config).with_context(|| {
        format!(
            "Failed to generate manifest {}",
            config.manifest_path.display()
        )
    })?;

    match outcome {
        GenerationOutcome::Skipped => info!("No string resources found, nothing generated"),
        GenerationOutcome::Removed { path } => info!(
            "No string resources found, removed stale manifest {}",
            path.display()
        ),
        GenerationOutcome::Unchanged { path, resources } => info!(
            "Manifest {} already up to date ({} resources)",
            path.display(),
            resources
        ),
        GenerationOutcome::Written { path, resources } => info!(
            "Wrote manifest {} ({} resources)",
            path.display(),
            resources
        ),
    }

    Ok(())
}
