use anyhow::{Context, Result};
use std::path::PathBuf;

/// Settings for one scan + manifest generation pass.
#[derive(Debug, Clone)]
pub struct CodegenConfig {
    /// Root of the source tree to scan (usually the host crate's `src`)
    pub source_dir: PathBuf,

    /// Where the generated manifest is written
    pub manifest_path: PathBuf,

    /// Name of the generated module
    pub module_name: String,

    /// Path the generated code uses to reach this crate
    pub runtime_crate: String,

    /// Module path that `source_dir` corresponds to in the host crate
    pub module_prefix: String,
}

impl CodegenConfig {
    pub fn new(source_dir: impl Into<PathBuf>, manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            manifest_path: manifest_path.into(),
            module_name: "generated_strings".to_string(),
            runtime_crate: "glossarist".to_string(),
            module_prefix: "crate".to_string(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self {
            source_dir: std::env::var("GLOSSARIST_SOURCE_DIR")
                .context("GLOSSARIST_SOURCE_DIR not set")?
                .into(),
            manifest_path: std::env::var("GLOSSARIST_MANIFEST_PATH")
                .context("GLOSSARIST_MANIFEST_PATH not set")?
                .into(),
            module_name: std::env::var("GLOSSARIST_MANIFEST_MODULE")
                .unwrap_or_else(|_| "generated_strings".to_string()),
            runtime_crate: std::env::var("GLOSSARIST_RUNTIME_CRATE")
                .unwrap_or_else(|_| "glossarist".to_string()),
            module_prefix: std::env::var("GLOSSARIST_MODULE_PREFIX")
                .unwrap_or_else(|_| "crate".to_string()),
        })
    }
}
