//! Build-time discovery of string resources and manifest generation.
//!
//! A pass has two steps:
//!
//! 1. `SymbolScanner` follows the crate's `mod` tree from its root file and
//!    returns every `pub`/`pub(crate)` `StringResource` static declared in a
//!    file that invokes `generate_strings!()`.
//! 2. `ManifestGenerator` renders those paths into one module exposing
//!    `register_all()` and writes it atomically, or deletes a stale manifest
//!    when nothing is left to register.
//!
//! Typical use from a host crate's `build.rs`:
//!
//! ```rust,ignore
//! fn main() {
//!     println!("cargo:rerun-if-changed=src");
//!     let out = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap());
//!     let config = glossarist::config::CodegenConfig::new("src", out.join("generated_strings.rs"));
//!     glossarist::codegen::run(&config).expect("string manifest generation failed");
//! }
//! ```
//!
//! and in the host crate: `include!(concat!(env!("OUT_DIR"), "/generated_strings.rs"));`.

mod error;
mod manifest;
mod scanner;

pub use error::CodegenError;
pub use manifest::{GenerationOutcome, ManifestGenerator};
pub use scanner::{DiscoveredDeclaration, SymbolScanner};

use crate::config::CodegenConfig;

/// Scan `config.source_dir` and write the manifest to `config.manifest_path`.
pub fn run(config: &CodegenConfig) -> Result<GenerationOutcome, CodegenError> {
    let declarations = SymbolScanner::new()
        .with_module_prefix(&config.module_prefix)
        .scan_dir(&config.source_dir)?;

    ManifestGenerator::new()
        .with_module_name(&config.module_name)
        .with_runtime_crate(&config.runtime_crate)
        .write(&declarations, &config.manifest_path)
}
