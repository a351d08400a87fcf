//! Manifest generator: renders the discovered declarations into one Rust module
//! and commits it to disk atomically.

use crate::codegen::scanner::{validate_module_path, DiscoveredDeclaration};
use crate::codegen::CodegenError;
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// What a generation pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Nothing was discovered and no manifest existed; nothing was written.
    Skipped,
    /// Nothing was discovered; the manifest from an earlier pass was deleted.
    Removed { path: PathBuf },
    /// The manifest on disk already had this exact content.
    Unchanged { path: PathBuf, resources: usize },
    /// A new manifest was committed.
    Written { path: PathBuf, resources: usize },
}

#[derive(Debug, Clone)]
pub struct ManifestGenerator {
    module_name: String,
    runtime_crate: String,
}

impl Default for ManifestGenerator {
    fn default() -> Self {
        Self {
            module_name: "generated_strings".to_string(),
            runtime_crate: "glossarist".to_string(),
        }
    }
}

impl ManifestGenerator {
    /// Create a generator emitting `generated_strings` against `::glossarist`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the emitted module (default `generated_strings`).
    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    /// Path the generated code uses to reach this crate (default `glossarist`;
    /// use `crate` when generating inside this crate itself).
    pub fn with_runtime_crate(mut self, name: impl Into<String>) -> Self {
        self.runtime_crate = name.into();
        self
    }

    /// Render the manifest source, or `None` when there is nothing to register.
    pub fn render(
        &self,
        declarations: &[DiscoveredDeclaration],
    ) -> Result<Option<String>, CodegenError> {
        if declarations.is_empty() {
            return Ok(None);
        }

        if syn::parse_str::<syn::Ident>(&self.module_name).is_err() {
            return Err(CodegenError::InvalidPath {
                name: self.module_name.clone(),
                role: "the manifest module name",
            });
        }
        validate_module_path(&self.runtime_crate).map_err(|_| CodegenError::InvalidPath {
            name: self.runtime_crate.clone(),
            role: "the runtime crate",
        })?;

        let runtime = if self.runtime_crate == "crate" {
            "crate".to_string()
        } else {
            format!("::{}", self.runtime_crate)
        };
        let result = format!("::core::result::Result<(), {}::I18nError>", runtime);

        let mut out = String::new();
        out.push_str("// @generated by glossarist-codegen. Do not edit.\n");
        out.push_str("//\n");
        out.push_str("// Forces every string resource declared in a file marked with\n");
        out.push_str("// `generate_strings!()`, in discovery order.\n\n");
        out.push_str("#[allow(dead_code)]\n");
        out.push_str(&format!("pub mod {} {{\n", self.module_name));

        out.push_str("    /// Registers every discovered resource with the global `Strings` facade.\n");
        out.push_str(&format!("    pub fn register_all() -> {} {{\n", result));
        out.push_str(&render_calls(declarations, "force()"));
        out.push_str("        Ok(())\n    }\n\n");

        out.push_str("    /// Registers every discovered resource into an owned manager.\n");
        out.push_str(&format!(
            "    pub fn register_all_into(manager: &mut {}::LocaleManager) -> {} {{\n",
            runtime, result
        ));
        out.push_str(&render_calls(declarations, "register_into(manager)"));
        out.push_str("        Ok(())\n    }\n}\n");

        Ok(Some(out))
    }

    /// Render and commit the manifest to `path`.
    ///
    /// The file is written to a temporary sibling and renamed into place, so
    /// `path` either keeps its previous content or holds the complete new
    /// manifest.
    ///
    /// An empty declaration list writes nothing and deletes a manifest left by an
    /// earlier pass: it would name statics that no longer exist and break the
    /// host build that includes it.
    pub fn write(
        &self,
        declarations: &[DiscoveredDeclaration],
        path: &Path,
    ) -> Result<GenerationOutcome, CodegenError> {
        let Some(content) = self.render(declarations)? else {
            return remove_stale(path);
        };
        let resources = declarations.len();

        if fs::read_to_string(path).is_ok_and(|existing| existing == content) {
            debug!("Manifest {} is up to date", path.display());
            return Ok(GenerationOutcome::Unchanged {
                path: path.to_path_buf(),
                resources,
            });
        }

        commit(path, &content).map_err(|source| CodegenError::ManifestWrite {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Generated manifest {} registering {} string resources",
            path.display(),
            resources
        );
        Ok(GenerationOutcome::Written {
            path: path.to_path_buf(),
            resources,
        })
    }
}

/// One `identifier.call?;` line per declaration, with a `// file` comment
/// before each file's group.
fn render_calls(declarations: &[DiscoveredDeclaration], call: &str) -> String {
    let mut lines = Vec::new();
    let mut current_file: Option<&Path> = None;
    for declaration in declarations {
        if current_file != Some(declaration.file.as_path()) {
            lines.push(format!(
                "        // {}\n",
                declaration.file.to_string_lossy().replace('\\', "/")
            ));
            current_file = Some(declaration.file.as_path());
        }
        lines.push(format!("        {}.{}?;\n", declaration.identifier, call));
    }
    lines.concat()
}

fn remove_stale(path: &Path) -> Result<GenerationOutcome, CodegenError> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!(
                "No string resources discovered, removed stale manifest {}",
                path.display()
            );
            Ok(GenerationOutcome::Removed {
                path: path.to_path_buf(),
            })
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!("No string resources discovered, skipping manifest generation");
            Ok(GenerationOutcome::Skipped)
        }
        Err(source) => Err(CodegenError::ManifestWrite {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn commit(path: &Path, content: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    // Dropping the temp file on any early return deletes it.
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
