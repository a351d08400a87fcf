//! Symbol scanner: finds `StringResource` declarations in marked source files.
//!
//! `scan_dir` follows the module tree from the crate root file (`lib.rs`, else
//! `main.rs`, else `mod.rs` when scanning a sub-module's directory), so only
//! files compiled into that one crate are scanned. Binaries under `bin/` and
//! files no `mod` declaration reaches never end up in a manifest.
//!
//! Output order is a total order over (relative file path, item order within
//! the file), so unchanged input always reproduces the same sequence.

use crate::codegen::CodegenError;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Component, Path, PathBuf};
use syn::ext::IdentExt;
use syn::{Attribute, Expr, ExprLit, Item, Lit, Meta, Type, Visibility};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Candidate crate root files, in priority order.
const ROOT_FILES: [&str; 3] = ["lib.rs", "main.rs", "mod.rs"];

/// A resource declaration found during one scan pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredDeclaration {
    /// Fully-qualified path, e.g. `crate::strings::GREETING`.
    pub identifier: String,
    /// Source file relative to the scanned root.
    pub file: PathBuf,
}

/// A source file reached through `mod` declarations.
struct ModuleFile {
    relative: PathBuf,
    module: String,
    /// Child modules resolve next to this file rather than in a directory named after it.
    mod_rs: bool,
    /// Whether a manifest included at the crate root can name items in this module.
    visible: bool,
}

/// Where the `mod` items of one module body resolve their files.
struct ModuleScope<'a> {
    module: &'a str,
    visible: bool,
    /// Base for `#[path]` attributes.
    path_dir: PathBuf,
    /// Base for `name.rs` / `name/mod.rs` lookups.
    child_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SymbolScanner {
    marker_macro: String,
    resource_type: String,
    module_prefix: String,
}

impl Default for SymbolScanner {
    fn default() -> Self {
        Self {
            marker_macro: "generate_strings".to_string(),
            resource_type: "StringResource".to_string(),
            module_prefix: "crate".to_string(),
        }
    }
}

impl SymbolScanner {
    /// Create a scanner with the default marker, resource type and `crate` prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Module path the scanned root corresponds to (default `crate`).
    pub fn with_module_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.module_prefix = prefix.into();
        self
    }

    /// Name of the file-level marker macro (default `generate_strings`).
    pub fn with_marker_macro(mut self, name: impl Into<String>) -> Self {
        self.marker_macro = name.into();
        self
    }

    /// Last path segment of the resource type (default `StringResource`).
    pub fn with_resource_type(mut self, name: impl Into<String>) -> Self {
        self.resource_type = name.into();
        self
    }

    /// Scan every file reachable from the crate root under `root`.
    ///
    /// # Arguments
    /// * `root` - Directory holding `lib.rs`, `main.rs` or `mod.rs`
    ///
    /// # Returns
    /// Declarations ordered by relative file path, then by position in the file.
    ///
    /// # Errors
    /// `Walk` if `root` cannot be listed, `MissingCrateRoot` if it has no root
    /// file, `Io`/`Parse` for a reachable file that cannot be read or parsed.
    pub fn scan_dir(&self, root: &Path) -> Result<Vec<DiscoveredDeclaration>, CodegenError> {
        validate_module_path(&self.module_prefix)?;

        let sources = source_files(root)?;
        let entry = ROOT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|file| sources.contains(file))
            .ok_or_else(|| CodegenError::MissingCrateRoot {
                root: root.to_path_buf(),
            })?;

        let tree = self.module_tree(root, entry)?;

        let mut discovered = Vec::new();
        for (module, file) in tree.values() {
            discovered.extend(self.collect(module, file));
        }

        for relative in sources.iter().filter(|file| !tree.contains_key(*file)) {
            self.warn_if_marked(root, relative);
        }

        info!(
            "Scanned {} source files under {}, found {} string resources",
            tree.len(),
            root.display(),
            discovered.len()
        );
        Ok(discovered)
    }

    /// Scan one file's contents. `relative_path` determines the module path.
    ///
    /// Unlike `scan_dir` this cannot see the `mod` declaration that loads the
    /// file, so `#[path]` modules and module visibility are not taken into account.
    pub fn scan_source(
        &self,
        relative_path: &Path,
        source: &str,
    ) -> Result<Vec<DiscoveredDeclaration>, CodegenError> {
        let file = syn::parse_file(source).map_err(|source| CodegenError::Parse {
            path: relative_path.to_path_buf(),
            source,
        })?;

        if !self.has_marker(&file) {
            return Ok(Vec::new());
        }

        let Some(module) = self.module_path(relative_path) else {
            warn!(
                "Skipping {}: file path does not map to a module path",
                relative_path.display()
            );
            return Ok(Vec::new());
        };

        let module = ModuleFile {
            relative: relative_path.to_path_buf(),
            module,
            mod_rs: false,
            visible: true,
        };
        Ok(self.collect(&module, &file))
    }

    /// Walk `mod` declarations from `entry`, parsing each reached file once.
    fn module_tree(
        &self,
        root: &Path,
        entry: PathBuf,
    ) -> Result<BTreeMap<PathBuf, (ModuleFile, syn::File)>, CodegenError> {
        let mut tree = BTreeMap::new();
        let mut pending = vec![ModuleFile {
            relative: entry,
            module: self.module_prefix.clone(),
            mod_rs: true,
            visible: true,
        }];

        while let Some(module) = pending.pop() {
            if tree.contains_key(&module.relative) {
                continue;
            }

            let full = root.join(&module.relative);
            let source = fs::read_to_string(&full).map_err(|source| CodegenError::Io {
                path: full.clone(),
                source,
            })?;
            let file = syn::parse_file(&source).map_err(|source| CodegenError::Parse {
                path: module.relative.clone(),
                source,
            })?;

            let file_dir = module
                .relative
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            let child_dir = match module.relative.file_stem() {
                Some(stem) if !module.mod_rs => file_dir.join(stem),
                _ => file_dir.clone(),
            };
            let scope = ModuleScope {
                module: &module.module,
                visible: module.visible,
                path_dir: file_dir,
                child_dir,
            };
            self.queue_children(root, &file.items, &scope, &mut pending);

            tree.insert(module.relative.clone(), (module, file));
        }

        Ok(tree)
    }

    fn queue_children(
        &self,
        root: &Path,
        items: &[Item],
        scope: &ModuleScope<'_>,
        pending: &mut Vec<ModuleFile>,
    ) {
        for item in items {
            let Item::Mod(item) = item else {
                continue;
            };
            let module = format!("{}::{}", scope.module, item.ident);

            if has_cfg(&item.attrs) {
                debug!("Skipping conditionally compiled module {}", module);
                continue;
            }

            // The manifest sits in the crate root, which sees its own private children.
            let visible = scope.visible && (scope.module == "crate" || is_reachable(&item.vis));
            let name = item.ident.unraw().to_string();

            if let Some((_, content)) = &item.content {
                let nested = ModuleScope {
                    module: &module,
                    visible,
                    path_dir: scope.child_dir.join(&name),
                    child_dir: scope.child_dir.join(&name),
                };
                self.queue_children(root, content, &nested, pending);
                continue;
            }

            let candidates = match path_attribute(&item.attrs) {
                Some(path) => vec![(scope.path_dir.join(path), true)],
                None => vec![
                    (scope.child_dir.join(format!("{}.rs", name)), false),
                    (scope.child_dir.join(&name).join("mod.rs"), true),
                ],
            };

            match candidates
                .into_iter()
                .find(|(relative, _)| root.join(relative).is_file())
            {
                Some((relative, mod_rs)) => pending.push(ModuleFile {
                    relative,
                    module,
                    mod_rs,
                    visible,
                }),
                None => debug!("Module {} has no source file under {}", module, root.display()),
            }
        }
    }

    fn collect(&self, module: &ModuleFile, file: &syn::File) -> Vec<DiscoveredDeclaration> {
        if !self.has_marker(file) {
            return Vec::new();
        }

        let mut discovered = Vec::new();
        for item in &file.items {
            let (attrs, vis, ident, ty) = match item {
                Item::Static(item) => (&item.attrs, &item.vis, &item.ident, item.ty.as_ref()),
                Item::Const(item) => (&item.attrs, &item.vis, &item.ident, item.ty.as_ref()),
                _ => continue,
            };

            if !self.is_resource_type(ty) {
                continue;
            }

            let identifier = format!("{}::{}", module.module, ident);
            if !is_reachable(vis) {
                warn!(
                    "Skipping private string resource {} in {}; declare it pub or pub(crate)",
                    identifier,
                    module.relative.display()
                );
                continue;
            }
            if !module.visible {
                warn!(
                    "Skipping string resource {} in {}; its module is private to a parent module",
                    identifier,
                    module.relative.display()
                );
                continue;
            }
            if has_cfg(attrs) {
                warn!(
                    "Skipping conditionally compiled string resource {} in {}",
                    identifier,
                    module.relative.display()
                );
                continue;
            }

            debug!("Found string resource: {}", identifier);
            discovered.push(DiscoveredDeclaration {
                identifier,
                file: module.relative.clone(),
            });
        }

        discovered
    }

    fn warn_if_marked(&self, root: &Path, relative: &Path) {
        let Ok(source) = fs::read_to_string(root.join(relative)) else {
            return;
        };
        if !source.contains(self.marker_macro.as_str()) {
            return;
        }
        match syn::parse_file(&source) {
            Ok(file) if self.has_marker(&file) => warn!(
                "{} invokes {}!() but no module declaration reaches it; its resources are not registered",
                relative.display(),
                self.marker_macro
            ),
            Ok(_) => {}
            Err(err) => debug!("Ignoring unreachable file {}: {}", relative.display(), err),
        }
    }

    fn has_marker(&self, file: &syn::File) -> bool {
        file.items.iter().any(|item| match item {
            Item::Macro(item) if item.ident.is_none() => item
                .mac
                .path
                .segments
                .last()
                .is_some_and(|segment| segment.ident == self.marker_macro),
            _ => false,
        })
    }

    fn is_resource_type(&self, ty: &Type) -> bool {
        match ty {
            Type::Path(type_path) if type_path.qself.is_none() => type_path
                .path
                .segments
                .last()
                .is_some_and(|segment| segment.ident == self.resource_type),
            _ => false,
        }
    }

    /// `lib.rs`/`main.rs` → prefix, `a/mod.rs` → `prefix::a`, `a/b.rs` → `prefix::a::b`.
    fn module_path(&self, relative_path: &Path) -> Option<String> {
        let mut segments = Vec::new();
        for component in relative_path.parent().into_iter().flat_map(Path::components) {
            match component {
                Component::Normal(name) => segments.push(name.to_str()?.to_string()),
                _ => return None,
            }
        }

        let stem = relative_path.file_stem()?.to_str()?;
        let is_root_file = segments.is_empty() && matches!(stem, "lib" | "main");
        if stem != "mod" && !is_root_file {
            segments.push(stem.to_string());
        }

        if segments.iter().any(|segment| !is_identifier(segment)) {
            return None;
        }

        Some(
            std::iter::once(self.module_prefix.as_str())
                .chain(segments.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join("::"),
        )
    }
}

/// Every `.rs` file under `root`, relative to it.
fn source_files(root: &Path) -> Result<BTreeSet<PathBuf>, CodegenError> {
    let mut files = BTreeSet::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| CodegenError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().map_or(true, |ext| ext != "rs") {
            continue;
        }
        // WalkDir only yields paths below `root`, so the prefix always strips.
        if let Ok(relative) = path.strip_prefix(root) {
            files.insert(relative.to_path_buf());
        }
    }
    Ok(files)
}

/// Only `pub` and `pub(crate)` items can be named from a manifest in the crate root.
fn is_reachable(vis: &Visibility) -> bool {
    match vis {
        Visibility::Public(_) => true,
        Visibility::Restricted(restricted) => restricted.path.is_ident("crate"),
        Visibility::Inherited => false,
    }
}

fn has_cfg(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident("cfg"))
}

/// Value of a `#[path = "..."]` attribute.
fn path_attribute(attrs: &[Attribute]) -> Option<String> {
    attrs.iter().find_map(|attr| match &attr.meta {
        Meta::NameValue(meta) if meta.path.is_ident("path") => match &meta.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(path),
                ..
            }) => Some(path.value()),
            _ => None,
        },
        _ => None,
    })
}

fn is_identifier(segment: &str) -> bool {
    syn::parse_str::<syn::Ident>(segment).is_ok()
}


/// Check that `path` is a `::`-separated Rust path such as `crate::strings`.
pub(crate) fn validate_module_path(path: &str) -> Result<(), CodegenError> {
    let valid = !path.is_empty()
        && path
            .split("::")
            .all(|segment| matches!(segment, "crate" | "self" | "super") || is_identifier(segment));

    if valid {
        Ok(())
    } else {
        Err(CodegenError::InvalidPath {
            name: path.to_string(),
            role: "the module prefix",
        })
    }
}
