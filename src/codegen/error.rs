use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from a scan + generate pass. Each one aborts the pass for its target
/// without touching any previously written manifest.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("failed to walk source tree {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("no lib.rs, main.rs or mod.rs under {}", .root.display())]
    MissingCrateRoot { root: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },

    #[error("'{name}' is not a valid Rust path for {role}")]
    InvalidPath { name: String, role: &'static str },

    #[error("failed to write manifest {}: {source}", .path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
