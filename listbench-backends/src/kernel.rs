//! Mandatory Compiled Extension
//!
//! The kernel module carries the four allocation strategies behind C ABI
//! symbols. It is the one artifact the suite cannot run without: the CLI
//! aborts with a build hint when loading fails. Symbols are resolved once
//! during discovery; a missing symbol marks only that backend unavailable.

use std::env::consts::{DLL_PREFIX, DLL_SUFFIX};
use std::path::{Path, PathBuf};

use libloading::Library;

use crate::error::LoadError;

/// Signature of every extension strategy symbol.
///
/// Non-negative return values are workload checksums; negative values are
/// the extension's failure sentinel.
pub type KernelFn = unsafe extern "C" fn(i32) -> i64;

/// File stem of the extension artifact (platform prefix/suffix applied).
const KERNEL_STEM: &str = "listbench_kernels";

/// Handle to the loaded extension.
#[derive(Debug)]
pub struct KernelModule {
    library: Library,
    path: PathBuf,
}

impl KernelModule {
    /// Platform file name of the extension, e.g. `liblistbench_kernels.so`.
    pub fn file_name() -> String {
        format!("{DLL_PREFIX}{KERNEL_STEM}{DLL_SUFFIX}")
    }

    /// Paths probed in order: the artifact directory, then the local cargo
    /// build outputs.
    pub fn candidate_paths(artifact_dir: &Path) -> Vec<PathBuf> {
        let name = Self::file_name();
        vec![
            artifact_dir.join(&name),
            Path::new("target/release").join(&name),
            Path::new("target/debug").join(&name),
        ]
    }

    /// Load the extension from the first existing candidate path.
    pub fn load(artifact_dir: &Path) -> Result<Self, LoadError> {
        let candidates = Self::candidate_paths(artifact_dir);
        let path = candidates
            .iter()
            .find(|p| p.exists())
            .cloned()
            .ok_or(LoadError::NotFound {
                candidates: candidates.clone(),
            })?;

        // SAFETY: loading runs the library's initializers. The kernel
        // artifact is built from this workspace and has none.
        let library = unsafe { Library::new(&path) }.map_err(|source| LoadError::Library {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loaded kernel module");
        Ok(Self { library, path })
    }

    /// Resolve a strategy symbol, validating it exists.
    ///
    /// The returned pointer stays valid for as long as this module is alive;
    /// the registry keeps the module alongside every resolved pointer.
    pub fn resolve(&self, symbol: &str) -> Result<KernelFn, LoadError> {
        // SAFETY: all strategy symbols share the KernelFn signature; that is
        // the extension's published ABI.
        let func = unsafe { self.library.get::<KernelFn>(symbol.as_bytes()) }.map_err(
            |source| LoadError::Symbol {
                symbol: symbol.to_string(),
                path: self.path.clone(),
                source,
            },
        )?;
        Ok(*func)
    }

    /// Path the module was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
