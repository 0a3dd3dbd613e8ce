//! Native Shared Library Backend
//!
//! One exported symbol, one explicit foreign signature:
//! `extern "C" fn(i32) -> i32`. Zero means success and carries no checksum;
//! any other value is the library's failure sentinel and is converted into
//! an adapter error rather than ignored.

use std::env::consts::{DLL_PREFIX, DLL_SUFFIX};
use std::path::{Path, PathBuf};

use libloading::Library;

use crate::error::{BackendError, LoadError};

type NativeFn = unsafe extern "C" fn(i32) -> i32;

/// Handle to a loaded native library with its entry point resolved.
pub struct NativeLibrary {
    // Field order matters: `entry` points into `library`'s mapping and must
    // be dropped (and never outlive) it.
    entry: NativeFn,
    _library: Library,
    path: PathBuf,
}

impl NativeLibrary {
    /// Platform file name for a library stem, e.g. `libzig_zipper.so`.
    pub fn file_name(stem: &str) -> String {
        format!("{DLL_PREFIX}{stem}{DLL_SUFFIX}")
    }

    /// Load the library and resolve its entry symbol.
    pub fn load(artifact_dir: &Path, stem: &str, symbol: &str) -> Result<Self, LoadError> {
        let path = artifact_dir.join(Self::file_name(stem));
        if !path.exists() {
            return Err(LoadError::NotFound {
                candidates: vec![path],
            });
        }

        // SAFETY: loading runs library initializers; the artifact contract
        // requires a plain function export with no load-time side effects.
        let library = unsafe { Library::new(&path) }.map_err(|source| LoadError::Library {
            path: path.clone(),
            source,
        })?;

        // SAFETY: the published contract for the symbol is (i32) -> i32.
        let entry = unsafe { library.get::<NativeFn>(symbol.as_bytes()) }
            .map(|f| *f)
            .map_err(|source| LoadError::Symbol {
                symbol: symbol.to_string(),
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), symbol, "loaded native library");
        Ok(Self {
            entry,
            _library: library,
            path,
        })
    }

    /// Call the entry point; nonzero status becomes an error.
    pub fn invoke(&self, n: u32) -> Result<(), BackendError> {
        // SAFETY: symbol was resolved against the published signature and
        // the library mapping is kept alive by `self`.
        let status = unsafe { (self.entry)(n as i32) };
        if status == 0 {
            Ok(())
        } else {
            Err(BackendError::NativeStatus { status })
        }
    }

    /// Path the library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
