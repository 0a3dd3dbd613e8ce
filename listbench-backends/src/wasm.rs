//! Embedded VM Host
//!
//! Module bytes are read and compiled once at discovery; every invocation
//! gets a fresh `Store` and `Instance`, so no state can leak between
//! repeats. The exported entry point is looked up by its fixed name with
//! the agreed `(param i32) (result i64)` type; traps and instantiation
//! failures surface as adapter errors.

use std::fs;
use std::path::{Path, PathBuf};

use wasmtime::{Engine, Instance, Module, Store};

use crate::error::{BackendError, LoadError};

/// Shared VM engine; one per registry, cheap to clone into modules.
#[derive(Clone)]
pub struct WasmHost {
    engine: Engine,
}

impl WasmHost {
    /// Host with default engine configuration.
    pub fn new() -> Self {
        Self {
            engine: Engine::default(),
        }
    }
}

impl Default for WasmHost {
    fn default() -> Self {
        Self::new()
    }
}

/// A compiled wasm module plus the export it is invoked through.
pub struct VmModule {
    engine: Engine,
    module: Module,
    export: String,
    path: PathBuf,
}

impl VmModule {
    /// Read and compile the module at `path`.
    pub fn load(host: &WasmHost, path: &Path, export: &str) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound {
                candidates: vec![path.to_path_buf()],
            });
        }
        let bytes = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let module =
            Module::new(&host.engine, &bytes).map_err(|e| LoadError::WasmCompile {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        tracing::debug!(path = %path.display(), export, "compiled wasm module");
        Ok(Self {
            engine: host.engine.clone(),
            module,
            export: export.to_string(),
            path: path.to_path_buf(),
        })
    }

    /// Compile a module from in-memory bytes (wat accepted); test seam and
    /// loader back end.
    pub fn from_bytes(host: &WasmHost, bytes: &[u8], export: &str) -> Result<Self, LoadError> {
        let module = Module::new(&host.engine, bytes).map_err(|e| LoadError::WasmCompile {
            path: PathBuf::from("<memory>"),
            message: e.to_string(),
        })?;
        Ok(Self {
            engine: host.engine.clone(),
            module,
            export: export.to_string(),
            path: PathBuf::from("<memory>"),
        })
    }

    /// Instantiate a fresh execution context and call the entry point.
    pub fn invoke(&self, n: u32) -> Result<i64, BackendError> {
        let mut store = Store::new(&self.engine, ());
        let instance =
            Instance::new(&mut store, &self.module, &[]).map_err(|e| BackendError::Trap {
                message: e.to_string(),
            })?;
        let entry = instance
            .get_typed_func::<i32, i64>(&mut store, &self.export)
            .map_err(|e| BackendError::MissingExport {
                name: self.export.clone(),
                message: e.to_string(),
            })?;
        entry
            .call(&mut store, n as i32)
            .map_err(|e| BackendError::Trap {
                message: e.to_string(),
            })
    }

    /// Path the module bytes came from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
