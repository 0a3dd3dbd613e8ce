//! Backend Registry
//!
//! Discovery happens exactly once, before any measurement: every artifact a
//! suite's backend table names is resolved to either a runnable [`Backend`]
//! or a [`SkippedBackend`] with its reason. The timing engine only ever
//! sees backends already known to be runnable; there are no availability
//! checks at call sites.
//!
//! The registry owns all loaded artifacts for the suite's lifetime.
//! Adapters borrow them; nothing reloads or mutates them mid-suite.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::rc::Rc;

use listbench_report::BackendKind;

use crate::error::BackendError;
use crate::kernel::{KernelFn, KernelModule};
use crate::native::NativeLibrary;
use crate::wasm::{VmModule, WasmHost};

/// Static description of one backend a suite wants to measure.
#[derive(Debug, Clone, Copy)]
pub enum BackendSpec {
    /// Locally defined reference implementation.
    InProcess {
        /// Registered name.
        name: &'static str,
        /// Driver returning the workload checksum.
        run: fn(u32) -> i64,
    },
    /// Strategy symbol inside the mandatory extension.
    Kernel {
        /// Registered name.
        name: &'static str,
        /// C ABI symbol to resolve.
        symbol: &'static str,
    },
    /// Wasm module file executed by the embedded VM host.
    Vm {
        /// Registered name.
        name: &'static str,
        /// File name under the artifact directory.
        file: &'static str,
        /// Export invoked per repeat.
        export: &'static str,
    },
    /// Native shared library with a sentinel-returning entry point.
    Native {
        /// Registered name.
        name: &'static str,
        /// Library stem; platform prefix/suffix are applied.
        stem: &'static str,
        /// Symbol to resolve.
        symbol: &'static str,
    },
}

impl BackendSpec {
    /// Registered backend name.
    pub fn name(&self) -> &'static str {
        match self {
            BackendSpec::InProcess { name, .. }
            | BackendSpec::Kernel { name, .. }
            | BackendSpec::Vm { name, .. }
            | BackendSpec::Native { name, .. } => name,
        }
    }

    /// Execution mechanism of this backend.
    pub fn kind(&self) -> BackendKind {
        match self {
            BackendSpec::InProcess { .. } => BackendKind::InProcess,
            BackendSpec::Kernel { .. } => BackendKind::FfiNative,
            BackendSpec::Vm { .. } => BackendKind::EmbeddedVm,
            BackendSpec::Native { .. } => BackendKind::NativeLibrary,
        }
    }
}

enum Runner {
    InProcess(fn(u32) -> i64),
    Kernel {
        func: KernelFn,
        // Keeps the library mapping alive for as long as `func` is callable.
        _module: Rc<KernelModule>,
    },
    Vm(VmModule),
    Native(NativeLibrary),
}

/// A backend that passed discovery and can be invoked.
pub struct Backend {
    name: &'static str,
    kind: BackendKind,
    runner: Runner,
}

impl Backend {
    /// Registered name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Execution mechanism.
    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    /// Run the workload once for `n` iterations.
    ///
    /// Returns `Some(checksum)` for backends that report one, `None` for the
    /// native sentinel contract. Every failure mode is caught here and
    /// converted; this call never unwinds.
    pub fn invoke(&self, n: u32) -> Result<Option<i64>, BackendError> {
        match &self.runner {
            Runner::InProcess(run) => {
                match catch_unwind(AssertUnwindSafe(|| run(n))) {
                    Ok(checksum) => Ok(Some(checksum)),
                    Err(payload) => Err(BackendError::Panicked {
                        message: panic_message(payload.as_ref()),
                    }),
                }
            }
            Runner::Kernel { func, .. } => {
                // SAFETY: resolved at discovery against the extension ABI;
                // the module mapping is owned by this backend.
                let value = unsafe { func(n as i32) };
                if value < 0 {
                    Err(BackendError::KernelFailure { code: value })
                } else {
                    Ok(Some(value))
                }
            }
            Runner::Vm(module) => module.invoke(n).map(Some),
            Runner::Native(library) => library.invoke(n).map(|()| None),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// A backend excluded at discovery, with the reason it was skipped.
#[derive(Debug, Clone)]
pub struct SkippedBackend {
    /// Registered name.
    pub name: &'static str,
    /// Execution mechanism it would have used.
    pub kind: BackendKind,
    /// Why discovery excluded it.
    pub reason: String,
}

/// The set of runnable backends for one suite, resolved up front.
pub struct Registry {
    backends: Vec<Backend>,
    skipped: Vec<SkippedBackend>,
}

impl Registry {
    /// Resolve every spec against the artifact directory.
    ///
    /// Each failure marks only that backend unavailable; discovery of the
    /// others always continues. `kernel` is the already-loaded mandatory
    /// extension; callers enforce its fatality before building a registry
    /// (tests pass `None` to run artifact-free).
    pub fn discover(
        specs: &[BackendSpec],
        artifact_dir: &Path,
        kernel: Option<&Rc<KernelModule>>,
    ) -> Self {
        let host = WasmHost::new();
        let mut backends = Vec::new();
        let mut skipped = Vec::new();

        for spec in specs {
            let resolved = match spec {
                BackendSpec::InProcess { run, .. } => Ok(Runner::InProcess(*run)),
                BackendSpec::Kernel { symbol, .. } => match kernel {
                    Some(module) => module
                        .resolve(symbol)
                        .map(|func| Runner::Kernel {
                            func,
                            _module: Rc::clone(module),
                        })
                        .map_err(|e| e.to_string()),
                    None => Err("kernel module not loaded".to_string()),
                },
                BackendSpec::Vm { file, export, .. } => {
                    VmModule::load(&host, &artifact_dir.join(file), export)
                        .map(Runner::Vm)
                        .map_err(|e| e.to_string())
                }
                BackendSpec::Native { stem, symbol, .. } => {
                    NativeLibrary::load(artifact_dir, stem, symbol)
                        .map(Runner::Native)
                        .map_err(|e| e.to_string())
                }
            };

            match resolved {
                Ok(runner) => {
                    tracing::debug!(backend = spec.name(), "backend available");
                    backends.push(Backend {
                        name: spec.name(),
                        kind: spec.kind(),
                        runner,
                    });
                }
                Err(reason) => {
                    tracing::debug!(backend = spec.name(), %reason, "backend skipped");
                    skipped.push(SkippedBackend {
                        name: spec.name(),
                        kind: spec.kind(),
                        reason,
                    });
                }
            }
        }

        Self { backends, skipped }
    }

    /// Backends that passed discovery, in spec order.
    pub fn backends(&self) -> &[Backend] {
        &self.backends
    }

    /// Backends excluded at discovery.
    pub fn skipped(&self) -> &[SkippedBackend] {
        &self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forty_five(_n: u32) -> i64 {
        45
    }

    fn boom(_n: u32) -> i64 {
        panic!("deliberate test panic")
    }

    fn specs() -> Vec<BackendSpec> {
        vec![
            BackendSpec::InProcess {
                name: "local",
                run: forty_five,
            },
            BackendSpec::Kernel {
                name: "kernel-safe",
                symbol: "run_safe_append",
            },
            BackendSpec::Vm {
                name: "zig-wasm",
                file: "zig_list.wasm",
                export: "run_append",
            },
            BackendSpec::Native {
                name: "zig-native",
                stem: "zig_zipper",
                symbol: "run_insert",
            },
        ]
    }

    #[test]
    fn test_discovery_degrades_per_backend() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::discover(&specs(), dir.path(), None);

        // Only the in-process backend survives an empty artifact dir.
        assert_eq!(registry.backends().len(), 1);
        assert_eq!(registry.backends()[0].name(), "local");
        assert_eq!(registry.skipped().len(), 3);
        assert!(registry.skipped().iter().all(|s| !s.reason.is_empty()));
    }

    #[test]
    fn test_in_process_invoke_returns_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::discover(
            &[BackendSpec::InProcess {
                name: "local",
                run: forty_five,
            }],
            dir.path(),
            None,
        );
        assert_eq!(registry.backends()[0].invoke(10).unwrap(), Some(45));
    }

    #[test]
    fn test_panic_is_caught_at_the_adapter() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::discover(
            &[BackendSpec::InProcess {
                name: "broken",
                run: boom,
            }],
            dir.path(),
            None,
        );
        match registry.backends()[0].invoke(10) {
            Err(BackendError::Panicked { message }) => {
                assert!(message.contains("deliberate"))
            }
            other => panic!("expected panic error, got {other:?}"),
        }
    }

    #[test]
    fn test_spec_metadata() {
        let spec = BackendSpec::Vm {
            name: "zig-wasm",
            file: "zig_list.wasm",
            export: "run_append",
        };
        assert_eq!(spec.name(), "zig-wasm");
        assert_eq!(spec.kind(), BackendKind::EmbeddedVm);
    }
}
