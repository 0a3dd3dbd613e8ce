//! Adapter and Discovery Errors

use std::path::PathBuf;

use thiserror::Error;

/// Failure to resolve an artifact during the discovery phase.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The artifact file does not exist at any candidate path.
    #[error("artifact not found (tried {})", format_candidates(.candidates))]
    NotFound {
        /// Paths probed, in order.
        candidates: Vec<PathBuf>,
    },

    /// The dynamic loader rejected the library.
    #[error("failed to load `{path}`: {source}")]
    Library {
        /// Path of the rejected library.
        path: PathBuf,
        /// Loader error.
        #[source]
        source: libloading::Error,
    },

    /// A required symbol is missing from a loaded library.
    #[error("symbol `{symbol}` missing from `{path}`: {source}")]
    Symbol {
        /// Symbol name.
        symbol: String,
        /// Library the symbol was expected in.
        path: PathBuf,
        /// Loader error.
        #[source]
        source: libloading::Error,
    },

    /// The module bytes could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The VM host rejected the module bytes.
    #[error("failed to compile wasm module `{path}`: {message}")]
    WasmCompile {
        /// Path of the rejected module.
        path: PathBuf,
        /// Host diagnostic.
        message: String,
    },
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure during a single backend invocation.
///
/// Every variant is terminal for that backend's measurement and harmless to
/// the rest of the suite.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The extension strategy reported its failure sentinel.
    #[error("kernel strategy reported failure (code {code})")]
    KernelFailure {
        /// Negative sentinel value returned by the symbol.
        code: i64,
    },

    /// The VM module has no export under the agreed name.
    #[error("export `{name}` not usable: {message}")]
    MissingExport {
        /// Export name looked up.
        name: String,
        /// Host diagnostic.
        message: String,
    },

    /// The VM invocation trapped or failed to instantiate.
    #[error("vm invocation failed: {message}")]
    Trap {
        /// Host diagnostic.
        message: String,
    },

    /// The native symbol returned its nonzero failure sentinel.
    #[error("native call returned status {status}")]
    NativeStatus {
        /// Nonzero status value.
        status: i32,
    },

    /// An in-process implementation panicked.
    #[error("backend panicked: {message}")]
    Panicked {
        /// Panic payload, when it was a string.
        message: String,
    },

    /// The returned checksum disagrees with the workload's expected value.
    #[error("checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch {
        /// Value the workload defines for this iteration count.
        expected: i64,
        /// Value the backend returned.
        actual: i64,
    },

    /// All repeats completed in zero measurable time.
    #[error("zero elapsed time across all repeats")]
    ZeroElapsed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_candidates() {
        let err = LoadError::NotFound {
            candidates: vec![PathBuf::from("artifacts/a.so"), PathBuf::from("target/a.so")],
        };
        let text = err.to_string();
        assert!(text.contains("artifacts/a.so"));
        assert!(text.contains("target/a.so"));
    }

    #[test]
    fn test_backend_error_messages() {
        assert_eq!(
            BackendError::NativeStatus { status: 3 }.to_string(),
            "native call returned status 3"
        );
        assert_eq!(
            BackendError::ChecksumMismatch {
                expected: 45,
                actual: 44
            }
            .to_string(),
            "checksum mismatch: expected 45, got 44"
        );
    }
}
