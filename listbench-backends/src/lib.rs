//! ListBench Backends - Discovery and Execution Adapters
//!
//! Everything that crosses a boundary lives here:
//! - `KernelModule`: the mandatory compiled extension, loaded with
//!   `libloading` and resolved symbol-by-symbol at discovery time
//! - `VmModule`: wasm modules compiled once by the embedded `wasmtime` host,
//!   instantiated fresh per invocation
//! - `NativeLibrary`: an optional shared library called through an explicit
//!   `extern "C" fn(i32) -> i32` signature with a nonzero failure sentinel
//! - `Registry`: the discovery phase that resolves every artifact up front
//!   and exposes only runnable backends behind one uniform `invoke` contract
//!
//! Artifact ABI, shared by out-of-tree artifacts:
//! - extension symbols: `extern "C" fn(i32) -> i64`, non-negative checksum,
//!   negative = failure
//! - vm exports: `(param i32) (result i64)`, traps reported by the host
//! - native symbol: `extern "C" fn(i32) -> i32`, zero = success
//!
//! Failures inside any invocation are converted to [`BackendError`] at the
//! adapter boundary; they never unwind into the timing engine.

mod error;
mod kernel;
mod native;
mod registry;
mod wasm;

pub use error::{BackendError, LoadError};
pub use kernel::{KernelFn, KernelModule};
pub use native::NativeLibrary;
pub use registry::{Backend, BackendSpec, Registry, SkippedBackend};
pub use wasm::{VmModule, WasmHost};
