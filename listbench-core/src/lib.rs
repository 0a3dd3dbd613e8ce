#![warn(missing_docs)]
//! ListBench Core - Deterministic Workload Layer
//!
//! This crate provides the pure, backend-independent pieces of the suite:
//! - `Lcg`, the fixed linear-congruential generator every backend reproduces
//! - `Workload` definitions with their expected checksums
//! - In-process reference implementations used as ranking baselines
//!
//! Nothing in this crate performs I/O or touches an artifact; it is the
//! ground truth the execution adapters are compared against.

mod reference;
mod rng;
mod workload;

pub use reference::{deque_append, deque_insert, linked_append, vec_insert};
pub use rng::{insertion_positions, position_checksum, Lcg};
pub use rng::{INCREMENT, MASK, MULTIPLIER, SEED};
pub use workload::Workload;
