//! ListBench Kernels - Compiled Extension Artifact
//!
//! Built as a `cdylib` and loaded by the benchmark host through `libloading`.
//! Four list representations, each exported for both workloads:
//!
//! | strategy | representation                                  |
//! |----------|-------------------------------------------------|
//! | safe     | Rc/RefCell doubly linked list                   |
//! | raw      | raw-pointer doubly linked list                  |
//! | arena    | bump-allocated nodes from a preallocated buffer |
//! | zipper   | two contiguous stacks forming a cursor          |
//!
//! ABI: every export is `extern "C" fn(i32) -> i64`. Non-negative values are
//! workload checksums (`n*(n-1)/2` for append-and-sum, the sum of insertion
//! positions for random-insert); negative values are the failure sentinel.
//! Panics never cross the boundary; they are caught and reported as the
//! sentinel.
//!
//! The insertion workload owns its randomness: the generator here uses the
//! same constants and draw order as the host, which checks the reported
//! checksums against its own reference on every trial.

mod arena;
mod raw;
mod rng;
mod safe;
mod zipper;

use std::panic::{catch_unwind, AssertUnwindSafe};

pub use arena::ArenaList;
pub use raw::RawList;
pub use rng::Lcg;
pub use safe::SafeList;
pub use zipper::{RawZipperList, ZipperList};

/// Sentinel returned when a strategy fails or panics.
pub const FAILURE: i64 = -1;

fn guarded(run: impl FnOnce() -> i64) -> i64 {
    match catch_unwind(AssertUnwindSafe(run)) {
        Ok(value) => value,
        Err(_) => FAILURE,
    }
}

/// Drive an insert-capable container through the random-insertion workload
/// and accumulate the position checksum.
fn insert_checksum(n: i32, mut insert: impl FnMut(usize, i64)) -> i64 {
    let mut lcg = Lcg::new();
    let mut checksum = 0i64;
    for i in 0..n as usize {
        let value = lcg.next_value();
        let position = if i == 0 { 0 } else { value as usize % i };
        insert(position, i as i64);
        checksum += position as i64;
    }
    checksum
}

// ─── append-and-sum ──────────────────────────────────────────────────────────

fn safe_append(n: i32) -> i64 {
    if n < 0 {
        return FAILURE;
    }
    let mut list = SafeList::new();
    for i in 0..n as i64 {
        list.push_back(i);
    }
    list.sum()
}

fn raw_append(n: i32) -> i64 {
    if n < 0 {
        return FAILURE;
    }
    let mut list = RawList::new();
    for i in 0..n as i64 {
        list.push_back(i);
    }
    list.sum()
}

fn arena_append(n: i32) -> i64 {
    if n < 0 {
        return FAILURE;
    }
    let mut list = ArenaList::with_capacity(n as usize);
    for i in 0..n as i64 {
        list.push_back(i);
    }
    list.sum()
}

fn zipper_append(n: i32) -> i64 {
    if n < 0 {
        return FAILURE;
    }
    let mut list = ZipperList::with_capacity(n as usize);
    for i in 0..n as i64 {
        list.push_back(i);
    }
    list.sum()
}

/// Append-and-sum over the reference-counted list.
#[no_mangle]
pub extern "C" fn run_safe_append(n: i32) -> i64 {
    guarded(|| safe_append(n))
}

/// Append-and-sum over the raw-pointer list.
#[no_mangle]
pub extern "C" fn run_raw_append(n: i32) -> i64 {
    guarded(|| raw_append(n))
}

/// Append-and-sum over the arena-allocated list.
#[no_mangle]
pub extern "C" fn run_arena_append(n: i32) -> i64 {
    guarded(|| arena_append(n))
}

/// Append-and-sum over the zipper.
#[no_mangle]
pub extern "C" fn run_zipper_append(n: i32) -> i64 {
    guarded(|| zipper_append(n))
}

// ─── random-insert ───────────────────────────────────────────────────────────

fn safe_insert(n: i32) -> i64 {
    if n < 0 {
        return FAILURE;
    }
    let mut list = SafeList::new();
    insert_checksum(n, |position, value| list.insert(position, value))
}

fn raw_insert(n: i32) -> i64 {
    if n < 0 {
        return FAILURE;
    }
    let mut list = RawList::new();
    insert_checksum(n, |position, value| list.insert(position, value))
}

fn arena_insert(n: i32) -> i64 {
    if n < 0 {
        return FAILURE;
    }
    let mut list = ArenaList::with_capacity(n as usize);
    insert_checksum(n, |position, value| list.insert(position, value))
}

fn zipper_insert(n: i32) -> i64 {
    if n < 0 {
        return FAILURE;
    }
    let mut list = ZipperList::with_capacity(n as usize);
    insert_checksum(n, |position, value| list.insert(position, value))
}

fn raw_zipper_insert(n: i32) -> i64 {
    if n < 0 {
        return FAILURE;
    }
    let mut list = RawZipperList::with_capacity(n as usize);
    insert_checksum(n, |position, value| list.insert(position, value))
}

/// Random insertion into the reference-counted list.
#[no_mangle]
pub extern "C" fn run_safe_insert(n: i32) -> i64 {
    guarded(|| safe_insert(n))
}

/// Random insertion into the raw-pointer list.
#[no_mangle]
pub extern "C" fn run_raw_insert(n: i32) -> i64 {
    guarded(|| raw_insert(n))
}

/// Random insertion into the arena-allocated list.
#[no_mangle]
pub extern "C" fn run_arena_insert(n: i32) -> i64 {
    guarded(|| arena_insert(n))
}

/// Random insertion into the zipper.
#[no_mangle]
pub extern "C" fn run_zipper_insert(n: i32) -> i64 {
    guarded(|| zipper_insert(n))
}

/// Random insertion into the zipper, unchecked stack transfers.
#[no_mangle]
pub extern "C" fn run_raw_zipper_insert(n: i32) -> i64 {
    guarded(|| raw_zipper_insert(n))
}
