// src/harness/mod.rs
//! Benchmark support: size presets and pre-filled workloads.
//!
//! The criterion benches in `benches/` drive both [`crate::native`] and
//! [`crate::baseline`] through the function-pointer aliases below.

pub(crate) mod config;
pub(crate) mod workload;

pub use config::{BenchConfig, MAX_SIZE_ENV, PROFILE_ENV, SIZE_1G, SIZE_1K, SIZE_1M, SIZE_32K};
pub use workload::Workload;

/// Signature shared by the equality primitives.
pub type EqualFn = fn(&[u8], &[u8]) -> bool;
/// Signature shared by the byte-search primitives.
pub type FindByteFn = fn(&[u8], u8) -> Option<usize>;
/// Signature shared by the copy primitives.
pub type CopyFn = fn(&mut [u8], &[u8]) -> usize;
