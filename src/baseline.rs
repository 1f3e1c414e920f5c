// src/baseline.rs
//! Built-in Rust equivalents of the native primitives.
//!
//! Same signatures and contracts as [`crate::native`], implemented with slice
//! operations only. The benchmarks compare against these, and the tests use
//! them as a reference.

/// Slice equality (`==`).
#[inline]
pub fn equal(a: &[u8], b: &[u8]) -> bool {
    a == b
}

/// First index of `target` via `iter().position`.
#[inline]
pub fn find_byte(buffer: &[u8], target: u8) -> Option<usize> {
    buffer.iter().position(|&b| b == target)
}

/// Copies the common prefix with `copy_from_slice`.
#[inline]
pub fn copy(destination: &mut [u8], source: &[u8]) -> usize {
    let count = destination.len().min(source.len());
    destination[..count].copy_from_slice(&source[..count]);
    count
}
