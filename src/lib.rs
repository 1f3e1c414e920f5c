// src/lib.rs
//! # Native Byte-Buffer Primitives
//!
//! Thin, safe wrappers over the platform C library's buffer routines:
//!
//! - [`equal`]: length check plus `memcmp`
//! - [`ordinal_equal`]: length check plus terminator-sensitive `strncmp`
//! - [`find_byte`]: `memchr`, returning `None` when the byte is absent
//! - [`copy`]: overlap-safe `memmove` of the common prefix
//!
//! The C library is already vectorized, so nothing here reimplements a
//! comparison or search loop. [`baseline`] holds the built-in Rust equivalents
//! and [`harness`] the workloads the criterion benches run both through.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod baseline;
pub mod error;
pub mod harness;
pub mod native;

// Re-export main types
pub use error::{BufferError, Result, ResultExt};
pub use native::{copy, copy_within, equal, find_byte, ordinal_equal};

/// Commonly used imports.
pub mod prelude {
    pub use crate::error::{BufferError, Result, ResultExt};
    pub use crate::harness::{BenchConfig, CopyFn, EqualFn, FindByteFn, Workload};
    pub use crate::native::{copy, copy_within, equal, find_byte, ordinal_equal};
}
