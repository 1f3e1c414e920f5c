// src/native/mod.rs
//! Buffer primitives backed by the platform C library

pub(crate) mod ops;
pub mod raw;

pub use ops::{copy, copy_within, equal, find_byte, ordinal_equal};
