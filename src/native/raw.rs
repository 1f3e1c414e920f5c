// src/native/raw.rs
//! Raw-pointer entry points into the platform C library.
//!
//! These are the unchecked counterparts of the safe functions in
//! [`crate::native`]. They perform no bounds checking and no empty-input
//! short-circuiting beyond what the C routines themselves do.

use libc::{c_char, c_int, c_void};

/// Returns `true` if the `len` bytes at `a` and `b` are identical (`memcmp`).
///
/// # Safety
///
/// Caller MUST guarantee that both `a` and `b` are valid for reads of `len`
/// bytes. The pointers must be non-null even when `len == 0`.
#[inline(always)]
pub unsafe fn memcmp_eq(a: *const u8, b: *const u8, len: usize) -> bool {
    debug_assert!(!a.is_null() && !b.is_null(), "memcmp_eq: null pointer");
    unsafe { libc::memcmp(a.cast::<c_void>(), b.cast::<c_void>(), len) == 0 }
}

/// Returns `true` if the `len` bytes at `a` and `b` compare equal under
/// `strncmp`, which stops at the first position where both hold `0x00`.
///
/// # Safety
///
/// Caller MUST guarantee that both `a` and `b` are valid for reads of `len`
/// bytes. The pointers must be non-null even when `len == 0`.
#[inline(always)]
pub unsafe fn strncmp_eq(a: *const u8, b: *const u8, len: usize) -> bool {
    debug_assert!(!a.is_null() && !b.is_null(), "strncmp_eq: null pointer");
    unsafe { libc::strncmp(a.cast::<c_char>(), b.cast::<c_char>(), len) == 0 }
}

/// Returns the offset of the first `target` byte in the `len` bytes at `s`
/// (`memchr`), or `None` when it does not occur.
///
/// # Safety
///
/// Caller MUST guarantee that `s` is valid for reads of `len` bytes. The
/// pointer must be non-null even when `len == 0`.
#[inline]
pub unsafe fn memchr_index(s: *const u8, target: u8, len: usize) -> Option<usize> {
    debug_assert!(!s.is_null(), "memchr_index: null pointer");
    let hit = unsafe { libc::memchr(s.cast::<c_void>(), c_int::from(target), len) };
    if hit.is_null() {
        return None;
    }
    // memchr only returns pointers inside [s, s + len).
    let offset = unsafe { hit.cast::<u8>().cast_const().offset_from(s) };
    Some(offset as usize)
}

/// Copies `len` bytes from `src` to `dst` (`memmove`). The regions may
/// overlap.
///
/// # Safety
///
/// Caller MUST guarantee that `src` is valid for reads and `dst` valid for
/// writes of `len` bytes. The pointers must be non-null even when
/// `len == 0`.
#[inline]
pub unsafe fn memmove(dst: *mut u8, src: *const u8, len: usize) {
    debug_assert!(!dst.is_null() && !src.is_null(), "memmove: null pointer");
    unsafe {
        libc::memmove(dst.cast::<c_void>(), src.cast::<c_void>(), len);
    }
}
