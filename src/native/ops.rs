// src/native/ops.rs
//! Safe slice-based wrappers over [`super::raw`].
//!
//! Each function validates lengths in Rust and hands the actual work to
//! `memcmp`, `strncmp`, `memchr` or `memmove`. Empty inputs never reach the
//! C library.

use super::raw;
use crate::error::{BufferError, Result};
use std::ops::Range;

/// Returns `true` if `a` and `b` have the same length and identical bytes.
///
/// # Examples
///
/// ```
/// use nativebuf::equal;
///
/// assert!(equal(&[], &[]));
/// assert!(equal(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!equal(&[1, 2, 3], &[1, 2, 4]));
/// assert!(!equal(&[1, 2], &[1, 2, 3]));
/// ```
#[inline]
pub fn equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    unsafe { raw::memcmp_eq(a.as_ptr(), b.as_ptr(), a.len()) }
}

/// Equality through the count-bounded `strncmp` convention.
///
/// Agrees with [`equal`] for any input without an embedded `0x00`. When both
/// buffers hold a terminator at the same position, the bytes after it are not
/// compared:
///
/// ```
/// use nativebuf::{equal, ordinal_equal};
///
/// assert!(ordinal_equal(b"abc", b"abc"));
/// assert!(ordinal_equal(b"ab\0x", b"ab\0y"));
/// assert!(!equal(b"ab\0x", b"ab\0y"));
/// ```
#[inline]
pub fn ordinal_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    unsafe { raw::strncmp_eq(a.as_ptr(), b.as_ptr(), a.len()) }
}

/// Returns the offset of the first `target` byte in `buffer`, or `None`.
///
/// # Examples
///
/// ```
/// use nativebuf::find_byte;
///
/// assert_eq!(find_byte(&[10, 20, 30], 20), Some(1));
/// assert_eq!(find_byte(&[10, 20, 30], 99), None);
/// assert_eq!(find_byte(&[], 0), None);
/// ```
#[inline]
pub fn find_byte(buffer: &[u8], target: u8) -> Option<usize> {
    if buffer.is_empty() {
        return None;
    }
    unsafe { raw::memchr_index(buffer.as_ptr(), target, buffer.len()) }
}

/// Copies `min(destination.len(), source.len())` bytes and returns the count.
///
/// Nothing is written when either side is empty.
///
/// # Examples
///
/// ```
/// use nativebuf::copy;
///
/// let mut dest = [0u8; 5];
/// assert_eq!(copy(&mut dest, &[1, 2, 3]), 3);
/// assert_eq!(dest, [1, 2, 3, 0, 0]);
/// ```
#[inline]
pub fn copy(destination: &mut [u8], source: &[u8]) -> usize {
    let count = destination.len().min(source.len());
    if count == 0 {
        return 0;
    }
    unsafe { raw::memmove(destination.as_mut_ptr(), source.as_ptr(), count) };
    count
}

/// Overlap-safe copy of `buffer[src]` to `buffer[dest..]`, truncated to what
/// fits after `dest`. Returns the number of bytes moved.
///
/// # Errors
///
/// Returns [`BufferError::RangeOutOfBounds`] if `src` is inverted or extends
/// past the buffer, or if `dest` is past the end.
///
/// # Examples
///
/// ```
/// use nativebuf::copy_within;
/// # use nativebuf::BufferError;
///
/// let mut data = *b"abcdefgh";
/// assert_eq!(copy_within(&mut data, 0..5, 2)?, 5);
/// assert_eq!(&data, b"ababcdeh");
///
/// // Truncated: only two bytes fit after offset 6.
/// assert_eq!(copy_within(&mut data, 0..4, 6)?, 2);
/// # Ok::<(), BufferError>(())
/// ```
pub fn copy_within(buffer: &mut [u8], src: Range<usize>, dest: usize) -> Result<usize> {
    let len = buffer.len();
    if src.start > src.end || src.end > len {
        return Err(BufferError::RangeOutOfBounds {
            start: src.start,
            end: src.end,
            len,
        });
    }
    if dest > len {
        return Err(BufferError::RangeOutOfBounds {
            start: dest,
            end: dest,
            len,
        });
    }

    let count = (src.end - src.start).min(len - dest);
    if count == 0 {
        return Ok(0);
    }
    let base = buffer.as_mut_ptr();
    unsafe { raw::memmove(base.add(dest), base.add(src.start).cast_const(), count) };
    Ok(count)
}
