// src/harness/workload.rs
//! Pre-filled buffers for a single benchmark size

use super::{CopyFn, EqualFn, FindByteFn};
use crate::error::{BufferError, Result};

/// Two identical `filler`-filled buffers plus a zeroed copy destination.
#[derive(Debug, Clone)]
pub struct Workload {
    /// Left-hand comparison input, also the copy source
    pub left: Vec<u8>,
    /// Right-hand comparison input
    pub right: Vec<u8>,
    /// Copy destination
    pub scratch: Vec<u8>,
}

impl Workload {
    /// Allocates the three buffers for `size` bytes.
    pub fn new(size: usize, filler: u8) -> Self {
        Self {
            left: vec![filler; size],
            right: vec![filler; size],
            scratch: vec![0; size],
        }
    }

    /// Size of each buffer in bytes.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.left.len()
    }

    /// Runs `equal` once on the two identical buffers.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::ContractViolation`] if it reports a difference.
    pub fn verify_equal(&self, equal: EqualFn) -> Result<()> {
        if equal(&self.left, &self.right) {
            Ok(())
        } else {
            Err(BufferError::ContractViolation(format!(
                "identical {}-byte buffers compared unequal",
                self.size()
            )))
        }
    }

    /// Searches for `needle`, which the workload never contains.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::ContractViolation`] if a match is reported.
    pub fn verify_miss(&self, find_byte: FindByteFn, needle: u8) -> Result<()> {
        match find_byte(&self.left, needle) {
            None => Ok(()),
            Some(index) => Err(BufferError::ContractViolation(format!(
                "found absent byte {:#04x} at {}",
                needle, index
            ))),
        }
    }

    /// Copies `left` into `scratch` and checks count and content.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::ContractViolation`] on a short copy or if the
    /// destination differs from the source afterwards.
    pub fn verify_copy(&mut self, copy: CopyFn) -> Result<()> {
        let copied = copy(&mut self.scratch, &self.left);
        if copied != self.size() {
            return Err(BufferError::ContractViolation(format!(
                "copied {} of {} bytes",
                copied,
                self.size()
            )));
        }
        if self.scratch != self.left {
            return Err(BufferError::ContractViolation(
                "destination differs from source after copy".into(),
            ));
        }
        Ok(())
    }
}
