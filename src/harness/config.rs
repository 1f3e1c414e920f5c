// src/harness/config.rs
//! Configuration for benchmark runs

use crate::error::{BufferError, Result};

/// 1 KiB
pub const SIZE_1K: usize = 1 << 10;
/// 32 KiB
pub const SIZE_32K: usize = 1 << 15;
/// 1 MiB
pub const SIZE_1M: usize = 1 << 20;
/// 1 GiB
pub const SIZE_1G: usize = 1 << 30;

/// Selects the benchmark profile (`quick` or `full`).
pub const PROFILE_ENV: &str = "NATIVEBUF_BENCH_PROFILE";
/// Upper bound in bytes; larger sizes are dropped from the profile.
pub const MAX_SIZE_ENV: &str = "NATIVEBUF_BENCH_MAX_SIZE";

/// Buffer sizes and fill bytes used by the benchmarks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Buffer sizes to exercise, in bytes
    pub sizes: Vec<usize>,
    /// Byte every workload buffer is filled with
    pub filler: u8,
    /// Search target; must never equal `filler`
    pub needle: u8,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::quick()
    }
}

impl BenchConfig {
    /// Sizes from 1 byte up to 1 MiB.
    pub fn quick() -> Self {
        Self {
            sizes: vec![1, 256, 512, SIZE_1K, SIZE_32K, SIZE_1M],
            filler: b'a',
            needle: b'b',
        }
    }

    /// [`quick`](Self::quick) plus 1 GiB. Needs a few GiB of free memory.
    pub fn full() -> Self {
        let mut config = Self::quick();
        config.sizes.push(SIZE_1G);
        config
    }

    /// Builds a config from [`PROFILE_ENV`] and [`MAX_SIZE_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidConfig`] for an unknown profile, an
    /// unparsable size, or a result that fails [`validate`](Self::validate).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(PROFILE_ENV).as_deref().map(str::trim) {
            None | Some("") | Some("quick") => Self::quick(),
            Some("full") => Self::full(),
            Some(other) => {
                return Err(BufferError::InvalidConfig(format!(
                    "{} must be `quick` or `full`, got `{}`",
                    PROFILE_ENV, other
                )));
            }
        };

        if let Some(raw) = lookup(MAX_SIZE_ENV) {
            let max: usize = raw.trim().parse().map_err(|_| {
                BufferError::InvalidConfig(format!("{} is not a byte count: `{}`", MAX_SIZE_ENV, raw))
            })?;
            config = config.with_max_size(max);
        }

        config.validate()?;
        Ok(config)
    }

    /// Drops every size above `max`.
    pub fn with_max_size(mut self, max: usize) -> Self {
        self.sizes.retain(|&size| size <= max);
        self
    }

    /// Checks that the config can produce meaningful workloads.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidConfig`] if no sizes remain or if the
    /// needle equals the filler (every search would hit at index 0).
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BufferError::InvalidConfig("no buffer sizes selected".into()));
        }
        if self.needle == self.filler {
            return Err(BufferError::InvalidConfig(format!(
                "needle {:#04x} equals filler",
                self.needle
            )));
        }
        Ok(())
    }
}
