//! Error types for Sobol sequence generation.
//!
//! This module provides:
//! - `ConfigError`: configuration builder failures
//! - `SobolError`: generator construction failures
//! - `SequenceError`: sequential producer exhaustion
//!
//! Construction failures are deterministic functions of the configuration
//! and table, detected synchronously; once construction succeeds, the
//! generation algorithms are total and only exhaustion remains.

use thiserror::Error;

/// Configuration validation errors.
///
/// These errors occur when a [`SobolConfigBuilder`](super::SobolConfigBuilder)
/// is built with missing or out-of-range parameters.
///
/// # Examples
///
/// ```
/// use gsa_sampling::sobol::{ConfigError, SobolConfig};
///
/// let err = SobolConfig::builder()
///     .n_samples(0)
///     .n_dimensions(2)
///     .build()
///     .unwrap_err();
/// assert_eq!(err, ConfigError::InvalidSampleCount(0));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Sample count below the minimum of 1.
    #[error("Invalid sample count {0}: must be at least 1")]
    InvalidSampleCount(usize),

    /// Dimension count below the minimum of 1.
    #[error("Invalid dimension count {0}: must be at least 1")]
    InvalidDimensionCount(usize),

    /// Scale outside the valid range [1, 63].
    #[error("Invalid scale {0}: must be in range [1, 63]")]
    InvalidScale(u32),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Generator construction errors.
///
/// These errors occur when a [`SobolSequence`](super::SobolSequence) is
/// constructed with a configuration the direction-number table or scale
/// cannot support. No partial generator is created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SobolError {
    /// The table holds too few dimensions for the requested sequence.
    ///
    /// A table of capacity `c` supports at most `c + 1` sequence
    /// dimensions, since dimension 0 needs no table entry.
    #[error(
        "Insufficient dimensions: requested {requested}, table supports at most {}",
        .capacity + 1
    )]
    InsufficientDimensions {
        /// Requested dimension count.
        requested: usize,
        /// Dimension capacity of the table.
        capacity: usize,
    },

    /// The sample count needs more index bits than the scale provides.
    ///
    /// Recoverable only by reducing the sample count or raising the
    /// scale.
    #[error("Insufficient bits: {required} index bits needed, scale is {scale}")]
    InsufficientBits {
        /// Index bits needed, `ceil(log2(n_samples))`.
        required: u32,
        /// Configured fixed-point scale.
        scale: u32,
    },

    /// Configuration validation failure.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Sequential producer errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Advance was called after the configured sample count was produced.
    ///
    /// The producer is not restartable; construct a new generator to
    /// iterate again.
    #[error("Sequence exhausted: all {n_samples} samples have been produced")]
    Exhausted {
        /// Configured sample count.
        n_samples: usize,
    },
}
