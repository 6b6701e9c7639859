//! Sobol sequence configuration.
//!
//! This module provides the configuration type and builder for Sobol
//! sequence generation.

use super::error::ConfigError;

/// Default fixed-point scale (bit precision) of generated values.
///
/// Thirty-one bits matches the classic Algorithm 659 implementations and
/// addresses up to `2^31` samples.
pub const DEFAULT_SCALE: u32 = 31;

/// Maximum fixed-point scale.
///
/// Direction numbers are held in `u64` words, so the scale must leave
/// shifts of up to `2^scale` representable.
pub const MAX_SCALE: u32 = 63;

/// Sobol sequence configuration.
///
/// Immutable configuration specifying how many samples to produce, the
/// dimensionality of each point, and the fixed-point scale used for the
/// integer recurrence. Use [`SobolConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use gsa_sampling::sobol::{SobolConfig, DEFAULT_SCALE};
///
/// let config = SobolConfig::builder()
///     .n_samples(1024)
///     .n_dimensions(5)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_samples(), 1024);
/// assert_eq!(config.n_dimensions(), 5);
/// assert_eq!(config.scale(), DEFAULT_SCALE);
/// assert_eq!(config.index_bits(), 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SobolConfig {
    /// Number of points the sequence will produce.
    n_samples: usize,
    /// Dimensionality of each point.
    n_dimensions: usize,
    /// Fixed-point scale (bit precision) of the integer recurrence.
    scale: u32,
}

impl SobolConfig {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gsa_sampling::sobol::SobolConfig;
    ///
    /// let config = SobolConfig::builder()
    ///     .n_samples(100)
    ///     .n_dimensions(3)
    ///     .build()
    ///     .unwrap();
    /// ```
    #[inline]
    pub fn builder() -> SobolConfigBuilder {
        SobolConfigBuilder::default()
    }

    /// Returns the number of points the sequence will produce.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the dimensionality of each point.
    #[inline]
    pub fn n_dimensions(&self) -> usize {
        self.n_dimensions
    }

    /// Returns the fixed-point scale.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns `L = ceil(log2(n_samples))`, the number of index bits
    /// needed to address every sample.
    ///
    /// This is the number of direction-number rows the generator derives
    /// per dimension; it must not exceed [`scale`](Self::scale).
    #[inline]
    pub fn index_bits(&self) -> u32 {
        if self.n_samples <= 1 {
            0
        } else {
            usize::BITS - (self.n_samples - 1).leading_zeros()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_samples` is 0
    /// - `n_dimensions` is 0
    /// - `scale` is 0 or greater than [`MAX_SCALE`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_samples == 0 {
            return Err(ConfigError::InvalidSampleCount(self.n_samples));
        }
        if self.n_dimensions == 0 {
            return Err(ConfigError::InvalidDimensionCount(self.n_dimensions));
        }
        if self.scale == 0 || self.scale > MAX_SCALE {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        Ok(())
    }
}

/// Builder for [`SobolConfig`].
///
/// Provides a fluent API for constructing configurations with validation
/// at build time. The scale defaults to [`DEFAULT_SCALE`] when not set.
///
/// # Examples
///
/// ```rust
/// use gsa_sampling::sobol::SobolConfig;
///
/// let config = SobolConfig::builder()
///     .n_samples(4096)
///     .n_dimensions(8)
///     .scale(20)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SobolConfigBuilder {
    n_samples: Option<usize>,
    n_dimensions: Option<usize>,
    scale: Option<u32>,
}

impl SobolConfigBuilder {
    /// Sets the number of points the sequence will produce.
    ///
    /// # Arguments
    ///
    /// * `n_samples` - Point count, at least 1
    #[inline]
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = Some(n_samples);
        self
    }

    /// Sets the dimensionality of each point.
    ///
    /// # Arguments
    ///
    /// * `n_dimensions` - Dimension count, at least 1
    #[inline]
    pub fn n_dimensions(mut self, n_dimensions: usize) -> Self {
        self.n_dimensions = Some(n_dimensions);
        self
    }

    /// Sets the fixed-point scale.
    ///
    /// # Arguments
    ///
    /// * `scale` - Bit precision in [1, [`MAX_SCALE`]]
    #[inline]
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_samples` or `n_dimensions` is not set or invalid
    /// - `scale` is outside [1, [`MAX_SCALE`]]
    pub fn build(self) -> Result<SobolConfig, ConfigError> {
        let n_samples = self.n_samples.ok_or(ConfigError::InvalidParameter {
            name: "n_samples",
            value: "must be specified".to_string(),
        })?;

        let n_dimensions = self.n_dimensions.ok_or(ConfigError::InvalidParameter {
            name: "n_dimensions",
            value: "must be specified".to_string(),
        })?;

        let config = SobolConfig {
            n_samples,
            n_dimensions,
            scale: self.scale.unwrap_or(DEFAULT_SCALE),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = SobolConfig::builder()
            .n_samples(1000)
            .n_dimensions(4)
            .build()
            .unwrap();

        assert_eq!(config.n_samples(), 1000);
        assert_eq!(config.n_dimensions(), 4);
        assert_eq!(config.scale(), DEFAULT_SCALE);
    }

    #[test]
    fn test_config_builder_with_scale() {
        let config = SobolConfig::builder()
            .n_samples(16)
            .n_dimensions(2)
            .scale(12)
            .build()
            .unwrap();

        assert_eq!(config.scale(), 12);
    }

    #[test]
    fn test_config_invalid_zero_samples() {
        let result = SobolConfig::builder().n_samples(0).n_dimensions(2).build();

        assert!(matches!(result, Err(ConfigError::InvalidSampleCount(0))));
    }

    #[test]
    fn test_config_invalid_zero_dimensions() {
        let result = SobolConfig::builder().n_samples(16).n_dimensions(0).build();

        assert!(matches!(result, Err(ConfigError::InvalidDimensionCount(0))));
    }

    #[test]
    fn test_config_invalid_scale() {
        let result = SobolConfig::builder()
            .n_samples(16)
            .n_dimensions(2)
            .scale(0)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidScale(0))));

        let result = SobolConfig::builder()
            .n_samples(16)
            .n_dimensions(2)
            .scale(MAX_SCALE + 1)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidScale(64))));
    }

    #[test]
    fn test_config_missing_samples() {
        let result = SobolConfig::builder().n_dimensions(2).build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "n_samples",
                ..
            })
        ));
    }

    #[test]
    fn test_config_missing_dimensions() {
        let result = SobolConfig::builder().n_samples(16).build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "n_dimensions",
                ..
            })
        ));
    }

    #[test]
    fn test_index_bits() {
        let bits = |n: usize| {
            SobolConfig::builder()
                .n_samples(n)
                .n_dimensions(1)
                .build()
                .unwrap()
                .index_bits()
        };

        assert_eq!(bits(1), 0);
        assert_eq!(bits(2), 1);
        assert_eq!(bits(3), 2);
        assert_eq!(bits(4), 2);
        assert_eq!(bits(5), 3);
        assert_eq!(bits(1024), 10);
        assert_eq!(bits(1025), 11);
    }
}
