//! Sobol sequence generator.
//!
//! [`SobolSequence`] precomputes the direction-number matrix at
//! construction, then exposes two access modes over it: a stateful
//! [`advance`](SobolSequence::advance) that yields one point per call,
//! and a bulk [`sample_all`](SobolSequence::sample_all) that recomputes
//! the full matrix in one pass. The two modes produce identical values
//! row for row.

use gsa_directions::DirectionNumbers;
use tracing::debug;

use super::bits::least_significant_zero_bit;
use super::config::SobolConfig;
use super::error::{SequenceError, SobolError};
use super::matrix::DirectionMatrix;
use super::samples::SampleMatrix;

/// Sobol quasi-random sequence generator.
///
/// Holds the immutable configuration and direction-number matrix plus the
/// mutable iteration state of the sequential producer (`Y` accumulator,
/// cursor, and a pre-allocated output buffer). The bulk producer reads
/// only the immutable parts.
///
/// Advancing takes `&mut self`, so single-owner access serialises the
/// producer; the generator provides no internal locking. Generation is
/// fully deterministic: instances built from equal configuration and
/// table yield equal sequences.
///
/// # Examples
///
/// ```rust
/// use gsa_directions::JoeKuoD6;
/// use gsa_sampling::sobol::{SequenceError, SobolConfig, SobolSequence};
///
/// let config = SobolConfig::builder()
///     .n_samples(2)
///     .n_dimensions(3)
///     .build()
///     .unwrap();
/// let mut sequence = SobolSequence::new(config, &JoeKuoD6).unwrap();
///
/// assert_eq!(sequence.advance().unwrap(), &[0.0, 0.0, 0.0]);
/// assert_eq!(sequence.advance().unwrap(), &[0.5, 0.5, 0.5]);
/// assert_eq!(
///     sequence.advance(),
///     Err(SequenceError::Exhausted { n_samples: 2 })
/// );
/// ```
#[derive(Clone, Debug)]
pub struct SobolSequence {
    /// Immutable generation parameters.
    config: SobolConfig,
    /// Precomputed direction numbers, shared by both access modes.
    v: DirectionMatrix,
    /// Running XOR accumulator of the sequential producer.
    y: Vec<u64>,
    /// Index of the next sample the sequential producer emits.
    current: usize,
    /// Pre-allocated output buffer, overwritten per advance.
    sample: Vec<f64>,
    /// Hoisted normalisation factor `2^scale`.
    norm: f64,
}

impl SobolSequence {
    /// Builds a generator for `config`, deriving direction numbers from
    /// `table`.
    ///
    /// The direction-number matrix is computed here, exactly once; both
    /// access modes reuse it unchanged for the generator's lifetime.
    ///
    /// # Errors
    ///
    /// - `SobolError::InsufficientDimensions` when the table cannot
    ///   parameterise `n_dimensions - 1` derived columns
    /// - `SobolError::InsufficientBits` when `ceil(log2(n_samples))`
    ///   exceeds the configured scale
    /// - `SobolError::Config` when the configuration itself is invalid
    ///   (reachable only through deserialised configurations; the
    ///   builder validates at build time)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gsa_directions::JoeKuoD6;
    /// use gsa_sampling::sobol::{SobolConfig, SobolError, SobolSequence};
    ///
    /// let config = SobolConfig::builder()
    ///     .n_samples(8)
    ///     .n_dimensions(100)
    ///     .build()
    ///     .unwrap();
    ///
    /// // The embedded table holds 20 entries.
    /// let result = SobolSequence::new(config, &JoeKuoD6);
    /// assert!(matches!(
    ///     result,
    ///     Err(SobolError::InsufficientDimensions { .. })
    /// ));
    /// ```
    pub fn new<T>(config: SobolConfig, table: &T) -> Result<Self, SobolError>
    where
        T: DirectionNumbers + ?Sized,
    {
        config.validate()?;
        let v = DirectionMatrix::build(&config, table)?;

        debug!(
            n_samples = config.n_samples(),
            n_dimensions = config.n_dimensions(),
            scale = config.scale(),
            index_bits = config.index_bits(),
            "direction-number matrix built"
        );

        let n_dimensions = config.n_dimensions();
        Ok(Self {
            config,
            v,
            y: vec![0; n_dimensions],
            current: 0,
            sample: vec![0.0; n_dimensions],
            norm: (1u64 << config.scale()) as f64,
        })
    }

    /// Returns the generator configuration.
    #[inline]
    pub fn config(&self) -> &SobolConfig {
        &self.config
    }

    /// Returns the configured sample count.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.config.n_samples()
    }

    /// Returns the dimensionality of each point.
    #[inline]
    pub fn n_dimensions(&self) -> usize {
        self.config.n_dimensions()
    }

    /// Returns the index of the next sample `advance` would produce.
    #[inline]
    pub fn position(&self) -> usize {
        self.current
    }

    /// Returns how many samples the sequential producer can still yield.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.config.n_samples() - self.current
    }

    /// Returns whether the sequential producer is exhausted.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.current > self.config.n_samples() - 1
    }

    /// Advances the sequential producer and returns the next point.
    ///
    /// The first call emits the all-zero point; every later call XORs one
    /// direction-number row, selected by the Gray-code rule from the
    /// previous sample index, into the accumulator and normalises it to
    /// `[0, 1)`. The returned slice borrows an internal buffer that the
    /// next call overwrites; copy it out to keep the point.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::Exhausted` on every call past the
    /// configured sample count. The producer is not restartable;
    /// construct a new generator to iterate again.
    pub fn advance(&mut self) -> Result<&[f64], SequenceError> {
        if self.is_exhausted() {
            return Err(SequenceError::Exhausted {
                n_samples: self.config.n_samples(),
            });
        }

        if self.current == 0 {
            // The all-zero first point is canonical.
            self.sample.fill(0.0);
            self.current = 1;
            return Ok(&self.sample);
        }

        let row = least_significant_zero_bit(self.current as u64 - 1);
        for (dim, y) in self.y.iter_mut().enumerate() {
            *y ^= self.v.get(row, dim);
            self.sample[dim] = *y as f64 / self.norm;
        }
        self.current += 1;

        Ok(&self.sample)
    }

    /// Generates the complete `n_samples x n_dimensions` matrix in one
    /// pass.
    ///
    /// Keeps a local accumulator and never touches the sequential
    /// producer's state, so it can be called at any time, repeatedly, and
    /// yields exactly the rows a fresh generator would produce through
    /// [`advance`](Self::advance).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gsa_directions::JoeKuoD6;
    /// use gsa_sampling::sobol::{SobolConfig, SobolSequence};
    ///
    /// let config = SobolConfig::builder()
    ///     .n_samples(8)
    ///     .n_dimensions(2)
    ///     .build()
    ///     .unwrap();
    /// let matrix = SobolSequence::new(config, &JoeKuoD6).unwrap().sample_all();
    ///
    /// assert_eq!(matrix.row(2), &[0.75, 0.25]);
    /// ```
    pub fn sample_all(&self) -> SampleMatrix {
        let n_samples = self.config.n_samples();
        let n_dimensions = self.config.n_dimensions();

        let mut data = vec![0.0; n_samples * n_dimensions];
        let mut x = vec![0u64; n_dimensions];

        // Row 0 stays all zero, matching the sequential producer.
        for j in 1..n_samples {
            let row = self.v.row(least_significant_zero_bit(j as u64 - 1));
            let out = &mut data[j * n_dimensions..(j + 1) * n_dimensions];
            for ((x, &v), out) in x.iter_mut().zip(row).zip(out) {
                *x ^= v;
                *out = *x as f64 / self.norm;
            }
        }

        SampleMatrix::new(data, n_samples, n_dimensions)
    }
}
