//! Direction-number matrix construction.
//!
//! The matrix `V` holds, per dimension, the direction numbers for every
//! index bit a sample position can occupy. Column 0 is the fixed van der
//! Corput column; every further column is derived from one table entry by
//! the primitive-polynomial recurrence of Joe and Kuo's Algorithm 659
//! formulation.
//!
//! # Memory Layout
//!
//! Rows are stored contiguously: `data[row * n_dimensions + dim]` for
//! `row = 0..=L`. Row 0 is never read by the generators (sample index
//! bits are 1-based) and stays zero.

use gsa_directions::DirectionNumbers;

use super::config::SobolConfig;
use super::error::SobolError;

/// Precomputed direction-number matrix.
///
/// Built exactly once at generator construction and immutable afterwards;
/// both the sequential and the bulk access modes read it concurrently
/// without coordination.
#[derive(Clone, Debug)]
pub(crate) struct DirectionMatrix {
    /// Row-major `(L + 1) x n_dimensions` direction numbers.
    data: Vec<u64>,
    /// Number of columns.
    n_dimensions: usize,
}

impl DirectionMatrix {
    /// Builds the matrix for `config` from `table`.
    ///
    /// # Errors
    ///
    /// - `SobolError::InsufficientDimensions` when the table lacks an
    ///   entry for a requested dimension
    /// - `SobolError::InsufficientBits` when `ceil(log2(n_samples))`
    ///   exceeds the configured scale
    pub(crate) fn build<T>(config: &SobolConfig, table: &T) -> Result<Self, SobolError>
    where
        T: DirectionNumbers + ?Sized,
    {
        let n_dimensions = config.n_dimensions();
        let scale = config.scale();
        let index_bits = config.index_bits();

        if n_dimensions - 1 > table.capacity() {
            return Err(SobolError::InsufficientDimensions {
                requested: n_dimensions,
                capacity: table.capacity(),
            });
        }
        if index_bits > scale {
            return Err(SobolError::InsufficientBits {
                required: index_bits,
                scale,
            });
        }

        let rows = index_bits as usize + 1;
        let mut matrix = Self {
            data: vec![0; rows * n_dimensions],
            n_dimensions,
        };

        // Van der Corput column: one bit walking down from the top of
        // the fixed-point word.
        for j in 1..rows {
            matrix.set(j, 0, 1u64 << (scale - j as u32));
        }

        for dim in 1..n_dimensions {
            let entry = table
                .entry(dim)
                .ok_or(SobolError::InsufficientDimensions {
                    requested: n_dimensions,
                    capacity: table.capacity(),
                })?;
            let s = entry.degree();
            let seeds = entry.seeds();
            let a = entry.polynomial();

            let seeded_rows = s.min(index_bits as usize);
            for j in 1..=seeded_rows {
                matrix.set(j, dim, u64::from(seeds[j - 1]) << (scale - j as u32));
            }

            // Rows past the seeds follow the two-term GF(2) recurrence;
            // each row depends only on strictly earlier rows of the same
            // column, so evaluation must stay in row order.
            for j in (s + 1)..rows {
                let prev = matrix.get(j - s, dim);
                let mut value = prev ^ (prev >> s);
                for k in 1..s {
                    if (a >> (s - 1 - k)) & 1 == 1 {
                        value ^= matrix.get(j - k, dim);
                    }
                }
                matrix.set(j, dim, value);
            }
        }

        Ok(matrix)
    }

    /// Returns the direction number for index bit `row` of `dim`.
    #[inline]
    pub(crate) fn get(&self, row: usize, dim: usize) -> u64 {
        self.data[row * self.n_dimensions + dim]
    }

    /// Returns one full row across all dimensions.
    #[inline]
    pub(crate) fn row(&self, row: usize) -> &[u64] {
        let start = row * self.n_dimensions;
        &self.data[start..start + self.n_dimensions]
    }

    #[inline]
    fn set(&mut self, row: usize, dim: usize, value: u64) {
        self.data[row * self.n_dimensions + dim] = value;
    }
}
