//! Bulk sample matrix result type.

/// A generated `n_samples x n_dimensions` matrix of points in `[0, 1)`.
///
/// Returned by [`SobolSequence::sample_all`](super::SobolSequence::sample_all).
///
/// # Memory Layout
///
/// Samples are stored in row-major order: `as_slice()[sample_idx *
/// n_dimensions + dim_idx]`, so a row is one point of the sequence and
/// downstream pipelines can consume either rows or the raw buffer
/// without copying.
///
/// # Examples
///
/// ```rust
/// use gsa_directions::JoeKuoD6;
/// use gsa_sampling::sobol::{SobolConfig, SobolSequence};
///
/// let config = SobolConfig::builder()
///     .n_samples(4)
///     .n_dimensions(2)
///     .build()
///     .unwrap();
/// let matrix = SobolSequence::new(config, &JoeKuoD6).unwrap().sample_all();
///
/// assert_eq!(matrix.n_samples(), 4);
/// assert_eq!(matrix.row(0), &[0.0, 0.0]);
/// assert_eq!(matrix.get(1, 1), 0.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleMatrix {
    /// Row-major sample values.
    data: Vec<f64>,
    /// Number of rows (points).
    n_samples: usize,
    /// Number of columns (coordinates per point).
    n_dimensions: usize,
}

impl SampleMatrix {
    /// Wraps a row-major buffer of `n_samples * n_dimensions` values.
    pub(crate) fn new(data: Vec<f64>, n_samples: usize, n_dimensions: usize) -> Self {
        debug_assert_eq!(data.len(), n_samples * n_dimensions);
        Self {
            data,
            n_samples,
            n_dimensions,
        }
    }

    /// Returns the number of points in the matrix.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the dimensionality of each point.
    #[inline]
    pub fn n_dimensions(&self) -> usize {
        self.n_dimensions
    }

    /// Returns point `sample` as a coordinate slice.
    ///
    /// # Panics
    ///
    /// Panics if `sample` is out of range.
    #[inline]
    pub fn row(&self, sample: usize) -> &[f64] {
        let start = sample * self.n_dimensions;
        &self.data[start..start + self.n_dimensions]
    }

    /// Returns coordinate `dim` of point `sample`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, sample: usize, dim: usize) -> f64 {
        self.data[sample * self.n_dimensions + dim]
    }

    /// Returns the whole matrix as one row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the matrix and returns the row-major buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let matrix = SampleMatrix::new(vec![0.0, 0.0, 0.5, 0.25, 0.75, 0.125], 3, 2);

        assert_eq!(matrix.n_samples(), 3);
        assert_eq!(matrix.n_dimensions(), 2);
        assert_eq!(matrix.row(1), &[0.5, 0.25]);
        assert_eq!(matrix.get(2, 0), 0.75);
        assert_eq!(matrix.as_slice().len(), 6);
    }

    #[test]
    fn test_into_vec_round_trip() {
        let data = vec![0.0, 0.5, 0.25, 0.75];
        let matrix = SampleMatrix::new(data.clone(), 4, 1);
        assert_eq!(matrix.into_vec(), data);
    }
}
