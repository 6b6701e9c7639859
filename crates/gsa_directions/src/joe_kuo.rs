//! Embedded Joe-Kuo direction-number table.
//!
//! The entries below are the leading rows of the `new-joe-kuo-6.21201`
//! direction-number set published by S. Joe and F. Y. Kuo
//! (<https://web.maths.unsw.edu.au/~fkuo/sobol/>), chosen for good
//! two-dimensional projections:
//!
//! - Joe and Kuo (2003), Remark on Algorithm 659: Implementing Sobol's
//!   quasirandom sequence generator
//! - Joe and Kuo (2008), Constructing Sobol sequences with better
//!   two-dimensional projections
//!
//! Each row holds the polynomial coefficient word `a` and the seed values
//! `m_1..m_s` for one sequence dimension, starting at dimension 1.

use crate::table::{DirectionEntry, DirectionNumbers};

/// Rows of the published table: `(a, [m_1, ..., m_s])` for dimensions
/// `1..=ENTRIES.len()` of the sequence.
static ENTRIES: &[(u32, &[u32])] = &[
    (0, &[1]),
    (1, &[1, 3]),
    (1, &[1, 3, 1]),
    (2, &[1, 1, 1]),
    (1, &[1, 1, 3, 3]),
    (4, &[1, 3, 5, 13]),
    (2, &[1, 1, 5, 5, 17]),
    (4, &[1, 1, 5, 5, 5]),
    (7, &[1, 1, 7, 11, 19]),
    (11, &[1, 1, 5, 1, 1]),
    (13, &[1, 1, 1, 3, 11]),
    (14, &[1, 3, 5, 5, 31]),
    (1, &[1, 3, 3, 9, 7, 49]),
    (13, &[1, 1, 1, 15, 21, 21]),
    (16, &[1, 3, 1, 13, 27, 49]),
    (19, &[1, 1, 1, 15, 7, 5]),
    (22, &[1, 3, 1, 15, 13, 25]),
    (25, &[1, 1, 5, 5, 19, 61]),
    (1, &[1, 3, 7, 11, 23, 15, 103]),
    (4, &[1, 3, 7, 13, 13, 15, 69]),
];

/// The embedded Joe-Kuo `D(6)` table prefix.
///
/// Supports sequences of up to `capacity() + 1` dimensions. Runs needing
/// more dimensions supply their own [`DirectionNumbers`] implementation
/// over a larger copy of the published set; this crate does not extend
/// the table at runtime.
///
/// # Examples
///
/// ```rust
/// use gsa_directions::{DirectionNumbers, JoeKuoD6};
///
/// let entry = JoeKuoD6.entry(6).unwrap();
/// assert_eq!(entry.polynomial(), 4);
/// assert_eq!(entry.seeds(), &[1, 3, 5, 13]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct JoeKuoD6;

impl DirectionNumbers for JoeKuoD6 {
    #[inline]
    fn capacity(&self) -> usize {
        ENTRIES.len()
    }

    #[inline]
    fn entry(&self, dimension: usize) -> Option<DirectionEntry<'_>> {
        ENTRIES.entry(dimension)
    }
}
