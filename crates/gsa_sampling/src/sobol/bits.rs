//! Bit-index helper for the Gray-code update rule.

/// Returns the 1-based position of the least significant zero bit.
///
/// Sample `j` of a Sobol sequence differs from sample `j - 1` in exactly
/// one direction-number row; this function selects that row from the
/// previous sample index. The returned index `k` satisfies: bits
/// `0..k-2` of `value` are all 1 and bit `k - 1` is 0.
///
/// Total for all inputs; `u64::MAX` has no zero bit within the word, but
/// sample indices never get near that bound because the configured scale
/// caps them at `2^63`.
///
/// # Examples
///
/// ```rust
/// use gsa_sampling::sobol::least_significant_zero_bit;
///
/// assert_eq!(least_significant_zero_bit(0), 1);
/// assert_eq!(least_significant_zero_bit(1), 2);
/// assert_eq!(least_significant_zero_bit(3), 3);
/// assert_eq!(least_significant_zero_bit(7), 4);
/// assert_eq!(least_significant_zero_bit(4), 1);
/// ```
#[inline]
pub fn least_significant_zero_bit(value: u64) -> usize {
    value.trailing_ones() as usize + 1
}
