//! Sobol low-discrepancy sequence generation.
//!
//! This module implements the Sobol quasi-random sequence after Joe and
//! Kuo's formulation of Algorithm 659: a per-dimension direction-number
//! matrix built from primitive-polynomial recurrences over GF(2), and a
//! Gray-code update rule that derives each sample from its predecessor
//! with a single XOR per dimension.
//!
//! # Architecture
//!
//! ```text
//! SobolSequence
//! ├── SobolConfig       (sample count, dimensions, fixed-point scale)
//! ├── DirectionMatrix   (precomputed V, immutable after construction)
//! └── Access modes
//!     ├── advance()     (stateful, one point per call)
//!     └── sample_all()  (bulk, full SampleMatrix in one pass)
//! ```
//!
//! Both access modes read the same precomputed matrix and produce
//! identical values row for row; `sample_all` keeps a local accumulator
//! and never touches the sequential cursor.
//!
//! # Literature
//!
//! - Joe and Kuo (2003), Remark on Algorithm 659: Implementing Sobol's
//!   quasirandom sequence generator
//! - Joe and Kuo (2008), Constructing Sobol sequences with better
//!   two-dimensional projections

mod bits;
mod config;
mod error;
mod matrix;
mod samples;
mod sequence;

pub use bits::least_significant_zero_bit;
pub use config::{SobolConfig, SobolConfigBuilder, DEFAULT_SCALE, MAX_SCALE};
pub use error::{ConfigError, SequenceError, SobolError};
pub use samples::SampleMatrix;
pub use sequence::SobolSequence;
