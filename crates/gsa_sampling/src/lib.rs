//! # gsa_sampling: Quasi-Random Sampling Kernel
//!
//! ## Kernel Layer Role
//!
//! gsa_sampling generates the low-discrepancy point sets that feed
//! variance-based global sensitivity analysis and quasi-Monte Carlo
//! integration. The crate implements the Sobol sequence: deterministic,
//! quasi-random points in the unit hypercube `[0, 1)^d` with more uniform
//! space coverage than pseudo-random sampling.
//!
//! Direction-number tables come from the `gsa_directions` foundation
//! crate through the `DirectionNumbers` trait, so callers (and tests) can
//! substitute their own tables for the embedded Joe-Kuo set.
//!
//! ## Usage Example
//!
//! ```rust
//! use gsa_directions::JoeKuoD6;
//! use gsa_sampling::sobol::{SobolConfig, SobolSequence};
//!
//! let config = SobolConfig::builder()
//!     .n_samples(8)
//!     .n_dimensions(2)
//!     .build()
//!     .unwrap();
//!
//! let mut sequence = SobolSequence::new(config, &JoeKuoD6).unwrap();
//!
//! // One point at a time...
//! let first = sequence.advance().unwrap();
//! assert_eq!(first, &[0.0, 0.0]);
//!
//! // ...or the whole matrix in one pass.
//! let matrix = sequence.sample_all();
//! assert_eq!(matrix.row(1), &[0.5, 0.5]);
//! ```
//!
//! ## Determinism
//!
//! Generation involves no randomness: two instances built with the same
//! configuration and table produce identical sequences. Randomised
//! scrambling and digital shifts are deliberately out of scope.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod sobol;

pub use sobol::{
    ConfigError, SampleMatrix, SequenceError, SobolConfig, SobolConfigBuilder, SobolError,
    SobolSequence,
};
