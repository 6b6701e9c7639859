//! # gsa_directions: Direction-Number Tables for Sobol Sequences
//!
//! ## Foundation Layer Role
//!
//! gsa_directions is the leaf crate of the workspace, providing:
//! - The [`DirectionNumbers`] lookup trait consumed by the sequence
//!   generator (`table`)
//! - The [`DirectionEntry`] borrowed view over one dimension's
//!   primitive-polynomial parameters (`table`)
//! - An embedded Joe-Kuo `D(6)` table prefix, [`JoeKuoD6`] (`joe_kuo`)
//!
//! ## Zero Dependency Principle
//!
//! The table layer has no dependencies on the generator crate and no
//! runtime dependencies at all: entries are static data behind a trait so
//! that tests can substitute small synthetic tables for the embedded one.
//!
//! ## Usage Example
//!
//! ```rust
//! use gsa_directions::{DirectionNumbers, JoeKuoD6};
//!
//! let table = JoeKuoD6;
//! assert!(table.capacity() >= 20);
//!
//! // Dimension 1 of the sequence is parameterised by x + 1 with seed m_1 = 1.
//! let entry = table.entry(1).unwrap();
//! assert_eq!(entry.degree(), 1);
//! assert_eq!(entry.seeds(), &[1]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod joe_kuo;
pub mod table;

pub use joe_kuo::JoeKuoD6;
pub use table::{DirectionEntry, DirectionNumbers};
