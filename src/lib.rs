//! # Proof-Gauge: Cryptographic Architecture Comparator
//!
//! `proof-gauge` models a handful of cryptographic system designs as
//! descriptive records and derives a single illustrative "quality index" for
//! each, given a transaction rate. Nothing here performs real cryptography:
//! the catalog entries are fixed descriptions with abstract 1–10 scores, and
//! the index is a weighted sum scaled by a clamped throughput factor.
//!
//! ## Pipeline
//!
//! - [`catalog::Catalog`]: the builtin, read-only table of modeled systems.
//! - [`score`]: the pure quality-index formula.
//! - [`summary::Summary`]: one invocation's flat output record, sealed with
//!   a SHA-256 metadata digest over its canonical serialization.
//! - [`render`]: human text or sorted-key JSON.
//!
//! ## Quick Start
//!
//! ```rust
//! use proof_gauge::catalog::Catalog;
//! use proof_gauge::summary::Summary;
//!
//! # fn main() -> Result<(), proof_gauge::Error> {
//! let system = Catalog::builtin().lookup("aztec")?;
//! let summary = Summary::new(system, 1_200)?;
//! println!("{}", proof_gauge::render::human(&summary));
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod render;
pub mod score;
pub mod summary;

pub use error::Error;

/// The version of the `proof-gauge` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
