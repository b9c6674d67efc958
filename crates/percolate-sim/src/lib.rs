//! Seeded percolation model and probability sweeps.
//!
//! [`Percolation`] is the stateful model a front end drives: it holds the
//! current lattice size and bond probability, owns a seeded ChaCha8 RNG,
//! and regenerates the lattice whenever either setting changes.
//!
//! [`sweep::run`] estimates the largest-cluster fraction across a grid of
//! probabilities, running independent trials on worker threads. Every
//! trial derives its own seed, so results do not depend on the worker
//! count.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod model;
pub mod sweep;

pub use config::SimConfig;
pub use error::SimError;
pub use model::Percolation;
pub use sweep::{SweepConfig, SweepPoint};
