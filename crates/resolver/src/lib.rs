//! # Projlink Resolver
//!
//! Matches operator-entered project names against a registry index through
//! an ordered cascade of strategies, highest precision first:
//!
//! ```text
//! exact → english → normalized → contains → spaceless → eng-spaceless
//!       → token(NN%) → eng-token(NN%) → no match
//! ```
//!
//! The first strategy to produce a hit wins and tags the result with its
//! method, so every match stays explainable in reports.

mod batch;
mod cascade;

pub use batch::{resolve_all, BatchResolution, ResolveStats};
pub use cascade::resolve;
