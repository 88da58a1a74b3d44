//! # Projlink Classifier
//!
//! Buckets free-text repair/complaint descriptions into fixed categories
//! (ordered keyword rules, first match wins) and maps raw categories onto
//! the higher-level groups the dashboard charts by.

mod groups;
mod rules;

use serde::{Deserialize, Serialize};

pub use groups::{group_labels, group_of, DEFAULT_GROUP};
pub use rules::categorize;

/// Which operational queue a free-text description came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Repair,
    Complaint,
}
