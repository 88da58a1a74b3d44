//! # Projlink Indexer
//!
//! Builds the lookup index a resolution batch runs against.
//!
//! ## Pipeline
//!
//! ```text
//! Registry snapshot (masters + aliases)
//!     │
//!     ├──> exact maps (Thai / English, case-folded keys)
//!     ├──> normalized map
//!     └──> scan lists (Thai / English, normalized)
//! ```
//!
//! The index is immutable once built; one snapshot serves a whole batch of
//! lookups.
//!
//! ## Example
//!
//! ```
//! use projlink_indexer::RegistryIndex;
//! use projlink_protocol::{AliasRecord, MasterRecord};
//!
//! let masters = vec![MasterRecord::new("P1").thai_name("ลุมพินี เพลส")];
//! let aliases = vec![AliasRecord::new("P1", "LPN เพลส")];
//! let index = RegistryIndex::build(masters, &aliases);
//! assert_eq!(index.len(), 1);
//! ```

mod error;
mod index;
mod registry;

pub use error::{RegistryError, Result};
pub use index::RegistryIndex;
pub use registry::{index_from_json, parse_aliases, parse_masters};
