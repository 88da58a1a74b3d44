use crate::error::Result;
use crate::index::RegistryIndex;
use projlink_protocol::{AliasRecord, MasterRecord};

/// Deserialize the master rows the database layer emits.
pub fn parse_masters(json: &str) -> Result<Vec<MasterRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Deserialize the alias rows the database layer emits.
pub fn parse_aliases(json: &str) -> Result<Vec<AliasRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse both row sets and build a fresh index snapshot in one step.
pub fn index_from_json(masters_json: &str, aliases_json: &str) -> Result<RegistryIndex> {
    let masters = parse_masters(masters_json)?;
    let aliases = parse_aliases(aliases_json)?;
    Ok(RegistryIndex::build(masters, &aliases))
}
