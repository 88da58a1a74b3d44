use projlink_normalizer::normalize;
use projlink_protocol::{AliasRecord, MasterRecord};
use std::collections::HashMap;

/// Immutable lookup bundle built from one registry snapshot.
///
/// Maps hold indices into the master arena; all accessors hand out shared
/// references only, so a built index is safe to share across concurrent
/// lookups.
pub struct RegistryIndex {
    masters: Vec<MasterRecord>,
    exact_thai: HashMap<String, usize>,
    exact_english: HashMap<String, usize>,
    normalized: HashMap<String, usize>,
    thai_scan: Vec<(String, usize)>,
    english_scan: Vec<(String, usize)>,
}

impl RegistryIndex {
    /// Build the index. Aliases are inserted first and are never overwritten
    /// by a master's native name; a duplicate alias key silently overwrites
    /// an earlier one. Missing name fields contribute no entries.
    #[must_use]
    pub fn build(masters: Vec<MasterRecord>, aliases: &[AliasRecord]) -> Self {
        let id_to_idx: HashMap<&str, usize> = masters
            .iter()
            .enumerate()
            .map(|(idx, master)| (master.id.as_str(), idx))
            .collect();

        let mut exact_thai = HashMap::new();
        let mut exact_english = HashMap::new();
        let mut normalized = HashMap::new();
        let mut thai_scan = Vec::new();
        let mut english_scan = Vec::new();

        for alias in aliases {
            let Some(&idx) = id_to_idx.get(alias.master_id.as_str()) else {
                log::warn!(
                    "alias '{}' references unknown master '{}', skipped",
                    alias.alias_name,
                    alias.master_id
                );
                continue;
            };
            let key = alias.alias_name.trim().to_lowercase();
            if !key.is_empty() {
                exact_thai.insert(key, idx);
            }
            let norm = normalize(&alias.alias_name);
            if !norm.is_empty() {
                normalized.insert(norm, idx);
            }
        }

        for (idx, master) in masters.iter().enumerate() {
            if let Some(thai) = &master.thai_name {
                let key = thai.trim().to_lowercase();
                if !key.is_empty() {
                    exact_thai.entry(key).or_insert(idx);
                }
                let norm = normalize(thai);
                if !norm.is_empty() {
                    normalized.entry(norm.clone()).or_insert(idx);
                    thai_scan.push((norm, idx));
                }
            }
            if let Some(english) = &master.english_name {
                let key = english.trim().to_lowercase();
                if !key.is_empty() {
                    exact_english.entry(key).or_insert(idx);
                }
                let norm = normalize(english);
                if !norm.is_empty() {
                    english_scan.push((norm, idx));
                }
            }
        }

        log::debug!(
            "registry index built: {} masters, {} aliases, {} normalized keys",
            masters.len(),
            aliases.len(),
            normalized.len()
        );

        Self {
            masters,
            exact_thai,
            exact_english,
            normalized,
            thai_scan,
            english_scan,
        }
    }

    /// Number of master records in the snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.masters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.masters.is_empty()
    }

    /// Case-folded Thai-side exact lookup (aliases included)
    #[must_use]
    pub fn exact_thai(&self, key: &str) -> Option<&MasterRecord> {
        self.exact_thai.get(key).map(|&idx| &self.masters[idx])
    }

    /// Case-folded English-name exact lookup
    #[must_use]
    pub fn exact_english(&self, key: &str) -> Option<&MasterRecord> {
        self.exact_english.get(key).map(|&idx| &self.masters[idx])
    }

    /// Normalized-key lookup (aliases included)
    #[must_use]
    pub fn normalized(&self, key: &str) -> Option<&MasterRecord> {
        self.normalized.get(key).map(|&idx| &self.masters[idx])
    }

    /// Normalized Thai names in registry order
    pub fn thai_scan(&self) -> impl Iterator<Item = (&str, &MasterRecord)> {
        self.thai_scan
            .iter()
            .map(|(norm, idx)| (norm.as_str(), &self.masters[*idx]))
    }

    /// Normalized English names in registry order
    pub fn english_scan(&self) -> impl Iterator<Item = (&str, &MasterRecord)> {
        self.english_scan
            .iter()
            .map(|(norm, idx)| (norm.as_str(), &self.masters[*idx]))
    }
}
