use crate::cascade::resolve;
use projlink_indexer::RegistryIndex;
use projlink_protocol::MatchResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Statistics about one resolution batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveStats {
    /// Number of queries resolved
    pub queries: usize,

    /// Number that matched a master record
    pub matched: usize,

    /// Hit counts per strategy family ("exact", "token", ...)
    pub by_method: HashMap<String, usize>,

    /// Raw inputs that matched nothing, for reconciliation reports
    pub unmatched: Vec<String>,
}

impl ResolveStats {
    #[must_use]
    pub fn new() -> Self {
        Self {
            queries: 0,
            matched: 0,
            by_method: HashMap::new(),
            unmatched: Vec::new(),
        }
    }

    pub fn add_hit(&mut self, result: &MatchResult) {
        self.queries += 1;
        self.matched += 1;
        *self
            .by_method
            .entry(result.method.name().to_string())
            .or_insert(0) += 1;
    }

    pub fn add_miss(&mut self, raw: &str) {
        self.queries += 1;
        self.unmatched.push(raw.to_string());
    }
}

impl Default for ResolveStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Results of resolving a batch against one index snapshot
#[derive(Debug, Clone)]
pub struct BatchResolution {
    /// Per-query outcome, in input order
    pub results: Vec<Option<MatchResult>>,
    pub stats: ResolveStats,
}

/// Resolve a whole batch against one index snapshot.
///
/// Scan-based strategies make a single resolution O(registry size), so batch
/// callers build the index once and reuse it here rather than per query.
pub fn resolve_all<S: AsRef<str>>(index: &RegistryIndex, queries: &[S]) -> BatchResolution {
    let mut stats = ResolveStats::new();
    let results: Vec<Option<MatchResult>> = queries
        .iter()
        .map(|raw| {
            let raw = raw.as_ref();
            let hit = resolve(index, raw);
            match &hit {
                Some(result) => stats.add_hit(result),
                None => stats.add_miss(raw),
            }
            hit
        })
        .collect();

    log::info!(
        "batch resolved: {}/{} matched",
        stats.matched,
        stats.queries
    );

    BatchResolution { results, stats }
}
