use projlink_indexer::RegistryIndex;
use projlink_normalizer::{english_side, normalize, thai_side};
use projlink_protocol::{MasterRecord, MatchMethod, MatchResult};
use std::collections::HashSet;

/// Minimum token-overlap fraction for a token-strategy match
const TOKEN_OVERLAP_THRESHOLD: f64 = 0.5;

/// Derived forms of one query, computed once before the cascade runs
struct Query {
    thai_exact: String,
    english_exact: String,
    normalized: String,
    spaceless: String,
    tokens: Vec<String>,
    english_tokens: Vec<String>,
}

impl Query {
    fn prepare(raw: &str) -> Self {
        let normalized = normalize(raw);
        Self {
            thai_exact: thai_side(raw).trim().to_lowercase(),
            english_exact: english_side(raw).trim().to_lowercase(),
            spaceless: strip_whitespace(&normalized),
            tokens: name_tokens(&normalized),
            english_tokens: english_name_tokens(&english_side(raw).to_lowercase()),
            normalized,
        }
    }
}

type Strategy = fn(&RegistryIndex, &Query) -> Option<MatchResult>;

/// Ordered highest-precision-first and cheapest-first: an exact identity is
/// never overridden by a fuzzy guess, and the O(registry) scans run last.
const STRATEGIES: [Strategy; 8] = [
    exact_thai,
    exact_english,
    normalized_key,
    contains,
    spaceless,
    eng_spaceless,
    token_overlap,
    eng_token_overlap,
];

/// Resolve a raw display name against an index snapshot.
///
/// `None` is a valid negative result, not an error; callers branch on it.
#[must_use]
pub fn resolve(index: &RegistryIndex, raw: &str) -> Option<MatchResult> {
    let query = Query::prepare(raw);
    let hit = STRATEGIES
        .iter()
        .find_map(|strategy| strategy(index, &query));

    match &hit {
        Some(result) => log::debug!(
            "resolved '{}' -> '{}' via {}",
            raw,
            result.master.id,
            result.method
        ),
        None => log::debug!("no match for '{}'", raw),
    }
    hit
}

fn exact_thai(index: &RegistryIndex, query: &Query) -> Option<MatchResult> {
    if query.thai_exact.is_empty() {
        return None;
    }
    index
        .exact_thai(&query.thai_exact)
        .map(|master| MatchResult::new(master.clone(), MatchMethod::Exact))
}

fn exact_english(index: &RegistryIndex, query: &Query) -> Option<MatchResult> {
    if query.english_exact.is_empty() {
        return None;
    }
    index
        .exact_english(&query.english_exact)
        .map(|master| MatchResult::new(master.clone(), MatchMethod::English))
}

fn normalized_key(index: &RegistryIndex, query: &Query) -> Option<MatchResult> {
    if query.normalized.is_empty() {
        return None;
    }
    index
        .normalized(&query.normalized)
        .map(|master| MatchResult::new(master.clone(), MatchMethod::Normalized))
}

/// Strategy 4: mutual containment over the Thai scan list, first hit wins.
/// One-char strings never match here.
fn contains(index: &RegistryIndex, query: &Query) -> Option<MatchResult> {
    if char_len(&query.normalized) <= 1 {
        return None;
    }
    index
        .thai_scan()
        .find(|(candidate, _)| {
            char_len(candidate) > 1 && mutual_contains(candidate, &query.normalized)
        })
        .map(|(_, master)| MatchResult::new(master.clone(), MatchMethod::Contains))
}

/// Strategy 5: containment again, with whitespace stripped from both sides
fn spaceless(index: &RegistryIndex, query: &Query) -> Option<MatchResult> {
    spaceless_scan(index.thai_scan(), query, MatchMethod::Spaceless)
}

/// Strategy 6: the spaceless test against the English scan list
fn eng_spaceless(index: &RegistryIndex, query: &Query) -> Option<MatchResult> {
    spaceless_scan(index.english_scan(), query, MatchMethod::EngSpaceless)
}

fn spaceless_scan<'a>(
    scan: impl Iterator<Item = (&'a str, &'a MasterRecord)>,
    query: &Query,
    method: MatchMethod,
) -> Option<MatchResult> {
    if char_len(&query.spaceless) <= 2 {
        return None;
    }
    scan.map(|(norm, master)| (strip_whitespace(norm), master))
        .find(|(candidate, _)| {
            char_len(candidate) > 2 && mutual_contains(candidate, &query.spaceless)
        })
        .map(|(_, master)| MatchResult::new(master.clone(), method))
}

/// Strategy 7: token-set overlap over the Thai scan list.
///
/// The fold keeps the single best candidate; strict `>` means the first
/// scan-order candidate wins a tie, and the unrounded fraction decides.
fn token_overlap(index: &RegistryIndex, query: &Query) -> Option<MatchResult> {
    if query.tokens.is_empty() {
        return None;
    }
    best_overlap(
        index
            .thai_scan()
            .map(|(norm, master)| (name_tokens(norm), master)),
        &query.tokens,
    )
    .map(|(score, master)| MatchResult::new(master.clone(), MatchMethod::Token(score)))
}

/// Strategy 8: token overlap on the raw English side, split on whitespace
/// and dash variants, against raw lowercased English registry names.
fn eng_token_overlap(index: &RegistryIndex, query: &Query) -> Option<MatchResult> {
    if query.english_tokens.is_empty() {
        return None;
    }
    best_overlap(
        index.english_scan().filter_map(|(_, master)| {
            let english = master.english_name.as_deref()?;
            Some((english_name_tokens(&english.to_lowercase()), master))
        }),
        &query.english_tokens,
    )
    .map(|(score, master)| MatchResult::new(master.clone(), MatchMethod::EngToken(score)))
}

fn best_overlap<'a>(
    candidates: impl Iterator<Item = (Vec<String>, &'a MasterRecord)>,
    query_tokens: &[String],
) -> Option<(f64, &'a MasterRecord)> {
    candidates
        .fold(None, |best, (tokens, master)| {
            let score = overlap_score(query_tokens, &tokens);
            if score > best.map_or(0.0, |(top, _)| top) {
                Some((score, master))
            } else {
                best
            }
        })
        .filter(|(score, _)| *score >= TOKEN_OVERLAP_THRESHOLD)
}

/// `|A ∩ B| / max(|A|, |B|)` over token sets; 0.0 when either side is empty
fn overlap_score(a: &[String], b: &[String]) -> f64 {
    let a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let larger = a.len().max(b.len());
    if larger == 0 {
        return 0.0;
    }
    let shared = a.intersection(&b).count();
    shared as f64 / larger as f64
}

/// Whitespace-delimited tokens of char-length > 1
fn name_tokens(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .filter(|token| char_len(token) > 1)
        .map(String::from)
        .collect()
}

/// English tokens: split on whitespace and dash variants, char-length > 1
fn english_name_tokens(folded: &str) -> Vec<String> {
    folded
        .split(|c: char| c.is_whitespace() || is_dash(c))
        .filter(|token| char_len(token) > 1)
        .map(String::from)
        .collect()
}

const fn is_dash(c: char) -> bool {
    matches!(c, '-' | '\u{2010}' | '\u{2012}' | '\u{2013}' | '\u{2014}')
}

fn mutual_contains(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

fn strip_whitespace(text: &str) -> String {
    text.split_whitespace().collect()
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
