use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical registry entry for a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MasterRecord {
    /// Registry id, stable across registry snapshots
    pub id: String,

    /// Thai display name, if registered
    #[serde(default)]
    pub thai_name: Option<String>,

    /// English display name, if registered
    #[serde(default)]
    pub english_name: Option<String>,
}

impl MasterRecord {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            thai_name: None,
            english_name: None,
        }
    }

    /// Builder: set the Thai display name
    #[must_use]
    pub fn thai_name(mut self, name: impl Into<String>) -> Self {
        self.thai_name = Some(name.into());
        self
    }

    /// Builder: set the English display name
    #[must_use]
    pub fn english_name(mut self, name: impl Into<String>) -> Self {
        self.english_name = Some(name.into());
        self
    }
}

/// Alternate display name bound to a master record.
///
/// On exact-key collisions an alias entry wins over a master's native name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AliasRecord {
    pub master_id: String,
    pub alias_name: String,
}

impl AliasRecord {
    #[must_use]
    pub fn new(master_id: impl Into<String>, alias_name: impl Into<String>) -> Self {
        Self {
            master_id: master_id.into(),
            alias_name: alias_name.into(),
        }
    }
}

/// Which cascade strategy produced a match.
///
/// Overlap-based strategies carry the unrounded score fraction in [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    Exact,
    English,
    Normalized,
    Contains,
    Spaceless,
    EngSpaceless,
    Token(f64),
    EngToken(f64),
}

impl MatchMethod {
    /// Overlap score, present only for the token strategies
    #[must_use]
    pub const fn score(&self) -> Option<f64> {
        match self {
            Self::Token(score) | Self::EngToken(score) => Some(*score),
            _ => None,
        }
    }

    /// Strategy family name, without the score suffix
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::English => "english",
            Self::Normalized => "normalized",
            Self::Contains => "contains",
            Self::Spaceless => "spaceless",
            Self::EngSpaceless => "eng-spaceless",
            Self::Token(_) => "token",
            Self::EngToken(_) => "eng-token",
        }
    }
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(score) | Self::EngToken(score) => {
                write!(f, "{}({}%)", self.name(), (score * 100.0).round() as u32)
            }
            _ => f.write_str(self.name()),
        }
    }
}

/// A resolved project name: the winning master plus the strategy that found it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub master: MasterRecord,
    pub method: MatchMethod,
}

impl MatchResult {
    #[must_use]
    pub fn new(master: MasterRecord, method: MatchMethod) -> Self {
        Self { master, method }
    }

    /// Operator-facing label for report columns, e.g. `token(67%)`
    #[must_use]
    pub fn method_label(&self) -> String {
        self.method.to_string()
    }
}
