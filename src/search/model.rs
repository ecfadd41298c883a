use serde::{Deserialize, Serialize};
use std::fmt;

/// Which recipes a view keeps.
///
/// Parsing is permissive: any name that is not a known kind becomes
/// [`FilterKind::All`], so a stale or misspelled UI value shows everything
/// instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FilterKind {
    #[default]
    All,
    Easy,
    Medium,
    Hard,
    /// Recipes that take less than [`QUICK_MAX_MINUTES`](super::QUICK_MAX_MINUTES)
    Quick,
}

impl FilterKind {
    pub const ALL: [FilterKind; 5] = [
        FilterKind::All,
        FilterKind::Easy,
        FilterKind::Medium,
        FilterKind::Hard,
        FilterKind::Quick,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::All => "all",
            FilterKind::Easy => "easy",
            FilterKind::Medium => "medium",
            FilterKind::Hard => "hard",
            FilterKind::Quick => "quick",
        }
    }
}

impl From<&str> for FilterKind {
    fn from(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "easy" => FilterKind::Easy,
            "medium" => FilterKind::Medium,
            "hard" => FilterKind::Hard,
            "quick" => FilterKind::Quick,
            _ => FilterKind::All,
        }
    }
}

impl From<String> for FilterKind {
    fn from(name: String) -> Self {
        FilterKind::from(name.as_str())
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display order of a view. Unknown names become [`SortKind::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SortKind {
    /// Keep catalog order
    #[default]
    None,
    Name,
    Time,
}

impl SortKind {
    pub const ALL: [SortKind; 3] = [SortKind::None, SortKind::Name, SortKind::Time];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKind::None => "none",
            SortKind::Name => "name",
            SortKind::Time => "time",
        }
    }
}

impl From<&str> for SortKind {
    fn from(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "name" => SortKind::Name,
            "time" => SortKind::Time,
            _ => SortKind::None,
        }
    }
}

impl From<String> for SortKind {
    fn from(name: String) -> Self {
        SortKind::from(name.as_str())
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
