//! Expense categories
//!
//! The category set is fixed. `CategoryFilter` adds the "all" choice used
//! when browsing the expense list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category an expense is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    Housing,
    Transportation,
    Entertainment,
    Utilities,
    Healthcare,
    Personal,
    Education,
    Other,
}

impl Category {
    /// Every category, in the order they are offered on entry
    pub const ALL: [Category; 9] = [
        Self::Food,
        Self::Housing,
        Self::Transportation,
        Self::Entertainment,
        Self::Utilities,
        Self::Healthcare,
        Self::Personal,
        Self::Education,
        Self::Other,
    ];

    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Housing => "Housing",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Healthcare => "Healthcare",
            Self::Personal => "Personal",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CategoryParseError(wanted.to_string()))
    }
}

/// Error returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: '{0}'")]
pub struct CategoryParseError(pub String);

/// Category restriction applied when listing expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Match every category
    #[default]
    All,
    /// Match exactly one category
    Only(Category),
}

impl CategoryFilter {
    /// Sentinel accepted by `from_str` for [`CategoryFilter::All`]
    pub const ALL_SENTINEL: &'static str = "all";

    /// Check whether a category passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL_SENTINEL),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_SENTINEL) {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}
