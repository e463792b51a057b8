// 👑 Title - Closed set of noble ranks
//
// Titles form a fixed enumeration. Extending the set means adding a
// variant here - titles are never created dynamically.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TITLE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Title {
    /// Ruler of a realm
    King,

    /// Ruler or royal consort
    Queen,

    /// Head or senior member of a house
    Lord,

    /// Noblewoman of a house
    Lady,

    /// Sworn knight in service of a house
    Knight,
}

impl Title {
    pub fn as_str(&self) -> &'static str {
        match self {
            Title::King => "King",
            Title::Queen => "Queen",
            Title::Lord => "Lord",
            Title::Lady => "Lady",
            Title::Knight => "Knight",
        }
    }

    /// Queens and ladies - drives the men/women partition
    pub fn is_feminine(&self) -> bool {
        matches!(self, Title::Queen | Title::Lady)
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_as_str() {
        assert_eq!(Title::King.as_str(), "King");
        assert_eq!(Title::Queen.as_str(), "Queen");
        assert_eq!(Title::Lord.as_str(), "Lord");
        assert_eq!(Title::Lady.as_str(), "Lady");
        assert_eq!(Title::Knight.as_str(), "Knight");
    }

    #[test]
    fn test_title_display_matches_as_str() {
        assert_eq!(format!("{}", Title::Knight), "Knight");
        assert_eq!(Title::Queen.to_string(), Title::Queen.as_str());
    }

    #[test]
    fn test_feminine_titles() {
        assert!(Title::Queen.is_feminine());
        assert!(Title::Lady.is_feminine());
        assert!(!Title::King.is_feminine());
        assert!(!Title::Lord.is_feminine());
        assert!(!Title::Knight.is_feminine());
    }
}
