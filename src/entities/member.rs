// 🧍 Member - A person belonging to a noble house
//
// A member references its house through a shared Arc handle; the member
// never owns the house. Natural ordering of members is ascending
// lexicographic by name.

use crate::entities::{House, Title};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// MEMBER ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Full name, non-empty
    pub name: String,

    /// Shared handle to the member's house (one Arc per house, shared by
    /// all of its members)
    pub house: Arc<House>,

    /// Rank, if any - the dataset contains untitled members
    pub title: Option<Title>,

    /// Yearly salary, never negative
    pub salary: f64,

    /// Date of birth
    pub birthdate: NaiveDate,
}

impl Member {
    pub fn new(
        name: &str,
        house: Arc<House>,
        title: Option<Title>,
        salary: f64,
        birthdate: NaiveDate,
    ) -> Self {
        Member {
            name: name.to_string(),
            house,
            title,
            salary,
            birthdate,
        }
    }

    /// Name of the member's house
    pub fn house_name(&self) -> &str {
        &self.house.name
    }

    /// Check whether the member holds exactly this title
    pub fn has_title(&self, title: Title) -> bool {
        self.title == Some(title)
    }

    /// Queens and ladies count as women; every other member (untitled
    /// included) counts as a man
    pub fn is_woman(&self) -> bool {
        self.title.map(|t| t.is_feminine()).unwrap_or(false)
    }

    /// One-line render, e.g. "Sansa Stark, Lady of House Stark"
    pub fn summary(&self) -> String {
        match self.title {
            Some(title) => format!("{}, {} of House {}", self.name, title, self.house.name),
            None => format!("{} of House {}", self.name, self.house.name),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn stark() -> Arc<House> {
        Arc::new(House::new("Stark", "the North"))
    }

    fn birthdate(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_member_creation() {
        let member = Member::new(
            "Sansa Stark",
            stark(),
            Some(Title::Lady),
            70_000.0,
            birthdate(1989, 11, 21),
        );

        assert_eq!(member.name, "Sansa Stark");
        assert_eq!(member.house_name(), "Stark");
        assert!(member.has_title(Title::Lady));
        assert_eq!(member.salary, 70_000.0);
        assert_eq!(member.summary(), "Sansa Stark, Lady of House Stark");
    }

    #[test]
    fn test_untitled_member() {
        let member = Member::new(
            "Arya Stark",
            stark(),
            None,
            50_000.0,
            birthdate(1992, 6, 9),
        );

        assert_eq!(member.title, None);
        assert!(!member.has_title(Title::Lady));
        assert!(!member.is_woman());
        assert_eq!(member.summary(), "Arya Stark of House Stark");
    }

    #[test]
    fn test_is_woman_by_title() {
        let house = stark();
        let queen = Member::new("A", house.clone(), Some(Title::Queen), 1.0, birthdate(1960, 1, 1));
        let lady = Member::new("B", house.clone(), Some(Title::Lady), 1.0, birthdate(1960, 1, 1));
        let king = Member::new("C", house.clone(), Some(Title::King), 1.0, birthdate(1960, 1, 1));
        let knight = Member::new("D", house, Some(Title::Knight), 1.0, birthdate(1960, 1, 1));

        assert!(queen.is_woman());
        assert!(lady.is_woman());
        assert!(!king.is_woman());
        assert!(!knight.is_woman());
    }

    #[test]
    fn test_house_handle_is_shared() {
        let house = stark();
        let a = Member::new("A", house.clone(), None, 1.0, birthdate(1960, 1, 1));
        let b = Member::new("B", house.clone(), None, 1.0, birthdate(1961, 1, 1));

        // Both members point at the very same house value
        assert!(Arc::ptr_eq(&a.house, &b.house));
        assert!(Arc::ptr_eq(&a.house, &house));
    }
}
