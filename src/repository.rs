// 📜 Member Repository - The canonical fixed roster
//
// Owns the full set of houses and members. The dataset is seeded once at
// construction and never mutated afterwards; every accessor hands out
// cloned values, so callers cannot reach the internal state.

use crate::entities::{House, Member, Title};
use chrono::NaiveDate;
use std::sync::Arc;

// ============================================================================
// MEMBER REPOSITORY
// ============================================================================

pub struct MemberRepository {
    /// One shared handle per house; members reference these
    houses: Vec<Arc<House>>,

    /// Every member of the roster, in registration order
    members: Vec<Member>,
}

impl MemberRepository {
    /// Create new empty repository
    pub fn new() -> Self {
        MemberRepository {
            houses: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Create repository with the canonical roster pre-loaded
    pub fn with_defaults() -> Self {
        let mut repository = MemberRepository::new();
        repository.register_default_members();
        repository
    }

    /// Initialize the fixed roster
    fn register_default_members(&mut self) {
        // 1. House Stark
        let stark = self.register_house("Stark", "the North");
        self.register_member(Member::new(
            "Eddard Stark",
            stark.clone(),
            Some(Title::Lord),
            125_000.0,
            seed_date(1963, 4, 15),
        ));
        self.register_member(Member::new(
            "Catelyn Stark",
            stark.clone(),
            Some(Title::Lady),
            120_000.0,
            seed_date(1964, 10, 3),
        ));
        self.register_member(Member::new(
            "Robb Stark",
            stark.clone(),
            Some(Title::Lord),
            90_000.0,
            seed_date(1986, 2, 17),
        ));
        self.register_member(Member::new(
            "Sansa Stark",
            stark.clone(),
            Some(Title::Lady),
            70_000.0,
            seed_date(1989, 11, 21),
        ));
        self.register_member(Member::new(
            "Arya Stark",
            stark.clone(),
            None,
            50_000.0,
            seed_date(1992, 6, 9),
        ));
        self.register_member(Member::new(
            "Bran Stark",
            stark.clone(),
            None,
            45_000.0,
            seed_date(1994, 4, 7),
        ));
        self.register_member(Member::new(
            "Jon Snow",
            stark,
            Some(Title::King),
            80_000.0,
            seed_date(1986, 12, 26),
        ));

        // 2. House Lannister
        let lannister = self.register_house("Lannister", "the Westerlands");
        self.register_member(Member::new(
            "Tywin Lannister",
            lannister.clone(),
            Some(Title::Lord),
            250_000.0,
            seed_date(1942, 10, 10),
        ));
        self.register_member(Member::new(
            "Cersei Lannister",
            lannister.clone(),
            Some(Title::Queen),
            180_000.0,
            seed_date(1966, 5, 3),
        ));
        self.register_member(Member::new(
            "Jaime Lannister",
            lannister.clone(),
            Some(Title::Knight),
            150_000.0,
            seed_date(1966, 5, 3),
        ));
        self.register_member(Member::new(
            "Tyrion Lannister",
            lannister,
            None,
            95_000.0,
            seed_date(1974, 12, 11),
        ));

        // 3. House Baratheon
        let baratheon = self.register_house("Baratheon", "the Stormlands");
        self.register_member(Member::new(
            "Robert Baratheon",
            baratheon.clone(),
            Some(Title::King),
            200_000.0,
            seed_date(1960, 2, 23),
        ));
        self.register_member(Member::new(
            "Stannis Baratheon",
            baratheon.clone(),
            Some(Title::King),
            145_000.0,
            seed_date(1964, 8, 4),
        ));
        self.register_member(Member::new(
            "Renly Baratheon",
            baratheon,
            Some(Title::Lord),
            110_000.0,
            seed_date(1977, 3, 21),
        ));

        // 4. House Targaryen
        let targaryen = self.register_house("Targaryen", "Dragonstone");
        self.register_member(Member::new(
            "Daenerys Targaryen",
            targaryen.clone(),
            Some(Title::Queen),
            130_000.0,
            seed_date(1987, 9, 25),
        ));
        self.register_member(Member::new(
            "Viserys Targaryen",
            targaryen,
            None,
            65_000.0,
            seed_date(1979, 3, 1),
        ));

        // 5. House Tyrell
        let tyrell = self.register_house("Tyrell", "the Reach");
        self.register_member(Member::new(
            "Olenna Tyrell",
            tyrell.clone(),
            Some(Title::Lady),
            175_000.0,
            seed_date(1938, 7, 28),
        ));
        self.register_member(Member::new(
            "Margaery Tyrell",
            tyrell.clone(),
            Some(Title::Queen),
            125_000.0,
            seed_date(1983, 2, 19),
        ));
        self.register_member(Member::new(
            "Loras Tyrell",
            tyrell,
            Some(Title::Knight),
            98_000.0,
            seed_date(1982, 4, 14),
        ));
    }

    /// Register a house and hand back its shared handle. Registering the
    /// same name twice returns the existing handle.
    pub(crate) fn register_house(&mut self, name: &str, region: &str) -> Arc<House> {
        if let Some(existing) = self.house(name) {
            return existing;
        }
        let house = Arc::new(House::new(name, region));
        self.houses.push(house.clone());
        house
    }

    /// Register a member. The member's house must already be registered -
    /// seed code and tests always build members from register_house handles.
    pub(crate) fn register_member(&mut self, member: Member) {
        debug_assert!(
            self.houses.iter().any(|h| h.name == member.house.name),
            "member references an unregistered house"
        );
        self.members.push(member);
    }

    /// Get the complete roster as a cloned snapshot. Mutating the returned
    /// vector never touches repository state. Never fails.
    pub fn get_all(&self) -> Vec<Member> {
        self.members.clone()
    }

    /// Get handles to every registered house
    pub fn houses(&self) -> Vec<Arc<House>> {
        self.houses.clone()
    }

    /// Look up a house handle by name
    pub fn house(&self, name: &str) -> Option<Arc<House>> {
        self.houses.iter().find(|h| h.name == name).cloned()
    }

    /// Count total members
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

impl Default for MemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

// Seed dates are static literals, always valid.
fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster_is_populated() {
        let repository = MemberRepository::with_defaults();

        assert_eq!(repository.count(), 19);
        assert_eq!(repository.houses().len(), 5);
        assert_eq!(repository.get_all().len(), repository.count());
    }

    #[test]
    fn test_roster_invariants() {
        let repository = MemberRepository::with_defaults();
        let houses = repository.houses();

        for member in repository.get_all() {
            assert!(!member.name.is_empty());
            assert!(member.salary >= 0.0);
            assert!(
                houses.iter().any(|h| h.name == member.house.name),
                "{} references a house outside the fixed set",
                member.name
            );
        }
    }

    #[test]
    fn test_house_lookup() {
        let repository = MemberRepository::with_defaults();

        let stark = repository.house("Stark");
        assert!(stark.is_some());
        assert_eq!(stark.unwrap().region, "the North");

        // No Greyjoys in this roster
        assert!(repository.house("Greyjoy").is_none());
    }

    #[test]
    fn test_get_all_is_defensive() {
        let repository = MemberRepository::with_defaults();
        let before = repository.count();

        let mut snapshot = repository.get_all();
        snapshot.clear();

        assert_eq!(repository.count(), before);
        assert_eq!(repository.get_all().len(), before);
    }

    #[test]
    fn test_house_handles_are_shared() {
        let repository = MemberRepository::with_defaults();
        let stark = repository.house("Stark").unwrap();

        for member in repository.get_all() {
            if member.house_name() == "Stark" {
                assert!(Arc::ptr_eq(&member.house, &stark));
            }
        }
    }

    #[test]
    fn test_register_house_dedupes_by_name() {
        let mut repository = MemberRepository::new();
        let first = repository.register_house("Stark", "the North");
        let second = repository.register_house("Stark", "elsewhere");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(repository.houses().len(), 1);
    }
}
