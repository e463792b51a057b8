// 🏰 House - Noble family value type
//
// A house is an immutable value identified by its name. Every member of a
// house shares one Arc<House> handle - the house outlives and is independent
// of any single member.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

// ============================================================================
// HOUSE
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct House {
    /// Unique identifier - equality, hashing, and ordering all use the name
    pub name: String,

    /// Home region of the house
    pub region: String,
}

impl House {
    pub fn new(name: &str, region: &str) -> Self {
        House {
            name: name.to_string(),
            region: region.to_string(),
        }
    }

    /// One-line render, e.g. "Stark of the North"
    pub fn summary(&self) -> String {
        format!("{} of {}", self.name, self.region)
    }
}

// Identity is the name alone; region is descriptive payload.
impl PartialEq for House {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for House {}

impl Hash for House {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for House {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for House {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

// ============================================================================
// TESTS
// ============================================================================
