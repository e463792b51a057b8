// 🔎 Member Queries - Pure filter/sort/group/aggregate operations
//
// Every function here is a stateless read over a member slice: the caller
// obtains the roster from MemberRepository::get_all() and threads it in
// explicitly. Inputs are never mutated; outputs are fresh collections of
// cloned members. All sorts are stable, so equal keys keep input order.
//
// Absence is a normal outcome, never an error: an unknown house name
// yields an empty result, and average/extremum over an empty slice is None.

use crate::entities::{House, Member, Title};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

// ============================================================================
// FILTERED / SORTED LISTINGS
// ============================================================================

/// Find all members whose name starts with the prefix, in natural order
pub fn with_name_prefix(members: &[Member], prefix: &str) -> Vec<Member> {
    let mut matches: Vec<Member> = members
        .iter()
        .filter(|m| m.name.starts_with(prefix))
        .cloned()
        .collect();
    matches.sort_by(|a, b| a.name.cmp(&b.name));
    matches
}

/// Find all members of a house, sorted by name
pub fn of_house(members: &[Member], house_name: &str) -> Vec<Member> {
    let mut matches: Vec<Member> = members
        .iter()
        .filter(|m| m.house_name() == house_name)
        .cloned()
        .collect();
    matches.sort_by(|a, b| a.name.cmp(&b.name));
    matches
}

/// Find all members whose salary is below the threshold, sorted by house name
pub fn earning_less_than(members: &[Member], threshold: f64) -> Vec<Member> {
    let mut matches: Vec<Member> = members
        .iter()
        .filter(|m| m.salary < threshold)
        .cloned()
        .collect();
    matches.sort_by(|a, b| a.house.name.cmp(&b.house.name));
    matches
}

/// Full listing, sorted by house name, then by member name
pub fn by_house_then_name(members: &[Member]) -> Vec<Member> {
    let mut listing = members.to_vec();
    listing.sort_by(|a, b| {
        a.house
            .name
            .cmp(&b.house.name)
            .then_with(|| a.name.cmp(&b.name))
    });
    listing
}

/// Find all members of a house, sorted by birthdate (oldest first)
pub fn of_house_by_birthdate(members: &[Member], house_name: &str) -> Vec<Member> {
    let mut matches: Vec<Member> = members
        .iter()
        .filter(|m| m.house_name() == house_name)
        .cloned()
        .collect();
    matches.sort_by(|a, b| a.birthdate.cmp(&b.birthdate));
    matches
}

/// Find all members holding a title, sorted by name in descending order
pub fn with_title_desc(members: &[Member], title: Title) -> Vec<Member> {
    let mut matches: Vec<Member> = members
        .iter()
        .filter(|m| m.has_title(title))
        .cloned()
        .collect();
    matches.sort_by(|a, b| b.name.cmp(&a.name));
    matches
}

/// Get the names of a house's members, sorted in natural order
pub fn names_of_house(members: &[Member], house_name: &str) -> Vec<String> {
    of_house(members, house_name)
        .into_iter()
        .map(|m| m.name)
        .collect()
}

// ============================================================================
// SCALAR AGGREGATES / PREDICATES
// ============================================================================

/// Average salary over the whole slice; None when there are no members
pub fn average_salary(members: &[Member]) -> Option<f64> {
    if members.is_empty() {
        return None;
    }
    let total: f64 = members.iter().map(|m| m.salary).sum();
    Some(total / members.len() as f64)
}

/// Do all members earn more than the threshold? Vacuously true when empty.
pub fn all_earn_more_than(members: &[Member], threshold: f64) -> bool {
    members.iter().all(|m| m.salary > threshold)
}

/// Is at least one member of this house present?
pub fn any_of_house(members: &[Member], house_name: &str) -> bool {
    members.iter().any(|m| m.house_name() == house_name)
}

/// How many members does this house have?
pub fn count_of_house(members: &[Member], house_name: &str) -> usize {
    members.iter().filter(|m| m.house_name() == house_name).count()
}

/// First n members of a house, in iteration order; fewer when the house
/// has fewer than n members
pub fn sample_of_house(members: &[Member], house_name: &str, n: usize) -> Vec<Member> {
    members
        .iter()
        .filter(|m| m.house_name() == house_name)
        .take(n)
        .cloned()
        .collect()
}

/// Names of a house's members joined with ", "; empty string when the
/// house matches nothing
pub fn joined_names_of_house(members: &[Member], house_name: &str) -> String {
    members
        .iter()
        .filter(|m| m.house_name() == house_name)
        .map(|m| m.name.as_str())
        .collect::<Vec<&str>>()
        .join(", ")
}

/// The member with the highest salary; None when there are no members.
/// On equal salaries the first one encountered wins.
pub fn highest_paid(members: &[Member]) -> Option<Member> {
    members
        .iter()
        .fold(None::<&Member>, |best, m| match best {
            None => Some(m),
            Some(b) if m.salary > b.salary => Some(m),
            _ => best,
        })
        .cloned()
}

// ============================================================================
// GROUPINGS
// ============================================================================

/// Partition members into "Women" (queens and ladies) and "Men" (everyone
/// else, untitled members included). Both keys are always present, and
/// input order is preserved within each side.
pub fn partition_by_gender(members: &[Member]) -> BTreeMap<String, Vec<Member>> {
    let mut men = Vec::new();
    let mut women = Vec::new();
    for member in members {
        if member.is_woman() {
            women.push(member.clone());
        } else {
            men.push(member.clone());
        }
    }

    let mut partition = BTreeMap::new();
    partition.insert("Men".to_string(), men);
    partition.insert("Women".to_string(), women);
    partition
}

/// Group members by house. Keys iterate in house-name order; member order
/// within each group follows input order. Houses with no members do not
/// appear.
pub fn group_by_house(members: &[Member]) -> BTreeMap<Arc<House>, Vec<Member>> {
    let mut groups: BTreeMap<Arc<House>, Vec<Member>> = BTreeMap::new();
    for member in members {
        groups
            .entry(member.house.clone())
            .or_default()
            .push(member.clone());
    }
    groups
}

/// How many members are in each house?
pub fn count_by_house(members: &[Member]) -> BTreeMap<Arc<House>, usize> {
    let mut counts: BTreeMap<Arc<House>, usize> = BTreeMap::new();
    for member in members {
        *counts.entry(member.house.clone()).or_insert(0) += 1;
    }
    counts
}

/// Max, min, and average salary for each house
pub fn salary_stats_by_house(members: &[Member]) -> BTreeMap<Arc<House>, SalaryStats> {
    group_by_house(members)
        .into_iter()
        .filter_map(|(house, group)| {
            let salaries: Vec<f64> = group.iter().map(|m| m.salary).collect();
            SalaryStats::from_salaries(&salaries).map(|stats| (house, stats))
        })
        .collect()
}

// ============================================================================
// SALARY STATS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl SalaryStats {
    /// Compute stats over a salary slice; None when the slice is empty
    pub fn from_salaries(salaries: &[f64]) -> Option<Self> {
        let (first, rest) = salaries.split_first()?;

        let mut min = *first;
        let mut max = *first;
        let mut total = *first;
        for &salary in rest {
            if salary < min {
                min = salary;
            }
            if salary > max {
                max = salary;
            }
            total += salary;
        }

        Some(SalaryStats {
            count: salaries.len(),
            min,
            max,
            average: total / salaries.len() as f64,
        })
    }

    pub fn summary(&self) -> String {
        format!(
            "maxSalary: {:.2} minSalary: {:.2} averageSalary: {:.2}",
            self.max, self.min, self.average
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
