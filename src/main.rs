// Demo runner - exercises every query over the canonical roster.
// All printing lives here; the library only returns values.

use anyhow::Result;
use std::collections::BTreeMap;

use noble_houses::{queries, strings, MemberRepository, Title};

fn main() -> Result<()> {
    let repository = MemberRepository::with_defaults();
    let all = repository.get_all();

    println!("🏰 Noble Houses - {} members across {} houses", repository.count(), repository.houses().len());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!("\n--> Members whose name starts with S, natural order");
    for member in queries::with_name_prefix(&all, "S") {
        println!("{}", member.summary());
    }

    println!("\n--> Starks sorted by name");
    for member in queries::of_house(&all, "Stark") {
        println!("{}", member.summary());
    }

    println!("\n--> Members earning less than 80K, sorted by house");
    for member in queries::earning_less_than(&all, 80_000.0) {
        println!("{} ({:.0})", member.summary(), member.salary);
    }

    println!("\n--> Full roster by house name, then name");
    for member in queries::by_house_then_name(&all) {
        println!("{}", member.summary());
    }

    println!("\n--> Starks sorted by birthdate");
    for member in queries::of_house_by_birthdate(&all, "Stark") {
        println!("{} (born {})", member.summary(), member.birthdate);
    }

    println!("\n--> Kings sorted by name, descending");
    for member in queries::with_title_desc(&all, Title::King) {
        println!("{}", member.summary());
    }

    println!("\n--> Average salary");
    if let Some(average) = queries::average_salary(&all) {
        println!("{:.2}", average);
    }

    println!("\n--> Names of the Starks, natural order");
    for name in queries::names_of_house(&all, "Stark") {
        println!("{}", name);
    }

    println!("\n--> Are all salaries greater than 100K?");
    println!("{}", queries::all_earn_more_than(&all, 100_000.0));

    println!("\n--> Are there any members of House Greyjoy?");
    println!("{}", queries::any_of_house(&all, "Greyjoy"));

    println!("\n--> How many Lannisters are there?");
    println!("{}", queries::count_of_house(&all, "Lannister"));

    println!("\n--> Any three Lannisters");
    for member in queries::sample_of_house(&all, "Lannister", 3) {
        println!("{}", member.summary());
    }

    println!("\n--> The Lannisters as a comma-separated string");
    println!("{}", queries::joined_names_of_house(&all, "Lannister"));

    println!("\n--> Who has the highest salary?");
    if let Some(member) = queries::highest_paid(&all) {
        println!("{} ({:.0})", member.summary(), member.salary);
    }

    println!("\n--> Partition into men and women");
    for (side, members) in queries::partition_by_gender(&all) {
        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
        println!("{}: {}", side, names.join(", "));
    }

    println!("\n--> Members grouped by house");
    for (house, members) in queries::group_by_house(&all) {
        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
        println!("{}: {}", house.summary(), names.join(", "));
    }

    println!("\n--> Member count per house (as JSON)");
    let counts: BTreeMap<String, usize> = queries::count_by_house(&all)
        .into_iter()
        .map(|(house, count)| (house.name.clone(), count))
        .collect();
    println!("{}", serde_json::to_string_pretty(&counts)?);

    println!("\n--> Salary stats per house");
    let stats_by_house = queries::salary_stats_by_house(&all);
    for (house, house_stats) in &stats_by_house {
        println!("{}: {}", house.name, house_stats.summary());
    }
    let stats: BTreeMap<String, noble_houses::SalaryStats> = stats_by_house
        .into_iter()
        .map(|(house, stats)| (house.name.clone(), stats))
        .collect();
    println!("{}", serde_json::to_string_pretty(&stats)?);

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("🔤 String exercises");

    let words = vec!["this", "is", "a", "list", "of", "strings"];

    println!("\n--> Sorted by length: {:?}", strings::sorted_by_length(&words));
    println!("--> Sorted naturally: {:?}", strings::sorted_natural(&words));
    println!("--> Even-length words: {:?}", strings::even_length_words(&words));

    let with_gaps = vec![Some("this"), Some("is"), None, Some("a"), None, Some("list"), Some("of"), None, Some("strings")];
    println!("--> Present, even-length entries: {:?}", strings::present_even_length_words(&with_gaps));

    println!("--> Word lengths:");
    for (word, length) in strings::word_lengths(&words) {
        println!("    The size of '{}' is {}", word, length);
    }

    println!("\n✅ All queries ran");

    Ok(())
}
