//! Leaderboard table view.

use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use th_store::Rankings;

pub fn run(data_dir: &Path) -> Result<(), String> {
    let store = super::open_store(data_dir)?;
    print_rankings(store.rankings());
    Ok(())
}

pub fn print_rankings(rankings: &Rankings) {
    if rankings.is_empty() {
        println!("  No rankings yet.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Level", "Fragments", "XP"]);

    for (i, entry) in rankings.entries().iter().enumerate() {
        let name = if entry.name.is_empty() {
            entry.id.clone()
        } else {
            entry.name.clone()
        };
        table.add_row(vec![
            (i + 1).to_string(),
            name,
            entry.level.to_string(),
            entry.fragments.to_string(),
            entry.experience.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} players", rankings.len());
}
