//! Gameplay actions: each one logs the player in, applies a single store
//! action and reports the result.

use std::path::Path;

use colored::Colorize;

pub fn complete(
    data_dir: &Path,
    player: &str,
    name: Option<&str>,
    location: &str,
) -> Result<(), String> {
    let mut store = super::open_as(data_dir, player, name)?;
    let level_before = store.player().level;

    if !store.complete_location(location) {
        println!("  '{location}' was already completed.");
        return Ok(());
    }

    let p = store.player();
    println!(
        "  Completed {}: +{} xp, +{} coins",
        location.bold(),
        store.config().location_exp,
        store.config().location_coins
    );
    if p.level > level_before {
        println!("  {} Now level {}.", "Level up!".green().bold(), p.level);
    }
    println!("  Rank #{}", store.player_rank());
    Ok(())
}

pub fn fragment(
    data_dir: &Path,
    player: &str,
    name: Option<&str>,
    fragment: &str,
) -> Result<(), String> {
    let mut store = super::open_as(data_dir, player, name)?;
    if store.add_fragment(fragment) {
        println!(
            "  Found fragment {} ({}/{})",
            fragment.bold(),
            store.collected_fragment_count(),
            store.total_fragments()
        );
    } else {
        println!("  Fragment '{fragment}' is already collected.");
    }
    Ok(())
}

pub fn damage(data_dir: &Path, player: &str, amount: i32) -> Result<(), String> {
    let mut store = super::open_as(data_dir, player, None)?;
    let alive = store.take_damage(amount);
    let hp = store.player().hp;
    if alive {
        println!("  hp {}/{}", hp, store.config().max_hp);
    } else {
        println!("  {} hp 0/{}", "Defeated!".red().bold(), store.config().max_hp);
    }
    Ok(())
}
