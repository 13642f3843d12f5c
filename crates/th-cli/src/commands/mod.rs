//! Subcommand handlers and the store helpers they share.

pub mod attack;
pub mod play;
pub mod rankings;
pub mod riddle;
pub mod status;
pub mod view;

use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use th_store::{FileStorage, PlayerPatch, ProgressStore, StoreConfig};

type Store = ProgressStore<FileStorage>;

/// Open the store under `data_dir` with the leaderboard loaded.
fn open_store(data_dir: &Path) -> Result<Store, String> {
    let storage = FileStorage::open(data_dir)
        .map_err(|e| format!("cannot open data directory {}: {e}", data_dir.display()))?;
    let mut store = ProgressStore::new(storage, StoreConfig::default());
    store.load_rankings();
    Ok(store)
}

/// Open the store and log `player` in.
fn open_as(data_dir: &Path, player: &str, name: Option<&str>) -> Result<Store, String> {
    if player.trim().is_empty() {
        return Err("player id must not be empty".into());
    }
    let mut store = open_store(data_dir)?;
    let mut patch = PlayerPatch::with_id(player);
    if let Some(name) = name {
        patch = patch.name(name);
    }
    store.login(patch);
    Ok(store)
}

/// Seeded RNG when a seed is given, OS-seeded otherwise.
fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Print the player's stats block.
fn print_player(store: &Store) {
    let p = store.player();
    let name = if p.name.is_empty() {
        p.id.as_deref().unwrap_or("?")
    } else {
        p.name.as_str()
    };
    println!("  {}", name.bold());
    println!(
        "  level:      {} ({}/{} xp)",
        p.level,
        p.experience,
        th_mechanics::exp_for_level(p.level)
    );
    println!("  hp:         {}/{}", p.hp, store.config().max_hp);
    println!("  coins:      {}", p.coins);
    match store.player_rank() {
        0 => println!("  rank:       {}", "unranked".dimmed()),
        rank => println!("  rank:       #{rank}"),
    }
}

/// Print the game progress block.
fn print_progress(store: &Store) {
    let g = store.game_state();
    println!(
        "  fragments:  {}/{}",
        store.collected_fragment_count(),
        store.total_fragments()
    );
    if let Some(loc) = &g.current_location {
        println!("  location:   {loc}");
    }
    if !g.completed_locations.is_empty() {
        let done: Vec<&str> = g.completed_locations.iter().map(String::as_str).collect();
        println!("  completed:  {}", done.join(", "));
    }
    if !g.skills.is_empty() {
        let skills: Vec<&str> = g.skills.iter().map(String::as_str).collect();
        println!("  skills:     {}", skills.join(", "));
    }
    if g.revives > 0 {
        println!("  revives:    {}", g.revives);
    }
}
