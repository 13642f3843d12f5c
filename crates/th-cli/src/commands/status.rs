//! Player and progress summary for one player.

use std::path::Path;

pub fn run(data_dir: &Path, player: &str, name: Option<&str>) -> Result<(), String> {
    let store = super::open_as(data_dir, player, name)?;
    super::print_player(&store);
    println!();
    super::print_progress(&store);
    Ok(())
}
