//! Renders the screen registered for a route path.

use std::path::Path;

use colored::Colorize;

use crate::route::Route;

pub fn run(data_dir: &Path, path: &str, player: Option<&str>) -> Result<(), String> {
    let route = Route::from_path(path).ok_or_else(|| format!("no route for path \"{path}\""))?;
    println!("  {}", route.to_string().bold());
    println!();

    match route {
        Route::RankingPage => super::rankings::run(data_dir),
        Route::GameHome | Route::UserCenter => {
            let player = player.ok_or_else(|| format!("{} needs --player", route.name()))?;
            let store = super::open_as(data_dir, player, None)?;
            super::print_player(&store);
            if route == Route::GameHome {
                println!();
                super::print_progress(&store);
            }
            Ok(())
        }
    }
}
