//! Draws a riddle for a difficulty tier and optionally checks a guess.

use colored::Colorize;
use th_mechanics::{Difficulty, generate_puzzle};
use tracing::warn;

pub fn run(difficulty: &str, seed: Option<u64>, guess: Option<&str>) -> Result<(), String> {
    let tier = difficulty.parse::<Difficulty>().unwrap_or_else(|e| {
        warn!(error = %e, "falling back to easy");
        Difficulty::Easy
    });
    let mut rng = super::rng_from(seed);
    let riddle = generate_puzzle(&mut rng, tier);

    println!("  [{tier}] {}", riddle.question);
    for (i, option) in riddle.options.iter().enumerate() {
        println!("    {}. {option}", i + 1);
    }

    if let Some(guess) = guess {
        if riddle.is_correct(guess) {
            println!("  {}", "Correct!".green().bold());
        } else {
            println!("  {} The answer was {}.", "Wrong.".red(), riddle.answer);
        }
    }
    Ok(())
}
