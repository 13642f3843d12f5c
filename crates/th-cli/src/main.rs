//! CLI frontend for the Treasure Hunt game.

mod commands;
mod route;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "th",
    about = "Treasure Hunt — collect fragments, clear locations, climb the rankings",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding saved progress and rankings
    #[arg(long, global = true, default_value = ".treasure-hunt")]
    data_dir: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a player's progress (the game home view)
    Status {
        /// Player id
        #[arg(short, long)]
        player: String,

        /// Display name used when the player is new
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Complete a location, earning experience and coins once
    Complete {
        /// Location id
        location: String,

        /// Player id
        #[arg(short, long)]
        player: String,

        /// Display name used when the player is new
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Collect a treasure fragment
    Fragment {
        /// Fragment id
        fragment: String,

        /// Player id
        #[arg(short, long)]
        player: String,

        /// Display name used when the player is new
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Take damage
    Damage {
        /// Hit points to lose
        #[arg(default_value = "1", allow_negative_numbers = true)]
        amount: i32,

        /// Player id
        #[arg(short, long)]
        player: String,
    },

    /// Show the leaderboard
    Rankings,

    /// Render the view behind a route path (/, /user, /ranking)
    View {
        /// Route path
        path: String,

        /// Player id (required by the player views)
        #[arg(short, long)]
        player: Option<String>,
    },

    /// Draw a riddle
    Riddle {
        /// Difficulty: easy, medium or hard (unknown values mean easy)
        #[arg(default_value = "easy")]
        difficulty: String,

        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Answer to check against the drawn riddle
        #[arg(short, long)]
        guess: Option<String>,
    },

    /// Roll damage for a combat action
    Attack {
        /// Action: attack, special or anything else
        #[arg(default_value = "attack")]
        action: String,

        /// Defender agility, used for the dodge chance
        #[arg(long, default_value = "0")]
        agility: u32,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let data = cli.data_dir.as_path();

    let result = match cli.command {
        Commands::Status { player, name } => {
            commands::status::run(data, &player, name.as_deref())
        }
        Commands::Complete {
            location,
            player,
            name,
        } => commands::play::complete(data, &player, name.as_deref(), &location),
        Commands::Fragment {
            fragment,
            player,
            name,
        } => commands::play::fragment(data, &player, name.as_deref(), &fragment),
        Commands::Damage { amount, player } => commands::play::damage(data, &player, amount),
        Commands::Rankings => commands::rankings::run(data),
        Commands::View { path, player } => commands::view::run(data, &path, player.as_deref()),
        Commands::Riddle {
            difficulty,
            seed,
            guess,
        } => commands::riddle::run(&difficulty, seed, guess.as_deref()),
        Commands::Attack {
            action,
            agility,
            seed,
        } => commands::attack::run(&action, agility, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
