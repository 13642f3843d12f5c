//! Game mechanics helpers for Treasure Hunt.
//!
//! Stateless functions shared by the progress store and the front end:
//! random rolls, the experience curve, time formatting, id generation,
//! combat damage and dodge, and the riddle tables used by puzzle
//! encounters. Every function that needs randomness takes the caller's
//! [`StdRng`](rand::rngs::StdRng) so runs can be seeded.

pub mod combat;
pub mod error;
pub mod progression;
pub mod puzzle;
pub mod random;

pub use combat::{CombatAction, Combatant, calculate_damage, calculate_dodge_chance};
pub use error::{MechError, MechResult};
pub use progression::{exp_for_level, format_time, generate_id};
pub use puzzle::{Difficulty, Riddle, generate_puzzle};
pub use random::{chance, random_int};
