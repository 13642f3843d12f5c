//! Riddle tables for puzzle encounters.
//!
//! Each difficulty tier owns a fixed list of riddles. A puzzle is drawn
//! uniformly from the tier's list.

use std::str::FromStr;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::MechError;

/// Puzzle difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Warm-up riddles.
    #[default]
    Easy,
    /// Riddles for mid-game locations.
    Medium,
    /// Riddles guarding the final fragment.
    Hard,
}

impl Difficulty {
    /// Parse a tier name, falling back to [`Difficulty::Easy`] for unknown names.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// The riddles available at this tier.
    pub fn riddles(self) -> &'static [Riddle] {
        match self {
            Self::Easy => EASY,
            Self::Medium => MEDIUM,
            Self::Hard => HARD,
        }
    }
}

impl FromStr for Difficulty {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(MechError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// A multiple-choice riddle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Riddle {
    /// The question text.
    pub question: &'static str,
    /// Answer options in display order.
    pub options: &'static [&'static str],
    /// The correct option.
    pub answer: &'static str,
}

impl Riddle {
    /// Whether `guess` is the correct answer (case-insensitive, trimmed).
    pub fn is_correct(&self, guess: &str) -> bool {
        guess.trim().eq_ignore_ascii_case(self.answer)
    }
}

const EASY: &[Riddle] = &[Riddle {
    question: "What gets dirtier the more you wash with it?",
    options: &["Water", "Clothes", "Hands", "Bowl"],
    answer: "Water",
}];

const MEDIUM: &[Riddle] = &[Riddle {
    question: "A head but no feet, eyes but no brows. It travels without legs and has wings it cannot fly with.",
    options: &["Fish", "Bird", "Snake", "Butterfly"],
    answer: "Fish",
}];

const HARD: &[Riddle] = &[Riddle {
    question: "Four legs when young, two legs when grown, three legs when old.",
    options: &["Human", "Frog", "Dinosaur", "Horse"],
    answer: "Human",
}];

/// Draw a riddle for the given tier.
pub fn generate_puzzle(rng: &mut StdRng, difficulty: Difficulty) -> &'static Riddle {
    let riddles = difficulty.riddles();
    &riddles[rng.random_range(0..riddles.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn every_answer_is_an_option() {
        for tier in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(!tier.riddles().is_empty());
            for riddle in tier.riddles() {
                assert!(riddle.options.contains(&riddle.answer), "{}", riddle.question);
            }
        }
    }

    #[test]
    fn hard_always_returns_the_single_riddle() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let riddle = generate_puzzle(&mut rng, Difficulty::Hard);
            assert_eq!(riddle.answer, "Human");
            assert!(riddle.options.contains(&riddle.answer));
        }
    }

    #[test]
    fn unknown_difficulty_falls_back_to_easy() {
        assert_eq!(Difficulty::from_name("unknown"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("HARD"), Difficulty::Hard);
        assert!("nightmare".parse::<Difficulty>().is_err());

        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            assert_eq!(
                generate_puzzle(&mut a, Difficulty::from_name("unknown")),
                generate_puzzle(&mut b, Difficulty::Easy)
            );
        }
    }

    #[test]
    fn answer_check_ignores_case() {
        let riddle = &Difficulty::Medium.riddles()[0];
        assert!(riddle.is_correct(" fish "));
        assert!(!riddle.is_correct("bird"));
    }

    #[test]
    fn difficulty_serde_is_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
