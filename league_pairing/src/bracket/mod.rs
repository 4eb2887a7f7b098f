//! Single-elimination brackets.
//!
//! This module builds the complete skeleton of a knockout bracket from a
//! participant count:
//! - Standard seed order (1 vs N, 2 vs N-1, top seeds meet as late as possible)
//! - Byes for the strongest seeds when the field is not a power of two
//! - Advancement wiring from every match into the next round
//!
//! The bracket is generated once. Results are recorded by the caller against
//! the returned `(round, position)` pairs.
//!
//! ## Example
//!
//! ```
//! use league_pairing::bracket::{generate_single_elimination_bracket, round_name, total_rounds};
//!
//! let slots = generate_single_elimination_bracket(5).unwrap();
//! assert_eq!(slots.len(), 7);
//!
//! let byes = slots.iter().filter(|s| s.is_bye).count();
//! assert_eq!(byes, 3);
//!
//! assert_eq!(round_name(3, total_rounds(5)), "Final");
//! ```

pub mod generator;
pub mod models;
pub mod seeding;

pub use generator::{
    MIN_PARTICIPANTS, bracket_size, generate_single_elimination_bracket, round_name, seed_order,
    total_rounds,
};
pub use models::{
    BracketSlot, FirstRoundMatchup, NextPosition, Seed, SeededParticipant, SeedingMethod,
};
pub use seeding::{first_round_matchups, seed_participants};
