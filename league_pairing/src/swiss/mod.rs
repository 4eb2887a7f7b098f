//! Swiss-system pairing.
//!
//! This module provides the Swiss pairing engine:
//! - Standings recomputed from the full match history on every call
//! - Buchholz tiebreaker from opponents' final scores
//! - Round 1 by name order (or a seeded shuffle)
//! - Later rounds by ranking with rematch avoidance and bye rotation
//!
//! The engine keeps no state between calls. The host supplies the complete
//! history every time and is responsible for serializing calls per event.
//!
//! ## Example
//!
//! ```
//! use league_pairing::swiss::{
//!     Participant, SwissMatchRecord, compute_swiss_standings, generate_swiss_next_round,
//!     generate_swiss_round1, get_swiss_ranking,
//! };
//!
//! let players = vec![
//!     Participant::new("1", "Charlie"),
//!     Participant::new("2", "Alice"),
//!     Participant::new("3", "Bob"),
//! ];
//!
//! let round1 = generate_swiss_round1(&players);
//! assert_eq!(round1.bye_participant_id.as_deref(), Some("1"));
//!
//! let history = vec![SwissMatchRecord::win("2", "3"), SwissMatchRecord::bye("1")];
//! let standings = compute_swiss_standings(&players, &history);
//! let round2 = generate_swiss_next_round(&standings);
//! assert_eq!(round2.bye_participant_id.as_deref(), Some("3"));
//!
//! let leader = &get_swiss_ranking(&standings)[0];
//! assert_eq!(leader.name, "Alice");
//! ```

pub mod models;
pub mod pairing;
pub mod standings;
pub mod validation;

pub use models::{
    Participant, ParticipantId, Points, Round1Order, SwissMatchRecord, SwissParticipantStanding,
    SwissRoundResult, SwissStandings,
};
pub use pairing::{generate_swiss_next_round, generate_swiss_round1, generate_swiss_round1_with};
pub use standings::{
    compare_names, compare_standings, compute_swiss_standings, get_swiss_ranking,
    recommended_swiss_rounds,
};
pub use validation::validate_match_history;
