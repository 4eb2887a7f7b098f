//! # League Pairing
//!
//! Tournament pairing and standings for league and event competitions.
//!
//! Both components are pure functions over small value types. They perform
//! no I/O and keep no state, so a host application can call them from any
//! thread and persist the results however it likes.
//!
//! ## Core Modules
//!
//! - [`bracket`]: Single-elimination bracket skeletons with standard seeding,
//!   byes for the top seeds, and round-to-round advancement wiring
//! - [`swiss`]: Swiss-system standings (points, Buchholz, bye history) and
//!   round pairing with rematch avoidance
//! - [`errors`]: The shared error type
//!
//! ## Example
//!
//! ```
//! use league_pairing::bracket::generate_single_elimination_bracket;
//!
//! let slots = generate_single_elimination_bracket(8).unwrap();
//! let first_round: Vec<_> = slots
//!     .iter()
//!     .filter(|s| s.round == 1)
//!     .map(|s| (s.seed1, s.seed2))
//!     .collect();
//!
//! assert_eq!(first_round[0], (Some(1), Some(8)));
//! assert_eq!(first_round[1], (Some(4), Some(5)));
//! ```

/// Single-elimination bracket generation.
pub mod bracket;

/// Error types shared by both components.
pub mod errors;

/// Swiss-system standings and pairing.
pub mod swiss;

pub use bracket::{BracketSlot, NextPosition, generate_single_elimination_bracket};
pub use errors::{PairingError, PairingResult};
pub use swiss::{
    Participant, ParticipantId, Points, SwissMatchRecord, SwissParticipantStanding,
    SwissRoundResult, SwissStandings, compute_swiss_standings, generate_swiss_next_round,
    generate_swiss_round1, get_swiss_ranking,
};
