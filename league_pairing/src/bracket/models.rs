//! Bracket data models for single-elimination events.

use serde::{Deserialize, Serialize};

use crate::swiss::models::{Participant, ParticipantId};

/// Seed rank (1-indexed, 1 is the strongest)
pub type Seed = u32;

/// Where the winner of a match advances to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextPosition {
    /// Round of the next match
    pub round: u32,
    /// Position of the next match within its round
    pub position: u32,
    /// Input of the next match this winner fills (1 or 2)
    pub slot: u8,
}

/// One match position in a single-elimination bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketSlot {
    /// Round number (1-indexed)
    pub round: u32,
    /// Position within the round (1-indexed, left to right)
    pub position: u32,
    /// Upper seed, round 1 only
    pub seed1: Option<Seed>,
    /// Lower seed, round 1 only
    pub seed2: Option<Seed>,
    /// Exactly one side of a round-1 match is empty
    pub is_bye: bool,
    /// Advancement target, `None` for the final
    pub next_position: Option<NextPosition>,
}

impl BracketSlot {
    /// Whether this slot is the final match
    pub fn is_final(&self) -> bool {
        self.next_position.is_none()
    }

    /// Seed that advances without playing, if this is a bye
    pub fn bye_seed(&self) -> Option<Seed> {
        if self.is_bye {
            self.seed1.or(self.seed2)
        } else {
            None
        }
    }
}

/// How entrants are mapped onto seed numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "method")]
pub enum SeedingMethod {
    /// Seed `k` is the k-th participant as supplied
    #[default]
    Manual,
    /// Deterministic shuffle from the given RNG seed
    Random { seed: u64 },
}

/// Participant with an assigned seed number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeededParticipant {
    /// Seed rank (1-indexed)
    pub seed: Seed,
    /// The participant holding that seed
    pub participant: Participant,
}

/// Round-1 match resolved to participant IDs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstRoundMatchup {
    /// Position within round 1
    pub position: u32,
    /// Participant holding `seed1`
    pub participant1_id: Option<ParticipantId>,
    /// Participant holding `seed2`
    pub participant2_id: Option<ParticipantId>,
    /// Copied from the slot
    pub is_bye: bool,
}
