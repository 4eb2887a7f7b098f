//! Single-elimination bracket generation.

use log::debug;

use super::models::{BracketSlot, NextPosition, Seed};
use crate::errors::{PairingError, PairingResult};

/// Fewest participants a bracket can hold
pub const MIN_PARTICIPANTS: usize = 2;

/// Smallest power of two that fits `participant_count` (never below 2)
pub fn bracket_size(participant_count: usize) -> usize {
    participant_count.max(MIN_PARTICIPANTS).next_power_of_two()
}

/// Number of rounds needed to reduce the field to one winner
pub fn total_rounds(participant_count: usize) -> u32 {
    bracket_size(participant_count).trailing_zeros()
}

/// Display name for a round, counted back from the final
pub fn round_name(round: u32, total_rounds: u32) -> String {
    match total_rounds.saturating_sub(round) {
        0 => "Final".to_string(),
        1 => "Semi-final".to_string(),
        2 => "Quarter-final".to_string(),
        _ => format!("Round {round}"),
    }
}

/// Standard seed order for a bracket of `bracket_size` entries
///
/// Built by doubling from `[1, 2]`: each entry `e` of an order of size `s`
/// becomes `e, 2s + 1 - e`. Consecutive pairs are the round-1 matches.
///
/// # Errors
///
/// Returns `InvalidArgument` unless `bracket_size` is a power of two ≥ 2.
pub fn seed_order(bracket_size: usize) -> PairingResult<Vec<Seed>> {
    if bracket_size < MIN_PARTICIPANTS || !bracket_size.is_power_of_two() {
        return Err(PairingError::InvalidArgument(format!(
            "bracket size must be a power of two of at least 2, got {bracket_size}"
        )));
    }
    let target = Seed::try_from(bracket_size).map_err(|_| {
        PairingError::InvalidArgument(format!("bracket size {bracket_size} is too large"))
    })?;

    let mut order: Vec<Seed> = vec![1, 2];
    let mut size: Seed = 2;
    while size < target {
        let complement = 2 * size + 1;
        order = order
            .iter()
            .flat_map(|&seed| [seed, complement - seed])
            .collect();
        size *= 2;
    }

    Ok(order)
}

/// Build the complete slot structure of a single-elimination bracket
///
/// Seeds above `participant_count` are absent; a round-1 match with an
/// absent side is a bye. Later rounds carry no seeds and are filled by
/// advancement along `next_position`.
///
/// # Errors
///
/// Returns `InvalidArgument` when fewer than 2 participants are given.
pub fn generate_single_elimination_bracket(
    participant_count: usize,
) -> PairingResult<Vec<BracketSlot>> {
    if participant_count < MIN_PARTICIPANTS {
        return Err(PairingError::InvalidArgument(
            "at least 2 participants are required".to_string(),
        ));
    }

    let size = bracket_size(participant_count);
    let rounds = total_rounds(participant_count);
    let order = seed_order(size)?;

    let present = |seed: Seed| ((seed as usize) <= participant_count).then_some(seed);

    let mut slots = Vec::with_capacity(size - 1);
    let mut position: u32 = 0;
    for pair in order.chunks_exact(2) {
        position += 1;
        let seed1 = present(pair[0]);
        let seed2 = present(pair[1]);
        slots.push(BracketSlot {
            round: 1,
            position,
            seed1,
            seed2,
            is_bye: seed1.is_none() || seed2.is_none(),
            next_position: advancement(1, position, rounds),
        });
    }

    let mut matches_in_round = position / 2;
    for round in 2..=rounds {
        for position in 1..=matches_in_round {
            slots.push(BracketSlot {
                round,
                position,
                seed1: None,
                seed2: None,
                is_bye: false,
                next_position: advancement(round, position, rounds),
            });
        }
        matches_in_round /= 2;
    }

    debug!(
        "Generated bracket for {} participants: size {}, {} rounds, {} byes",
        participant_count,
        size,
        rounds,
        size - participant_count
    );

    Ok(slots)
}

fn advancement(round: u32, position: u32, total_rounds: u32) -> Option<NextPosition> {
    (round < total_rounds).then(|| NextPosition {
        round: round + 1,
        position: position.div_ceil(2),
        slot: if position % 2 == 1 { 1 } else { 2 },
    })
}
