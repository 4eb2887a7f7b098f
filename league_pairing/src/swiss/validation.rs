//! Strict checks over a match history before it is folded into standings.
//!
//! `compute_swiss_standings` silently drops records it cannot apply. Hosts
//! that would rather surface data-integrity problems call
//! [`validate_match_history`] first.

use std::collections::HashSet;

use super::models::{Participant, SwissMatchRecord};
use crate::errors::{PairingError, PairingResult};

/// Validate participants and match records, failing on the first problem
///
/// # Errors
///
/// - `DuplicateParticipant` if two participants share an ID
/// - `UnknownParticipant` if a record names an ID outside the list
/// - `MalformedMatch` if a record's flags contradict its participants or winner
pub fn validate_match_history(
    participants: &[Participant],
    matches: &[SwissMatchRecord],
) -> PairingResult<()> {
    let mut known = HashSet::with_capacity(participants.len());
    for participant in participants {
        if !known.insert(participant.id.as_str()) {
            return Err(PairingError::DuplicateParticipant(participant.id.clone()));
        }
    }

    for (index, record) in matches.iter().enumerate() {
        for id in [&record.participant1_id, &record.participant2_id, &record.winner_id]
            .into_iter()
            .flatten()
        {
            if !known.contains(id.as_str()) {
                return Err(PairingError::UnknownParticipant {
                    index,
                    id: id.clone(),
                });
            }
        }
        check_flags(index, record)?;
    }

    Ok(())
}

fn check_flags(index: usize, record: &SwissMatchRecord) -> PairingResult<()> {
    let p1 = record.participant1_id.as_ref();
    let p2 = record.participant2_id.as_ref();
    let winner = record.winner_id.as_ref();

    if record.is_bye {
        let present = match (p1, p2) {
            (Some(id), None) | (None, Some(id)) => id,
            _ => {
                return Err(PairingError::malformed(
                    index,
                    "bye must have exactly one participant",
                ));
            }
        };
        if winner != Some(present) {
            return Err(PairingError::malformed(
                index,
                "bye winner must be the present participant",
            ));
        }
        if record.is_draw || record.is_forfeit {
            return Err(PairingError::malformed(
                index,
                "bye cannot also be a draw or forfeit",
            ));
        }
        return Ok(());
    }

    let (Some(p1), Some(p2)) = (p1, p2) else {
        return Err(PairingError::malformed(index, "both participants are required"));
    };
    if p1 == p2 {
        return Err(PairingError::malformed(index, "participant paired with itself"));
    }

    if record.is_draw {
        if winner.is_some() {
            return Err(PairingError::malformed(index, "draw cannot have a winner"));
        }
        if record.is_forfeit {
            return Err(PairingError::malformed(index, "draw cannot be a forfeit"));
        }
        return Ok(());
    }

    match winner {
        Some(w) if w == p1 || w == p2 => Ok(()),
        Some(_) => Err(PairingError::malformed(
            index,
            "winner is not one of the participants",
        )),
        None => Err(PairingError::malformed(
            index,
            "decided match must have a winner",
        )),
    }
}
