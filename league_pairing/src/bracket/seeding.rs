//! Mapping participants onto seed numbers.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use std::collections::HashMap;

use super::models::{BracketSlot, FirstRoundMatchup, Seed, SeededParticipant, SeedingMethod};
use crate::swiss::models::{Participant, ParticipantId};

/// Assign seed numbers to participants
///
/// `Manual` keeps the supplied order (seed 1 is the first entry). `Random`
/// shuffles with a seeded RNG, so the same seed always yields the same draw.
pub fn seed_participants(
    participants: &[Participant],
    method: SeedingMethod,
) -> Vec<SeededParticipant> {
    let mut ordered = participants.to_vec();

    if let SeedingMethod::Random { seed } = method {
        let mut rng = StdRng::seed_from_u64(seed);
        ordered.shuffle(&mut rng);
    }

    ordered
        .into_iter()
        .zip(1..)
        .map(|(participant, seed)| SeededParticipant { seed, participant })
        .collect()
}

/// Resolve round-1 seed numbers into participant IDs
///
/// Slots from later rounds are ignored. A seed with no matching participant
/// resolves to `None`.
pub fn first_round_matchups(
    slots: &[BracketSlot],
    seeded: &[SeededParticipant],
) -> Vec<FirstRoundMatchup> {
    let by_seed: HashMap<Seed, &ParticipantId> = seeded
        .iter()
        .map(|s| (s.seed, &s.participant.id))
        .collect();
    let lookup = |seed: Option<Seed>| seed.and_then(|s| by_seed.get(&s).map(|id| (*id).clone()));

    slots
        .iter()
        .filter(|slot| slot.round == 1)
        .map(|slot| FirstRoundMatchup {
            position: slot.position,
            participant1_id: lookup(slot.seed1),
            participant2_id: lookup(slot.seed2),
            is_bye: slot.is_bye,
        })
        .collect()
}
