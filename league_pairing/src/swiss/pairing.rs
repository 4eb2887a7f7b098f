//! Round pairing: name order for round 1, standings with rematch avoidance afterwards.

use log::{debug, trace};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use super::models::{
    Participant, ParticipantId, Round1Order, SwissParticipantStanding, SwissRoundResult,
    SwissStandings,
};
use super::standings::{compare_names, ranked};

/// Pair round 1 alphabetically by name
///
/// With an odd count the last participant in name order receives the bye.
pub fn generate_swiss_round1(participants: &[Participant]) -> SwissRoundResult {
    generate_swiss_round1_with(participants, Round1Order::Name)
}

/// Pair round 1 using an explicit ordering key
///
/// The list is first put in name order so the result never depends on the
/// caller's input order. `Shuffled` then permutes it with a seeded RNG.
/// Consecutive entries are paired and, with an odd count, the last entry
/// sits out.
pub fn generate_swiss_round1_with(
    participants: &[Participant],
    order: Round1Order,
) -> SwissRoundResult {
    let mut ordered: Vec<&Participant> = participants.iter().collect();
    ordered.sort_by(|a, b| compare_names(&a.name, &b.name).then_with(|| a.id.cmp(&b.id)));

    if let Round1Order::Shuffled { seed } = order {
        let mut rng = StdRng::seed_from_u64(seed);
        ordered.shuffle(&mut rng);
    }

    let bye_participant_id = if ordered.len() % 2 == 1 {
        ordered.pop().map(|p| p.id.clone())
    } else {
        None
    };

    let pairings: Vec<(ParticipantId, ParticipantId)> = ordered
        .chunks_exact(2)
        .map(|pair| (pair[0].id.clone(), pair[1].id.clone()))
        .collect();

    debug!(
        "Round 1: {} pairings, bye: {:?}",
        pairings.len(),
        bye_participant_id
    );

    SwissRoundResult {
        pairings,
        bye_participant_id,
    }
}

/// Pair the next round from current standings
///
/// Participants are ranked canonically. With an odd count the bye goes to
/// the lowest-ranked participant who has not had one yet, or to the very
/// last participant once everyone has. The rest are paired greedily in rank
/// order: each unpaired participant takes the nearest unpaired participant
/// below it that it has not met, falling back to the nearest one if every
/// remaining candidate is a rematch.
pub fn generate_swiss_next_round(standings: &SwissStandings) -> SwissRoundResult {
    let mut pool = ranked(standings);

    let bye_participant_id = if pool.len() % 2 == 1 {
        let index = pool
            .iter()
            .rposition(|s| !s.bye_received)
            .unwrap_or(pool.len() - 1);
        Some(pool.remove(index).participant_id.clone())
    } else {
        None
    };

    let mut paired = vec![false; pool.len()];
    let mut pairings = Vec::with_capacity(pool.len() / 2);

    for i in 0..pool.len() {
        if paired[i] {
            continue;
        }
        let Some(j) = nearest_partner(&pool, &paired, i) else {
            continue;
        };
        paired[i] = true;
        paired[j] = true;

        let (high, low) = (pool[i], pool[j]);
        if high.has_played(&low.participant_id) {
            debug!(
                "Forced rematch: {} vs {}",
                high.participant_id, low.participant_id
            );
        } else {
            trace!("Paired {} vs {}", high.participant_id, low.participant_id);
        }
        pairings.push((high.participant_id.clone(), low.participant_id.clone()));
    }

    debug!(
        "Next round: {} pairings, bye: {:?}",
        pairings.len(),
        bye_participant_id
    );

    SwissRoundResult {
        pairings,
        bye_participant_id,
    }
}

/// Nearest unpaired participant below `i`, preferring one not yet met
fn nearest_partner(
    pool: &[&SwissParticipantStanding],
    paired: &[bool],
    i: usize,
) -> Option<usize> {
    let player = pool[i];
    let mut open = (i + 1..pool.len()).filter(|&j| !paired[j]);
    let first_open = open.next()?;

    if !player.has_played(&pool[first_open].participant_id) {
        return Some(first_open);
    }
    open.find(|&j| !player.has_played(&pool[j].participant_id))
        .or(Some(first_open))
}
