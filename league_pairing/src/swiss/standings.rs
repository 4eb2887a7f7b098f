//! Standings, Buchholz tiebreaker and canonical ranking.

use log::{debug, warn};
use std::cmp::Ordering;
use std::collections::HashMap;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use super::models::{
    Participant, ParticipantId, Points, SwissMatchRecord, SwissParticipantStanding, SwissStandings,
};

/// Compare display names alphabetically, root-locale style
///
/// Base letters decide first with accents and case ignored, so "Émile"
/// sorts among the E's. Remaining ties go to accents (unaccented first),
/// then case (lowercase first), then raw code points.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let (a_folded, b_folded) = (case_folded(a), case_folded(b));
    base_letters(&a_folded)
        .cmp(base_letters(&b_folded))
        .then_with(|| a_folded.cmp(&b_folded))
        .then_with(|| {
            a.nfd()
                .map(char::is_uppercase)
                .cmp(b.nfd().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Canonically decomposed and lowercased
fn case_folded(name: &str) -> String {
    name.nfd().flat_map(char::to_lowercase).collect()
}

fn base_letters(folded: &str) -> impl Iterator<Item = char> + '_ {
    folded.chars().filter(|c| !is_combining_mark(*c))
}

/// Canonical ranking order: points desc, Buchholz desc, name asc
///
/// Participant ID is the last resort so identical names never tie.
pub fn compare_standings(a: &SwissParticipantStanding, b: &SwissParticipantStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.buchholz.cmp(&a.buchholz))
        .then_with(|| compare_names(&a.name, &b.name))
        .then_with(|| a.participant_id.cmp(&b.participant_id))
}

/// Recompute standings from the full match history
///
/// Records are applied in order. Byes give the present participant a win
/// and mark `bye_received`. Records naming an unknown participant, missing
/// a side outside of a bye, or pairing a participant with itself are
/// skipped. Buchholz is summed last from every opponent's final points.
pub fn compute_swiss_standings(
    participants: &[Participant],
    completed_matches: &[SwissMatchRecord],
) -> SwissStandings {
    let mut standings: SwissStandings = participants
        .iter()
        .map(|p| (p.id.clone(), SwissParticipantStanding::new(p)))
        .collect();

    for (index, record) in completed_matches.iter().enumerate() {
        apply_match(&mut standings, index, record);
    }

    let final_points: HashMap<ParticipantId, Points> = standings
        .iter()
        .map(|(id, standing)| (id.clone(), standing.points))
        .collect();

    for standing in standings.values_mut() {
        standing.buchholz = standing
            .opponent_ids
            .iter()
            .filter_map(|id| final_points.get(id))
            .copied()
            .sum();
    }

    debug!(
        "Computed standings for {} participants from {} match records",
        standings.len(),
        completed_matches.len()
    );

    standings
}

fn apply_match(standings: &mut SwissStandings, index: usize, record: &SwissMatchRecord) {
    if record.is_bye {
        let present = record
            .participant1_id
            .as_ref()
            .or(record.participant2_id.as_ref());
        match present.and_then(|id| standings.get_mut(id)) {
            Some(standing) => {
                standing.points += Points::WIN;
                standing.wins += 1;
                standing.bye_received = true;
            }
            None => warn!("Skipping bye record #{index}: no known participant"),
        }
        return;
    }

    let (Some(p1), Some(p2)) = (&record.participant1_id, &record.participant2_id) else {
        warn!("Skipping match record #{index}: missing participant");
        return;
    };
    if p1 == p2 {
        warn!("Skipping match record #{index}: {p1} paired with itself");
        return;
    }
    if !standings.contains_key(p1) || !standings.contains_key(p2) {
        warn!("Skipping match record #{index}: unknown participant {p1} or {p2}");
        return;
    }

    if let Some(standing) = standings.get_mut(p1) {
        standing.opponent_ids.push(p2.clone());
    }
    if let Some(standing) = standings.get_mut(p2) {
        standing.opponent_ids.push(p1.clone());
    }

    if record.is_draw {
        for id in [p1, p2] {
            if let Some(standing) = standings.get_mut(id) {
                standing.points += Points::DRAW;
                standing.draws += 1;
            }
        }
        return;
    }

    let (winner, loser) = match record.winner_id.as_ref() {
        Some(w) if w == p1 => (p1, p2),
        Some(w) if w == p2 => (p2, p1),
        _ => {
            warn!("Match record #{index} has no winner among its participants; result ignored");
            return;
        }
    };
    if let Some(standing) = standings.get_mut(winner) {
        standing.points += Points::WIN;
        standing.wins += 1;
    }
    if let Some(standing) = standings.get_mut(loser) {
        standing.losses += 1;
    }
}

/// Standings sorted by the canonical ranking, borrowed
pub(crate) fn ranked(standings: &SwissStandings) -> Vec<&SwissParticipantStanding> {
    let mut ranking: Vec<_> = standings.values().collect();
    ranking.sort_by(|a, b| compare_standings(a, b));
    ranking
}

/// All participants in canonical ranking order
pub fn get_swiss_ranking(standings: &SwissStandings) -> Vec<SwissParticipantStanding> {
    ranked(standings).into_iter().cloned().collect()
}

/// Rounds needed to separate a single leader: `ceil(log2(n))`
pub fn recommended_swiss_rounds(participant_count: usize) -> u32 {
    if participant_count < 2 {
        0
    } else {
        participant_count.next_power_of_two().trailing_zeros()
    }
}
