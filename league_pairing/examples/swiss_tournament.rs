//! Swiss Tournament Example
//!
//! Runs a small Swiss event end to end and prints each round's pairings and
//! the final table.

use league_pairing::bracket::{generate_single_elimination_bracket, round_name, total_rounds};
use league_pairing::swiss::{
    Participant, SwissMatchRecord, compute_swiss_standings, generate_swiss_next_round,
    generate_swiss_round1, get_swiss_ranking, recommended_swiss_rounds,
};

fn main() {
    println!("=== Swiss Tournament Example ===\n");

    let players: Vec<Participant> = ["Morgan", "Alex", "Riley", "Jordan", "Casey"]
        .iter()
        .enumerate()
        .map(|(i, name)| Participant::new(format!("{}", i + 1), *name))
        .collect();
    let name_of = |id: &str| {
        players
            .iter()
            .find(|p| p.id == id)
            .map_or("?", |p| p.name.as_str())
    };

    let rounds = recommended_swiss_rounds(players.len());
    let mut history = Vec::new();
    let mut round = generate_swiss_round1(&players);

    for number in 1..=rounds {
        println!("Round {number}");
        for (a, b) in &round.pairings {
            // The shorter name wins; ties are drawn
            let record = match name_of(a).len().cmp(&name_of(b).len()) {
                std::cmp::Ordering::Less => SwissMatchRecord::win(a.clone(), b.clone()),
                std::cmp::Ordering::Greater => SwissMatchRecord::win(b.clone(), a.clone()),
                std::cmp::Ordering::Equal => SwissMatchRecord::draw(a.clone(), b.clone()),
            };
            println!("  {} vs {}", name_of(a), name_of(b));
            history.push(record);
        }
        if let Some(id) = &round.bye_participant_id {
            println!("  bye: {}", name_of(id));
            history.push(SwissMatchRecord::bye(id.clone()));
        }

        let standings = compute_swiss_standings(&players, &history);
        round = generate_swiss_next_round(&standings);
    }

    println!("\nFinal standings");
    let standings = compute_swiss_standings(&players, &history);
    for (place, standing) in get_swiss_ranking(&standings).iter().enumerate() {
        println!(
            "  {}. {:<8} {:>4} pts  (Buchholz {}, {}-{}-{})",
            place + 1,
            standing.name,
            standing.points,
            standing.buchholz,
            standing.wins,
            standing.draws,
            standing.losses
        );
    }

    println!("\n=== Knockout for the same field ===\n");
    let slots = match generate_single_elimination_bracket(players.len()) {
        Ok(slots) => slots,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let total = total_rounds(players.len());
    for slot in &slots {
        let side = |seed: Option<u32>| seed.map_or("-".to_string(), |s| format!("#{s}"));
        println!(
            "  {:<14} match {}: {} vs {}{}",
            round_name(slot.round, total),
            slot.position,
            side(slot.seed1),
            side(slot.seed2),
            if slot.is_bye { " (bye)" } else { "" }
        );
    }
}
