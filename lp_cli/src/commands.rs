//! Subcommands: load an event file, call the pairing library, render the result.

use anyhow::{Context, Result};
use league_pairing::{
    bracket::{BracketSlot, generate_single_elimination_bracket, round_name, total_rounds},
    swiss::{
        Participant, SwissMatchRecord, SwissParticipantStanding, SwissRoundResult,
        compute_swiss_standings, generate_swiss_next_round, generate_swiss_round1_with,
        get_swiss_ranking, validate_match_history,
    },
};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::config::{CliConfig, OutputFormat};

/// Parsed subcommand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Single-elimination skeleton for N participants
    Bracket { participants: usize },
    /// Swiss round-1 pairings
    SwissRound1 { input: PathBuf },
    /// Ranked Swiss standings
    SwissStandings { input: PathBuf },
    /// Next Swiss round pairings
    SwissNext { input: PathBuf },
}

/// Event file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInput {
    /// Entrants
    pub participants: Vec<Participant>,
    /// Completed matches, oldest first
    #[serde(default)]
    pub matches: Vec<SwissMatchRecord>,
}

impl EventInput {
    /// Read and parse an event file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event file {}", path.display()))?;
        let input = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse event file {}", path.display()))?;
        Ok(input)
    }

    fn name_of<'a>(&'a self, id: &'a str) -> &'a str {
        self.participants
            .iter()
            .find(|p| p.id == id)
            .map_or(id, |p| p.name.as_str())
    }
}

/// Execute a command and return the rendered output
pub fn run(command: &Command, config: &CliConfig) -> Result<String> {
    match command {
        Command::Bracket { participants } => {
            let slots = generate_single_elimination_bracket(*participants)?;
            tracing::info!(participants, slots = slots.len(), "Bracket generated");
            render_bracket(&slots, *participants, config.output)
        }
        Command::SwissRound1 { input } => {
            let event = load_checked(input, config)?;
            let round = generate_swiss_round1_with(&event.participants, config.round1_order);
            tracing::info!(pairings = round.pairings.len(), "Round 1 paired");
            render_round(&round, &event, config.output)
        }
        Command::SwissStandings { input } => {
            let event = load_checked(input, config)?;
            let standings = compute_swiss_standings(&event.participants, &event.matches);
            let ranking = get_swiss_ranking(&standings);
            render_standings(&ranking, config.output)
        }
        Command::SwissNext { input } => {
            let event = load_checked(input, config)?;
            let standings = compute_swiss_standings(&event.participants, &event.matches);
            let round = generate_swiss_next_round(&standings);
            let rematches = round.rematches(&standings);
            if !rematches.is_empty() {
                tracing::warn!(count = rematches.len(), "Pairing contains unavoidable rematches");
            }
            render_round(&round, &event, config.output)
        }
    }
}

fn load_checked(path: &Path, config: &CliConfig) -> Result<EventInput> {
    let event = EventInput::load(path)?;
    if config.strict {
        validate_match_history(&event.participants, &event.matches)
            .with_context(|| format!("Match history in {} is invalid", path.display()))?;
    }
    tracing::debug!(
        participants = event.participants.len(),
        matches = event.matches.len(),
        "Event loaded"
    );
    Ok(event)
}

fn render_bracket(slots: &[BracketSlot], participants: usize, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(slots)?);
    }

    let rounds = total_rounds(participants);
    let mut out = String::new();
    let mut current_round = 0;
    for slot in slots {
        if slot.round != current_round {
            current_round = slot.round;
            writeln!(out, "{}", round_name(current_round, rounds))?;
        }
        let side = |seed: Option<u32>| seed.map_or_else(|| "-".to_string(), |s| format!("#{s}"));
        let next = slot.next_position.map_or_else(
            || "champion".to_string(),
            |n| format!("-> R{} M{} ({})", n.round, n.position, n.slot),
        );
        writeln!(
            out,
            "  M{:<3} {:>5} vs {:<5} {:<5} {}",
            slot.position,
            side(slot.seed1),
            side(slot.seed2),
            if slot.is_bye { "bye" } else { "" },
            next
        )?;
    }
    Ok(out)
}

fn render_round(round: &SwissRoundResult, event: &EventInput, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(round)?);
    }

    let mut out = String::new();
    for (board, (a, b)) in round.pairings.iter().enumerate() {
        writeln!(
            out,
            "Board {:<3} {} vs {}",
            board + 1,
            event.name_of(a),
            event.name_of(b)
        )?;
    }
    if let Some(id) = &round.bye_participant_id {
        writeln!(out, "Bye       {}", event.name_of(id))?;
    }
    Ok(out)
}

fn render_standings(ranking: &[SwissParticipantStanding], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(ranking)?);
    }

    let mut out = String::new();
    writeln!(out, "{:>3}  {:<20} {:>6} {:>6}  W-D-L", "#", "Name", "Pts", "Buch")?;
    for (place, standing) in ranking.iter().enumerate() {
        writeln!(
            out,
            "{:>3}  {:<20} {:>6} {:>6}  {}-{}-{}{}",
            place + 1,
            standing.name,
            standing.points,
            standing.buchholz,
            standing.wins,
            standing.draws,
            standing.losses,
            if standing.bye_received { "  (bye)" } else { "" }
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_pairing::swiss::Round1Order;

    fn config(output: OutputFormat, strict: bool) -> CliConfig {
        CliConfig {
            output,
            round1_order: Round1Order::Name,
            strict,
        }
    }

    fn write_event(name: &str, event: &EventInput) -> PathBuf {
        let path = std::env::temp_dir().join(format!("lp_cli_{}_{name}.json", std::process::id()));
        std::fs::write(&path, serde_json::to_string(event).unwrap()).unwrap();
        path
    }

    fn sample_event() -> EventInput {
        EventInput {
            participants: vec![
                Participant::new("a", "Alice"),
                Participant::new("b", "Bob"),
                Participant::new("c", "Charlie"),
                Participant::new("d", "Diana"),
            ],
            matches: vec![
                SwissMatchRecord::win("a", "b"),
                SwissMatchRecord::win("c", "d"),
                SwissMatchRecord::win("a", "c"),
                SwissMatchRecord::win("b", "d"),
            ],
        }
    }

    #[test]
    fn test_bracket_json() {
        let out = run(
            &Command::Bracket { participants: 4 },
            &config(OutputFormat::Json, false),
        )
        .unwrap();
        let slots: Vec<BracketSlot> = serde_json::from_str(&out).unwrap();
        assert_eq!(slots.len(), 3);
    }

    #[test]
    fn test_bracket_text() {
        let out = run(
            &Command::Bracket { participants: 3 },
            &config(OutputFormat::Text, false),
        )
        .unwrap();
        assert!(out.starts_with("Semi-final\n"));
        assert!(out.contains("bye"));
        assert!(out.contains("Final\n"));
        assert!(out.contains("champion"));
    }

    #[test]
    fn test_bracket_rejects_single_participant() {
        let err = run(
            &Command::Bracket { participants: 1 },
            &config(OutputFormat::Json, false),
        )
        .unwrap_err();
        assert!(err.to_string().contains("at least 2 participants"));
    }

    #[test]
    fn test_swiss_next_from_file() {
        let path = write_event("next", &sample_event());
        let out = run(
            &Command::SwissNext { input: path.clone() },
            &config(OutputFormat::Json, true),
        )
        .unwrap();
        let round: SwissRoundResult = serde_json::from_str(&out).unwrap();
        assert_eq!(
            round.pairings,
            vec![
                ("a".to_string(), "d".to_string()),
                ("b".to_string(), "c".to_string())
            ]
        );
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_swiss_round1_text_uses_names() {
        let mut event = sample_event();
        event.matches.clear();
        let path = write_event("round1", &event);
        let out = run(
            &Command::SwissRound1 { input: path.clone() },
            &config(OutputFormat::Text, false),
        )
        .unwrap();
        assert!(out.contains("Alice vs Bob"));
        assert!(out.contains("Charlie vs Diana"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_swiss_standings_text() {
        let path = write_event("standings", &sample_event());
        let out = run(
            &Command::SwissStandings { input: path.clone() },
            &config(OutputFormat::Text, false),
        )
        .unwrap();
        let first_row = out.lines().nth(1).unwrap();
        assert!(first_row.contains("Alice"));
        assert!(first_row.contains("2-0-0"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_strict_mode_rejects_unknown_ids() {
        let mut event = sample_event();
        event.matches.push(SwissMatchRecord::win("a", "zed"));
        let path = write_event("strict", &event);

        let lenient = run(
            &Command::SwissStandings { input: path.clone() },
            &config(OutputFormat::Json, false),
        );
        assert!(lenient.is_ok());

        let strict = run(
            &Command::SwissStandings { input: path.clone() },
            &config(OutputFormat::Json, true),
        );
        assert!(strict.is_err());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file() {
        let err = EventInput::load(Path::new("/nonexistent/lp_cli_event.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read event file"));
    }

    #[test]
    fn test_event_matches_default_to_empty() {
        let event: EventInput =
            serde_json::from_str(r#"{"participants":[{"id":"a","name":"Alice"}]}"#).unwrap();
        assert!(event.matches.is_empty());
        assert_eq!(event.name_of("a"), "Alice");
        assert_eq!(event.name_of("x"), "x");
    }
}
