//! Swiss-system data models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::errors::PairingError;

/// Participant ID type
pub type ParticipantId = String;

/// Standings keyed by participant ID
pub type SwissStandings = BTreeMap<ParticipantId, SwissParticipantStanding>;

/// Entrant as supplied by the host application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    /// Stable identifier
    pub id: ParticipantId,
    /// Display name
    pub name: String,
}

impl Participant {
    /// Create a new participant
    pub fn new(id: impl Into<ParticipantId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Score in exact half-point units
///
/// On the wire this is a plain number (`1.5`). Accumulation happens on the
/// integer half-point count, so no rounding error builds up over rounds.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Points(u32);

impl Points {
    /// No points
    pub const ZERO: Points = Points(0);
    /// Awarded to each side of a draw
    pub const DRAW: Points = Points(1);
    /// Awarded for a win, forfeit win or bye
    pub const WIN: Points = Points(2);

    /// Build from a count of half points
    pub const fn from_half_points(half_points: u32) -> Self {
        Self(half_points)
    }

    /// Count of half points
    pub const fn half_points(self) -> u32 {
        self.0
    }

    /// Value as a float (exact for any realistic score)
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Points {
        Points(self.0 + rhs.0)
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        self.0 += rhs.0;
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Points {
        iter.fold(Points::ZERO, Add::add)
    }
}

impl From<Points> for f64 {
    fn from(points: Points) -> f64 {
        points.as_f64()
    }
}

impl TryFrom<f64> for Points {
    type Error = PairingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(PairingError::InvalidPoints(value.to_string()));
        }
        let doubled = value * 2.0;
        if doubled.fract() != 0.0 || doubled > f64::from(u32::MAX) {
            return Err(PairingError::InvalidPoints(value.to_string()));
        }
        Ok(Points(doubled as u32))
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 2;
        if self.0 % 2 == 0 {
            f.pad(&whole.to_string())
        } else {
            f.pad(&format!("{whole}.5"))
        }
    }
}

/// Accumulated state for one participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwissParticipantStanding {
    /// Participant ID
    pub participant_id: ParticipantId,
    /// Display name, also the final tie-break
    pub name: String,
    /// 1 per win/forfeit win/bye, 0.5 per draw
    pub points: Points,
    /// Sum of the final points of every opponent faced
    pub buchholz: Points,
    /// Received a bye in any earlier round
    pub bye_received: bool,
    /// Opponents in the order they were played (byes excluded)
    pub opponent_ids: Vec<ParticipantId>,
    /// Wins, including forfeit wins and byes
    pub wins: u32,
    /// Draws
    pub draws: u32,
    /// Losses, including forfeits
    pub losses: u32,
}

impl SwissParticipantStanding {
    /// Zeroed standing for a participant
    pub fn new(participant: &Participant) -> Self {
        Self {
            participant_id: participant.id.clone(),
            name: participant.name.clone(),
            points: Points::ZERO,
            buchholz: Points::ZERO,
            bye_received: false,
            opponent_ids: Vec::new(),
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }

    /// Number of games played, byes included
    pub fn rounds_played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    /// Whether this participant has already met `opponent_id`
    pub fn has_played(&self, opponent_id: &str) -> bool {
        self.opponent_ids.iter().any(|id| id == opponent_id)
    }
}

/// One completed pairing result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwissMatchRecord {
    /// First side, `None` on one side of a bye
    pub participant1_id: Option<ParticipantId>,
    /// Second side, `None` on one side of a bye
    pub participant2_id: Option<ParticipantId>,
    /// Winner, `None` for a draw
    pub winner_id: Option<ParticipantId>,
    /// Drawn game
    #[serde(default)]
    pub is_draw: bool,
    /// Bye round for the present participant
    #[serde(default)]
    pub is_bye: bool,
    /// Won by forfeit
    #[serde(default)]
    pub is_forfeit: bool,
}

impl SwissMatchRecord {
    /// Decisive result
    pub fn win(winner: impl Into<ParticipantId>, loser: impl Into<ParticipantId>) -> Self {
        let winner = winner.into();
        Self {
            participant1_id: Some(winner.clone()),
            participant2_id: Some(loser.into()),
            winner_id: Some(winner),
            is_draw: false,
            is_bye: false,
            is_forfeit: false,
        }
    }

    /// Drawn game
    pub fn draw(p1: impl Into<ParticipantId>, p2: impl Into<ParticipantId>) -> Self {
        Self {
            participant1_id: Some(p1.into()),
            participant2_id: Some(p2.into()),
            winner_id: None,
            is_draw: true,
            is_bye: false,
            is_forfeit: false,
        }
    }

    /// Bye for a single participant
    pub fn bye(participant: impl Into<ParticipantId>) -> Self {
        let participant = participant.into();
        Self {
            participant1_id: Some(participant.clone()),
            participant2_id: None,
            winner_id: Some(participant),
            is_draw: false,
            is_bye: true,
            is_forfeit: false,
        }
    }

    /// Win by forfeit of the other side
    pub fn forfeit(winner: impl Into<ParticipantId>, forfeiting: impl Into<ParticipantId>) -> Self {
        Self {
            is_forfeit: true,
            ..Self::win(winner, forfeiting)
        }
    }
}

/// Pairings for one round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwissRoundResult {
    /// Pairs in board order, higher-ranked side first
    pub pairings: Vec<(ParticipantId, ParticipantId)>,
    /// Participant sitting out with a bye
    pub bye_participant_id: Option<ParticipantId>,
}

impl SwissRoundResult {
    /// Pairs that repeat an earlier meeting according to `standings`
    pub fn rematches(&self, standings: &SwissStandings) -> Vec<(ParticipantId, ParticipantId)> {
        self.pairings
            .iter()
            .filter(|(a, b)| standings.get(a).is_some_and(|s| s.has_played(b)))
            .cloned()
            .collect()
    }

    /// Whether any pair repeats an earlier meeting
    pub fn contains_rematch(&self, standings: &SwissStandings) -> bool {
        !self.rematches(standings).is_empty()
    }

    /// Every participant placed this round, bye included
    pub fn participant_count(&self) -> usize {
        self.pairings.len() * 2 + usize::from(self.bye_participant_id.is_some())
    }
}

/// Ordering used for round-1 pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "order")]
pub enum Round1Order {
    /// Alphabetical by display name
    #[default]
    Name,
    /// Name order shuffled with a seeded RNG
    Shuffled { seed: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_display() {
        assert_eq!(Points::ZERO.to_string(), "0");
        assert_eq!(Points::DRAW.to_string(), "0.5");
        assert_eq!(Points::WIN.to_string(), "1");
        assert_eq!((Points::WIN + Points::DRAW).to_string(), "1.5");
        assert_eq!(format!("{:>4}", Points::DRAW), " 0.5");
    }

    #[test]
    fn test_points_sum_is_exact() {
        let total: Points = std::iter::repeat_n(Points::DRAW, 1_000).sum();
        assert_eq!(total.half_points(), 1_000);
        assert_eq!(total.as_f64(), 500.0);
    }

    #[test]
    fn test_points_try_from_f64() {
        assert_eq!(Points::try_from(2.5), Ok(Points::from_half_points(5)));
        assert_eq!(Points::try_from(0.0), Ok(Points::ZERO));
        assert!(Points::try_from(0.25).is_err());
        assert!(Points::try_from(-1.0).is_err());
        assert!(Points::try_from(f64::NAN).is_err());
        assert!(Points::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn test_points_serde_as_number() {
        let json = serde_json::to_string(&Points::from_half_points(3)).unwrap();
        assert_eq!(json, "1.5");
        let back: Points = serde_json::from_str("2.5").unwrap();
        assert_eq!(back.half_points(), 5);
        assert!(serde_json::from_str::<Points>("0.3").is_err());
    }

    #[test]
    fn test_match_record_constructors() {
        let bye = SwissMatchRecord::bye("a");
        assert!(bye.is_bye);
        assert_eq!(bye.participant2_id, None);
        assert_eq!(bye.winner_id.as_deref(), Some("a"));

        let draw = SwissMatchRecord::draw("a", "b");
        assert!(draw.is_draw);
        assert_eq!(draw.winner_id, None);

        let forfeit = SwissMatchRecord::forfeit("a", "b");
        assert!(forfeit.is_forfeit);
        assert_eq!(forfeit.winner_id.as_deref(), Some("a"));
        assert_eq!(forfeit.participant2_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_match_record_flags_default_when_missing() {
        let record: SwissMatchRecord = serde_json::from_str(
            r#"{"participant1Id":"a","participant2Id":"b","winnerId":"b"}"#,
        )
        .unwrap();
        assert!(!record.is_draw);
        assert!(!record.is_bye);
        assert!(!record.is_forfeit);
        assert_eq!(record.winner_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_round_result_rematches() {
        let mut alice = SwissParticipantStanding::new(&Participant::new("a", "Alice"));
        alice.opponent_ids.push("b".to_string());
        let mut standings = SwissStandings::new();
        standings.insert("a".to_string(), alice);

        let round = SwissRoundResult {
            pairings: vec![
                ("a".to_string(), "b".to_string()),
                ("c".to_string(), "d".to_string()),
            ],
            bye_participant_id: Some("e".to_string()),
        };
        assert!(round.contains_rematch(&standings));
        assert_eq!(round.rematches(&standings).len(), 1);
        assert_eq!(round.participant_count(), 5);
    }

    #[test]
    fn test_round1_order_default() {
        assert_eq!(Round1Order::default(), Round1Order::Name);
    }
}
