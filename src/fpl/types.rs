use crate::cli::types::{Gameweek, PlayerId, TeamId};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;


/// Upstream sends `null` ranks for a gameweek still in progress.
fn de_nullable_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<i64> = Deserialize::deserialize(deserializer)?;
    Ok(raw.unwrap_or(0))
}

fn default_multiplier() -> u8 {
    1
}

/// Team profile from `/entry/{id}/`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamProfile {
    pub id: TeamId,
    /// Team display name
    pub name: String,
    pub player_first_name: String,
    pub player_last_name: String,
    /// Season summary scalars are `null` before the first deadline
    #[serde(default)]
    pub summary_overall_points: Option<i64>,
    #[serde(default)]
    pub summary_overall_rank: Option<i64>,
    #[serde(default)]
    pub summary_event_points: Option<i64>,
    #[serde(default)]
    pub summary_event_rank: Option<i64>,
}

impl TeamProfile {
    pub fn manager_name(&self) -> String {
        format!("{} {}", self.player_first_name, self.player_last_name)
    }
}

/// The `entry_history` block of a picks payload
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EntryHistory {
    pub points: i64,
    #[serde(deserialize_with = "de_nullable_i64", default)]
    pub rank: i64,
    #[serde(deserialize_with = "de_nullable_i64", default)]
    pub overall_rank: i64,
    /// Team value including bank, in tenths of a million
    pub value: i64,
    pub event_transfers: i64,
    pub event_transfers_cost: i64,
}

/// One squad member in a gameweek's picks
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Pick {
    pub element: PlayerId,
    /// Squad slot 1-15; 12-15 are the bench
    #[serde(default)]
    pub position: u8,
    /// 0 on the bench, 2 for the captain, 3 for a triple captain
    #[serde(default = "default_multiplier")]
    pub multiplier: u8,
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
}

/// Payload of `/entry/{id}/event/{gw}/picks/`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GameweekPicks {
    pub entry_history: EntryHistory,
    #[serde(default)]
    pub picks: Vec<Pick>,
}

/// A player in the bootstrap catalog
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Element {
    pub id: PlayerId,
    pub first_name: String,
    pub second_name: String,
    /// Position code, 1 = GK through 4 = ST
    pub element_type: u8,
}

/// League-wide aggregates for one gameweek
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EventSummary {
    #[serde(default)]
    pub id: Option<Gameweek>,
    #[serde(deserialize_with = "de_nullable_i64", default)]
    pub average_entry_score: i64,
    #[serde(deserialize_with = "de_nullable_i64", default)]
    pub highest_score: i64,
}

/// Payload of `/bootstrap-static/`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LeagueBootstrap {
    pub elements: Vec<Element>,
    pub events: Vec<EventSummary>,
}

/// One fixture's worth of points for a player
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HistoryEntry {
    pub round: Gameweek,
    pub total_points: i64,
}

/// Payload of `/element-summary/{id}/`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ElementSummary {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// One gameweek of a team's season, joined across endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameweekRecord {
    pub gameweek: Gameweek,
    pub points: i64,
    pub gameweek_rank: i64,
    pub overall_rank: i64,
    pub team_value: i64,
    pub transfers: i64,
    pub transfers_cost: i64,
    pub average_points: i64,
    pub highest_points: i64,
    pub captain_name: String,
    pub captain_position: String,
    /// Raw points, before the captain multiplier
    pub captain_points: i64,
}

/// Season statistics as index-aligned sequences; element `i` is gameweek `i + 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonData {
    pub team_name: String,
    pub profile: TeamProfile,
    pub points: Vec<i64>,
    pub average_points: Vec<i64>,
    pub highest_points: Vec<i64>,
    pub gameweek_rank: Vec<i64>,
    pub overall_rank: Vec<i64>,
    pub team_value: Vec<i64>,
    pub transfers: Vec<i64>,
    pub transfers_cost: Vec<i64>,
    pub captain_names: Vec<String>,
    pub captain_positions: Vec<String>,
    pub captain_points: Vec<i64>,
    /// Season points per position; keyed GK/DEF/MID/ST and left at zero
    pub position_totals: BTreeMap<String, i64>,
}

impl SeasonData {
    /// Split ordered gameweek records into parallel sequences.
    pub fn from_records(profile: TeamProfile, records: Vec<GameweekRecord>) -> Self {
        let n = records.len();
        let mut data = SeasonData {
            team_name: profile.name.clone(),
            profile,
            points: Vec::with_capacity(n),
            average_points: Vec::with_capacity(n),
            highest_points: Vec::with_capacity(n),
            gameweek_rank: Vec::with_capacity(n),
            overall_rank: Vec::with_capacity(n),
            team_value: Vec::with_capacity(n),
            transfers: Vec::with_capacity(n),
            transfers_cost: Vec::with_capacity(n),
            captain_names: Vec::with_capacity(n),
            captain_positions: Vec::with_capacity(n),
            captain_points: Vec::with_capacity(n),
            position_totals: crate::cli::types::Position::ALL
                .iter()
                .map(|p| (p.to_string(), 0))
                .collect(),
        };

        for r in records {
            data.points.push(r.points);
            data.average_points.push(r.average_points);
            data.highest_points.push(r.highest_points);
            data.gameweek_rank.push(r.gameweek_rank);
            data.overall_rank.push(r.overall_rank);
            data.team_value.push(r.team_value);
            data.transfers.push(r.transfers);
            data.transfers_cost.push(r.transfers_cost);
            data.captain_names.push(r.captain_name);
            data.captain_positions.push(r.captain_position);
            data.captain_points.push(r.captain_points);
        }
        data
    }

    /// Number of gameweeks covered.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A single player's points for one gameweek, for display
#[derive(Debug, Clone, Serialize)]
pub struct PlayerPoints {
    pub id: PlayerId,
    pub name: String,
    pub position: String,
    pub gameweek: Gameweek,
    pub points: i64,
}
