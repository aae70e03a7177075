//! Season data command: aggregate a team's season and print it.
//!
//! The report is the terminal stand-in for the season dashboard. It is the
//! only place the captain multiplier is applied and team value is scaled
//! from tenths to currency units.

use tracing::debug;

use crate::{
    cli::types::{Gameweek, TeamId},
    fpl::{
        aggregate::{get_data, AggregateOptions},
        http::FplClient,
        types::SeasonData,
    },
    Result,
};

use super::resolve_team_id;

/// Captain points are doubled in FPL scoring.
pub const CAPTAIN_MULTIPLIER: i64 = 2;

/// Parameters for the season data command
#[derive(Debug)]
pub struct SeasonDataParams {
    pub team_id: Option<TeamId>,
    pub last_gameweek: Gameweek,
    pub as_json: bool,
    pub concurrency: usize,
}

/// Handle the season data command
pub async fn handle_season_data(params: SeasonDataParams) -> Result<()> {
    let team_id = resolve_team_id(params.team_id)?;
    let client = FplClient::from_env()?;

    let options = AggregateOptions {
        concurrency: params.concurrency,
    };
    // tarpaulin::skip - HTTP calls, tested via integration tests
    let season = get_data(&client, team_id, params.last_gameweek, options)
        .await
        .inspect_err(|e| debug!(%team_id, error = ?e, "season aggregation failed"))?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&season)?);
    } else {
        print!("{}", format_report(&season));
    }

    Ok(())
}

/// Team value in tenths of a million, shown as e.g. "100.3".
pub fn format_value(tenths: i64) -> String {
    format!("{:.1}", tenths as f64 / 10.0)
}

/// Human-readable season report, one row per gameweek.
pub fn format_report(season: &SeasonData) -> String {
    let profile = &season.profile;
    let mut out = String::new();

    out.push_str(&format!("Team performance: {}\n", season.team_name));
    out.push_str(&format!("Manager: {}\n", profile.manager_name()));
    if let (Some(points), Some(rank)) = (profile.summary_overall_points, profile.summary_overall_rank) {
        out.push_str(&format!("Overall: {} pts, rank {}\n", points, rank));
    }

    if season.is_empty() {
        out.push_str("No gameweeks played yet.\n");
        return out;
    }

    out.push_str(&format!(
        "\n{:>3} {:>5} {:>5} {:>5} {:>9} {:>9} {:>6} {:>3} {:>4}  {:<24} {:>4}\n",
        "GW", "Pts", "Avg", "High", "GW Rank", "Overall", "Value", "TX", "Cost", "Captain", "C Pts"
    ));
    out.push_str(&"-".repeat(92));
    out.push('\n');

    for i in 0..season.len() {
        let captain = format!(
            "{} ({})",
            season.captain_names[i], season.captain_positions[i]
        );
        out.push_str(&format!(
            "{:>3} {:>5} {:>5} {:>5} {:>9} {:>9} {:>6} {:>3} {:>4}  {:<24} {:>4}\n",
            i + 1,
            season.points[i],
            season.average_points[i],
            season.highest_points[i],
            season.gameweek_rank[i],
            season.overall_rank[i],
            format_value(season.team_value[i]),
            season.transfers[i],
            season.transfers_cost[i],
            captain,
            season.captain_points[i] * CAPTAIN_MULTIPLIER,
        ));
    }

    let total: i64 = season.points.iter().sum();
    let captain_total: i64 = season.captain_points.iter().sum::<i64>() * CAPTAIN_MULTIPLIER;
    let hits: i64 = season.transfers_cost.iter().sum();
    out.push_str(&format!(
        "\nTotal: {} pts | Captain: {} pts | Transfer hits: -{}\n",
        total, captain_total, hits
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fpl::types::{GameweekRecord, TeamProfile};

    fn season(records: Vec<GameweekRecord>) -> SeasonData {
        let profile = TeamProfile {
            id: TeamId::new(2368852),
            name: "Moneyball FC".to_string(),
            player_first_name: "Alex".to_string(),
            player_last_name: "Morgan".to_string(),
            summary_overall_points: Some(60),
            summary_overall_rank: Some(500000),
            summary_event_points: Some(60),
            summary_event_rank: Some(500000),
        };
        SeasonData::from_records(profile, records)
    }

    fn record() -> GameweekRecord {
        GameweekRecord {
            gameweek: Gameweek::new(1),
            points: 60,
            gameweek_rank: 500000,
            overall_rank: 500000,
            team_value: 1000,
            transfers: 1,
            transfers_cost: 4,
            average_points: 50,
            highest_points: 120,
            captain_name: "Jane Doe".to_string(),
            captain_position: "ST".to_string(),
            captain_points: 12,
        }
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1000), "100.0");
        assert_eq!(format_value(1003), "100.3");
        assert_eq!(format_value(995), "99.5");
    }

    #[test]
    fn test_report_applies_captain_multiplier() {
        let report = format_report(&season(vec![record()]));

        assert!(report.contains("Team performance: Moneyball FC"));
        assert!(report.contains("Manager: Alex Morgan"));
        assert!(report.contains("Jane Doe (ST)"));
        assert!(report.contains("100.0"));
        assert!(report.contains("Captain: 24 pts"));
        assert!(report.contains("Transfer hits: -4"));
        // Raw aggregator value stays untouched
        assert!(!report.contains("Captain: 12 pts"));
    }

    #[test]
    fn test_report_layout() {
        let report = format_report(&season(vec![record(), record()]));
        let lines: Vec<&str> = report.lines().collect();

        assert!(report.ends_with('\n'));
        assert_eq!(lines[0], "Team performance: Moneyball FC");
        assert_eq!(lines[1], "Manager: Alex Morgan");
        assert_eq!(lines[2], "Overall: 60 pts, rank 500000");
        assert_eq!(lines[3], "");
        assert!(lines[4].trim_start().starts_with("GW"));
        assert_eq!(lines[5], "-".repeat(92));
        assert!(lines[6].trim_start().starts_with("1 "));
        assert!(lines[7].trim_start().starts_with("2 "));
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], "Total: 120 pts | Captain: 48 pts | Transfer hits: -8");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_report_for_empty_season() {
        let report = format_report(&season(Vec::new()));
        assert!(report.contains("No gameweeks played yet."));
        assert!(!report.contains("Captain"));
    }
}
