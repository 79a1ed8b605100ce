//! Read-only mirrors of the backend JSON responses.
//!
//! Every numeric field is optional: the backend emits `null` whenever a
//! denominator was zero (no balls faced, no dismissals, ...), and an absent
//! field means the same thing as a null one. Decoding never fails on missing
//! data — "no data" is a display concern, not a protocol error.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// A selectable player entry from `GET /api/players`.
///
/// `unique_name` is the identity; `display_name` and `country` are what the
/// combobox searches over.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Player {
    pub unique_name: String,
    pub display_name: String,
    #[serde(default)]
    pub country: Option<String>,
}

impl Player {
    /// The "Name · Country" line shown while the selector is closed.
    pub fn selected_label(&self) -> String {
        match &self.country {
            Some(c) if !c.is_empty() => format!("{} · {}", self.display_name, c),
            _ => self.display_name.clone(),
        }
    }
}

/// Batting or bowling discipline of a query or comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Batting,
    Bowling,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Batting => "batting",
            Mode::Bowling => "bowling",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named segment of a T20 innings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKey {
    Powerplay,
    Middle,
    Death,
}

impl PhaseKey {
    /// Canonical display order, also the order phase filters are applied in.
    pub const ALL: [PhaseKey; 3] = [PhaseKey::Powerplay, PhaseKey::Middle, PhaseKey::Death];

    /// Wire key used in query parameters and response maps.
    pub fn key(self) -> &'static str {
        match self {
            PhaseKey::Powerplay => "pp",
            PhaseKey::Middle => "middle",
            PhaseKey::Death => "death",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PhaseKey::Powerplay => "Powerplay",
            PhaseKey::Middle => "Middle Overs",
            PhaseKey::Death => "Death Overs",
        }
    }

    pub fn overs(self) -> &'static str {
        match self {
            PhaseKey::Powerplay => "Overs 1–6",
            PhaseKey::Middle => "Overs 7–15",
            PhaseKey::Death => "Overs 16–20",
        }
    }
}

/// The nullable statistic bag shared by every per-subject endpoint.
///
/// Batting and bowling bags use overlapping field sets, so one struct covers
/// both; fields that do not apply to the discipline at hand simply stay
/// `None`. The comparison endpoint labels bowling innings `innings_bowled`
/// while the stats endpoint uses `innings` — accepted as an alias.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StatBag {
    #[serde(default)]
    pub matches: Option<u32>,
    #[serde(default, alias = "innings_bowled")]
    pub innings: Option<u32>,
    #[serde(default)]
    pub runs: Option<u32>,
    #[serde(default)]
    pub balls_faced: Option<u32>,
    #[serde(default)]
    pub dismissals: Option<u32>,
    #[serde(default)]
    pub fifties: Option<u32>,
    #[serde(default)]
    pub hundreds: Option<u32>,
    #[serde(default)]
    pub wickets: Option<u32>,
    #[serde(default)]
    pub legal_balls: Option<u32>,
    #[serde(default)]
    pub avg: Option<f64>,
    #[serde(default)]
    pub sr: Option<f64>,
    #[serde(default)]
    pub boundary_pct: Option<f64>,
    #[serde(default)]
    pub dot_ball_pct: Option<f64>,
    #[serde(default)]
    pub balls_per_bdy: Option<f64>,
    #[serde(default)]
    pub economy: Option<f64>,
    #[serde(default)]
    pub bowling_sr: Option<f64>,
    #[serde(default)]
    pub boundary_given_pct: Option<f64>,
    #[serde(default)]
    pub wkts_per_innings: Option<f64>,
}

/// Per-phase statistic bags. The backend always emits all three keys; a
/// phase the player never batted/bowled in arrives as a bag of nulls.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PhaseStats {
    #[serde(default)]
    pub pp: StatBag,
    #[serde(default)]
    pub middle: StatBag,
    #[serde(default)]
    pub death: StatBag,
}

impl PhaseStats {
    pub fn get(&self, phase: PhaseKey) -> &StatBag {
        match phase {
            PhaseKey::Powerplay => &self.pp,
            PhaseKey::Middle => &self.middle,
            PhaseKey::Death => &self.death,
        }
    }
}

/// One discipline's overall bag plus its phase breakdown.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DisciplineStats {
    #[serde(default)]
    pub overall: StatBag,
    #[serde(default)]
    pub phases: PhaseStats,
}

/// Both disciplines for one comparison subject.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SubjectStats {
    #[serde(default)]
    pub batting: DisciplineStats,
    #[serde(default)]
    pub bowling: DisciplineStats,
}

impl SubjectStats {
    pub fn discipline(&self, mode: Mode) -> &DisciplineStats {
        match mode {
            Mode::Batting => &self.batting,
            Mode::Bowling => &self.bowling,
        }
    }
}

/// Result of `GET /api/comparison` — two subjects, both disciplines each.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ComparisonResult {
    #[serde(default)]
    pub player1: SubjectStats,
    #[serde(default)]
    pub player2: SubjectStats,
}

/// Result of `GET /api/matchup`. A pair with no recorded deliveries is
/// signalled by a `message` field (or a null `innings`), not by an error.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MatchupResult {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub innings: Option<u32>,
    #[serde(default)]
    pub runs: Option<u32>,
    #[serde(default)]
    pub balls_faced: Option<u32>,
    #[serde(default)]
    pub dismissals: Option<u32>,
    #[serde(default)]
    pub dot_balls: Option<u32>,
    #[serde(default)]
    pub ones: Option<u32>,
    #[serde(default)]
    pub twos: Option<u32>,
    #[serde(default)]
    pub threes: Option<u32>,
    #[serde(default)]
    pub fours: Option<u32>,
    #[serde(default)]
    pub fives: Option<u32>,
    #[serde(default)]
    pub sixes: Option<u32>,
    #[serde(default)]
    pub batter_sr: Option<f64>,
    #[serde(default)]
    pub batting_avg: Option<f64>,
    #[serde(default)]
    pub dot_ball_pct: Option<f64>,
    #[serde(default)]
    pub boundary_pct: Option<f64>,
}

impl MatchupResult {
    /// True when the pair has no recorded deliveries under the given filters.
    pub fn is_empty(&self) -> bool {
        self.message.is_some() || self.innings.is_none()
    }
}

/// Result of `GET /api/stats/team`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TeamStats {
    #[serde(default)]
    pub matches: Option<u32>,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub no_results: Option<u32>,
    #[serde(default)]
    pub win_pct: Option<f64>,
}

/// One row of a grouped stats query (group-by phase / bowler type / hand).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatGroup {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub stats: StatBag,
}

/// Result of `GET /api/stats/player`: either a single bag or grouped bags,
/// never both.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerStatsResponse {
    pub mode: Mode,
    #[serde(default)]
    pub stats: Option<StatBag>,
    #[serde(default)]
    pub groups: Option<Vec<StatGroup>>,
}

/// Player metadata block of `GET /api/profile`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerMeta {
    pub unique_name: String,
    pub display_name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub batting_style: Option<String>,
    #[serde(default)]
    pub bowling_style: Option<String>,
}

/// One season row of the profile charts. Batting rows carry runs/sr/avg,
/// bowling rows wickets/economy; the rest stays `None`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SeasonRow {
    pub year: String,
    #[serde(default)]
    pub matches: Option<u32>,
    #[serde(default)]
    pub runs: Option<u32>,
    #[serde(default)]
    pub balls_faced: Option<u32>,
    #[serde(default)]
    pub dismissals: Option<u32>,
    #[serde(default)]
    pub sr: Option<f64>,
    #[serde(default)]
    pub avg: Option<f64>,
    #[serde(default)]
    pub wickets: Option<u32>,
    #[serde(default)]
    pub legal_balls: Option<u32>,
    #[serde(default)]
    pub economy: Option<f64>,
}

/// One discipline of the profile response, including the style splits
/// (vs pace/spin for batting, vs left/right hand for bowling).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProfileDiscipline {
    #[serde(default)]
    pub overall: StatBag,
    #[serde(default)]
    pub phases: PhaseStats,
    #[serde(default)]
    pub vs_pace: Option<StatBag>,
    #[serde(default)]
    pub vs_spin: Option<StatBag>,
    #[serde(default)]
    pub vs_left: Option<StatBag>,
    #[serde(default)]
    pub vs_right: Option<StatBag>,
    #[serde(default)]
    pub by_season: Vec<SeasonRow>,
}

/// Result of `GET /api/profile`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileResponse {
    pub player: PlayerMeta,
    #[serde(default)]
    pub batting: ProfileDiscipline,
    #[serde(default)]
    pub bowling: ProfileDiscipline,
}

impl ProfileResponse {
    pub fn discipline(&self, mode: Mode) -> &ProfileDiscipline {
        match mode {
            Mode::Batting => &self.batting,
            Mode::Bowling => &self.bowling,
        }
    }
}

/// Result of `POST /api/assistant`. Rows are column-name → cell maps; cells
/// stay as raw JSON values since the generated query can return anything.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AssistantResponse {
    #[serde(default)]
    pub sql: Option<String>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<HashMap<String, serde_json::Value>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_player_with_and_without_country() {
        let raw = r#"[
            {"unique_name": "virat-kohli", "display_name": "Virat Kohli", "country": "India"},
            {"unique_name": "x-y", "display_name": "X Y", "country": null}
        ]"#;
        let players: Vec<Player> = serde_json::from_str(raw).expect("players should decode");
        assert_eq!(players[0].selected_label(), "Virat Kohli · India");
        assert_eq!(players[1].selected_label(), "X Y");
    }

    #[test]
    fn stat_bag_tolerates_missing_and_null_fields() {
        let bag: StatBag = serde_json::from_str(r#"{"innings": 12, "avg": null, "sr": 135.4}"#)
            .expect("partial bag should decode");
        assert_eq!(bag.innings, Some(12));
        assert_eq!(bag.avg, None);
        assert_eq!(bag.sr, Some(135.4));
        assert_eq!(bag.economy, None);
    }

    #[test]
    fn comparison_bowling_innings_alias() {
        let raw = r#"{
            "player1": {"bowling": {"overall": {"innings_bowled": 40, "economy": 7.21}}},
            "player2": {}
        }"#;
        let result: ComparisonResult = serde_json::from_str(raw).expect("should decode");
        let overall = &result.player1.bowling.overall;
        assert_eq!(overall.innings, Some(40));
        assert_eq!(overall.economy, Some(7.21));
        assert_eq!(result.player2.batting.overall, StatBag::default());
    }

    #[test]
    fn matchup_absence_signal() {
        let none: MatchupResult =
            serde_json::from_str(r#"{"message": "No data found"}"#).expect("should decode");
        assert!(none.is_empty());

        let some: MatchupResult =
            serde_json::from_str(r#"{"innings": 5, "runs": 63, "batter_sr": 137.0}"#)
                .expect("should decode");
        assert!(!some.is_empty());
    }

    #[test]
    fn grouped_stats_response() {
        let raw = r#"{
            "player": "x",
            "mode": "bowling",
            "groups": [
                {"key": "pp", "label": "Powerplay", "stats": {"wickets": 11, "economy": 6.8}},
                {"key": "death", "label": "Death Overs", "stats": {"wickets": 25, "economy": 9.1}}
            ]
        }"#;
        let resp: PlayerStatsResponse = serde_json::from_str(raw).expect("should decode");
        assert_eq!(resp.mode, Mode::Bowling);
        assert!(resp.stats.is_none());
        let groups = resp.groups.expect("groups present");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].stats.economy, Some(9.1));
    }

    #[test]
    fn season_row_with_no_dismissals_has_null_avg() {
        let row: SeasonRow =
            serde_json::from_str(r#"{"year": "2023", "runs": 639, "sr": 139.9, "avg": null}"#)
                .expect("should decode");
        assert_eq!(row.year, "2023");
        assert_eq!(row.avg, None);
        assert_eq!(row.runs, Some(639));
    }

    #[test]
    fn assistant_rows_keep_raw_values() {
        let raw = r#"{
            "sql": "SELECT 1",
            "columns": ["avg", "player"],
            "rows": [{"avg": 52.7, "player": "V Kohli"}],
            "error": null
        }"#;
        let resp: AssistantResponse = serde_json::from_str(raw).expect("should decode");
        assert_eq!(resp.columns, vec!["avg", "player"]);
        assert_eq!(resp.rows[0]["player"], serde_json::json!("V Kohli"));
        assert!(resp.error.is_none());
    }
}
