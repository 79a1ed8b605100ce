//! HTTP client for the stats backend.
//!
//! Every endpoint is a thin GET/POST over `gloo-net` returning serde-decoded
//! models. Query construction lives in pure `query_pairs` builders so the
//! parameter plumbing can be tested without a browser: repeated `events`
//! pairs for multi-select filters, omitted pairs for inactive ones.
//!
//! A non-2xx status or transport rejection is an [`ApiError`]; an empty
//! statistic bag in a 2xx body is data, not an error.

use crate::models::{
    AssistantResponse, ComparisonResult, MatchupResult, Mode, PhaseKey, Player,
    PlayerStatsResponse, ProfileResponse, TeamStats,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// Base URL of the backend REST API.
pub const API_BASE: &str = "http://localhost:8000/api";

/// Failure of one backend request.
#[derive(Debug)]
pub enum ApiError {
    /// Non-2xx response.
    Status(u16),
    /// The transport rejected the request (network down, CORS, ...).
    Network(String),
    /// The body arrived but did not decode into the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status(code) => write!(f, "HTTP {code}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Decode(msg) => write!(f, "unexpected response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(&'static str, String)],
) -> Result<T, ApiError> {
    let response = Request::get(&format!("{API_BASE}{path}"))
        .query(query.iter().map(|(k, v)| (*k, v.as_str())))
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::post(&format!("{API_BASE}{path}"))
        .json(body)?
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn push_events(pairs: &mut Vec<(&'static str, String)>, events: &[String]) {
    for event in events {
        pairs.push(("events", event.clone()));
    }
}

fn push_opt(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(v) = value {
        if !v.trim().is_empty() {
            pairs.push((key, v.clone()));
        }
    }
}

/// Parameters of `GET /api/comparison`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComparisonQuery {
    pub player1: String,
    pub player2: String,
    pub events: Vec<String>,
}

impl ComparisonQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("player1", self.player1.clone()),
            ("player2", self.player2.clone()),
        ];
        push_events(&mut pairs, &self.events);
        pairs
    }
}

/// Parameters of `GET /api/matchup`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchupQuery {
    pub batter: String,
    pub bowler: String,
    pub events: Vec<String>,
}

impl MatchupQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("batter", self.batter.clone()),
            ("bowler", self.bowler.clone()),
        ];
        push_events(&mut pairs, &self.events);
        pairs
    }
}

/// Grouping dimension of a filtered player-stats query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    BowlerType,
    BatterHand,
    Phase,
}

impl GroupBy {
    pub fn wire(self) -> &'static str {
        match self {
            GroupBy::BowlerType => "bowler_type",
            GroupBy::BatterHand => "batter_hand",
            GroupBy::Phase => "phase",
        }
    }
}

/// Parameters of `GET /api/stats/player`. Inactive filters stay `None` and
/// are left out of the query string entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStatsQuery {
    pub player: String,
    pub mode: Mode,
    pub phase: Option<PhaseKey>,
    pub events: Vec<String>,
    pub bowler_type: Option<String>,
    pub batter_hand: Option<String>,
    pub opposition: Option<String>,
    pub venue: Option<String>,
    pub year_from: Option<u16>,
    pub balls: Option<u16>,
    pub group_by: Option<GroupBy>,
}

impl PlayerStatsQuery {
    pub fn new(player: impl Into<String>, mode: Mode) -> Self {
        PlayerStatsQuery {
            player: player.into(),
            mode,
            phase: None,
            events: Vec::new(),
            bowler_type: None,
            batter_hand: None,
            opposition: None,
            venue: None,
            year_from: None,
            balls: None,
            group_by: None,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("player", self.player.clone()),
            ("mode", self.mode.as_str().to_string()),
        ];
        if let Some(phase) = self.phase {
            pairs.push(("phase", phase.key().to_string()));
        }
        push_events(&mut pairs, &self.events);
        push_opt(&mut pairs, "bowler_type", &self.bowler_type);
        push_opt(&mut pairs, "batter_hand", &self.batter_hand);
        push_opt(&mut pairs, "opposition", &self.opposition);
        push_opt(&mut pairs, "venue", &self.venue);
        if let Some(year) = self.year_from {
            pairs.push(("year_from", year.to_string()));
        }
        if let Some(balls) = self.balls {
            pairs.push(("balls", balls.to_string()));
        }
        if let Some(group_by) = self.group_by {
            pairs.push(("group_by", group_by.wire().to_string()));
        }
        pairs
    }
}

/// Innings context of a team query: batting first or chasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InningsContext {
    Defending,
    Chasing,
}

impl InningsContext {
    pub fn wire(self) -> &'static str {
        match self {
            InningsContext::Defending => "defending",
            InningsContext::Chasing => "chasing",
        }
    }
}

/// Parameters of `GET /api/stats/team`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamStatsQuery {
    pub team: String,
    pub opposition: Option<String>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub events: Vec<String>,
    pub year_from: Option<u16>,
    pub innings: Option<InningsContext>,
}

impl TeamStatsQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("team", self.team.clone())];
        push_opt(&mut pairs, "opposition", &self.opposition);
        push_opt(&mut pairs, "venue", &self.venue);
        push_opt(&mut pairs, "city", &self.city);
        push_events(&mut pairs, &self.events);
        if let Some(year) = self.year_from {
            pairs.push(("year_from", year.to_string()));
        }
        if let Some(innings) = self.innings {
            pairs.push(("innings", innings.wire().to_string()));
        }
        pairs
    }
}

/// Matchup fetch outcome: the backend signals "these two never faced each
/// other" inside a 2xx body, which is a neutral state, not a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchupOutcome {
    NoData,
    Found(MatchupResult),
}

#[derive(Serialize)]
struct AssistantRequest<'a> {
    question: &'a str,
}

/// `GET /api/players` — the full selectable player list.
pub async fn fetch_players() -> Result<Vec<Player>, ApiError> {
    get_json("/players", &[]).await
}

/// `GET /api/teams` — flat list of team names.
pub async fn fetch_teams() -> Result<Vec<String>, ApiError> {
    get_json("/teams", &[]).await
}

/// `GET /api/comparison` — both subjects, both disciplines.
pub async fn fetch_comparison(query: &ComparisonQuery) -> Result<ComparisonResult, ApiError> {
    get_json("/comparison", &query.query_pairs()).await
}

/// `GET /api/matchup` — batter-vs-bowler aggregate, or [`MatchupOutcome::NoData`].
pub async fn fetch_matchup(query: &MatchupQuery) -> Result<MatchupOutcome, ApiError> {
    let result: MatchupResult = get_json("/matchup", &query.query_pairs()).await?;
    if result.is_empty() {
        Ok(MatchupOutcome::NoData)
    } else {
        Ok(MatchupOutcome::Found(result))
    }
}

/// `GET /api/stats/player` — filtered single-subject stats, grouped or not.
pub async fn fetch_player_stats(
    query: &PlayerStatsQuery,
) -> Result<PlayerStatsResponse, ApiError> {
    get_json("/stats/player", &query.query_pairs()).await
}

/// `GET /api/stats/team` — win/loss record under the given filters.
pub async fn fetch_team_stats(query: &TeamStatsQuery) -> Result<TeamStats, ApiError> {
    get_json("/stats/team", &query.query_pairs()).await
}

/// `GET /api/profile` — metadata, overall/phase/split bags and season rows.
pub async fn fetch_profile(player: &str, events: &[String]) -> Result<ProfileResponse, ApiError> {
    let mut pairs = vec![("player", player.to_string())];
    push_events(&mut pairs, events);
    get_json("/profile", &pairs).await
}

/// `POST /api/assistant` — free-text question in, generated query + rows out.
pub async fn ask_assistant(question: &str) -> Result<AssistantResponse, ApiError> {
    post_json("/assistant", &AssistantRequest { question }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_query_repeats_events() {
        let query = ComparisonQuery {
            player1: "virat-kohli".into(),
            player2: "rohit-sharma".into(),
            events: vec!["IPL".into(), "T20I".into()],
        };
        assert_eq!(
            query.query_pairs(),
            vec![
                ("player1", "virat-kohli".to_string()),
                ("player2", "rohit-sharma".to_string()),
                ("events", "IPL".to_string()),
                ("events", "T20I".to_string()),
            ]
        );
    }

    #[test]
    fn player_stats_query_omits_inactive_filters() {
        let query = PlayerStatsQuery::new("jasprit-bumrah", Mode::Bowling);
        assert_eq!(
            query.query_pairs(),
            vec![
                ("player", "jasprit-bumrah".to_string()),
                ("mode", "bowling".to_string()),
            ]
        );
    }

    #[test]
    fn player_stats_query_includes_every_active_filter() {
        let query = PlayerStatsQuery {
            phase: Some(PhaseKey::Death),
            events: vec!["IPL".into()],
            batter_hand: Some("left".into()),
            opposition: Some("India".into()),
            venue: Some("Wankhede".into()),
            year_from: Some(2022),
            group_by: Some(GroupBy::Phase),
            ..PlayerStatsQuery::new("rashid-khan", Mode::Bowling)
        };
        let pairs = query.query_pairs();
        assert!(pairs.contains(&("phase", "death".to_string())));
        assert!(pairs.contains(&("batter_hand", "left".to_string())));
        assert!(pairs.contains(&("opposition", "India".to_string())));
        assert!(pairs.contains(&("venue", "Wankhede".to_string())));
        assert!(pairs.contains(&("year_from", "2022".to_string())));
        assert!(pairs.contains(&("group_by", "phase".to_string())));
        assert!(!pairs.iter().any(|(k, _)| *k == "bowler_type"));
        assert!(!pairs.iter().any(|(k, _)| *k == "balls"));
    }

    #[test]
    fn blank_text_filters_are_dropped() {
        let query = PlayerStatsQuery {
            venue: Some("   ".into()),
            bowler_type: Some(String::new()),
            ..PlayerStatsQuery::new("x", Mode::Batting)
        };
        let pairs = query.query_pairs();
        assert!(!pairs.iter().any(|(k, _)| *k == "venue"));
        assert!(!pairs.iter().any(|(k, _)| *k == "bowler_type"));
    }

    #[test]
    fn batter_balls_window_is_forwarded() {
        let query = PlayerStatsQuery {
            balls: Some(20),
            bowler_type: Some("leg-spin".into()),
            ..PlayerStatsQuery::new("suryakumar-yadav", Mode::Batting)
        };
        let pairs = query.query_pairs();
        assert!(pairs.contains(&("balls", "20".to_string())));
        assert!(pairs.contains(&("bowler_type", "leg-spin".to_string())));
    }

    #[test]
    fn team_query_carries_city_and_innings_context() {
        let query = TeamStatsQuery {
            team: "Mumbai Indians".into(),
            city: Some("Mumbai".into()),
            innings: Some(InningsContext::Chasing),
            year_from: Some(2020),
            ..Default::default()
        };
        let pairs = query.query_pairs();
        assert_eq!(pairs[0], ("team", "Mumbai Indians".to_string()));
        assert!(pairs.contains(&("city", "Mumbai".to_string())));
        assert!(pairs.contains(&("innings", "chasing".to_string())));
        assert!(pairs.contains(&("year_from", "2020".to_string())));
        assert!(!pairs.iter().any(|(k, _)| *k == "opposition"));
    }

    #[test]
    fn matchup_query_pairs_in_order() {
        let query = MatchupQuery {
            batter: "rohit-sharma".into(),
            bowler: "kagiso-rabada".into(),
            events: vec!["IPL".into()],
        };
        let pairs = query.query_pairs();
        assert_eq!(pairs[0], ("batter", "rohit-sharma".to_string()));
        assert_eq!(pairs[1], ("bowler", "kagiso-rabada".to_string()));
        assert_eq!(pairs[2], ("events", "IPL".to_string()));
    }
}
