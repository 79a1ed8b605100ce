//! Normalization and table building for the comparison views.
//!
//! The radar chart wants every metric on a common 0–100 scale where
//! "further from center" always means "better", so each displayed metric
//! carries a fixed normalization window and an invert flag for
//! lower-is-better stats (economy, dot-ball percentage for a batter's
//! bowling opposite, bowling average). The head-to-head table keeps the raw,
//! sign-preserving values and only tags directionality for highlighting.

use crate::models::{ComparisonResult, DisciplineStats, Mode, PhaseKey, StatBag};

/// Placeholder shown for a missing or non-numeric statistic.
pub const MISSING: &str = "—";

/// Clamp `value` to `[min, max]`, rescale to 0–100, round to the nearest
/// integer, then flip for lower-is-better metrics. Missing or non-finite
/// input yields 0 — a defined fallback, not "worst legitimate value".
pub fn normalize(value: Option<f64>, min: f64, max: f64, invert: bool) -> u8 {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return 0;
    };
    if max <= min {
        return 0;
    }
    let pct = ((v.clamp(min, max) - min) / (max - min) * 100.0).round() as u8;
    if invert {
        100 - pct
    } else {
        pct
    }
}

/// Fixed-decimal formatting with a uniform placeholder for missing values.
pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{v:.decimals$}"),
        None => MISSING.to_string(),
    }
}

/// Integer counts: no decimals, same placeholder.
pub fn format_count(value: Option<u32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => MISSING.to_string(),
    }
}

/// Percentage display, 1 decimal. The suffix is only attached when there is
/// a value to attach it to.
pub fn format_pct(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{v:.1}%"),
        None => MISSING.to_string(),
    }
}

/// Which comparison side is ahead on one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advantage {
    SideA,
    SideB,
    Neither,
}

/// A side is better iff both raw values are present, unequal, and
/// directionally ahead. Ties and missing values highlight nobody.
pub fn advantage(a: Option<f64>, b: Option<f64>, lower_is_better: bool) -> Advantage {
    match (a, b) {
        (Some(x), Some(y)) if x != y => {
            let a_wins = if lower_is_better { x < y } else { x > y };
            if a_wins {
                Advantage::SideA
            } else {
                Advantage::SideB
            }
        }
        _ => Advantage::Neither,
    }
}

/// Static configuration of one radar metric: its normalization window,
/// polarity, and display formatting. Fixed at build time, never derived
/// from the data.
pub struct MetricSpec {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub invert: bool,
    pub decimals: usize,
    pub percent: bool,
    pub read: fn(&StatBag) -> Option<f64>,
}

impl MetricSpec {
    fn format(&self, value: Option<f64>) -> String {
        if self.percent {
            format_pct(value)
        } else {
            format_number(value, self.decimals)
        }
    }
}

const BATTING_RADAR: &[MetricSpec] = &[
    MetricSpec { name: "Average",     min: 0.0,  max: 70.0,  invert: false, decimals: 1, percent: false, read: |s| s.avg },
    MetricSpec { name: "Strike Rate", min: 80.0, max: 220.0, invert: false, decimals: 1, percent: false, read: |s| s.sr },
    MetricSpec { name: "Boundary %",  min: 20.0, max: 70.0,  invert: false, decimals: 1, percent: true,  read: |s| s.boundary_pct },
    MetricSpec { name: "Dot Ball %",  min: 20.0, max: 60.0,  invert: true,  decimals: 1, percent: true,  read: |s| s.dot_ball_pct },
    MetricSpec { name: "Balls/Bdy",   min: 4.0,  max: 15.0,  invert: true,  decimals: 1, percent: false, read: |s| s.balls_per_bdy },
];

const BOWLING_RADAR: &[MetricSpec] = &[
    MetricSpec { name: "Economy",     min: 5.0,  max: 13.0, invert: true,  decimals: 2, percent: false, read: |s| s.economy },
    MetricSpec { name: "Average",     min: 10.0, max: 55.0, invert: true,  decimals: 1, percent: false, read: |s| s.avg },
    MetricSpec { name: "Strike Rate", min: 8.0,  max: 40.0, invert: true,  decimals: 1, percent: false, read: |s| s.bowling_sr },
    MetricSpec { name: "Dot Ball %",  min: 20.0, max: 65.0, invert: false, decimals: 1, percent: true,  read: |s| s.dot_ball_pct },
    MetricSpec { name: "Bdy Given %", min: 5.0,  max: 25.0, invert: true,  decimals: 1, percent: true,  read: |s| s.boundary_given_pct },
    MetricSpec { name: "Wkts/Inn",    min: 0.0,  max: 3.0,  invert: false, decimals: 2, percent: false, read: |s| s.wkts_per_innings },
];

/// Normalization window of the derived batting "Phase SR" metric.
const PHASE_SR_SPAN: (f64, f64) = (80.0, 200.0);

/// One radar row: both subjects' raw values, their normalized 0–100
/// positions, and pre-formatted labels for the axis ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub metric: &'static str,
    pub raw_a: Option<f64>,
    pub raw_b: Option<f64>,
    pub normalized_a: u8,
    pub normalized_b: u8,
    pub label_a: String,
    pub label_b: String,
}

/// Mean of the phase-level values that are present, falling back to the
/// subject's own overall value when no phase has data.
fn phase_mean(side: &DisciplineStats, read: fn(&StatBag) -> Option<f64>) -> Option<f64> {
    let vals: Vec<f64> = PhaseKey::ALL
        .iter()
        .filter_map(|&k| read(side.phases.get(k)))
        .collect();
    if vals.is_empty() {
        read(&side.overall)
    } else {
        Some(vals.iter().sum::<f64>() / vals.len() as f64)
    }
}

/// Build the radar series for the requested mode: one row per configured
/// metric in fixed order, plus the derived "Phase SR" row for batting.
pub fn build_radar_series(result: &ComparisonResult, mode: Mode) -> Vec<MetricRow> {
    let a = result.player1.discipline(mode);
    let b = result.player2.discipline(mode);
    let specs = match mode {
        Mode::Batting => BATTING_RADAR,
        Mode::Bowling => BOWLING_RADAR,
    };

    let mut rows: Vec<MetricRow> = specs
        .iter()
        .map(|spec| {
            let raw_a = (spec.read)(&a.overall);
            let raw_b = (spec.read)(&b.overall);
            MetricRow {
                metric: spec.name,
                raw_a,
                raw_b,
                normalized_a: normalize(raw_a, spec.min, spec.max, spec.invert),
                normalized_b: normalize(raw_b, spec.min, spec.max, spec.invert),
                label_a: spec.format(raw_a),
                label_b: spec.format(raw_b),
            }
        })
        .collect();

    if mode == Mode::Batting {
        let (min, max) = PHASE_SR_SPAN;
        let raw_a = phase_mean(a, |s| s.sr);
        let raw_b = phase_mean(b, |s| s.sr);
        rows.push(MetricRow {
            metric: "Phase SR",
            raw_a,
            raw_b,
            normalized_a: normalize(raw_a, min, max, false),
            normalized_b: normalize(raw_b, min, max, false),
            label_a: format_number(raw_a, 1),
            label_b: format_number(raw_b, 1),
        });
    }

    rows
}

/// One non-divider row of the head-to-head table or a phase card.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub metric: String,
    pub raw_a: Option<f64>,
    pub raw_b: Option<f64>,
    pub text_a: String,
    pub text_b: String,
    pub lower_is_better: bool,
}

impl StatRow {
    fn new(
        metric: impl Into<String>,
        raw_a: Option<f64>,
        raw_b: Option<f64>,
        decimals: usize,
        percent: bool,
        lower_is_better: bool,
    ) -> Self {
        let fmt = |v| {
            if percent {
                format_pct(v)
            } else {
                format_number(v, decimals)
            }
        };
        StatRow {
            metric: metric.into(),
            raw_a,
            raw_b,
            text_a: fmt(raw_a),
            text_b: fmt(raw_b),
            lower_is_better,
        }
    }

    pub fn advantage(&self) -> Advantage {
        advantage(self.raw_a, self.raw_b, self.lower_is_better)
    }
}

/// A row of the head-to-head table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Divider(String),
    Stat(StatRow),
}

/// Assemble the head-to-head table for the requested mode. When two or more
/// phase keys are active, a divider and one row per phase follow the overall
/// rows; a single active phase adds nothing (its breakdown *is* the overall
/// view the user filtered to).
pub fn build_comparison_table(
    result: &ComparisonResult,
    mode: Mode,
    active_phases: &[PhaseKey],
) -> Vec<TableRow> {
    let a = result.player1.discipline(mode);
    let b = result.player2.discipline(mode);
    let o1 = &a.overall;
    let o2 = &b.overall;

    let mut rows: Vec<TableRow> = match mode {
        Mode::Batting => vec![
            TableRow::Stat(StatRow::new("Average", o1.avg, o2.avg, 1, false, false)),
            TableRow::Stat(StatRow::new("Strike Rate", o1.sr, o2.sr, 1, false, false)),
            TableRow::Stat(StatRow::new("Boundary %", o1.boundary_pct, o2.boundary_pct, 1, true, false)),
            TableRow::Stat(StatRow::new("Dot Ball %", o1.dot_ball_pct, o2.dot_ball_pct, 1, true, true)),
            TableRow::Stat(StatRow::new("Balls / Boundary", o1.balls_per_bdy, o2.balls_per_bdy, 1, false, true)),
        ],
        Mode::Bowling => vec![
            TableRow::Stat(StatRow::new("Economy", o1.economy, o2.economy, 2, false, true)),
            TableRow::Stat(StatRow::new("Average", o1.avg, o2.avg, 1, false, true)),
            TableRow::Stat(StatRow::new("Strike Rate", o1.bowling_sr, o2.bowling_sr, 1, false, true)),
            TableRow::Stat(StatRow::new("Dot Ball %", o1.dot_ball_pct, o2.dot_ball_pct, 1, true, false)),
            TableRow::Stat(StatRow::new("Boundary Given %", o1.boundary_given_pct, o2.boundary_given_pct, 1, true, true)),
            TableRow::Stat(StatRow::new("Wkts / Innings", o1.wkts_per_innings, o2.wkts_per_innings, 2, false, false)),
        ],
    };

    if active_phases.len() >= 2 {
        rows.push(TableRow::Divider("Phase Breakdown".to_string()));
        for &phase in active_phases {
            let p1 = a.phases.get(phase);
            let p2 = b.phases.get(phase);
            let row = match mode {
                Mode::Batting => StatRow::new(
                    format!("{} SR", phase.label()),
                    p1.sr,
                    p2.sr,
                    1,
                    false,
                    false,
                ),
                Mode::Bowling => StatRow::new(
                    format!("{} Economy", phase.label()),
                    p1.economy,
                    p2.economy,
                    2,
                    false,
                    true,
                ),
            };
            rows.push(TableRow::Stat(row));
        }
    }

    rows
}

/// Data behind one phase breakdown card.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseCardData {
    pub phase: PhaseKey,
    pub stats: Vec<StatRow>,
}

/// Per-phase card rows: the three most telling stats of each discipline.
pub fn build_phase_cards(
    result: &ComparisonResult,
    mode: Mode,
    active_phases: &[PhaseKey],
) -> Vec<PhaseCardData> {
    let a = result.player1.discipline(mode);
    let b = result.player2.discipline(mode);

    active_phases
        .iter()
        .map(|&phase| {
            let p1 = a.phases.get(phase);
            let p2 = b.phases.get(phase);
            let stats = match mode {
                Mode::Batting => vec![
                    StatRow::new("Strike Rate", p1.sr, p2.sr, 1, false, false),
                    StatRow::new("Boundary %", p1.boundary_pct, p2.boundary_pct, 1, true, false),
                    StatRow::new("Dot Ball %", p1.dot_ball_pct, p2.dot_ball_pct, 1, true, true),
                ],
                Mode::Bowling => vec![
                    StatRow::new("Economy", p1.economy, p2.economy, 2, false, true),
                    StatRow::new("Dot Ball %", p1.dot_ball_pct, p2.dot_ball_pct, 1, true, false),
                    StatRow::new("Wkts/Inn", p1.wkts_per_innings, p2.wkts_per_innings, 2, false, false),
                ],
            };
            PhaseCardData { phase, stats }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SubjectStats, PhaseStats};

    fn batting_subject(overall: StatBag, phases: PhaseStats) -> SubjectStats {
        SubjectStats {
            batting: DisciplineStats { overall, phases },
            ..Default::default()
        }
    }

    #[test]
    fn normalize_is_monotonic_within_window() {
        let mut last = 0;
        for step in 0..=100 {
            let v = 0.0 + step as f64 * 0.7;
            let n = normalize(Some(v), 0.0, 70.0, false);
            assert!(n >= last, "{v} dropped from {last} to {n}");
            last = n;
        }
    }

    #[test]
    fn inverted_is_complement_of_plain() {
        for step in 0..=40 {
            let v = 18.0 + step as f64;
            let plain = normalize(Some(v), 20.0, 60.0, false);
            let inv = normalize(Some(v), 20.0, 60.0, true);
            assert_eq!(inv, 100 - plain);
        }
    }

    #[test]
    fn missing_and_non_finite_normalize_to_zero() {
        assert_eq!(normalize(None, 0.0, 100.0, false), 0);
        assert_eq!(normalize(Some(f64::NAN), 0.0, 100.0, false), 0);
        assert_eq!(normalize(Some(f64::INFINITY), 0.0, 100.0, true), 0);
    }

    #[test]
    fn out_of_range_values_clamp_into_bounds() {
        assert_eq!(normalize(Some(-50.0), 0.0, 70.0, false), 0);
        assert_eq!(normalize(Some(500.0), 0.0, 70.0, false), 100);
        assert_eq!(normalize(Some(500.0), 0.0, 70.0, true), 0);
        for v in [-10.0, 0.0, 33.3, 70.0, 1e9] {
            let n = normalize(Some(v), 0.0, 70.0, false);
            assert!(n <= 100);
        }
    }

    #[test]
    fn format_number_uses_placeholder_and_fixed_decimals() {
        assert_eq!(format_number(None, 1), MISSING);
        assert_eq!(format_number(Some(f64::NAN), 1), MISSING);
        assert_eq!(format_number(Some(45.25), 1), "45.2");
        assert_eq!(format_number(Some(8.6), 2), "8.60");
        assert_eq!(format_pct(Some(35.0)), "35.0%");
        assert_eq!(format_pct(None), MISSING);
        assert_eq!(format_count(None), MISSING);
        assert_eq!(format_count(Some(237)), "237");
    }

    #[test]
    fn advantage_follows_polarity_and_ignores_ties() {
        assert_eq!(advantage(Some(45.2), Some(30.1), false), Advantage::SideA);
        assert_eq!(advantage(Some(135.0), Some(150.0), false), Advantage::SideB);
        assert_eq!(advantage(Some(7.2), Some(8.9), true), Advantage::SideA);
        assert_eq!(advantage(Some(35.0), Some(35.0), true), Advantage::Neither);
        assert_eq!(advantage(None, Some(1.0), false), Advantage::Neither);
        assert_eq!(advantage(Some(1.0), None, true), Advantage::Neither);
    }

    #[test]
    fn single_active_phase_adds_no_divider_or_phase_rows() {
        let result = ComparisonResult::default();
        let rows = build_comparison_table(&result, Mode::Batting, &[PhaseKey::Powerplay]);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| matches!(r, TableRow::Stat(_))));
    }

    #[test]
    fn two_active_phases_append_divider_then_two_rows() {
        let result = ComparisonResult::default();
        let rows =
            build_comparison_table(&result, Mode::Bowling, &[PhaseKey::Powerplay, PhaseKey::Death]);
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[6], TableRow::Divider("Phase Breakdown".to_string()));
        match (&rows[7], &rows[8]) {
            (TableRow::Stat(pp), TableRow::Stat(death)) => {
                assert_eq!(pp.metric, "Powerplay Economy");
                assert!(pp.lower_is_better);
                assert_eq!(death.metric, "Death Overs Economy");
            }
            other => panic!("expected two phase rows, got {other:?}"),
        }
    }

    #[test]
    fn head_to_head_highlights_follow_metric_polarity() {
        let result = ComparisonResult {
            player1: batting_subject(
                StatBag { avg: Some(45.2), sr: Some(135.0), ..Default::default() },
                PhaseStats::default(),
            ),
            player2: batting_subject(
                StatBag { avg: Some(30.1), sr: Some(150.0), ..Default::default() },
                PhaseStats::default(),
            ),
        };
        let rows = build_comparison_table(&result, Mode::Batting, &[]);
        let find = |name: &str| {
            rows.iter()
                .find_map(|r| match r {
                    TableRow::Stat(s) if s.metric == name => Some(s),
                    _ => None,
                })
                .expect("row present")
        };
        assert_eq!(find("Average").advantage(), Advantage::SideA);
        assert_eq!(find("Strike Rate").advantage(), Advantage::SideB);
    }

    #[test]
    fn equal_values_highlight_neither_side() {
        let result = ComparisonResult {
            player1: batting_subject(
                StatBag { dot_ball_pct: Some(35.0), ..Default::default() },
                PhaseStats::default(),
            ),
            player2: batting_subject(
                StatBag { dot_ball_pct: Some(35.0), ..Default::default() },
                PhaseStats::default(),
            ),
        };
        let rows = build_comparison_table(&result, Mode::Batting, &[]);
        let dot = rows
            .iter()
            .find_map(|r| match r {
                TableRow::Stat(s) if s.metric == "Dot Ball %" => Some(s),
                _ => None,
            })
            .expect("row present");
        assert_eq!(dot.advantage(), Advantage::Neither);
    }

    #[test]
    fn radar_series_has_fixed_order_and_derived_phase_sr() {
        let phases = PhaseStats {
            pp: StatBag { sr: Some(120.0), ..Default::default() },
            middle: StatBag { sr: Some(130.0), ..Default::default() },
            death: StatBag { sr: Some(170.0), ..Default::default() },
        };
        let result = ComparisonResult {
            player1: batting_subject(
                StatBag { sr: Some(135.0), ..Default::default() },
                phases,
            ),
            player2: batting_subject(
                StatBag { sr: Some(150.0), ..Default::default() },
                PhaseStats::default(),
            ),
        };
        let rows = build_radar_series(&result, Mode::Batting);
        let names: Vec<&str> = rows.iter().map(|r| r.metric).collect();
        assert_eq!(
            names,
            ["Average", "Strike Rate", "Boundary %", "Dot Ball %", "Balls/Bdy", "Phase SR"]
        );
        let phase_sr = rows.last().expect("phase sr row");
        assert_eq!(phase_sr.raw_a, Some(140.0));
        // No phase data on side B: falls back to B's own overall rate.
        assert_eq!(phase_sr.raw_b, Some(150.0));
    }

    #[test]
    fn bowling_radar_inverts_lower_is_better_metrics() {
        let result = ComparisonResult {
            player1: SubjectStats {
                bowling: DisciplineStats {
                    overall: StatBag { economy: Some(5.0), ..Default::default() },
                    ..Default::default()
                },
                ..Default::default()
            },
            player2: SubjectStats {
                bowling: DisciplineStats {
                    overall: StatBag { economy: Some(13.0), ..Default::default() },
                    ..Default::default()
                },
                ..Default::default()
            },
        };
        let rows = build_radar_series(&result, Mode::Bowling);
        assert_eq!(rows.len(), 6);
        // Best economy lands on the rim, worst at the center.
        assert_eq!(rows[0].normalized_a, 100);
        assert_eq!(rows[0].normalized_b, 0);
        assert_eq!(rows[0].label_a, "5.00");
    }

    #[test]
    fn phase_cards_cover_requested_phases_only() {
        let result = ComparisonResult::default();
        let cards = build_phase_cards(&result, Mode::Batting, &[PhaseKey::Middle]);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].phase, PhaseKey::Middle);
        assert_eq!(cards[0].stats.len(), 3);
        assert_eq!(cards[0].stats[0].text_a, MISSING);
    }
}
