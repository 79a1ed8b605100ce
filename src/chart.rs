//! JavaScript interop for Chart.js visualization.
//! Provides Rust bindings to chart helper functions defined in chart_helpers.js.

use intentmeter::metrics::MetricRow;
use intentmeter::models::{Mode, SeasonRow};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/chart_helpers.js")]
extern "C" {
    #[wasm_bindgen(js_name = renderCompareRadar)]
    fn render_compare_radar_js(payload: JsValue);

    #[wasm_bindgen(js_name = renderSeasonBars)]
    fn render_season_bars_js(payload: JsValue);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RadarPayload<'a> {
    labels: Vec<&'a str>,
    p1: Vec<u8>,
    p2: Vec<u8>,
    p1_ticks: Vec<&'a str>,
    p2_ticks: Vec<&'a str>,
    p1_name: &'a str,
    p2_name: &'a str,
}

/// Draw (or redraw) the comparison radar on the `compareRadar` canvas.
/// Values arrive already normalized to the chart's fixed 0–100 scale; the
/// tick strings carry the raw values for display on the axis labels.
pub fn render_compare_radar(rows: &[MetricRow], p1_name: &str, p2_name: &str) {
    let payload = RadarPayload {
        labels: rows.iter().map(|r| r.metric).collect(),
        p1: rows.iter().map(|r| r.normalized_a).collect(),
        p2: rows.iter().map(|r| r.normalized_b).collect(),
        p1_ticks: rows.iter().map(|r| r.label_a.as_str()).collect(),
        p2_ticks: rows.iter().map(|r| r.label_b.as_str()).collect(),
        p1_name,
        p2_name,
    };
    match serde_wasm_bindgen::to_value(&payload) {
        Ok(value) => render_compare_radar_js(value),
        Err(err) => log::warn!("radar payload serialization failed: {err}"),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SeasonPayload<'a> {
    labels: Vec<&'a str>,
    values: Vec<u32>,
    series_label: &'a str,
}

/// Draw the per-season bar chart on the `seasonChart` canvas: runs per
/// season for batting, wickets per season for bowling.
pub fn render_season_bars(rows: &[SeasonRow], mode: Mode) {
    let (series_label, read): (&str, fn(&SeasonRow) -> Option<u32>) = match mode {
        Mode::Batting => ("Runs", |r| r.runs),
        Mode::Bowling => ("Wickets", |r| r.wickets),
    };
    let payload = SeasonPayload {
        labels: rows.iter().map(|r| r.year.as_str()).collect(),
        values: rows.iter().map(|r| read(r).unwrap_or(0)).collect(),
        series_label,
    };
    match serde_wasm_bindgen::to_value(&payload) {
        Ok(value) => render_season_bars_js(value),
        Err(err) => log::warn!("season payload serialization failed: {err}"),
    }
}
