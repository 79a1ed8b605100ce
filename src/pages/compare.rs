//! Player comparison page: two selectors, competition and phase filters, a
//! batting/bowling toggle, and the radar + head-to-head table + phase cards
//! built from one comparison fetch.

use crate::chart;
use crate::components::{CompareTable, PhaseCard, PlayerCombobox, SegmentedControl, ToggleChip};
use crate::config::TOURNAMENTS;
use crate::hooks::use_players;
use intentmeter::api::{self, ComparisonQuery};
use intentmeter::metrics::{build_comparison_table, build_phase_cards, build_radar_series};
use intentmeter::models::{ComparisonResult, Mode, PhaseKey};
use intentmeter::selector::find_by_key;
use std::rc::Rc;
use yew::prelude::*;

fn mode_options() -> Vec<(AttrValue, AttrValue)> {
    vec![
        (AttrValue::Static("batting"), AttrValue::Static("Batting")),
        (AttrValue::Static("bowling"), AttrValue::Static("Bowling")),
    ]
}

fn mode_from_key(key: &str) -> Mode {
    if key == "bowling" {
        Mode::Bowling
    } else {
        Mode::Batting
    }
}

#[function_component(ComparePage)]
pub fn compare_page() -> Html {
    let players = use_players();

    let p1 = use_state(|| None::<String>);
    let p2 = use_state(|| None::<String>);
    let events = use_state(|| TOURNAMENTS.iter().map(|t| t.to_string()).collect::<Vec<_>>());
    let phases = use_state(|| PhaseKey::ALL.to_vec());
    let mode = use_state(|| Mode::Batting);

    let result = use_state(|| None::<Rc<ComparisonResult>>);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Keep phases in canonical order regardless of toggle order.
    let phases_sorted: Vec<PhaseKey> = PhaseKey::ALL
        .into_iter()
        .filter(|k| phases.contains(k))
        .collect();

    let p1_name = p1
        .as_deref()
        .and_then(|k| find_by_key(&players.players, k))
        .map(|p| p.display_name.clone())
        .unwrap_or_else(|| "Player 1".to_string());
    let p2_name = p2
        .as_deref()
        .and_then(|k| find_by_key(&players.players, k))
        .map(|p| p.display_name.clone())
        .unwrap_or_else(|| "Player 2".to_string());

    let same_player = p1.is_some() && *p1 == *p2;
    let can_analyse =
        p1.is_some() && p2.is_some() && !same_player && !events.is_empty() && !*loading;

    let select_p1 = {
        let p1 = p1.clone();
        let result = result.clone();
        Callback::from(move |key: Option<String>| {
            p1.set(key);
            result.set(None);
        })
    };
    let select_p2 = {
        let p2 = p2.clone();
        let result = result.clone();
        Callback::from(move |key: Option<String>| {
            p2.set(key);
            result.set(None);
        })
    };

    let set_mode = {
        let mode = mode.clone();
        Callback::from(move |key: String| mode.set(mode_from_key(&key)))
    };

    let on_analyse = {
        let p1 = p1.clone();
        let p2 = p2.clone();
        let events = events.clone();
        let result = result.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let (Some(player1), Some(player2)) = ((*p1).clone(), (*p2).clone()) else {
                return;
            };
            if player1 == player2 || events.is_empty() || *loading {
                return;
            }
            loading.set(true);
            error.set(None);
            result.set(None);

            let query = ComparisonQuery {
                player1,
                player2,
                events: (*events).clone(),
            };
            let result = result.clone();
            let loading = loading.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_comparison(&query).await {
                    Ok(data) => result.set(Some(Rc::new(data))),
                    Err(err) => {
                        log::warn!("comparison fetch failed: {err}");
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    // Redraw the radar whenever the result, mode or names change. The canvas
    // only exists while a result is shown, and effects run after render.
    use_effect_with(
        ((*result).clone(), *mode, p1_name.clone(), p2_name.clone()),
        |(result, mode, p1_name, p2_name)| {
            if let Some(data) = result {
                let rows = build_radar_series(data, *mode);
                chart::render_compare_radar(&rows, p1_name, p2_name);
            }
        },
    );

    let table_rows = result
        .as_ref()
        .map(|data| build_comparison_table(data, *mode, &phases_sorted))
        .unwrap_or_default();
    let phase_cards = result
        .as_ref()
        .map(|data| build_phase_cards(data, *mode, &phases_sorted))
        .unwrap_or_default();

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{ "Player Comparison" }</h1>
                <p>{ "Compare two players head-to-head across batting and bowling metrics." }</p>
            </div>

            <div class="card controls-card">
                if let Some(err) = &players.error {
                    <p class="inline-error">{ format!("Failed to load players: {err}") }</p>
                }
                <div class="selector-grid">
                    <div>
                        <label class="field-label label-p1">{ "Player 1" }</label>
                        <PlayerCombobox
                            players={players.players.clone()}
                            value={(*p1).clone()}
                            on_change={select_p1}
                            placeholder="Search player 1…"
                            loading={players.loading}
                        />
                    </div>
                    <div>
                        <label class="field-label label-p2">{ "Player 2" }</label>
                        <PlayerCombobox
                            players={players.players.clone()}
                            value={(*p2).clone()}
                            on_change={select_p2}
                            placeholder="Search player 2…"
                            loading={players.loading}
                        />
                    </div>
                </div>
                if same_player {
                    <p class="inline-error">{ "Please select two different players." }</p>
                }

                <div>
                    <label class="field-label">{ "Include Tournaments" }</label>
                    <div class="chip-row">
                        { for TOURNAMENTS.iter().map(|&name| {
                            let active = events.iter().any(|e| e == name);
                            let onclick = {
                                let events = events.clone();
                                let result = result.clone();
                                let name = name.to_string();
                                Callback::from(move |_: MouseEvent| {
                                    let mut next = (*events).clone();
                                    if let Some(pos) = next.iter().position(|e| *e == name) {
                                        next.remove(pos);
                                    } else {
                                        next.push(name.clone());
                                    }
                                    events.set(next);
                                    result.set(None);
                                })
                            };
                            html! {
                                <ToggleChip key={name} label={AttrValue::Static(name)} {active} {onclick} />
                            }
                        }) }
                    </div>
                    if events.is_empty() {
                        <p class="inline-error">{ "Select at least one tournament." }</p>
                    }
                </div>

                <div>
                    <label class="field-label">{ "Include Phases" }</label>
                    <div class="chip-row">
                        { for PhaseKey::ALL.iter().map(|&phase| {
                            let active = phases.contains(&phase);
                            let onclick = {
                                let phases = phases.clone();
                                Callback::from(move |_: MouseEvent| {
                                    let mut next = (*phases).clone();
                                    if let Some(pos) = next.iter().position(|&k| k == phase) {
                                        next.remove(pos);
                                    } else {
                                        next.push(phase);
                                    }
                                    phases.set(next);
                                })
                            };
                            html! {
                                <ToggleChip
                                    key={phase.key()}
                                    label={AttrValue::Static(phase.label())}
                                    {active}
                                    {onclick}
                                />
                            }
                        }) }
                    </div>
                </div>

                <div class="controls-actions">
                    <SegmentedControl
                        options={mode_options()}
                        value={AttrValue::from(mode.as_str())}
                        on_change={set_mode.clone()}
                    />
                    <button
                        type="button"
                        class="button-primary"
                        disabled={!can_analyse}
                        onclick={on_analyse}
                    >
                        { if *loading { "Analysing…" } else { "Analyse" } }
                    </button>
                </div>
            </div>

            if let Some(err) = &*error {
                <div class="card error-card">{ format!("Error: {err}") }</div>
            }

            if result.is_some() {
                <div class="result-header">
                    <span class="result-name name-p1">{ &p1_name }</span>
                    <span class="result-vs">{ "vs" }</span>
                    <span class="result-name name-p2">{ &p2_name }</span>
                    <span class="result-badge">{ mode.as_str() }</span>
                    { for events.iter().map(|event| html! {
                        <span key={event.clone()} class="result-tag">{ event }</span>
                    }) }
                    { for phases_sorted.iter().map(|phase| html! {
                        <span key={phase.key()} class="result-tag">{ phase.label() }</span>
                    }) }
                </div>

                <div class="result-mode-switch">
                    <SegmentedControl
                        options={mode_options()}
                        value={AttrValue::from(mode.as_str())}
                        on_change={set_mode}
                    />
                </div>

                <div class="card chart-card">
                    <div class="radar-legend">
                        <span class="legend-dot dot-p1" />
                        <span class="legend-name name-p1">{ &p1_name }</span>
                        <span class="legend-sep" />
                        <span class="legend-dot dot-p2" />
                        <span class="legend-name name-p2">{ &p2_name }</span>
                    </div>
                    <canvas id="compareRadar"></canvas>
                </div>

                <div class="card table-card">
                    <div class="card-header">
                        <h2>{ "Head-to-Head Stats" }</h2>
                    </div>
                    <CompareTable
                        rows={table_rows}
                        p1_name={AttrValue::from(p1_name.clone())}
                        p2_name={AttrValue::from(p2_name.clone())}
                    />
                </div>

                // A single selected phase adds nothing over the table above.
                if phases_sorted.len() >= 2 {
                    <h2 class="section-title">{ "Phase Breakdown" }</h2>
                    <div class="phase-grid">
                        { for phase_cards.into_iter().map(|card| {
                            let phase_key = card.phase.key();
                            html! {
                                <PhaseCard
                                    key={phase_key}
                                    {card}
                                    p1_name={AttrValue::from(p1_name.clone())}
                                    p2_name={AttrValue::from(p2_name.clone())}
                                />
                            }
                        }) }
                    </div>
                }
            } else {
                <div class="empty-card">
                    if *loading {
                        <p class="empty-title">{ "Analysing…" }</p>
                        <p class="empty-hint">{ "Fetching stats from the database." }</p>
                    } else {
                        <p class="empty-title">{ "Select two players and click Analyse" }</p>
                        <p class="empty-hint">
                            { if p1.is_none() && p2.is_none() {
                                "Choose a player in each slot above to get started."
                            } else if p1.is_none() {
                                "Select Player 1 to continue."
                            } else if p2.is_none() {
                                "Select Player 2 to continue."
                            } else if same_player {
                                "Please select two different players."
                            } else {
                                "Hit Analyse to generate the comparison."
                            } }
                        </p>
                    }
                </div>
            }
        </div>
    }
}
