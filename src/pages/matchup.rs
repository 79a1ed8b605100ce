//! Batter-vs-bowler matchup page: two selectors, tournament filters, an
//! aggregate stat grid and the shot distribution, with a distinct "these
//! two never faced each other" state.

use crate::components::{PlayerCombobox, StatCard, ToggleChip};
use crate::config::TOURNAMENTS;
use crate::hooks::use_players;
use intentmeter::api::{self, MatchupOutcome, MatchupQuery};
use intentmeter::metrics::{format_count, format_number, format_pct};
use intentmeter::models::MatchupResult;
use intentmeter::selector::find_by_key;
use yew::prelude::*;

fn aggregate_cards(result: &MatchupResult) -> Vec<(&'static str, String)> {
    vec![
        ("Innings", format_count(result.innings)),
        ("Balls Faced", format_count(result.balls_faced)),
        ("Runs", format_count(result.runs)),
        ("Dismissals", format_count(result.dismissals)),
        ("Average", format_number(result.batting_avg, 1)),
        ("Strike Rate", format_number(result.batter_sr, 1)),
        ("Dot Ball %", format_pct(result.dot_ball_pct)),
        ("Boundary %", format_pct(result.boundary_pct)),
    ]
}

fn shot_distribution(result: &MatchupResult) -> Vec<(&'static str, Option<u32>, bool)> {
    vec![
        ("Dots", result.dot_balls, false),
        ("1s", result.ones, false),
        ("2s", result.twos, false),
        ("3s", result.threes, false),
        ("4s", result.fours, true),
        ("5s", result.fives, false),
        ("6s", result.sixes, true),
    ]
}

#[function_component(MatchupPage)]
pub fn matchup_page() -> Html {
    let players = use_players();

    let batter = use_state(|| None::<String>);
    let bowler = use_state(|| None::<String>);
    let events = use_state(|| TOURNAMENTS.iter().map(|t| t.to_string()).collect::<Vec<_>>());

    let outcome = use_state(|| None::<MatchupOutcome>);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let display_name = |key: &Option<String>| -> String {
        key.as_deref()
            .map(|k| {
                find_by_key(&players.players, k)
                    .map(|p| p.display_name.clone())
                    .unwrap_or_else(|| k.to_string())
            })
            .unwrap_or_default()
    };
    let batter_name = display_name(&batter);
    let bowler_name = display_name(&bowler);

    let can_submit =
        batter.is_some() && bowler.is_some() && !events.is_empty() && !*loading;

    let select_batter = {
        let batter = batter.clone();
        let outcome = outcome.clone();
        Callback::from(move |key: Option<String>| {
            batter.set(key);
            outcome.set(None);
        })
    };
    let select_bowler = {
        let bowler = bowler.clone();
        let outcome = outcome.clone();
        Callback::from(move |key: Option<String>| {
            bowler.set(key);
            outcome.set(None);
        })
    };

    let on_submit = {
        let batter = batter.clone();
        let bowler = bowler.clone();
        let events = events.clone();
        let outcome = outcome.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (Some(batter_key), Some(bowler_key)) = ((*batter).clone(), (*bowler).clone())
            else {
                return;
            };
            if events.is_empty() || *loading {
                return;
            }
            loading.set(true);
            outcome.set(None);
            error.set(None);

            let query = MatchupQuery {
                batter: batter_key,
                bowler: bowler_key,
                events: (*events).clone(),
            };
            let outcome = outcome.clone();
            let loading = loading.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_matchup(&query).await {
                    Ok(data) => outcome.set(Some(data)),
                    Err(err) => {
                        log::warn!("matchup fetch failed: {err}");
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="page page-medium">
            <div class="page-header">
                <h1>{ "Matchup Analysis" }</h1>
                <p>{ "Select a batter, a bowler and the competitions you want included, then hit Analyse." }</p>
            </div>

            <form onsubmit={on_submit}>
                <div class="card controls-card">
                    if let Some(err) = &players.error {
                        <p class="inline-error">
                            { format!("Could not load players from backend ({err}). Make sure the API server is running on port 8000.") }
                        </p>
                    }

                    <div class="selector-grid">
                        <div>
                            <label class="field-label label-p1">{ "Batter" }</label>
                            <PlayerCombobox
                                players={players.players.clone()}
                                value={(*batter).clone()}
                                on_change={select_batter}
                                placeholder="Search batter…"
                                loading={players.loading}
                            />
                        </div>
                        <div>
                            <label class="field-label label-p2">{ "Bowler" }</label>
                            <PlayerCombobox
                                players={players.players.clone()}
                                value={(*bowler).clone()}
                                on_change={select_bowler}
                                placeholder="Search bowler…"
                                loading={players.loading}
                            />
                        </div>
                    </div>

                    <div>
                        <label class="field-label">{ "Include Tournaments" }</label>
                        <div class="chip-row">
                            { for TOURNAMENTS.iter().map(|&name| {
                                let active = events.iter().any(|e| e == name);
                                let onclick = {
                                    let events = events.clone();
                                    let name = name.to_string();
                                    Callback::from(move |_: MouseEvent| {
                                        let mut next = (*events).clone();
                                        if let Some(pos) = next.iter().position(|e| *e == name) {
                                            next.remove(pos);
                                        } else {
                                            next.push(name.clone());
                                        }
                                        events.set(next);
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

                    <div class="controls-actions">
                        <button type="submit" class="button-primary" disabled={!can_submit}>
                            { if *loading { "Analysing…" } else { "Analyse Matchup" } }
                        </button>
                        if batter.is_some() && bowler.is_some() {
                            <span class="pairing-hint">
                                <span class="name-p1">{ &batter_name }</span>
                                <span class="result-vs">{ "vs" }</span>
                                <span class="name-p2">{ &bowler_name }</span>
                            </span>
                        }
                    </div>
                </div>
            </form>

            if let Some(err) = &*error {
                <div class="card error-card">{ format!("Failed to fetch matchup data: {err}") }</div>
            }

            { match &*outcome {
                Some(MatchupOutcome::NoData) => html! {
                    <div class="empty-card">
                        <p class="empty-title">{ "No matchup data found" }</p>
                        <p class="empty-hint">{ "These two players may not have faced each other in the database." }</p>
                    </div>
                },
                Some(MatchupOutcome::Found(result)) => html! {
                    <>
                        <div class="card result-header-card">
                            <div>
                                <h2>
                                    <span class="name-p1">{ &batter_name }</span>
                                    <span class="result-vs">{ "vs" }</span>
                                    <span class="name-p2">{ &bowler_name }</span>
                                </h2>
                                <div class="chip-row">
                                    { for events.iter().map(|event| html! {
                                        <span key={event.clone()} class="result-tag">{ event }</span>
                                    }) }
                                </div>
                            </div>
                            <div class="innings-count">
                                <strong>{ format_count(result.innings) }</strong>
                                { " innings" }
                            </div>
                        </div>

                        <div class="stat-grid stat-grid-4">
                            { for aggregate_cards(result).into_iter().map(|(label, value)| html! {
                                <StatCard
                                    key={label}
                                    label={AttrValue::Static(label)}
                                    value={AttrValue::from(value)}
                                />
                            }) }
                        </div>

                        if result.fours.is_some() || result.sixes.is_some() {
                            <div class="card">
                                <div class="card-header"><h2>{ "Shot Distribution" }</h2></div>
                                <div class="shot-grid">
                                    { for shot_distribution(result).into_iter().map(|(label, value, accent)| html! {
                                        <div key={label} class="shot-cell">
                                            <div class={classes!("shot-value", accent.then_some("is-accent"))}>
                                                { format_count(value) }
                                            </div>
                                            <div class="shot-label">{ label }</div>
                                        </div>
                                    }) }
                                </div>
                            </div>
                        }
                    </>
                },
                None => html! {},
            } }
        </div>
    }
}
