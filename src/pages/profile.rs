//! Player profile page: metadata header, batting/bowling tabs, career stat
//! cards, style splits, and the per-season bar chart.

use crate::chart;
use crate::components::{SegmentedControl, StatCard};
use intentmeter::api;
use intentmeter::metrics::{format_count, format_number, format_pct};
use intentmeter::models::{Mode, ProfileDiscipline, ProfileResponse, StatBag};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    pub name: String,
}

fn initials(display_name: &str) -> String {
    display_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

fn batting_cards(stats: &StatBag) -> Vec<(&'static str, String, Option<&'static str>, bool)> {
    vec![
        ("Innings", format_count(stats.innings), Some("T20 career"), false),
        ("Runs", format_count(stats.runs), Some("Total runs"), true),
        ("Average", format_number(stats.avg, 1), Some("Batting avg"), false),
        ("Strike Rate", format_number(stats.sr, 1), Some("Career SR"), false),
        (
            "50s / 100s",
            format!("{} / {}", format_count(stats.fifties), format_count(stats.hundreds)),
            Some("Milestones"),
            false,
        ),
        ("Dot Ball %", format_pct(stats.dot_ball_pct), Some("Scoreless deliveries"), false),
    ]
}

fn bowling_cards(stats: &StatBag) -> Vec<(&'static str, String, Option<&'static str>, bool)> {
    vec![
        ("Innings", format_count(stats.innings), Some("T20 career"), false),
        ("Wickets", format_count(stats.wickets), Some("Career wickets"), true),
        ("Economy", format_number(stats.economy, 2), Some("Runs per over"), false),
        ("Average", format_number(stats.avg, 1), Some("Bowling avg"), false),
        ("Strike Rate", format_number(stats.bowling_sr, 1), Some("Balls per wicket"), false),
        ("Dot Ball %", format_pct(stats.dot_ball_pct), Some("Scoreless deliveries"), false),
    ]
}

fn split_block(title: &str, stats: &StatBag, mode: Mode) -> Html {
    let rows: Vec<(&'static str, String)> = match mode {
        Mode::Batting => vec![
            ("Strike Rate", format_number(stats.sr, 1)),
            ("Average", format_number(stats.avg, 1)),
            ("Dot Ball %", format_pct(stats.dot_ball_pct)),
        ],
        Mode::Bowling => vec![
            ("Economy", format_number(stats.economy, 2)),
            ("Wickets", format_count(stats.wickets)),
            ("Dot Ball %", format_pct(stats.dot_ball_pct)),
        ],
    };
    html! {
        <div class="split-block">
            <h3>{ title }</h3>
            { for rows.into_iter().map(|(label, value)| html! {
                <div key={label} class="split-row">
                    <span class="split-label">{ label }</span>
                    <span class="split-value">{ value }</span>
                </div>
            }) }
        </div>
    }
}

fn splits(discipline: &ProfileDiscipline, mode: Mode) -> Html {
    let pairs: Vec<(&'static str, &StatBag)> = match mode {
        Mode::Batting => [
            discipline.vs_pace.as_ref().map(|s| ("vs Pace", s)),
            discipline.vs_spin.as_ref().map(|s| ("vs Spin", s)),
        ]
        .into_iter()
        .flatten()
        .collect(),
        Mode::Bowling => [
            discipline.vs_left.as_ref().map(|s| ("vs Left-handers", s)),
            discipline.vs_right.as_ref().map(|s| ("vs Right-handers", s)),
        ]
        .into_iter()
        .flatten()
        .collect(),
    };
    if pairs.is_empty() {
        return html! {};
    }
    html! {
        <div class="card">
            <div class="card-header">
                <h2>{ if mode == Mode::Batting { "By Bowling Style" } else { "By Batter Hand" } }</h2>
            </div>
            <div class="split-grid">
                { for pairs.into_iter().map(|(title, stats)| split_block(title, stats, mode)) }
            </div>
        </div>
    }
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let profile = use_state(|| None::<Rc<ProfileResponse>>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let tab = use_state(|| Mode::Batting);

    {
        let profile = profile.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(props.name.clone(), move |name| {
            let name = name.clone();
            profile.set(None);
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_profile(&name, &[]).await {
                    Ok(data) => profile.set(Some(Rc::new(data))),
                    Err(err) => {
                        log::warn!("profile fetch failed: {err}");
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
        });
    }

    // Redraw the season chart when the data or the tab changes.
    use_effect_with(((*profile).clone(), *tab), |(profile, tab)| {
        if let Some(data) = profile {
            let seasons = &data.discipline(*tab).by_season;
            if !seasons.is_empty() {
                chart::render_season_bars(seasons, *tab);
            }
        }
    });

    let set_tab = {
        let tab = tab.clone();
        Callback::from(move |key: String| {
            tab.set(if key == "bowling" { Mode::Bowling } else { Mode::Batting });
        })
    };

    let tab_options = vec![
        (AttrValue::Static("batting"), AttrValue::Static("Batting Stats")),
        (AttrValue::Static("bowling"), AttrValue::Static("Bowling Stats")),
    ];

    html! {
        <div class="page">
            if let Some(err) = &*error {
                <div class="card error-card">{ format!("Failed to load profile: {err}") }</div>
            } else if *loading {
                <div class="empty-card">
                    <p class="empty-title">{ "Loading profile…" }</p>
                </div>
            } else if let Some(data) = &*profile {
                <div class="card profile-header">
                    <div class="profile-avatar">{ initials(&data.player.display_name) }</div>
                    <div class="profile-meta">
                        <h1>{ &data.player.display_name }</h1>
                        <div class="chip-row">
                            if let Some(country) = &data.player.country {
                                <span class="result-tag">{ country }</span>
                            }
                            if let Some(style) = &data.player.batting_style {
                                <span class="result-tag">{ style }</span>
                            }
                            if let Some(style) = &data.player.bowling_style {
                                <span class="result-tag">{ style }</span>
                            }
                        </div>
                    </div>
                </div>

                <div class="profile-tabs">
                    <SegmentedControl
                        options={tab_options}
                        value={AttrValue::from(tab.as_str())}
                        on_change={set_tab}
                    />
                </div>

                {{
                    let discipline = data.discipline(*tab);
                    let cards = match *tab {
                        Mode::Batting => batting_cards(&discipline.overall),
                        Mode::Bowling => bowling_cards(&discipline.overall),
                    };
                    html! {
                        <>
                            <div class="stat-grid stat-grid-6">
                                { for cards.into_iter().map(|(label, value, sub, highlight)| html! {
                                    <StatCard
                                        key={label}
                                        label={AttrValue::Static(label)}
                                        value={AttrValue::from(value)}
                                        sub={sub.map(AttrValue::Static)}
                                        {highlight}
                                    />
                                }) }
                            </div>

                            { splits(discipline, *tab) }

                            <div class="card chart-card">
                                <div class="card-header">
                                    <h2>
                                        { if *tab == Mode::Batting { "Runs by Season" } else { "Wickets by Season" } }
                                    </h2>
                                </div>
                                if discipline.by_season.is_empty() {
                                    <div class="empty-chart">{ "No season data available" }</div>
                                } else {
                                    <canvas id="seasonChart"></canvas>
                                }
                            </div>
                        </>
                    }
                }}
            }
        </div>
    }
}
