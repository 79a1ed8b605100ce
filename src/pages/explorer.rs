//! Advanced stats page: a query builder over the filtered single-subject
//! and team statistics endpoints, with batter/bowler/team subjects, the
//! full filter grid, and grouped or flat result rendering.

use crate::components::{
    option_pairs, PlayerCombobox, SegmentedControl, SelectField, StatCard, ToggleChip,
};
use crate::config::{BALLS_OPTIONS, BATTER_HANDS, BOWLER_TYPES, TOURNAMENTS, YEAR_OPTIONS};
use crate::hooks::{use_players, use_teams};
use intentmeter::api::{self, GroupBy, InningsContext, PlayerStatsQuery, TeamStatsQuery};
use intentmeter::metrics::{format_count, format_number, format_pct};
use intentmeter::models::{Mode, PhaseKey, PlayerStatsResponse, StatBag, StatGroup, TeamStats};
use intentmeter::selector::find_by_key;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subject {
    Batter,
    Bowler,
    Team,
}

impl Subject {
    fn key(self) -> &'static str {
        match self {
            Subject::Batter => "batter",
            Subject::Bowler => "bowler",
            Subject::Team => "team",
        }
    }

    fn from_key(key: &str) -> Subject {
        match key {
            "bowler" => Subject::Bowler,
            "team" => Subject::Team,
            _ => Subject::Batter,
        }
    }

    fn mode(self) -> Mode {
        match self {
            Subject::Bowler => Mode::Bowling,
            _ => Mode::Batting,
        }
    }
}

#[derive(Clone, PartialEq)]
enum ExplorerResult {
    Player(PlayerStatsResponse),
    Team(TeamStats),
}

fn phase_from_key(key: &str) -> Option<PhaseKey> {
    PhaseKey::ALL.into_iter().find(|p| p.key() == key)
}

fn group_by_from_key(key: &str) -> Option<GroupBy> {
    match key {
        "bowler_type" => Some(GroupBy::BowlerType),
        "batter_hand" => Some(GroupBy::BatterHand),
        "phase" => Some(GroupBy::Phase),
        _ => None,
    }
}

fn innings_from_key(key: &str) -> Option<InningsContext> {
    match key {
        "defending" => Some(InningsContext::Defending),
        "chasing" => Some(InningsContext::Chasing),
        _ => None,
    }
}

fn opt_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn label_for(options: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    options
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
}

fn batter_cards(stats: &StatBag) -> Vec<(&'static str, String, bool)> {
    let mut cards = vec![
        ("Innings", format_count(stats.innings), false),
        ("Runs", format_count(stats.runs), true),
        ("Average", format_number(stats.avg, 1), false),
        ("Strike Rate", format_number(stats.sr, 1), true),
        ("Dot Ball %", format_pct(stats.dot_ball_pct), false),
        ("Boundary %", format_pct(stats.boundary_pct), false),
        ("Balls/Boundary", format_number(stats.balls_per_bdy, 1), false),
        ("Dismissals", format_count(stats.dismissals), false),
    ];
    if stats.fifties.is_some() {
        cards.push(("Fifties", format_count(stats.fifties), false));
        cards.push(("Hundreds", format_count(stats.hundreds), false));
    }
    cards
}

fn bowler_cards(stats: &StatBag) -> Vec<(&'static str, String, bool)> {
    vec![
        ("Innings", format_count(stats.innings), false),
        ("Wickets", format_count(stats.wickets), true),
        ("Economy", format_number(stats.economy, 2), false),
        ("Average", format_number(stats.avg, 1), false),
        ("Strike Rate", format_number(stats.bowling_sr, 1), false),
        ("Dot Ball %", format_pct(stats.dot_ball_pct), true),
        ("Boundary Given %", format_pct(stats.boundary_given_pct), false),
        ("Wkts / Innings", format_number(stats.wkts_per_innings, 2), false),
    ]
}

fn team_cards(stats: &TeamStats) -> Vec<(&'static str, String, bool)> {
    vec![
        ("Matches", format_count(stats.matches), false),
        ("Wins", format_count(stats.wins), true),
        ("Losses", format_count(stats.losses), false),
        ("No Results", format_count(stats.no_results), false),
        ("Win %", format_pct(stats.win_pct), true),
    ]
}

fn stat_card_grid(cards: Vec<(&'static str, String, bool)>) -> Html {
    html! {
        <div class="stat-grid stat-grid-5">
            { for cards.into_iter().map(|(label, value, highlight)| html! {
                <StatCard
                    key={label}
                    label={AttrValue::Static(label)}
                    value={AttrValue::from(value)}
                    {highlight}
                />
            }) }
        </div>
    }
}

fn no_data_card(text: &str) -> Html {
    html! { <div class="empty-card"><p class="empty-hint">{ text }</p></div> }
}

#[derive(Properties, PartialEq)]
struct GroupTableProps {
    groups: Vec<StatGroup>,
    mode: Mode,
}

#[function_component(GroupTable)]
fn group_table(props: &GroupTableProps) -> Html {
    type Column = (&'static str, fn(&StatBag) -> String);
    let batting: &[Column] = &[
        ("Inn", |s| format_count(s.innings)),
        ("Avg", |s| format_number(s.avg, 1)),
        ("SR", |s| format_number(s.sr, 1)),
        ("Dot%", |s| format_pct(s.dot_ball_pct)),
        ("Bdry%", |s| format_pct(s.boundary_pct)),
    ];
    let bowling: &[Column] = &[
        ("Inn", |s| format_count(s.innings)),
        ("Wkts", |s| format_count(s.wickets)),
        ("Econ", |s| format_number(s.economy, 2)),
        ("Avg", |s| format_number(s.avg, 1)),
        ("Dot%", |s| format_pct(s.dot_ball_pct)),
    ];
    let columns = match props.mode {
        Mode::Batting => batting,
        Mode::Bowling => bowling,
    };

    html! {
        <div class="card table-card">
            <table class="group-table">
                <thead>
                    <tr>
                        <th class="col-category">{ "Category" }</th>
                        { for columns.iter().map(|(label, _)| html! {
                            <th key={*label}>{ label }</th>
                        }) }
                    </tr>
                </thead>
                <tbody>
                    { for props.groups.iter().map(|group| html! {
                        <tr key={group.key.clone()}>
                            <td class="col-category">{ &group.label }</td>
                            { for columns.iter().map(|(label, read)| html! {
                                <td key={*label} class="col-number">{ read(&group.stats) }</td>
                            }) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[function_component(ExplorerPage)]
pub fn explorer_page() -> Html {
    let players = use_players();
    let teams = use_teams();

    let subject = use_state(|| Subject::Batter);

    let player = use_state(|| None::<String>);
    let team = use_state(String::new);

    let events = use_state(Vec::<String>::new);
    let phase = use_state(|| None::<PhaseKey>);
    let opposition = use_state(String::new);
    let venue = use_state(String::new);
    let year_from = use_state(String::new);

    let bowler_type = use_state(String::new);
    let balls = use_state(String::new);
    let group_by = use_state(|| "none".to_string());

    let batter_hand = use_state(String::new);

    let innings_filter = use_state(|| "any".to_string());
    let city = use_state(String::new);

    let result = use_state(|| None::<ExplorerResult>);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Any input change invalidates the shown result.
    macro_rules! setter {
        ($handle:ident) => {{
            let handle = $handle.clone();
            let result = result.clone();
            Callback::from(move |value: String| {
                handle.set(value);
                result.set(None);
            })
        }};
    }

    let set_subject = {
        let subject = subject.clone();
        let group_by = group_by.clone();
        let result = result.clone();
        Callback::from(move |key: String| {
            subject.set(Subject::from_key(&key));
            group_by.set("none".to_string());
            result.set(None);
        })
    };
    let set_team = setter!(team);
    let set_opposition = setter!(opposition);
    let set_venue = setter!(venue);
    let set_year_from = setter!(year_from);
    let set_bowler_type = setter!(bowler_type);
    let set_balls = setter!(balls);
    let set_group_by = setter!(group_by);
    let set_batter_hand = setter!(batter_hand);
    let set_innings = setter!(innings_filter);
    let set_city = setter!(city);

    let select_player = {
        let player = player.clone();
        let result = result.clone();
        Callback::from(move |key: Option<String>| {
            player.set(key);
            result.set(None);
        })
    };

    let on_reset = {
        let player = player.clone();
        let team = team.clone();
        let events = events.clone();
        let phase = phase.clone();
        let opposition = opposition.clone();
        let venue = venue.clone();
        let year_from = year_from.clone();
        let bowler_type = bowler_type.clone();
        let balls = balls.clone();
        let group_by = group_by.clone();
        let batter_hand = batter_hand.clone();
        let innings_filter = innings_filter.clone();
        let city = city.clone();
        let result = result.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            player.set(None);
            team.set(String::new());
            events.set(Vec::new());
            phase.set(None);
            opposition.set(String::new());
            venue.set(String::new());
            year_from.set(String::new());
            bowler_type.set(String::new());
            balls.set(String::new());
            group_by.set("none".to_string());
            batter_hand.set(String::new());
            innings_filter.set("any".to_string());
            city.set(String::new());
            result.set(None);
            error.set(None);
        })
    };

    let can_run = match *subject {
        Subject::Team => !team.is_empty(),
        _ => player.is_some(),
    };

    let on_run = {
        let subject = subject.clone();
        let player = player.clone();
        let team = team.clone();
        let events = events.clone();
        let phase = phase.clone();
        let opposition = opposition.clone();
        let venue = venue.clone();
        let year_from = year_from.clone();
        let bowler_type = bowler_type.clone();
        let balls = balls.clone();
        let group_by = group_by.clone();
        let batter_hand = batter_hand.clone();
        let innings_filter = innings_filter.clone();
        let city = city.clone();
        let result = result.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            if *loading {
                return;
            }
            let subject_now = *subject;
            if subject_now == Subject::Team && team.is_empty() {
                return;
            }
            if subject_now != Subject::Team && player.is_none() {
                return;
            }
            loading.set(true);
            result.set(None);
            error.set(None);

            let result = result.clone();
            let loading = loading.clone();
            let error = error.clone();

            if subject_now == Subject::Team {
                let query = TeamStatsQuery {
                    team: (*team).clone(),
                    opposition: opt_text(&opposition),
                    venue: opt_text(&venue),
                    city: opt_text(&city),
                    events: (*events).clone(),
                    year_from: year_from.parse().ok(),
                    innings: innings_from_key(&innings_filter),
                };
                wasm_bindgen_futures::spawn_local(async move {
                    match api::fetch_team_stats(&query).await {
                        Ok(stats) => result.set(Some(ExplorerResult::Team(stats))),
                        Err(err) => {
                            log::warn!("team stats query failed: {err}");
                            error.set(Some(err.to_string()));
                        }
                    }
                    loading.set(false);
                });
            } else {
                let mut query = PlayerStatsQuery::new(
                    (*player).clone().unwrap_or_default(),
                    subject_now.mode(),
                );
                query.phase = *phase;
                query.events = (*events).clone();
                query.opposition = opt_text(&opposition);
                query.venue = opt_text(&venue);
                query.year_from = year_from.parse().ok();
                query.group_by = group_by_from_key(&group_by);
                match subject_now {
                    Subject::Batter => {
                        query.bowler_type = opt_text(&bowler_type);
                        query.balls = balls.parse().ok();
                    }
                    Subject::Bowler => {
                        query.batter_hand = opt_text(&batter_hand);
                    }
                    Subject::Team => unreachable!(),
                }
                wasm_bindgen_futures::spawn_local(async move {
                    match api::fetch_player_stats(&query).await {
                        Ok(resp) => result.set(Some(ExplorerResult::Player(resp))),
                        Err(err) => {
                            log::warn!("player stats query failed: {err}");
                            error.set(Some(err.to_string()));
                        }
                    }
                    loading.set(false);
                });
            }
        })
    };

    let player_name = player
        .as_deref()
        .map(|k| {
            find_by_key(&players.players, k)
                .map(|p| p.display_name.clone())
                .unwrap_or_else(|| k.to_string())
        })
        .unwrap_or_default();

    // Human-readable summary of the active filters for the result header.
    let filter_summary: Vec<String> = [
        phase.map(|p| p.label().to_string()),
        (!events.is_empty()).then(|| events.join(" + ")),
        (*subject == Subject::Batter)
            .then(|| label_for(BOWLER_TYPES, &bowler_type))
            .flatten()
            .filter(|_| !bowler_type.is_empty())
            .map(String::from),
        (*subject == Subject::Bowler)
            .then(|| label_for(BATTER_HANDS, &batter_hand))
            .flatten()
            .filter(|_| !batter_hand.is_empty())
            .map(String::from),
        opt_text(&opposition).map(|o| format!("vs {o}")),
        opt_text(&venue).map(|v| format!("at {v}")),
        opt_text(&city).map(|c| format!("in {c}")),
        opt_text(&year_from).map(|y| format!("since {y}")),
        (*subject == Subject::Batter)
            .then(|| opt_text(&balls))
            .flatten()
            .map(|b| format!("first {b} balls")),
    ]
    .into_iter()
    .flatten()
    .collect();

    let group_by_options: Vec<(AttrValue, AttrValue)> = {
        let mut options = vec![(AttrValue::Static("none"), AttrValue::Static("No grouping"))];
        if *subject == Subject::Batter {
            options.push((AttrValue::Static("bowler_type"), AttrValue::Static("By bowler type")));
        }
        if *subject == Subject::Bowler {
            options.push((AttrValue::Static("batter_hand"), AttrValue::Static("By batter hand")));
        }
        options.push((AttrValue::Static("phase"), AttrValue::Static("By phase")));
        options
    };

    let team_options: Vec<(AttrValue, AttrValue)> = {
        let mut options = vec![(AttrValue::Static(""), AttrValue::Static("Any opposition"))];
        options.extend(
            teams
                .iter()
                .map(|t| (AttrValue::from(t.clone()), AttrValue::from(t.clone()))),
        );
        options
    };

    let innings_options = vec![
        (AttrValue::Static("any"), AttrValue::Static("Any")),
        (AttrValue::Static("defending"), AttrValue::Static("Batting first")),
        (AttrValue::Static("chasing"), AttrValue::Static("Chasing")),
    ];

    let subject_options = vec![
        (AttrValue::Static("batter"), AttrValue::Static("Batter")),
        (AttrValue::Static("bowler"), AttrValue::Static("Bowler")),
        (AttrValue::Static("team"), AttrValue::Static("Team")),
    ];

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{ "Advanced Stats" }</h1>
                <p>{ "Query batting, bowling and team stats with granular filters — phase, bowler type, opposition, venue, and more." }</p>
            </div>

            <div class="card controls-card">
                <div>
                    <label class="field-label">{ "Analyse" }</label>
                    <SegmentedControl
                        options={subject_options}
                        value={AttrValue::from(subject.key())}
                        on_change={set_subject}
                    />
                </div>

                if *subject == Subject::Team {
                    <div class="field-medium">
                        <SelectField
                            label="Team"
                            value={AttrValue::from((*team).clone())}
                            options={{
                                let mut options = vec![(AttrValue::Static(""), AttrValue::Static("Select team…"))];
                                options.extend(teams.iter().map(|t| {
                                    (AttrValue::from(t.clone()), AttrValue::from(t.clone()))
                                }));
                                options
                            }}
                            on_change={set_team}
                        />
                    </div>
                } else {
                    <div class="field-medium">
                        <label class="field-label label-accent">
                            { if *subject == Subject::Batter { "Batter" } else { "Bowler" } }
                        </label>
                        <PlayerCombobox
                            players={players.players.clone()}
                            value={(*player).clone()}
                            on_change={select_player}
                            placeholder={
                                if *subject == Subject::Batter { "Search batter…" } else { "Search bowler…" }
                            }
                            loading={players.loading}
                        />
                    </div>
                }

                <div class="rule" />

                <div class="filter-grid">
                    <div>
                        <label class="field-label">{ "Competitions" }</label>
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
                        <p class="field-hint">
                            { if events.is_empty() { "All competitions".to_string() } else { events.join(", ") } }
                        </p>
                    </div>

                    if *subject != Subject::Team {
                        <div>
                            <label class="field-label">{ "Phase" }</label>
                            <div class="chip-row">
                                { for std::iter::once(None)
                                    .chain(PhaseKey::ALL.into_iter().map(Some))
                                    .map(|option| {
                                        let active = *phase == option;
                                        let label = option.map(|p| p.label()).unwrap_or("All");
                                        let onclick = {
                                            let phase = phase.clone();
                                            let result = result.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                phase.set(option);
                                                result.set(None);
                                            })
                                        };
                                        html! {
                                            <ToggleChip
                                                key={label}
                                                label={AttrValue::Static(label)}
                                                {active}
                                                {onclick}
                                            />
                                        }
                                    }) }
                            </div>
                        </div>
                    }

                    if *subject == Subject::Batter {
                        <SelectField
                            label="Vs Bowler Type"
                            value={AttrValue::from((*bowler_type).clone())}
                            options={option_pairs(BOWLER_TYPES)}
                            on_change={set_bowler_type}
                        />
                    }

                    if *subject == Subject::Bowler {
                        <SelectField
                            label="Vs Batter Hand"
                            value={AttrValue::from((*batter_hand).clone())}
                            options={option_pairs(BATTER_HANDS)}
                            on_change={set_batter_hand}
                        />
                    }

                    <SelectField
                        label={if *subject == Subject::Bowler { "Vs Opposition (batting)" } else { "Vs Opposition" }}
                        value={AttrValue::from((*opposition).clone())}
                        options={team_options}
                        on_change={set_opposition}
                    />

                    <div class="field">
                        <label class="field-label">{ "At Venue" }</label>
                        <input
                            type="text"
                            class="field-input"
                            value={(*venue).clone()}
                            placeholder="e.g. Wankhede, Eden Gardens…"
                            oninput={{
                                let set_venue = set_venue.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    set_venue.emit(input.value());
                                })
                            }}
                        />
                    </div>

                    if *subject == Subject::Team {
                        <div class="field">
                            <label class="field-label">{ "City" }</label>
                            <input
                                type="text"
                                class="field-input"
                                value={(*city).clone()}
                                placeholder="e.g. Chennai, Mumbai…"
                                oninput={{
                                    let set_city = set_city.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        set_city.emit(input.value());
                                    })
                                }}
                            />
                        </div>
                    }

                    <SelectField
                        label="Since Year"
                        value={AttrValue::from((*year_from).clone())}
                        options={option_pairs(YEAR_OPTIONS)}
                        on_change={set_year_from}
                    />

                    if *subject == Subject::Batter {
                        <SelectField
                            label="First X Balls of Innings"
                            value={AttrValue::from((*balls).clone())}
                            options={option_pairs(BALLS_OPTIONS)}
                            on_change={set_balls}
                        />
                    }

                    if *subject == Subject::Team {
                        <SelectField
                            label="Innings"
                            value={AttrValue::from((*innings_filter).clone())}
                            options={innings_options}
                            on_change={set_innings}
                        />
                    }

                    if *subject != Subject::Team {
                        <SelectField
                            label="Group By"
                            value={AttrValue::from((*group_by).clone())}
                            options={group_by_options}
                            on_change={set_group_by}
                        />
                    }
                </div>

                <div class="controls-actions">
                    <button
                        type="button"
                        class="button-primary"
                        disabled={!can_run || *loading}
                        onclick={on_run}
                    >
                        { if *loading { "Running…" } else { "Run Query" } }
                    </button>
                    <button type="button" class="button-secondary" onclick={on_reset}>
                        { "Reset" }
                    </button>
                </div>
            </div>

            if let Some(err) = &*error {
                <div class="card error-card">{ format!("Failed to run query: {err}") }</div>
            }

            if let Some(current) = &*result {
                <div class="result-header">
                    <span class="result-name">
                        { if *subject == Subject::Team { (*team).clone() } else { player_name.clone() } }
                    </span>
                    <span class="result-context">
                        { match *subject {
                            Subject::Batter => "batting",
                            Subject::Bowler => "bowling",
                            Subject::Team => "team stats",
                        } }
                    </span>
                    if !filter_summary.is_empty() {
                        <span class="result-filters">{ format!("— {}", filter_summary.join(" · ")) }</span>
                    }
                </div>

                { match current {
                    ExplorerResult::Player(resp) => {
                        if let Some(groups) = &resp.groups {
                            if groups.is_empty() {
                                no_data_card("No data found for any group with these filters.")
                            } else {
                                html! { <GroupTable groups={groups.clone()} mode={resp.mode} /> }
                            }
                        } else {
                            let stats = resp.stats.clone().unwrap_or_default();
                            match resp.mode {
                                Mode::Bowling => {
                                    if stats.innings.unwrap_or(0) == 0 && stats.legal_balls.unwrap_or(0) == 0 {
                                        no_data_card("No bowling data found with these filters.")
                                    } else {
                                        stat_card_grid(bowler_cards(&stats))
                                    }
                                }
                                Mode::Batting => {
                                    if stats.innings.unwrap_or(0) == 0 {
                                        no_data_card("No batting data found with these filters.")
                                    } else {
                                        stat_card_grid(batter_cards(&stats))
                                    }
                                }
                            }
                        }
                    }
                    ExplorerResult::Team(stats) => stat_card_grid(team_cards(stats)),
                } }
            } else if !*loading && error.is_none() {
                <div class="empty-card">
                    <p class="empty-title">{ "Configure your query above" }</p>
                    <p class="empty-hint">{ "Select a player or team, apply any filters, then hit Run Query." }</p>
                </div>
            }
        </div>
    }
}
