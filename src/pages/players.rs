//! Player index page: one combobox that navigates to the chosen profile.

use crate::components::PlayerCombobox;
use crate::hooks::use_players;
use crate::pages::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(PlayersPage)]
pub fn players_page() -> Html {
    let players = use_players();
    let navigator = use_navigator();
    let selected = use_state(|| None::<String>);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |key: Option<String>| {
            if let Some(name) = key {
                selected.set(Some(name.clone()));
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Profile { name });
                }
            } else {
                selected.set(None);
            }
        })
    };

    let count_line = if players.loading {
        "Search across … players from IPL, SA20 and T20Is".to_string()
    } else {
        format!(
            "Search across {} players from IPL, SA20 and T20Is",
            players.players.len()
        )
    };

    html! {
        <div class="page page-narrow">
            <div class="page-header page-header-center">
                <h1>{ "Player Profiles" }</h1>
                <p>{ count_line }</p>
            </div>

            if let Some(err) = &players.error {
                <p class="inline-error">{ format!("Failed to load players: {err}") }</p>
            }

            <PlayerCombobox
                players={players.players.clone()}
                value={(*selected).clone()}
                on_change={on_select}
                placeholder="Search by name or country…"
                loading={players.loading}
            />

            if !players.loading && !players.players.is_empty() {
                <p class="page-footnote">{ "Select a player to view their full profile" }</p>
            }
        </div>
    }
}
