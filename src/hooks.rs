//! Shared data-loading hooks backed by the session caches.

use crate::cache::{PLAYERS_CACHE, TEAMS_CACHE};
use intentmeter::api;
use intentmeter::Player;
use std::rc::Rc;
use yew::prelude::*;

/// The player list plus its fetch status, as consumed by the comboboxes.
#[derive(Clone, PartialEq)]
pub struct PlayersHandle {
    pub players: Rc<Vec<Player>>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Fetch the player list on first mount, serving repeat visits from the
/// session cache. The combobox stays in its loading state until the list
/// settles; a fetch failure surfaces as an inline page error.
#[hook]
pub fn use_players() -> PlayersHandle {
    let players = use_state(|| Rc::new(Vec::<Player>::new()));
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let players = players.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            if let Some(cached) = PLAYERS_CACHE.with(|c| c.borrow().clone()) {
                players.set(cached);
                loading.set(false);
                return;
            }
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_players().await {
                    Ok(list) => {
                        let list = Rc::new(list);
                        PLAYERS_CACHE.with(|c| *c.borrow_mut() = Some(list.clone()));
                        players.set(list);
                    }
                    Err(err) => {
                        log::warn!("player list fetch failed: {err}");
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
        });
    }

    PlayersHandle {
        players: (*players).clone(),
        loading: *loading,
        error: (*error).clone(),
    }
}

/// Fetch the team-name list, cached the same way. Failures degrade to an
/// empty list — the explorer's opposition select just stays short.
#[hook]
pub fn use_teams() -> Rc<Vec<String>> {
    let teams = use_state(|| Rc::new(Vec::<String>::new()));

    {
        let teams = teams.clone();
        use_effect_with((), move |_| {
            if let Some(cached) = TEAMS_CACHE.with(|c| c.borrow().clone()) {
                teams.set(cached);
                return;
            }
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_teams().await {
                    Ok(list) => {
                        let list = Rc::new(list);
                        TEAMS_CACHE.with(|c| *c.borrow_mut() = Some(list.clone()));
                        teams.set(list);
                    }
                    Err(err) => log::warn!("team list fetch failed: {err}"),
                }
            });
        });
    }

    (*teams).clone()
}
