//! Type-ahead player selector.
//!
//! The view layer over [`SelectorState`]: a text input that shows the
//! selected player while idle and becomes a filter box while open, a
//! keyboard-navigable dropdown, a clear control, and outside-click
//! dismissal. The selected key is a controlled prop — this component only
//! reports changes through `on_change`.

use intentmeter::selector::{filter_players, find_by_key, position_of, KeyOutcome, SelectorState};
use intentmeter::Player;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, Node};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerComboboxProps {
    pub players: Rc<Vec<Player>>,
    #[prop_or_default]
    pub value: Option<String>,
    pub on_change: Callback<Option<String>>,
    #[prop_or(AttrValue::Static("Select player…"))]
    pub placeholder: AttrValue,
    #[prop_or(false)]
    pub loading: bool,
}

fn blur_input(input_ref: &NodeRef) {
    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
        let _ = input.blur();
    }
}

#[function_component(PlayerCombobox)]
pub fn player_combobox(props: &PlayerComboboxProps) -> Html {
    let state = use_state(SelectorState::default);
    let container_ref = use_node_ref();
    let input_ref = use_node_ref();
    let list_ref = use_node_ref();

    let selected = props
        .value
        .as_deref()
        .and_then(|key| find_by_key(&props.players, key));
    let filtered = filter_players(&props.players, state.query());

    // Close and clear the filter when a pointer lands outside the control.
    // The listener only exists while the dropdown is open, so firing it
    // always means "dismiss".
    {
        let state = state.clone();
        let container_ref = container_ref.clone();
        use_effect_with(state.is_open(), move |&open| {
            let mut listener = None;
            if open {
                let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
                    move |event: web_sys::MouseEvent| {
                        let inside = event
                            .target()
                            .and_then(|t| t.dyn_into::<Node>().ok())
                            .map(|node| {
                                container_ref
                                    .get()
                                    .map(|c| c.contains(Some(&node)))
                                    .unwrap_or(false)
                            })
                            .unwrap_or(false);
                        if !inside {
                            state.set(SelectorState::default());
                        }
                    },
                );
                let _ = gloo_utils::document().add_event_listener_with_callback(
                    "mousedown",
                    closure.as_ref().unchecked_ref(),
                );
                listener = Some(closure);
            }
            move || {
                if let Some(closure) = listener {
                    let _ = gloo_utils::document().remove_event_listener_with_callback(
                        "mousedown",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    // Keep the highlighted row visible while navigating.
    {
        let list_ref = list_ref.clone();
        use_effect_with(
            (state.is_open(), state.highlighted()),
            move |&(open, highlighted)| {
                if open {
                    if let Some(list) = list_ref.cast::<web_sys::Element>() {
                        if let Some(item) = list.children().item(highlighted as u32) {
                            item.scroll_into_view_with_bool(false);
                        }
                    }
                }
            },
        );
    }

    let open_dropdown = {
        let state = state.clone();
        let players = props.players.clone();
        let value = props.value.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*state).clone();
            next.open_at(position_of(&players, value.as_deref()));
            state.set(next);
        })
    };

    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*state).clone();
            next.set_query(input.value());
            state.set(next);
        })
    };

    let onkeydown = {
        let state = state.clone();
        let players = props.players.clone();
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |e: KeyboardEvent| {
            let key = e.key();
            let mut next = (*state).clone();
            let filtered = filter_players(&players, next.query());
            let selected_pos = position_of(&players, value.as_deref());
            match next.handle_key(&key, filtered.len(), selected_pos) {
                KeyOutcome::Opened | KeyOutcome::Moved => e.prevent_default(),
                KeyOutcome::Committed(index) => {
                    e.prevent_default();
                    if let Some(player) = filtered.get(index) {
                        on_change.emit(Some(player.unique_name.clone()));
                    }
                    blur_input(&input_ref);
                }
                KeyOutcome::Closed => {
                    // Tab keeps its default so focus moves on.
                    if key == "Escape" {
                        blur_input(&input_ref);
                    }
                }
                KeyOutcome::Ignored => {}
            }
            state.set(next);
        })
    };

    let onclear = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: MouseEvent| {
            // Swallow the mousedown so the input never gains focus and the
            // dropdown stays closed.
            e.prevent_default();
            e.stop_propagation();
            on_change.emit(None);
        })
    };

    let input_value = if state.is_open() {
        state.query().to_string()
    } else {
        selected.map(|p| p.selected_label()).unwrap_or_default()
    };
    let placeholder = if props.loading {
        AttrValue::Static("Loading players…")
    } else {
        props.placeholder.clone()
    };
    let show_clear = props.value.is_some() && !state.is_open() && !props.loading;
    let query = state.query().to_string();

    html! {
        <div class="combobox" ref={container_ref}>
            <div class={classes!("combobox-field", state.is_open().then_some("is-open"))}>
                <input
                    ref={input_ref.clone()}
                    type="text"
                    class="combobox-input"
                    value={input_value}
                    placeholder={placeholder}
                    disabled={props.loading}
                    autocomplete="off"
                    spellcheck="false"
                    onfocus={open_dropdown}
                    oninput={oninput}
                    onkeydown={onkeydown}
                />
                if show_clear {
                    <button
                        type="button"
                        class="combobox-clear"
                        tabindex="-1"
                        aria-label="Clear selection"
                        onmousedown={onclear}
                    >{ "×" }</button>
                }
                <span class="combobox-chevron" aria-hidden="true">{ "▾" }</span>
            </div>

            if state.is_open() {
                <div class="combobox-dropdown">
                    if !query.is_empty() {
                        <div class="combobox-count">
                            { format!("{} result{}", filtered.len(), if filtered.len() == 1 { "" } else { "s" }) }
                        </div>
                    }
                    <ul class="combobox-list" ref={list_ref}>
                        if filtered.is_empty() {
                            <li class="combobox-empty">
                                { format!("No players match “{query}”") }
                            </li>
                        } else {
                            { for filtered.iter().enumerate().map(|(index, player)| {
                                let is_selected = props.value.as_deref() == Some(player.unique_name.as_str());
                                let is_highlighted = index == state.highlighted();
                                let onmousedown = {
                                    let state = state.clone();
                                    let on_change = props.on_change.clone();
                                    let input_ref = input_ref.clone();
                                    let key = player.unique_name.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        on_change.emit(Some(key.clone()));
                                        let mut next = (*state).clone();
                                        next.close();
                                        state.set(next);
                                        blur_input(&input_ref);
                                    })
                                };
                                let onmouseenter = {
                                    let state = state.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        let mut next = (*state).clone();
                                        next.highlight(index);
                                        state.set(next);
                                    })
                                };
                                html! {
                                    <li
                                        key={player.unique_name.clone()}
                                        class={classes!(
                                            "combobox-row",
                                            is_highlighted.then_some("is-highlighted"),
                                            is_selected.then_some("is-selected"),
                                        )}
                                        {onmousedown}
                                        {onmouseenter}
                                    >
                                        <span class="combobox-name">{ &player.display_name }</span>
                                        <span class="combobox-meta">
                                            if let Some(country) = &player.country {
                                                <span class="combobox-country">{ country }</span>
                                            }
                                            if is_selected {
                                                <span class="combobox-check">{ "✓" }</span>
                                            }
                                        </span>
                                    </li>
                                }
                            }) }
                        }
                    </ul>
                </div>
            }
        </div>
    }
}
