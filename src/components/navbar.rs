//! Top navigation bar with routing links and the theme toggle.

use crate::pages::Route;
use crate::theme::{self, Theme};
use yew::prelude::*;
use yew_router::prelude::*;

const NAV_LINKS: &[(&str, Route)] = &[
    ("Home", Route::Home),
    ("Player Profiles", Route::Players),
    ("Matchups", Route::Matchup),
    ("Advanced Stats", Route::Explorer),
    ("Assistant", Route::Assistant),
    ("Compare", Route::Compare),
];

#[function_component(ThemeToggle)]
fn theme_toggle() -> Html {
    let current = use_state(theme::stored);
    let onclick = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            let next = current.toggled();
            theme::apply(next);
            current.set(next);
        })
    };
    let icon = match *current {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    };
    html! {
        <button type="button" class="theme-toggle" aria-label="Toggle theme" {onclick}>
            { icon }
        </button>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let route = use_route::<Route>();
    let menu_open = use_state(|| false);
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = |extra_onclick: Option<Callback<MouseEvent>>| -> Html {
        html! {
            { for NAV_LINKS.iter().map(|(label, target)| {
                let is_active = route.as_ref() == Some(target);
                html! {
                    <Link<Route>
                        key={*label}
                        to={target.clone()}
                        classes={classes!("nav-link", is_active.then_some("is-active"))}
                    >
                        <span onclick={extra_onclick.clone()}>{ *label }</span>
                    </Link<Route>>
                }
            }) }
        }
    };

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="navbar-brand">
                    <span class="navbar-logo" aria-hidden="true">{ "◉" }</span>
                    <span class="navbar-title">{ "Intentmeter" }</span>
                </Link<Route>>

                <div class="navbar-links">
                    { links(None) }
                </div>

                <div class="navbar-actions">
                    <ThemeToggle />
                    <button type="button" class="navbar-menu-button" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>

            if *menu_open {
                <div class="navbar-mobile">
                    { links(Some(close_menu)) }
                </div>
            }
        </nav>
    }
}
