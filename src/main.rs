//! Intentmeter — a T20 cricket analytics dashboard built with Yew.
//! Wires the router, navigation chrome, and theme bootstrap around the
//! page components.

use yew::prelude::*;
use yew_router::prelude::*;

mod cache;
mod chart;
mod components;
mod config;
mod hooks;
mod pages;
mod theme;

use components::Navbar;
use pages::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    // Apply the persisted theme before anything meaningful renders.
    use_effect_with((), |_| {
        theme::apply(theme::stored());
    });

    html! {
        <BrowserRouter>
            <Navbar />
            <main>
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

/// Entry point: installs the panic hook and mounts the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
