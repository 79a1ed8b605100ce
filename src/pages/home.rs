//! Landing page: hero line and feature cards linking into the tools.

use crate::pages::Route;
use yew::prelude::*;
use yew_router::prelude::*;

struct Feature {
    title: &'static str,
    description: &'static str,
    route: Route,
}

fn features() -> Vec<Feature> {
    vec![
        Feature {
            title: "Player Profiles",
            description: "Career stats for 17,000+ T20 players. Batting and bowling breakdowns, \
                season-by-season charts, and playing style context.",
            route: Route::Players,
        },
        Feature {
            title: "Player Comparison",
            description: "Side-by-side analysis of any two players. Radar charts across six key \
                metrics, phase breakdowns, and a head-to-head stat table.",
            route: Route::Compare,
        },
        Feature {
            title: "Matchup Analysis",
            description: "Ball-by-ball batter vs bowler records. Dismissal rates, scoring \
                patterns, and shot distribution across every delivery faced.",
            route: Route::Matchup,
        },
        Feature {
            title: "Stats Explorer",
            description: "Multi-dimensional filtering by competition, phase, bowling style, venue, \
                and opposition. Surface the exact insight you're hunting for.",
            route: Route::Explorer,
        },
    ]
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="page home">
            <section class="hero">
                <span class="hero-badge">{ "T20 Cricket Analytics · IPL, SA20 & T20I · 2017–2024" }</span>
                <h1>{ "Every delivery, decoded." }</h1>
                <p class="hero-sub">
                    { "Ball-by-ball data from three competitions, distilled into profiles, \
                       matchups, comparisons and free-form queries." }
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Compare} classes="button-primary">
                        { "Compare players" }
                    </Link<Route>>
                    <Link<Route> to={Route::Assistant} classes="button-secondary">
                        { "Ask the assistant" }
                    </Link<Route>>
                </div>
            </section>

            <section class="feature-grid">
                { for features().into_iter().map(|feature| html! {
                    <Link<Route> key={feature.title} to={feature.route} classes="feature-card">
                        <h3>{ feature.title }</h3>
                        <p>{ feature.description }</p>
                    </Link<Route>>
                }) }
            </section>
        </div>
    }
}
