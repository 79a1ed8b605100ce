//! Routed pages of the dashboard.

mod assistant;
mod compare;
mod explorer;
mod home;
mod matchup;
mod players;
mod profile;

pub use assistant::AssistantPage;
pub use compare::ComparePage;
pub use explorer::ExplorerPage;
pub use home::HomePage;
pub use matchup::MatchupPage;
pub use players::PlayersPage;
pub use profile::ProfilePage;

use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/players")]
    Players,
    #[at("/players/:name")]
    Profile { name: String },
    #[at("/compare")]
    Compare,
    #[at("/matchup")]
    Matchup,
    #[at("/explorer")]
    Explorer,
    #[at("/assistant")]
    Assistant,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Players => html! { <PlayersPage /> },
        Route::Profile { name } => html! { <ProfilePage {name} /> },
        Route::Compare => html! { <ComparePage /> },
        Route::Matchup => html! { <MatchupPage /> },
        Route::Explorer => html! { <ExplorerPage /> },
        Route::Assistant => html! { <AssistantPage /> },
        Route::NotFound => html! {
            <div class="page page-narrow">
                <div class="empty-card">
                    <p class="empty-title">{ "Page not found" }</p>
                    <p class="empty-hint">{ "The page you were looking for does not exist." }</p>
                </div>
            </div>
        },
    }
}
