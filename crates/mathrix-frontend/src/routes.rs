use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    AdminDashboardPage, DashboardPage, HomePage, LoginPage, RegistrationPage, TeamDashboardPage,
    TeammateDiscoveryPage, TeammateSuggestionsPage,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/register")]
    Register,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/team/:team_id")]
    Team { team_id: String },
    #[at("/suggestions/:participant_id")]
    Suggestions { participant_id: String },
    #[at("/discovery/:participant_id")]
    Discovery { participant_id: String },
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Register => html! { <RegistrationPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Team { team_id } => html! { <TeamDashboardPage team_id={team_id} /> },
        Route::Suggestions { participant_id } => {
            html! { <TeammateSuggestionsPage participant_id={participant_id} /> }
        }
        Route::Discovery { participant_id } => {
            html! { <TeammateDiscoveryPage participant_id={participant_id} /> }
        }
        Route::Admin => html! { <AdminDashboardPage /> },
        Route::NotFound => html! {
            <div class="max-w-xl mx-auto py-24 text-center">
                <h1 class="text-4xl font-bold mb-4">{ "404" }</h1>
                <p class="text-gray-600 dark:text-gray-400 mb-6">{ "This page wandered off." }</p>
                <Link<Route> to={Route::Home} classes="text-blue-600 dark:text-blue-400 hover:underline">
                    { "Back home" }
                </Link<Route>>
            </div>
        },
    }
}
