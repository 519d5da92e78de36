use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{CARD_CLASSES, TEXT_SECONDARY};
use crate::providers::use_session;
use crate::routes::Route;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "🤖",
        "Smart Matching",
        "Teammate suggestions scored on skills, interests and department.",
    ),
    (
        "🔍",
        "Discover & Join",
        "Browse open teams and potential teammates, then send a request in one click.",
    ),
    (
        "🔔",
        "Stay in the Loop",
        "Accept or decline team requests straight from your dashboard.",
    ),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let session = use_session();

    html! {
        <div class="max-w-6xl mx-auto px-6 py-16">
            <section class="text-center mb-16">
                <span class="inline-block px-4 py-1 mb-6 text-sm font-medium rounded-full bg-blue-100 text-blue-800 dark:bg-blue-900/30 dark:text-blue-200">
                    { "AI-Powered Team Formation" }
                </span>
                <h1 class="text-5xl font-bold mb-6">{ "Mathrix" }</h1>
                <p class={classes!("text-lg", "max-w-2xl", "mx-auto", "mb-8", TEXT_SECONDARY)}>
                    { "Discover perfect teammates, build winning teams, and dominate college events." }
                </p>

                if let Some(participant) = &session.participant {
                    <div class="space-y-4">
                        <p class="text-lg">{ format!("Welcome back, {}!", participant.name) }</p>
                        <Link<Route> to={Route::Dashboard} classes="inline-block px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-xl">
                            { "Go to Dashboard" }
                        </Link<Route>>
                    </div>
                } else {
                    <div class="flex justify-center space-x-4">
                        <Link<Route> to={Route::Register} classes="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-xl">
                            { "Get Started" }
                        </Link<Route>>
                        <Link<Route> to={Route::Login} classes="px-6 py-3 border border-gray-300 dark:border-gray-600 hover:bg-gray-100 dark:hover:bg-gray-800 font-medium rounded-xl">
                            { "Sign In" }
                        </Link<Route>>
                    </div>
                }
            </section>

            <section class="grid grid-cols-1 md:grid-cols-3 gap-6">
                { for FEATURES.iter().map(|(icon, title, body)| html! {
                    <div class={CARD_CLASSES}>
                        <div class="text-3xl mb-3">{ *icon }</div>
                        <h3 class="text-lg font-semibold mb-2">{ *title }</h3>
                        <p class={classes!("text-sm", TEXT_SECONDARY)}>{ *body }</p>
                    </div>
                }) }
            </section>
        </div>
    }
}
