use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use mathrix::api::login_error_message;
use mathrix::async_callback;
use mathrix::log::{info, warn};

use crate::components::{CARD_CLASSES, INPUT_CLASSES, PRIMARY_BUTTON, TEXT_SECONDARY};
use crate::providers::{api, use_session};
use crate::routes::Route;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let api = use_memo((), |_| api::create());
    let session = use_session();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let loading = use_state(|| false);
    let error_msg = use_state(|| None::<String>);

    let on_email = {
        let email = email.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
                error_msg.set(None);
            }
        })
    };

    let on_password = {
        let password = password.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
                error_msg.set(None);
            }
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let set_participant = session.set_participant.clone();
    let on_submit = async_callback!([api, email, password, loading, error_msg, set_participant, navigator] |e: SubmitEvent| {
        e.prevent_default();

        if email.trim().is_empty() || password.trim().is_empty() {
            error_msg.set(Some("Please enter both email and password".to_string()));
            return;
        }
        if *loading {
            return;
        }

        loading.set(true);
        error_msg.set(None);

        match api.login(email.trim(), &password).await {
            Ok(participant) => {
                info!("Signed in as {}", participant.participant_id);
                let destination = match participant.team_id.clone().filter(|id| !id.is_empty()) {
                    Some(team_id) => Route::Team { team_id },
                    None => Route::Dashboard,
                };
                set_participant.emit(participant);
                loading.set(false);
                if let Some(navigator) = &navigator {
                    navigator.push(&destination);
                }
            }
            Err(err) => {
                warn!("Login failed: {err}");
                loading.set(false);
                error_msg.set(Some(login_error_message(&err).to_string()));
            }
        }
    });

    html! {
        <div class="max-w-md mx-auto px-6 py-16">
            <div class={CARD_CLASSES}>
                <div class="mb-6 text-center">
                    <h1 class="text-2xl font-bold mb-2">{ "Welcome Back" }</h1>
                    <p class={classes!("text-sm", TEXT_SECONDARY)}>{ "Sign in to find your team" }</p>
                </div>

                if let Some(error) = error_msg.as_ref() {
                    <div class="mb-4 p-3 bg-red-100 dark:bg-red-900/20 text-red-700 dark:text-red-300 rounded">
                        { error }
                    </div>
                }

                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label for="email" class="block text-sm font-medium mb-1">{ "Email" }</label>
                        <input
                            id="email"
                            type="email"
                            class={INPUT_CLASSES}
                            placeholder="you@university.edu"
                            value={(*email).clone()}
                            oninput={on_email}
                            disabled={*loading}
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium mb-1">{ "Password" }</label>
                        <div class="relative">
                            <input
                                id="password"
                                type={if *show_password { "text" } else { "password" }}
                                class={INPUT_CLASSES}
                                placeholder="Your password"
                                value={(*password).clone()}
                                oninput={on_password}
                                disabled={*loading}
                            />
                            <button
                                type="button"
                                class="absolute inset-y-0 right-0 px-3 text-sm text-gray-500"
                                onclick={toggle_password}
                            >
                                { if *show_password { "Hide" } else { "Show" } }
                            </button>
                        </div>
                    </div>
                    <button type="submit" class={classes!("w-full", PRIMARY_BUTTON)} disabled={*loading}>
                        { if *loading { "Signing in..." } else { "Sign In" } }
                    </button>
                </form>

                <p class={classes!("mt-6", "text-center", "text-sm", TEXT_SECONDARY)}>
                    { "New here? " }
                    <Link<Route> to={Route::Register} classes="text-blue-600 dark:text-blue-400 hover:underline">
                        { "Register now" }
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
