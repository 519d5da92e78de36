use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_scrolled;
use crate::providers::{use_session, use_theme};
use crate::routes::Route;

const LINK: &str = "px-4 py-2 rounded-lg text-sm font-medium transition-colors text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 hover:bg-white/50 dark:hover:bg-gray-800/50";
const ACTIVE_LINK: &str = "px-4 py-2 rounded-lg text-sm font-medium bg-blue-500/10 text-blue-700 dark:text-blue-300 border border-blue-400/30";

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: AttrValue,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    let current = use_route::<Route>();
    let classes = if current.as_ref() == Some(&props.to) {
        ACTIVE_LINK
    } else {
        LINK
    };

    html! {
        <Link<Route> to={props.to.clone()} classes={classes!(classes)}>{ &props.label }</Link<Route>>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_session();
    let theme = use_theme();
    let navigator = use_navigator();
    let scrolled = use_scrolled(20.0);

    let on_logout = {
        let sign_out = session.sign_out.clone();
        Callback::from(move |_: MouseEvent| {
            sign_out.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let on_toggle_theme = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let bar = if scrolled {
        "bg-white/80 dark:bg-gray-900/80 backdrop-blur-xl border-b border-gray-200 dark:border-gray-700 shadow-lg"
    } else {
        "bg-transparent backdrop-blur-md"
    };

    html! {
        <nav class={classes!("fixed", "top-0", "left-0", "right-0", "z-50", "transition-all", "duration-300", bar)}>
            <div class="max-w-7xl mx-auto px-6">
                <div class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Home} classes="text-2xl font-bold text-blue-600 dark:text-blue-400">
                        { "MATHRIX" }
                    </Link<Route>>

                    <div class="flex items-center space-x-2">
                        <NavLink to={Route::Home} label="Home" />
                        if session.is_signed_in() {
                            <NavLink to={Route::Dashboard} label="Dashboard" />
                            <button
                                class="px-4 py-2 rounded-lg text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-red-600 dark:hover:text-red-400 hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors"
                                onclick={on_logout}
                            >
                                { "Logout" }
                            </button>
                        } else {
                            <NavLink to={Route::Register} label="Register" />
                            <NavLink to={Route::Login} label="Login" />
                        }
                        <NavLink to={Route::Admin} label="Admin" />
                        <button
                            class="p-2 rounded-lg text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
                            onclick={on_toggle_theme}
                            title={if theme.theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }}
                        >
                            { if theme.theme.is_dark() { "☀️" } else { "🌙" } }
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
