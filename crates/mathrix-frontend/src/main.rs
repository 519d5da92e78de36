mod components;
mod dialogs;
mod hooks;
mod pages;
mod providers;
mod routes;

use yew::prelude::*;
use yew_router::prelude::*;

use components::Navbar;
use providers::{SessionProvider, ThemeProvider};
use routes::{Route, switch};

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <SessionProvider>
                <BrowserRouter>
                    <div class="min-h-screen bg-gray-50 text-gray-900 dark:bg-gray-900 dark:text-gray-100 transition-colors">
                        <Navbar />
                        <main class="pt-16">
                            <Switch<Route> render={switch} />
                        </main>
                    </div>
                </BrowserRouter>
            </SessionProvider>
        </ThemeProvider>
    }
}

fn main() {
    mathrix::log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}
