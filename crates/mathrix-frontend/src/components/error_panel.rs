use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or_default]
    pub on_retry: Option<Callback<MouseEvent>>,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    html! {
        <div class="bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg p-6">
            <h2 class="text-lg font-medium text-red-800 dark:text-red-200 mb-2">{ format!("⚠️ {}", props.title) }</h2>
            <p class="text-red-700 dark:text-red-300 mb-4">{ &props.message }</p>
            if let Some(on_retry) = &props.on_retry {
                <button
                    class="px-4 py-2 bg-red-600 text-white rounded-md hover:bg-red-700 focus:outline-none focus:ring-2 focus:ring-red-500"
                    onclick={on_retry.clone()}
                >
                    { "Retry" }
                </button>
            }
        </div>
    }
}
