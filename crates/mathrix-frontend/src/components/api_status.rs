use yew::prelude::*;

use crate::providers::api;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ApiStatus {
    Checking,
    Online,
    Offline,
}

/// Pings the API health endpoint once and shows the result as a status dot.
#[function_component(ApiStatusIndicator)]
pub fn api_status_indicator() -> Html {
    let api = use_memo((), |_| api::create());
    let status = use_state(|| ApiStatus::Checking);

    {
        let status = status.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api.health().await {
                    Ok(_) => status.set(ApiStatus::Online),
                    Err(err) => {
                        mathrix::log::warn!("API health check failed: {err}");
                        status.set(ApiStatus::Offline);
                    }
                }
            });
        });
    }

    let (dot, text, label) = match *status {
        ApiStatus::Checking => ("bg-yellow-500", "text-yellow-600 dark:text-yellow-400", "Checking API..."),
        ApiStatus::Online => ("bg-green-500", "text-green-600 dark:text-green-400", "API online"),
        ApiStatus::Offline => ("bg-red-500", "text-red-600 dark:text-red-400", "API unreachable"),
    };

    html! {
        <div class="flex items-center space-x-2">
            <div class={classes!("w-3", "h-3", "rounded-full", dot)}></div>
            <span class={classes!("text-sm", text)}>{ label }</span>
        </div>
    }
}
