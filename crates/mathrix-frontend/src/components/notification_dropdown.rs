//! Bell button with the unread badge and the list of team requests.
//!
//! The dropdown never loads anything itself: the owning page passes the
//! notifications in, loads them when `on_open` fires and performs the
//! accept/decline behind `on_respond`.

use yew::prelude::*;
use yew_router::prelude::*;

use mathrix::data::{Notification, RequestStatus};
use mathrix::notifications::badge_label;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct NotificationDropdownProps {
    pub participant_id: AttrValue,
    pub notifications: Vec<Notification>,
    pub unread: u32,
    #[prop_or(false)]
    pub loading: bool,
    pub on_open: Callback<()>,
    pub on_respond: Callback<(String, RequestStatus)>,
}

#[function_component(NotificationDropdown)]
pub fn notification_dropdown(props: &NotificationDropdownProps) -> Html {
    let open = use_state(|| false);

    let on_bell = {
        let open = open.clone();
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*open;
            if next {
                on_open.emit(());
            }
            open.set(next);
        })
    };

    let on_close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    let respond = |request_id: &str, status: RequestStatus| {
        let on_respond = props.on_respond.clone();
        let request_id = request_id.to_string();
        Callback::from(move |_: MouseEvent| on_respond.emit((request_id.clone(), status)))
    };

    let list = if props.loading {
        html! {
            <div class="p-4 text-center text-sm text-gray-500 dark:text-gray-400">{ "Loading..." }</div>
        }
    } else if props.notifications.is_empty() {
        html! {
            <div class="p-4 text-center text-sm text-gray-500 dark:text-gray-400">{ "No notifications yet" }</div>
        }
    } else {
        props
            .notifications
            .iter()
            .map(|notification| {
                let status = notification.status;
                let dot = match status {
                    RequestStatus::Pending => "bg-blue-500",
                    RequestStatus::Accepted => "bg-green-500",
                    RequestStatus::Declined => "bg-red-500",
                };
                html! {
                    <div key={notification.request_id.clone()} class={classes!(
                        "p-4", "border-b", "border-gray-100", "dark:border-gray-700",
                        status.is_pending().then_some("bg-blue-50/50 dark:bg-blue-900/10")
                    )}>
                        <div class="flex items-start space-x-3">
                            <div class={classes!("w-2", "h-2", "mt-2", "rounded-full", dot)} />
                            <div class="flex-1">
                                <p class="text-sm font-medium">{ status.headline() }</p>
                                <p class="text-sm text-gray-600 dark:text-gray-400">{ notification.summary() }</p>
                                if status.is_pending() {
                                    <div class="flex space-x-2 mt-2">
                                        <button
                                            class="px-3 py-1 text-xs bg-green-600 hover:bg-green-700 text-white rounded-md"
                                            onclick={respond(&notification.request_id, RequestStatus::Accepted)}
                                        >
                                            { "Accept" }
                                        </button>
                                        <button
                                            class="px-3 py-1 text-xs bg-red-600 hover:bg-red-700 text-white rounded-md"
                                            onclick={respond(&notification.request_id, RequestStatus::Declined)}
                                        >
                                            { "Decline" }
                                        </button>
                                    </div>
                                } else {
                                    <span class={classes!(
                                        "inline-block", "mt-2", "px-2", "py-1", "text-xs", "rounded-full",
                                        if status == RequestStatus::Accepted {
                                            "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-200"
                                        } else {
                                            "bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-200"
                                        }
                                    )}>
                                        { if status == RequestStatus::Accepted { "Accepted" } else { "Declined" } }
                                    </span>
                                }
                            </div>
                        </div>
                    </div>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="relative">
            <button
                class="relative p-2 rounded-full hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors"
                onclick={on_bell}
                title="Notifications"
            >
                <span class="text-xl">{ "🔔" }</span>
                if let Some(label) = badge_label(props.unread) {
                    <span class="absolute -top-1 -right-1 h-5 min-w-5 px-1 rounded-full bg-red-500 text-white text-xs flex items-center justify-center">
                        { label }
                    </span>
                }
            </button>

            if *open {
                <div class="absolute right-0 mt-2 w-80 bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-xl shadow-xl z-50">
                    <div class="flex items-center justify-between p-4 border-b border-gray-200 dark:border-gray-700">
                        <h3 class="text-lg font-semibold">{ "Notifications" }</h3>
                        <button class="text-gray-500 hover:text-gray-700 dark:hover:text-gray-300" onclick={on_close}>
                            { "✕" }
                        </button>
                    </div>
                    <div class="max-h-96 overflow-y-auto">{ list }</div>
                    <div class="p-3 text-center">
                        <Link<Route>
                            to={Route::Discovery { participant_id: props.participant_id.to_string() }}
                            classes="text-sm text-blue-600 dark:text-blue-400 hover:underline"
                        >
                            { "View all team requests" }
                        </Link<Route>>
                    </div>
                </div>
            }
        </div>
    }
}
