use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use mathrix::api::create_team_error_message;
use mathrix::async_callback;
use mathrix::data::{Notification, RequestStatus};
use mathrix::log::{error, info, warn};
use mathrix::notifications::{NotificationList, response_failure_message, response_message};

use crate::components::{
    CARD_CLASSES, ClusterBadge, INPUT_CLASSES, NotificationDropdown, PRIMARY_BUTTON, TEXT_PRIMARY,
    TEXT_SECONDARY,
};
use crate::dialogs;
use crate::providers::{api, use_session};
use crate::routes::Route;

/// The notification list as reducer state, so every optimistic patch lands on
/// the latest list rather than on the one a callback captured.
#[derive(Default, PartialEq)]
struct Inbox(NotificationList);

enum InboxAction {
    Loaded(Vec<Notification>),
    Answered { request_id: String, status: RequestStatus },
}

impl Reducible for Inbox {
    type Action = InboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut list = self.0.clone();
        match action {
            InboxAction::Loaded(items) => list.replace(items),
            InboxAction::Answered { request_id, status } => {
                list.mark(&request_id, status);
            }
        }
        Rc::new(Inbox(list))
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let api = use_memo((), |_| api::create());
    let session = use_session();
    let navigator = use_navigator();

    let unread = use_state(|| 0u32);
    let inbox = use_reducer(Inbox::default);
    let notifications_loading = use_state(|| false);
    let team_name = use_state(String::new);
    let creating = use_state(|| false);
    let error_msg = use_state(|| None::<String>);

    let participant_id = session
        .participant
        .as_ref()
        .map(|p| p.participant_id.clone())
        .unwrap_or_default();

    {
        let navigator = navigator.clone();
        use_effect_with(session.is_signed_in(), move |signed_in| {
            if !*signed_in {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Login);
                }
            }
        });
    }

    let load_unread = async_callback!([api, unread, participant_id] {
        if participant_id.is_empty() {
            return;
        }
        match api.unread_count(&participant_id).await {
            Ok(count) => unread.set(count),
            Err(err) => warn!("Failed to load unread count: {err}"),
        }
    });

    {
        let load_unread = load_unread.clone();
        use_effect_with(participant_id.clone(), move |_| load_unread.emit(()));
    }

    let inbox_dispatcher = inbox.dispatcher();
    let load_notifications = async_callback!([api, inbox_dispatcher, notifications_loading, participant_id] {
        notifications_loading.set(true);
        match api.notifications(&participant_id).await {
            Ok(items) => inbox_dispatcher.dispatch(InboxAction::Loaded(items)),
            Err(err) => error!("Error loading notifications: {err}"),
        }
        notifications_loading.set(false);
    });

    let set_team = session.set_team.clone();
    let on_respond = async_callback!([api, inbox_dispatcher, participant_id, set_team, load_unread] |response: (String, RequestStatus)| {
        let (request_id, status) = response;
        match api.respond_request(&request_id, &participant_id, status).await {
            Ok(outcome) => {
                info!("Request {request_id} {status}");
                inbox_dispatcher.dispatch(InboxAction::Answered {
                    request_id: request_id.clone(),
                    status,
                });
                dialogs::alert(&response_message(status, &outcome));

                if let Some(team) = outcome.team.filter(|_| status == RequestStatus::Accepted) {
                    set_team.emit(team.team_id);
                    dialogs::reload();
                }
            }
            Err(err) => {
                error!("Error responding to request {request_id}: {err}");
                dialogs::alert(response_failure_message(status));
            }
        }
        load_unread.emit(());
    });

    let on_team_name = {
        let team_name = team_name.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                team_name.set(input.value());
                error_msg.set(None);
            }
        })
    };

    let leader_email = session
        .participant
        .as_ref()
        .map(|p| p.email.clone())
        .unwrap_or_default();
    let on_create_team = async_callback!([api, team_name, creating, error_msg, leader_email, set_team, navigator] |e: SubmitEvent| {
        e.prevent_default();

        let name = team_name.trim().to_string();
        if name.is_empty() {
            error_msg.set(Some("Please enter a team name".to_string()));
            return;
        }
        if *creating {
            return;
        }

        creating.set(true);
        error_msg.set(None);

        match api.create_team(&name, &leader_email).await {
            Ok(created) => {
                info!("Created team {}", created.team_id);
                creating.set(false);
                set_team.emit(created.team_id.clone());
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Team { team_id: created.team_id });
                }
            }
            Err(err) => {
                warn!("Team creation failed: {err}");
                creating.set(false);
                error_msg.set(Some(create_team_error_message(&err)));
            }
        }
    });

    let on_logout = {
        let sign_out = session.sign_out.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            sign_out.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let Some(participant) = session.participant.clone() else {
        return html! {};
    };

    let department = participant
        .department
        .clone()
        .unwrap_or_else(|| "Not set".to_string());
    let year = participant
        .year
        .map(|year| format!("Year {year}"))
        .unwrap_or_else(|| "Not set".to_string());
    let team_status = if participant.has_team() {
        "Already in a team"
    } else {
        "Not in a team yet"
    };

    let profile_row = |label: &'static str, value: Html| {
        html! {
            <div>
                <dt class={classes!("text-sm", "font-medium", TEXT_SECONDARY)}>{ label }</dt>
                <dd class={TEXT_PRIMARY}>{ value }</dd>
            </div>
        }
    };

    html! {
        <div class="max-w-5xl mx-auto px-6 py-10 space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">{ "Dashboard" }</h1>
                    <p class={TEXT_SECONDARY}>{ format!("Welcome back, {}!", participant.name) }</p>
                </div>
                <div class="flex items-center space-x-3">
                    <NotificationDropdown
                        participant_id={participant.participant_id.clone()}
                        notifications={inbox.0.items().to_vec()}
                        unread={*unread}
                        loading={*notifications_loading}
                        on_open={load_notifications}
                        {on_respond}
                    />
                    <button class="px-4 py-2 text-sm text-red-600 dark:text-red-400 hover:bg-red-50 dark:hover:bg-red-900/20 rounded-md" onclick={on_logout}>
                        { "Logout" }
                    </button>
                </div>
            </div>

            <div class={CARD_CLASSES}>
                <h2 class="text-xl font-semibold mb-4">{ "Your Profile" }</h2>
                <dl class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    { profile_row("Name", html! { <span>{ participant.name.clone() }</span> }) }
                    { profile_row("Email", html! { <span>{ participant.email.clone() }</span> }) }
                    { profile_row("Department", html! { <span>{ department }</span> }) }
                    { profile_row("Year", html! { <span>{ year }</span> }) }
                    { profile_row("Interest Cluster", html! { <ClusterBadge cluster={participant.interest_cluster} /> }) }
                    { profile_row("Team Status", html! { <span>{ team_status }</span> }) }
                </dl>
            </div>

            if let Some(team_id) = participant.team_id.clone().filter(|id| !id.is_empty()) {
                <div class={CARD_CLASSES}>
                    <h2 class="text-xl font-semibold mb-4">{ "Your Team" }</h2>
                    <Link<Route> to={Route::Team { team_id }} classes="inline-block px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-md">
                        { "Go to Team Dashboard" }
                    </Link<Route>>
                </div>
            } else {
                <div class={CARD_CLASSES}>
                    <h2 class="text-xl font-semibold mb-4">{ "Create Your Team" }</h2>
                    if let Some(error) = (*error_msg).as_ref() {
                        <div class="mb-4 p-3 bg-red-100 dark:bg-red-900/20 text-red-700 dark:text-red-300 rounded">{ error }</div>
                    }
                    <form onsubmit={on_create_team} class="flex space-x-2">
                        <input
                            type="text"
                            class={INPUT_CLASSES}
                            placeholder="Enter your team name"
                            value={(*team_name).clone()}
                            oninput={on_team_name}
                            disabled={*creating}
                        />
                        <button type="submit" class={PRIMARY_BUTTON} disabled={*creating}>
                            { if *creating { "Creating Team..." } else { "Create Team" } }
                        </button>
                    </form>
                </div>
            }

            <div class={CARD_CLASSES}>
                <h2 class="text-xl font-semibold mb-4">{ "Quick Actions" }</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <Link<Route> to={Route::Discovery { participant_id: participant.participant_id.clone() }} classes="block p-4 border border-gray-200 dark:border-gray-700 rounded-lg hover:border-blue-400">
                        <h3 class="font-medium">{ "Find Your Likemate" }</h3>
                        <p class={classes!("text-sm", TEXT_SECONDARY)}>{ "Discover teammates and build amazing teams" }</p>
                    </Link<Route>>
                    <Link<Route> to={Route::Suggestions { participant_id: participant.participant_id.clone() }} classes="block p-4 border border-gray-200 dark:border-gray-700 rounded-lg hover:border-blue-400">
                        <h3 class="font-medium">{ "Teammate Suggestions" }</h3>
                        <p class={classes!("text-sm", TEXT_SECONDARY)}>{ "See who matches your skills best" }</p>
                    </Link<Route>>
                    <Link<Route> to={Route::Admin} classes="block p-4 border border-gray-200 dark:border-gray-700 rounded-lg hover:border-blue-400">
                        <h3 class="font-medium">{ "System Overview" }</h3>
                        <p class={classes!("text-sm", TEXT_SECONDARY)}>{ "View event statistics and admin panel" }</p>
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(request_id: &str) -> Notification {
        Notification {
            request_id: request_id.to_string(),
            from_participant: None,
            to_participant: None,
            team_id: None,
            status: RequestStatus::Pending,
            message: None,
            created_at: None,
        }
    }

    fn answer(inbox: Rc<Inbox>, request_id: &str, status: RequestStatus) -> Rc<Inbox> {
        inbox.reduce(InboxAction::Answered {
            request_id: request_id.to_string(),
            status,
        })
    }

    #[test]
    fn test_back_to_back_answers_both_stick() {
        let inbox = Rc::new(Inbox::default())
            .reduce(InboxAction::Loaded(vec![pending("r1"), pending("r2")]));
        let inbox = answer(inbox, "r1", RequestStatus::Accepted);
        let inbox = answer(inbox, "r2", RequestStatus::Declined);

        let statuses: Vec<RequestStatus> = inbox.0.items().iter().map(|n| n.status).collect();
        assert_eq!(
            statuses,
            vec![RequestStatus::Accepted, RequestStatus::Declined]
        );
        assert_eq!(inbox.0.pending_count(), 0);
    }

    #[test]
    fn test_reload_replaces_patched_list() {
        let inbox = Rc::new(Inbox::default()).reduce(InboxAction::Loaded(vec![pending("r1")]));
        let inbox = answer(inbox, "r1", RequestStatus::Accepted);
        let inbox = inbox.reduce(InboxAction::Loaded(vec![pending("r3")]));
        assert_eq!(inbox.0.items().len(), 1);
        assert_eq!(inbox.0.pending_count(), 1);
    }
}
