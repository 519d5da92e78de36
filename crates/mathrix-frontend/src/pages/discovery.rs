//! Teammate discovery: filtered candidates and open teams, team requests,
//! and the incoming/outgoing request lists.

use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use mathrix::async_callback;
use mathrix::catalog::{CLUSTERS, DEPARTMENTS, TEAM_SIZE_LIMITS, YEARS};
use mathrix::data::{
    DiscoveryFilters, DiscoveryResponse, MAX_REQUEST_MESSAGE_LEN, RequestStatus, RequestTarget,
    RequestsResponse, TeamMatch, TeamRequest, TeammateMatch,
};
use mathrix::log::{error, info};

use crate::components::{
    Avatar, CARD_CLASSES, ClusterBadge, INPUT_CLASSES, PRIMARY_BUTTON, Spinner, TEXT_SECONDARY,
};
use crate::dialogs;
use crate::providers::api;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Discover,
    Join,
    Requests,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Discover, Tab::Join, Tab::Requests];

    fn label(self) -> &'static str {
        match self {
            Tab::Discover => "🔍 Find Teammate for New Team",
            Tab::Join => "➕ Join Teams",
            Tab::Requests => "💬 Team Requests",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterKind {
    Cluster,
    Department,
    Year,
    MaxTeamSize,
}

fn apply_filter(filters: &DiscoveryFilters, kind: FilterKind, value: &str) -> DiscoveryFilters {
    let mut next = filters.clone();
    match kind {
        FilterKind::Cluster => next.interest_cluster = value.parse().ok(),
        FilterKind::Department => {
            next.department = (!value.is_empty()).then(|| value.to_string());
        }
        FilterKind::Year => next.year = value.parse().ok(),
        FilterKind::MaxTeamSize => {
            if let Ok(size) = value.parse() {
                next.max_team_size = size;
            }
        }
    }
    next
}

fn status_classes(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => {
            "bg-yellow-100 dark:bg-yellow-900/30 text-yellow-800 dark:text-yellow-200"
        }
        RequestStatus::Accepted => {
            "bg-green-100 dark:bg-green-900/30 text-green-800 dark:text-green-200"
        }
        RequestStatus::Declined => "bg-red-100 dark:bg-red-900/30 text-red-800 dark:text-red-200",
    }
}

fn reasons_list(reasons: &[String]) -> Html {
    html! {
        <ul class={classes!("text-sm", "space-y-1", TEXT_SECONDARY)}>
            { for reasons.iter().map(|reason| html! {
                <li class="flex items-center space-x-2">
                    <span class="w-1.5 h-1.5 bg-blue-400 rounded-full"></span>
                    <span>{ reason }</span>
                </li>
            }) }
        </ul>
    }
}

fn teammate_card(candidate: &TeammateMatch, on_select: Callback<RequestTarget>) -> Html {
    let participant = candidate.participant.clone();
    let target = RequestTarget::Participant(participant.clone());
    let onclick = Callback::from(move |_: MouseEvent| on_select.emit(target.clone()));
    let score = candidate
        .compatibility_score
        .map(|score| score.to_string())
        .unwrap_or_else(|| "-".to_string());

    html! {
        <div key={participant.participant_id.clone()} class={CARD_CLASSES}>
            <div class="flex items-center justify-between mb-4">
                <div class="flex items-center space-x-3">
                    <Avatar participant={participant.clone()} />
                    <div>
                        <h3 class="font-semibold">{ &participant.name }</h3>
                        <p class={classes!("text-sm", TEXT_SECONDARY)}>{ participant.department.clone().unwrap_or_default() }</p>
                    </div>
                </div>
                <div class="text-right">
                    <div class="text-2xl font-bold text-blue-600 dark:text-blue-400">{ score }</div>
                    <div class="text-xs text-gray-500 dark:text-gray-400">{ "Score" }</div>
                </div>
            </div>
            <div class="mb-4 flex items-center space-x-2">
                <ClusterBadge cluster={participant.interest_cluster} />
                if let Some(year) = participant.year {
                    <span class={classes!("text-sm", TEXT_SECONDARY)}>{ format!("Year {year}") }</span>
                }
            </div>
            if !candidate.reasons.is_empty() {
                <div class="mb-4">
                    <h4 class="font-medium mb-2">{ "Why they're a great match:" }</h4>
                    { reasons_list(&candidate.reasons) }
                </div>
            }
            <button class={classes!("w-full", PRIMARY_BUTTON)} {onclick}>{ "Send Team Request" }</button>
        </div>
    }
}

fn team_card(candidate: &TeamMatch, on_select: Callback<RequestTarget>) -> Html {
    let team = candidate.team.clone();
    let target = RequestTarget::Team(team.clone());
    let onclick = Callback::from(move |_: MouseEvent| on_select.emit(target.clone()));

    html! {
        <div key={team.team_id.clone()} class={CARD_CLASSES}>
            <h3 class="text-xl font-semibold mb-2">{ &team.team_name }</h3>
            <div class={classes!("flex", "items-center", "space-x-2", "text-sm", "mb-4", TEXT_SECONDARY)}>
                <span>{ format!("{} members", team.size()) }</span>
                <span>{ "•" }</span>
                <span>{ format!("{} open slots", candidate.open_slots) }</span>
            </div>
            if !candidate.reasons.is_empty() {
                <div class="mb-4">
                    <h4 class="font-medium mb-2">{ "Why this team is great:" }</h4>
                    { reasons_list(&candidate.reasons) }
                </div>
            }
            <button class="w-full px-4 py-2 border border-blue-600 text-blue-600 dark:text-blue-400 rounded-md hover:bg-blue-50 dark:hover:bg-blue-900/20" {onclick}>
                { "Request to Join Team" }
            </button>
        </div>
    }
}

fn request_card(
    request: &TeamRequest,
    incoming: bool,
    on_respond: &Callback<(String, RequestStatus)>,
) -> Html {
    let counterpart = if incoming {
        request.from_participant.as_ref()
    } else {
        request.to_participant.as_ref()
    };
    let respond = |status: RequestStatus| {
        let on_respond = on_respond.clone();
        let request_id = request.request_id.clone();
        Callback::from(move |_: MouseEvent| on_respond.emit((request_id.clone(), status)))
    };

    html! {
        <div key={request.request_id.clone()} class={CARD_CLASSES}>
            <div class="flex items-center justify-between mb-4">
                <div class="flex items-center space-x-3">
                    if let Some(participant) = counterpart {
                        <Avatar participant={participant.clone()} />
                        <div>
                            <h3 class="font-semibold">{ &participant.name }</h3>
                            <p class={classes!("text-sm", TEXT_SECONDARY)}>{ participant.department.clone().unwrap_or_default() }</p>
                        </div>
                    } else {
                        <h3 class="font-semibold">{ "Unknown participant" }</h3>
                    }
                </div>
                <span class={classes!("px-3", "py-1", "rounded-full", "text-sm", "font-medium", status_classes(request.status))}>
                    { request.status.as_str() }
                </span>
            </div>
            if let Some(message) = request.message.as_deref().filter(|m| !m.is_empty()) {
                <div class="mb-4 p-3 bg-gray-50 dark:bg-gray-700 rounded-lg">
                    <p>{ message }</p>
                </div>
            }
            if incoming && request.status.is_pending() {
                <div class="flex space-x-3">
                    <button class={classes!("flex-1", PRIMARY_BUTTON)} onclick={respond(RequestStatus::Accepted)}>
                        { "Accept Request" }
                    </button>
                    <button class="flex-1 px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-md hover:bg-gray-50 dark:hover:bg-gray-700" onclick={respond(RequestStatus::Declined)}>
                        { "Decline Request" }
                    </button>
                </div>
            }
        </div>
    }
}

fn request_section(
    title: &str,
    requests: &[TeamRequest],
    incoming: bool,
    on_respond: &Callback<(String, RequestStatus)>,
) -> Html {
    let empty = if incoming {
        "No incoming requests yet"
    } else {
        "No outgoing requests yet"
    };

    html! {
        <div>
            <h2 class="text-2xl font-bold mb-4">{ format!("{title} ({})", requests.len()) }</h2>
            if requests.is_empty() {
                <div class={classes!("text-center", "py-12", CARD_CLASSES, TEXT_SECONDARY)}>{ empty }</div>
            } else {
                <div class="space-y-4">
                    { for requests.iter().map(|request| request_card(request, incoming, on_respond)) }
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TeammateDiscoveryPageProps {
    pub participant_id: String,
}

#[function_component(TeammateDiscoveryPage)]
pub fn teammate_discovery_page(props: &TeammateDiscoveryPageProps) -> Html {
    let api = use_memo((), |_| api::create());
    let tab = use_state(|| Tab::Discover);
    let filters = use_state(DiscoveryFilters::default);
    let discovery = use_state(|| None::<DiscoveryResponse>);
    let requests = use_state(|| None::<RequestsResponse>);
    let loading = use_state(|| true);
    let selected = use_state(|| None::<RequestTarget>);
    let message = use_state(String::new);
    let sending = use_state(|| false);

    let participant_id = props.participant_id.clone();

    let load_requests = async_callback!([api, requests, participant_id] {
        match api.requests(&participant_id).await {
            Ok(data) => requests.set(Some(data)),
            Err(err) => error!("Error loading requests: {err}"),
        }
    });

    {
        let api = api.clone();
        let discovery = discovery.clone();
        let loading = loading.clone();
        let load_requests = load_requests.clone();
        use_effect_with(
            (props.participant_id.clone(), (*filters).clone()),
            move |(participant_id, filters)| {
                let participant_id = participant_id.clone();
                let filters = filters.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match api.discover(&participant_id, &filters).await {
                        Ok(data) => discovery.set(Some(data)),
                        Err(err) => error!("Error loading discovery data: {err}"),
                    }
                    loading.set(false);
                });
                load_requests.emit(());
            },
        );
    }

    let on_filter = |kind: FilterKind| {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                filters.set(apply_filter(&filters, kind, &select.value()));
            }
        })
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |target: RequestTarget| selected.set(Some(target)))
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                message.set(area.value().chars().take(MAX_REQUEST_MESSAGE_LEN).collect());
            }
        })
    };

    let on_cancel = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let on_send = async_callback!([api, selected, message, sending, participant_id, load_requests] {
        let Some(target) = (*selected).clone() else {
            return;
        };
        if *sending {
            return;
        }

        sending.set(true);
        match api.send_request(&participant_id, &target.to_request(&message)).await {
            Ok(_) => {
                info!("Sent team request to {}", target.display_name());
                message.set(String::new());
                selected.set(None);
                load_requests.emit(());
                dialogs::alert("Team request sent successfully!");
            }
            Err(err) => {
                error!("Error sending team request: {err}");
                dialogs::alert(err.detail().unwrap_or("Failed to send request"));
            }
        }
        sending.set(false);
    });

    let on_respond = async_callback!([api, participant_id, load_requests] |response: (String, RequestStatus)| {
        let (request_id, status) = response;
        match api.respond_request(&request_id, &participant_id, status).await {
            Ok(_) => {
                load_requests.emit(());
                dialogs::alert(if status == RequestStatus::Accepted {
                    "Request accepted! You are now teammates!"
                } else {
                    "Request declined"
                });
            }
            Err(err) => {
                error!("Error responding to request {request_id}: {err}");
                dialogs::alert(err.detail().unwrap_or("Failed to respond to request"));
            }
        }
    });

    if *loading {
        return html! { <Spinner label="Discovering teammates..." /> };
    }

    let tabs = Tab::ALL
        .iter()
        .map(|&item| {
            let active = *tab == item;
            let onclick = {
                let tab = tab.clone();
                Callback::from(move |_: MouseEvent| tab.set(item))
            };
            let classes = if active {
                "border-blue-500 text-blue-600 dark:text-blue-400"
            } else {
                "border-transparent text-gray-500 dark:text-gray-400 hover:text-gray-700 dark:hover:text-gray-200"
            };
            html! {
                <button class={classes!("py-2", "px-1", "border-b-2", "font-medium", "text-sm", classes)} {onclick}>
                    { item.label() }
                </button>
            }
        })
        .collect::<Html>();

    let filter_panel = html! {
        <div class={classes!("mb-6", CARD_CLASSES)}>
            <h3 class="text-lg font-medium mb-4">{ "Discovery Filters" }</h3>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <select class={INPUT_CLASSES} onchange={on_filter(FilterKind::Cluster)}>
                    <option value="" selected={filters.interest_cluster.is_none()}>{ "All Interest Areas" }</option>
                    { for CLUSTERS.iter().map(|cluster| html! {
                        <option value={cluster.id.to_string()} selected={filters.interest_cluster == Some(cluster.id)}>{ cluster.name }</option>
                    }) }
                </select>
                <select class={INPUT_CLASSES} onchange={on_filter(FilterKind::Department)}>
                    <option value="" selected={filters.department.is_none()}>{ "All Departments" }</option>
                    { for DEPARTMENTS.iter().map(|department| html! {
                        <option value={*department} selected={filters.department.as_deref() == Some(*department)}>{ *department }</option>
                    }) }
                </select>
                <select class={INPUT_CLASSES} onchange={on_filter(FilterKind::Year)}>
                    <option value="" selected={filters.year.is_none()}>{ "All Years" }</option>
                    { for YEARS.iter().map(|year| html! {
                        <option value={year.to_string()} selected={filters.year == Some(*year)}>{ format!("Year {year}") }</option>
                    }) }
                </select>
                <select class={INPUT_CLASSES} onchange={on_filter(FilterKind::MaxTeamSize)}>
                    { for TEAM_SIZE_LIMITS.iter().map(|size| html! {
                        <option value={size.to_string()} selected={filters.max_team_size == *size}>{ format!("Max {size} members") }</option>
                    }) }
                </select>
            </div>
        </div>
    };

    let content = match *tab {
        Tab::Discover => match (*discovery).as_ref() {
            Some(data) => html! {
                <div class="space-y-6">
                    <div>
                        <h2 class="text-2xl font-bold mb-4">{ format!("Potential Teammates ({})", data.potential_teammates.len()) }</h2>
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            { for data.potential_teammates.iter().map(|candidate| teammate_card(candidate, on_select.clone())) }
                        </div>
                    </div>
                    <div>
                        <h2 class="text-2xl font-bold mb-4">{ format!("Available Teams ({})", data.available_teams.len()) }</h2>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            { for data.available_teams.iter().map(|candidate| team_card(candidate, on_select.clone())) }
                        </div>
                    </div>
                </div>
            },
            None => html! {
                <p class={classes!("text-center", "py-12", TEXT_SECONDARY)}>{ "Discovery data is unavailable right now." }</p>
            },
        },
        Tab::Join => html! {
            <div class="text-center py-20">
                <h3 class="text-xl font-medium mb-2">{ "Join Teams" }</h3>
                <p class={classes!("mb-6", TEXT_SECONDARY)}>
                    { "Teams you're part of will appear here. You can manage team settings and accept new members." }
                </p>
                <Link<Route> to={Route::Dashboard} classes="inline-block px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-md">
                    { "Go to Dashboard" }
                </Link<Route>>
            </div>
        },
        Tab::Requests => match (*requests).as_ref() {
            Some(data) => html! {
                <div class="space-y-6">
                    { request_section("Incoming Requests", &data.incoming_requests, true, &on_respond) }
                    { request_section("Outgoing Requests", &data.outgoing_requests, false, &on_respond) }
                </div>
            },
            None => html! { <Spinner label="Loading requests..." /> },
        },
    };

    let modal = (*selected).as_ref().map(|target| {
        html! {
            <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
                <div class="bg-white dark:bg-gray-800 rounded-lg p-6 max-w-md w-full mx-4">
                    <h3 class="text-lg font-semibold mb-4">{ format!("Send Team Request to {}", target.display_name()) }</h3>
                    <label class="block text-sm font-medium mb-2">{ "Message (optional)" }</label>
                    <textarea
                        class={classes!("h-24", "resize-none", INPUT_CLASSES)}
                        placeholder="Tell them why you'd like to team up..."
                        maxlength={MAX_REQUEST_MESSAGE_LEN.to_string()}
                        value={(*message).clone()}
                        oninput={on_message.clone()}
                    />
                    <div class="text-right text-sm text-gray-500 dark:text-gray-400 mt-1">
                        { format!("{}/{MAX_REQUEST_MESSAGE_LEN}", message.chars().count()) }
                    </div>
                    <div class="flex space-x-3 mt-4">
                        <button class="flex-1 px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-md" onclick={on_cancel.clone()}>
                            { "Cancel" }
                        </button>
                        <button class={classes!("flex-1", PRIMARY_BUTTON)} onclick={on_send.reform(|_: MouseEvent| ())} disabled={*sending}>
                            { if *sending { "Sending..." } else { "Send Request" } }
                        </button>
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <div class="max-w-6xl mx-auto px-6 py-10">
            <div class="flex items-center justify-between mb-8">
                <div>
                    <h1 class="text-3xl font-bold">{ "Find Your Likemate" }</h1>
                    <p class={TEXT_SECONDARY}>{ "Discover teammates and build amazing teams together!" }</p>
                </div>
                <Link<Route> to={Route::Dashboard} classes="px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-md">
                    { "Back to Dashboard" }
                </Link<Route>>
            </div>

            <nav class="mb-6 flex space-x-8 border-b border-gray-200 dark:border-gray-600">{ tabs }</nav>

            if *tab == Tab::Discover {
                { filter_panel }
            }

            <div class="min-h-96">{ content }</div>

            { for modal }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_changes() {
        let filters = DiscoveryFilters::default();

        let by_cluster = apply_filter(&filters, FilterKind::Cluster, "3");
        assert_eq!(by_cluster.interest_cluster, Some(3));

        let cleared = apply_filter(&by_cluster, FilterKind::Cluster, "");
        assert_eq!(cleared.interest_cluster, None);

        let by_department = apply_filter(&filters, FilterKind::Department, "Electronics");
        assert_eq!(by_department.department.as_deref(), Some("Electronics"));
        assert_eq!(
            apply_filter(&by_department, FilterKind::Department, "").department,
            None
        );

        let smaller = apply_filter(&filters, FilterKind::MaxTeamSize, "2");
        assert_eq!(smaller.max_team_size, 2);
        assert_eq!(
            apply_filter(&smaller, FilterKind::MaxTeamSize, "").max_team_size,
            2
        );
    }
}
