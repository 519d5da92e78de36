use yew::prelude::*;
use yew_router::prelude::*;

use mathrix::async_callback;
use mathrix::data::{MAX_TEAM_SIZE, Team};
use mathrix::log::error;

use crate::components::{
    Avatar, CARD_CLASSES, ClusterBadge, CopyCodeButton, ErrorPanel, Spinner, TEXT_SECONDARY,
};
use crate::providers::api;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct TeamDashboardPageProps {
    pub team_id: String,
}

#[function_component(TeamDashboardPage)]
pub fn team_dashboard_page(props: &TeamDashboardPageProps) -> Html {
    let api = use_memo((), |_| api::create());
    let team = use_state(|| None::<Team>);
    let loading = use_state(|| true);
    let error_msg = use_state(|| None::<String>);

    let team_id = props.team_id.clone();
    let load_team = async_callback!([api, team, loading, error_msg, team_id] {
        loading.set(true);
        error_msg.set(None);
        match api.team(&team_id).await {
            Ok(data) => team.set(Some(data)),
            Err(err) => {
                error!("Error fetching team {team_id}: {err}");
                error_msg.set(Some("Failed to load team data".to_string()));
            }
        }
        loading.set(false);
    });

    {
        let load_team = load_team.clone();
        use_effect_with(props.team_id.clone(), move |_| load_team.emit(()));
    }

    if *loading {
        return html! { <Spinner label="Loading team..." /> };
    }

    let Some(team) = (*team).clone() else {
        let message = (*error_msg)
            .clone()
            .unwrap_or_else(|| "Team not found".to_string());
        let on_retry = Callback::from(move |_: MouseEvent| load_team.emit(()));
        return html! {
            <div class="max-w-4xl mx-auto px-6 py-10 space-y-4">
                <ErrorPanel title="Team unavailable" message={message} on_retry={Some(on_retry)} />
                <Link<Route> to={Route::Home} classes="inline-block text-blue-600 dark:text-blue-400 hover:underline">
                    { "Back to Home" }
                </Link<Route>>
            </div>
        };
    };

    let suggestions_route = Route::Suggestions {
        participant_id: team.leader_id.clone(),
    };

    let stat = |value: String, label: &'static str| {
        html! {
            <div class="text-center p-4 bg-gray-50 dark:bg-gray-700 rounded-lg">
                <div class="text-2xl font-bold text-blue-600 dark:text-blue-400">{ value }</div>
                <div class={TEXT_SECONDARY}>{ label }</div>
            </div>
        }
    };

    let members = if team.members.is_empty() {
        html! {
            <div class={classes!("text-center", "py-12", TEXT_SECONDARY)}>
                <p class="text-lg">{ "No team members yet" }</p>
                <p class="text-sm">{ "Start by adding members to your team" }</p>
            </div>
        }
    } else {
        team.members
            .iter()
            .map(|member| {
                let leader = team.is_leader(&member.participant_id);
                html! {
                    <div key={member.participant_id.clone()} class="flex items-center justify-between p-4 border border-gray-200 dark:border-gray-600 rounded-lg">
                        <div class="flex items-center space-x-4">
                            <Avatar participant={member.clone()} large=true />
                            <div>
                                <div class="flex items-center space-x-2">
                                    <h3 class="font-semibold">{ &member.name }</h3>
                                    if leader {
                                        <span title="Team leader">{ "👑" }</span>
                                    }
                                </div>
                                <div class={classes!("text-sm", TEXT_SECONDARY)}>{ member.academic_summary() }</div>
                            </div>
                        </div>
                        <div class="flex items-center space-x-2">
                            <ClusterBadge cluster={member.interest_cluster} />
                            if leader {
                                <span class="px-3 py-1 bg-yellow-100 dark:bg-yellow-900/30 text-yellow-800 dark:text-yellow-200 text-sm font-medium rounded-full">
                                    { "Leader" }
                                </span>
                            }
                        </div>
                    </div>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="max-w-4xl mx-auto px-6 py-10 space-y-8">
            <div class={CARD_CLASSES}>
                <div class="flex items-center justify-between mb-6">
                    <div>
                        <h1 class="text-3xl font-bold">{ &team.team_name }</h1>
                        <p class={TEXT_SECONDARY}>{ "Team Dashboard" }</p>
                    </div>
                    <Link<Route> to={suggestions_route.clone()} classes="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-md">
                        { "Find Teammates" }
                    </Link<Route>>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    { stat(team.size().to_string(), "Team Members") }
                    { stat(MAX_TEAM_SIZE.to_string(), "Max Capacity") }
                    { stat(team.capacity_label(), "Status") }
                </div>
            </div>

            <div class={CARD_CLASSES}>
                <h2 class="text-2xl font-bold mb-6">{ "Team Members" }</h2>
                <div class="grid gap-4">{ members }</div>
            </div>

            if !team.is_full() {
                <div class="bg-blue-50 dark:bg-blue-900/20 border border-blue-200 dark:border-blue-800 rounded-lg p-6">
                    <h3 class="text-lg font-semibold text-blue-900 dark:text-blue-200 mb-3">{ "Team Not Full Yet?" }</h3>
                    <p class="text-blue-700 dark:text-blue-300 mb-4">
                        { format!("You have {} spot(s) remaining. Use teammate suggestions to find the right additions to your team.", team.open_slots()) }
                    </p>
                    <Link<Route> to={suggestions_route} classes="inline-block px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-md">
                        { "Get Teammate Suggestions" }
                    </Link<Route>>
                </div>
            }

            <div class={CARD_CLASSES}>
                <h3 class="text-lg font-semibold mb-4">{ "Team Invite Code" }</h3>
                <div class="flex items-center space-x-4">
                    <div class="flex-1 p-3 bg-gray-100 dark:bg-gray-700 rounded-lg font-mono text-lg">{ &team.team_id }</div>
                    <CopyCodeButton code={team.team_id.clone()} />
                </div>
                <p class={classes!("text-sm", "mt-2", TEXT_SECONDARY)}>{ "Share this code with others so they can join your team" }</p>
            </div>
        </div>
    }
}
