use yew::prelude::*;

use mathrix::async_callback;
use mathrix::catalog::{cluster_accent, cluster_name};
use mathrix::data::{MAX_TEAM_SIZE, SystemOverview};
use mathrix::log::error;

use crate::components::{ApiStatusIndicator, CARD_CLASSES, ErrorPanel, Spinner, TEXT_SECONDARY};
use crate::providers::api;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Clusters,
    Teams,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Overview, Tab::Clusters, Tab::Teams];

    fn label(self) -> &'static str {
        match self {
            Tab::Overview => "📊 System Overview",
            Tab::Clusters => "🧭 Interest Clusters",
            Tab::Teams => "👥 Teams",
        }
    }
}

fn stat_card(label: &'static str, value: u32, accent: &'static str) -> Html {
    html! {
        <div class={CARD_CLASSES}>
            <p class={classes!("text-sm", "font-medium", TEXT_SECONDARY)}>{ label }</p>
            <p class={classes!("text-2xl", "font-bold", accent)}>{ value }</p>
        </div>
    }
}

fn figure(value: u32, label: String) -> Html {
    html! {
        <div class="text-center p-4 bg-gray-50 dark:bg-gray-700 rounded-lg">
            <div class="text-2xl font-bold text-blue-600 dark:text-blue-400">{ value }</div>
            <div class={TEXT_SECONDARY}>{ label }</div>
        </div>
    }
}

fn overview_tab(overview: &SystemOverview) -> Html {
    let participants = &overview.participants;
    let auto = &overview.auto_assignment;

    html! {
        <div class="space-y-8">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                { stat_card("Total Participants", participants.total, "text-blue-600 dark:text-blue-400") }
                { stat_card("Total Teams", overview.teams.total, "text-green-600 dark:text-green-400") }
                { stat_card("Unassigned", participants.unassigned, "text-yellow-600 dark:text-yellow-400") }
                { stat_card("Assigned", participants.assigned, "text-purple-600 dark:text-purple-400") }
            </div>

            <div class={CARD_CLASSES}>
                <div class="flex items-center justify-between mb-2">
                    <h2 class="text-xl font-semibold">{ "Assignment Progress" }</h2>
                    <span class={TEXT_SECONDARY}>{ format!("{:.1}%", overview.assignment_rate()) }</span>
                </div>
                <div class="w-full h-3 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden">
                    <div class="h-3 bg-blue-600 rounded-full" style={format!("width: {:.1}%", overview.assignment_rate())}></div>
                </div>
            </div>

            <div class={CARD_CLASSES}>
                <h2 class="text-xl font-semibold mb-6">{ "Auto Assignment Analysis" }</h2>
                if let Some(recommendation) = auto.recommendation.as_deref() {
                    <div class="bg-blue-50 dark:bg-blue-900/20 border border-blue-200 dark:border-blue-800 rounded-lg p-4 mb-4">
                        <h3 class="font-medium text-blue-900 dark:text-blue-200 mb-2">{ "Recommendation" }</h3>
                        <p class="text-blue-800 dark:text-blue-300">{ recommendation }</p>
                    </div>
                }
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    { figure(auto.total_participants, "Unassigned".to_string()) }
                    { figure(auto.optimal_teams, "Optimal Teams".to_string()) }
                    { figure(auto.remaining_participants, "Remaining".to_string()) }
                </div>
            </div>
        </div>
    }
}

fn clusters_tab(overview: &SystemOverview) -> Html {
    let counts = overview.cluster_counts();
    let largest = counts.iter().map(|(_, count)| *count).max().unwrap_or(0);

    html! {
        <div class={CARD_CLASSES}>
            <h2 class="text-xl font-semibold mb-6">{ "Interest Cluster Distribution" }</h2>
            if counts.is_empty() {
                <p class={TEXT_SECONDARY}>{ "No participants have an interest cluster yet." }</p>
            } else {
                <div class="space-y-4">
                    { for counts.iter().map(|&(cluster, count)| {
                        let width = if largest == 0 { 0.0 } else { f64::from(count) * 100.0 / f64::from(largest) };
                        html! {
                            <div key={cluster}>
                                <div class="flex items-center justify-between mb-1">
                                    <span class="font-medium">{ cluster_name(cluster).to_string() }</span>
                                    <span class={TEXT_SECONDARY}>{ count }</span>
                                </div>
                                <div class="w-full h-3 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden">
                                    <div class={classes!("h-3", "rounded-full", cluster_accent(cluster))} style={format!("width: {width:.1}%")}></div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }
        </div>
    }
}

fn teams_tab(overview: &SystemOverview) -> Html {
    let statistics = &overview.teams.statistics;

    html! {
        <div class={CARD_CLASSES}>
            <h2 class="text-xl font-semibold mb-6">{ "Team Statistics" }</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                { figure(statistics.full_teams, format!("Full Teams ({MAX_TEAM_SIZE} members)")) }
                { figure(statistics.teams_with_members, "Teams with Members".to_string()) }
                { figure(statistics.empty_teams, "Empty Teams".to_string()) }
            </div>
        </div>
    }
}

#[function_component(AdminDashboardPage)]
pub fn admin_dashboard_page() -> Html {
    let api = use_memo((), |_| api::create());
    let overview = use_state(|| None::<SystemOverview>);
    let loading = use_state(|| true);
    let error_msg = use_state(|| None::<String>);
    let tab = use_state(|| Tab::Overview);

    let load_overview = async_callback!([api, overview, loading, error_msg] {
        loading.set(true);
        error_msg.set(None);
        match api.system_overview().await {
            Ok(data) => overview.set(Some(data)),
            Err(err) => {
                error!("Error fetching system overview: {err}");
                error_msg.set(Some("Failed to load system overview".to_string()));
            }
        }
        loading.set(false);
    });

    {
        let load_overview = load_overview.clone();
        use_effect_with((), move |_| load_overview.emit(()));
    }

    if *loading {
        return html! { <Spinner label="Loading system overview..." /> };
    }

    let Some(data) = (*overview).clone() else {
        let message = (*error_msg)
            .clone()
            .unwrap_or_else(|| "Failed to load system data".to_string());
        let on_retry = Callback::from(move |_: MouseEvent| load_overview.emit(()));
        return html! {
            <div class="max-w-4xl mx-auto px-6 py-10">
                <ErrorPanel title="Admin dashboard unavailable" {message} on_retry={Some(on_retry)} />
            </div>
        };
    };

    let tabs = Tab::ALL
        .iter()
        .map(|&item| {
            let onclick = {
                let tab = tab.clone();
                Callback::from(move |_: MouseEvent| tab.set(item))
            };
            let classes = if *tab == item {
                "border-blue-500 text-blue-600 dark:text-blue-400"
            } else {
                "border-transparent text-gray-500 dark:text-gray-400 hover:text-gray-700 dark:hover:text-gray-200"
            };
            html! {
                <button class={classes!("py-4", "px-1", "border-b-2", "font-medium", "text-sm", "transition-colors", classes)} {onclick}>
                    { item.label() }
                </button>
            }
        })
        .collect::<Html>();

    let content = match *tab {
        Tab::Overview => overview_tab(&data),
        Tab::Clusters => clusters_tab(&data),
        Tab::Teams => teams_tab(&data),
    };

    html! {
        <div class="max-w-7xl mx-auto px-6 py-10">
            <div class="flex items-center justify-between mb-8">
                <div>
                    <h1 class="text-3xl font-bold">{ "Admin Dashboard" }</h1>
                    <p class={TEXT_SECONDARY}>{ "System overview and administrative functions" }</p>
                </div>
                <ApiStatusIndicator />
            </div>
            <nav class="flex space-x-8 border-b border-gray-200 dark:border-gray-600 mb-8">{ tabs }</nav>
            { content }
        </div>
    }
}
