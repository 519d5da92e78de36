use yew::prelude::*;
use yew_router::prelude::*;

use mathrix::async_callback;
use mathrix::catalog::{MatchTier, format_score};
use mathrix::data::{Participant, Suggestion};
use mathrix::log::{error, warn};

use crate::components::{Avatar, CARD_CLASSES, ClusterBadge, ErrorPanel, Spinner, TEXT_SECONDARY};
use crate::providers::api;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct TeammateSuggestionsPageProps {
    pub participant_id: String,
}

fn suggestion_card(suggestion: &Suggestion, participant_id: &str) -> Html {
    let candidate = &suggestion.participant;
    let score_class = MatchTier::for_score(suggestion.match_score).text_class();

    html! {
        <div key={candidate.participant_id.clone()} class="border border-gray-200 dark:border-gray-600 rounded-lg p-6 hover:shadow-md transition-shadow">
            <div class="flex items-start justify-between">
                <div class="flex items-start space-x-4">
                    <Avatar participant={candidate.clone()} large=true />
                    <div class="flex-1">
                        <div class="flex items-center space-x-3 mb-2">
                            <h3 class="text-lg font-semibold">{ &candidate.name }</h3>
                            <ClusterBadge cluster={candidate.interest_cluster} />
                        </div>
                        <div class={classes!("mb-3", TEXT_SECONDARY)}>{ candidate.academic_summary() }</div>
                        <span class={classes!("text-sm", "font-medium", score_class)}>
                            { format!("⭐ Match Score: {}", format_score(suggestion.match_score)) }
                        </span>
                        if !suggestion.reason.is_empty() {
                            <div class="mt-3 p-3 bg-blue-50 dark:bg-blue-900/20 rounded-lg">
                                <p class="text-sm text-blue-800 dark:text-blue-200">
                                    <strong>{ "Why this match? " }</strong>{ &suggestion.reason }
                                </p>
                            </div>
                        }
                    </div>
                </div>
                <Link<Route>
                    to={Route::Discovery { participant_id: participant_id.to_string() }}
                    classes="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-md whitespace-nowrap"
                >
                    { "Invite" }
                </Link<Route>>
            </div>
        </div>
    }
}

#[function_component(TeammateSuggestionsPage)]
pub fn teammate_suggestions_page(props: &TeammateSuggestionsPageProps) -> Html {
    let api = use_memo((), |_| api::create());
    let suggestions = use_state(Vec::<Suggestion>::new);
    let participant = use_state(|| None::<Participant>);
    let loading = use_state(|| true);
    let error_msg = use_state(|| None::<String>);

    let participant_id = props.participant_id.clone();
    let load = async_callback!([api, suggestions, participant, loading, error_msg, participant_id] {
        loading.set(true);
        error_msg.set(None);
        match api.suggestions(&participant_id).await {
            Ok(items) => suggestions.set(items),
            Err(err) => {
                error!("Error fetching suggestions for {participant_id}: {err}");
                error_msg.set(Some("Failed to load teammate suggestions".to_string()));
            }
        }
        loading.set(false);

        // The profile card is optional; the list renders without it.
        match api.participant(&participant_id).await {
            Ok(info) => participant.set(Some(info)),
            Err(err) => warn!("Error fetching participant {participant_id}: {err}"),
        }
    });

    {
        let load = load.clone();
        use_effect_with(props.participant_id.clone(), move |_| load.emit(()));
    }

    if *loading {
        return html! { <Spinner label="Finding teammates..." /> };
    }

    if let Some(message) = (*error_msg).clone() {
        let on_retry = Callback::from(move |_: MouseEvent| load.emit(()));
        return html! {
            <div class="max-w-4xl mx-auto px-6 py-10">
                <ErrorPanel title="Suggestions unavailable" {message} on_retry={Some(on_retry)} />
            </div>
        };
    }

    let list = if suggestions.is_empty() {
        html! {
            <div class={classes!("text-center", "py-12", TEXT_SECONDARY)}>
                <p class="text-lg">{ "No suggestions available" }</p>
                <p class="text-sm">{ "All potential teammates might already be assigned to teams" }</p>
            </div>
        }
    } else {
        suggestions
            .iter()
            .map(|suggestion| suggestion_card(suggestion, &props.participant_id))
            .collect::<Html>()
    };

    html! {
        <div class="max-w-4xl mx-auto px-6 py-10 space-y-8">
            <div>
                <Link<Route> to={Route::Dashboard} classes="inline-flex items-center text-blue-600 dark:text-blue-400 hover:underline mb-4">
                    { "← Back to Dashboard" }
                </Link<Route>>
                <div class="text-center">
                    <h1 class="text-3xl font-bold mb-2">{ "Teammate Suggestions" }</h1>
                    <p class={TEXT_SECONDARY}>{ "Recommendations based on skill diversity and interests" }</p>
                </div>
            </div>

            if let Some(profile) = (*participant).clone() {
                <div class={CARD_CLASSES}>
                    <h2 class="text-xl font-semibold mb-4">{ "Your Profile" }</h2>
                    <div class="flex items-center space-x-4">
                        <Avatar participant={profile.clone()} large=true />
                        <div>
                            <h3 class="text-lg font-semibold">{ &profile.name }</h3>
                            <div class={TEXT_SECONDARY}>{ profile.academic_summary() }</div>
                            <div class="mt-2"><ClusterBadge cluster={profile.interest_cluster} /></div>
                        </div>
                    </div>
                </div>
            }

            <div class={CARD_CLASSES}>
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-2xl font-bold">{ "Recommended Teammates" }</h2>
                    <div class={TEXT_SECONDARY}>{ format!("{} suggestions found", suggestions.len()) }</div>
                </div>
                <div class="space-y-4">{ list }</div>
            </div>
        </div>
    }
}
