use yew::prelude::*;

use mathrix::catalog;
use mathrix::data::Participant;

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub participant: Participant,
    #[prop_or(false)]
    pub large: bool,
}

/// Round initial badge, tinted by the participant's interest cluster.
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let tint = props
        .participant
        .interest_cluster
        .map_or("bg-blue-500", catalog::cluster_accent);
    let size = if props.large { "h-14 w-14 text-xl" } else { "h-10 w-10 text-sm" };

    html! {
        <div class={classes!("rounded-full", "flex", "items-center", "justify-center", "shrink-0", tint, size)}>
            <span class="font-medium text-white">{ props.participant.initial() }</span>
        </div>
    }
}
