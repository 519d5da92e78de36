use yew::prelude::*;

use mathrix::catalog;

#[derive(Properties, PartialEq)]
pub struct ClusterBadgeProps {
    pub cluster: Option<u32>,
}

#[function_component(ClusterBadge)]
pub fn cluster_badge(props: &ClusterBadgeProps) -> Html {
    let Some(id) = props.cluster else {
        return html! {};
    };

    html! {
        <span class={classes!("inline-block", "px-2", "py-0.5", "text-xs", "font-medium", "rounded-full", catalog::cluster_badge(id))}>
            { catalog::cluster_name(id).to_string() }
        </span>
    }
}
