use yew::prelude::*;

use mathrix::catalog::SKILLS;

#[derive(Properties, PartialEq)]
pub struct SkillPickerProps {
    pub selected: Vec<String>,
    pub on_toggle: Callback<String>,
    pub on_submit: Callback<()>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(SkillPicker)]
pub fn skill_picker(props: &SkillPickerProps) -> Html {
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };

    html! {
        <div class="space-y-4">
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-3">
                { for SKILLS.iter().map(|skill| {
                    let selected = props.selected.iter().any(|id| id == skill.id);
                    let onclick = {
                        let on_toggle = props.on_toggle.clone();
                        let id = skill.id.to_string();
                        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
                    };
                    let classes = if selected {
                        "border-blue-500 bg-blue-50 dark:bg-blue-900/30 text-blue-800 dark:text-blue-200"
                    } else {
                        "border-gray-200 dark:border-gray-700 hover:border-blue-300 dark:hover:border-blue-600"
                    };
                    html! {
                        <button
                            key={skill.id}
                            type="button"
                            class={classes!("flex", "items-center", "space-x-2", "px-3", "py-2", "border-2", "rounded-lg", "text-sm", "text-left", "transition-colors", classes)}
                            {onclick}
                            disabled={props.disabled}
                        >
                            <span class="text-lg">{ skill.emoji }</span>
                            <span>{ skill.name }</span>
                        </button>
                    }
                }) }
            </div>
            <div class="flex items-center justify-between">
                <span class="text-sm text-gray-600 dark:text-gray-400">
                    { format!("{} selected", props.selected.len()) }
                </span>
                <button
                    type="button"
                    class={super::PRIMARY_BUTTON}
                    onclick={on_submit}
                    disabled={props.disabled}
                >
                    { "Continue" }
                </button>
            </div>
        </div>
    }
}
