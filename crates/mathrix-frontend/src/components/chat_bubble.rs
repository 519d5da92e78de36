use yew::prelude::*;

use mathrix::registration::{Author, ChatMessage};

#[derive(Properties, PartialEq)]
pub struct ChatBubbleProps {
    pub message: ChatMessage,
    /// Rendered under the text, e.g. the conflict choices.
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ChatBubble)]
pub fn chat_bubble(props: &ChatBubbleProps) -> Html {
    let author = props.message.author;
    let row = if author == Author::User {
        "flex justify-end mb-4"
    } else {
        "flex justify-start mb-4"
    };
    let bubble = match author {
        Author::User => "bg-blue-600 text-white",
        Author::System => {
            "bg-green-50 dark:bg-green-900/20 text-green-800 dark:text-green-200 border border-green-200 dark:border-green-800"
        }
        Author::Options => {
            "bg-purple-50 dark:bg-purple-900/20 text-purple-900 dark:text-purple-100 border border-purple-200 dark:border-purple-800"
        }
        Author::Edit => {
            "bg-blue-50 dark:bg-blue-900/20 text-blue-900 dark:text-blue-100 border border-blue-200 dark:border-blue-800"
        }
        Author::Bot => "bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700",
    };

    html! {
        <div class={row}>
            <div class={classes!("max-w-md", "px-4", "py-3", "rounded-2xl", "shadow-sm", bubble)}>
                <p class="text-sm leading-relaxed whitespace-pre-line">{ &props.message.content }</p>
                { props.children.clone() }
            </div>
        </div>
    }
}
