use web_sys::window;
use yew::prelude::*;

use mathrix::theme::Theme;

use super::storage::BrowserStore;

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

fn prefers_dark() -> bool {
    window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

fn apply(theme: Theme) {
    let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let class_list = html.class_list();
    let result = if theme.is_dark() {
        class_list.add_1("dark")
    } else {
        class_list.remove_1("dark")
    };
    if let Err(err) = result {
        mathrix::log::warn!("Failed to apply {theme} theme: {err:?}");
    }
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| {
        Theme::load(&BrowserStore).unwrap_or_else(|| {
            if prefers_dark() {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
    });

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            if let Err(err) = next.persist(&BrowserStore) {
                mathrix::log::warn!("Theme preference not saved: {err}");
            }
            theme.set(next);
        })
    };

    use_effect_with(*theme, |theme| apply(*theme));

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeProvider")
}
