use gloo_events::EventListener;
use yew::prelude::*;

/// Whether the window is scrolled past `threshold` pixels.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with(threshold, move |&threshold| {
            let listener = web_sys::window().map(|window| {
                let target = window.clone();
                EventListener::new(&window, "scroll", move |_| {
                    let offset = target.scroll_y().unwrap_or_default();
                    scrolled.set(offset > threshold);
                })
            });
            move || drop(listener)
        });
    }

    *scrolled
}
