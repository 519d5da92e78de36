//! The chat-style registration page.
//!
//! The wizard lives in a reducer. Whatever [`Effect`] a dispatched event
//! produces is queued in the state's outbox; an effect keyed on the outbox
//! ticket drains it, runs each effect against the API and dispatches the
//! resulting event back.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use mathrix::catalog;
use mathrix::config::{EMAIL_CHECK_DEBOUNCE_MS, REGISTRATION_REDIRECT_MS, USN_CHECK_DEBOUNCE_MS};
use mathrix::data::Participant;
use mathrix::registration::{
    Author, Availability, ConflictChoice, ConflictKind, Effect, Field, Phase, RegistrationWizard,
    Step, StepKind, WizardEvent, perform,
};

use crate::components::{CARD_CLASSES, ChatBubble, INPUT_CLASSES, PRIMARY_BUTTON, SkillPicker, TEXT_SECONDARY};
use crate::hooks::use_debounce;
use crate::providers::{api, use_session};
use crate::routes::Route;

#[derive(Clone, Default)]
struct WizardState {
    wizard: RegistrationWizard,
    outbox: Rc<RefCell<VecDeque<Effect>>>,
    /// Bumped whenever an effect is queued.
    ticket: u64,
}

impl Reducible for WizardState {
    type Action = WizardEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        if let Some(effect) = state.wizard.handle(action) {
            state.outbox.borrow_mut().push_back(effect);
            state.ticket += 1;
        }
        Rc::new(state)
    }
}

fn availability_hint(field: Field, availability: Availability) -> Html {
    let (class, text) = match (field, availability) {
        (_, Availability::Unknown) => return html! {},
        (_, Availability::Checking) => ("text-gray-500", "Checking availability..."),
        (Field::Email, Availability::Available) => ("text-green-600 dark:text-green-400", "Email is available! ✅"),
        (_, Availability::Available) => ("text-green-600 dark:text-green-400", "USN is available! ✅"),
        (Field::Email, Availability::Taken) => (
            "text-red-600 dark:text-red-400",
            "This email is already registered. Please use a different email or login instead.",
        ),
        (_, Availability::Taken) => (
            "text-red-600 dark:text-red-400",
            "This USN is already registered. Please use a different USN.",
        ),
        (_, Availability::Unverified) => (
            "text-yellow-600 dark:text-yellow-400",
            "Couldn't verify availability right now.",
        ),
    };
    html! { <p class={classes!("mt-2", "text-sm", class)}>{ text }</p> }
}

#[function_component(RegistrationPage)]
pub fn registration_page() -> Html {
    let api = use_memo((), |_| api::create());
    let session = use_session();
    let navigator = use_navigator();
    let state = use_reducer(WizardState::default);
    let input = use_state(String::new);
    let messages_container_ref = use_node_ref();

    // Run queued effects and feed their outcome back into the wizard.
    {
        let outbox = state.outbox.clone();
        let dispatcher = state.dispatcher();
        let api = api.clone();
        use_effect_with(state.ticket, move |_| {
            let effects: Vec<Effect> = outbox.borrow_mut().drain(..).collect();
            for effect in effects {
                let api = api.clone();
                let dispatcher = dispatcher.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let event = perform(api.as_ref(), effect).await;
                    dispatcher.dispatch(event);
                });
            }
        });
    }

    // Persist the new participant and move on to the dashboard.
    {
        let set_participant = session.set_participant.clone();
        let navigator = navigator.clone();
        use_effect_with(state.wizard.registered().cloned(), move |registered: &Option<Participant>| {
            let redirect = registered.clone().map(|participant| {
                set_participant.emit(participant);
                Timeout::new(REGISTRATION_REDIRECT_MS, move || {
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::Dashboard);
                    }
                })
            });
            move || drop(redirect)
        });
    }

    {
        let messages_container_ref = messages_container_ref.clone();
        use_effect_with(state.wizard.transcript().len(), move |_| {
            if let Some(container) = messages_container_ref.cast::<web_sys::HtmlElement>() {
                container.set_scroll_top(container.scroll_height());
            }
        });
    }

    let email_live_check = {
        let dispatcher = state.dispatcher();
        use_debounce(
            EMAIL_CHECK_DEBOUNCE_MS,
            Callback::from(move |value: String| {
                dispatcher.dispatch(WizardEvent::LiveCheckDue {
                    field: Field::Email,
                    value,
                })
            }),
        )
    };
    let usn_live_check = {
        let dispatcher = state.dispatcher();
        use_debounce(
            USN_CHECK_DEBOUNCE_MS,
            Callback::from(move |value: String| {
                dispatcher.dispatch(WizardEvent::LiveCheckDue {
                    field: Field::Usn,
                    value,
                })
            }),
        )
    };

    let wizard = &state.wizard;
    let step = wizard.step();
    let busy = wizard.is_busy();

    let on_input = {
        let input = input.clone();
        let dispatcher = state.dispatcher();
        let email_live_check = email_live_check.clone();
        let usn_live_check = usn_live_check.clone();
        Callback::from(move |e: InputEvent| {
            let Some(element) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let value = element.value();
            match step.field() {
                Some(field @ Field::Email) => {
                    dispatcher.dispatch(WizardEvent::InputChanged { field, value: value.clone() });
                    email_live_check.emit(value.clone());
                }
                Some(field @ Field::Usn) => {
                    dispatcher.dispatch(WizardEvent::InputChanged { field, value: value.clone() });
                    usn_live_check.emit(value.clone());
                }
                _ => {}
            }
            input.set(value);
        })
    };

    let on_submit_input = {
        let input = input.clone();
        let dispatcher = state.dispatcher();
        let email_live_check = email_live_check.clone();
        let usn_live_check = usn_live_check.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if input.trim().is_empty() {
                return;
            }
            // The step check supersedes any live check still waiting to fire.
            email_live_check.cancel();
            usn_live_check.cancel();
            dispatcher.dispatch(WizardEvent::SubmitInput((*input).clone()));
            input.set(String::new());
        })
    };

    let on_toggle_skill = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: String| dispatcher.dispatch(WizardEvent::ToggleSkill(id)))
    };

    let on_submit_skills = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(WizardEvent::SubmitSkills))
    };

    let on_edit = {
        let dispatcher = state.dispatcher();
        let input = input.clone();
        let form = wizard.form().clone();
        move |field: Field| {
            let dispatcher = dispatcher.clone();
            let input = input.clone();
            let prefill = if field.is_secret() || field == Field::Skills {
                String::new()
            } else {
                form.value(field)
            };
            Callback::from(move |_: MouseEvent| {
                input.set(prefill.clone());
                dispatcher.dispatch(WizardEvent::Edit(field));
            })
        }
    };

    let on_cancel_edit = {
        let dispatcher = state.dispatcher();
        let input = input.clone();
        Callback::from(move |_: MouseEvent| {
            input.set(String::new());
            dispatcher.dispatch(WizardEvent::CancelEdit);
        })
    };

    let on_final_submit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(WizardEvent::Submit))
    };

    let on_retry_email = {
        let dispatcher = state.dispatcher();
        let input = input.clone();
        Callback::from(move |_: MouseEvent| {
            input.set(String::new());
            dispatcher.dispatch(WizardEvent::RetryWithNewEmail);
        })
    };

    let on_choice = {
        let dispatcher = state.dispatcher();
        let navigator = navigator.clone();
        move |choice: ConflictChoice| {
            let dispatcher = dispatcher.clone();
            let navigator = navigator.clone();
            Callback::from(move |_: MouseEvent| match choice {
                ConflictChoice::GoToLogin => {
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::Login);
                    }
                }
                ConflictChoice::StartFresh => dispatcher.dispatch(WizardEvent::StartFresh),
            })
        }
    };

    let conflict = match wizard.phase() {
        Phase::Conflict(kind) => Some(*kind),
        _ => None,
    };
    let last_options = wizard
        .transcript()
        .iter()
        .rposition(|message| message.author == Author::Options);

    let transcript = wizard
        .transcript()
        .iter()
        .enumerate()
        .map(|(index, message)| {
            let choices = if conflict.is_some() && Some(index) == last_options {
                html! {
                    <div class="flex flex-col space-y-2 mt-3">
                        { for ConflictChoice::ALL.iter().map(|choice| html! {
                            <button class={classes!("w-full", "text-sm", PRIMARY_BUTTON)} onclick={on_choice(*choice)}>
                                { choice.label() }
                            </button>
                        }) }
                        if conflict == Some(ConflictKind::Email) {
                            <button class={classes!("w-full", "text-sm", PRIMARY_BUTTON)} onclick={on_retry_email.clone()}>
                                { "📧 Try a Different Email" }
                            </button>
                        }
                    </div>
                }
            } else {
                html! {}
            };
            html! {
                <ChatBubble key={index} message={message.clone()}>{ choices }</ChatBubble>
            }
        })
        .collect::<Html>();

    let form = wizard.form();
    let controls = match step.kind() {
        StepKind::Text | StepKind::Secret => {
            let field = step.field();
            let hint = field
                .filter(|field| field.requires_availability())
                .map(|field| availability_hint(field, wizard.availability(field)))
                .unwrap_or_default();
            let email_taken = field == Some(Field::Email)
                && wizard.availability(Field::Email) == Availability::Taken;
            html! {
                <form onsubmit={on_submit_input} class="space-y-2">
                    <div class="flex space-x-2">
                        <input
                            type={if step.kind() == StepKind::Secret { "password" } else { "text" }}
                            class={INPUT_CLASSES}
                            placeholder={step.placeholder()}
                            value={(*input).clone()}
                            oninput={on_input}
                            disabled={busy}
                        />
                        <button type="submit" class={PRIMARY_BUTTON} disabled={busy}>
                            { if wizard.editing().is_some() { "Update" } else { "Send" } }
                        </button>
                        if wizard.editing().is_some() {
                            <button
                                type="button"
                                class="px-4 py-2 bg-gray-500 hover:bg-gray-600 text-white rounded-md"
                                onclick={on_cancel_edit.clone()}
                                disabled={busy}
                            >
                                { "✕" }
                            </button>
                        }
                    </div>
                    { hint }
                    if email_taken {
                        <div class="flex items-center space-x-3 text-sm">
                            <Link<Route> to={Route::Login} classes="text-blue-600 dark:text-blue-400 hover:underline">
                                { "Login instead" }
                            </Link<Route>>
                            <button type="button" class="text-blue-600 dark:text-blue-400 hover:underline" onclick={on_retry_email.clone()}>
                                { "Try different email" }
                            </button>
                        </div>
                    }
                </form>
            }
        }
        StepKind::Skills => html! {
            <div class="space-y-2">
                <SkillPicker
                    selected={form.skills.clone()}
                    on_toggle={on_toggle_skill}
                    on_submit={on_submit_skills}
                    disabled={busy}
                />
                if wizard.editing().is_some() {
                    <button class="text-sm text-gray-500 hover:underline" onclick={on_cancel_edit.clone()}>
                        { "Cancel edit" }
                    </button>
                }
            </div>
        },
        StepKind::Review => {
            let skills = form
                .skills
                .iter()
                .map(|id| match catalog::skill(id) {
                    Some(skill) => format!("{} {}", skill.emoji, skill.name),
                    None => id.clone(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            let rows = [
                (Field::Name, form.name.clone()),
                (Field::Usn, form.usn.clone()),
                (Field::Email, form.email.clone()),
                (Field::Skills, skills),
            ];
            let done = wizard.registered().is_some();
            html! {
                <div class="space-y-4">
                    <dl class="divide-y divide-gray-200 dark:divide-gray-700">
                        { for rows.into_iter().map(|(field, value)| html! {
                            <div class="flex items-center justify-between py-2">
                                <div>
                                    <dt class={classes!("text-xs", "uppercase", TEXT_SECONDARY)}>{ field.label() }</dt>
                                    <dd class="text-sm">{ value }</dd>
                                </div>
                                if !done {
                                    <button
                                        class="text-sm text-blue-600 dark:text-blue-400 hover:underline disabled:opacity-50"
                                        onclick={on_edit(field)}
                                        disabled={busy}
                                    >
                                        { "Edit" }
                                    </button>
                                }
                            </div>
                        }) }
                    </dl>
                    if !done {
                        <button class={classes!("w-full", PRIMARY_BUTTON)} onclick={on_final_submit} disabled={busy}>
                            { if busy { "Creating Your Account... ✨" } else { "Complete Registration 🎉" } }
                        </button>
                    }
                </div>
            }
        }
    };

    let (completed, total) = wizard.progress();
    let percent = completed * 100 / total;

    html! {
        <div class="max-w-3xl mx-auto px-6 py-10">
            <div class="mb-6">
                <h1 class="text-3xl font-bold mb-2">{ "Join Mathrix" }</h1>
                <div class="flex items-center space-x-3">
                    <div class="flex-1 h-2 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden">
                        <div class="h-2 bg-blue-600 transition-all duration-500" style={format!("width: {percent}%")}></div>
                    </div>
                    <span class={classes!("text-sm", TEXT_SECONDARY)}>
                        { format!("Step {} of {}", step.index() + 1, Step::ALL.len()) }
                    </span>
                </div>
            </div>

            <div class={CARD_CLASSES}>
                <div ref={messages_container_ref} class="h-[28rem] overflow-y-auto pr-2 mb-4">
                    { transcript }
                </div>
                { controls }
            </div>
        </div>
    }
}
