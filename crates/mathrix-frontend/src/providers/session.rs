//! The signed-in participant, shared through context.
//!
//! [`SessionProvider`] is the only writer of the cached session: login,
//! registration, team changes and logout all go through its callbacks, which
//! keep `localStorage` and the rendered state in step.

use yew::prelude::*;

use mathrix::data::Participant;
use mathrix::store::SessionStore;

use super::storage::BrowserStore;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    pub participant: Option<Participant>,
    /// Stores a freshly authenticated or updated participant.
    pub set_participant: Callback<Participant>,
    /// Records the team the participant now belongs to.
    pub set_team: Callback<String>,
    pub sign_out: Callback<()>,
}

impl SessionContext {
    pub fn is_signed_in(&self) -> bool {
        self.participant.is_some()
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

fn store() -> SessionStore<BrowserStore> {
    SessionStore::new(BrowserStore)
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let participant = use_state(|| store().load());

    let set_participant = {
        let participant = participant.clone();
        Callback::from(move |next: Participant| {
            if let Err(err) = store().save(&next) {
                mathrix::log::error!("Failed to persist session: {err}");
            }
            participant.set(Some(next));
        })
    };

    let set_team = {
        let participant = participant.clone();
        Callback::from(move |team_id: String| {
            let Some(mut current) = (*participant).clone() else {
                mathrix::log::warn!("Ignoring team update without a session");
                return;
            };
            current.team_id = Some(team_id);
            if let Err(err) = store().save(&current) {
                mathrix::log::error!("Failed to persist session: {err}");
            }
            participant.set(Some(current));
        })
    };

    let sign_out = {
        let participant = participant.clone();
        Callback::from(move |_| {
            store().clear();
            participant.set(None);
        })
    };

    let context = SessionContext {
        participant: (*participant).clone(),
        set_participant,
        set_team,
        sign_out,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session must be used within a SessionProvider")
}
