use futures::future::try_join;

use crate::api::ApiResult;
use crate::data::{Participant, RegisterParticipant};

use super::step::Field;
use super::wizard::{Effect, FinalCheck, WizardEvent};

/// The remote operations the registration wizard depends on.
#[async_trait::async_trait(?Send)]
pub trait RegistrationBackend {
    async fn email_exists(&self, email: &str) -> ApiResult<bool>;

    async fn usn_exists(&self, usn: &str) -> ApiResult<bool>;

    async fn register(&self, participant: &RegisterParticipant) -> ApiResult<Participant>;
}

/// Runs `effect` against `backend` and returns the event that reports its outcome.
pub async fn perform<B>(backend: &B, effect: Effect) -> WizardEvent
where
    B: RegistrationBackend + ?Sized,
{
    match effect {
        Effect::CheckAvailability { field, value, seq } => {
            let result = match field {
                Field::Email => backend.email_exists(&value).await,
                _ => backend.usn_exists(&value).await,
            };
            WizardEvent::AvailabilityResolved { field, seq, result }
        }
        Effect::FinalCheck { email, usn } => {
            let checks = try_join(backend.email_exists(&email), backend.usn_exists(&usn)).await;
            WizardEvent::FinalCheckResolved(checks.map(|(email_taken, usn_taken)| FinalCheck {
                email_taken,
                usn_taken,
            }))
        }
        Effect::Register(body) => WizardEvent::RegistrationResolved(backend.register(&body).await),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;

    use super::*;
    use crate::api::ApiError;
    use crate::config::SESSION_KEY;
    use crate::registration::{Phase, RegistrationWizard, Step};
    use crate::store::{KeyValueStore, MemoryStore, SessionStore};

    #[derive(Default)]
    struct MockBackend {
        taken_emails: Vec<&'static str>,
        taken_usns: Vec<&'static str>,
        reject_with: Option<&'static str>,
        register_calls: Cell<usize>,
    }

    #[async_trait::async_trait(?Send)]
    impl RegistrationBackend for MockBackend {
        async fn email_exists(&self, email: &str) -> ApiResult<bool> {
            Ok(self.taken_emails.iter().any(|taken| *taken == email))
        }

        async fn usn_exists(&self, usn: &str) -> ApiResult<bool> {
            Ok(self.taken_usns.iter().any(|taken| *taken == usn))
        }

        async fn register(&self, participant: &RegisterParticipant) -> ApiResult<Participant> {
            self.register_calls.set(self.register_calls.get() + 1);
            if let Some(detail) = self.reject_with {
                return Err(ApiError::BadRequest(detail.to_string()));
            }
            Ok(Participant {
                participant_id: "p-1".to_string(),
                name: participant.name.clone(),
                email: participant.email.clone(),
                usn: Some(participant.usn.clone()),
                department: None,
                year: None,
                interest_cluster: None,
                team_id: None,
                skills: participant.skills.clone(),
            })
        }
    }

    /// Feeds `event` to the wizard and runs every effect it produces to completion.
    fn drive(wizard: &mut RegistrationWizard, backend: &MockBackend, event: WizardEvent) {
        let mut pending = wizard.handle(event);
        while let Some(effect) = pending {
            let outcome = block_on(perform(backend, effect));
            pending = wizard.handle(outcome);
        }
    }

    fn complete(wizard: &mut RegistrationWizard, backend: &MockBackend, email: &str) {
        for input in ["Ada Lovelace", "1MS21CS001", email, "engine42", "engine42"] {
            drive(wizard, backend, WizardEvent::SubmitInput(input.to_string()));
        }
        drive(wizard, backend, WizardEvent::ToggleSkill("python".to_string()));
        drive(wizard, backend, WizardEvent::SubmitSkills);
    }

    #[test]
    fn test_taken_email_blocks_advancement() {
        let backend = MockBackend {
            taken_emails: vec!["taken@x.com"],
            ..MockBackend::default()
        };
        let mut wizard = RegistrationWizard::new();
        complete(&mut wizard, &backend, "taken@x.com");

        assert_eq!(wizard.step(), Step::Email);
        assert!(wizard.transcript().iter().any(|message| {
            message.content
                == "❌ This email is already registered. Please use a different email address or login with your existing account."
        }));
        assert_eq!(backend.register_calls.get(), 0);
    }

    #[test]
    fn test_full_run_registers_once_and_persists_session() {
        let backend = MockBackend::default();
        let mut wizard = RegistrationWizard::new();
        complete(&mut wizard, &backend, "ada@uni.edu");
        assert_eq!(wizard.step(), Step::Review);

        drive(&mut wizard, &backend, WizardEvent::Submit);
        assert_eq!(backend.register_calls.get(), 1);
        let participant = wizard.registered().expect("registered").clone();
        assert_eq!(participant.email, "ada@uni.edu");
        assert_eq!(participant.skills, vec!["python".to_string()]);

        // A second submit after success is ignored.
        drive(&mut wizard, &backend, WizardEvent::Submit);
        assert_eq!(backend.register_calls.get(), 1);

        let storage = MemoryStore::new();
        SessionStore::new(storage.clone())
            .save(&participant)
            .expect("save session");
        assert!(storage.get(SESSION_KEY).is_some());
        assert_eq!(SessionStore::new(storage).load(), Some(participant));
    }

    #[test]
    fn test_final_check_catches_late_duplicate() {
        let mut backend = MockBackend::default();
        let mut wizard = RegistrationWizard::new();
        complete(&mut wizard, &backend, "ada@uni.edu");

        backend.taken_usns.push("1MS21CS001");
        drive(&mut wizard, &backend, WizardEvent::Submit);
        assert_eq!(
            wizard.phase(),
            &Phase::Conflict(crate::registration::ConflictKind::Usn)
        );
        assert_eq!(backend.register_calls.get(), 0);
    }

    #[test]
    fn test_server_rejection_offers_start_fresh() {
        let backend = MockBackend {
            reject_with: Some("USN already exists"),
            ..MockBackend::default()
        };
        let mut wizard = RegistrationWizard::new();
        complete(&mut wizard, &backend, "ada@uni.edu");
        drive(&mut wizard, &backend, WizardEvent::Submit);
        assert!(matches!(wizard.phase(), Phase::Conflict(_)));

        drive(&mut wizard, &backend, WizardEvent::StartFresh);
        assert_eq!(wizard.step(), Step::Name);
        assert_eq!(wizard.phase(), &Phase::Collecting);
    }
}
