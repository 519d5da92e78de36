//! The chat-style registration wizard.
//!
//! [`RegistrationWizard`] is a synchronous state machine. It never performs IO:
//! operations that need the API return an [`Effect`], the caller runs it (see
//! [`perform`]) and feeds the outcome back as a [`WizardEvent`]. The Yew page
//! drives it through a reducer; tests drive it against a mock backend.

mod backend;
mod step;
mod wizard;

pub use backend::*;
pub use step::*;
pub use wizard::*;
