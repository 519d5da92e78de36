//! The shared library for Mathrix, the team-formation client.
//!
//! Everything here is target-agnostic: wire types for the remote API, the typed
//! HTTP client, the registration wizard state machine, local persistence for the
//! session and theme, and the logging/error plumbing used by the Yew frontend.

pub mod api;
pub mod catalog;
pub mod config;
pub mod data;
pub mod endpoints;
pub mod errors;
pub mod log;
pub mod macros;
pub mod notifications;
pub mod registration;
pub mod sequence;
pub mod store;
pub mod theme;
pub mod validation;

pub use serde;
pub use serde_json;
pub use tracing;
