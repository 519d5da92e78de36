//! Context providers for shared application state and services.

pub mod api;
pub mod session;
pub mod storage;
pub mod theme;

pub use session::{SessionContext, SessionProvider, use_session};
pub use theme::{ThemeContext, ThemeProvider, use_theme};
