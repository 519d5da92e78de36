//! Custom Yew hooks.

pub mod use_debounce;
pub mod use_scrolled;

pub use use_debounce::*;
pub use use_scrolled::*;
