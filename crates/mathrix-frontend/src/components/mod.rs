//! Reusable UI components for the Mathrix frontend.
//!
//! Contains the navigation bar, the notification dropdown and the small
//! building blocks shared by the pages.

pub mod api_status;
pub mod avatar;
pub mod chat_bubble;
pub mod cluster_badge;
pub mod copy_code_button;
pub mod error_panel;
pub mod navbar;
pub mod notification_dropdown;
pub mod skill_picker;
pub mod spinner;

pub use api_status::*;
pub use avatar::*;
pub use chat_bubble::*;
pub use cluster_badge::*;
pub use copy_code_button::*;
pub use error_panel::*;
pub use navbar::*;
pub use notification_dropdown::*;
pub use skill_picker::*;
pub use spinner::*;

/// Card surface shared by the dashboards.
pub const CARD_CLASSES: &str = "bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-xl p-6 shadow-sm";
pub const TEXT_PRIMARY: &str = "text-gray-900 dark:text-gray-100";
pub const TEXT_SECONDARY: &str = "text-gray-600 dark:text-gray-400";
pub const PRIMARY_BUTTON: &str = "px-4 py-2 bg-blue-600 hover:bg-blue-700 dark:bg-blue-700 dark:hover:bg-blue-600 text-white rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50 transition-colors";
pub const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent";
