//! Page components for different routes in the application.

pub mod admin;
pub mod dashboard;
pub mod discovery;
pub mod home;
pub mod login;
pub mod registration;
pub mod suggestions;
pub mod team;

pub use admin::*;
pub use dashboard::*;
pub use discovery::*;
pub use home::*;
pub use login::*;
pub use registration::*;
pub use suggestions::*;
pub use team::*;
