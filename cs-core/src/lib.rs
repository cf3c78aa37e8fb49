//! Session store, authentication and dashboard state machine.
//!
//! Every client connection owns one [`Controller`]. The host UI turns user
//! actions and timer ticks into [`Event`]s, feeds them to
//! [`Controller::dispatch`] one at a time, and draws whatever
//! [`Controller::render`] returns.

pub mod auth;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod rotation;
pub mod session;
pub mod view;

pub use config::DashboardConfig;
pub use controller::{Controller, Selection};
pub use error::{AuthError, ConfigError, RegistrationError};
pub use event::{Event, Notice};
pub use rotation::{Rotation, RotationInterval, RotationMode, TickSchedule};
pub use session::{Credential, Session};
pub use view::View;
