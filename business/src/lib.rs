//! Business layer for the Roster user-management console.
//!
//! Holds everything the UI needs that is not rendering: the user record
//! model and its wire format, the pure required-field validation, the
//! injected configuration, and the access layer issuing the four REST calls.

mod config;
pub mod users;

pub use config::BusinessConfig;
pub use users::api::{ApiResult, UsersApiError};
pub use users::model::{UserRecord, UserStatus};
pub use users::validate::{RequiredField, missing_fields};
