//! UI widgets for the Roster console.

pub mod users;

pub use users::panel::users_panel;
pub use users::state::{UserDialogState, UsersPanelState};
