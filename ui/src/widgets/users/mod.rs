//! Users console: the root panel with its table, and the modal
//! create/edit/delete dialog.

pub mod dialog;
pub mod panel;
pub mod state;
mod table;

pub use panel::users_panel;
pub use state::{UserDialogState, UsersPanelState};
