//! State for the users panel and its modal dialog.

use roster_business::{ApiResult, UserRecord};
use roster_states::Subscription;

/// The access-layer call a dialog is waiting on.
pub(crate) enum PendingCall {
    Save(Subscription<ApiResult<UserRecord>>),
    Delete(Subscription<ApiResult<()>>),
}

/// State of the modal create/edit/delete dialog.
///
/// Owns a private working copy of the record under edit; nothing the user
/// types reaches the panel's displayed list until the dialog closes and the
/// panel reloads.
pub struct UserDialogState {
    pub(crate) record: UserRecord,
    pub(crate) pending: Option<PendingCall>,
    pub(crate) error: Option<String>,
}

impl UserDialogState {
    /// Dialog for a record that does not exist server-side yet.
    pub fn create() -> Self {
        Self::edit(UserRecord::default())
    }

    /// Dialog over a working copy of an existing record.
    pub fn edit(record: UserRecord) -> Self {
        Self {
            record,
            pending: None,
            error: None,
        }
    }

    /// True when the working copy refers to a persisted record.
    pub fn is_edit(&self) -> bool {
        !self.record.is_new()
    }

    /// True while a save or delete call is in flight.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn record(&self) -> &UserRecord {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut UserRecord {
        &mut self.record
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// State for the users panel, the root view.
///
/// Owns the authoritative in-memory list; every reload replaces it
/// wholesale. Subscriptions held here cancel when the state is dropped, so a
/// late result cannot touch a torn-down view.
#[derive(Default)]
pub struct UsersPanelState {
    pub(crate) users: Vec<UserRecord>,
    pub(crate) is_fetching: bool,
    pub(crate) error: Option<String>,
    pub(crate) list_sub: Option<Subscription<ApiResult<Vec<UserRecord>>>>,
    pub(crate) dialog: Option<UserDialogState>,
    pub(crate) activated: bool,
}

impl UsersPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed set wholesale.
    pub fn update_users(&mut self, users: Vec<UserRecord>) {
        self.users = users;
        self.is_fetching = false;
        self.error = None;
    }

    /// Record a failed list load. The previously displayed rows stay.
    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.is_fetching = false;
    }

    pub fn set_fetching(&mut self) {
        self.is_fetching = true;
        self.error = None;
    }

    /// Track a new list request. Replacing a previous subscription drops it,
    /// which cancels the superseded request.
    pub(crate) fn begin_fetch(&mut self, subscription: Subscription<ApiResult<Vec<UserRecord>>>) {
        self.set_fetching();
        self.list_sub = Some(subscription);
    }

    /// Open the dialog with an empty record (no identifier).
    pub fn open_new_dialog(&mut self) {
        self.dialog = Some(UserDialogState::create());
    }

    /// Open the dialog with a field-by-field copy of `record`, so in-progress
    /// edits cannot leak into the displayed list before a save.
    pub fn open_edit_dialog(&mut self, record: UserRecord) {
        self.dialog = Some(UserDialogState::edit(record));
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dialog(&self) -> Option<&UserDialogState> {
        self.dialog.as_ref()
    }

    pub fn dialog_mut(&mut self) -> Option<&mut UserDialogState> {
        self.dialog.as_mut()
    }
}
