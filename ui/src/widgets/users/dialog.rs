//! Modal dialog for creating, editing, and deleting a user record.
//!
//! Lifecycle: open (form bound to the working copy) -> save or delete ->
//! access-layer call in flight -> closed. Cancel and window dismiss go
//! straight to closed without touching the access layer. The panel observes
//! the closed outcome and reloads its list.

use egui::{Color32, RichText, Ui, Window};

use roster_business::{BusinessConfig, RequiredField, UserRecord, UserStatus, users::api};

use super::state::{PendingCall, UserDialogState};

/// Whether the dialog is still open after this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Open,
    Closed,
}

/// Shows the dialog, polls its pending call, and reports whether it closed
/// this frame (saved, deleted, or cancelled alike).
pub fn show_user_dialog(
    state: &mut UserDialogState,
    config: &BusinessConfig,
    ui: &mut Ui,
) -> DialogOutcome {
    let mut closed = poll_pending(state);
    let mut open = true;

    let title = if state.is_edit() { "Edit User" } else { "New User" };

    Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            if let Some(error) = &state.error {
                ui.colored_label(Color32::RED, format!("Error: {error}"));
                ui.add_space(8.0);
            }

            if state.is_busy() {
                let message = match state.pending {
                    Some(PendingCall::Delete(_)) => "Deleting user...",
                    _ => "Saving user...",
                };
                ui.label(message);
                ui.spinner();
                return;
            }

            form_fields(ui, state);

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                let can_save = roster_business::missing_fields(&state.record).is_empty();

                if ui
                    .add_enabled(can_save, egui::Button::new("Save"))
                    .clicked()
                {
                    let subscription = if state.record.is_new() {
                        api::create(config, &state.record, ui.ctx())
                    } else {
                        api::update(config, &state.record, ui.ctx())
                    };
                    state.pending = Some(PendingCall::Save(subscription));
                    state.error = None;
                }

                // Delete is only offered for a persisted record.
                if let Some(id) = state.record.user_id
                    && ui
                        .button(RichText::new("Delete").color(Color32::RED))
                        .clicked()
                {
                    state.pending =
                        Some(PendingCall::Delete(api::delete_by_id(config, id, ui.ctx())));
                    state.error = None;
                }

                if ui.button("Cancel").clicked() {
                    closed = true;
                }
            });
        });

    if !open {
        closed = true;
    }

    if closed {
        DialogOutcome::Closed
    } else {
        DialogOutcome::Open
    }
}

/// The form proper: one row per field, each with its inline required marker.
/// The marker set is the pure validation function re-evaluated every frame,
/// so it reacts as the user types.
fn form_fields(ui: &mut Ui, state: &mut UserDialogState) {
    let missing = roster_business::missing_fields(&state.record);
    let record = &mut state.record;

    text_field(ui, RequiredField::UserName, &mut record.user_name, &missing);
    text_field(ui, RequiredField::FirstName, &mut record.first_name, &missing);
    text_field(ui, RequiredField::LastName, &mut record.last_name, &missing);
    text_field(ui, RequiredField::Email, &mut record.email, &missing);
    status_field(ui, record, &missing);
    text_field(ui, RequiredField::Department, &mut record.department, &missing);
}

fn text_field(ui: &mut Ui, field: RequiredField, value: &mut String, missing: &[RequiredField]) {
    ui.horizontal(|ui| {
        ui.label(format!("{}:", field.label()));
        ui.text_edit_singleline(value);
        required_marker(ui, field, missing);
    });
    ui.add_space(4.0);
}

fn status_field(ui: &mut Ui, record: &mut UserRecord, missing: &[RequiredField]) {
    ui.horizontal(|ui| {
        ui.label(format!("{}:", RequiredField::Status.label()));

        let selected = record
            .user_status
            .map(UserStatus::as_str)
            .unwrap_or("Select status");
        egui::ComboBox::from_id_salt("user_status")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for status in UserStatus::ALL {
                    ui.selectable_value(&mut record.user_status, Some(status), status.as_str());
                }
            });

        required_marker(ui, RequiredField::Status, missing);
    });
    ui.add_space(4.0);
}

fn required_marker(ui: &mut Ui, field: RequiredField, missing: &[RequiredField]) {
    if missing.contains(&field) {
        ui.colored_label(Color32::RED, "required");
    }
}

/// Takes an arrived save/delete result.
///
/// Returns `true` when the call completed successfully, which closes the
/// dialog. A failure keeps the dialog open with the error shown; there is no
/// retry beyond the user pressing the button again.
fn poll_pending(state: &mut UserDialogState) -> bool {
    let result = match &state.pending {
        Some(PendingCall::Save(subscription)) => {
            subscription.poll().map(|result| result.map(|_| ()))
        }
        Some(PendingCall::Delete(subscription)) => subscription.poll(),
        None => return false,
    };

    match result {
        Some(Ok(())) => {
            state.pending = None;
            true
        }
        Some(Err(err)) => {
            state.pending = None;
            state.error = Some(err.to_string());
            false
        }
        None => false,
    }
}

#[cfg(test)]
mod user_dialog_tests {
    use std::any::TypeId;

    use egui_kittest::Harness;
    use kittest::Queryable;
    use roster_states::Subscription;

    use super::*;

    /// Dialog plus the outcome observed by the embedding panel.
    struct DialogHarnessState {
        dialog: UserDialogState,
        closed: bool,
    }

    /// Harness rendering only the dialog. The base URL points at a closed
    /// port, so an accidentally issued request fails instead of hanging.
    fn dialog_harness<'a>(dialog: UserDialogState) -> Harness<'a, DialogHarnessState> {
        let state = DialogHarnessState {
            dialog,
            closed: false,
        };

        Harness::new_ui_state(
            |ui, state: &mut DialogHarnessState| {
                let config = BusinessConfig::new("http://127.0.0.1:9");
                if show_user_dialog(&mut state.dialog, &config, ui) == DialogOutcome::Closed {
                    state.closed = true;
                }
            },
            state,
        )
    }

    fn complete_record(user_id: Option<i64>) -> UserRecord {
        UserRecord {
            user_id,
            user_name: "adoe".to_owned(),
            first_name: "Alice".to_owned(),
            last_name: "Doe".to_owned(),
            email: "alice@example.com".to_owned(),
            user_status: Some(UserStatus::Active),
            department: "Eng".to_owned(),
        }
    }

    #[test]
    fn every_empty_field_gets_an_inline_marker() {
        let harness = dialog_harness(UserDialogState::create());

        let marker_count = harness.query_all_by_label("required").count();
        assert_eq!(marker_count, 6, "one marker per empty required field");
    }

    #[test]
    fn markers_disappear_once_the_fields_are_filled() {
        let harness = dialog_harness(UserDialogState::edit(complete_record(None)));

        assert_eq!(harness.query_all_by_label("required").count(), 0);
    }

    #[test]
    fn save_is_inert_while_fields_are_missing() {
        let mut harness = dialog_harness(UserDialogState::create());
        harness.step();

        if let Some(save) = harness.query_by_label("Save") {
            save.click();
        }
        harness.step();

        assert!(
            harness.state().dialog.pending.is_none(),
            "disabled save must not start a call"
        );
        assert!(!harness.state().closed);
    }

    #[test]
    fn save_on_a_new_record_starts_a_save_call() {
        let mut harness = dialog_harness(UserDialogState::edit(complete_record(None)));
        harness.step();

        harness
            .query_by_label("Save")
            .expect("save button exists")
            .click();
        harness.step();

        // The call was issued: either still in flight, or (with nothing
        // listening on the port) already failed and surfaced.
        let dialog = &harness.state().dialog;
        assert!(
            matches!(dialog.pending, Some(PendingCall::Save(_))) || dialog.error.is_some(),
            "save must start a create call for a record without an identifier"
        );
    }

    #[test]
    fn delete_is_only_offered_for_a_persisted_record() {
        let harness = dialog_harness(UserDialogState::edit(complete_record(None)));
        assert!(harness.query_by_label("Delete").is_none());

        let harness = dialog_harness(UserDialogState::edit(complete_record(Some(5))));
        assert!(harness.query_by_label("Delete").is_some());
    }

    #[test]
    fn delete_starts_a_delete_call() {
        let mut harness = dialog_harness(UserDialogState::edit(complete_record(Some(7))));
        harness.step();

        harness
            .query_by_label("Delete")
            .expect("delete button exists")
            .click();
        harness.step();

        let dialog = &harness.state().dialog;
        assert!(
            matches!(dialog.pending, Some(PendingCall::Delete(_))) || dialog.error.is_some(),
            "delete must start a delete call for the working record"
        );
    }

    #[test]
    fn cancel_closes_without_calling_the_access_layer() {
        let mut harness = dialog_harness(UserDialogState::edit(complete_record(Some(5))));
        harness.step();

        harness
            .query_by_label("Cancel")
            .expect("cancel button exists")
            .click();
        harness.step();

        assert!(harness.state().closed);
        assert!(harness.state().dialog.pending.is_none());
    }

    #[test]
    fn a_busy_dialog_shows_progress_instead_of_the_form() {
        struct Owner;
        let (_publisher, subscription) = Subscription::channel(TypeId::of::<Owner>());

        let mut dialog = UserDialogState::edit(complete_record(Some(5)));
        dialog.pending = Some(PendingCall::Save(subscription));

        let harness = dialog_harness(dialog);

        assert!(harness.query_by_label_contains("Saving user").is_some());
        assert!(harness.query_by_label("Save").is_none());
    }

    #[test]
    fn a_failed_call_keeps_the_dialog_open_with_the_error_shown() {
        let mut dialog = UserDialogState::edit(complete_record(Some(5)));
        dialog.error = Some("API returned status: 500".to_owned());

        let harness = dialog_harness(dialog);

        assert!(
            harness
                .query_by_label_contains("API returned status: 500")
                .is_some()
        );
        assert!(!harness.state().closed);
        assert!(harness.query_by_label("Save").is_some());
    }
}
