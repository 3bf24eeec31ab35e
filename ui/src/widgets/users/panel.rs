//! Root users panel: toolbar, records table, and the dialog lifecycle.
//!
//! The panel owns the authoritative list and the subscription of the list
//! request currently in flight. It opens the modal dialog for "new" and
//! "edit", and re-requests the full list whenever the dialog closes,
//! whichever way it closed.

use egui::{Color32, Response, Ui};

use roster_business::{BusinessConfig, users::api};
use roster_states::StateCtx;

use super::dialog::{DialogOutcome, show_user_dialog};
use super::state::UsersPanelState;
use super::table::users_table;

/// Displays the users panel and drives the fetch and dialog lifecycle.
pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let config = state_ctx
        .state::<BusinessConfig>()
        .cloned()
        .unwrap_or_default();

    poll_list_response(state_ctx);

    let state = state_ctx.state_mut::<UsersPanelState>();

    // First frame after activation: load the list.
    if !state.activated {
        state.activated = true;
        state.begin_fetch(api::list_all(&config, ui.ctx()));
    }

    let response = ui.vertical(|ui| {
        // Toolbar row
        let mut open_new = false;
        let mut refresh = false;
        ui.horizontal(|ui| {
            open_new = ui.button("New User").clicked();
            refresh = ui.button("Refresh").clicked();
            if state.is_fetching {
                ui.spinner();
                ui.label("Loading...");
            }
        });

        if refresh && !state.is_fetching {
            state.begin_fetch(api::list_all(&config, ui.ctx()));
        }

        if let Some(error) = &state.error {
            ui.colored_label(Color32::RED, format!("Error: {error}"));
        }

        ui.add_space(8.0);

        let edit_clicked = users_table(ui, &state.users);

        // Apply row actions after the table iteration
        if open_new {
            state.open_new_dialog();
        }
        if let Some(record) = edit_clicked {
            state.open_edit_dialog(record);
        }
    });

    // Modal dialog; any close (saved, deleted, or cancelled) reloads the list.
    let mut reload = false;
    if let Some(dialog) = state.dialog.as_mut()
        && show_user_dialog(dialog, &config, ui) == DialogOutcome::Closed
    {
        reload = true;
    }
    if reload {
        state.dialog = None;
        state.begin_fetch(api::list_all(&config, ui.ctx()));
    }

    response.response
}

/// Apply an arrived list result before rendering, so the frame already shows
/// the freshest set. A failure keeps the rows that were displayed before.
fn poll_list_response(state_ctx: &mut StateCtx) {
    let state = state_ctx.state_mut::<UsersPanelState>();
    let Some(subscription) = &state.list_sub else {
        return;
    };
    let Some(result) = subscription.poll() else {
        return;
    };

    state.list_sub = None;
    match result {
        Ok(users) => state.update_users(users),
        Err(err) => {
            log::warn!("list load failed: {err}");
            state.set_error(err.to_string());
        }
    }
}
