//! Table rendering for the users panel.

use egui::Ui;
use egui_extras::{Column, TableBuilder};

use roster_business::UserRecord;

/// Fixed column widths for consistent table layout
const STATUS_WIDTH: f32 = 90.0;
const ACTIONS_WIDTH: f32 = 60.0;
const ROW_HEIGHT: f32 = 26.0;
const HEADER_HEIGHT: f32 = 24.0;

/// Header column labels.
const HEADERS: [&str; 7] = [
    "Username",
    "First Name",
    "Last Name",
    "Email",
    "Status",
    "Department",
    "Actions",
];

/// Renders the records table.
///
/// Returns the record whose Edit action was clicked, already detached from
/// the displayed list (a clone, not a reference into it).
pub(crate) fn users_table(ui: &mut Ui, users: &[UserRecord]) -> Option<UserRecord> {
    let mut edit_clicked: Option<UserRecord> = None;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(90.0)) // Username
        .column(Column::remainder().at_least(90.0)) // First Name
        .column(Column::remainder().at_least(90.0)) // Last Name
        .column(Column::remainder().at_least(150.0)) // Email
        .column(Column::exact(STATUS_WIDTH))
        .column(Column::remainder().at_least(90.0)) // Department
        .column(Column::exact(ACTIONS_WIDTH))
        .header(HEADER_HEIGHT, |mut header| {
            for label in HEADERS {
                header.col(|ui| {
                    ui.strong(label);
                });
            }
        })
        .body(|mut body| {
            for user in users {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(&user.user_name);
                    });
                    row.col(|ui| {
                        ui.label(&user.first_name);
                    });
                    row.col(|ui| {
                        ui.label(&user.last_name);
                    });
                    row.col(|ui| {
                        ui.label(&user.email);
                    });
                    row.col(|ui| {
                        if let Some(status) = user.user_status {
                            ui.label(status.as_str());
                        }
                    });
                    row.col(|ui| {
                        ui.label(&user.department);
                    });
                    row.col(|ui| {
                        if ui.button("Edit").clicked() {
                            edit_clicked = Some(user.clone());
                        }
                    });
                });
            }
        });

    edit_clicked
}
