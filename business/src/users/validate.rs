//! Required-field validation.
//!
//! A pure function over the working record; the form re-evaluates it on
//! every edit and gates the save action on the result. No widget toolkit
//! involvement.

use super::model::UserRecord;

/// The fields a record must populate before it may be saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    UserName,
    FirstName,
    LastName,
    Email,
    Status,
    Department,
}

impl RequiredField {
    pub const ALL: [RequiredField; 6] = [
        RequiredField::UserName,
        RequiredField::FirstName,
        RequiredField::LastName,
        RequiredField::Email,
        RequiredField::Status,
        RequiredField::Department,
    ];

    /// Human-readable form label.
    pub fn label(self) -> &'static str {
        match self {
            RequiredField::UserName => "Username",
            RequiredField::FirstName => "First name",
            RequiredField::LastName => "Last name",
            RequiredField::Email => "Email",
            RequiredField::Status => "Status",
            RequiredField::Department => "Department",
        }
    }

    /// Whether `record` leaves this field empty. Whitespace-only text counts
    /// as empty.
    pub fn is_missing(self, record: &UserRecord) -> bool {
        match self {
            RequiredField::UserName => record.user_name.trim().is_empty(),
            RequiredField::FirstName => record.first_name.trim().is_empty(),
            RequiredField::LastName => record.last_name.trim().is_empty(),
            RequiredField::Email => record.email.trim().is_empty(),
            RequiredField::Status => record.user_status.is_none(),
            RequiredField::Department => record.department.trim().is_empty(),
        }
    }
}

/// Every required field `record` leaves empty, in form order. An empty
/// result means the record may be submitted.
pub fn missing_fields(record: &UserRecord) -> Vec<RequiredField> {
    RequiredField::ALL
        .into_iter()
        .filter(|field| field.is_missing(record))
        .collect()
}
