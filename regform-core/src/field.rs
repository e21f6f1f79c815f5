//! Form field identities, labels, and inline error messages.

use std::fmt;

/// A single field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
    Phone,
    Age,
    Website,
    Bio,
    Terms,
}

impl Field {
    /// The fields that participate in validation, in the fixed order used by
    /// both the live report and the submit check. Bio is free text and never
    /// validated, so it is absent here.
    pub const REPORTED: [Field; 8] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Phone,
        Field::Age,
        Field::Website,
        Field::Terms,
    ];

    /// The text-editable fields, in focus order. Terms is a checkbox.
    pub const TEXT: [Field; 8] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Phone,
        Field::Age,
        Field::Website,
        Field::Bio,
    ];

    /// Display label for report entries and field rows.
    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Password Confirmation",
            Field::Phone => "Phone",
            Field::Age => "Age",
            Field::Website => "Website",
            Field::Bio => "Bio",
            Field::Terms => "Terms & Conditions",
        }
    }

    /// Inline message shown under the field while it is invalid.
    ///
    /// Bio is never validated and the checkbox has no inline message slot,
    /// so both return `None`.
    pub fn error_message(self) -> Option<&'static str> {
        match self {
            Field::Username => {
                Some("Username must be 3-20 characters, alphanumeric and underscore only")
            }
            Field::Email => Some("Please enter a valid email address"),
            Field::Password => Some("Password does not meet requirements"),
            Field::ConfirmPassword => Some("Passwords do not match"),
            Field::Phone => Some("Please enter a valid Thai phone number"),
            Field::Age => Some("Age must be between 1 and 120"),
            Field::Website => Some("Please enter a valid URL"),
            Field::Bio | Field::Terms => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
