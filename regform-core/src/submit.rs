//! The submission gate: all-or-nothing validation at submit time.

use log::info;
use serde::Serialize;

use crate::field::Field;
use crate::form::FormState;
use crate::rules;
use crate::sanitize::sanitize_input;

/// Form values captured at submit time. Read-only once taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub age: String,
    pub website: String,
    pub bio: String,
    pub terms: bool,
}

impl FormSnapshot {
    pub fn capture(state: &FormState) -> Self {
        Self {
            username: state.username.clone(),
            email: state.email.clone(),
            password: state.password.clone(),
            confirm_password: state.confirm_password.clone(),
            phone: state.phone.clone(),
            age: state.age.clone(),
            website: state.website.clone(),
            bio: state.bio.clone(),
            terms: state.terms,
        }
    }

    /// The eight-entry validation map, in report order. Bio is free text
    /// and takes no part in the decision.
    pub fn validation_map(&self) -> [(Field, bool); 8] {
        [
            (Field::Username, rules::validate_username(&self.username)),
            (Field::Email, rules::validate_email(&self.email)),
            (Field::Password, rules::validate_password(&self.password)),
            (
                Field::ConfirmPassword,
                rules::validate_confirmation(&self.password, &self.confirm_password),
            ),
            (Field::Phone, rules::validate_phone(&self.phone)),
            (Field::Age, rules::validate_age(&self.age)),
            (Field::Website, rules::validate_website(&self.website)),
            (Field::Terms, rules::validate_terms(self.terms)),
        ]
    }
}

/// A snapshot whose username and bio have been through the sanitizer, all
/// other fields carried unchanged. Only a passing gate constructs one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SanitizedSnapshot(FormSnapshot);

impl SanitizedSnapshot {
    fn new(mut snapshot: FormSnapshot) -> Self {
        snapshot.username = sanitize_input(&snapshot.username);
        snapshot.bio = sanitize_input(&snapshot.bio);
        Self(snapshot)
    }

    pub fn data(&self) -> &FormSnapshot {
        &self.0
    }

    /// Readable key-value dump for the success banner, matching the
    /// snapshot's field order with camelCase keys.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every entry in the validation map passed.
    Accepted(SanitizedSnapshot),
    /// At least one entry failed; the offending fields, in report order.
    /// Nothing is lost: the caller keeps all values for correction.
    Rejected { invalid: Vec<Field> },
}

/// Capture the current state and run the validation map over it.
pub fn submit(state: &FormState) -> SubmitOutcome {
    let snapshot = FormSnapshot::capture(state);
    let invalid: Vec<Field> = snapshot
        .validation_map()
        .into_iter()
        .filter_map(|(field, valid)| (!valid).then_some(field))
        .collect();

    if invalid.is_empty() {
        info!("[submit] accepted");
        SubmitOutcome::Accepted(SanitizedSnapshot::new(snapshot))
    } else {
        info!("[submit] rejected, {} field(s) invalid", invalid.len());
        SubmitOutcome::Rejected { invalid }
    }
}
