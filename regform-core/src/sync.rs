//! Field state synchronization: keeps the per-field indicators, the
//! password checklist and the aggregate report consistent with the values.

use std::collections::HashMap;

use log::debug;

use crate::field::Field;
use crate::form::FormState;
use crate::report::ValidationReport;
use crate::strength::PasswordStrength;

/// Visible state of one field's inline indicator.
///
/// `Unset` means the field has not been touched since the last reset and
/// shows no state at all. Once a change event lands the field flips between
/// `Valid` and `Invalid`; only reset returns it to `Unset`. An edited field
/// that is emptied again keeps following its rule (an empty username is
/// invalid, an empty website is valid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Unset,
    Valid,
    Invalid,
}

/// The form value plus everything derived from it for display.
///
/// All mutation goes through [`set_text`](Self::set_text),
/// [`set_terms`](Self::set_terms) and [`reset`](Self::reset), which update
/// the indicators, the checklist and the report in the same step so they can
/// never drift from the values.
#[derive(Debug, Clone, Default)]
pub struct FormSync {
    state: FormState,
    statuses: HashMap<Field, FieldStatus>,
    strength: PasswordStrength,
    report: ValidationReport,
}

impl FormSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Indicator for a field. Bio and the checkbox never carry one.
    pub fn status(&self, field: Field) -> FieldStatus {
        self.statuses.get(&field).copied().unwrap_or_default()
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Apply one value-change event to a text field and rebuild everything
    /// derived from it.
    ///
    /// A password change also refreshes the checklist and, when the
    /// confirmation has been touched, re-evaluates its match indicator so it
    /// cannot go stale against the new password.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> &ValidationReport {
        self.state.set_value(field, value);

        match field {
            Field::Password => {
                self.mark(Field::Password);
                self.strength = PasswordStrength::of(&self.state.password);
                if self.status(Field::ConfirmPassword) != FieldStatus::Unset {
                    self.mark(Field::ConfirmPassword);
                }
            }
            // Free text and the checkbox carry no inline indicator; the bio
            // drives the sanitization preview straight from its value.
            Field::Bio | Field::Terms => {}
            _ => self.mark(field),
        }

        self.report = ValidationReport::build(&self.state);
        &self.report
    }

    /// Toggle the terms checkbox. The box itself is its own indicator, so
    /// no status is recorded, but the report includes it while ticked.
    pub fn set_terms(&mut self, accepted: bool) -> &ValidationReport {
        self.state.terms = accepted;
        debug!("[sync] terms -> {}", accepted);
        self.report = ValidationReport::build(&self.state);
        &self.report
    }

    /// Clear all values, indicators, the checklist and the report. Used by
    /// the clear action and the delayed post-submit reset.
    pub fn reset(&mut self) {
        self.state.clear();
        self.statuses.clear();
        self.strength = PasswordStrength::default();
        self.report = ValidationReport::default();
        debug!("[sync] reset");
    }

    fn mark(&mut self, field: Field) {
        let status = if self.state.field_valid(field) {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        };
        debug!("[sync] {} -> {:?}", field, status);
        self.statuses.insert(field, status);
    }
}
