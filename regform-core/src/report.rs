//! Live validation summary across the whole form.

use crate::field::Field;
use crate::form::FormState;

/// One line of the summary: a field that currently has a value, and whether
/// it passes its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportEntry {
    pub field: Field,
    pub valid: bool,
}

/// The whole-form summary panel content.
///
/// A pure projection of [`FormState`]: rebuilt from scratch on every
/// relevant change, never appended to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    entries: Vec<ReportEntry>,
}

impl ValidationReport {
    /// Build the fixed-order summary for the current state. Fields without
    /// a value are omitted entirely rather than shown as invalid, and the
    /// checkbox appears only while ticked.
    pub fn build(state: &FormState) -> Self {
        let entries = Field::REPORTED
            .into_iter()
            .filter(|&field| state.has_value(field))
            .map(|field| ReportEntry {
                field,
                valid: state.field_valid(field),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// True when no field has a value yet; the surface shows its
    /// placeholder text instead of an empty list.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
