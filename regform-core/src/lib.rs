//! Rule engine and state-update protocol for the registration form demo:
//! field validators, the HTML-escape sanitizer, the password strength
//! checklist, per-field indicator synchronization, the aggregate validation
//! report, the submission gate and the deadline scheduler behind timed UI
//! effects.
//!
//! Everything here is synchronous and deterministic. The crate does no I/O
//! and owns no clock: scheduler calls take explicit `Instant`s, so tests
//! simulate time instead of sleeping.

pub mod field;
pub mod form;
pub mod report;
pub mod rules;
pub mod sanitize;
pub mod schedule;
pub mod strength;
pub mod submit;
pub mod sync;

pub use field::Field;
pub use form::FormState;
pub use report::{ReportEntry, ValidationReport};
pub use sanitize::{sanitize_input, sanitize_preview};
pub use schedule::{Scheduler, TaskId};
pub use strength::PasswordStrength;
pub use submit::{FormSnapshot, SanitizedSnapshot, SubmitOutcome, submit};
pub use sync::{FieldStatus, FormSync};
