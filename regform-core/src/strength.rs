//! Per-criterion password strength breakdown for the requirements checklist.

/// The four checklist criteria, recomputed on every password keystroke.
///
/// This is a progressive-disclosure aid, not the password rule itself: it
/// ignores [`validate_password`](crate::rules::validate_password)'s closed
/// alphabet, so all four flags can read true while the password check still
/// fails on an out-of-alphabet character. The two stay independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordStrength {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
}

impl PasswordStrength {
    pub fn of(password: &str) -> Self {
        Self {
            length: password.chars().count() >= 8,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
        }
    }

    /// Checklist rows in display order: (label, satisfied).
    pub fn checklist(&self) -> [(&'static str, bool); 4] {
        [
            ("At least 8 characters", self.length),
            ("One uppercase letter", self.uppercase),
            ("One lowercase letter", self.lowercase),
            ("One number", self.number),
        ]
    }

    pub fn all_met(&self) -> bool {
        self.length && self.uppercase && self.lowercase && self.number
    }
}
