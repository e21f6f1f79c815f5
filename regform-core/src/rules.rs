//! Field validation rules.
//!
//! Every rule is total: malformed input yields `false`, never an error or a
//! panic. Rules read only the values they are given and never mutate them.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]{3,20}$").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Password alphabet plus minimum length. The regex crate doesn't support
// lookaheads, so the three character-class requirements are checked manually.
static PASSWORD_ALPHABET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\d@$!%*?&]{8,}$").unwrap());

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\+66|0)[0-9]{8,9}$").unwrap());

// Leading run of digits with an optional sign; whatever follows is ignored.
static AGE_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+").unwrap());

/// 3-20 characters, ASCII letters, digits and underscore only.
pub fn validate_username(value: &str) -> bool {
    USERNAME_REGEX.is_match(value)
}

/// Single `@` with no whitespace and at least one dot in the domain.
/// Deliberately not RFC-complete.
pub fn validate_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// At least 8 characters drawn from the closed alphabet `a-zA-Z0-9@$!%*?&`,
/// containing at least one lowercase letter, one uppercase letter and one
/// digit.
///
/// The alphabet is restrictive on purpose: a character outside it fails the
/// whole check even when the other three conditions hold. Do not loosen.
pub fn validate_password(value: &str) -> bool {
    PASSWORD_ALPHABET_REGEX.is_match(value)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

/// Thai phone number: `+66` or a leading `0`, then 8 or 9 digits. Whitespace
/// is stripped before matching, so grouped input like `081 234 5678` passes.
pub fn validate_phone(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_REGEX.is_match(&compact)
}

/// Whole number between 1 and 120 inclusive. The number is read from the
/// front of the trimmed input the way a lenient parse reads it: `60abc`
/// counts as 60 and `12.5` as 12. Input with no leading digits has no
/// numeric value and is rejected.
pub fn validate_age(value: &str) -> bool {
    match AGE_PREFIX_REGEX.find(value.trim()) {
        Some(digits) => match digits.as_str().parse::<i64>() {
            Ok(age) => (1..=120).contains(&age),
            // A magnitude that overflows i64 is far outside 1..=120.
            Err(_) => false,
        },
        None => false,
    }
}

/// Optional field: empty is valid, anything else must parse as an absolute
/// URL. Parse failures are converted to `false` here and never escape.
pub fn validate_website(value: &str) -> bool {
    value.is_empty() || Url::parse(value).is_ok()
}

/// The confirmation must equal the live password value.
pub fn validate_confirmation(password: &str, confirmation: &str) -> bool {
    confirmation == password
}

/// The terms checkbox must be ticked.
pub fn validate_terms(accepted: bool) -> bool {
    accepted
}
