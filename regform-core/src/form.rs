//! Explicit form state, passed to every validation and submit call.

use crate::field::Field;
use crate::rules;

/// The raw values of the registration form: eight text fields plus the
/// terms checkbox.
///
/// This is a plain value with no UI binding. The surface owns one instance
/// and mutates it from the active event handler only; everything else reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
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

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text of a field. The checkbox has no text and yields `""`.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Phone => &self.phone,
            Field::Age => &self.age,
            Field::Website => &self.website,
            Field::Bio => &self.bio,
            Field::Terms => "",
        }
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Username => self.username = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
            Field::Phone => self.phone = value,
            Field::Age => self.age = value,
            Field::Website => self.website = value,
            Field::Bio => self.bio = value,
            Field::Terms => {}
        }
    }

    /// Current validity of one field against the live state. Confirmation is
    /// relational (equality with the password), terms is the checkbox flag.
    pub fn field_valid(&self, field: Field) -> bool {
        match field {
            Field::Username => rules::validate_username(&self.username),
            Field::Email => rules::validate_email(&self.email),
            Field::Password => rules::validate_password(&self.password),
            Field::ConfirmPassword => {
                rules::validate_confirmation(&self.password, &self.confirm_password)
            }
            Field::Phone => rules::validate_phone(&self.phone),
            Field::Age => rules::validate_age(&self.age),
            Field::Website => rules::validate_website(&self.website),
            Field::Bio => true,
            Field::Terms => rules::validate_terms(self.terms),
        }
    }

    /// True when a field would appear in the aggregate report: non-empty
    /// text, or a ticked checkbox.
    pub fn has_value(&self, field: Field) -> bool {
        match field {
            Field::Terms => self.terms,
            _ => !self.value(field).is_empty(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_is_relational() {
        let mut state = FormState::new();
        state.password = "TestPass123".into();
        state.confirm_password = "TestPass123".into();
        assert!(state.field_valid(Field::ConfirmPassword));

        state.password = "Changed123".into();
        assert!(!state.field_valid(Field::ConfirmPassword));
    }

    #[test]
    fn test_has_value() {
        let mut state = FormState::new();
        assert!(!state.has_value(Field::Username));
        assert!(!state.has_value(Field::Terms));

        state.set_value(Field::Username, "test123");
        state.terms = true;
        assert!(state.has_value(Field::Username));
        assert!(state.has_value(Field::Terms));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = FormState::new();
        state.set_value(Field::Bio, "<b>hi</b>");
        state.terms = true;
        state.clear();
        assert_eq!(state, FormState::default());
    }
}
