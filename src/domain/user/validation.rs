//! User validation utilities

use thiserror::Error;

use super::entity::User;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Please provide firstName, lastName and biography for the user")]
    MissingFields,

    #[error("firstName must be between {min} and {max} characters")]
    FirstNameLength { min: usize, max: usize },

    #[error("lastName must be between {min} and {max} characters")]
    LastNameLength { min: usize, max: usize },

    #[error("biography must be between {min} and {max} characters")]
    BiographyLength { min: usize, max: usize },
}

impl UserValidationError {
    /// Wire name of the field that failed, if a single one did
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingFields => None,
            Self::FirstNameLength { .. } => Some("firstName"),
            Self::LastNameLength { .. } => Some("lastName"),
            Self::BiographyLength { .. } => Some("biography"),
        }
    }
}

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 20;
pub const MIN_BIOGRAPHY_LENGTH: usize = 20;
pub const MAX_BIOGRAPHY_LENGTH: usize = 450;

/// Validate a candidate user
///
/// Rules, checked in order (first failure wins):
/// - firstName: 2 to 20 characters once trimmed
/// - lastName: 2 to 20 characters once trimmed
/// - biography: 20 to 450 characters once trimmed
pub fn validate_user(user: &User) -> Result<(), UserValidationError> {
    if !within(user.first_name(), MIN_NAME_LENGTH, MAX_NAME_LENGTH) {
        return Err(UserValidationError::FirstNameLength {
            min: MIN_NAME_LENGTH,
            max: MAX_NAME_LENGTH,
        });
    }

    if !within(user.last_name(), MIN_NAME_LENGTH, MAX_NAME_LENGTH) {
        return Err(UserValidationError::LastNameLength {
            min: MIN_NAME_LENGTH,
            max: MAX_NAME_LENGTH,
        });
    }

    if !within(user.biography(), MIN_BIOGRAPHY_LENGTH, MAX_BIOGRAPHY_LENGTH) {
        return Err(UserValidationError::BiographyLength {
            min: MIN_BIOGRAPHY_LENGTH,
            max: MAX_BIOGRAPHY_LENGTH,
        });
    }

    Ok(())
}

/// Validate a user about to be created
///
/// Blank fields are reported as a whole before any length rule is applied.
pub fn validate_new_user(user: &User) -> Result<(), UserValidationError> {
    let blank = [user.first_name(), user.last_name(), user.biography()]
        .iter()
        .any(|value| value.trim().is_empty());

    if blank {
        return Err(UserValidationError::MissingFields);
    }

    validate_user(user)
}

fn within(value: &str, min: usize, max: usize) -> bool {
    let len = value.trim().chars().count();
    (min..=max).contains(&len)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_BIO: &str = "Writes software and climbs mountains.";

    fn user(first: &str, last: &str, bio: &str) -> User {
        User::new(first, last, bio)
    }

    #[test]
    fn test_valid_user() {
        assert!(validate_user(&user("Ana", "Silva", VALID_BIO)).is_ok());
        assert!(validate_new_user(&user("Ana", "Silva", VALID_BIO)).is_ok());
    }

    #[test]
    fn test_first_name_bounds() {
        assert_eq!(
            validate_user(&user("A", "Silva", VALID_BIO)),
            Err(UserValidationError::FirstNameLength { min: 2, max: 20 })
        );
        assert!(validate_user(&user("Al", "Silva", VALID_BIO)).is_ok());
        assert!(validate_user(&user(&"a".repeat(20), "Silva", VALID_BIO)).is_ok());
        assert_eq!(
            validate_user(&user(&"a".repeat(21), "Silva", VALID_BIO)),
            Err(UserValidationError::FirstNameLength { min: 2, max: 20 })
        );
    }

    #[test]
    fn test_last_name_bounds() {
        assert_eq!(
            validate_user(&user("Ana", "S", VALID_BIO)),
            Err(UserValidationError::LastNameLength { min: 2, max: 20 })
        );
        assert!(validate_user(&user("Ana", "Si", VALID_BIO)).is_ok());
        assert!(validate_user(&user("Ana", &"s".repeat(20), VALID_BIO)).is_ok());
        assert_eq!(
            validate_user(&user("Ana", &"s".repeat(21), VALID_BIO)),
            Err(UserValidationError::LastNameLength { min: 2, max: 20 })
        );
    }

    #[test]
    fn test_biography_bounds() {
        let expected = Err(UserValidationError::BiographyLength { min: 20, max: 450 });

        assert_eq!(validate_user(&user("Ana", "Silva", &"b".repeat(19))), expected);
        assert!(validate_user(&user("Ana", "Silva", &"b".repeat(20))).is_ok());
        assert!(validate_user(&user("Ana", "Silva", &"b".repeat(450))).is_ok());
        assert_eq!(validate_user(&user("Ana", "Silva", &"b".repeat(451))), expected);
    }

    #[test]
    fn test_lengths_are_measured_trimmed() {
        // 20 characters of content padded with whitespace on both sides
        let padded = format!("  {}  ", "a".repeat(20));
        assert!(validate_user(&user(&padded, "Silva", VALID_BIO)).is_ok());

        // only one visible character
        assert_eq!(
            validate_user(&user("  A  ", "Silva", VALID_BIO)),
            Err(UserValidationError::FirstNameLength { min: 2, max: 20 })
        );

        let padded_bio = format!("   {}   ", "b".repeat(19));
        assert_eq!(
            validate_user(&user("Ana", "Silva", &padded_bio)),
            Err(UserValidationError::BiographyLength { min: 20, max: 450 })
        );
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        // 20 two-byte characters
        assert!(validate_user(&user(&"é".repeat(20), "Silva", VALID_BIO)).is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        let err = validate_user(&user("A", "S", "short")).unwrap_err();
        assert_eq!(err.field(), Some("firstName"));

        let err = validate_user(&user("Ana", "S", "short")).unwrap_err();
        assert_eq!(err.field(), Some("lastName"));

        let err = validate_user(&user("Ana", "Silva", "short")).unwrap_err();
        assert_eq!(err.field(), Some("biography"));
    }

    #[test]
    fn test_new_user_blank_fields() {
        assert_eq!(
            validate_new_user(&user("", "Silva", VALID_BIO)),
            Err(UserValidationError::MissingFields)
        );
        assert_eq!(
            validate_new_user(&user("Ana", "   ", VALID_BIO)),
            Err(UserValidationError::MissingFields)
        );
        assert_eq!(
            validate_new_user(&user("Ana", "Silva", "\t\n")),
            Err(UserValidationError::MissingFields)
        );
    }

    #[test]
    fn test_blank_fields_fail_range_check_without_presence_check() {
        assert_eq!(
            validate_user(&user("", "Silva", VALID_BIO)),
            Err(UserValidationError::FirstNameLength { min: 2, max: 20 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UserValidationError::FirstNameLength { min: 2, max: 20 }.to_string(),
            "firstName must be between 2 and 20 characters"
        );
        assert_eq!(UserValidationError::MissingFields.field(), None);
    }
}
