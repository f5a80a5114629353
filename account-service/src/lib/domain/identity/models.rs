use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::identity::errors::AccountIdError;
use crate::identity::errors::EmailError;
use crate::identity::errors::PasswordRuleError;
use crate::identity::errors::UsernameError;

/// Identity aggregate entity.
///
/// The account record: who can sign in and with what credential.
/// `password_hash` is write-only derived state; no code path hands it (or
/// the plaintext it came from) back to a client.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: AccountId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Identity unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    ///
    /// # Returns
    /// AccountId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an account ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed AccountId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AccountIdError> {
        Uuid::parse_str(s)
            .map(AccountId)
            .map_err(|e| AccountIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Bounded at 75 characters; no character-class restrictions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 75;

    /// Create a new valid username.
    ///
    /// # Arguments
    /// * `username` - Raw username string
    ///
    /// # Returns
    /// Validated Username value object
    ///
    /// # Errors
    /// * `TooLong` - Username longer than 75 characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let length = username.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(username))
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Bounded at 75 characters and validated with an RFC 5322 compliant parser.
/// Lookups against the store use the exact string, case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    const MAX_LENGTH: usize = 75;

    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `TooLong` - Email longer than 75 characters
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let length = email.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Maximum accepted plaintext password length.
pub const PASSWORD_MAX_LENGTH: usize = 75;

/// Minimum plaintext password length under the strength rule.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Reject passwords over the accepted length.
///
/// Checked at the request boundary, before any store lookup.
///
/// # Errors
/// * `TooLong` - Password longer than 75 characters
pub fn check_password_length(password: &str) -> Result<(), PasswordRuleError> {
    let length = password.chars().count();
    if length > PASSWORD_MAX_LENGTH {
        return Err(PasswordRuleError::TooLong {
            max: PASSWORD_MAX_LENGTH,
            actual: length,
        });
    }
    Ok(())
}

/// Enforce the password strength rule.
///
/// A password must be at least 8 characters and contain at least one
/// letter, one digit, and one character that is neither.
///
/// # Errors
/// * `TooWeak` - Any part of the rule is not met
pub fn check_password_strength(password: &str) -> Result<(), PasswordRuleError> {
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());
    let long_enough = password.chars().count() >= PASSWORD_MIN_LENGTH;

    if has_letter && has_digit && has_symbol && long_enough {
        Ok(())
    } else {
        Err(PasswordRuleError::TooWeak)
    }
}

/// Command to create a new identity with boundary-validated fields.
///
/// The plaintext password and its confirmation travel together so the
/// service can apply the match and strength rules in order; neither is
/// ever persisted.
#[derive(Debug)]
pub struct SignupCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
    pub confirm_password: String,
}

impl SignupCommand {
    /// Construct a new signup command.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `email` - Validated email address
    /// * `password` - Plain text password (hashed by the service)
    /// * `confirm_password` - Repeated password, discarded after the match check
    pub fn new(
        username: Username,
        email: EmailAddress,
        password: String,
        confirm_password: String,
    ) -> Self {
        Self {
            username,
            email,
            password,
            confirm_password,
        }
    }
}

/// Command to update an existing identity with optional validated fields.
///
/// All fields are optional to support partial updates. `password` is kept
/// apart from the plain fields: the service routes it through the hashing
/// path, never through the generic merge.
#[derive(Debug)]
pub struct UpdateAccountCommand {
    pub username: Option<Username>,
    pub email: Option<EmailAddress>,
    pub is_active: Option<bool>,
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_length_boundary() {
        assert!(Username::new("a".repeat(75)).is_ok());
        assert!(matches!(
            Username::new("a".repeat(76)),
            Err(UsernameError::TooLong { max: 75, actual: 76 })
        ));
    }

    #[test]
    fn test_email_rejects_bad_format() {
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
        assert!(EmailAddress::new("a@x.com".to_string()).is_ok());
    }

    #[test]
    fn test_email_length_checked_before_format() {
        let local = "a".repeat(70);
        let result = EmailAddress::new(format!("{}@x.com", local));
        assert!(matches!(result, Err(EmailError::TooLong { .. })));
    }

    #[test]
    fn test_password_strength_boundaries() {
        // No digit or symbol
        assert!(check_password_strength("alllettersnodigit").is_err());
        // 8 chars with letter, digit, and symbol
        assert!(check_password_strength("Ab1!2345").is_ok());
        // 7 chars, otherwise valid
        assert!(check_password_strength("Ab1!234").is_err());
        // Underscore counts as the symbol
        assert!(check_password_strength("Ab1_2345").is_ok());
    }

    #[test]
    fn test_account_id_round_trip() {
        let id = AccountId::new();
        let parsed = AccountId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_account_id_rejects_garbage() {
        assert!(AccountId::from_string("not-a-uuid").is_err());
    }
}
