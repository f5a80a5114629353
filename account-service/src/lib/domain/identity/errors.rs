use std::fmt;

use thiserror::Error;

/// Error for AccountId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountIdError {
    #[error("Invalid account ID format: {0}")]
    InvalidFormat(String),
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too long. Max {max} characters.")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email too long. Max {max} characters.")]
    TooLong { max: usize, actual: usize },

    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for password policy failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordRuleError {
    #[error("Password too long. Max {max} characters.")]
    TooLong { max: usize, actual: usize },

    #[error("Passwords do not match.")]
    Mismatch,

    #[error("Password must include a letter, number, and symbol.")]
    TooWeak,
}

/// Field a validation failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CredentialField::Username => "username",
            CredentialField::Email => "email",
            CredentialField::Password => "password",
            CredentialField::ConfirmPassword => "confirm_password",
        };
        name.fmt(f)
    }
}

/// Field-attributable validation failure.
///
/// Every failing credential rule produces exactly one of these; the field
/// tells the client which input to fix.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: CredentialField,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: CredentialField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Uniqueness failure for a username already present in the store.
    pub fn username_taken() -> Self {
        Self::new(CredentialField::Username, "Username already exists.")
    }

    /// Uniqueness failure for an email already present in the store.
    pub fn email_taken() -> Self {
        Self::new(CredentialField::Email, "Email already exists.")
    }
}

impl From<UsernameError> for ValidationError {
    fn from(err: UsernameError) -> Self {
        Self::new(CredentialField::Username, err.to_string())
    }
}

impl From<EmailError> for ValidationError {
    fn from(err: EmailError) -> Self {
        Self::new(CredentialField::Email, err.to_string())
    }
}

impl From<PasswordRuleError> for ValidationError {
    fn from(err: PasswordRuleError) -> Self {
        let field = match err {
            PasswordRuleError::Mismatch => CredentialField::ConfirmPassword,
            _ => CredentialField::Password,
        };
        Self::new(field, err.to_string())
    }
}

/// Top-level error for all identity operations
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    // Client-fixable input errors
    #[error("Invalid account ID: {0}")]
    InvalidAccountId(#[from] AccountIdError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    // Deliberately flattened: never reveals whether the email exists
    #[error("Invalid email or password.")]
    InvalidCredentials,

    // Uniqueness race lost at the store; constraint details stay internal
    #[error("Account already exists")]
    Conflict,

    #[error("Account not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<UsernameError> for IdentityError {
    fn from(err: UsernameError) -> Self {
        IdentityError::Validation(err.into())
    }
}

impl From<EmailError> for IdentityError {
    fn from(err: EmailError) -> Self {
        IdentityError::Validation(err.into())
    }
}

impl From<PasswordRuleError> for IdentityError {
    fn from(err: PasswordRuleError) -> Self {
        IdentityError::Validation(err.into())
    }
}

impl From<anyhow::Error> for IdentityError {
    fn from(err: anyhow::Error) -> Self {
        IdentityError::Unknown(err.to_string())
    }
}
