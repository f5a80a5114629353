use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::identity::models::check_password_strength;
use crate::domain::identity::models::AccountId;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::SignupCommand;
use crate::domain::identity::models::UpdateAccountCommand;
use crate::identity::errors::IdentityError;
use crate::identity::errors::PasswordRuleError;
use crate::identity::errors::ValidationError;
use crate::identity::ports::AccountServicePort;
use crate::identity::ports::IdentityRepository;

/// Domain service implementation for identity operations.
///
/// Concrete implementation of AccountServicePort with dependency injection.
pub struct AccountService<R>
where
    R: IdentityRepository,
{
    repository: Arc<R>,
    password_hasher: auth::PasswordHasher,
}

impl<R> AccountService<R>
where
    R: IdentityRepository,
{
    /// Create a new account service with an injected repository.
    ///
    /// # Arguments
    /// * `repository` - Identity persistence implementation
    ///
    /// # Returns
    /// Configured account service instance
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<R> AccountServicePort for AccountService<R>
where
    R: IdentityRepository,
{
    async fn sign_up(&self, command: SignupCommand) -> Result<Identity, IdentityError> {
        // Uniqueness checks are read-then-write; the store constraint
        // catches the race on insert.
        if self
            .repository
            .exists_by_username(command.username.as_str())
            .await?
        {
            return Err(ValidationError::username_taken().into());
        }

        if self
            .repository
            .exists_by_email(command.email.as_str())
            .await?
        {
            return Err(ValidationError::email_taken().into());
        }

        if command.password != command.confirm_password {
            return Err(PasswordRuleError::Mismatch.into());
        }

        check_password_strength(&command.password)?;

        // confirm_password is dropped here with the rest of the command
        let password_hash = self.password_hasher.hash(&command.password)?;

        let identity = Identity {
            id: AccountId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            is_active: true,
            created_at: Utc::now(),
        };

        self.repository.insert(identity).await
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<Identity, IdentityError> {
        // Unknown email and wrong password collapse into the same error.
        // The is_active flag is deliberately not consulted here.
        let identity = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify(password, &identity.password_hash)?;

        if !is_valid {
            return Err(IdentityError::InvalidCredentials);
        }

        Ok(identity)
    }

    async fn get_account(&self, id: &AccountId) -> Result<Identity, IdentityError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(IdentityError::NotFound(id.to_string()))
    }

    async fn list_accounts(&self) -> Result<Vec<Identity>, IdentityError> {
        self.repository.list_all().await
    }

    async fn update_account(
        &self,
        id: &AccountId,
        command: UpdateAccountCommand,
    ) -> Result<Identity, IdentityError> {
        let mut identity = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(IdentityError::NotFound(id.to_string()))?;

        // Allow-listed merge: each plain field is applied by name. The
        // password never joins this list — it only reaches the record as
        // a hash, below.
        if let Some(new_username) = command.username {
            identity.username = new_username;
        }

        if let Some(new_email) = command.email {
            identity.email = new_email;
        }

        if let Some(new_is_active) = command.is_active {
            identity.is_active = new_is_active;
        }

        if let Some(new_password) = command.password {
            identity.password_hash = self.password_hasher.hash(&new_password)?;
        }

        self.repository.update(identity).await
    }

    async fn delete_account(&self, id: &AccountId) -> Result<(), IdentityError> {
        self.repository.delete(id).await
    }
}
