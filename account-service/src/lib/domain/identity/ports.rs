use async_trait::async_trait;

use crate::domain::identity::models::AccountId;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::SignupCommand;
use crate::domain::identity::models::UpdateAccountCommand;
use crate::identity::errors::IdentityError;

/// Port for identity domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Create a new identity after full credential validation.
    ///
    /// Rule order: username uniqueness, email uniqueness, password/confirm
    /// match, strength pattern. The first failing rule is returned;
    /// `confirm_password` is discarded before anything is persisted.
    ///
    /// # Arguments
    /// * `command` - Boundary-validated signup fields
    ///
    /// # Returns
    /// Created identity with `is_active = true`
    ///
    /// # Errors
    /// * `Validation` - A credential rule failed (field-keyed)
    /// * `Conflict` - Lost a uniqueness race at the store
    /// * `DatabaseError` - Store operation failed
    async fn sign_up(&self, command: SignupCommand) -> Result<Identity, IdentityError>;

    /// Verify an email/password pair.
    ///
    /// The failure is identical whether the email is unknown or the
    /// password is wrong, so responses cannot be used to enumerate
    /// registered addresses.
    ///
    /// # Arguments
    /// * `email` - Authentication lookup key
    /// * `password` - Plaintext password to verify
    ///
    /// # Returns
    /// The verified identity
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `DatabaseError` - Store operation failed
    async fn authenticate(&self, email: &str, password: &str) -> Result<Identity, IdentityError>;

    /// Retrieve one identity by identifier.
    ///
    /// # Arguments
    /// * `id` - Account ID
    ///
    /// # Returns
    /// Identity entity
    ///
    /// # Errors
    /// * `NotFound` - Identity does not exist
    /// * `DatabaseError` - Store operation failed
    async fn get_account(&self, id: &AccountId) -> Result<Identity, IdentityError>;

    /// Retrieve all identities.
    ///
    /// # Returns
    /// Vector of all identities
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_accounts(&self) -> Result<Vec<Identity>, IdentityError>;

    /// Update an existing identity with optional fields.
    ///
    /// Plain fields are merged one by one from an explicit allow-list; a
    /// supplied password is rehashed through the dedicated hashing path.
    /// Uniqueness is not re-validated here — the store constraint is the
    /// backstop.
    ///
    /// # Arguments
    /// * `id` - Account ID to update
    /// * `command` - Optional username, email, is_active, and password
    ///
    /// # Returns
    /// Updated identity
    ///
    /// # Errors
    /// * `NotFound` - Identity does not exist
    /// * `Conflict` - New username or email collides at the store
    /// * `DatabaseError` - Store operation failed
    async fn update_account(
        &self,
        id: &AccountId,
        command: UpdateAccountCommand,
    ) -> Result<Identity, IdentityError>;

    /// Delete an existing identity.
    ///
    /// # Arguments
    /// * `id` - Account ID to delete
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `NotFound` - Identity does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete_account(&self, id: &AccountId) -> Result<(), IdentityError>;
}

/// Persistence operations for the identity store.
#[async_trait]
pub trait IdentityRepository: Send + Sync + 'static {
    /// Persist a new identity.
    ///
    /// The store's unique constraints are authoritative: a racing insert
    /// with the same username or email must fail as a conflict, never
    /// corrupt state.
    ///
    /// # Arguments
    /// * `identity` - Identity entity to insert
    ///
    /// # Returns
    /// Inserted identity entity
    ///
    /// # Errors
    /// * `Conflict` - Username or email already stored
    /// * `DatabaseError` - Store operation failed
    async fn insert(&self, identity: Identity) -> Result<Identity, IdentityError>;

    /// Retrieve an identity by identifier.
    ///
    /// # Arguments
    /// * `id` - Account ID
    ///
    /// # Returns
    /// Optional identity entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Identity>, IdentityError>;

    /// Retrieve an identity by email address, exact match.
    ///
    /// # Arguments
    /// * `email` - Email address string
    ///
    /// # Returns
    /// Optional identity entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, IdentityError>;

    /// Check whether a username is already stored, exact match.
    ///
    /// # Arguments
    /// * `username` - Username string
    ///
    /// # Returns
    /// True if an identity with this username exists
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn exists_by_username(&self, username: &str) -> Result<bool, IdentityError>;

    /// Check whether an email is already stored, exact match.
    ///
    /// # Arguments
    /// * `email` - Email address string
    ///
    /// # Returns
    /// True if an identity with this email exists
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn exists_by_email(&self, email: &str) -> Result<bool, IdentityError>;

    /// Retrieve all identities.
    ///
    /// # Returns
    /// Vector of all identities
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<Identity>, IdentityError>;

    /// Update an existing identity.
    ///
    /// # Arguments
    /// * `identity` - Identity entity with updated fields
    ///
    /// # Returns
    /// Updated identity entity
    ///
    /// # Errors
    /// * `NotFound` - Identity does not exist
    /// * `Conflict` - New username or email already stored
    /// * `DatabaseError` - Store operation failed
    async fn update(&self, identity: Identity) -> Result<Identity, IdentityError>;

    /// Remove an identity.
    ///
    /// # Arguments
    /// * `id` - Account ID to delete
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `NotFound` - Identity does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete(&self, id: &AccountId) -> Result<(), IdentityError>;
}
