use async_trait::async_trait;

use crate::domain::movie::models::MovieId;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::ListKind;
use crate::domain::user::models::ProfileChanges;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserProfile;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated email, name, password and optional birthday
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered (store untouched)
    /// * `PasswordHashing` - Password could not be hashed
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// List every user with both movie lists expanded.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_users(&self) -> Result<Vec<UserProfile>, UserError>;

    /// Retrieve one user by email with both movie lists expanded.
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, email: &str) -> Result<UserProfile, UserError>;

    /// Update name, password and/or birthday in one store operation.
    ///
    /// # Arguments
    /// * `email` - Email of the user to update
    /// * `command` - Command with optional name, password and birthday fields
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `PasswordHashing` - New password could not be hashed
    /// * `DatabaseError` - Database operation failed
    async fn update_user(&self, email: &str, command: UpdateUserCommand)
        -> Result<User, UserError>;

    /// Delete a user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, email: &str) -> Result<(), UserError>;

    /// Add a movie to one of the user's lists. Adding a movie that is
    /// already listed leaves the list unchanged.
    ///
    /// # Returns
    /// Updated user with both lists expanded
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn add_to_list(
        &self,
        email: &str,
        kind: ListKind,
        movie_id: MovieId,
    ) -> Result<UserProfile, UserError>;

    /// Remove a movie from one of the user's lists.
    ///
    /// # Returns
    /// Updated user with both lists expanded
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn remove_from_list(
        &self,
        email: &str,
        kind: ListKind,
        movie_id: MovieId,
    ) -> Result<UserProfile, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve all users from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Apply the provided field changes atomically.
    ///
    /// # Returns
    /// User as stored after the update
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_profile(&self, email: &str, changes: ProfileChanges)
        -> Result<User, UserError>;

    /// Remove user from storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, email: &str) -> Result<(), UserError>;

    /// Atomically append `movie_id` to a list unless it is already present.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn add_to_list(
        &self,
        email: &str,
        kind: ListKind,
        movie_id: MovieId,
    ) -> Result<User, UserError>;

    /// Atomically remove `movie_id` from a list.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn remove_from_list(
        &self,
        email: &str,
        kind: ListKind,
        movie_id: MovieId,
    ) -> Result<User, UserError>;
}
