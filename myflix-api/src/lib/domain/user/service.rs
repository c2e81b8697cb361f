use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::movie::models::MovieId;
use crate::domain::movie::models::MovieSummary;
use crate::domain::movie::ports::MovieRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::ListKind;
use crate::domain::user::models::ProfileChanges;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Reads movies only to expand list references; it never writes to the catalog.
pub struct UserService<UR, MR>
where
    UR: UserRepository,
    MR: MovieRepository,
{
    repository: Arc<UR>,
    movies: Arc<MR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR, MR> UserService<UR, MR>
where
    UR: UserRepository,
    MR: MovieRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `movies` - Catalog used to expand list references
    pub fn new(repository: Arc<UR>, movies: Arc<MR>) -> Self {
        Self {
            repository,
            movies,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    fn hash_password(&self, password: &str) -> Result<String, UserError> {
        self.password_hasher
            .hash(password)
            .map_err(|e| UserError::PasswordHashing(e.to_string()))
    }

    /// Resolve both lists of every user with a single catalog lookup.
    ///
    /// References to movies that no longer exist are skipped.
    async fn expand(&self, users: Vec<User>) -> Result<Vec<UserProfile>, UserError> {
        let wanted: Vec<MovieId> = users
            .iter()
            .flat_map(|user| user.favorite_movies.iter().chain(user.to_watch.iter()))
            .copied()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let summaries: HashMap<MovieId, MovieSummary> = if wanted.is_empty() {
            HashMap::new()
        } else {
            self.movies
                .find_by_ids(&wanted)
                .await?
                .iter()
                .map(|movie| (movie.id, movie.summary()))
                .collect()
        };

        let resolve = |ids: &[MovieId]| -> Vec<MovieSummary> {
            ids.iter()
                .filter_map(|id| summaries.get(id).cloned())
                .collect()
        };

        Ok(users
            .into_iter()
            .map(|user| UserProfile {
                favorite_movies: resolve(&user.favorite_movies),
                to_watch: resolve(&user.to_watch),
                user,
            })
            .collect())
    }

    async fn expand_one(&self, user: User) -> Result<UserProfile, UserError> {
        let email = user.email.to_string();
        self.expand(vec![user])
            .await?
            .pop()
            .ok_or(UserError::NotFound(email))
    }
}

#[async_trait]
impl<UR, MR> UserServicePort for UserService<UR, MR>
where
    UR: UserRepository,
    MR: MovieRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let user = User {
            id: UserId::new(),
            password_hash: self.hash_password(command.password.expose())?,
            email: command.email,
            name: command.name,
            birthday: command.birthday,
            favorite_movies: Vec::new(),
            to_watch: Vec::new(),
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(email = %created_user.email, "User registered");

        Ok(created_user)
    }

    async fn list_users(&self) -> Result<Vec<UserProfile>, UserError> {
        let users = self.repository.list_all().await?;
        self.expand(users).await
    }

    async fn get_user(&self, email: &str) -> Result<UserProfile, UserError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFound(email.to_string()))?;

        self.expand_one(user).await
    }

    async fn update_user(
        &self,
        email: &str,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let password_hash = command
            .password
            .map(|password| self.hash_password(password.expose()))
            .transpose()?;

        let changes = ProfileChanges {
            name: command.name,
            password_hash,
            birthday: command.birthday,
        };

        let updated_user = self.repository.update_profile(email, changes).await?;
        tracing::info!(email = %updated_user.email, "User updated");

        Ok(updated_user)
    }

    async fn delete_user(&self, email: &str) -> Result<(), UserError> {
        self.repository.delete(email).await?;
        tracing::info!(email = %email, "User deleted");

        Ok(())
    }

    async fn add_to_list(
        &self,
        email: &str,
        kind: ListKind,
        movie_id: MovieId,
    ) -> Result<UserProfile, UserError> {
        let user = self.repository.add_to_list(email, kind, movie_id).await?;
        tracing::debug!(email = %email, list = %kind, movie_id = %movie_id, "Movie listed");

        self.expand_one(user).await
    }

    async fn remove_from_list(
        &self,
        email: &str,
        kind: ListKind,
        movie_id: MovieId,
    ) -> Result<UserProfile, UserError> {
        let user = self
            .repository
            .remove_from_list(email, kind, movie_id)
            .await?;
        tracing::debug!(email = %email, list = %kind, movie_id = %movie_id, "Movie unlisted");

        self.expand_one(user).await
    }
}
