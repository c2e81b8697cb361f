use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::movie::models::MovieId;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::ListKind;
use crate::domain::user::models::ProfileChanges;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

const USER_COLUMNS: &str =
    "id, email, name, password_hash, birthday, favorite_movies, to_watch, created_at";

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    name: String,
    password_hash: String,
    birthday: Option<NaiveDate>,
    favorite_movies: Vec<Uuid>,
    to_watch: Vec<Uuid>,
    created_at: DateTime<Utc>,
}

/// Stored rows were validated on the way in; a row that no longer parses is
/// a store fault, not a client error.
impl TryFrom<UserRow> for User {
    type Error = UserError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = EmailAddress::new(row.email).map_err(|e| {
            UserError::DatabaseError(format!("stored user {} has an invalid email: {}", row.id, e))
        })?;
        let name = DisplayName::new(row.name).map_err(|e| {
            UserError::DatabaseError(format!("stored user {} has an invalid name: {}", row.id, e))
        })?;

        Ok(User {
            id: UserId(row.id),
            email,
            name,
            password_hash: row.password_hash,
            birthday: row.birthday,
            favorite_movies: row.favorite_movies.into_iter().map(MovieId).collect(),
            to_watch: row.to_watch.into_iter().map(MovieId).collect(),
            created_at: row.created_at,
        })
    }
}

fn list_column(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Favorites => "favorite_movies",
        ListKind::ToWatch => "to_watch",
    }
}

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a single-row `UPDATE ... RETURNING` and map a missing row to `NotFound`.
    async fn update_returning(
        &self,
        sql: &str,
        email: &str,
        movie_id: MovieId,
    ) -> Result<User, UserError> {
        let row = sqlx::query_as::<_, UserRow>(sql)
            .bind(email)
            .bind(movie_id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.ok_or_else(|| UserError::NotFound(email.to_string()))?
            .try_into()
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let favorite_movies: Vec<Uuid> = user.favorite_movies.iter().map(|id| id.0).collect();
        let to_watch: Vec<Uuid> = user.to_watch.iter().map(|id| id.0).collect();

        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, password_hash, birthday, favorite_movies, to_watch, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.id.0)
        .bind(user.email.as_str())
        .bind(user.name.as_str())
        .bind(&user.password_hash)
        .bind(user.birthday)
        .bind(favorite_movies)
        .bind(to_watch)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
                    return UserError::EmailAlreadyExists(user.email.as_str().to_string());
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users ORDER BY created_at, id",
            USER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn update_profile(
        &self,
        email: &str,
        changes: ProfileChanges,
    ) -> Result<User, UserError> {
        // Absent fields bind as NULL and keep the stored value
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                password_hash = COALESCE($3, password_hash),
                birthday = COALESCE($4, birthday),
                updated_at = NOW()
            WHERE email = $1
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(email)
        .bind(changes.name.as_ref().map(|name| name.as_str()))
        .bind(changes.password_hash.as_deref())
        .bind(changes.birthday)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.ok_or_else(|| UserError::NotFound(email.to_string()))?
            .try_into()
    }

    async fn delete(&self, email: &str) -> Result<(), UserError> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(email.to_string()));
        }

        Ok(())
    }

    async fn add_to_list(
        &self,
        email: &str,
        kind: ListKind,
        movie_id: MovieId,
    ) -> Result<User, UserError> {
        let column = list_column(kind);
        let sql = format!(
            r#"
            UPDATE users
            SET {column} = CASE
                    WHEN $2 = ANY({column}) THEN {column}
                    ELSE array_append({column}, $2)
                END,
                updated_at = NOW()
            WHERE email = $1
            RETURNING {returning}
            "#,
            column = column,
            returning = USER_COLUMNS
        );

        self.update_returning(&sql, email, movie_id).await
    }

    async fn remove_from_list(
        &self,
        email: &str,
        kind: ListKind,
        movie_id: MovieId,
    ) -> Result<User, UserError> {
        let column = list_column(kind);
        let sql = format!(
            r#"
            UPDATE users
            SET {column} = array_remove({column}, $2),
                updated_at = NOW()
            WHERE email = $1
            RETURNING {returning}
            "#,
            column = column,
            returning = USER_COLUMNS
        );

        self.update_returning(&sql, email, movie_id).await
    }
}
