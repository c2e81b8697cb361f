use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Actor;
use crate::domain::movie::models::ActorId;
use crate::domain::movie::models::Director;
use crate::domain::movie::models::Genre;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieId;
use crate::domain::movie::ports::MovieRepository;

const MOVIE_COLUMNS: &str = "id, title, description, genre_name, genre_description, \
     director_name, director_bio, director_birth, director_death, image_path, featured, \
     release_year, mpa, imdb, actor_ids";

/// One `movies` row; genre and director are flattened into prefixed columns.
#[derive(Debug, FromRow)]
struct MovieRow {
    id: Uuid,
    title: String,
    description: String,
    genre_name: String,
    genre_description: Option<String>,
    director_name: String,
    director_bio: Option<String>,
    director_birth: Option<NaiveDate>,
    director_death: Option<NaiveDate>,
    image_path: String,
    featured: bool,
    release_year: Option<i32>,
    mpa: String,
    imdb: Option<f64>,
    actor_ids: Vec<Uuid>,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: MovieId(row.id),
            title: row.title,
            description: row.description,
            genre: Genre {
                name: row.genre_name,
                description: row.genre_description,
            },
            director: Director {
                name: row.director_name,
                bio: row.director_bio,
                birth: row.director_birth,
                death: row.director_death,
            },
            image_path: row.image_path,
            featured: row.featured,
            release_year: row.release_year,
            mpa: row.mpa,
            imdb: row.imdb,
            actor_ids: row.actor_ids.into_iter().map(ActorId).collect(),
        }
    }
}

#[derive(Debug, FromRow)]
struct GenreRow {
    genre_name: String,
    genre_description: Option<String>,
}

#[derive(Debug, FromRow)]
struct DirectorRow {
    director_name: String,
    director_bio: Option<String>,
    director_birth: Option<NaiveDate>,
    director_death: Option<NaiveDate>,
}

#[derive(Debug, FromRow)]
struct ActorRow {
    id: Uuid,
    name: String,
    bio: String,
    birthday: Option<NaiveDate>,
    image_path: String,
}

impl From<ActorRow> for Actor {
    fn from(row: ActorRow) -> Self {
        Actor {
            id: ActorId(row.id),
            name: row.name,
            bio: row.bio,
            birthday: row.birthday,
            image_path: row.image_path,
        }
    }
}

pub struct PostgresMovieRepository {
    pool: PgPool,
}

impl PostgresMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for PostgresMovieRepository {
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError> {
        let rows = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {} FROM movies ORDER BY created_at, id",
            MOVIE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, MovieError> {
        let row = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {} FROM movies WHERE title = $1 ORDER BY created_at, id LIMIT 1",
            MOVIE_COLUMNS
        ))
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        Ok(row.map(Movie::from))
    }

    async fn find_by_ids(&self, ids: &[MovieId]) -> Result<Vec<Movie>, MovieError> {
        let uuids: Vec<Uuid> = ids.iter().map(|id| id.0).collect();

        let rows = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {} FROM movies WHERE id = ANY($1)",
            MOVIE_COLUMNS
        ))
        .bind(uuids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find_genre(&self, name: &str) -> Result<Option<Genre>, MovieError> {
        let row = sqlx::query_as::<_, GenreRow>(
            r#"
            SELECT genre_name, genre_description
            FROM movies
            WHERE genre_name = $1
            ORDER BY created_at, id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        Ok(row.map(|r| Genre {
            name: r.genre_name,
            description: r.genre_description,
        }))
    }

    async fn find_director(&self, name: &str) -> Result<Option<Director>, MovieError> {
        let row = sqlx::query_as::<_, DirectorRow>(
            r#"
            SELECT director_name, director_bio, director_birth, director_death
            FROM movies
            WHERE director_name = $1
            ORDER BY created_at, id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        Ok(row.map(|r| Director {
            name: r.director_name,
            bio: r.director_bio,
            birth: r.director_birth,
            death: r.director_death,
        }))
    }

    async fn find_actors_by_ids(&self, ids: &[ActorId]) -> Result<Vec<Actor>, MovieError> {
        let uuids: Vec<Uuid> = ids.iter().map(|id| id.0).collect();

        let rows = sqlx::query_as::<_, ActorRow>(
            r#"
            SELECT id, name, bio, birthday, image_path
            FROM actors
            WHERE id = ANY($1)
            "#,
        )
        .bind(uuids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MovieError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Actor::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_nests_genre_and_director() {
        let actor = Uuid::new_v4();
        let row = MovieRow {
            id: Uuid::new_v4(),
            title: "Alien".to_string(),
            description: "In space no one can hear you scream".to_string(),
            genre_name: "Science Fiction".to_string(),
            genre_description: None,
            director_name: "Ridley Scott".to_string(),
            director_bio: Some("English filmmaker".to_string()),
            director_birth: NaiveDate::from_ymd_opt(1937, 11, 30),
            director_death: None,
            image_path: "alien.png".to_string(),
            featured: true,
            release_year: Some(1979),
            mpa: "R".to_string(),
            imdb: Some(8.5),
            actor_ids: vec![actor],
        };

        let movie = Movie::from(row);

        assert_eq!(movie.genre.name, "Science Fiction");
        assert_eq!(movie.director.bio.as_deref(), Some("English filmmaker"));
        assert_eq!(movie.actor_ids, vec![ActorId(actor)]);
    }
}
