use async_trait::async_trait;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Actor;
use crate::domain::movie::models::ActorId;
use crate::domain::movie::models::Director;
use crate::domain::movie::models::Genre;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieDetails;
use crate::domain::movie::models::MovieId;

/// Port for catalog read operations.
#[async_trait]
pub trait MovieServicePort: Send + Sync + 'static {
    /// List every movie with actors resolved.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_movies(&self) -> Result<Vec<MovieDetails>, MovieError>;

    /// Retrieve one movie by exact title, with actors resolved.
    ///
    /// # Errors
    /// * `NotFound` - No movie has this title
    /// * `DatabaseError` - Database operation failed
    async fn get_movie(&self, title: &str) -> Result<MovieDetails, MovieError>;

    /// Retrieve the genre sub-document of the first movie filed under `name`.
    ///
    /// # Errors
    /// * `GenreNotFound` - No movie has this genre
    /// * `DatabaseError` - Database operation failed
    async fn get_genre(&self, name: &str) -> Result<Genre, MovieError>;

    /// Retrieve the director sub-document of the first movie directed by `name`.
    ///
    /// # Errors
    /// * `DirectorNotFound` - No movie has this director
    /// * `DatabaseError` - Database operation failed
    async fn get_director(&self, name: &str) -> Result<Director, MovieError>;
}

/// Persistence operations for the catalog.
#[async_trait]
pub trait MovieRepository: Send + Sync + 'static {
    /// Retrieve all movies ordered by title.
    async fn list_all(&self) -> Result<Vec<Movie>, MovieError>;

    /// Retrieve a movie by exact title.
    ///
    /// # Returns
    /// Optional movie (None if not found)
    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, MovieError>;

    /// Retrieve movies by identifiers.
    ///
    /// # Returns
    /// Found movies in no particular order (missing IDs are skipped without error)
    async fn find_by_ids(&self, ids: &[MovieId]) -> Result<Vec<Movie>, MovieError>;

    /// Project the genre of the first movie whose genre name matches.
    async fn find_genre(&self, name: &str) -> Result<Option<Genre>, MovieError>;

    /// Project the director of the first movie whose director name matches.
    async fn find_director(&self, name: &str) -> Result<Option<Director>, MovieError>;

    /// Retrieve actors by identifiers.
    ///
    /// # Returns
    /// Found actors in no particular order (missing IDs are skipped without error)
    async fn find_actors_by_ids(&self, ids: &[ActorId]) -> Result<Vec<Actor>, MovieError>;
}
