use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Actor;
use crate::domain::movie::models::ActorId;
use crate::domain::movie::models::Director;
use crate::domain::movie::models::Genre;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieDetails;
use crate::domain::movie::ports::MovieRepository;
use crate::domain::movie::ports::MovieServicePort;

/// Domain service for catalog queries.
pub struct MovieService<MR>
where
    MR: MovieRepository,
{
    repository: Arc<MR>,
}

impl<MR> MovieService<MR>
where
    MR: MovieRepository,
{
    pub fn new(repository: Arc<MR>) -> Self {
        Self { repository }
    }

    /// Resolve the actor references of `movies` with a single lookup.
    async fn with_actors(&self, movies: Vec<Movie>) -> Result<Vec<MovieDetails>, MovieError> {
        let wanted: Vec<ActorId> = movies
            .iter()
            .flat_map(|movie| movie.actor_ids.iter().copied())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let actors: HashMap<ActorId, Actor> = if wanted.is_empty() {
            HashMap::new()
        } else {
            self.repository
                .find_actors_by_ids(&wanted)
                .await?
                .into_iter()
                .map(|actor| (actor.id, actor))
                .collect()
        };

        Ok(movies
            .into_iter()
            .map(|movie| {
                let actors = movie
                    .actor_ids
                    .iter()
                    .filter_map(|id| actors.get(id).cloned())
                    .collect();
                MovieDetails { movie, actors }
            })
            .collect())
    }
}

#[async_trait]
impl<MR> MovieServicePort for MovieService<MR>
where
    MR: MovieRepository,
{
    async fn list_movies(&self) -> Result<Vec<MovieDetails>, MovieError> {
        let movies = self.repository.list_all().await?;
        self.with_actors(movies).await
    }

    async fn get_movie(&self, title: &str) -> Result<MovieDetails, MovieError> {
        let movie = self
            .repository
            .find_by_title(title)
            .await?
            .ok_or_else(|| MovieError::NotFound(title.to_string()))?;

        self.with_actors(vec![movie])
            .await?
            .pop()
            .ok_or_else(|| MovieError::Unknown(format!("Movie {} vanished", title)))
    }

    async fn get_genre(&self, name: &str) -> Result<Genre, MovieError> {
        self.repository
            .find_genre(name)
            .await?
            .ok_or_else(|| MovieError::GenreNotFound(name.to_string()))
    }

    async fn get_director(&self, name: &str) -> Result<Director, MovieError> {
        self.repository
            .find_director(name)
            .await?
            .ok_or_else(|| MovieError::DirectorNotFound(name.to_string()))
    }
}
