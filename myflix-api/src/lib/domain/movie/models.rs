use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::movie::errors::MovieIdError;

/// Catalog entry.
///
/// Genre and director are embedded; actors are referenced by id and resolved
/// separately (see [`MovieDetails`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub description: String,
    pub genre: Genre,
    pub director: Director,
    pub image_path: String,
    pub featured: bool,
    pub release_year: Option<i32>,
    pub mpa: String,
    pub imdb: Option<f64>,
    pub actor_ids: Vec<ActorId>,
}

impl Movie {
    /// Movie without its embedded and referenced sub-records.
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            image_path: self.image_path.clone(),
            featured: self.featured,
            release_year: self.release_year,
            mpa: self.mpa.clone(),
            imdb: self.imdb,
        }
    }
}

/// Movie with its actor references resolved, in `actor_ids` order.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetails {
    pub movie: Movie,
    pub actors: Vec<Actor>,
}

/// Movie projection used when a user's lists are expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    pub description: String,
    pub image_path: String,
    pub featured: bool,
    pub release_year: Option<i32>,
    pub mpa: String,
    pub imdb: Option<f64>,
}

/// Genre sub-document embedded in a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub name: String,
    pub description: Option<String>,
}

/// Director sub-document embedded in a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Director {
    pub name: String,
    pub bio: Option<String>,
    pub birth: Option<NaiveDate>,
    pub death: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub bio: String,
    pub birthday: Option<NaiveDate>,
    pub image_path: String,
}

/// Movie unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovieId(pub Uuid);

impl MovieId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a movie ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, MovieIdError> {
        Uuid::parse_str(s)
            .map(MovieId)
            .map_err(|e| MovieIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Actor unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(pub Uuid);

impl ActorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
