/// Serializable response types for the HTTP layer.
///
/// Domain models never derive `Serialize`; these types pick which fields
/// leave the service. Password hashes, internal user ids and store
/// timestamps are never exposed.
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::movie::models::Actor;
use crate::domain::movie::models::Director;
use crate::domain::movie::models::Genre;
use crate::domain::movie::models::MovieDetails;
use crate::domain::movie::models::MovieSummary;
use crate::domain::user::models::User;
use crate::domain::user::models::UserProfile;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreData {
    pub name: String,
    pub description: Option<String>,
}

impl From<&Genre> for GenreData {
    fn from(genre: &Genre) -> Self {
        Self {
            name: genre.name.clone(),
            description: genre.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorData {
    pub name: String,
    pub bio: Option<String>,
    pub birth: Option<NaiveDate>,
    pub death: Option<NaiveDate>,
}

impl From<&Director> for DirectorData {
    fn from(director: &Director) -> Self {
        Self {
            name: director.name.clone(),
            bio: director.bio.clone(),
            birth: director.birth,
            death: director.death,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorData {
    pub name: String,
    pub bio: String,
    pub birthday: Option<NaiveDate>,
    pub image_path: String,
}

impl From<&Actor> for ActorData {
    fn from(actor: &Actor) -> Self {
        Self {
            name: actor.name.clone(),
            bio: actor.bio.clone(),
            birthday: actor.birthday,
            image_path: actor.image_path.clone(),
        }
    }
}

/// A movie with genre, director and actors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieData {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub genre: GenreData,
    pub director: DirectorData,
    pub actors: Vec<ActorData>,
    pub image_path: String,
    pub featured: bool,
    pub release_year: Option<i32>,
    pub mpa: String,
    pub imdb: Option<f64>,
}

impl From<&MovieDetails> for MovieData {
    fn from(details: &MovieDetails) -> Self {
        let movie = &details.movie;
        Self {
            id: movie.id.0,
            title: movie.title.clone(),
            description: movie.description.clone(),
            genre: (&movie.genre).into(),
            director: (&movie.director).into(),
            actors: details.actors.iter().map(ActorData::from).collect(),
            image_path: movie.image_path.clone(),
            featured: movie.featured,
            release_year: movie.release_year,
            mpa: movie.mpa.clone(),
            imdb: movie.imdb,
        }
    }
}

/// A movie as it appears inside a user's lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieSummaryData {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_path: String,
    pub featured: bool,
    pub release_year: Option<i32>,
    pub mpa: String,
    pub imdb: Option<f64>,
}

impl From<&MovieSummary> for MovieSummaryData {
    fn from(summary: &MovieSummary) -> Self {
        Self {
            id: summary.id.0,
            title: summary.title.clone(),
            description: summary.description.clone(),
            image_path: summary.image_path.clone(),
            featured: summary.featured,
            release_year: summary.release_year,
            mpa: summary.mpa.clone(),
            imdb: summary.imdb,
        }
    }
}

/// A user with both movie lists expanded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserData {
    pub email: String,
    pub name: String,
    pub birthday: Option<NaiveDate>,
    pub favorite_movies: Vec<MovieSummaryData>,
    pub to_watch: Vec<MovieSummaryData>,
}

impl From<&UserProfile> for UserData {
    fn from(profile: &UserProfile) -> Self {
        Self {
            email: profile.user.email.as_str().to_string(),
            name: profile.user.name.as_str().to_string(),
            birthday: profile.user.birthday,
            favorite_movies: profile
                .favorite_movies
                .iter()
                .map(MovieSummaryData::from)
                .collect(),
            to_watch: profile.to_watch.iter().map(MovieSummaryData::from).collect(),
        }
    }
}

/// Account fields only, returned by login, create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountData {
    pub email: String,
    pub name: String,
    pub birthday: Option<NaiveDate>,
}

impl From<&User> for AccountData {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.as_str().to_string(),
            name: user.name.as_str().to_string(),
            birthday: user.birthday,
        }
    }
}
