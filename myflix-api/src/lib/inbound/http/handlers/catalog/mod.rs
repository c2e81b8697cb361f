pub mod get_director;
pub mod get_genre;
pub mod get_movie;
pub mod list_movies;

pub use get_director::get_director;
pub use get_genre::get_genre;
pub use get_movie::get_movie;
pub use list_movies::list_movies;
