mod common;

use chrono::Duration;
use chrono::NaiveDate;
use chrono::Utc;
use common::TestDb;
use myflix_api::domain::movie::models::ActorId;
use myflix_api::domain::movie::models::MovieId;
use myflix_api::domain::movie::ports::MovieRepository;
use myflix_api::domain::user::errors::UserError;
use myflix_api::domain::user::models::DisplayName;
use myflix_api::domain::user::models::EmailAddress;
use myflix_api::domain::user::models::ListKind;
use myflix_api::domain::user::models::ProfileChanges;
use myflix_api::domain::user::models::User;
use myflix_api::domain::user::models::UserId;
use myflix_api::domain::user::ports::UserRepository;
use myflix_api::outbound::repositories::PostgresMovieRepository;
use myflix_api::outbound::repositories::PostgresUserRepository;
use uuid::Uuid;

fn user(email: &str) -> User {
    User {
        id: UserId::new(),
        email: EmailAddress::new(email.to_string()).unwrap(),
        name: DisplayName::new("Nicola Rossi".to_string()).unwrap(),
        password_hash: "$argon2id$stored".to_string(),
        birthday: NaiveDate::from_ymd_opt(1990, 4, 12),
        favorite_movies: vec![],
        to_watch: vec![],
        created_at: Utc::now(),
    }
}

async fn insert_movie(db: &TestDb, title: &str, genre: &str, director: &str) -> MovieId {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO movies (id, title, description, genre_name, genre_description,
                            director_name, director_bio, mpa)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'R')
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(format!("{} description", title))
    .bind(genre)
    .bind(format!("{} films", genre))
    .bind(director)
    .bind(format!("{} directs films", director))
    .execute(&db.pool)
    .await
    .expect("Failed to insert movie");
    MovieId(id)
}

#[tokio::test]
async fn test_duplicate_email_maps_to_already_exists() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    repository.create(user("nicola@example.com")).await.unwrap();
    let result = repository.create(user("nicola@example.com")).await;

    assert!(matches!(result, Err(UserError::EmailAlreadyExists(_))));
    assert_eq!(repository.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_add_is_idempotent_and_remove_restores() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());
    repository.create(user("nicola@example.com")).await.unwrap();
    let movie = MovieId(Uuid::new_v4());

    let first = repository
        .add_to_list("nicola@example.com", ListKind::Favorites, movie)
        .await
        .unwrap();
    let second = repository
        .add_to_list("nicola@example.com", ListKind::Favorites, movie)
        .await
        .unwrap();

    assert_eq!(first.favorite_movies, vec![movie]);
    assert_eq!(second.favorite_movies, vec![movie]);
    assert!(second.to_watch.is_empty());

    let removed = repository
        .remove_from_list("nicola@example.com", ListKind::Favorites, movie)
        .await
        .unwrap();
    assert!(removed.favorite_movies.is_empty());

    // Removing an absent id leaves the list as it is
    let again = repository
        .remove_from_list("nicola@example.com", ListKind::Favorites, movie)
        .await
        .unwrap();
    assert!(again.favorite_movies.is_empty());
}

#[tokio::test]
async fn test_lists_keep_insertion_order() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());
    repository.create(user("nicola@example.com")).await.unwrap();
    let alien = MovieId(Uuid::new_v4());
    let heat = MovieId(Uuid::new_v4());

    repository
        .add_to_list("nicola@example.com", ListKind::ToWatch, alien)
        .await
        .unwrap();
    let updated = repository
        .add_to_list("nicola@example.com", ListKind::ToWatch, heat)
        .await
        .unwrap();

    assert_eq!(updated.to_watch, vec![alien, heat]);
    assert!(updated.favorite_movies.is_empty());
}

#[tokio::test]
async fn test_list_change_for_unknown_user() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());
    let movie = MovieId(Uuid::new_v4());

    let added = repository
        .add_to_list("ghost@example.com", ListKind::Favorites, movie)
        .await;
    let removed = repository
        .remove_from_list("ghost@example.com", ListKind::ToWatch, movie)
        .await;

    assert!(matches!(added, Err(UserError::NotFound(_))));
    assert!(matches!(removed, Err(UserError::NotFound(_))));
}

#[tokio::test]
async fn test_update_profile_changes_only_supplied_fields() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());
    let created = repository.create(user("nicola@example.com")).await.unwrap();

    let unchanged = repository
        .update_profile("nicola@example.com", ProfileChanges::default())
        .await
        .unwrap();
    assert_eq!(unchanged.name, created.name);
    assert_eq!(unchanged.password_hash, created.password_hash);
    assert_eq!(unchanged.birthday, created.birthday);

    let new_birthday = NaiveDate::from_ymd_opt(1988, 2, 29);
    let updated = repository
        .update_profile(
            "nicola@example.com",
            ProfileChanges {
                birthday: new_birthday,
                ..ProfileChanges::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.birthday, new_birthday);
    assert_eq!(updated.name, created.name);

    let renamed = repository
        .update_profile(
            "nicola@example.com",
            ProfileChanges {
                name: Some(DisplayName::new("Nicola Verdi".to_string()).unwrap()),
                password_hash: Some("$argon2id$rotated".to_string()),
                birthday: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name.as_str(), "Nicola Verdi");
    assert_eq!(renamed.password_hash, "$argon2id$rotated");
    assert_eq!(renamed.birthday, new_birthday);

    let missing = repository
        .update_profile("ghost@example.com", ProfileChanges::default())
        .await;
    assert!(matches!(missing, Err(UserError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_user() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());
    repository.create(user("nicola@example.com")).await.unwrap();

    repository.delete("nicola@example.com").await.unwrap();

    assert!(repository
        .find_by_email("nicola@example.com")
        .await
        .unwrap()
        .is_none());
    assert!(matches!(
        repository.delete("nicola@example.com").await,
        Err(UserError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_list_all_orders_by_creation() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let mut later = user("giulia@example.com");
    later.created_at = Utc::now();
    let mut earlier = user("nicola@example.com");
    earlier.created_at = later.created_at - Duration::minutes(5);

    repository.create(later).await.unwrap();
    repository.create(earlier).await.unwrap();

    let emails: Vec<String> = repository
        .list_all()
        .await
        .unwrap()
        .iter()
        .map(|u| u.email.as_str().to_string())
        .collect();
    assert_eq!(emails, vec!["nicola@example.com", "giulia@example.com"]);
}

#[tokio::test]
async fn test_corrupt_stored_user_is_a_store_fault() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    sqlx::query("INSERT INTO users (id, email, name, password_hash) VALUES ($1, $2, 'Nic', 'x')")
        .bind(Uuid::new_v4())
        .bind("nic@example.com")
        .execute(&db.pool)
        .await
        .expect("Failed to insert user");

    let result = repository.find_by_email("nic@example.com").await;

    assert!(matches!(result, Err(UserError::DatabaseError(_))));
}

#[tokio::test]
async fn test_find_movies_by_ids() {
    let db = TestDb::new().await;
    let repository = PostgresMovieRepository::new(db.pool.clone());
    let alien = insert_movie(&db, "Alien", "Science Fiction", "Ridley Scott").await;
    let heat = insert_movie(&db, "Heat", "Crime", "Michael Mann").await;
    insert_movie(&db, "Ran", "Drama", "Akira Kurosawa").await;

    let mut found: Vec<MovieId> = repository
        .find_by_ids(&[alien, heat, MovieId(Uuid::new_v4())])
        .await
        .unwrap()
        .iter()
        .map(|m| m.id)
        .collect();
    found.sort_by_key(|id| id.0);
    let mut expected = vec![alien, heat];
    expected.sort_by_key(|id| id.0);

    assert_eq!(found, expected);
    assert!(repository.find_by_ids(&[]).await.unwrap().is_empty());
    assert_eq!(repository.list_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_find_by_title_is_exact() {
    let db = TestDb::new().await;
    let repository = PostgresMovieRepository::new(db.pool.clone());
    let alien = insert_movie(&db, "Alien", "Science Fiction", "Ridley Scott").await;

    let movie = repository.find_by_title("Alien").await.unwrap().unwrap();

    assert_eq!(movie.id, alien);
    assert_eq!(movie.genre.name, "Science Fiction");
    assert_eq!(movie.director.bio.as_deref(), Some("Ridley Scott directs films"));
    assert!(repository.find_by_title("alien").await.unwrap().is_none());
}

#[tokio::test]
async fn test_genre_and_director_projections() {
    let db = TestDb::new().await;
    let repository = PostgresMovieRepository::new(db.pool.clone());
    insert_movie(&db, "Alien", "Science Fiction", "Ridley Scott").await;
    insert_movie(&db, "Blade Runner", "Science Fiction", "Ridley Scott").await;

    let genre = repository.find_genre("Science Fiction").await.unwrap().unwrap();
    assert_eq!(genre.name, "Science Fiction");
    assert_eq!(genre.description.as_deref(), Some("Science Fiction films"));

    let director = repository.find_director("Ridley Scott").await.unwrap().unwrap();
    assert_eq!(director.name, "Ridley Scott");
    assert_eq!(director.bio.as_deref(), Some("Ridley Scott directs films"));
    assert!(director.birth.is_none());

    assert!(repository.find_genre("Western").await.unwrap().is_none());
    assert!(repository.find_director("Nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_actors_by_ids() {
    let db = TestDb::new().await;
    let repository = PostgresMovieRepository::new(db.pool.clone());
    let sigourney = Uuid::new_v4();
    sqlx::query("INSERT INTO actors (id, name, bio) VALUES ($1, 'Sigourney Weaver', 'Ripley')")
        .bind(sigourney)
        .execute(&db.pool)
        .await
        .expect("Failed to insert actor");

    let actors = repository
        .find_actors_by_ids(&[ActorId(sigourney), ActorId(Uuid::new_v4())])
        .await
        .unwrap();

    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0].name, "Sigourney Weaver");
}
