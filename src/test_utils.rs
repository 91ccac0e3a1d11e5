//! Test utilities for Movie Catalog
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Test data generators

use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};

use crate::{
    config::Config,
    db::entities::{director, genre, movie},
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database. The pool is pinned to a
/// single connection because every SQLite memory connection is its own database.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to create in-memory database");

    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
        legacy_status_codes: false,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    AppState::new(setup_test_db().await, test_config())
}

/// Same as [`setup_test_app_state`] but with historical status codes enabled
pub async fn setup_legacy_test_app_state() -> AppState {
    let config = Config {
        legacy_status_codes: true,
        ..test_config()
    };
    AppState::new(setup_test_db().await, config)
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Create a test director in the database
pub async fn create_test_director(db: &DatabaseConnection, name: &str) -> director::Model {
    let director = director::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };

    director
        .insert(db)
        .await
        .expect("Failed to insert test director")
}

/// Create a test genre in the database
pub async fn create_test_genre(db: &DatabaseConnection, name: &str) -> genre::Model {
    let genre = genre::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };

    genre.insert(db).await.expect("Failed to insert test genre")
}

/// Create a test movie in the database
pub async fn create_test_movie(
    db: &DatabaseConnection,
    title: &str,
    director_id: Option<i32>,
    genre_id: Option<i32>,
) -> movie::Model {
    let movie = movie::ActiveModel {
        title: Set(Some(title.to_string())),
        description: Set(Some(format!("{} description", title))),
        trailer: Set(Some("https://www.youtube.com/watch?v=test".to_string())),
        year: Set(Some(2010)),
        rating: Set(Some(8.0)),
        genre_id: Set(genre_id),
        director_id: Set(director_id),
        ..Default::default()
    };

    movie.insert(db).await.expect("Failed to insert test movie")
}
