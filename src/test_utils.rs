//! Test utilities for Showbill
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Test data generators

use chrono::{DateTime, FixedOffset, Utc};
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use crate::{
    config::Config,
    db::{
        entities::{artist, show, venue},
        genres::GenreList,
    },
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database perfect for parallel testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // Run all migrations
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
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    let config = test_config();

    AppState::new(db, config)
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Create a test venue in the database
pub async fn create_test_venue(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    state: &str,
) -> venue::Model {
    let now = Utc::now().into();
    let venue = venue::ActiveModel {
        name: Set(name.to_string()),
        genres: Set(GenreList::new(vec!["Jazz".to_string()])),
        city: Set(city.to_string()),
        state: Set(state.to_string()),
        address: Set("123 Main Street".to_string()),
        phone: Set(None),
        website: Set(None),
        image_link: Set(None),
        facebook_link: Set(None),
        seeking_talent: Set(false),
        seeking_description: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    venue.insert(db).await.expect("Failed to insert test venue")
}

/// Create a test artist in the database
pub async fn create_test_artist(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    state: &str,
) -> artist::Model {
    let now = Utc::now().into();
    let artist = artist::ActiveModel {
        name: Set(name.to_string()),
        genres: Set(GenreList::new(vec!["Rock n Roll".to_string()])),
        city: Set(city.to_string()),
        state: Set(state.to_string()),
        phone: Set(None),
        website: Set(None),
        image_link: Set(None),
        facebook_link: Set(None),
        seeking_venue: Set(false),
        seeking_description: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    artist.insert(db).await.expect("Failed to insert test artist")
}

/// Create a test show in the database
pub async fn create_test_show(
    db: &DatabaseConnection,
    artist_id: i32,
    venue_id: i32,
    start_time: DateTime<FixedOffset>,
) -> show::Model {
    let show = show::ActiveModel {
        artist_id: Set(artist_id),
        venue_id: Set(venue_id),
        start_time: Set(start_time),
        ..Default::default()
    };

    show.insert(db).await.expect("Failed to insert test show")
}

/// A start time offset from now by whole days (negative for the past)
pub fn days_from_now(days: i64) -> DateTime<FixedOffset> {
    (Utc::now() + chrono::Duration::days(days)).into()
}
