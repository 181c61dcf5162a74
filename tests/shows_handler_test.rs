//! Integration tests for show routes
//!
//! Tests the show board and show creation:
//! - Start-time-ordered board with both sides attached
//! - Create submissions, including bad input and dangling references

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use sea_orm::{EntityTrait, PaginatorTrait};
use tower::util::ServiceExt;

use showbill::db::entities::show;
use showbill::handlers;
use showbill::state::AppState;
use showbill::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    Router::new()
        .merge(handlers::html_routes())
        .with_state(state.clone())
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_list_shows_empty() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(Request::builder().uri("/shows").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("No shows scheduled."));
}

#[tokio::test]
async fn test_shows_ordered_by_start_time_with_both_sides() {
    let state = setup_test_app_state().await;

    let venue = create_test_venue(&state.db, "Test Hall", "Austin", "TX").await;
    let early = create_test_artist(&state.db, "Early Act", "Austin", "TX").await;
    let late = create_test_artist(&state.db, "Late Act", "Austin", "TX").await;

    // Insert out of order; the board must sort by start time
    create_test_show(&state.db, late.id, venue.id, days_from_now(20)).await;
    create_test_show(&state.db, early.id, venue.id, days_from_now(2)).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(Request::builder().uri("/shows").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;

    let early_pos = body.find("Early Act").unwrap();
    let late_pos = body.find("Late Act").unwrap();
    assert!(early_pos < late_pos);
    assert!(body.contains("Test Hall"));
}

#[tokio::test]
async fn test_show_form_renders() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/shows/create")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("name=\"artist_id\""));
    assert!(body.contains("name=\"venue_id\""));
    assert!(body.contains("name=\"start_time\""));
}

#[tokio::test]
async fn test_create_show_persists_and_redirects() {
    let state = setup_test_app_state().await;

    let venue = create_test_venue(&state.db, "Test Hall", "Austin", "TX").await;
    let artist = create_test_artist(&state.db, "Test Act", "Austin", "TX").await;

    let app = create_test_router(&state);
    let body = format!(
        "artist_id={}&venue_id={}&start_time=2035-06-01T20%3A30",
        artist.id, venue.id
    );

    let response = app
        .oneshot(form_request("/shows/create", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert!(location.starts_with("/?flash="));

    let shows = show::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].artist_id, artist.id);
    assert_eq!(shows[0].venue_id, venue.id);
    assert_eq!(shows[0].start_time.to_rfc3339(), "2035-06-01T20:30:00+00:00");
}

#[tokio::test]
async fn test_create_show_invalid_input_rejected() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request(
            "/shows/create",
            "artist_id=zero&venue_id=-1&start_time=whenever",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("Artist ID must be a positive number"));
    assert!(body.contains("Start time must be a valid date and time"));

    let count = show::Entity::find().count(&state.db).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_create_show_with_dangling_artist_is_a_conflict() {
    let state = setup_test_app_state().await;

    let venue = create_test_venue(&state.db, "Test Hall", "Austin", "TX").await;

    let app = create_test_router(&state);
    let body = format!("artist_id=9999&venue_id={}&start_time=2035-06-01T20%3A30", venue.id);

    let response = app
        .oneshot(form_request("/shows/create", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let count = show::Entity::find().count(&state.db).await.unwrap();
    assert_eq!(count, 0, "A rejected insert must roll back");
}

#[tokio::test]
async fn test_home_page_counts_listings() {
    let state = setup_test_app_state().await;

    let venue = create_test_venue(&state.db, "Test Hall", "Austin", "TX").await;
    let artist = create_test_artist(&state.db, "Test Act", "Austin", "TX").await;
    create_test_show(&state.db, artist.id, venue.id, days_from_now(1)).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Venues listed"));
    assert!(body.contains("Artists listed"));
    assert!(body.contains("Shows listed"));
}

#[tokio::test]
async fn test_flash_message_renders_on_home() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?flash=Venue%20Test%20Hall%20was%20successfully%20listed%21")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Venue Test Hall was successfully listed!"));
}
