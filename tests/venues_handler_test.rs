//! Integration tests for venue routes
//!
//! Tests the venue pages end to end:
//! - Area-grouped listing
//! - Search by name
//! - Detail page with upcoming/past shows
//! - Create, edit, and delete submissions

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use tower::util::ServiceExt;

use showbill::db::entities::{show, venue};
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
async fn test_list_venues_empty() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(Request::builder().uri("/venues").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("No venues listed yet."));
}

#[tokio::test]
async fn test_venues_grouped_by_area() {
    let state = setup_test_app_state().await;

    create_test_venue(&state.db, "Test Hall", "Austin", "TX").await;
    create_test_venue(&state.db, "Antone's", "Austin", "TX").await;
    create_test_venue(&state.db, "The Fillmore", "San Francisco", "CA").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(Request::builder().uri("/venues").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;

    // Both Austin venues share a single area heading
    assert_eq!(body.matches("Austin, TX").count(), 1);
    assert_eq!(body.matches("San Francisco, CA").count(), 1);
    assert!(body.contains("Test Hall"));
    assert!(body.contains("The Fillmore"));

    // Within the area, venues are sorted by name
    let antones = body.find("Antone").expect("Antone's should be listed");
    let test_hall = body.find("Test Hall").unwrap();
    assert!(antones < test_hall);
}

#[tokio::test]
async fn test_venue_detail_partitions_shows() {
    let state = setup_test_app_state().await;

    let venue = create_test_venue(&state.db, "Park Square Live", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "The Wild Sax Band", "San Francisco", "CA").await;
    create_test_show(&state.db, artist.id, venue.id, days_from_now(-30)).await;
    create_test_show(&state.db, artist.id, venue.id, days_from_now(7)).await;
    create_test_show(&state.db, artist.id, venue.id, days_from_now(14)).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/venues/{}", venue.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("2 Upcoming Shows"));
    assert!(body.contains("1 Past Show"));
    assert!(body.contains("The Wild Sax Band"));
}

#[tokio::test]
async fn test_venue_detail_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/venues/4242")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_venue_persists_and_redirects() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let body = "name=Test+Hall&city=Austin&state=TX&address=123+Main+Street\
                &phone=512-555-0100&genres=Jazz&genres=Folk\
                &image_link=&website_link=&facebook_link=\
                &seeking_talent=y&seeking_description=Always+booking";

    let response = app
        .oneshot(form_request("/venues/create", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert!(location.starts_with("/?flash="));
    assert!(location.contains("Test%20Hall"));

    let stored = venue::Entity::find()
        .filter(venue::Column::Name.eq("Test Hall"))
        .one(&state.db)
        .await
        .unwrap()
        .expect("Venue should be persisted");

    assert_eq!(stored.city, "Austin");
    assert_eq!(stored.state, "TX");
    assert_eq!(stored.genres.0, vec!["Jazz".to_string(), "Folk".to_string()]);
    assert!(stored.seeking_talent);
    assert_eq!(stored.seeking_description.as_deref(), Some("Always booking"));
    assert_eq!(stored.website, None);
}

#[tokio::test]
async fn test_create_venue_invalid_is_rejected_and_not_persisted() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    // Missing name, bogus state, no genres
    let body = "name=&city=Austin&state=Texas&address=123+Main&genres=";

    let response = app
        .oneshot(form_request("/venues/create", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("Name is required"));

    let count = venue::Entity::find().count(&state.db).await.unwrap();
    assert_eq!(count, 0, "Invalid submission must not persist a row");
}

#[tokio::test]
async fn test_edit_form_is_prefilled() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/venues/{}/edit", venue.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("value=\"The Musical Hop\""));
    assert!(body.contains("value=\"San Francisco\""));
}

#[tokio::test]
async fn test_edit_venue_overwrites_all_fields() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "Old Name", "Austin", "TX").await;

    let app = create_test_router(&state);
    let body = "name=New+Name&city=Denver&state=CO&address=456+Side+Street\
                &phone=&genres=Blues&image_link=&website_link=&facebook_link=\
                &seeking_description=";

    let response = app
        .oneshot(form_request(&format!("/venues/{}/edit", venue.id), body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert!(location.starts_with(&format!("/venues/{}", venue.id)));

    let stored = venue::Entity::find_by_id(venue.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stored.name, "New Name");
    assert_eq!(stored.city, "Denver");
    assert_eq!(stored.state, "CO");
    assert_eq!(stored.genres.0, vec!["Blues".to_string()]);
    // Unchecked checkbox and cleared fields overwrite the old values
    assert!(!stored.seeking_talent);
    assert_eq!(stored.phone, None);
}

#[tokio::test]
async fn test_edit_venue_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let body = "name=Ghost&city=Austin&state=TX&address=1+Nowhere&genres=Jazz";
    let response = app
        .oneshot(form_request("/venues/4242/edit", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_venue_cascades_shows() {
    let state = setup_test_app_state().await;

    let venue = create_test_venue(&state.db, "Condemned Hall", "Austin", "TX").await;
    let artist = create_test_artist(&state.db, "Surviving Act", "Austin", "TX").await;
    create_test_show(&state.db, artist.id, venue.id, days_from_now(3)).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/venues/{}", venue.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let redirect = response.headers()["hx-redirect"].to_str().unwrap();
    assert!(redirect.starts_with("/?flash="));

    let gone = venue::Entity::find_by_id(venue.id).one(&state.db).await.unwrap();
    assert!(gone.is_none());

    let orphans = show::Entity::find().count(&state.db).await.unwrap();
    assert_eq!(orphans, 0, "Deleting a venue must delete its shows");
}

#[tokio::test]
async fn test_delete_venue_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/venues/4242")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_venues_case_insensitive() {
    let state = setup_test_app_state().await;

    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    create_test_venue(&state.db, "The Dueling Pianos Bar", "New York", "NY").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_request("/venues/search", "search_term=HOP"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("1 result for"));
    assert!(body.contains("The Musical Hop"));
    assert!(!body.contains("Dueling Pianos"));
}

#[tokio::test]
async fn test_search_venues_reports_upcoming_show_counts() {
    let state = setup_test_app_state().await;

    let venue = create_test_venue(&state.db, "Busy Hall", "Austin", "TX").await;
    let artist = create_test_artist(&state.db, "Test Act", "Austin", "TX").await;
    create_test_show(&state.db, artist.id, venue.id, days_from_now(-1)).await;
    create_test_show(&state.db, artist.id, venue.id, days_from_now(1)).await;
    create_test_show(&state.db, artist.id, venue.id, days_from_now(2)).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_request("/venues/search", "search_term=busy"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("2 upcoming shows"));
}

#[tokio::test]
async fn test_search_venues_no_matches() {
    let state = setup_test_app_state().await;

    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_request("/venues/search", "search_term=zzzz"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("0 results for"));
    assert!(body.contains("Nothing matched your search."));
}
