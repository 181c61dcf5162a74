pub mod artists;
pub mod home;
pub mod shows;
pub mod venues;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::state::AppState;

/// Flash message carried across a redirect as a query parameter.
#[derive(Deserialize)]
pub struct FlashQuery {
    pub flash: Option<String>,
}

/// Search term posted by the venue and artist search forms.
#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

pub fn html_routes() -> Router<AppState> {
    Router::new()
        // Home
        .route("/", get(home::index))

        // Venue endpoints
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::create_venue_form).post(venues::create_venue),
        )
        .route(
            "/venues/:id",
            get(venues::venue_detail).delete(venues::delete_venue),
        )
        .route(
            "/venues/:id/edit",
            get(venues::edit_venue_form).post(venues::edit_venue),
        )

        // Artist endpoints
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::create_artist_form).post(artists::create_artist),
        )
        .route("/artists/:id", get(artists::artist_detail))
        .route(
            "/artists/:id/edit",
            get(artists::edit_artist_form).post(artists::edit_artist),
        )

        // Show endpoints
        .route("/shows", get(shows::list_shows))
        .route(
            "/shows/create",
            get(shows::create_show_form).post(shows::create_show),
        )
}

/// Builds the redirect target for a post-mutation flash message.
pub(crate) fn flash_redirect(path: &str, message: &str) -> String {
    format!("{}?flash={}", path, urlencoding::encode(message))
}
