use axum::{
    extract::{Path, Query, State},
    http::HeaderName,
    response::{Html, Redirect},
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set, TransactionTrait};

use crate::{
    db::{entities::venue, genres::GenreList},
    error::{AppError, Result},
    forms::{AppForm, VenueForm},
    services::listings,
    state::AppState,
    templates::{venue_detail_page, venue_form_page, venue_search_page, venues_page},
};

use super::{flash_redirect, FlashQuery, SearchForm};

/// Venues grouped into areas by (city, state)
pub async fn list_venues(State(state): State<AppState>) -> Result<Html<String>> {
    let areas = listings::venue_areas(&state.db).await?;
    Ok(Html(venues_page(&areas).into_string()))
}

/// Case-insensitive substring search on venue names
pub async fn search_venues(
    State(state): State<AppState>,
    AppForm(form): AppForm<SearchForm>,
) -> Result<Html<String>> {
    let results = listings::search_venues(&state.db, form.search_term.trim()).await?;
    Ok(Html(venue_search_page(form.search_term.trim(), &results).into_string()))
}

/// Venue detail with upcoming/past shows
pub async fn venue_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<FlashQuery>,
) -> Result<Html<String>> {
    let venue = venue::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

    let shows = listings::venue_shows(&state.db, id).await?;

    let markup = venue_detail_page(&venue, &shows, query.flash.as_deref());
    Ok(Html(markup.into_string()))
}

/// Blank venue creation form
pub async fn create_venue_form() -> Html<String> {
    Html(venue_form_page("List a Venue", "/venues/create", None).into_string())
}

/// Validate and insert a new venue as one unit of work
pub async fn create_venue(
    State(state): State<AppState>,
    AppForm(form): AppForm<VenueForm>,
) -> Result<Redirect> {
    form.validate()?;

    let name = form.name.trim().to_string();
    let now = Utc::now().into();

    let txn = state.db.begin().await?;
    let new_venue = venue::ActiveModel {
        name: Set(name.clone()),
        genres: Set(GenreList::new(form.genres())),
        city: Set(form.city.trim().to_string()),
        state: Set(form.state.trim().to_string()),
        address: Set(form.address.trim().to_string()),
        phone: Set(form.phone()),
        website: Set(form.website()),
        image_link: Set(form.image_link()),
        facebook_link: Set(form.facebook_link()),
        seeking_talent: Set(form.seeking_talent()),
        seeking_description: Set(form.seeking_description()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let inserted = new_venue.insert(&txn).await?;
    txn.commit().await?;

    tracing::info!(venue_id = inserted.id, "venue listed");

    let message = format!("Venue {} was successfully listed!", name);
    Ok(Redirect::to(&flash_redirect("/", &message)))
}

/// Edit form pre-filled from the stored record
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let venue = venue::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

    let action = format!("/venues/{}/edit", id);
    Ok(Html(venue_form_page("Edit Venue", &action, Some(&venue)).into_string()))
}

/// Validate and overwrite every stored field as one unit of work
pub async fn edit_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppForm(form): AppForm<VenueForm>,
) -> Result<Redirect> {
    form.validate()?;

    let existing = venue::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

    let name = form.name.trim().to_string();

    let txn = state.db.begin().await?;
    let mut active: venue::ActiveModel = existing.into();
    active.name = Set(name.clone());
    active.genres = Set(GenreList::new(form.genres()));
    active.city = Set(form.city.trim().to_string());
    active.state = Set(form.state.trim().to_string());
    active.address = Set(form.address.trim().to_string());
    active.phone = Set(form.phone());
    active.website = Set(form.website());
    active.image_link = Set(form.image_link());
    active.facebook_link = Set(form.facebook_link());
    active.seeking_talent = Set(form.seeking_talent());
    active.seeking_description = Set(form.seeking_description());
    active.updated_at = Set(Utc::now().into());
    active.update(&txn).await?;
    txn.commit().await?;

    tracing::info!(venue_id = id, "venue updated");

    let message = format!("Venue {} was successfully updated!", name);
    Ok(Redirect::to(&flash_redirect(&format!("/venues/{}", id), &message)))
}

/// Delete a venue; its shows go with it via the cascade
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<([(HeaderName, String); 1], ())> {
    let venue = venue::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

    let name = venue.name.clone();

    let txn = state.db.begin().await?;
    venue.delete(&txn).await?;
    txn.commit().await?;

    tracing::info!(venue_id = id, "venue deleted");

    // HTMX issues the DELETE; HX-Redirect sends the browser home
    let message = format!("Venue {} was successfully deleted!", name);
    let location = flash_redirect("/", &message);
    Ok(([(HeaderName::from_static("hx-redirect"), location)], ()))
}
