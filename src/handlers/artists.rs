use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};

use crate::{
    db::{entities::artist, genres::GenreList},
    error::{AppError, Result},
    forms::{AppForm, ArtistForm},
    services::listings,
    state::AppState,
    templates::{artist_detail_page, artist_form_page, artist_search_page, artists_page},
};

use super::{flash_redirect, FlashQuery, SearchForm};

/// All artists ordered by name
pub async fn list_artists(State(state): State<AppState>) -> Result<Html<String>> {
    let artists = artist::Entity::find()
        .order_by_asc(artist::Column::Name)
        .all(&state.db)
        .await?;

    Ok(Html(artists_page(&artists).into_string()))
}

/// Case-insensitive substring search on artist names
pub async fn search_artists(
    State(state): State<AppState>,
    AppForm(form): AppForm<SearchForm>,
) -> Result<Html<String>> {
    let results = listings::search_artists(&state.db, form.search_term.trim()).await?;
    Ok(Html(artist_search_page(form.search_term.trim(), &results).into_string()))
}

/// Artist detail with upcoming/past shows
pub async fn artist_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<FlashQuery>,
) -> Result<Html<String>> {
    let artist = artist::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Artist not found".to_string()))?;

    let shows = listings::artist_shows(&state.db, id).await?;

    let markup = artist_detail_page(&artist, &shows, query.flash.as_deref());
    Ok(Html(markup.into_string()))
}

/// Blank artist creation form
pub async fn create_artist_form() -> Html<String> {
    Html(artist_form_page("List an Artist", "/artists/create", None).into_string())
}

/// Validate and insert a new artist as one unit of work
pub async fn create_artist(
    State(state): State<AppState>,
    AppForm(form): AppForm<ArtistForm>,
) -> Result<Redirect> {
    form.validate()?;

    let name = form.name.trim().to_string();
    let now = Utc::now().into();

    let txn = state.db.begin().await?;
    let new_artist = artist::ActiveModel {
        name: Set(name.clone()),
        genres: Set(GenreList::new(form.genres())),
        city: Set(form.city.trim().to_string()),
        state: Set(form.state.trim().to_string()),
        phone: Set(form.phone()),
        website: Set(form.website()),
        image_link: Set(form.image_link()),
        facebook_link: Set(form.facebook_link()),
        seeking_venue: Set(form.seeking_venue()),
        seeking_description: Set(form.seeking_description()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let inserted = new_artist.insert(&txn).await?;
    txn.commit().await?;

    tracing::info!(artist_id = inserted.id, "artist listed");

    let message = format!("Artist {} was successfully listed!", name);
    Ok(Redirect::to(&flash_redirect("/", &message)))
}

/// Edit form pre-filled from the stored record
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let artist = artist::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Artist not found".to_string()))?;

    let action = format!("/artists/{}/edit", id);
    Ok(Html(artist_form_page("Edit Artist", &action, Some(&artist)).into_string()))
}

/// Validate and overwrite every stored field as one unit of work
pub async fn edit_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppForm(form): AppForm<ArtistForm>,
) -> Result<Redirect> {
    form.validate()?;

    let existing = artist::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Artist not found".to_string()))?;

    let name = form.name.trim().to_string();

    let txn = state.db.begin().await?;
    let mut active: artist::ActiveModel = existing.into();
    active.name = Set(name.clone());
    active.genres = Set(GenreList::new(form.genres()));
    active.city = Set(form.city.trim().to_string());
    active.state = Set(form.state.trim().to_string());
    active.phone = Set(form.phone());
    active.website = Set(form.website());
    active.image_link = Set(form.image_link());
    active.facebook_link = Set(form.facebook_link());
    active.seeking_venue = Set(form.seeking_venue());
    active.seeking_description = Set(form.seeking_description());
    active.updated_at = Set(Utc::now().into());
    active.update(&txn).await?;
    txn.commit().await?;

    tracing::info!(artist_id = id, "artist updated");

    let message = format!("Artist {} was successfully updated!", name);
    Ok(Redirect::to(&flash_redirect(&format!("/artists/{}", id), &message)))
}
