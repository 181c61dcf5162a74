use axum::{
    extract::State,
    response::{Html, Redirect},
};
use sea_orm::{ActiveModelTrait, Set, TransactionTrait};

use crate::{
    db::entities::show,
    error::Result,
    forms::{AppForm, ShowForm},
    services::listings,
    state::AppState,
    templates::{show_form_page, shows_page},
};

use super::flash_redirect;

/// Every show ordered by start time
pub async fn list_shows(State(state): State<AppState>) -> Result<Html<String>> {
    let entries = listings::show_board(&state.db).await?;
    Ok(Html(shows_page(&entries).into_string()))
}

/// Blank show creation form
pub async fn create_show_form() -> Html<String> {
    Html(show_form_page().into_string())
}

/// Validate and insert a new show as one unit of work.
///
/// A dangling artist or venue id trips the foreign key and surfaces as
/// a conflict rather than persisting anything.
pub async fn create_show(
    State(state): State<AppState>,
    AppForm(form): AppForm<ShowForm>,
) -> Result<Redirect> {
    let parsed = form.parsed()?;

    let txn = state.db.begin().await?;
    let new_show = show::ActiveModel {
        artist_id: Set(parsed.artist_id),
        venue_id: Set(parsed.venue_id),
        start_time: Set(parsed.start_time),
        ..Default::default()
    };
    let inserted = new_show.insert(&txn).await?;
    txn.commit().await?;

    tracing::info!(show_id = inserted.id, "show listed");

    Ok(Redirect::to(&flash_redirect("/", "Show was successfully listed!")))
}
