use axum::{
    extract::{Query, State},
    response::Html,
};
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::{
    db::entities::{artist, show, venue},
    error::Result,
    state::AppState,
    templates::home_page,
};

use super::FlashQuery;

/// Home page with listing counts
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<FlashQuery>,
) -> Result<Html<String>> {
    let venue_count = venue::Entity::find().count(&state.db).await?;
    let artist_count = artist::Entity::find().count(&state.db).await?;
    let show_count = show::Entity::find().count(&state.db).await?;

    let markup = home_page(query.flash.as_deref(), venue_count, artist_count, show_count);
    Ok(Html(markup.into_string()))
}
