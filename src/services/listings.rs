//! View projections over venues, artists, and shows: area grouping,
//! upcoming/past partitioning, and search with upcoming-show counts.

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;

use crate::db::entities::{artist, show, venue};

/// Venues sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<venue::Model>,
}

/// A show as listed on a venue or artist page, carrying the other
/// side's name and image.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowListing {
    pub counterpart_id: i32,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: DateTime<FixedOffset>,
}

/// Shows split around the current time. Order within each side follows
/// the input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowPartition {
    pub upcoming: Vec<ShowListing>,
    pub past: Vec<ShowListing>,
}

/// Thin search projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// A row on the all-shows board.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ShowBoardEntry {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<FixedOffset>,
}

/// Run-length group venues already sorted by (city, state, name) into
/// areas. Consecutive rows with equal (city, state) share an area.
pub fn group_venues_by_area(venues: Vec<venue::Model>) -> Vec<Area> {
    let mut areas: Vec<Area> = Vec::new();

    for venue in venues {
        match areas.last_mut() {
            Some(area) if area.city == venue.city && area.state == venue.state => {
                area.venues.push(venue);
            }
            _ => areas.push(Area {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: vec![venue],
            }),
        }
    }

    areas
}

/// One-pass partition into upcoming (strictly after `now`) and past.
pub fn partition_shows(shows: Vec<ShowListing>, now: DateTime<Utc>) -> ShowPartition {
    let mut partition = ShowPartition::default();

    for listing in shows {
        if listing.start_time > now {
            partition.upcoming.push(listing);
        } else {
            partition.past.push(listing);
        }
    }

    partition
}

/// All venues grouped into areas, venues sorted by name within each.
pub async fn venue_areas(db: &DatabaseConnection) -> Result<Vec<Area>, DbErr> {
    let venues = venue::Entity::find()
        .order_by_asc(venue::Column::City)
        .order_by_asc(venue::Column::State)
        .order_by_asc(venue::Column::Name)
        .all(db)
        .await?;

    Ok(group_venues_by_area(venues))
}

/// A venue's shows split into upcoming and past, each carrying the
/// booked artist's name and image.
pub async fn venue_shows(
    db: &DatabaseConnection,
    venue_id: i32,
) -> Result<ShowPartition, DbErr> {
    let shows = show::Entity::find()
        .filter(show::Column::VenueId.eq(venue_id))
        .order_by_asc(show::Column::StartTime)
        .find_also_related(artist::Entity)
        .all(db)
        .await?;

    let listings = shows
        .into_iter()
        .filter_map(|(show, artist)| {
            artist.map(|a| ShowListing {
                counterpart_id: a.id,
                counterpart_name: a.name,
                counterpart_image_link: a.image_link,
                start_time: show.start_time,
            })
        })
        .collect();

    Ok(partition_shows(listings, Utc::now()))
}

/// An artist's shows split into upcoming and past, each carrying the
/// hosting venue's name and image.
pub async fn artist_shows(
    db: &DatabaseConnection,
    artist_id: i32,
) -> Result<ShowPartition, DbErr> {
    let shows = show::Entity::find()
        .filter(show::Column::ArtistId.eq(artist_id))
        .order_by_asc(show::Column::StartTime)
        .find_also_related(venue::Entity)
        .all(db)
        .await?;

    let listings = shows
        .into_iter()
        .filter_map(|(show, venue)| {
            venue.map(|v| ShowListing {
                counterpart_id: v.id,
                counterpart_name: v.name,
                counterpart_image_link: v.image_link,
                start_time: show.start_time,
            })
        })
        .collect();

    Ok(partition_shows(listings, Utc::now()))
}

/// Case-insensitive substring search on venue names, ordered by name.
pub async fn search_venues(
    db: &DatabaseConnection,
    term: &str,
) -> Result<Vec<SearchResult>, DbErr> {
    let pattern = like_pattern(term);
    let venues = venue::Entity::find()
        .filter(
            Expr::expr(Func::lower(Expr::col((venue::Entity, venue::Column::Name))))
                .like(&pattern),
        )
        .order_by_asc(venue::Column::Name)
        .all(db)
        .await?;

    let ids: Vec<i32> = venues.iter().map(|v| v.id).collect();
    let counts = upcoming_counts(db, show::Column::VenueId, ids).await?;

    Ok(venues
        .into_iter()
        .map(|v| SearchResult {
            num_upcoming_shows: counts.get(&v.id).copied().unwrap_or(0),
            id: v.id,
            name: v.name,
        })
        .collect())
}

/// Case-insensitive substring search on artist names, ordered by name.
pub async fn search_artists(
    db: &DatabaseConnection,
    term: &str,
) -> Result<Vec<SearchResult>, DbErr> {
    let pattern = like_pattern(term);
    let artists = artist::Entity::find()
        .filter(
            Expr::expr(Func::lower(Expr::col((
                artist::Entity,
                artist::Column::Name,
            ))))
            .like(&pattern),
        )
        .order_by_asc(artist::Column::Name)
        .all(db)
        .await?;

    let ids: Vec<i32> = artists.iter().map(|a| a.id).collect();
    let counts = upcoming_counts(db, show::Column::ArtistId, ids).await?;

    Ok(artists
        .into_iter()
        .map(|a| SearchResult {
            num_upcoming_shows: counts.get(&a.id).copied().unwrap_or(0),
            id: a.id,
            name: a.name,
        })
        .collect())
}

/// Every show ordered by start time, joined with both sides for the
/// board view.
pub async fn show_board(db: &DatabaseConnection) -> Result<Vec<ShowBoardEntry>, DbErr> {
    show::Entity::find()
        .select_only()
        .column(show::Column::VenueId)
        .column_as(venue::Column::Name, "venue_name")
        .column(show::Column::ArtistId)
        .column_as(artist::Column::Name, "artist_name")
        .column_as(artist::Column::ImageLink, "artist_image_link")
        .column(show::Column::StartTime)
        .join(JoinType::InnerJoin, show::Relation::Venue.def())
        .join(JoinType::InnerJoin, show::Relation::Artist.def())
        .order_by_asc(show::Column::StartTime)
        .into_model::<ShowBoardEntry>()
        .all(db)
        .await
}

fn like_pattern(term: &str) -> String {
    format!("%{}%", term.to_lowercase())
}

/// Upcoming-show counts for a batch of venue or artist ids, from one
/// grouped query. Ids with no upcoming shows are absent from the map.
async fn upcoming_counts(
    db: &DatabaseConnection,
    group_column: show::Column,
    ids: Vec<i32>,
) -> Result<HashMap<i32, i64>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    #[derive(FromQueryResult)]
    struct UpcomingCount {
        record_id: i32,
        upcoming: i64,
    }

    let rows: Vec<UpcomingCount> = show::Entity::find()
        .filter(group_column.is_in(ids))
        .filter(show::Column::StartTime.gt(Utc::now()))
        .select_only()
        .column_as(group_column, "record_id")
        .column_as(show::Column::Id.count(), "upcoming")
        .group_by(group_column)
        .into_model::<UpcomingCount>()
        .all(db)
        .await?;

    Ok(rows.into_iter().map(|r| (r.record_id, r.upcoming)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::genres::GenreList;
    use chrono::{Duration, TimeZone};

    fn venue_model(id: i32, name: &str, city: &str, state: &str) -> venue::Model {
        let now = Utc::now().fixed_offset();
        venue::Model {
            id,
            name: name.to_string(),
            genres: GenreList::new(vec!["Jazz".to_string()]),
            city: city.to_string(),
            state: state.to_string(),
            address: "1 Main St".to_string(),
            phone: None,
            website: None,
            image_link: None,
            facebook_link: None,
            seeking_talent: false,
            seeking_description: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn listing(name: &str, start_time: DateTime<Utc>) -> ShowListing {
        ShowListing {
            counterpart_id: 1,
            counterpart_name: name.to_string(),
            counterpart_image_link: None,
            start_time: start_time.fixed_offset(),
        }
    }

    #[test]
    fn grouping_merges_consecutive_equal_city_state() {
        let venues = vec![
            venue_model(1, "Antone's", "Austin", "TX"),
            venue_model(2, "The Continental Club", "Austin", "TX"),
            venue_model(3, "The Fillmore", "San Francisco", "CA"),
        ];

        let areas = group_venues_by_area(venues);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "Austin");
        assert_eq!(areas[0].state, "TX");
        assert_eq!(areas[0].venues.len(), 2);
        assert_eq!(areas[1].venues.len(), 1);
    }

    #[test]
    fn grouping_separates_same_city_different_state() {
        let venues = vec![
            venue_model(1, "Bar A", "Springfield", "IL"),
            venue_model(2, "Bar B", "Springfield", "MO"),
        ];

        let areas = group_venues_by_area(venues);

        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn grouping_keeps_member_order() {
        let venues = vec![
            venue_model(1, "Alpha Hall", "Austin", "TX"),
            venue_model(2, "Beta Room", "Austin", "TX"),
            venue_model(3, "Gamma Stage", "Austin", "TX"),
        ];

        let areas = group_venues_by_area(venues);
        let names: Vec<&str> = areas[0].venues.iter().map(|v| v.name.as_str()).collect();

        assert_eq!(names, vec!["Alpha Hall", "Beta Room", "Gamma Stage"]);
    }

    #[test]
    fn grouping_empty_input_yields_no_areas() {
        assert!(group_venues_by_area(vec![]).is_empty());
    }

    #[test]
    fn partition_is_total_and_disjoint() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let shows = vec![
            listing("past one", now - Duration::days(7)),
            listing("future one", now + Duration::hours(1)),
            listing("past two", now - Duration::seconds(1)),
            listing("future two", now + Duration::days(30)),
        ];
        let total = shows.len();

        let partition = partition_shows(shows, now);

        assert_eq!(partition.upcoming.len() + partition.past.len(), total);
        assert!(partition.upcoming.iter().all(|s| s.start_time > now));
        assert!(partition.past.iter().all(|s| s.start_time <= now));
    }

    #[test]
    fn show_exactly_at_now_counts_as_past() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let partition = partition_shows(vec![listing("borderline", now)], now);

        assert!(partition.upcoming.is_empty());
        assert_eq!(partition.past.len(), 1);
    }

    #[test]
    fn partition_preserves_input_order_within_sides() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let shows = vec![
            listing("a", now + Duration::days(3)),
            listing("b", now + Duration::days(1)),
            listing("c", now + Duration::days(2)),
        ];

        let partition = partition_shows(shows, now);
        let names: Vec<&str> = partition
            .upcoming
            .iter()
            .map(|s| s.counterpart_name.as_str())
            .collect();

        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
