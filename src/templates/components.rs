use chrono::{DateTime, FixedOffset};
use maud::{html, Markup};

use crate::db::genres::GenreList;
use crate::forms::STATES;
use crate::services::listings::{SearchResult, ShowListing};

/// Genre choices offered by the venue and artist forms.
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

const PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/300x300/1a1a1a/ffffff?text=No+Image";

pub fn format_start_time(start_time: &DateTime<FixedOffset>) -> String {
    start_time.format("%a %b %-d, %Y %-I:%M%p").to_string()
}

pub fn flash_banner(message: &str) -> Markup {
    html! {
        div class="p-4 rounded-md bg-green-50 text-green-800 mb-4" {
            div class="flex items-center" {
                span class="font-bold mr-2" { "✓" }
                span { (message) }
            }
        }
    }
}

pub fn genre_badges(genres: &GenreList) -> Markup {
    html! {
        div class="flex flex-wrap gap-2" {
            @for genre in genres {
                span class="px-2 py-1 bg-gray-100 text-gray-700 text-sm rounded" {
                    (genre)
                }
            }
        }
    }
}

pub fn seeking_badge(seeking: bool, label: &str, description: Option<&str>) -> Markup {
    html! {
        @if seeking {
            div class="p-4 rounded-md bg-blue-50" {
                span class="px-2 py-1 text-xs font-semibold text-white rounded-full bg-blue-500" {
                    (label)
                }
                @if let Some(text) = description {
                    p class="mt-2 text-sm text-blue-900" { (text) }
                }
            }
        }
    }
}

/// Search hit rows shared by the venue and artist search pages.
/// `base_path` is "/venues" or "/artists".
pub fn search_result_list(results: &[SearchResult], base_path: &str) -> Markup {
    html! {
        ul class="divide-y divide-gray-200 bg-white rounded-lg shadow-sm" {
            @for result in results {
                li class="p-4 hover:bg-gray-50" {
                    a href={(format!("{}/{}", base_path, result.id))} class="flex justify-between items-center" {
                        span class="font-medium text-gray-900" { (result.name) }
                        span class="text-sm text-gray-500" {
                            (result.num_upcoming_shows) " upcoming "
                            @if result.num_upcoming_shows == 1 { "show" } @else { "shows" }
                        }
                    }
                }
            }
        }
    }
}

/// One show on a detail page. `counterpart_base` is the listing path of
/// the other side ("/artists" on a venue page, "/venues" on an artist
/// page).
pub fn show_listing_card(listing: &ShowListing, counterpart_base: &str) -> Markup {
    let image = listing
        .counterpart_image_link
        .as_deref()
        .unwrap_or(PLACEHOLDER_IMAGE);

    html! {
        div class="listing-card bg-white rounded-lg shadow-md p-4 flex items-center space-x-4" {
            img
                src=(image)
                alt={(format!("{} image", listing.counterpart_name))}
                class="w-16 h-16 rounded-full object-cover"
                loading="lazy";

            div {
                a
                    href={(format!("{}/{}", counterpart_base, listing.counterpart_id))}
                    class="font-semibold text-gray-900 hover:underline" {
                    (listing.counterpart_name)
                }
                p class="text-sm text-gray-500" { (format_start_time(&listing.start_time)) }
            }
        }
    }
}

pub fn text_field(name: &str, label: &str, value: &str, required: bool) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700 mb-2" for=(name) {
                (label)
            }
            input
                type="text"
                id=(name)
                name=(name)
                value=(value)
                required[required]
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
        }
    }
}

pub fn state_select(selected: &str) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700 mb-2" for="state" {
                "State"
            }
            select
                id="state"
                name="state"
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary" {
                @for state in STATES {
                    option value=(state) selected[*state == selected] { (state) }
                }
            }
        }
    }
}

pub fn genre_select(selected: &[String]) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700 mb-2" for="genres" {
                "Genres"
            }
            select
                id="genres"
                name="genres"
                multiple
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary" {
                @for genre in GENRES {
                    option value=(genre) selected[selected.iter().any(|g| g == genre)] {
                        (genre)
                    }
                }
            }
        }
    }
}

pub fn checkbox_field(name: &str, label: &str, checked: bool) -> Markup {
    html! {
        div class="flex items-center space-x-2" {
            input
                type="checkbox"
                id=(name)
                name=(name)
                value="y"
                checked[checked]
                class="h-4 w-4 border-gray-300 rounded";
            label class="text-sm font-medium text-gray-700" for=(name) {
                (label)
            }
        }
    }
}

pub fn textarea_field(name: &str, label: &str, value: &str) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700 mb-2" for=(name) {
                (label)
            }
            textarea
                id=(name)
                name=(name)
                rows="3"
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary" {
                (value)
            }
        }
    }
}

pub fn submit_button(label: &str) -> Markup {
    html! {
        button
            type="submit"
            class="w-full bg-primary hover:bg-green-600 text-white font-semibold py-2 px-4 rounded-md transition" {
            (label)
        }
    }
}
