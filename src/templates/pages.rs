use maud::{html, Markup};

use super::components::{
    checkbox_field, flash_banner, format_start_time, genre_badges, genre_select,
    search_result_list, seeking_badge, show_listing_card, state_select, submit_button,
    text_field, textarea_field,
};
use super::layout::base_layout;
use crate::db::entities::{artist, venue};
use crate::services::listings::{Area, SearchResult, ShowBoardEntry, ShowPartition};

pub fn home_page(
    flash: Option<&str>,
    venue_count: u64,
    artist_count: u64,
    show_count: u64,
) -> Markup {
    base_layout(
        "Home",
        html! {
            @if let Some(message) = flash {
                (flash_banner(message))
            }

            div class="text-center py-12" {
                h1 class="text-4xl font-bold text-gray-900" { "Showbill" }
                p class="mt-4 text-lg text-gray-600" {
                    "The booking board for venues and the artists who play them."
                }

                div class="mt-8 flex justify-center space-x-4" {
                    a href="/venues/create" class="px-6 py-3 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
                        "List a Venue"
                    }
                    a href="/artists/create" class="px-6 py-3 bg-blue-500 hover:bg-blue-600 text-white font-semibold rounded-md" {
                        "List an Artist"
                    }
                    a href="/shows/create" class="px-6 py-3 bg-gray-700 hover:bg-gray-800 text-white font-semibold rounded-md" {
                        "List a Show"
                    }
                }
            }

            div class="grid grid-cols-1 md:grid-cols-3 gap-6 max-w-3xl mx-auto" {
                (stat_card("Venues", venue_count, "/venues"))
                (stat_card("Artists", artist_count, "/artists"))
                (stat_card("Shows", show_count, "/shows"))
            }
        },
    )
}

fn stat_card(label: &str, count: u64, href: &str) -> Markup {
    html! {
        a href=(href) class="listing-card bg-white rounded-lg shadow-md p-6 text-center" {
            p class="text-3xl font-bold text-gray-900" { (count) }
            p class="text-sm text-gray-500 mt-1" { (label) " listed" }
        }
    }
}

pub fn venues_page(areas: &[Area]) -> Markup {
    base_layout(
        "Venues",
        html! {
            div class="flex justify-between items-center mb-6" {
                h1 class="text-3xl font-bold text-gray-900" { "Venues" }
                (search_form("/venues/search", "Search venues..."))
            }

            @if areas.is_empty() {
                div class="text-center py-12" {
                    p class="text-gray-600 text-lg" { "No venues listed yet." }
                    p class="text-gray-500 mt-2" {
                        a href="/venues/create" class="text-primary hover:underline" { "Be the first to list one." }
                    }
                }
            }

            @for area in areas {
                section class="mb-8" {
                    h2 class="text-xl font-semibold text-gray-700 mb-3" {
                        (area.city) ", " (area.state)
                    }
                    ul class="divide-y divide-gray-200 bg-white rounded-lg shadow-sm" {
                        @for venue in &area.venues {
                            li class="p-4 hover:bg-gray-50" {
                                a href={(format!("/venues/{}", venue.id))} class="font-medium text-gray-900 hover:underline" {
                                    (venue.name)
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn search_form(action: &str, placeholder: &str) -> Markup {
    html! {
        form method="post" action=(action) class="flex space-x-2" {
            input
                type="search"
                name="search_term"
                placeholder=(placeholder)
                class="px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
            button type="submit" class="px-4 py-2 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
                "Search"
            }
        }
    }
}

pub fn venue_search_page(search_term: &str, results: &[SearchResult]) -> Markup {
    search_page("Search Venues", "/venues", search_term, results)
}

pub fn artist_search_page(search_term: &str, results: &[SearchResult]) -> Markup {
    search_page("Search Artists", "/artists", search_term, results)
}

fn search_page(
    title: &str,
    base_path: &str,
    search_term: &str,
    results: &[SearchResult],
) -> Markup {
    base_layout(
        title,
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-2" { (title) }
            p class="text-gray-600 mb-6" {
                (results.len())
                @if results.len() == 1 { " result for " } @else { " results for " }
                "\"" (search_term) "\""
            }

            @if results.is_empty() {
                div class="text-center py-12" {
                    p class="text-gray-600 text-lg" { "Nothing matched your search." }
                }
            } @else {
                (search_result_list(results, base_path))
            }
        },
    )
}

pub fn venue_detail_page(
    venue: &venue::Model,
    shows: &ShowPartition,
    flash: Option<&str>,
) -> Markup {
    base_layout(
        &venue.name,
        html! {
            @if let Some(message) = flash {
                (flash_banner(message))
            }

            div class="bg-white rounded-lg shadow-md p-6 mb-8" {
                div class="flex flex-col md:flex-row gap-6" {
                    @if let Some(image) = &venue.image_link {
                        img
                            src=(image)
                            alt={(format!("{} image", venue.name))}
                            class="w-full md:w-64 rounded-lg shadow-md object-cover";
                    }

                    div class="flex-grow" {
                        h1 class="text-3xl font-bold text-gray-900" { (venue.name) }
                        p class="text-gray-600 mt-1" {
                            (venue.address) ", " (venue.city) ", " (venue.state)
                        }

                        div class="mt-3" { (genre_badges(&venue.genres)) }

                        dl class="mt-4 space-y-2" {
                            @if let Some(phone) = &venue.phone {
                                div {
                                    dt class="text-sm font-medium text-gray-500" { "Phone" }
                                    dd class="text-gray-900" { (phone) }
                                }
                            }
                            @if let Some(website) = &venue.website {
                                div {
                                    dt class="text-sm font-medium text-gray-500" { "Website" }
                                    dd { a href=(website) class="text-primary hover:underline" { (website) } }
                                }
                            }
                            @if let Some(facebook) = &venue.facebook_link {
                                div {
                                    dt class="text-sm font-medium text-gray-500" { "Facebook" }
                                    dd { a href=(facebook) class="text-primary hover:underline" { (facebook) } }
                                }
                            }
                        }

                        div class="mt-4" {
                            (seeking_badge(
                                venue.seeking_talent,
                                "Seeking talent",
                                venue.seeking_description.as_deref(),
                            ))
                        }

                        div class="mt-6 flex space-x-3" {
                            a
                                href={(format!("/venues/{}/edit", venue.id))}
                                class="px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white font-semibold rounded-md" {
                                "Edit"
                            }
                            button
                                class="px-4 py-2 bg-red-500 hover:bg-red-600 text-white font-semibold rounded-md"
                                hx-delete={(format!("/venues/{}", venue.id))}
                                hx-confirm={(format!("Delete {} and all of its shows?", venue.name))} {
                                "Delete"
                            }
                        }
                    }
                }
            }

            (show_partition_section(shows, "/artists"))
        },
    )
}

pub fn artist_detail_page(
    artist: &artist::Model,
    shows: &ShowPartition,
    flash: Option<&str>,
) -> Markup {
    base_layout(
        &artist.name,
        html! {
            @if let Some(message) = flash {
                (flash_banner(message))
            }

            div class="bg-white rounded-lg shadow-md p-6 mb-8" {
                div class="flex flex-col md:flex-row gap-6" {
                    @if let Some(image) = &artist.image_link {
                        img
                            src=(image)
                            alt={(format!("{} image", artist.name))}
                            class="w-full md:w-64 rounded-lg shadow-md object-cover";
                    }

                    div class="flex-grow" {
                        h1 class="text-3xl font-bold text-gray-900" { (artist.name) }
                        p class="text-gray-600 mt-1" {
                            (artist.city) ", " (artist.state)
                        }

                        div class="mt-3" { (genre_badges(&artist.genres)) }

                        dl class="mt-4 space-y-2" {
                            @if let Some(phone) = &artist.phone {
                                div {
                                    dt class="text-sm font-medium text-gray-500" { "Phone" }
                                    dd class="text-gray-900" { (phone) }
                                }
                            }
                            @if let Some(website) = &artist.website {
                                div {
                                    dt class="text-sm font-medium text-gray-500" { "Website" }
                                    dd { a href=(website) class="text-primary hover:underline" { (website) } }
                                }
                            }
                            @if let Some(facebook) = &artist.facebook_link {
                                div {
                                    dt class="text-sm font-medium text-gray-500" { "Facebook" }
                                    dd { a href=(facebook) class="text-primary hover:underline" { (facebook) } }
                                }
                            }
                        }

                        div class="mt-4" {
                            (seeking_badge(
                                artist.seeking_venue,
                                "Seeking a venue",
                                artist.seeking_description.as_deref(),
                            ))
                        }

                        div class="mt-6" {
                            a
                                href={(format!("/artists/{}/edit", artist.id))}
                                class="px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white font-semibold rounded-md" {
                                "Edit"
                            }
                        }
                    }
                }
            }

            (show_partition_section(shows, "/venues"))
        },
    )
}

fn show_partition_section(shows: &ShowPartition, counterpart_base: &str) -> Markup {
    html! {
        section class="mb-8" {
            h2 class="text-xl font-semibold text-gray-700 mb-3" {
                (shows.upcoming.len()) " Upcoming "
                @if shows.upcoming.len() == 1 { "Show" } @else { "Shows" }
            }
            @if shows.upcoming.is_empty() {
                p class="text-gray-500" { "No upcoming shows." }
            } @else {
                div class="grid grid-cols-1 md:grid-cols-2 gap-4" {
                    @for listing in &shows.upcoming {
                        (show_listing_card(listing, counterpart_base))
                    }
                }
            }
        }

        section {
            h2 class="text-xl font-semibold text-gray-700 mb-3" {
                (shows.past.len()) " Past "
                @if shows.past.len() == 1 { "Show" } @else { "Shows" }
            }
            @if shows.past.is_empty() {
                p class="text-gray-500" { "No past shows." }
            } @else {
                div class="grid grid-cols-1 md:grid-cols-2 gap-4" {
                    @for listing in &shows.past {
                        (show_listing_card(listing, counterpart_base))
                    }
                }
            }
        }
    }
}

pub fn artists_page(artists: &[artist::Model]) -> Markup {
    base_layout(
        "Artists",
        html! {
            div class="flex justify-between items-center mb-6" {
                h1 class="text-3xl font-bold text-gray-900" { "Artists" }
                (search_form("/artists/search", "Search artists..."))
            }

            @if artists.is_empty() {
                div class="text-center py-12" {
                    p class="text-gray-600 text-lg" { "No artists listed yet." }
                    p class="text-gray-500 mt-2" {
                        a href="/artists/create" class="text-primary hover:underline" { "Be the first to list one." }
                    }
                }
            } @else {
                ul class="divide-y divide-gray-200 bg-white rounded-lg shadow-sm" {
                    @for artist in artists {
                        li class="p-4 hover:bg-gray-50" {
                            a href={(format!("/artists/{}", artist.id))} class="font-medium text-gray-900 hover:underline" {
                                (artist.name)
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn shows_page(entries: &[ShowBoardEntry]) -> Markup {
    base_layout(
        "Shows",
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-6" { "Shows" }

            @if entries.is_empty() {
                div class="text-center py-12" {
                    p class="text-gray-600 text-lg" { "No shows scheduled." }
                    p class="text-gray-500 mt-2" {
                        a href="/shows/create" class="text-primary hover:underline" { "List one." }
                    }
                }
            } @else {
                div class="grid grid-cols-1 md:grid-cols-2 gap-4" {
                    @for entry in entries {
                        div class="listing-card bg-white rounded-lg shadow-md p-4 flex items-center space-x-4" {
                            img
                                src={(entry.artist_image_link.as_deref().unwrap_or("https://via.placeholder.com/300x300/1a1a1a/ffffff?text=No+Image"))}
                                alt={(format!("{} image", entry.artist_name))}
                                class="w-16 h-16 rounded-full object-cover"
                                loading="lazy";

                            div {
                                a href={(format!("/artists/{}", entry.artist_id))} class="font-semibold text-gray-900 hover:underline" {
                                    (entry.artist_name)
                                }
                                p class="text-sm text-gray-600" {
                                    "at "
                                    a href={(format!("/venues/{}", entry.venue_id))} class="hover:underline" {
                                        (entry.venue_name)
                                    }
                                }
                                p class="text-sm text-gray-500" { (format_start_time(&entry.start_time)) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn venue_form_page(heading: &str, action: &str, venue: Option<&venue::Model>) -> Markup {
    let selected_genres: Vec<String> = venue
        .map(|v| v.genres.iter().cloned().collect())
        .unwrap_or_default();

    base_layout(
        heading,
        html! {
            div class="max-w-2xl mx-auto" {
                h1 class="text-3xl font-bold text-gray-900 mb-8" { (heading) }

                form method="post" action=(action) class="bg-white rounded-lg shadow-md p-6 space-y-4" {
                    (text_field("name", "Name", venue.map(|v| v.name.as_str()).unwrap_or(""), true))

                    div class="grid grid-cols-1 md:grid-cols-2 gap-4" {
                        (text_field("city", "City", venue.map(|v| v.city.as_str()).unwrap_or(""), true))
                        (state_select(venue.map(|v| v.state.as_str()).unwrap_or("")))
                    }

                    (text_field("address", "Address", venue.map(|v| v.address.as_str()).unwrap_or(""), true))
                    (text_field("phone", "Phone", venue.and_then(|v| v.phone.as_deref()).unwrap_or(""), false))
                    (genre_select(&selected_genres))
                    (text_field("image_link", "Image Link", venue.and_then(|v| v.image_link.as_deref()).unwrap_or(""), false))
                    (text_field("website_link", "Website", venue.and_then(|v| v.website.as_deref()).unwrap_or(""), false))
                    (text_field("facebook_link", "Facebook Link", venue.and_then(|v| v.facebook_link.as_deref()).unwrap_or(""), false))
                    (checkbox_field("seeking_talent", "Seeking talent", venue.is_some_and(|v| v.seeking_talent)))
                    (textarea_field("seeking_description", "Seeking Description", venue.and_then(|v| v.seeking_description.as_deref()).unwrap_or("")))

                    (submit_button(heading))
                }
            }
        },
    )
}

pub fn artist_form_page(heading: &str, action: &str, artist: Option<&artist::Model>) -> Markup {
    let selected_genres: Vec<String> = artist
        .map(|a| a.genres.iter().cloned().collect())
        .unwrap_or_default();

    base_layout(
        heading,
        html! {
            div class="max-w-2xl mx-auto" {
                h1 class="text-3xl font-bold text-gray-900 mb-8" { (heading) }

                form method="post" action=(action) class="bg-white rounded-lg shadow-md p-6 space-y-4" {
                    (text_field("name", "Name", artist.map(|a| a.name.as_str()).unwrap_or(""), true))

                    div class="grid grid-cols-1 md:grid-cols-2 gap-4" {
                        (text_field("city", "City", artist.map(|a| a.city.as_str()).unwrap_or(""), true))
                        (state_select(artist.map(|a| a.state.as_str()).unwrap_or("")))
                    }

                    (text_field("phone", "Phone", artist.and_then(|a| a.phone.as_deref()).unwrap_or(""), false))
                    (genre_select(&selected_genres))
                    (text_field("image_link", "Image Link", artist.and_then(|a| a.image_link.as_deref()).unwrap_or(""), false))
                    (text_field("website_link", "Website", artist.and_then(|a| a.website.as_deref()).unwrap_or(""), false))
                    (text_field("facebook_link", "Facebook Link", artist.and_then(|a| a.facebook_link.as_deref()).unwrap_or(""), false))
                    (checkbox_field("seeking_venue", "Seeking a venue", artist.is_some_and(|a| a.seeking_venue)))
                    (textarea_field("seeking_description", "Seeking Description", artist.and_then(|a| a.seeking_description.as_deref()).unwrap_or("")))

                    (submit_button(heading))
                }
            }
        },
    )
}

pub fn show_form_page() -> Markup {
    base_layout(
        "List a Show",
        html! {
            div class="max-w-2xl mx-auto" {
                h1 class="text-3xl font-bold text-gray-900 mb-8" { "List a Show" }

                form method="post" action="/shows/create" class="bg-white rounded-lg shadow-md p-6 space-y-4" {
                    (text_field("artist_id", "Artist ID", "", true))
                    (text_field("venue_id", "Venue ID", "", true))

                    div {
                        label class="block text-sm font-medium text-gray-700 mb-2" for="start_time" {
                            "Start Time"
                        }
                        input
                            type="datetime-local"
                            id="start_time"
                            name="start_time"
                            required
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
                    }

                    (submit_button("List a Show"))
                }
            }
        },
    )
}

pub fn error_page(title: &str, message: &str) -> Markup {
    base_layout(
        title,
        html! {
            div class="text-center py-16" {
                h1 class="text-4xl font-bold text-gray-900" { (title) }
                p class="mt-4 text-lg text-gray-600" { (message) }
                a href="/" class="mt-8 inline-block px-6 py-3 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
                    "Back to home"
                }
            }
        },
    )
}

pub fn validation_error_page(messages: &[String]) -> Markup {
    base_layout(
        "Invalid Submission",
        html! {
            div class="max-w-2xl mx-auto py-12" {
                h1 class="text-3xl font-bold text-gray-900" { "That submission didn't look right" }
                ul class="mt-6 p-4 rounded-md bg-red-50 text-red-800 list-disc list-inside space-y-1" {
                    @for message in messages {
                        li { (message) }
                    }
                }
                p class="mt-6 text-gray-600" {
                    "Go back, fix the highlighted problems, and submit again."
                }
            }
        },
    )
}
