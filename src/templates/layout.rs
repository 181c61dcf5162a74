use maud::{html, Markup, DOCTYPE};

pub fn base_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class="h-full" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Showbill" }

                // Compiled TailwindCSS
                link rel="stylesheet" href="/static/css/output.css";

                // HTMX for interactivity
                script src="https://unpkg.com/htmx.org@1.9.10" {}

                // Additional custom styles
                style {
                    r#"
                    .listing-card:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 10px 20px rgba(0,0,0,0.1);
                    }
                    "#
                }
            }
            body class="h-full bg-gray-50" {
                div class="min-h-full" {
                    // Navigation
                    (nav_bar())

                    // Main content
                    main class="container mx-auto px-4 py-8" {
                        (content)
                    }

                    // Footer
                    (footer())
                }
            }
        }
    }
}

fn nav_bar() -> Markup {
    html! {
        nav class="bg-white shadow-sm" {
            div class="container mx-auto px-4" {
                div class="flex justify-between items-center h-16" {
                    // Logo/Brand
                    a href="/" class="flex items-center space-x-3" {
                        span class="text-2xl" { "🎫" }
                        span class="text-xl font-bold text-gray-900" { "Showbill" }
                    }

                    // Navigation links
                    div class="flex space-x-4" {
                        a href="/venues" class="text-gray-700 hover:text-primary px-3 py-2 rounded-md text-sm font-medium" {
                            "Venues"
                        }
                        a href="/artists" class="text-gray-700 hover:text-primary px-3 py-2 rounded-md text-sm font-medium" {
                            "Artists"
                        }
                        a href="/shows" class="text-gray-700 hover:text-primary px-3 py-2 rounded-md text-sm font-medium" {
                            "Shows"
                        }
                        a href="/venues/create" class="text-gray-700 hover:text-primary px-3 py-2 rounded-md text-sm font-medium" {
                            "List a Venue"
                        }
                        a href="/artists/create" class="text-gray-700 hover:text-primary px-3 py-2 rounded-md text-sm font-medium" {
                            "List an Artist"
                        }
                        a href="/shows/create" class="text-gray-700 hover:text-primary px-3 py-2 rounded-md text-sm font-medium" {
                            "List a Show"
                        }
                    }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="bg-white border-t border-gray-200 mt-12" {
            div class="container mx-auto px-4 py-6" {
                div class="text-center text-gray-600 text-sm" {
                    "Showbill - Book artists, fill venues"
                }
            }
        }
    }
}
