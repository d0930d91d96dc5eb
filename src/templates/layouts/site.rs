use chrono::{Datelike, NaiveDate};
use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "CozyStay";

pub fn site_layout(title: &str, booking_url: &str, today: NaiveDate, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · " (SITE_NAME) }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                (navbar(booking_url))
                (content)
                (footer(booking_url, today.year()))
            }
        }
    }
}

fn navbar(booking_url: &str) -> Markup {
    html! {
        header class="navbar" {
            div class="container navbar-inner" {
                a href="/" class="brand" { (SITE_NAME) }

                nav class="nav-links" {
                    ul {
                        li { a href="/#about" { "About" } }
                        li { a href="/#apartments" { "Apartments" } }
                        li { a href="/#amenities" { "Amenities" } }
                        li { a href="/#contact" { "Contact" } }
                    }
                }

                div class="nav-actions" {
                    a href="/#calendar" class="btn btn-outline" { "📅 Availability" }
                    a href=(booking_url) target="_blank" rel="noopener noreferrer" class="btn" { "Book Now" }
                }

                // Mobile menu: open/closed state lives in the <details> element.
                details class="mobile-menu" {
                    summary aria-label="Menu" { "☰" }
                    a href="/#about" { "About" }
                    a href="/#apartments" { "Apartments" }
                    a href="/#amenities" { "Amenities" }
                    a href="/#contact" { "Contact" }
                    a href="/#calendar" { "Check Availability" }
                    a href=(booking_url) target="_blank" rel="noopener noreferrer" { "Book Now" }
                }
            }
        }
    }
}

fn footer(booking_url: &str, year: i32) -> Markup {
    html! {
        footer class="footer" id="contact" {
            div class="container footer-grid" {
                div {
                    h3 { (SITE_NAME) }
                    p class="muted" {
                        "Luxury apartments in the heart of the city, designed for comfort and elegance."
                    }
                }
                div {
                    h4 { "Contact Us" }
                    ul class="muted" {
                        li { "📍 123 Main Street, Cityville" }
                        li { "📞 +1 (555) 123-4567" }
                        li { a href="mailto:info@cozystay.com" { "✉️ info@cozystay.com" } }
                    }
                }
                div {
                    h4 { "Quick Links" }
                    ul {
                        li { a href="/" { "Home" } }
                        li { a href="/#about" { "About" } }
                        li { a href="/#apartments" { "Apartments" } }
                        li { a href="/#amenities" { "Amenities" } }
                        li { a href=(booking_url) target="_blank" rel="noopener noreferrer" { "Book on Airbnb" } }
                    }
                }
            }
            div class="footer-bottom" {
                p { "© " (year.to_string()) " " (SITE_NAME) ". All rights reserved." }
            }
        }
    }
}
