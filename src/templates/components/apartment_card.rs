use crate::domain::apartment::{amenity_icon, plural, Apartment};
use crate::templates::components::image_gallery;
use maud::{html, Markup};

/// Bedrooms, bathrooms and guests on one line.
pub fn room_summary(apartment: &Apartment) -> Markup {
    html! {
        div class="room-summary muted" {
            span { "🛏️ " (plural(apartment.bedrooms, "bedroom")) }
            span class="dot" { "•" }
            span { "🛁 " (plural(apartment.bathrooms, "bathroom")) }
            span class="dot" { "•" }
            span { "👥 Up to " (apartment.guests) " guests" }
        }
    }
}

pub fn apartment_card(apartment: &Apartment, booking_url: &str) -> Markup {
    html! {
        article class="apartment-card" {
            (image_gallery(&format!("apt{}", apartment.id), apartment.name, apartment.images))

            div class="apartment-body" {
                div class="apartment-head" {
                    div {
                        h3 { a href=(format!("/apartments/{}", apartment.id)) { (apartment.name) } }
                        (room_summary(apartment))
                    }
                    div class="price" {
                        strong { "$" (apartment.price) }
                        span class="muted" { "per night" }
                    }
                }

                p class="muted clamp-3" { (apartment.description) }

                h4 class="eyebrow" { "Amenities" }
                div class="chips" {
                    @for amenity in apartment.amenities {
                        span class="chip" { (amenity_icon(amenity)) " " (amenity) }
                    }
                }

                div class="card-actions" {
                    a class="btn btn-outline" href=(format!("/?unit={}#calendar", apartment.id)) {
                        "📅 Check Availability"
                    }
                    a class="btn" href=(booking_url) target="_blank" rel="noopener noreferrer" { "Book Now" }
                }
            }
        }
    }
}
