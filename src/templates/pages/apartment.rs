use crate::domain::apartment::{amenity_icon, Apartment};
use crate::templates::{
    components::{card, image_gallery, room_summary},
    site_layout,
};
use chrono::NaiveDate;
use maud::{html, Markup};

pub fn apartment_page(apartment: &Apartment, booking_url: &str, today: NaiveDate) -> Markup {
    site_layout(
        apartment.name,
        booking_url,
        today,
        html! {
            main class="container detail" {
                a class="btn btn-ghost" href="/#apartments" { "← Back to Apartments" }

                h1 { (apartment.name) }
                (room_summary(apartment))

                div class="detail-gallery" {
                    (image_gallery("detail", apartment.name, apartment.images))
                }

                div class="detail-grid" {
                    div class="detail-main" {
                        (card("About this space", html! {
                            p class="muted" { (apartment.description) }
                        }))

                        (card("Amenities", html! {
                            div class="amenity-list" {
                                @for amenity in apartment.amenities {
                                    span { (amenity_icon(amenity)) " " (amenity) }
                                }
                            }
                        }))
                    }

                    aside class="card booking-card" {
                        div class="price" {
                            strong { "$" (apartment.price) }
                            span class="muted" { "per night" }
                        }
                        a class="btn btn-block" href=(format!("/?unit={}#calendar", apartment.id)) {
                            "Check Availability"
                        }
                        a class="btn btn-block btn-outline" href=(booking_url) target="_blank" rel="noopener noreferrer" {
                            "Book on Airbnb"
                        }
                    }
                }
            }
        },
    )
}
