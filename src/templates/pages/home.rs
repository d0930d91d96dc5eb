// templates/pages/home.rs

use crate::domain::{APARTMENTS, BUILDING_AMENITIES};
use crate::templates::{
    components::{amenity_card, apartment_card, calendar_section, CalendarVm},
    site_layout,
};
use maud::{html, Markup};

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?auto=format&fit=crop&w=2073&q=80";
const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1501183638710-841dd1904471?auto=format&fit=crop&w=2070&q=80";
const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2624.1614307792253!2d2.2944813999999997!3d48.8740711!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x47e6701f7e8337b5%3A0xa2cb58dd28914524!2sArc%20de%20Triomphe!5e0!3m2!1sen!2sus!4v1718822522399!5m2!1sen!2sus";

pub fn home_page(calendar: &CalendarVm) -> Markup {
    let booking_url = calendar.booking_url;

    site_layout(
        "Home",
        booking_url,
        calendar.today,
        html! {
            section class="hero" style=(format!("background-image: url('{HERO_IMAGE}')")) {
                div class="hero-overlay" {}
                div class="container hero-content" {
                    h1 { "Coastal Paradise Awaits" }
                    p {
                        "Experience the perfect blend of luxury and nature in our waterfront villas, "
                        "with crystal clear waters and stunning views just steps from your door."
                    }
                    div class="hero-actions" {
                        a class="btn btn-light" href="#apartments" { "View Apartments" }
                        a class="btn btn-outline-light" href=(booking_url) target="_blank" rel="noopener noreferrer" {
                            "Book on Airbnb"
                        }
                    }
                    a class="explore" href="#apartments" { "Explore" br; "⌄" }
                }
            }

            section class="section" id="about" {
                div class="container two-col" {
                    img class="rounded shadow" src=(ABOUT_IMAGE) alt="Building exterior" loading="lazy";
                    div {
                        span class="eyebrow" { "About Our Property" }
                        h2 { "Contemporary Living in a Historic Setting" }
                        p class="lead muted" {
                            "Our beautifully renovated property combines modern luxury with historic charm. "
                            "Located in the heart of downtown, you'll be steps away from restaurants, shopping, and cultural attractions."
                        }
                        p class="lead muted" {
                            "Each apartment is thoughtfully designed with high-end finishes, comfortable furnishings, "
                            "and all the amenities you need for a memorable stay, whether you're visiting for a weekend getaway or an extended stay."
                        }
                    }
                }
            }

            section class="section section-muted" id="apartments" {
                div class="container" {
                    div class="section-head" {
                        span class="eyebrow" { "Our Apartments" }
                        h2 { "Find Your Perfect Stay" }
                        p class="muted" {
                            "Choose from our selection of beautifully designed apartments, each offering unique features and amenities."
                        }
                    }
                    div class="grid-3" {
                        @for apartment in APARTMENTS {
                            (apartment_card(apartment, booking_url))
                        }
                    }
                }
            }

            section class="section" id="amenities" {
                div class="container" {
                    div class="section-head" {
                        span class="eyebrow" { "Property Features" }
                        h2 { "Premium Amenities" }
                        p class="muted" {
                            "Enjoy these premium amenities designed to enhance your comfort and convenience."
                        }
                    }
                    div class="grid-3" {
                        @for amenity in BUILDING_AMENITIES {
                            (amenity_card(amenity))
                        }
                    }
                }
            }

            (calendar_section(calendar))

            section class="section" id="location" {
                div class="container" {
                    div class="section-head" {
                        h2 { "Our Location" }
                        p class="muted" { "Perfectly situated in the heart of the city, close to major attractions." }
                    }
                    div class="map" {
                        iframe
                            src=(MAP_EMBED)
                            width="100%"
                            height="100%"
                            style="border: 0"
                            allowfullscreen
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                            title="Property Location"
                        {}
                    }
                }
            }
        },
    )
}
