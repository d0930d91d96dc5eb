use crate::domain::apartment::BuildingAmenity;
use maud::{html, Markup};

pub fn amenity_card(amenity: &BuildingAmenity) -> Markup {
    html! {
        div class="amenity-card" {
            div class="amenity-icon" { (amenity.icon) }
            h3 { (amenity.title) }
            p class="muted" { (amenity.description) }
        }
    }
}
