pub mod amenity;
pub mod apartment_card;
pub mod calendar;
pub mod card;
pub mod error;
pub mod gallery;

pub use amenity::amenity_card;
pub use apartment_card::{apartment_card, room_summary};
pub use calendar::{calendar_section, CalendarVm};
pub use card::card;
pub use error::html_error_response;
pub use gallery::image_gallery;
