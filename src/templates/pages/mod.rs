pub mod apartment;
pub mod home;

pub use apartment::apartment_page;
pub use home::home_page;
