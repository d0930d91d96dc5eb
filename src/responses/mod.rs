pub mod assets;
pub mod html;
pub mod json;
pub mod redirect;

pub use crate::errors::ResultResp;

pub use assets::stylesheet_response;
pub use html::html_response;
pub use json::json_response;
pub use redirect::redirect_response;
