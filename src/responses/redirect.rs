use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// `status` should be a 3xx code: 302 for plain redirects, 303 after a POST.
pub fn redirect_response(status: u16, location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
