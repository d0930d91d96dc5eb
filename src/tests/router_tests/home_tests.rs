use crate::errors::ServerError;
use crate::domain::AvailabilityStore;
use crate::router::{handle, respond};
use crate::state::AppState;
use crate::templates::html_error_response;
use crate::tests::utils::{
    body_string, day, get, header, post, test_snapshot, test_state, BOOKING_URL, CFG,
};

#[test]
fn home_page_renders_every_section() {
    let state = test_state();

    let resp = handle(get("/"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/html"));

    let body = body_string(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Coastal Paradise Awaits"));
    assert!(body.contains("id=\"about\""));
    assert!(body.contains("Luxury Urban Suite"));
    assert!(body.contains("Family Comfort Haven"));
    assert!(body.contains("Executive Penthouse"));
    assert!(body.contains("Premium Amenities"));
    assert!(body.contains("Fully Equipped Kitchen"));
    assert!(body.contains("id=\"calendar\""));
    assert!(body.contains("October 2026"));
    assert!(body.contains("Availability for October 19, 2026"));
    assert!(body.contains("Our Location"));
    assert!(body.contains("info@cozystay.com"));
}

#[test]
fn booking_buttons_link_out() {
    let state = test_state();
    let body = body_string(handle(get("/"), &state).expect("Failed to handle request"));

    assert!(body.contains("href=\"https://airbnb.com/\""));
    assert!(body.contains("Book on Airbnb"));
    assert!(body.contains("target=\"_blank\""));
}

#[test]
fn home_page_honours_calendar_query() {
    let state = test_state();
    let resp = handle(get("/?month=2026-11&unit=2&date=2026-11-03"), &state)
        .expect("Failed to handle request");
    let body = body_string(resp);

    assert!(body.contains("November 2026"));
    assert!(body.contains("Availability for November 3, 2026"));
}

#[test]
fn malformed_calendar_query_is_bad_request() {
    let state = test_state();
    let result = handle(get("/?month=soon"), &state);
    assert!(matches!(result.err(), Some(ServerError::BadRequest(_))));
}

#[test]
fn unknown_routes_are_not_found() {
    let state = test_state();

    assert!(matches!(handle(get("/nope"), &state).err(), Some(ServerError::NotFound)));
    assert!(matches!(handle(post("/"), &state).err(), Some(ServerError::NotFound)));
}

#[test]
fn errors_render_as_html_pages() {
    let resp = html_error_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));

    let resp = html_error_response(ServerError::BadRequest("invalid month: soon".into()));
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("invalid month: soon"));

    assert_eq!(html_error_response(ServerError::InternalError).status(), 500);
}

#[test]
fn stylesheet_is_served() {
    let state = test_state();
    let resp = handle(get("/static/main.css"), &state).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/css"));
    assert!(body_string(resp).contains(".day-available"));
}

#[test]
fn respond_turns_errors_into_pages() {
    let state = test_state();

    let resp = respond(get("/"), &state);
    assert_eq!(resp.status(), 200);

    let resp = respond(get("/nope"), &state);
    assert_eq!(resp.status(), 404);
    assert!(header(&resp, "Content-Type").starts_with("text/html"));
    assert!(body_string(resp).contains("Error 404"));

    let resp = respond(get("/calendar?unit=9"), &state);
    assert_eq!(resp.status(), 400);
}

#[test]
fn footer_year_follows_the_request_clock() {
    let store = AvailabilityStore::with_snapshot(CFG, test_snapshot());
    let state = AppState::with_clock(store, BOOKING_URL.to_string(), || day(2031, 3, 1));

    let body = body_string(respond(get("/apartments/1"), &state));
    assert!(body.contains("© 2031 CozyStay"));

    let body = body_string(respond(get("/"), &test_state()));
    assert!(body.contains("© 2026 CozyStay"));
}
