use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, test_state};

#[test]
fn apartment_page_loads() {
    let state = test_state();

    let resp = handle(get("/apartments/1"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Luxury Urban Suite"));
    assert!(body.contains("1 bedroom"));
    assert!(body.contains("Up to 2 guests"));
    assert!(body.contains("$129"));
    assert!(body.contains("About this space"));
    assert!(body.contains("Air Conditioning"));
    assert!(body.contains("/?unit=1#calendar"));
}

#[test]
fn plural_rooms_on_larger_apartments() {
    let state = test_state();
    let body = body_string(handle(get("/apartments/3"), &state).expect("Failed to handle request"));

    assert!(body.contains("Executive Penthouse"));
    assert!(body.contains("2 bedrooms"));
    assert!(body.contains("2 bathrooms"));
    assert!(body.contains("$259"));
}

#[test]
fn unknown_apartment_redirects_home() {
    let state = test_state();

    let resp = handle(get("/apartments/9"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/");
}

#[test]
fn non_numeric_apartment_is_not_found() {
    let state = test_state();
    let result = handle(get("/apartments/penthouse"), &state);
    assert!(matches!(result.err(), Some(ServerError::NotFound)));
}
