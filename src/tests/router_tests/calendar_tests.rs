use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, post, test_state};
use std::sync::Arc;

fn partial(uri: &str) -> String {
    let state = test_state();
    let resp = handle(get(uri), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

/// Status attribute of the day cell linking to `date`.
fn cell_status<'a>(body: &'a str, date: &str) -> &'a str {
    let anchor = format!("date={date}#calendar");
    body.match_indices(&anchor)
        .find_map(|(at, _)| {
            let cell = &body[body[..at].rfind("<a ")?..at];
            let rest = &cell[cell.find("data-status=\"")? + 13..];
            Some(&rest[..rest.find('"')?])
        })
        .unwrap_or_else(|| panic!("no day cell for {date}"))
}

#[test]
fn partial_has_no_page_chrome() {
    let body = partial("/calendar");

    // Crucial for htmx outerHTML swaps.
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
    assert!(body.starts_with("<section"));
    assert!(body.contains("id=\"calendar\""));
}

#[test]
fn all_units_view_classifies_days() {
    let body = partial("/calendar");

    assert_eq!(cell_status(&body, "2026-10-18"), "past");
    assert_ne!(cell_status(&body, "2026-10-19"), "past");
    assert_eq!(cell_status(&body, "2026-10-20"), "some-available");
    assert_eq!(cell_status(&body, "2026-10-21"), "all-booked");
    assert_eq!(cell_status(&body, "2026-10-22"), "all-available");
}

#[test]
fn unit_filter_shows_raw_status() {
    let body = partial("/calendar?unit=3");

    assert_eq!(cell_status(&body, "2026-10-20"), "booked");
    assert_eq!(cell_status(&body, "2026-10-22"), "available");
    assert_eq!(cell_status(&body, "2026-10-01"), "past");
}

#[test]
fn every_day_before_today_is_past() {
    let body = partial("/calendar?unit=1");
    assert_eq!(body.matches("data-status=\"past\"").count(), 18);
}

#[test]
fn beyond_horizon_is_mixed_or_unknown() {
    let body = partial("/calendar?month=2027-03");
    assert_eq!(body.matches("data-status=\"mixed\"").count(), 31);

    let body = partial("/calendar?month=2027-03&unit=2");
    assert_eq!(body.matches("data-status=\"unknown\"").count(), 31);
}

#[test]
fn cannot_page_before_current_month() {
    let body = partial("/calendar");
    assert!(body.contains("aria-disabled=\"true\""));
    assert!(body.contains("month=2026-11"));

    let body = partial("/calendar?month=2026-11");
    assert!(!body.contains("aria-disabled=\"true\""));
    assert!(body.contains("month=2026-10"));

    // Months in the past snap back to the current one.
    let body = partial("/calendar?month=2026-01");
    assert!(body.contains("October 2026"));
}

#[test]
fn selected_day_lists_each_unit() {
    let body = partial("/calendar?date=2026-10-20");

    assert!(body.contains("Availability for October 20, 2026"));
    assert!(body.contains("badge badge-booked"));
    assert_eq!(body.matches("badge badge-available").count(), 2);
    assert!(body.contains("Executive Penthouse"));
}

#[test]
fn empty_date_hides_the_panel() {
    let body = partial("/calendar?date=");
    assert!(!body.contains("Availability for"));
}

#[test]
fn out_of_range_unit_is_rejected() {
    let state = test_state();
    let result = handle(get("/calendar?unit=4"), &state);
    assert!(matches!(result.err(), Some(ServerError::BadRequest(_))));
}

#[test]
fn refresh_replaces_snapshot_and_redirects() {
    let state = test_state();
    let before = state.store.current().unwrap();

    let resp = handle(post("/availability/refresh"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), "/#calendar");

    let after = state.store.current().unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
    // Oct 19..=Dec 31 for three units, regenerated as a whole.
    assert_eq!(after.records().len(), (13 + 30 + 31) * 3);
}

#[test]
fn refresh_requires_post() {
    let state = test_state();
    let result = handle(get("/availability/refresh"), &state);
    assert!(matches!(result.err(), Some(ServerError::NotFound)));
}
