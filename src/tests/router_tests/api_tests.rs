use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, test_state};
use serde_json::{json, Value};

fn availability(query: &str) -> Value {
    let state = test_state();
    let resp = handle(get(&format!("/api/availability?{query}")), &state)
        .expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), "application/json");
    serde_json::from_str(&body_string(resp)).expect("valid json")
}

#[test]
fn aggregate_day_with_per_unit_breakdown() {
    let v = availability("date=2026-10-20");

    assert_eq!(
        v,
        json!({
            "date": "2026-10-20",
            "unit": null,
            "status": "some-available",
            "units": [
                { "unit": 1, "status": "available" },
                { "unit": 2, "status": "available" },
                { "unit": 3, "status": "booked" },
            ],
            "generated_on": "2026-10-19",
        })
    );
}

#[test]
fn unit_filter_and_zero_meaning_all() {
    assert_eq!(availability("date=2026-10-20&unit=3")["status"], "booked");
    assert_eq!(availability("date=2026-10-21&unit=0")["status"], "all-booked");
    assert_eq!(availability("date=2026-10-22")["status"], "all-available");
}

#[test]
fn past_dates_are_past_everywhere() {
    let v = availability("date=2026-10-01&unit=2");

    assert_eq!(v["status"], "past");
    for unit in v["units"].as_array().unwrap() {
        assert_eq!(unit["status"], "past");
    }
}

#[test]
fn outside_horizon() {
    assert_eq!(availability("date=2027-06-01")["status"], "mixed");
    assert_eq!(availability("date=2027-06-01&unit=1")["status"], "unknown");
    assert_eq!(availability("date=2026-10-25&unit=7")["status"], "unknown");
}

#[test]
fn same_question_same_answer() {
    assert_eq!(availability("date=2026-11-05"), availability("date=2026-11-05"));
}

#[test]
fn bad_input_is_rejected() {
    let state = test_state();

    for uri in [
        "/api/availability",
        "/api/availability?date=tomorrow",
        "/api/availability?date=2026-10-20&unit=-1",
    ] {
        let result = handle(get(uri), &state);
        assert!(matches!(result.err(), Some(ServerError::BadRequest(_))), "{uri}");
    }
}
