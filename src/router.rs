use crate::domain::{find_apartment, AvailabilitySource, CalendarView, DayStatus, UnitId};
use crate::errors::ServerError;
use crate::responses::{
    html_response, json_response, redirect_response, stylesheet_response, ResultResp,
};
use crate::state::AppState;
use crate::templates::{self, components::CalendarVm};
use astra::{Request, Response};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// Entry point for the server: turns handler errors into logged HTML error pages.
pub fn respond(req: Request, state: &AppState) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                tracing::error!(%method, path = %path, "{err}");
            } else {
                tracing::warn!(%method, path = %path, "{err}");
            }
            templates::html_error_response(err)
        }
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    tracing::debug!(method, path, "request");

    let params = parse_query(&req);
    let today = state.today();

    match (method, path) {
        ("GET", "/") => home(&params, state, today),
        ("GET", "/calendar") => calendar_partial(&params, state, today),
        ("GET", "/api/availability") => api_availability(&params, state, today),
        ("POST", "/availability/refresh") => refresh(state, today),
        ("GET", "/static/main.css") => stylesheet_response(),
        ("GET", p) if p.starts_with("/apartments/") => {
            apartment_detail(&p["/apartments/".len()..], state, today)
        }
        _ => Err(ServerError::NotFound),
    }
}

fn home(params: &HashMap<String, String>, state: &AppState, today: NaiveDate) -> ResultResp {
    let snapshot = state.store.current()?;
    let view = CalendarView::from_query(params, snapshot.unit_count(), today)?;
    let vm = CalendarVm {
        view,
        today,
        source: &*snapshot,
        booking_url: &state.booking_url,
    };

    html_response(templates::pages::home_page(&vm))
}

/// Calendar section only, swapped in by htmx.
fn calendar_partial(
    params: &HashMap<String, String>,
    state: &AppState,
    today: NaiveDate,
) -> ResultResp {
    let snapshot = state.store.current()?;
    let view = CalendarView::from_query(params, snapshot.unit_count(), today)?;
    let vm = CalendarVm {
        view,
        today,
        source: &*snapshot,
        booking_url: &state.booking_url,
    };

    html_response(templates::components::calendar_section(&vm))
}

fn apartment_detail(id: &str, state: &AppState, today: NaiveDate) -> ResultResp {
    let id: UnitId = id.parse().map_err(|_| ServerError::NotFound)?;

    match find_apartment(id) {
        Some(apartment) => html_response(templates::pages::apartment_page(
            apartment,
            &state.booking_url,
            today,
        )),
        None => {
            tracing::debug!(id, "unknown apartment, redirecting home");
            redirect_response(302, "/")
        }
    }
}

#[derive(Debug, Serialize)]
struct AvailabilityResponse {
    date: NaiveDate,
    unit: Option<UnitId>,
    status: DayStatus,
    units: Vec<UnitAvailability>,
    generated_on: NaiveDate,
}

#[derive(Debug, Serialize)]
struct UnitAvailability {
    unit: UnitId,
    status: DayStatus,
}

fn api_availability(
    params: &HashMap<String, String>,
    state: &AppState,
    today: NaiveDate,
) -> ResultResp {
    let raw_date = params
        .get("date")
        .ok_or_else(|| ServerError::BadRequest("missing date".into()))?;
    let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
        .map_err(|_| ServerError::BadRequest(format!("invalid date: {raw_date}")))?;

    let unit = match params.get("unit") {
        Some(raw) => raw
            .parse::<UnitId>()
            .map_err(|_| ServerError::BadRequest(format!("invalid unit: {raw}")))?,
        None => 0,
    };
    let unit = (unit != 0).then_some(unit);

    let snapshot = state.store.current()?;
    let units = snapshot
        .unit_statuses(date, today)
        .into_iter()
        .map(|(unit, status)| UnitAvailability { unit, status })
        .collect();

    json_response(&AvailabilityResponse {
        date,
        unit,
        status: snapshot.status(date, unit, today),
        units,
        generated_on: snapshot.generated_on(),
    })
}

fn refresh(state: &AppState, today: NaiveDate) -> ResultResp {
    state.store.regenerate(today)?;
    redirect_response(303, "/#calendar")
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
