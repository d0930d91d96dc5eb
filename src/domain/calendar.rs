// src/domain/calendar.rs

use crate::domain::availability::UnitId;
use crate::errors::ServerError;
use chrono::{Datelike, Months, NaiveDate};
use std::collections::HashMap;

/// What the visitor is looking at in the availability calendar.
///
/// Every change goes through one of the transition methods below, each of which
/// returns the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    month: NaiveDate,
    selected: Option<NaiveDate>,
    unit: Option<UnitId>,
}

impl CalendarView {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            month: first_of_month(today),
            selected: Some(today),
            unit: None,
        }
    }

    /// First day of the displayed month.
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// `None` means all units.
    pub fn unit(&self) -> Option<UnitId> {
        self.unit
    }

    /// Selector value as the page uses it: 0 for all units.
    pub fn unit_filter(&self) -> UnitId {
        self.unit.unwrap_or(0)
    }

    pub fn next_month(self) -> Self {
        match self.month.checked_add_months(Months::new(1)) {
            Some(month) => Self { month, ..self },
            None => self,
        }
    }

    pub fn can_go_back(&self, today: NaiveDate) -> bool {
        self.month > first_of_month(today)
    }

    /// Step back one month, never past the month containing `today`.
    pub fn prev_month(self, today: NaiveDate) -> Self {
        if !self.can_go_back(today) {
            return self;
        }
        match self.month.checked_sub_months(Months::new(1)) {
            Some(month) => Self { month, ..self },
            None => self,
        }
    }

    pub fn select_date(self, date: NaiveDate) -> Self {
        Self {
            selected: Some(date),
            ..self
        }
    }

    pub fn clear_selection(self) -> Self {
        Self {
            selected: None,
            ..self
        }
    }

    pub fn select_unit(self, filter: UnitId) -> Self {
        Self {
            unit: (filter != 0).then_some(filter),
            ..self
        }
    }

    /// Rebuild the view from `month`, `date` and `unit` query parameters.
    ///
    /// Missing parameters keep the defaults of [`CalendarView::new`]; an empty `date`
    /// clears the selection. A month before the current one is pulled forward.
    pub fn from_query(
        params: &HashMap<String, String>,
        unit_count: UnitId,
        today: NaiveDate,
    ) -> Result<Self, ServerError> {
        let mut view = Self::new(today);

        if let Some(raw) = params.get("month") {
            let month = parse_month(raw)
                .ok_or_else(|| ServerError::BadRequest(format!("invalid month: {raw}")))?;
            view.month = month.max(first_of_month(today));
        }

        match params.get("date").map(String::as_str) {
            Some("") => view = view.clear_selection(),
            Some(raw) => {
                let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| ServerError::BadRequest(format!("invalid date: {raw}")))?;
                view = view.select_date(date);
            }
            None => {}
        }

        if let Some(raw) = params.get("unit") {
            let unit: UnitId = raw
                .parse()
                .map_err(|_| ServerError::BadRequest(format!("invalid unit: {raw}")))?;
            if unit > unit_count {
                return Err(ServerError::BadRequest(format!("unknown unit: {unit}")));
            }
            view = view.select_unit(unit);
        }

        Ok(view)
    }

    /// Query string reproducing this view, e.g. `month=2026-10&unit=0&date=2026-10-19`.
    pub fn to_query(&self) -> String {
        let mut q = format!(
            "month={}&unit={}",
            self.month.format("%Y-%m"),
            self.unit_filter()
        );
        if let Some(date) = self.selected {
            q.push_str(&format!("&date={}", date.format("%Y-%m-%d")));
        }
        q
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok()
}

/// A calendar week, Sunday first. `None` pads days belonging to neighbouring months.
pub type Week = [Option<NaiveDate>; 7];

pub fn month_grid(month: NaiveDate) -> Vec<Week> {
    let first = first_of_month(month);
    let mut weeks = Vec::new();
    let mut week: Week = [None; 7];
    let mut col = first.weekday().num_days_from_sunday() as usize;

    for date in first.iter_days().take_while(|d| d.month() == first.month()) {
        week[col] = Some(date);
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
    }
    if col > 0 {
        weeks.push(week);
    }

    weeks
}
