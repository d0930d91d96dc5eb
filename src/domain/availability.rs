// src/domain/availability.rs

use chrono::{Datelike, Months, NaiveDate};
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Rental unit identifier. Units are numbered from 1, matching the apartment catalog ids.
pub type UnitId = u8;

/// Raw per-unit, per-day booking status as drawn by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Available,
    Booked,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRecord {
    pub date: NaiveDate,
    pub unit: UnitId,
    pub status: BookingStatus,
}

/// Display status of a calendar day, derived on every query and never stored.
///
/// The first four variants answer a single-unit query; the `All*`, `SomeAvailable`
/// and `Mixed` variants only come out of the all-units view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayStatus {
    Past,
    Available,
    Booked,
    Pending,
    AllAvailable,
    AllBooked,
    SomeAvailable,
    Mixed,
    Unknown,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Past => "past",
            DayStatus::Available => "available",
            DayStatus::Booked => "booked",
            DayStatus::Pending => "pending",
            DayStatus::AllAvailable => "all-available",
            DayStatus::AllBooked => "all-booked",
            DayStatus::SomeAvailable => "some-available",
            DayStatus::Mixed => "mixed",
            DayStatus::Unknown => "unknown",
        }
    }

    /// Human readable label used by the availability panel.
    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::Past => "Past",
            DayStatus::Available => "Available",
            DayStatus::Booked => "Booked",
            DayStatus::Pending => "Pending",
            DayStatus::AllAvailable => "All available",
            DayStatus::AllBooked => "All booked",
            DayStatus::SomeAvailable => "Partially available",
            DayStatus::Mixed => "Mixed",
            DayStatus::Unknown => "Unknown",
        }
    }
}

impl From<BookingStatus> for DayStatus {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Available => DayStatus::Available,
            BookingStatus::Booked => DayStatus::Booked,
            BookingStatus::Pending => DayStatus::Pending,
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything able to answer availability questions for the calendar.
///
/// The in-memory mock snapshot implements this today; a real reservation
/// feed can slot in behind the same calls.
pub trait AvailabilitySource {
    fn unit_count(&self) -> UnitId;

    /// `unit = None` asks for the aggregate over all units.
    fn status(&self, date: NaiveDate, unit: Option<UnitId>, today: NaiveDate) -> DayStatus;

    fn unit_statuses(&self, date: NaiveDate, today: NaiveDate) -> Vec<(UnitId, DayStatus)> {
        (1..=self.unit_count())
            .map(|unit| (unit, self.status(date, Some(unit), today)))
            .collect()
    }
}

// Cumulative cutoffs: 70% available, 20% booked, 10% pending.
const AVAILABLE_CUTOFF: f64 = 0.7;
const BOOKED_CUTOFF: f64 = 0.9;

pub fn draw_status<R: Rng + ?Sized>(rng: &mut R) -> BookingStatus {
    let roll: f64 = rng.gen();
    if roll < AVAILABLE_CUTOFF {
        BookingStatus::Available
    } else if roll < BOOKED_CUTOFF {
        BookingStatus::Booked
    } else {
        BookingStatus::Pending
    }
}

/// Generate one record per unit for every day from `today` through the end of the
/// `horizon_months`-th month after the current one.
///
/// Records come out month-major, then day, then unit.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    horizon_months: u32,
    unit_count: UnitId,
    today: NaiveDate,
) -> Vec<BookingRecord> {
    let mut records = Vec::new();
    let first_month = today.with_day(1).unwrap_or(today);

    for offset in 0..=horizon_months {
        let Some(month_start) = first_month.checked_add_months(Months::new(offset)) else {
            break;
        };

        let days = month_start
            .iter_days()
            .take_while(|d| d.month() == month_start.month())
            .filter(|d| *d >= today);

        for date in days {
            for unit in 1..=unit_count {
                records.push(BookingRecord {
                    date,
                    unit,
                    status: draw_status(rng),
                });
            }
        }
    }

    records
}

/// Derive the display status of `date`.
///
/// Dates before `today` are always `Past`. A unit filter returns that unit's raw
/// status or `Unknown`. Without a filter the day is classified over all units; the
/// `All*` buckets require exactly `unit_count` records, so days with partial data
/// can only end up `SomeAvailable` or `Mixed`.
pub fn query_status(
    records: &[BookingRecord],
    unit_count: UnitId,
    date: NaiveDate,
    unit: Option<UnitId>,
    today: NaiveDate,
) -> DayStatus {
    if date < today {
        return DayStatus::Past;
    }

    let mut day = records
        .iter()
        .filter(|r| r.date == date && unit.map_or(true, |u| r.unit == u));

    if unit.is_some() {
        return day.next().map_or(DayStatus::Unknown, |r| r.status.into());
    }

    let statuses: Vec<BookingStatus> = day.map(|r| r.status).collect();
    let complete = statuses.len() == usize::from(unit_count);

    if complete && statuses.iter().all(|s| *s == BookingStatus::Available) {
        DayStatus::AllAvailable
    } else if statuses.contains(&BookingStatus::Available) {
        DayStatus::SomeAvailable
    } else if complete && statuses.iter().all(|s| *s == BookingStatus::Booked) {
        DayStatus::AllBooked
    } else {
        DayStatus::Mixed
    }
}
