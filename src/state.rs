use crate::config::Settings;
use crate::domain::AvailabilityStore;
use chrono::NaiveDate;

/// Shared, read-mostly state handed to every request.
pub struct AppState {
    pub store: AvailabilityStore,
    pub booking_url: String,
    clock: fn() -> NaiveDate,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let store = AvailabilityStore::new(settings.generator, local_today());
        Self::with_clock(store, settings.booking_url.clone(), local_today)
    }

    pub fn with_clock(store: AvailabilityStore, booking_url: String, clock: fn() -> NaiveDate) -> Self {
        Self {
            store,
            booking_url,
            clock,
        }
    }

    /// Read on every request; "past" moves with the wall clock.
    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }
}

pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
