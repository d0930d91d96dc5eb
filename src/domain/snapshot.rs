// src/domain/snapshot.rs

use crate::domain::availability::{
    generate, query_status, AvailabilitySource, BookingRecord, DayStatus, UnitId,
};
use crate::errors::ServerError;
use chrono::NaiveDate;
use rand::Rng;
use std::sync::{Arc, RwLock};

/// How much mock data to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Months after the current one to cover.
    pub horizon_months: u32,
    pub unit_count: UnitId,
}

/// One immutable generation of booking records.
#[derive(Debug)]
pub struct Snapshot {
    records: Vec<BookingRecord>,
    unit_count: UnitId,
    generated_on: NaiveDate,
}

impl Snapshot {
    pub fn generate(cfg: &GeneratorConfig, today: NaiveDate) -> Self {
        Self::generate_with(&mut rand::thread_rng(), cfg, today)
    }

    pub fn generate_with<R: Rng + ?Sized>(
        rng: &mut R,
        cfg: &GeneratorConfig,
        today: NaiveDate,
    ) -> Self {
        let records = generate(rng, cfg.horizon_months, cfg.unit_count, today);
        Self::from_records(records, cfg.unit_count, today)
    }

    pub fn from_records(records: Vec<BookingRecord>, unit_count: UnitId, generated_on: NaiveDate) -> Self {
        Self {
            records,
            unit_count,
            generated_on,
        }
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn generated_on(&self) -> NaiveDate {
        self.generated_on
    }
}

impl AvailabilitySource for Snapshot {
    fn unit_count(&self) -> UnitId {
        self.unit_count
    }

    fn status(&self, date: NaiveDate, unit: Option<UnitId>, today: NaiveDate) -> DayStatus {
        query_status(&self.records, self.unit_count, date, unit, today)
    }
}

/// Process-wide holder of the current snapshot.
///
/// Readers clone the `Arc` and keep a consistent view for as long as they hold it.
/// Regeneration builds the replacement off-lock and swaps the pointer.
pub struct AvailabilityStore {
    cfg: GeneratorConfig,
    current: RwLock<Arc<Snapshot>>,
}

impl AvailabilityStore {
    pub fn new(cfg: GeneratorConfig, today: NaiveDate) -> Self {
        let snapshot = Snapshot::generate(&cfg, today);
        tracing::info!(
            records = snapshot.records().len(),
            units = cfg.unit_count,
            horizon_months = cfg.horizon_months,
            "generated availability snapshot"
        );
        Self::with_snapshot(cfg, snapshot)
    }

    pub fn with_snapshot(cfg: GeneratorConfig, snapshot: Snapshot) -> Self {
        Self {
            cfg,
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    pub fn current(&self) -> Result<Arc<Snapshot>, ServerError> {
        self.current
            .read()
            .map(|guard| Arc::clone(&*guard))
            .map_err(|_| ServerError::InternalError)
    }

    /// Replace the whole snapshot with a freshly generated one.
    pub fn regenerate(&self, today: NaiveDate) -> Result<Arc<Snapshot>, ServerError> {
        let fresh = Arc::new(Snapshot::generate(&self.cfg, today));

        let mut slot = self
            .current
            .write()
            .map_err(|_| ServerError::InternalError)?;
        *slot = Arc::clone(&fresh);
        drop(slot);

        tracing::info!(
            records = fresh.records().len(),
            generated_on = %today,
            "regenerated availability snapshot"
        );
        Ok(fresh)
    }
}
