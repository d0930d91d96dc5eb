pub mod apartment;
pub mod availability;
pub mod calendar;
pub mod snapshot;

pub use apartment::{find_apartment, APARTMENTS, BUILDING_AMENITIES};
pub use availability::{AvailabilitySource, DayStatus, UnitId};
pub use calendar::CalendarView;
pub use snapshot::{AvailabilityStore, GeneratorConfig};
