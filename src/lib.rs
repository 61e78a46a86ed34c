//! Garden planning core: hardiness zones, watering schedules and bed layouts,
//! persisted to a key–value store.

pub mod clock;
pub mod config;
pub mod data;
pub mod error;
pub mod garden;
pub mod logic;
pub mod models;
pub mod store;
pub mod zone;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{GardenError, StoreError};
pub use garden::Garden;
pub use zone::{GeolocationError, GeolocationProvider, HardinessZoneTracker};
