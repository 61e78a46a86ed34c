use serde::{de::DeserializeOwned, Serialize};

use super::{KeyValueStore, GARDEN_BEDS_KEY, HARDINESS_ZONE_KEY, WATERING_KEY};
use crate::data::zones::parse_zone_label;
use crate::error::StoreError;
use crate::models::garden::{GardenBed, WateringSchedule};

/// Typed access to the garden records of a [`KeyValueStore`].
///
/// Reads never fail: a missing, unreadable or malformed value is logged and
/// replaced by the empty state. Writes replace the whole record.
#[derive(Debug, Clone)]
pub struct GardenStorage<S> {
    store: S,
}

impl<S: KeyValueStore> GardenStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load_beds(&self) -> Vec<GardenBed> {
        self.load_list(GARDEN_BEDS_KEY)
    }

    pub fn load_schedules(&self) -> Vec<WateringSchedule> {
        self.load_list(WATERING_KEY)
    }

    pub fn save_beds(&self, beds: &[GardenBed]) -> Result<(), StoreError> {
        self.save_json(GARDEN_BEDS_KEY, beds)
    }

    pub fn save_schedules(&self, schedules: &[WateringSchedule]) -> Result<(), StoreError> {
        self.save_json(WATERING_KEY, schedules)
    }

    /// The stored zone label, if it names a real zone.
    pub fn load_zone(&self) -> Option<String> {
        let raw = match self.store.get(HARDINESS_ZONE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                log::error!("error loading hardiness zone: {e}");
                return None;
            }
        };
        match parse_zone_label(&raw) {
            Some(zone) => Some(zone.to_string()),
            None => {
                log::warn!("ignoring stored hardiness zone '{raw}'");
                None
            }
        }
    }

    /// Stores the label as-is, or removes the key when `None`.
    pub fn save_zone(&self, zone: Option<&str>) -> Result<(), StoreError> {
        match zone {
            Some(label) => {
                log::debug!("writing {HARDINESS_ZONE_KEY}");
                self.store.set(HARDINESS_ZONE_KEY, label)
            }
            None => {
                log::debug!("removing {HARDINESS_ZONE_KEY}");
                self.store.remove(HARDINESS_ZONE_KEY)
            }
        }
    }

    fn load_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::error!("error loading garden data: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(source) => {
                let e = StoreError::Decode {
                    key: key.to_string(),
                    source,
                };
                log::error!("error loading garden data: {e}");
                Vec::new()
            }
        }
    }

    fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        log::debug!("writing {key} ({} bytes)", json.len());
        self.store.set(key, &json)
    }
}
