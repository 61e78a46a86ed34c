//! Key–value persistence.
//!
//! The garden is stored as three string keys holding JSON documents, the same
//! layout a browser's local storage would hold. [`KeyValueStore`] is the raw
//! backend; [`GardenStorage`] reads and writes the typed records on top of it.

use std::rc::Rc;
use std::sync::Arc;

use crate::error::StoreError;

mod file;
mod garden_storage;
mod memory;

pub use file::JsonFileStore;
pub use garden_storage::GardenStorage;
pub use memory::MemoryStore;

/// Ordered list of garden beds.
pub const GARDEN_BEDS_KEY: &str = "gardenguide-beds";
/// Ordered list of watering schedule records.
pub const WATERING_KEY: &str = "gardenguide-watering";
/// Selected hardiness zone label; absent when cleared.
pub const HARDINESS_ZONE_KEY: &str = "gardenguide-hardiness-zone";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
