//! The user's hardiness zone: chosen by hand or detected from the device
//! position, and persisted between sessions.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::DEFAULT_GEOLOCATION_TIMEOUT;
use crate::data::zones::{get_zone, parse_zone_label};
use crate::error::GardenError;
use crate::logic::zone::zone_from_coordinates;
use crate::models::zone::HardinessZone;
use crate::store::{GardenStorage, KeyValueStore};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    Unavailable,
    #[error("timed out waiting for a position")]
    Timeout,
    #[error("geolocation is not supported")]
    Unsupported,
}

impl GeolocationError {
    /// Text shown to the user, pointing them at manual zone selection.
    pub fn user_message(&self) -> &'static str {
        match self {
            GeolocationError::PermissionDenied => {
                "Location permission denied. You can set your zone manually."
            }
            GeolocationError::Unsupported => "Geolocation is not supported on this device",
            GeolocationError::Unavailable | GeolocationError::Timeout => {
                "Unable to detect your location. Please set your zone manually."
            }
        }
    }
}

/// Device position source. Permissions are the provider's business.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<GeoPosition, GeolocationError>;
}

/// Asks `provider` for a position, giving up after `timeout`.
pub async fn locate(
    provider: &dyn GeolocationProvider,
    timeout: Duration,
) -> Result<GeoPosition, GeolocationError> {
    match tokio::time::timeout(timeout, provider.current_position()).await {
        Ok(result) => result,
        Err(_) => Err(GeolocationError::Timeout),
    }
}

/// Identifies one detection request. Only the latest ticket can apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionTicket {
    generation: u64,
}

pub struct HardinessZoneTracker<S> {
    storage: GardenStorage<S>,
    zone: Option<String>,
    error: Option<String>,
    in_flight: Option<u64>,
    generation: u64,
    timeout: Duration,
}

impl<S: KeyValueStore> HardinessZoneTracker<S> {
    pub fn load(storage: GardenStorage<S>) -> Self {
        let zone = storage.load_zone();
        Self {
            storage,
            zone,
            error: None,
            in_flight: None,
            generation: 0,
            timeout: DEFAULT_GEOLOCATION_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    pub fn zone_number(&self) -> Option<u8> {
        self.zone.as_deref().and_then(parse_zone_label)
    }

    pub fn zone_data(&self) -> Option<HardinessZone> {
        self.zone.as_deref().and_then(get_zone)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Sets the zone by hand. Cancels any detection still in flight.
    pub fn set_manual_zone(&mut self, label: &str) -> Result<(), GardenError> {
        let zone = parse_zone_label(label).ok_or_else(|| GardenError::InvalidZone(label.to_string()))?;
        self.in_flight = None;
        self.error = None;
        self.apply_zone(Some(zone.to_string()))
    }

    /// Forgets the zone and removes it from storage. Cancels any detection in flight.
    pub fn clear_zone(&mut self) -> Result<(), GardenError> {
        self.in_flight = None;
        self.error = None;
        self.apply_zone(None)
    }

    /// Starts a detection, superseding any earlier one.
    pub fn begin_detection(&mut self) -> DetectionTicket {
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.error = None;
        DetectionTicket {
            generation: self.generation,
        }
    }

    /// Applies a detection result. Returns false, changing nothing, when the
    /// ticket was superseded or cancelled in the meantime.
    pub fn finish_detection(
        &mut self,
        ticket: DetectionTicket,
        result: Result<GeoPosition, GeolocationError>,
    ) -> Result<bool, GardenError> {
        if self.in_flight != Some(ticket.generation) {
            log::debug!("discarding stale zone detection #{}", ticket.generation);
            return Ok(false);
        }
        self.in_flight = None;
        match result {
            Ok(position) => {
                let zone = zone_from_coordinates(position.latitude, position.longitude);
                log::info!(
                    "detected hardiness zone {zone} at ({:.2}, {:.2})",
                    position.latitude,
                    position.longitude
                );
                self.apply_zone(Some(zone))?;
            }
            Err(e) => {
                log::warn!("zone detection failed: {e}");
                self.error = Some(e.user_message().to_string());
            }
        }
        Ok(true)
    }

    /// Detects the zone from `provider`, waiting at most the configured timeout.
    pub async fn detect_zone(&mut self, provider: &dyn GeolocationProvider) -> Result<bool, GardenError> {
        let ticket = self.begin_detection();
        let result = locate(provider, self.timeout).await;
        self.finish_detection(ticket, result)
    }

    fn apply_zone(&mut self, zone: Option<String>) -> Result<(), GardenError> {
        self.storage.save_zone(zone.as_deref())?;
        self.zone = zone;
        Ok(())
    }
}
