//! Vehicles as seen by the lot: a plate and a size class

use super::error::{ParkingError, Result};
use super::types::VehicleSize;

/// A vehicle identified by its plate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vehicle {
    plate: String,
    size: VehicleSize,
}

impl Vehicle {
    /// Create a vehicle. The plate is trimmed and must not be empty.
    pub fn new(plate: impl Into<String>, size: VehicleSize) -> Result<Self> {
        let plate = plate.into().trim().to_string();
        if plate.is_empty() {
            return Err(ParkingError::EmptyPlate);
        }
        Ok(Self { plate, size })
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }

    pub fn size(&self) -> VehicleSize {
        self.size
    }
}
