//! A single parking spot
//!
//! Occupancy is derived from the occupant slot, so a spot can never be
//! marked occupied without a vehicle in it.

use super::error::{ParkingError, Result};
use super::types::{SpotId, VehicleSize};
use super::vehicle::Vehicle;

/// A spot of fixed size, open or holding one vehicle
#[derive(Debug, Clone)]
pub struct ParkingSpot {
    id: SpotId,
    size: VehicleSize,
    occupant: Option<Vehicle>,
}

impl ParkingSpot {
    pub fn new(id: SpotId, size: VehicleSize) -> Self {
        Self {
            id,
            size,
            occupant: None,
        }
    }

    pub fn id(&self) -> SpotId {
        self.id
    }

    pub fn size(&self) -> VehicleSize {
        self.size
    }

    pub fn is_open(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_ref()
    }

    /// Whether this spot is open and sized exactly for the vehicle
    pub fn accepts(&self, vehicle: &Vehicle) -> bool {
        self.is_open() && self.size == vehicle.size()
    }

    /// Put a vehicle in the spot
    pub fn occupy(&mut self, vehicle: Vehicle) -> Result<()> {
        if self.is_occupied() {
            return Err(ParkingError::SpotOccupied(self.id));
        }
        self.occupant = Some(vehicle);
        Ok(())
    }

    /// Take the parked vehicle out, leaving the spot open
    ///
    /// Releasing an open spot is rejected and leaves the spot untouched.
    pub fn release(&mut self) -> Result<Vehicle> {
        self.occupant
            .take()
            .ok_or(ParkingError::SpotAlreadyOpen(self.id))
    }
}
