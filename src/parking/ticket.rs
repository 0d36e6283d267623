//! Tickets issued to parked vehicles

use chrono::{DateTime, TimeDelta, Utc};

use super::error::{ParkingError, Result};
use super::types::SpotId;
use super::vehicle::Vehicle;

/// Links a parked vehicle to its spot and entry time
///
/// A ticket lives only while the vehicle is parked.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingTicket {
    vehicle: Vehicle,
    spot: SpotId,
    entry_time: DateTime<Utc>,
}

impl ParkingTicket {
    pub fn new(vehicle: Vehicle, spot: SpotId, entry_time: DateTime<Utc>) -> Self {
        Self {
            vehicle,
            spot,
            entry_time,
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn plate(&self) -> &str {
        self.vehicle.plate()
    }

    pub fn spot(&self) -> SpotId {
        self.spot
    }

    pub fn entry_time(&self) -> DateTime<Utc> {
        self.entry_time
    }

    /// Time parked up to `exit_time`; an exit before entry is rejected
    pub fn elapsed(&self, exit_time: DateTime<Utc>) -> Result<TimeDelta> {
        let elapsed = exit_time - self.entry_time;
        if elapsed < TimeDelta::zero() {
            return Err(ParkingError::NegativeDuration {
                millis: -elapsed.num_milliseconds(),
            });
        }
        Ok(elapsed)
    }
}
