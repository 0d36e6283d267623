//! Error type for rejected parking lot operations
//!
//! A full lot and an unknown plate are ordinary outcomes and are reported
//! through `ParkOutcome` / `UnparkOutcome` instead.

use thiserror::Error;

use super::types::{Level, SpotId};

/// Why a lot, floor, spot or fee operation was refused
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParkingError {
    #[error("vehicle plate must not be empty")]
    EmptyPlate,

    #[error("unknown vehicle size: {0}")]
    UnknownSize(String),

    #[error("there already exists a floor level {0}")]
    DuplicateLevel(Level),

    #[error("floor cannot be added with spot {0} already occupied")]
    FloorNotEmpty(SpotId),

    #[error("vehicle {0} is already parked")]
    AlreadyParked(String),

    #[error("spot {0} is already occupied")]
    SpotOccupied(SpotId),

    #[error("spot {0} is already open")]
    SpotAlreadyOpen(SpotId),

    #[error("spot {0} does not exist")]
    UnknownSpot(SpotId),

    #[error("exit time is {millis}ms before entry time")]
    NegativeDuration { millis: i64 },

    #[error("invalid rate {0}: must be finite and greater than zero")]
    InvalidRate(f64),
}

pub type Result<T> = std::result::Result<T, ParkingError>;
