//! Parking lot simulation
//!
//! Floors of size-classed spots, tickets keyed by plate, and swappable
//! policies for choosing a spot and charging a fee. Everything here is
//! single-threaded and in memory.

mod config;
mod error;
mod floor;
mod lot;
mod parking_strategy;
mod payment_strategy;
mod scenario;
mod spot;
mod ticket;
mod types;
mod vehicle;

pub use config::{FloorLayout, LotConfig, MAX_SPOTS_PER_GROUP};
pub use error::{ParkingError, Result};
pub use floor::{FloorSummary, ParkingFloor};
pub use lot::{ParkOutcome, ParkingLot, Receipt, UnparkOutcome};
pub use parking_strategy::{LowerLevelFirst, ParkingStrategy, ScanOrder, UpperLevelFirst};
pub use payment_strategy::{
    billable_units, FeeModel, FlatFeePerDay, HourlyRate, PaymentStrategy, DEFAULT_FLAT_RATE,
    DEFAULT_HOURLY_RATE,
};
pub use scenario::{run_demo, run_random, RunSummary, MAX_ARRIVAL_GAP_MINUTES};
pub use spot::ParkingSpot;
pub use ticket::ParkingTicket;
pub use types::{Level, SpotId, VehicleSize};
pub use vehicle::Vehicle;
