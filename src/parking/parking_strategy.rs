//! Spot selection policies
//!
//! Every policy returns the first open spot whose size matches the vehicle
//! exactly. Policies differ only in the order floors are scanned; spots on a
//! floor are always scanned in insertion order.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use anyhow::bail;

use super::floor::ParkingFloor;
use super::spot::ParkingSpot;
use super::types::Level;
use super::vehicle::Vehicle;

/// Chooses the spot a vehicle is parked in
pub trait ParkingStrategy: fmt::Debug {
    fn find_spot<'a>(
        &self,
        vehicle: &Vehicle,
        floors: &'a BTreeMap<Level, ParkingFloor>,
    ) -> Option<&'a ParkingSpot>;

    fn name(&self) -> &'static str;
}

fn first_match<'a>(
    vehicle: &Vehicle,
    floors: impl Iterator<Item = &'a ParkingFloor>,
) -> Option<&'a ParkingSpot> {
    floors
        .flat_map(|floor| floor.spots().iter())
        .find(|spot| spot.accepts(vehicle))
}

/// Fills the lowest level first
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerLevelFirst;

impl ParkingStrategy for LowerLevelFirst {
    fn find_spot<'a>(
        &self,
        vehicle: &Vehicle,
        floors: &'a BTreeMap<Level, ParkingFloor>,
    ) -> Option<&'a ParkingSpot> {
        first_match(vehicle, floors.values())
    }

    fn name(&self) -> &'static str {
        "lower-level-first"
    }
}

/// Fills the highest level first
#[derive(Debug, Clone, Copy, Default)]
pub struct UpperLevelFirst;

impl ParkingStrategy for UpperLevelFirst {
    fn find_spot<'a>(
        &self,
        vehicle: &Vehicle,
        floors: &'a BTreeMap<Level, ParkingFloor>,
    ) -> Option<&'a ParkingSpot> {
        first_match(vehicle, floors.values().rev())
    }

    fn name(&self) -> &'static str {
        "upper-level-first"
    }
}

/// Floor scan order, used to pick a strategy from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOrder {
    #[default]
    LowerFirst,
    UpperFirst,
}

impl ScanOrder {
    pub fn strategy(self) -> Box<dyn ParkingStrategy> {
        match self {
            ScanOrder::LowerFirst => Box::new(LowerLevelFirst),
            ScanOrder::UpperFirst => Box::new(UpperLevelFirst),
        }
    }
}

impl FromStr for ScanOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" | "lower-level-first" => Ok(ScanOrder::LowerFirst),
            "upper" | "upper-level-first" => Ok(ScanOrder::UpperFirst),
            other => bail!("unknown parking strategy '{other}' (expected 'lower' or 'upper')"),
        }
    }
}
