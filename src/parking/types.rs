//! Core types for the parking lot simulation

use std::fmt;
use std::str::FromStr;

use super::error::ParkingError;

/// Size class shared by vehicles and the spots that accept them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VehicleSize {
    Compact,
    Medium,
    Large,
}

impl VehicleSize {
    /// All size classes in reporting order
    pub const ALL: [VehicleSize; 3] = [
        VehicleSize::Compact,
        VehicleSize::Medium,
        VehicleSize::Large,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleSize::Compact => "compact",
            VehicleSize::Medium => "medium",
            VehicleSize::Large => "large",
        }
    }
}

impl fmt::Display for VehicleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleSize {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" | "c" => Ok(VehicleSize::Compact),
            "medium" | "m" => Ok(VehicleSize::Medium),
            "large" | "l" => Ok(VehicleSize::Large),
            other => Err(ParkingError::UnknownSize(other.to_string())),
        }
    }
}

/// A floor level number, unique within a lot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Level(pub i32);

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a spot by its floor level and its position on that floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpotId {
    pub level: Level,
    pub index: usize,
}

impl SpotId {
    pub fn new(level: Level, index: usize) -> Self {
        Self { level, index }
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.level, self.index)
    }
}
