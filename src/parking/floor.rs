//! Parking floors and their occupancy summaries

use std::fmt;

use super::spot::ParkingSpot;
use super::types::{Level, SpotId, VehicleSize};

/// One level of the lot holding spots in insertion order
#[derive(Debug, Clone)]
pub struct ParkingFloor {
    level: Level,
    spots: Vec<ParkingSpot>,
}

impl ParkingFloor {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            spots: Vec::new(),
        }
    }

    /// Create a floor and append one spot per entry of `sizes`
    pub fn with_spots(level: Level, sizes: impl IntoIterator<Item = VehicleSize>) -> Self {
        let mut floor = Self::new(level);
        for size in sizes {
            floor.add_spot(size);
        }
        floor
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Append a spot; its index is the number of spots before the append
    pub fn add_spot(&mut self, size: VehicleSize) -> SpotId {
        let id = SpotId::new(self.level, self.spots.len());
        self.spots.push(ParkingSpot::new(id, size));
        id
    }

    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }

    pub fn spot(&self, index: usize) -> Option<&ParkingSpot> {
        self.spots.get(index)
    }

    pub fn spot_mut(&mut self, index: usize) -> Option<&mut ParkingSpot> {
        self.spots.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Count occupied spots and open spots per size
    pub fn summarize(&self) -> FloorSummary {
        let mut summary = FloorSummary {
            level: self.level,
            total: self.spots.len(),
            occupied: 0,
            available_compact: 0,
            available_medium: 0,
            available_large: 0,
        };

        for spot in &self.spots {
            if spot.is_occupied() {
                summary.occupied += 1;
                continue;
            }
            match spot.size() {
                VehicleSize::Compact => summary.available_compact += 1,
                VehicleSize::Medium => summary.available_medium += 1,
                VehicleSize::Large => summary.available_large += 1,
            }
        }

        summary
    }
}

/// Point-in-time occupancy of one floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorSummary {
    pub level: Level,
    pub total: usize,
    pub occupied: usize,
    pub available_compact: usize,
    pub available_medium: usize,
    pub available_large: usize,
}

impl FloorSummary {
    pub fn available(&self, size: VehicleSize) -> usize {
        match size {
            VehicleSize::Compact => self.available_compact,
            VehicleSize::Medium => self.available_medium,
            VehicleSize::Large => self.available_large,
        }
    }

    pub fn total_available(&self) -> usize {
        self.total - self.occupied
    }
}

impl fmt::Display for FloorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "------------ FLOOR {} ------------", self.level)?;
        writeln!(f, "Total Capacity: {}", self.total)?;
        writeln!(f, "# Filled: {}", self.occupied)?;
        writeln!(f, "Current Availability")?;
        writeln!(f, "- # Compact: {}", self.available_compact)?;
        writeln!(f, "- # Medium: {}", self.available_medium)?;
        write!(f, "- # Large: {}", self.available_large)
    }
}
