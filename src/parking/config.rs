//! Lot configuration
//!
//! Floors are described as `LEVEL=SIZE:COUNT[,SIZE:COUNT...]`, for example
//! `1=compact:2,large:1`. Spots are appended in the order they are listed.

use std::str::FromStr;

use anyhow::{bail, Context, Result};

use super::floor::ParkingFloor;
use super::lot::ParkingLot;
use super::parking_strategy::ScanOrder;
use super::payment_strategy::FeeModel;
use super::types::{Level, VehicleSize};

/// Largest number of spots a single `SIZE:COUNT` group may add
pub const MAX_SPOTS_PER_GROUP: usize = 10_000;

/// Spot layout of a single floor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorLayout {
    pub level: Level,
    pub spots: Vec<(VehicleSize, usize)>,
}

impl FloorLayout {
    pub fn new(level: i32, spots: Vec<(VehicleSize, usize)>) -> Self {
        Self {
            level: Level(level),
            spots,
        }
    }

    pub fn build(&self) -> ParkingFloor {
        let sizes = self
            .spots
            .iter()
            .flat_map(|&(size, count)| std::iter::repeat(size).take(count));
        ParkingFloor::with_spots(self.level, sizes)
    }
}

impl FromStr for FloorLayout {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (level, groups) = s
            .split_once('=')
            .with_context(|| format!("floor layout '{s}' is missing '=' after the level"))?;

        let level: i32 = level
            .trim()
            .parse()
            .with_context(|| format!("invalid floor level '{}'", level.trim()))?;

        let mut spots = Vec::new();
        for group in groups.split(',').filter(|g| !g.trim().is_empty()) {
            let (size, count) = match group.split_once(':') {
                Some((size, count)) => (size, count.trim()),
                None => (group, "1"),
            };
            let size: VehicleSize = size
                .parse()
                .with_context(|| format!("invalid spot group '{}' on floor {level}", group.trim()))?;
            let count: usize = count
                .parse()
                .with_context(|| format!("invalid spot count '{count}' on floor {level}"))?;
            if count == 0 || count > MAX_SPOTS_PER_GROUP {
                bail!(
                    "spot count {count} on floor {level} must be between 1 and {MAX_SPOTS_PER_GROUP}"
                );
            }
            spots.push((size, count));
        }

        if spots.is_empty() {
            bail!("floor {level} has no spots");
        }

        Ok(FloorLayout::new(level, spots))
    }
}

/// Everything needed to assemble a lot
#[derive(Debug, Clone, PartialEq)]
pub struct LotConfig {
    pub floors: Vec<FloorLayout>,
    pub scan_order: ScanOrder,
    pub fee_model: FeeModel,
    /// Overrides the fee model's default rate
    pub rate: Option<f64>,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            floors: Self::demo_layout(),
            scan_order: ScanOrder::default(),
            fee_model: FeeModel::default(),
            rate: None,
        }
    }
}

impl LotConfig {
    /// Two compact spots on floor 1, two large spots on floor 2
    pub fn demo_layout() -> Vec<FloorLayout> {
        vec![
            FloorLayout::new(1, vec![(VehicleSize::Compact, 2)]),
            FloorLayout::new(2, vec![(VehicleSize::Large, 2)]),
        ]
    }

    pub fn build(&self) -> Result<ParkingLot> {
        let payment = self
            .fee_model
            .strategy(self.rate)
            .context("Failed to configure payment strategy")?;
        let mut lot = ParkingLot::with_strategies(self.scan_order.strategy(), payment);

        for layout in &self.floors {
            lot.add_floor(layout.build())
                .with_context(|| format!("Failed to add floor {}", layout.level))?;
        }

        Ok(lot)
    }
}
