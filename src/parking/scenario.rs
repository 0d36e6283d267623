//! Headless scenarios for driving a lot from the command line

use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::error::Result;
use super::lot::{ParkOutcome, ParkingLot, UnparkOutcome};
use super::types::VehicleSize;
use super::vehicle::Vehicle;

/// Longest gap between two simulated arrivals, in minutes
pub const MAX_ARRIVAL_GAP_MINUTES: i64 = 90;

/// Totals collected over a random run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub arrivals: usize,
    pub parked: usize,
    pub turned_away: usize,
    pub departed: usize,
    pub revenue: f64,
}

/// Park a compact and a large car, let the compact leave, then try a medium
/// car that has no matching spot. Prints the lot after every step.
pub fn run_demo(lot: &mut ParkingLot) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    println!("=== Empty lot ===");
    lot.print_state();

    for vehicle in [
        Vehicle::new("123", VehicleSize::Compact)?,
        Vehicle::new("1234", VehicleSize::Large)?,
    ] {
        summary.arrivals += 1;
        record_park(&mut summary, lot.park(vehicle)?);
    }
    println!("=== After parking a compact and a large vehicle ===");
    lot.print_state();

    record_unpark(&mut summary, lot.unpark("123")?);
    println!("=== After unparking vehicle 123 ===");
    lot.print_state();

    summary.arrivals += 1;
    record_park(&mut summary, lot.park(Vehicle::new("12345", VehicleSize::Medium)?)?);
    println!("=== After trying to park a medium vehicle ===");
    lot.print_state();

    Ok(summary)
}

/// Simulate `arrivals` vehicles of random size against a simulated clock
/// starting at `start`. Each parked vehicle stays up to `max_stay_hours`;
/// every vehicle still parked after the last arrival leaves at the end. A
/// `max_stay_hours` of 0 is treated as 1; the CLI rejects 0 before this.
pub fn run_random(
    lot: &mut ParkingLot,
    arrivals: usize,
    seed: u64,
    max_stay_hours: u32,
    start: DateTime<Utc>,
) -> Result<RunSummary> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut summary = RunSummary::default();
    let mut departures: BTreeMap<(DateTime<Utc>, usize), String> = BTreeMap::new();
    let mut clock = start;
    let max_stay_minutes = i64::from(max_stay_hours.max(1)) * 60;

    for seq in 0..arrivals {
        clock += TimeDelta::minutes(rng.random_range(0..=MAX_ARRIVAL_GAP_MINUTES));

        while let Some(entry) = departures.first_entry() {
            if entry.key().0 > clock {
                break;
            }
            let ((leave_at, _), plate) = entry.remove_entry();
            record_unpark(&mut summary, lot.unpark_at(&plate, leave_at)?);
        }

        let size = VehicleSize::ALL
            .choose(&mut rng)
            .copied()
            .unwrap_or(VehicleSize::Compact);
        let vehicle = Vehicle::new(format!("SIM-{seq:04}"), size)?;
        let plate = vehicle.plate().to_string();

        summary.arrivals += 1;
        let outcome = lot.park_at(vehicle, clock)?;
        if matches!(outcome, ParkOutcome::Parked(_)) {
            let stay = TimeDelta::minutes(rng.random_range(1..=max_stay_minutes));
            departures.insert((clock + stay, seq), plate);
        }
        record_park(&mut summary, outcome);
    }

    while let Some(((leave_at, _), plate)) = departures.pop_first() {
        record_unpark(&mut summary, lot.unpark_at(&plate, leave_at)?);
    }

    info!(
        "Random run finished: {} arrivals, {} parked, {} turned away, revenue {:.2}",
        summary.arrivals, summary.parked, summary.turned_away, summary.revenue
    );
    Ok(summary)
}

fn record_park(summary: &mut RunSummary, outcome: ParkOutcome) {
    match outcome {
        ParkOutcome::Parked(_) => summary.parked += 1,
        ParkOutcome::LotFull => summary.turned_away += 1,
    }
}

fn record_unpark(summary: &mut RunSummary, outcome: UnparkOutcome) {
    if let UnparkOutcome::Departed(receipt) = outcome {
        summary.departed += 1;
        summary.revenue += receipt.fee;
    }
}
