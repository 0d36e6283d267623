//! Parking and payment strategy tests

use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot_sim::parking::{
    billable_units, FeeModel, FlatFeePerDay, HourlyRate, Level, LowerLevelFirst, ParkingError,
    ParkingFloor, ParkingStrategy, ParkingTicket, PaymentStrategy, ScanOrder, SpotId,
    UpperLevelFirst, Vehicle, VehicleSize, DEFAULT_FLAT_RATE, DEFAULT_HOURLY_RATE,
};

fn floors(layouts: Vec<(i32, Vec<VehicleSize>)>) -> BTreeMap<Level, ParkingFloor> {
    layouts
        .into_iter()
        .map(|(level, sizes)| (Level(level), ParkingFloor::with_spots(Level(level), sizes)))
        .collect()
}

fn vehicle(plate: &str, size: VehicleSize) -> Vehicle {
    Vehicle::new(plate, size).unwrap()
}

fn start() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

fn ticket_at(entry: DateTime<Utc>) -> ParkingTicket {
    ParkingTicket::new(
        vehicle("T1", VehicleSize::Compact),
        SpotId::new(Level(1), 0),
        entry,
    )
}

#[test]
fn test_lower_and_upper_level_first_pick_opposite_floors() {
    let floors = floors(vec![
        (1, vec![VehicleSize::Compact]),
        (2, vec![VehicleSize::Compact]),
    ]);
    let car = vehicle("C1", VehicleSize::Compact);

    let lower = LowerLevelFirst.find_spot(&car, &floors).unwrap();
    let upper = UpperLevelFirst.find_spot(&car, &floors).unwrap();

    assert_eq!(lower.id(), SpotId::new(Level(1), 0));
    assert_eq!(upper.id(), SpotId::new(Level(2), 0));
}

#[test]
fn test_levels_scanned_numerically_not_by_insertion() {
    let mut floors = BTreeMap::new();
    for level in [10, -1, 3] {
        floors.insert(
            Level(level),
            ParkingFloor::with_spots(Level(level), [VehicleSize::Medium]),
        );
    }
    let van = vehicle("V1", VehicleSize::Medium);

    assert_eq!(
        LowerLevelFirst.find_spot(&van, &floors).unwrap().id().level,
        Level(-1)
    );
    assert_eq!(
        UpperLevelFirst.find_spot(&van, &floors).unwrap().id().level,
        Level(10)
    );
}

#[test]
fn test_find_spot_returns_first_open_spot_on_floor() {
    let mut floors = floors(vec![(
        1,
        vec![VehicleSize::Large, VehicleSize::Compact, VehicleSize::Compact],
    )]);
    floors
        .get_mut(&Level(1))
        .unwrap()
        .spot_mut(1)
        .unwrap()
        .occupy(vehicle("TAKEN", VehicleSize::Compact))
        .unwrap();

    let car = vehicle("C1", VehicleSize::Compact);
    let spot = LowerLevelFirst.find_spot(&car, &floors).unwrap();
    assert_eq!(spot.id(), SpotId::new(Level(1), 2));
}

#[test]
fn test_find_spot_never_returns_other_size() {
    let floors = floors(vec![
        (1, vec![VehicleSize::Large, VehicleSize::Large]),
        (2, vec![VehicleSize::Medium]),
    ]);
    let car = vehicle("C1", VehicleSize::Compact);

    assert!(LowerLevelFirst.find_spot(&car, &floors).is_none());
    assert!(UpperLevelFirst.find_spot(&car, &floors).is_none());

    for size in VehicleSize::ALL {
        let v = vehicle("ANY", size);
        for strategy in [ScanOrder::LowerFirst.strategy(), ScanOrder::UpperFirst.strategy()] {
            if let Some(spot) = strategy.find_spot(&v, &floors) {
                assert_eq!(spot.size(), size);
            }
        }
    }
}

#[test]
fn test_flat_fee_rounds_up_to_started_days() {
    let strategy = FlatFeePerDay::default();
    let ticket = ticket_at(start());

    // 25 hours is two started days
    let fee = strategy
        .compute_fee(&ticket, start() + TimeDelta::hours(25))
        .unwrap();
    assert_eq!(fee, 10.0);

    let fee = strategy
        .compute_fee(&ticket, start() + TimeDelta::hours(24))
        .unwrap();
    assert_eq!(fee, DEFAULT_FLAT_RATE);

    // Any positive stay is at least one day
    let fee = strategy
        .compute_fee(&ticket, start() + TimeDelta::nanoseconds(1))
        .unwrap();
    assert_eq!(fee, DEFAULT_FLAT_RATE);
}

#[test]
fn test_zero_duration_costs_nothing() {
    let ticket = ticket_at(start());
    assert_eq!(FlatFeePerDay::default().compute_fee(&ticket, start()).unwrap(), 0.0);
    assert_eq!(HourlyRate::default().compute_fee(&ticket, start()).unwrap(), 0.0);
}

#[test]
fn test_hourly_rate_rounds_up_to_started_hours() {
    let strategy = HourlyRate::default();
    let ticket = ticket_at(start());

    let fee = strategy
        .compute_fee(&ticket, start() + TimeDelta::minutes(90))
        .unwrap();
    assert_eq!(fee, 2.0 * DEFAULT_HOURLY_RATE);

    // Whole stay counts, not just the hours past the last full day
    let fee = strategy
        .compute_fee(&ticket, start() + TimeDelta::hours(26))
        .unwrap();
    assert_eq!(fee, 26.0 * DEFAULT_HOURLY_RATE);
}

#[test]
fn test_negative_duration_is_rejected() {
    let ticket = ticket_at(start());
    let exit = start() - TimeDelta::minutes(1);

    assert_eq!(
        FlatFeePerDay::default().compute_fee(&ticket, exit),
        Err(ParkingError::NegativeDuration { millis: 60_000 })
    );
    assert!(HourlyRate::default().compute_fee(&ticket, exit).is_err());

    // Less than a second early is still reported with its size
    let barely_early = start() - TimeDelta::milliseconds(250);
    assert_eq!(
        HourlyRate::default().compute_fee(&ticket, barely_early),
        Err(ParkingError::NegativeDuration { millis: 250 })
    );
}

#[test]
fn test_custom_rates() {
    let ticket = ticket_at(start());
    let exit = start() + TimeDelta::hours(49);

    let flat = FlatFeePerDay::new(12.0).unwrap();
    assert_eq!(flat.rate(), 12.0);
    assert_eq!(flat.compute_fee(&ticket, exit).unwrap(), 36.0);

    let hourly = HourlyRate::new(2.0).unwrap();
    assert_eq!(hourly.compute_fee(&ticket, exit).unwrap(), 98.0);
}

#[test]
fn test_invalid_rates_are_rejected() {
    assert_eq!(FlatFeePerDay::new(0.0), Err(ParkingError::InvalidRate(0.0)));
    assert_eq!(HourlyRate::new(-1.5), Err(ParkingError::InvalidRate(-1.5)));
    assert!(HourlyRate::new(f64::NAN).is_err());
    assert!(FeeModel::Hourly.strategy(Some(f64::INFINITY)).is_err());
}

#[test]
fn test_fee_model_defaults() {
    let flat = FeeModel::FlatPerDay.strategy(None).unwrap();
    assert_eq!(flat.name(), "flat-fee-per-day");
    assert_eq!(flat.rate(), DEFAULT_FLAT_RATE);

    let hourly = FeeModel::Hourly.strategy(Some(3.0)).unwrap();
    assert_eq!(hourly.name(), "hourly-rate");
    assert_eq!(hourly.rate(), 3.0);
}

#[test]
fn test_billable_units() {
    assert_eq!(billable_units(TimeDelta::zero(), 3600), 0);
    assert_eq!(billable_units(TimeDelta::milliseconds(1), 3600), 1);
    assert_eq!(billable_units(TimeDelta::hours(3), 3600), 3);
    assert_eq!(billable_units(TimeDelta::seconds(3 * 3600 + 1), 3600), 4);
}
