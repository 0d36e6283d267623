//! The parking lot orchestrator
//!
//! Owns the floors and the active tickets, and delegates spot selection and
//! fee calculation to the configured strategies.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use super::error::{ParkingError, Result};
use super::floor::{FloorSummary, ParkingFloor};
use super::parking_strategy::{LowerLevelFirst, ParkingStrategy};
use super::payment_strategy::{FlatFeePerDay, PaymentStrategy};
use super::spot::ParkingSpot;
use super::ticket::ParkingTicket;
use super::types::{Level, SpotId};
use super::vehicle::Vehicle;

/// Result of a park request
#[derive(Debug, Clone, PartialEq)]
pub enum ParkOutcome {
    /// The vehicle was parked and issued this ticket
    Parked(ParkingTicket),
    /// No open spot of the vehicle's size; nothing changed
    LotFull,
}

/// Result of an unpark request
#[derive(Debug, Clone, PartialEq)]
pub enum UnparkOutcome {
    /// The vehicle left and paid
    Departed(Receipt),
    /// No active ticket for the plate; nothing changed
    NotFound,
}

/// What a departing vehicle is charged
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub ticket: ParkingTicket,
    pub exit_time: DateTime<Utc>,
    pub fee: f64,
}

/// The whole lot: floors by level, active tickets by plate, and the
/// strategies used for the next park and unpark
#[derive(Debug)]
pub struct ParkingLot {
    floors: BTreeMap<Level, ParkingFloor>,
    tickets: HashMap<String, ParkingTicket>,
    parking_strategy: Box<dyn ParkingStrategy>,
    payment_strategy: Box<dyn PaymentStrategy>,
}

impl Default for ParkingLot {
    fn default() -> Self {
        Self::new()
    }
}

impl ParkingLot {
    /// Empty lot filling lower levels first and charging a flat daily fee
    pub fn new() -> Self {
        Self::with_strategies(Box::new(LowerLevelFirst), Box::new(FlatFeePerDay::default()))
    }

    pub fn with_strategies(
        parking_strategy: Box<dyn ParkingStrategy>,
        payment_strategy: Box<dyn PaymentStrategy>,
    ) -> Self {
        Self {
            floors: BTreeMap::new(),
            tickets: HashMap::new(),
            parking_strategy,
            payment_strategy,
        }
    }

    /// Add an empty floor; every spot must be open so that each occupant
    /// has a ticket
    pub fn add_floor(&mut self, floor: ParkingFloor) -> Result<()> {
        let level = floor.level();
        if self.floors.contains_key(&level) {
            return Err(ParkingError::DuplicateLevel(level));
        }
        if let Some(spot) = floor.spots().iter().find(|spot| spot.is_occupied()) {
            return Err(ParkingError::FloorNotEmpty(spot.id()));
        }
        info!("Adding floor {} with {} spots", level, floor.len());
        self.floors.insert(level, floor);
        Ok(())
    }

    pub fn set_parking_strategy(&mut self, strategy: Box<dyn ParkingStrategy>) {
        debug!(
            "Parking strategy {} -> {}",
            self.parking_strategy.name(),
            strategy.name()
        );
        self.parking_strategy = strategy;
    }

    pub fn set_payment_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        debug!(
            "Payment strategy {} -> {}",
            self.payment_strategy.name(),
            strategy.name()
        );
        self.payment_strategy = strategy;
    }

    pub fn parking_strategy_name(&self) -> &'static str {
        self.parking_strategy.name()
    }

    pub fn payment_strategy_name(&self) -> &'static str {
        self.payment_strategy.name()
    }

    /// Park a vehicle, stamping the ticket with the current time
    pub fn park(&mut self, vehicle: Vehicle) -> Result<ParkOutcome> {
        self.park_at(vehicle, Utc::now())
    }

    /// Park a vehicle with an explicit entry time
    ///
    /// A plate that already holds a ticket is rejected rather than replacing
    /// the active ticket.
    pub fn park_at(&mut self, vehicle: Vehicle, entry_time: DateTime<Utc>) -> Result<ParkOutcome> {
        if self.tickets.contains_key(vehicle.plate()) {
            return Err(ParkingError::AlreadyParked(vehicle.plate().to_string()));
        }

        let found = self
            .parking_strategy
            .find_spot(&vehicle, &self.floors)
            .map(ParkingSpot::id);

        let Some(spot_id) = found else {
            warn!(
                "Parking lot full: cannot park vehicle {} of size {}",
                vehicle.plate(),
                vehicle.size()
            );
            return Ok(ParkOutcome::LotFull);
        };

        self.spot_mut(spot_id)?.occupy(vehicle.clone())?;
        let ticket = ParkingTicket::new(vehicle, spot_id, entry_time);
        self.tickets.insert(ticket.plate().to_string(), ticket.clone());

        info!("Parking vehicle {} in spot {}", ticket.plate(), spot_id);
        Ok(ParkOutcome::Parked(ticket))
    }

    /// Unpark a vehicle, charging up to the current time
    pub fn unpark(&mut self, plate: &str) -> Result<UnparkOutcome> {
        self.unpark_at(plate, Utc::now())
    }

    /// Unpark a vehicle with an explicit exit time
    ///
    /// The fee is computed before anything changes, so a rejected exit time
    /// leaves the vehicle parked.
    pub fn unpark_at(&mut self, plate: &str, exit_time: DateTime<Utc>) -> Result<UnparkOutcome> {
        let Some(ticket) = self.tickets.get(plate).cloned() else {
            warn!("Vehicle {} cannot be found inside the parking lot", plate);
            return Ok(UnparkOutcome::NotFound);
        };

        let fee = self.payment_strategy.compute_fee(&ticket, exit_time)?;
        self.spot_mut(ticket.spot())?.release()?;
        self.tickets.remove(plate);

        info!("Unparking vehicle {}, total payment required: {:.2}", plate, fee);
        Ok(UnparkOutcome::Departed(Receipt {
            ticket,
            exit_time,
            fee,
        }))
    }

    /// Summaries of every floor, lowest level first
    pub fn report_state(&self) -> Vec<FloorSummary> {
        self.floors.values().map(ParkingFloor::summarize).collect()
    }

    /// Print the floor report to stdout
    pub fn print_state(&self) {
        for summary in self.report_state() {
            println!("{}", summary);
        }
    }

    pub fn floor(&self, level: Level) -> Option<&ParkingFloor> {
        self.floors.get(&level)
    }

    pub fn floors(&self) -> impl Iterator<Item = &ParkingFloor> {
        self.floors.values()
    }

    pub fn spot(&self, id: SpotId) -> Option<&ParkingSpot> {
        self.floors.get(&id.level)?.spot(id.index)
    }

    fn spot_mut(&mut self, id: SpotId) -> Result<&mut ParkingSpot> {
        self.floors
            .get_mut(&id.level)
            .and_then(|floor| floor.spot_mut(id.index))
            .ok_or(ParkingError::UnknownSpot(id))
    }

    pub fn ticket(&self, plate: &str) -> Option<&ParkingTicket> {
        self.tickets.get(plate)
    }

    pub fn tickets(&self) -> impl Iterator<Item = &ParkingTicket> {
        self.tickets.values()
    }

    pub fn active_tickets(&self) -> usize {
        self.tickets.len()
    }

    /// Check that tickets and occupied spots correspond one to one
    pub fn is_consistent(&self) -> bool {
        let tickets_match = self.tickets.iter().all(|(plate, ticket)| {
            self.spot(ticket.spot())
                .and_then(ParkingSpot::occupant)
                .is_some_and(|vehicle| vehicle.plate() == plate.as_str())
        });
        let occupied = self
            .floors
            .values()
            .flat_map(|floor| floor.spots().iter())
            .filter(|spot| spot.is_occupied())
            .count();
        tickets_match && occupied == self.tickets.len()
    }
}
