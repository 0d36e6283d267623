//! Fee calculation policies
//!
//! Fees are charged per started billing unit: any positive remainder of a
//! unit rounds up to a whole unit, and a zero-length stay costs nothing.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use chrono::{DateTime, TimeDelta, Utc};

use super::error::{ParkingError, Result};
use super::ticket::ParkingTicket;

/// Default flat fee per started day
pub const DEFAULT_FLAT_RATE: f64 = 5.0;

/// Default fee per started hour
pub const DEFAULT_HOURLY_RATE: f64 = 1.5;

const SECONDS_PER_HOUR: i64 = 60 * 60;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Computes what a departing vehicle owes
pub trait PaymentStrategy: fmt::Debug {
    fn compute_fee(&self, ticket: &ParkingTicket, exit_time: DateTime<Utc>) -> Result<f64>;

    fn name(&self) -> &'static str;

    fn rate(&self) -> f64;
}

fn validate_rate(rate: f64) -> Result<f64> {
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(ParkingError::InvalidRate(rate))
    }
}

/// Number of started units of `unit_seconds` in a non-negative duration
pub fn billable_units(elapsed: TimeDelta, unit_seconds: i64) -> u64 {
    let nanos = i128::from(elapsed.num_seconds()) * NANOS_PER_SECOND
        + i128::from(elapsed.subsec_nanos());
    if nanos <= 0 {
        return 0;
    }
    let unit = i128::from(unit_seconds) * NANOS_PER_SECOND;
    let units = (nanos + unit - 1) / unit;
    u64::try_from(units).unwrap_or(u64::MAX)
}

/// Charges `rate` for every started day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatFeePerDay {
    rate: f64,
}

impl FlatFeePerDay {
    pub fn new(rate: f64) -> Result<Self> {
        Ok(Self {
            rate: validate_rate(rate)?,
        })
    }
}

impl Default for FlatFeePerDay {
    fn default() -> Self {
        Self {
            rate: DEFAULT_FLAT_RATE,
        }
    }
}

impl PaymentStrategy for FlatFeePerDay {
    fn compute_fee(&self, ticket: &ParkingTicket, exit_time: DateTime<Utc>) -> Result<f64> {
        let days = billable_units(ticket.elapsed(exit_time)?, SECONDS_PER_DAY);
        Ok(self.rate * days as f64)
    }

    fn name(&self) -> &'static str {
        "flat-fee-per-day"
    }

    fn rate(&self) -> f64 {
        self.rate
    }
}

/// Charges `rate` for every started hour of the whole stay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyRate {
    rate: f64,
}

impl HourlyRate {
    pub fn new(rate: f64) -> Result<Self> {
        Ok(Self {
            rate: validate_rate(rate)?,
        })
    }
}

impl Default for HourlyRate {
    fn default() -> Self {
        Self {
            rate: DEFAULT_HOURLY_RATE,
        }
    }
}

impl PaymentStrategy for HourlyRate {
    fn compute_fee(&self, ticket: &ParkingTicket, exit_time: DateTime<Utc>) -> Result<f64> {
        let hours = billable_units(ticket.elapsed(exit_time)?, SECONDS_PER_HOUR);
        Ok(self.rate * hours as f64)
    }

    fn name(&self) -> &'static str {
        "hourly-rate"
    }

    fn rate(&self) -> f64 {
        self.rate
    }
}

/// Rate model, used to pick a payment strategy from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeeModel {
    #[default]
    FlatPerDay,
    Hourly,
}

impl FeeModel {
    /// Build the strategy, falling back to the model's default rate
    pub fn strategy(self, rate: Option<f64>) -> Result<Box<dyn PaymentStrategy>> {
        Ok(match (self, rate) {
            (FeeModel::FlatPerDay, Some(rate)) => Box::new(FlatFeePerDay::new(rate)?),
            (FeeModel::FlatPerDay, None) => Box::new(FlatFeePerDay::default()),
            (FeeModel::Hourly, Some(rate)) => Box::new(HourlyRate::new(rate)?),
            (FeeModel::Hourly, None) => Box::new(HourlyRate::default()),
        })
    }
}

impl FromStr for FeeModel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" | "daily" | "flat-fee-per-day" => Ok(FeeModel::FlatPerDay),
            "hourly" | "hourly-rate" => Ok(FeeModel::Hourly),
            other => bail!("unknown payment strategy '{other}' (expected 'flat' or 'hourly')"),
        }
    }
}
