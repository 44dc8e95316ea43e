use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::{FeeSchedule, SpotLocation, Vehicle};

/// How a ticket was paid
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PaymentMethod {
    /// Paid in cash at the exit panel
    Cash,
    /// Paid by card at the exit panel
    Card,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cash => "cash",
            Self::Card => "card",
        })
    }
}

/// Record of a single parking session
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Ticket {
    number: u32,
    vehicle: Vehicle,
    location: SpotLocation,
    entry_time: DateTime<Utc>,
    exit_time: Option<DateTime<Utc>>,
    charge: Option<u32>,
    payment: Option<PaymentMethod>,
}

impl Ticket {
    /// Issue a new, open [`Ticket`]
    pub fn new(
        number: u32,
        vehicle: Vehicle,
        location: SpotLocation,
        entry_time: DateTime<Utc>,
    ) -> Self {
        Self {
            number,
            vehicle,
            location,
            entry_time,
            exit_time: None,
            charge: None,
            payment: None,
        }
    }

    /// Get the ticket number
    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Get the vehicle the ticket was issued for
    #[inline]
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Get the spot the vehicle was parked in
    #[inline]
    pub fn location(&self) -> SpotLocation {
        self.location
    }

    /// Get the time the vehicle entered
    #[inline]
    pub fn entry_time(&self) -> DateTime<Utc> {
        self.entry_time
    }

    /// Get the time the vehicle left, if it did
    #[inline]
    pub fn exit_time(&self) -> Option<DateTime<Utc>> {
        self.exit_time
    }

    /// Get the settled charge, if payment was processed
    #[inline]
    pub fn charge(&self) -> Option<u32> {
        self.charge
    }

    /// Get the payment method, if payment was processed
    #[inline]
    pub fn payment(&self) -> Option<PaymentMethod> {
        self.payment
    }

    /// Whether the vehicle has left
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.exit_time.is_some()
    }

    /// Length of the session, up to `now` while the ticket is still open
    pub fn duration(&self, now: DateTime<Utc>) -> Duration {
        self.exit_time.unwrap_or(now) - self.entry_time
    }

    /// Record the exit time
    pub fn close(&mut self, exit_time: DateTime<Utc>) {
        self.exit_time = Some(exit_time);
    }

    /// Compute the charge without settling it
    pub fn calculate_charge(&self, fees: &FeeSchedule, now: DateTime<Utc>) -> u32 {
        fees.charge_for(self.duration(now))
    }

    /// Compute and settle the charge, returning the amount paid
    pub fn process_payment(
        &mut self,
        fees: &FeeSchedule,
        method: PaymentMethod,
        now: DateTime<Utc>,
    ) -> u32 {
        let charge = self.calculate_charge(fees, now);
        self.charge = Some(charge);
        self.payment = Some(method);
        charge
    }
}
