//! Implementation of the attendant running the lot

use std::sync::Arc;

use carpark_core::{ParkError, ParkingService, PaymentMethod, SpotBoard, Ticket, Vehicle};
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use tracing::info;

use crate::lot::ParkingLot;

/// Source of the current time for tickets
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
    /// Create a new [`ManualClock`] standing at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self(Mutex::new(start))
    }

    /// Move the clock forward by `by`
    pub fn advance(&self, by: Duration) {
        *self.0.lock() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock()
    }
}

/// Runs a [`ParkingLot`] on behalf of its customers
///
/// ⚠️ Calls are processed one at a time; the lock only exists so that the
/// [`ParkingService`] methods can take `&self`.
pub struct Attendant {
    lot: Mutex<ParkingLot>,
    clock: Arc<dyn Clock>,
}

impl Attendant {
    /// Create a new [`Attendant`]
    pub fn new(lot: ParkingLot, clock: Arc<dyn Clock>) -> Self {
        Self {
            lot: Mutex::new(lot),
            clock,
        }
    }

    /// Inspect the lot
    pub fn with_lot<R>(&self, f: impl FnOnce(&ParkingLot) -> R) -> R {
        f(&self.lot.lock())
    }

    /// Compute what ticket `number` would cost if it were closed now
    pub fn quote(&self, number: u32) -> Result<u32, ParkError> {
        let lot = self.lot.lock();
        let ticket = lot.ticket(number).ok_or(ParkError::UnknownTicket(number))?;
        Ok(ticket.calculate_charge(lot.fees(), self.clock.now()))
    }
}

impl ParkingService for Attendant {
    fn enter(&self, vehicle: Vehicle) -> Result<Ticket, ParkError> {
        let now = self.clock.now();
        self.lot.lock().enter(vehicle, now)
    }

    fn exit(&self, ticket: u32, method: PaymentMethod) -> Result<Ticket, ParkError> {
        let now = self.clock.now();
        self.lot.lock().check_out(ticket, method, now)
    }

    fn available_spots(&self) -> u32 {
        self.lot.lock().available_spots()
    }

    fn capacity(&self) -> u32 {
        self.lot.lock().capacity()
    }

    fn board(&self) -> SpotBoard {
        self.lot.lock().board()
    }

    fn shutdown(self) {
        let lot = self.lot.into_inner();
        let open = lot.tickets().filter(|ticket| !ticket.is_closed()).count();
        info!(
            "Closing {} with {open} vehicles still parked",
            lot.name()
        );
    }
}
