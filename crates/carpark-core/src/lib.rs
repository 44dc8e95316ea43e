//! 🏗 Shared types of the parking lot facility
#![warn(missing_docs)]

mod customer;
mod error;
mod fee;
mod service;
mod ticket;
mod vehicle;

pub use customer::Customer;
pub use error::ParkError;
pub use fee::FeeSchedule;
pub use service::{FloorStatus, ParkingService, SpotBoard, SpotLocation, SpotStatus};
pub use ticket::{PaymentMethod, Ticket};
pub use vehicle::{Vehicle, VehicleSize, VehicleType};

/// Configuration of a parking lot
#[derive(Clone, Debug)]
pub struct Config {
    /// Name shown on tickets and in logs
    pub name: String,
    /// Street address of the lot
    pub address: String,
    /// Number of floors
    pub floors: u32,
    /// Number of spots on every floor
    pub spots_per_floor: u32,
    /// Rates used to charge tickets
    pub fees: FeeSchedule,
}

impl Config {
    /// Total number of spots the lot is built for
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.floors.saturating_mul(self.spots_per_floor)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: String::from("Parking Lot 1"),
            address: String::from("123 Main St"),
            floors: 3,
            spots_per_floor: 20,
            fees: FeeSchedule::default(),
        }
    }
}
