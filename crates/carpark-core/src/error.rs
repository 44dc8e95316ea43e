use thiserror::Error;

use crate::SpotLocation;

/// Errors returned by parking operations
///
/// None of these leave the lot in a modified state.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ParkError {
    /// Every spot on every floor is taken
    #[error("no available parking spots")]
    LotFull,
    /// A vehicle with the same license plate is already parked
    #[error("vehicle {0} is already parked")]
    AlreadyParked(String),
    /// Adding the spot would exceed the lot's declared capacity
    #[error("lot capacity of {0} spots exceeded")]
    CapacityExceeded(u32),
    /// A floor with this number is already part of the lot
    #[error("floor {0} already exists")]
    DuplicateFloor(u32),
    /// A spot with this location is already part of the floor
    #[error("{0} already exists")]
    DuplicateSpot(SpotLocation),
    /// The spot belongs to another floor than the one it is added to
    #[error("{0} cannot be added to floor {1}")]
    MisplacedSpot(SpotLocation, u32),
    /// The ticket's vehicle is not parked in any spot
    #[error("vehicle {0} is not parked")]
    VehicleMissing(String),
    /// No ticket with this number was ever issued
    #[error("ticket {0} does not exist")]
    UnknownTicket(u32),
    /// The ticket has already been checked out
    #[error("ticket {0} has already been closed")]
    TicketClosed(u32),
}
