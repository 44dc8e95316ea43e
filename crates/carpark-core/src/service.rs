use std::fmt;

use crate::{ParkError, PaymentMethod, Ticket, Vehicle};

/// Position of a spot within the lot
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SpotLocation {
    /// Floor number
    pub floor: u32,
    /// Spot number on that floor
    pub spot: u32,
}

impl fmt::Display for SpotLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Floor {}, Spot {}", self.floor, self.spot)
    }
}

/// Availability of a single spot
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SpotStatus {
    /// Spot number
    pub spot: u32,
    /// Whether the spot is free
    pub available: bool,
}

/// Availability of all spots on a floor
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FloorStatus {
    /// Floor number
    pub floor: u32,
    /// Spots in allocation order
    pub spots: Vec<SpotStatus>,
}

/// Snapshot of the availability of every spot in the lot
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SpotBoard {
    floors: Vec<FloorStatus>,
}

impl SpotBoard {
    /// Create a new [`SpotBoard`]
    pub fn new(floors: Vec<FloorStatus>) -> Self {
        Self { floors }
    }

    /// Get the floors in allocation order
    #[inline]
    pub fn floors(&self) -> &[FloorStatus] {
        &self.floors
    }

    /// Count the free spots on the board
    pub fn available(&self) -> usize {
        self.floors
            .iter()
            .flat_map(|floor| &floor.spots)
            .filter(|spot| spot.available)
            .count()
    }
}

impl fmt::Display for SpotBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for floor in &self.floors {
            writeln!(f, "Floor {}:", floor.floor)?;
            for spot in &floor.spots {
                writeln!(f, "  Spot {}: Available: {}", spot.spot, spot.available)?;
            }
        }
        Ok(())
    }
}

/// Interface for running a parking lot
///
/// 📌 Hint: The attendant in `carpark-engine` implements this trait.
pub trait ParkingService {
    /// Park a vehicle in the first free spot and issue a ticket for it
    fn enter(&self, vehicle: Vehicle) -> Result<Ticket, ParkError>;

    /// Close a ticket, free its spot and settle the charge
    fn exit(&self, ticket: u32, method: PaymentMethod) -> Result<Ticket, ParkError>;

    /// Number of spots currently free
    fn available_spots(&self) -> u32;

    /// Total number of spots the lot was built for
    fn capacity(&self) -> u32;

    /// Snapshot of every spot's availability
    fn board(&self) -> SpotBoard;

    /// Shut the lot down
    fn shutdown(self);
}
