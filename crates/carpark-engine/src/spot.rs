//! A single parking spot

use carpark_core::{SpotLocation, SpotStatus, Vehicle};

/// A spot holding at most one vehicle
///
/// Availability is derived from the occupant, so a spot is available exactly
/// when no vehicle is assigned to it.
#[derive(Clone, Debug)]
pub struct ParkingSpot {
    number: u32,
    floor: u32,
    vehicle: Option<Vehicle>,
}

impl ParkingSpot {
    /// Create a new, empty [`ParkingSpot`]
    pub fn new(number: u32, floor: u32) -> Self {
        Self {
            number,
            floor,
            vehicle: None,
        }
    }

    /// Get the spot number
    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Get the number of the floor the spot is on
    #[inline]
    pub fn floor(&self) -> u32 {
        self.floor
    }

    /// Get the spot's position in the lot
    #[inline]
    pub fn location(&self) -> SpotLocation {
        SpotLocation {
            floor: self.floor,
            spot: self.number,
        }
    }

    /// Whether no vehicle is parked here
    #[inline]
    pub fn is_available(&self) -> bool {
        self.vehicle.is_none()
    }

    /// Get the parked vehicle, if any
    #[inline]
    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    /// Park `vehicle` here if the spot is free.
    ///
    /// Returns whether the vehicle was parked.
    pub fn park(&mut self, vehicle: Vehicle) -> bool {
        if !self.is_available() {
            return false;
        }
        self.vehicle = Some(vehicle);
        true
    }

    /// Remove and return the parked vehicle
    pub fn vacate(&mut self) -> Option<Vehicle> {
        self.vehicle.take()
    }

    pub(crate) fn status(&self) -> SpotStatus {
        SpotStatus {
            spot: self.number,
            available: self.is_available(),
        }
    }
}
