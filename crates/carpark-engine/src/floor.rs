//! A floor of the parking lot

use carpark_core::{FloorStatus, ParkError};

use crate::spot::ParkingSpot;

/// An ordered sequence of spots
#[derive(Clone, Debug)]
pub struct ParkingFloor {
    number: u32,
    spots: Vec<ParkingSpot>,
}

impl ParkingFloor {
    /// Create a new [`ParkingFloor`] without spots
    pub fn new(number: u32) -> Self {
        Self {
            number,
            spots: Vec::new(),
        }
    }

    /// Create a floor with spots numbered `1..=spots`
    pub fn with_spots(number: u32, spots: u32) -> Self {
        Self {
            number,
            spots: (1..=spots).map(|spot| ParkingSpot::new(spot, number)).collect(),
        }
    }

    /// Get the floor number
    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Append a spot; spots are allocated in the order they were added.
    ///
    /// The spot must belong to this floor and its number must be unused.
    pub fn add_spot(&mut self, spot: ParkingSpot) -> Result<(), ParkError> {
        if spot.floor() != self.number {
            return Err(ParkError::MisplacedSpot(spot.location(), self.number));
        }
        if self.spots.iter().any(|s| s.number() == spot.number()) {
            return Err(ParkError::DuplicateSpot(spot.location()));
        }
        self.spots.push(spot);
        Ok(())
    }

    /// Get the spots in allocation order
    #[inline]
    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }

    pub(crate) fn spots_mut(&mut self) -> &mut [ParkingSpot] {
        &mut self.spots
    }

    /// Count the free spots on this floor
    pub fn available_spots(&self) -> u32 {
        self.spots.iter().filter(|spot| spot.is_available()).count() as u32
    }

    pub(crate) fn status(&self) -> FloorStatus {
        FloorStatus {
            floor: self.number,
            spots: self.spots.iter().map(ParkingSpot::status).collect(),
        }
    }
}
