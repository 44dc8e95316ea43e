//! Implementation of the parking lot

use std::collections::BTreeMap;

use carpark_core::{
    FeeSchedule, ParkError, PaymentMethod, SpotBoard, SpotLocation, Ticket, Vehicle,
};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::floor::ParkingFloor;
use crate::spot::ParkingSpot;

/// A named administrator of the lot
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Admin {
    name: String,
}

impl Admin {
    /// Create a new [`Admin`]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Get the admin's name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The parking lot: floors of spots plus the tickets issued for them
pub struct ParkingLot {
    name: String,
    address: String,
    /// Declared number of spots, fixed at construction
    capacity: u32,
    fees: FeeSchedule,

    /// Floors in allocation order
    floors: Vec<ParkingFloor>,
    admins: Vec<Admin>,

    /// Every ticket issued so far, open or closed
    tickets: BTreeMap<u32, Ticket>,
    next_ticket: u32,
}

impl ParkingLot {
    /// Create a new [`ParkingLot`] without floors
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        capacity: u32,
        fees: FeeSchedule,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            capacity,
            fees,
            floors: Vec::new(),
            admins: Vec::new(),
            tickets: BTreeMap::new(),
            next_ticket: 1,
        }
    }

    /// Get the lot's name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the lot's address
    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Get the declared total capacity
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Get the fee schedule tickets are charged with
    #[inline]
    pub fn fees(&self) -> &FeeSchedule {
        &self.fees
    }

    /// Add a floor behind the existing ones.
    ///
    /// Fails if the floor number is taken or the floor's spots do not fit
    /// into the remaining capacity.
    pub fn add_floor(&mut self, floor: ParkingFloor) -> Result<(), ParkError> {
        if self.floors.iter().any(|f| f.number() == floor.number()) {
            return Err(ParkError::DuplicateFloor(floor.number()));
        }
        let spots = self.total_spots() + floor.spots().len();
        if spots > self.capacity as usize {
            return Err(ParkError::CapacityExceeded(self.capacity));
        }
        self.floors.push(floor);
        Ok(())
    }

    /// Get the floors in allocation order
    #[inline]
    pub fn floors(&self) -> &[ParkingFloor] {
        &self.floors
    }

    /// Add an admin
    pub fn add_admin(&mut self, admin: Admin) {
        self.admins.push(admin);
    }

    /// Get the admins
    #[inline]
    pub fn admins(&self) -> &[Admin] {
        &self.admins
    }

    fn total_spots(&self) -> usize {
        self.floors.iter().map(|floor| floor.spots().len()).sum()
    }

    /// Count the free spots across all floors
    pub fn available_spots(&self) -> u32 {
        self.floors.iter().map(ParkingFloor::available_spots).sum()
    }

    /// Find the spot a vehicle with `license_plate` is parked in
    pub fn locate(&self, license_plate: &str) -> Option<SpotLocation> {
        self.floors
            .iter()
            .flat_map(ParkingFloor::spots)
            .find(|spot| {
                spot.vehicle()
                    .is_some_and(|vehicle| vehicle.license_plate() == license_plate)
            })
            .map(ParkingSpot::location)
    }

    fn occupied_by_mut(&mut self, license_plate: &str) -> Option<&mut ParkingSpot> {
        self.floors
            .iter_mut()
            .flat_map(|floor| floor.spots_mut().iter_mut())
            .find(|spot| {
                spot.vehicle()
                    .is_some_and(|vehicle| vehicle.license_plate() == license_plate)
            })
    }

    /// Park `vehicle` in the first free spot, scanning floors and then spots
    /// in the order they were added.
    ///
    /// On failure the lot is left untouched.
    pub fn park_vehicle(&mut self, vehicle: Vehicle) -> Result<SpotLocation, ParkError> {
        if self.locate(vehicle.license_plate()).is_some() {
            return Err(ParkError::AlreadyParked(vehicle.license_plate().to_owned()));
        }

        let free = self
            .floors
            .iter_mut()
            .flat_map(|floor| floor.spots_mut().iter_mut())
            .find(|spot| spot.is_available());

        let Some(spot) = free else {
            warn!("No spot available for vehicle {}", vehicle.license_plate());
            return Err(ParkError::LotFull);
        };

        let location = spot.location();
        info!("Vehicle {} parked on {location}", vehicle.license_plate());
        let parked = spot.park(vehicle);
        debug_assert!(parked, "first-fit picked an occupied spot");
        Ok(location)
    }

    /// Issue a ticket for a vehicle parked at `location`
    pub fn create_ticket(
        &mut self,
        vehicle: Vehicle,
        location: SpotLocation,
        now: DateTime<Utc>,
    ) -> Ticket {
        let number = self.next_ticket;
        self.next_ticket += 1;

        info!("Ticket {number} created for vehicle {}", vehicle.license_plate());
        let ticket = Ticket::new(number, vehicle, location, now);
        self.tickets.insert(number, ticket.clone());
        ticket
    }

    /// Park `vehicle` and issue a ticket for it
    pub fn enter(&mut self, vehicle: Vehicle, now: DateTime<Utc>) -> Result<Ticket, ParkError> {
        let location = self.park_vehicle(vehicle.clone())?;
        Ok(self.create_ticket(vehicle, location, now))
    }

    /// Get an issued ticket
    pub fn ticket(&self, number: u32) -> Option<&Ticket> {
        self.tickets.get(&number)
    }

    /// Iterate over all issued tickets in ticket number order
    pub fn tickets(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.values()
    }

    /// Close ticket `number`, free the spot its vehicle occupies and settle
    /// the charge.
    ///
    /// On failure neither the ticket nor any spot is modified.
    pub fn check_out(
        &mut self,
        number: u32,
        method: PaymentMethod,
        now: DateTime<Utc>,
    ) -> Result<Ticket, ParkError> {
        let ticket = self
            .tickets
            .get(&number)
            .ok_or(ParkError::UnknownTicket(number))?;
        if ticket.is_closed() {
            return Err(ParkError::TicketClosed(number));
        }

        let plate = ticket.vehicle().license_plate().to_owned();
        let spot = self
            .occupied_by_mut(&plate)
            .ok_or_else(|| ParkError::VehicleMissing(plate.clone()))?;
        spot.vacate();

        let Some(ticket) = self.tickets.get_mut(&number) else {
            return Err(ParkError::UnknownTicket(number));
        };
        ticket.close(now);
        let charge = ticket.process_payment(&self.fees, method, now);
        let settled = ticket.clone();

        info!("Payment of ${charge}.00 processed for Ticket {number} using {method}");
        Ok(settled)
    }

    /// Snapshot the availability of every spot
    pub fn board(&self) -> SpotBoard {
        SpotBoard::new(self.floors.iter().map(ParkingFloor::status).collect())
    }
}

#[cfg(test)]
mod tests {
    use carpark_core::VehicleType;
    use chrono::{Duration, TimeZone};

    use super::*;

    fn lot(floors: u32, spots: u32) -> ParkingLot {
        let mut lot = ParkingLot::new("Test", "Nowhere", floors * spots, FeeSchedule::default());
        for floor in 1..=floors {
            lot.add_floor(ParkingFloor::with_spots(floor, spots)).unwrap();
        }
        lot
    }

    fn car(plate: &str) -> Vehicle {
        Vehicle::new(plate, VehicleType::CAR)
    }

    #[test]
    fn first_fit_fills_floor_before_moving_up() {
        let mut lot = lot(2, 2);
        let spots: Vec<_> = ["A", "B", "C"]
            .into_iter()
            .map(|plate| lot.park_vehicle(car(plate)).unwrap())
            .collect();

        assert_eq!(
            spots,
            [
                SpotLocation { floor: 1, spot: 1 },
                SpotLocation { floor: 1, spot: 2 },
                SpotLocation { floor: 2, spot: 1 },
            ]
        );
        assert_eq!(lot.available_spots(), 1);
    }

    #[test]
    fn same_plate_cannot_park_twice() {
        let mut lot = lot(1, 3);
        lot.park_vehicle(car("A")).unwrap();

        assert_eq!(
            lot.park_vehicle(car("A")),
            Err(ParkError::AlreadyParked(String::from("A")))
        );
        assert_eq!(lot.available_spots(), 2);
    }

    #[test]
    fn floors_beyond_capacity_are_rejected() {
        let mut lot = ParkingLot::new("Test", "Nowhere", 3, FeeSchedule::default());
        lot.add_floor(ParkingFloor::with_spots(1, 2)).unwrap();

        assert_eq!(
            lot.add_floor(ParkingFloor::with_spots(2, 2)),
            Err(ParkError::CapacityExceeded(3))
        );
        assert_eq!(lot.floors().len(), 1);
    }

    #[test]
    fn duplicate_floor_number_is_rejected() {
        let mut lot = ParkingLot::new("Test", "Nowhere", 4, FeeSchedule::default());
        lot.add_floor(ParkingFloor::with_spots(1, 1)).unwrap();

        assert_eq!(
            lot.add_floor(ParkingFloor::with_spots(1, 1)),
            Err(ParkError::DuplicateFloor(1))
        );
        assert_eq!(lot.floors().len(), 1);
    }

    #[test]
    fn check_out_only_evicts_the_ticketed_vehicle() {
        let entry = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let mut lot = lot(2, 1);
        lot.enter(car("A"), entry).unwrap();
        let b = lot.enter(car("B"), entry).unwrap();

        lot.check_out(b.number(), PaymentMethod::Card, entry).unwrap();

        assert_eq!(lot.locate("A"), Some(SpotLocation { floor: 1, spot: 1 }));
        assert_eq!(lot.locate("B"), None);
        assert_eq!(lot.available_spots(), 1);
    }

    #[test]
    fn check_out_of_missing_vehicle_changes_nothing() {
        let entry = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let mut lot = lot(1, 2);
        // a ticket for a vehicle that never took a spot
        let ticket = lot.create_ticket(car("GHOST"), SpotLocation { floor: 1, spot: 1 }, entry);
        lot.enter(car("A"), entry).unwrap();

        assert_eq!(
            lot.check_out(ticket.number(), PaymentMethod::Cash, entry),
            Err(ParkError::VehicleMissing(String::from("GHOST")))
        );
        assert_eq!(lot.locate("A"), Some(SpotLocation { floor: 1, spot: 1 }));
        assert!(lot.ticket(ticket.number()).is_some_and(|t| !t.is_closed()));
    }

    #[test]
    fn check_out_frees_the_ticketed_spot() {
        let entry = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let mut lot = lot(1, 2);
        let first = lot.enter(car("A"), entry).unwrap();
        lot.enter(car("B"), entry).unwrap();
        assert_eq!(lot.available_spots(), 0);

        let settled = lot
            .check_out(first.number(), PaymentMethod::Cash, entry + Duration::hours(2))
            .unwrap();

        assert_eq!(settled.charge(), Some(7));
        assert_eq!(lot.locate("A"), None);
        assert_eq!(lot.locate("B"), Some(SpotLocation { floor: 1, spot: 2 }));
        assert!(lot.board().floors()[0].spots[0].available);
        assert_eq!(
            lot.check_out(first.number(), PaymentMethod::Cash, entry),
            Err(ParkError::TicketClosed(first.number()))
        );
        assert_eq!(
            lot.check_out(42, PaymentMethod::Cash, entry),
            Err(ParkError::UnknownTicket(42))
        );
    }
}
