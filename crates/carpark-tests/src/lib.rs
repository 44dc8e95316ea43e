use std::sync::Arc;

use carpark_core::{Config, FeeSchedule, ParkingService, Vehicle, VehicleType};
use carpark_engine::{Attendant, ManualClock};
use chrono::{DateTime, Duration, TimeZone, Utc};
use eyre::{eyre, Result};
use settings::ParkingSettings;

mod settings;

pub struct TestCtxBuilder {
    /// Number of floors
    pub floors: u32,
    /// Number of spots on every floor
    pub spots_per_floor: u32,
    /// Rates tickets are charged with
    pub fees: FeeSchedule,
    /// Time the manual clock starts at
    pub start: DateTime<Utc>,
}

impl TestCtxBuilder {
    /// Create a new test context builder initialized with environment defaults
    pub fn from_env() -> Result<Self> {
        let settings = ParkingSettings::load()?;

        let Some(start) = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).single() else {
            return Err(eyre!("start time is ambiguous"));
        };

        Ok(TestCtxBuilder {
            floors: settings.floors,
            spots_per_floor: settings.spots_per_floor,
            fees: settings.fees.into(),
            start,
        })
    }

    /// Set the number of floors
    pub fn with_floors(mut self, floors: u32) -> Self {
        self.floors = floors;
        self
    }

    /// Set the number of spots on every floor
    pub fn with_spots(mut self, spots: u32) -> Self {
        self.spots_per_floor = spots;
        self
    }

    /// Set the fee schedule
    pub fn with_fees(mut self, fees: FeeSchedule) -> Self {
        self.fees = fees;
        self
    }

    /// Get the [`carpark_core::Config`] for launching the lot
    fn config(&self) -> Config {
        Config {
            name: String::from("Test Lot"),
            address: String::from("1 Test Rd"),
            floors: self.floors,
            spots_per_floor: self.spots_per_floor,
            fees: self.fees,
        }
    }

    /// Build the test context
    pub fn build(self) -> Result<TestCtx> {
        let config = self.config();
        let clock = Arc::new(ManualClock::new(self.start));
        let attendant = carpark_engine::launch_with_clock(&config, clock.clone())?;

        Ok(TestCtx {
            attendant,
            clock,
            floors: self.floors,
            spots_per_floor: self.spots_per_floor,
            drop_bomb: DropBomb,
        })
    }
}

/// Test context
pub struct TestCtx {
    /// The lot under test
    pub attendant: Attendant,
    /// Clock driving ticket times
    pub clock: Arc<ManualClock>,
    /// Number of floors
    pub floors: u32,
    /// Number of spots on every floor
    pub spots_per_floor: u32,

    drop_bomb: DropBomb,
}

impl TestCtx {
    /// Let time pass
    pub fn advance(&self, by: Duration) {
        self.clock.advance(by);
    }

    /// Total number of spots
    pub fn spots(&self) -> u32 {
        self.floors * self.spots_per_floor
    }

    /// Shut the lot down and finish the test
    pub fn finish(self) {
        std::mem::forget(self.drop_bomb);
        self.attendant.shutdown();
    }
}

/// A regular car with license plate `plate`
pub fn car(plate: impl Into<String>) -> Vehicle {
    Vehicle::new(plate, VehicleType::CAR)
}

struct DropBomb;

impl Drop for DropBomb {
    fn drop(&mut self) {
        eprintln!("@TestAuthor: You should call `ctx.finish()` to shut the lot down");
    }
}
