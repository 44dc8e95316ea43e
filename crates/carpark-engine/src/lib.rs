//! 🅿 The parking lot engine.
//!
//! A lot is made of [floors][floor], each holding an ordered sequence of
//! [spots][spot]. Vehicles are assigned first-fit by the [lot], and the
//! [attendant] exposes the lot through the [`ParkingService`] trait.
//!
//! [`ParkingService`]: carpark_core::ParkingService

#![allow(rustdoc::private_intra_doc_links)]
use std::sync::Arc;

use carpark_core::{Config, ParkError};
use tracing::info;

mod attendant;
mod floor;
mod lot;
mod spot;

pub use attendant::{Attendant, Clock, ManualClock, SystemClock};
pub use floor::ParkingFloor;
pub use lot::{Admin, ParkingLot};
pub use spot::ParkingSpot;

/// Build the lot described by `config`.
///
/// Floors and spots are numbered from 1, and every floor gets one admin.
pub fn build_lot(config: &Config) -> Result<ParkingLot, ParkError> {
    let mut lot = ParkingLot::new(
        config.name.as_str(),
        config.address.as_str(),
        config.capacity(),
        config.fees,
    );

    for number in 1..=config.floors {
        lot.add_floor(ParkingFloor::with_spots(number, config.spots_per_floor))?;
        lot.add_admin(Admin::new(format!("Admin {number}")));
    }

    info!(
        "Opened {} at {} with {} floors of {} spots",
        lot.name(),
        lot.address(),
        config.floors,
        config.spots_per_floor
    );
    Ok(lot)
}

/// Entrypoint of the engine, using the wall clock
pub fn launch(config: &Config) -> Result<Attendant, ParkError> {
    launch_with_clock(config, Arc::new(SystemClock))
}

/// Like [`launch`], with a custom [`Clock`]
pub fn launch_with_clock(config: &Config, clock: Arc<dyn Clock>) -> Result<Attendant, ParkError> {
    Ok(Attendant::new(build_lot(config)?, clock))
}
