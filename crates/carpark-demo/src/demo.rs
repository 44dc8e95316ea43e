//! The visit of a single customer

use std::sync::Arc;

use carpark_core::{Config, Customer, ParkError, ParkingService, PaymentMethod, Vehicle};
use carpark_engine::{Clock, ManualClock};
use chrono::{Duration, Utc};
use rand::Rng;
use tracing::info;

/// Longest stay picked when none is given, in minutes
const MAX_RANDOM_STAY_MINUTES: i64 = 8 * 60;

/// Run the demo: a customer parks, stays a while, pays and leaves.
pub fn run(config: &Config, vehicle: Vehicle, stay_hours: Option<u32>) -> Result<(), ParkError> {
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let attendant = carpark_engine::launch_with_clock(config, clock.clone())?;

    let mut customer = Customer::new("John Doe", "123-456-7890", vehicle);
    info!(
        "Customer {} ({}, phone {}) arrived with a {} vehicle",
        customer.name(),
        customer.id(),
        customer.phone_number(),
        customer.vehicle().vehicle_type().size
    );

    if attendant.available_spots() == 0 {
        println!("No available spots");
        return Err(ParkError::LotFull);
    }

    let ticket = attendant.enter(customer.vehicle().clone())?;
    println!(
        "Ticket {} issued for {} on {}",
        ticket.number(),
        ticket.vehicle().license_plate(),
        ticket.location()
    );
    customer.assign_ticket(ticket.clone());

    let stay = match stay_hours {
        Some(hours) => Duration::hours(hours.into()),
        None => Duration::minutes(rand::thread_rng().gen_range(1..=MAX_RANDOM_STAY_MINUTES)),
    };
    clock.advance(stay);

    let settled = attendant.exit(ticket.number(), PaymentMethod::Card)?;
    customer.assign_ticket(settled);

    if let Some(ticket) = customer.ticket() {
        let parked = ticket.exit_time().unwrap_or_else(|| clock.now()) - ticket.entry_time();
        println!(
            "{} left after {}h{:02}m",
            customer.name(),
            parked.num_hours(),
            parked.num_minutes() % 60
        );
        if let Some(charge) = ticket.charge() {
            println!("Paid ${charge}.00 for ticket {}", ticket.number());
        }
    }

    let board = attendant.board();
    print!("{board}");
    println!("{} of {} spots free", board.available(), attendant.capacity());
    attendant.shutdown();
    Ok(())
}
