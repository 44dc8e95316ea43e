use carpark_core::{ParkingService, Ticket};
use carpark_tests::{car, TestCtx};
use eyre::Result;

/// Parks `count` cars with plates `CAR-0`, `CAR-1`, ... and checks that every
/// arrival takes exactly one spot.
#[allow(unused)]
pub fn fill(ctx: &TestCtx, count: u32) -> Result<Vec<Ticket>> {
    let mut tickets = Vec::with_capacity(count as usize);
    for i in 0..count {
        let before = ctx.attendant.available_spots();
        tickets.push(ctx.attendant.enter(car(format!("CAR-{i}")))?);
        assert_eq!(
            ctx.attendant.available_spots(),
            before - 1,
            "Parking a vehicle must take exactly one spot."
        );
    }
    Ok(tickets)
}
