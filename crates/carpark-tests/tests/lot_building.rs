use carpark_core::{Config, ParkError, PaymentMethod, SpotLocation};
use carpark_engine::{build_lot, ParkingFloor, ParkingLot, ParkingSpot};
use carpark_tests::car;
use chrono::{TimeZone, Utc};
use eyre::Result;

#[test]
#[ntest::timeout(5_000)]
fn test_build_lot_numbers_floors_spots_and_admins() -> Result<()> {
    let config = Config {
        floors: 4,
        spots_per_floor: 3,
        ..Config::default()
    };
    let lot = build_lot(&config)?;

    let admins: Vec<_> = lot.admins().iter().map(|a| a.name().to_owned()).collect();
    assert_eq!(admins, ["Admin 1", "Admin 2", "Admin 3", "Admin 4"]);

    let floors: Vec<_> = lot.floors().iter().map(ParkingFloor::number).collect();
    assert_eq!(floors, [1, 2, 3, 4]);
    for floor in lot.floors() {
        let spots: Vec<_> = floor.spots().iter().map(ParkingSpot::number).collect();
        assert_eq!(spots, [1, 2, 3], "Spots must be numbered from 1 on every floor.");
        assert!(floor.spots().iter().all(|s| s.floor() == floor.number()));
    }
    assert_eq!(lot.capacity(), 12);
    assert_eq!(lot.available_spots(), 12);
    Ok(())
}

#[test]
#[ntest::timeout(5_000)]
fn test_lot_rejects_clashing_locations() -> Result<()> {
    let mut lot = ParkingLot::new("Test", "Nowhere", 4, Config::default().fees);
    lot.add_floor(ParkingFloor::with_spots(1, 1))?;

    assert_eq!(
        lot.add_floor(ParkingFloor::with_spots(1, 1)),
        Err(ParkError::DuplicateFloor(1)),
        "Two floors must not share a number."
    );

    let mut floor = ParkingFloor::new(2);
    floor.add_spot(ParkingSpot::new(1, 2))?;
    assert_eq!(
        floor.add_spot(ParkingSpot::new(1, 2)),
        Err(ParkError::DuplicateSpot(SpotLocation { floor: 2, spot: 1 }))
    );
    assert_eq!(
        floor.add_spot(ParkingSpot::new(2, 1)),
        Err(ParkError::MisplacedSpot(SpotLocation { floor: 1, spot: 2 }, 2))
    );
    lot.add_floor(floor)?;
    assert_eq!(lot.available_spots(), 2);
    Ok(())
}

#[test]
#[ntest::timeout(5_000)]
fn test_check_out_keeps_other_vehicles_parked() -> Result<()> {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    let mut lot = ParkingLot::new("Test", "Nowhere", 2, Config::default().fees);
    lot.add_floor(ParkingFloor::with_spots(1, 1))?;
    lot.add_floor(ParkingFloor::with_spots(2, 1))?;

    lot.enter(car("A"), now)?;
    let b = lot.enter(car("B"), now)?;
    lot.check_out(b.number(), PaymentMethod::Cash, now)?;

    assert_eq!(
        lot.locate("A"),
        Some(SpotLocation { floor: 1, spot: 1 }),
        "Checking out B must not evict A."
    );
    assert_eq!(lot.locate("B"), None);
    assert_eq!(lot.available_spots(), 1);
    Ok(())
}
