use std::fmt;
use std::str::FromStr;

/// Size class of a vehicle
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum VehicleSize {
    /// Motorbikes and the like
    Small,
    /// Regular cars
    Medium,
    /// Vans and trucks
    Large,
}

impl fmt::Display for VehicleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        })
    }
}

impl FromStr for VehicleSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("small") {
            Ok(Self::Small)
        } else if s.eq_ignore_ascii_case("medium") {
            Ok(Self::Medium)
        } else if s.eq_ignore_ascii_case("large") {
            Ok(Self::Large)
        } else {
            Err(format!("unknown vehicle size `{s}`"))
        }
    }
}

/// Category of a vehicle
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct VehicleType {
    /// Number of wheels
    pub wheel_count: u8,
    /// Size class
    pub size: VehicleSize,
}

impl VehicleType {
    /// A four-wheeled, medium sized car
    pub const CAR: VehicleType = VehicleType {
        wheel_count: 4,
        size: VehicleSize::Medium,
    };
}

/// A vehicle entering the lot
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Vehicle {
    license_plate: String,
    vehicle_type: VehicleType,
}

impl Vehicle {
    /// Create a new [`Vehicle`]
    pub fn new(license_plate: impl Into<String>, vehicle_type: VehicleType) -> Self {
        Self {
            license_plate: license_plate.into(),
            vehicle_type,
        }
    }

    /// Get the license plate
    #[inline]
    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    /// Get the vehicle's category
    #[inline]
    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }
}
