use std::io::ErrorKind;

use carpark_core::FeeSchedule;
use eyre::{eyre, Result};
use serde::Deserialize;

const SETTINGS_FILE: &str = "parking.toml";

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub struct ParkingSettings {
    #[serde(default = "default_floors")]
    pub floors: u32,
    #[serde(default = "default_spots")]
    pub spots_per_floor: u32,

    #[serde(default)]
    pub fees: FeeSettings,
}

#[derive(Clone, Copy, Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub struct FeeSettings {
    pub first_hour: u32,
    pub second_hour: u32,
    pub succeeding_hour: u32,
}

impl Default for FeeSettings {
    fn default() -> Self {
        FeeSchedule::default().into()
    }
}

impl From<FeeSchedule> for FeeSettings {
    fn from(fees: FeeSchedule) -> Self {
        Self {
            first_hour: fees.first_hour,
            second_hour: fees.second_hour,
            succeeding_hour: fees.succeeding_hour,
        }
    }
}

impl From<FeeSettings> for FeeSchedule {
    fn from(fees: FeeSettings) -> Self {
        Self {
            first_hour: fees.first_hour,
            second_hour: fees.second_hour,
            succeeding_hour: fees.succeeding_hour,
        }
    }
}

fn default_floors() -> u32 {
    3
}

fn default_spots() -> u32 {
    20
}

impl Default for ParkingSettings {
    fn default() -> Self {
        Self {
            floors: default_floors(),
            spots_per_floor: default_spots(),
            fees: FeeSettings::default(),
        }
    }
}

impl ParkingSettings {
    /// Load `parking.toml` from the current directory or one of its parents,
    /// falling back to the defaults if there is none.
    pub fn load() -> Result<Self> {
        let mut path = std::env::current_dir()?;
        let contents = loop {
            path.push(SETTINGS_FILE);

            match std::fs::read_to_string(&path) {
                Ok(s) => break Some(s),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }

            path.pop();
            if !path.pop() {
                break None;
            }
        };

        let mut settings = match contents {
            Some(contents) => toml::from_str(&contents)?,
            None => ParkingSettings::default(),
        };

        if let Some(floors) = env_u32("PL_FLOORS")? {
            settings.floors = floors;
        }
        if let Some(spots) = env_u32("PL_SPOTS")? {
            settings.spots_per_floor = spots;
        }

        Ok(settings)
    }
}

fn env_u32(name: &str) -> Result<Option<u32>> {
    match std::env::var(name) {
        Ok(v) => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| eyre!("{name} must be a decimal u32, got `{v}`")),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
