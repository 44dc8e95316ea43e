//! Demo driving a parking lot through a customer's visit

#![warn(missing_docs)]

mod demo;

use carpark_core::{Config, Vehicle, VehicleSize, VehicleType};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command line options
#[derive(Debug)]
struct Opts {
    /// Configuration of the parking lot
    config: Config,

    /// License plate of the demo customer's vehicle
    plate: String,
    /// Size class of the demo customer's vehicle
    size: VehicleSize,
    /// Simulated length of stay in hours, random if unset
    stay_hours: Option<u32>,
}

impl Opts {
    fn from_args() -> Self {
        let mut opts = Opts {
            config: Config::default(),
            plate: String::from("ABC123"),
            size: VehicleSize::Medium,
            stay_hours: None,
        };

        let mut option: Option<String> = None;
        for arg in std::env::args().skip(1) {
            if let Some(opt) = option {
                match opt.as_str() {
                    "-floors" => {
                        opts.config.floors = arg.parse().expect("-floors takes a decimal u32")
                    }
                    "-spots" => {
                        opts.config.spots_per_floor =
                            arg.parse().expect("-spots takes a decimal u32")
                    }
                    "-stay-hours" => {
                        opts.stay_hours =
                            Some(arg.parse().expect("-stay-hours takes a decimal u32"))
                    }
                    "-name" => opts.config.name = arg,
                    "-address" => opts.config.address = arg,
                    "-plate" => opts.plate = arg,
                    "-size" => {
                        opts.size = arg
                            .parse()
                            .expect("-size takes one of small, medium or large")
                    }
                    _ => {
                        eprintln!("Error: ignoring unknown option {opt}");
                        std::process::exit(1);
                    }
                }
                option = None;
            } else {
                option = Some(arg);
            }
        }
        if let Some(opt) = option {
            eprintln!("Error: ignoring leftover option {opt}");
            std::process::exit(1);
        }

        opts
    }
}

fn main() {
    let opts = Opts::from_args();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let vehicle = Vehicle::new(
        opts.plate,
        VehicleType {
            wheel_count: VehicleType::CAR.wheel_count,
            size: opts.size,
        },
    );
    if let Err(err) = demo::run(&opts.config, vehicle, opts.stay_hours) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
