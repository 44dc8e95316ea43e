//! Tiered, duration based parking fees

use chrono::Duration;

const SECS_PER_HOUR: i64 = 3_600;

/// Flat rates charged for a parking session
///
/// The first hour costs `first_hour`. Anything up to three hours adds
/// `second_hour` once. Every started hour beyond three adds `succeeding_hour`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FeeSchedule {
    /// Charge for a stay of at most one hour
    pub first_hour: u32,
    /// Added once for a stay longer than one hour
    pub second_hour: u32,
    /// Added for every started hour after the third
    pub succeeding_hour: u32,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            first_hour: 4,
            second_hour: 3,
            succeeding_hour: 2,
        }
    }
}

impl FeeSchedule {
    /// Compute the charge for a stay of length `elapsed`.
    ///
    /// Sub-second remainders are dropped and negative durations count as zero.
    pub fn charge_for(&self, elapsed: Duration) -> u32 {
        // whole seconds only: 3h + 500ms bills as exactly 3h
        let secs = elapsed.num_seconds().max(0);

        if secs <= SECS_PER_HOUR {
            return self.first_hour;
        }

        let base = self.first_hour.saturating_add(self.second_hour);
        if secs <= 3 * SECS_PER_HOUR {
            return base;
        }

        // every started hour past the third is billed in full
        let extra = secs - 3 * SECS_PER_HOUR;
        let hours = (extra + SECS_PER_HOUR - 1) / SECS_PER_HOUR;
        let hours = u32::try_from(hours).unwrap_or(u32::MAX);
        base.saturating_add(self.succeeding_hour.saturating_mul(hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charge(secs: i64) -> u32 {
        FeeSchedule::default().charge_for(Duration::seconds(secs))
    }

    #[test]
    fn first_hour_is_flat() {
        assert_eq!(charge(0), 4);
        assert_eq!(charge(59 * 60), 4);
        assert_eq!(charge(SECS_PER_HOUR), 4);
    }

    #[test]
    fn up_to_three_hours_adds_second_hour_once() {
        assert_eq!(charge(SECS_PER_HOUR + 1), 7);
        assert_eq!(charge(2 * SECS_PER_HOUR), 7);
        assert_eq!(charge(3 * SECS_PER_HOUR), 7);
    }

    #[test]
    fn started_hours_after_three_round_up() {
        assert_eq!(charge(3 * SECS_PER_HOUR + 1), 9);
        assert_eq!(charge(4 * SECS_PER_HOUR), 9);
        assert_eq!(charge(4 * SECS_PER_HOUR + 30 * 60), 11);
        assert_eq!(charge(10 * SECS_PER_HOUR), 7 + 2 * 7);
    }

    #[test]
    fn sub_second_remainder_is_dropped() {
        let fees = FeeSchedule::default();
        let just_over = Duration::hours(3) + Duration::milliseconds(500);
        assert_eq!(fees.charge_for(just_over), 7);
        assert_eq!(fees.charge_for(just_over + Duration::milliseconds(500)), 9);
    }

    #[test]
    fn negative_duration_is_first_hour() {
        assert_eq!(charge(-5 * SECS_PER_HOUR), 4);
    }

    #[test]
    fn custom_rates() {
        let fees = FeeSchedule {
            first_hour: 10,
            second_hour: 5,
            succeeding_hour: 1,
        };
        assert_eq!(fees.charge_for(Duration::minutes(30)), 10);
        assert_eq!(fees.charge_for(Duration::hours(2)), 15);
        assert_eq!(fees.charge_for(Duration::hours(6)), 18);
    }
}
