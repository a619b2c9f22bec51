//! Time rounding onto a configurable interval grid.
//!
//! Rounding adjusts a time-of-day to a grid of `interval_minutes` spacing,
//! anchored either at midnight or at the plan's own arrival window start.
//! Absent or disabled configuration is a defensive no-op: the input passes
//! through unchanged and rounding never errors.

use crate::config::{RoundingAnchor, RoundingConfig, RoundingType};

/// Rounds a time-of-day according to the given configuration.
///
/// * `None` config, [`RoundingType::None`], or a non-positive interval
///   return the input unchanged.
/// * `Up`/`Down`/`Nearest` compute the remainder relative to the grid
///   origin and adjust. `Nearest` rounds up on exact ties.
/// * `Add`/`Subtract` apply the fixed `offset_minutes` regardless of the
///   interval.
///
/// The grid origin is minute 0 for [`RoundingAnchor::Midnight`] and
/// `plan_start` for [`RoundingAnchor::PlanStart`].
///
/// # Example
///
/// ```
/// use time_engine::calculation::round_time;
/// use time_engine::config::{RoundingAnchor, RoundingConfig, RoundingType};
///
/// let cfg = RoundingConfig {
///     rounding_type: RoundingType::Up,
///     interval_minutes: 15,
///     anchor: RoundingAnchor::Midnight,
///     offset_minutes: 0,
/// };
/// assert_eq!(round_time(481, Some(&cfg), 0), 495);
/// assert_eq!(round_time(480, Some(&cfg), 0), 480); // already aligned
/// ```
pub fn round_time(minutes: i32, cfg: Option<&RoundingConfig>, plan_start: i32) -> i32 {
    let Some(cfg) = cfg else {
        return minutes;
    };

    match cfg.rounding_type {
        RoundingType::None => minutes,
        RoundingType::Add => minutes + cfg.offset_minutes,
        RoundingType::Subtract => minutes - cfg.offset_minutes,
        RoundingType::Up | RoundingType::Down | RoundingType::Nearest => {
            let interval = cfg.interval_minutes;
            if interval <= 0 {
                return minutes;
            }

            let origin = match cfg.anchor {
                RoundingAnchor::Midnight => 0,
                RoundingAnchor::PlanStart => plan_start,
            };

            let remainder = (minutes - origin).rem_euclid(interval);
            if remainder == 0 {
                return minutes;
            }

            let round_up = match cfg.rounding_type {
                RoundingType::Up => true,
                RoundingType::Down => false,
                // Nearest: tie rounds up
                _ => remainder * 2 >= interval,
            };
            if round_up {
                minutes + (interval - remainder)
            } else {
                minutes - remainder
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(rounding_type: RoundingType, interval: i32) -> RoundingConfig {
        RoundingConfig {
            rounding_type,
            interval_minutes: interval,
            anchor: RoundingAnchor::Midnight,
            offset_minutes: 0,
        }
    }

    #[test]
    fn test_no_config_is_identity() {
        assert_eq!(round_time(481, None, 0), 481);
    }

    #[test]
    fn test_type_none_is_identity() {
        assert_eq!(round_time(481, Some(&cfg(RoundingType::None, 15)), 0), 481);
    }

    #[test]
    fn test_zero_interval_is_identity() {
        assert_eq!(round_time(481, Some(&cfg(RoundingType::Up, 0)), 0), 481);
        assert_eq!(round_time(481, Some(&cfg(RoundingType::Down, -5)), 0), 481);
    }

    /// RD-001: round up, interval 15: 481 -> 495; aligned input unchanged.
    #[test]
    fn test_round_up_interval_15() {
        let c = cfg(RoundingType::Up, 15);
        assert_eq!(round_time(481, Some(&c), 0), 495);
        assert_eq!(round_time(480, Some(&c), 0), 480);
        assert_eq!(round_time(494, Some(&c), 0), 495);
    }

    #[test]
    fn test_round_down_interval_15() {
        let c = cfg(RoundingType::Down, 15);
        assert_eq!(round_time(494, Some(&c), 0), 480);
        assert_eq!(round_time(480, Some(&c), 0), 480);
    }

    /// RD-002: nearest with interval 10, exactly 5 past the boundary rounds up.
    #[test]
    fn test_round_nearest_tie_goes_up() {
        let c = cfg(RoundingType::Nearest, 10);
        assert_eq!(round_time(485, Some(&c), 0), 490);
        assert_eq!(round_time(484, Some(&c), 0), 480);
        assert_eq!(round_time(486, Some(&c), 0), 490);
    }

    #[test]
    fn test_round_nearest_odd_interval() {
        let c = cfg(RoundingType::Nearest, 7);
        // remainder 3 of 7: 3*2 < 7, rounds down
        assert_eq!(round_time(10, Some(&c), 0), 7);
        // remainder 4 of 7: 4*2 >= 7, rounds up
        assert_eq!(round_time(11, Some(&c), 0), 14);
    }

    #[test]
    fn test_add_and_subtract_offsets() {
        let mut c = cfg(RoundingType::Add, 0);
        c.offset_minutes = 5;
        assert_eq!(round_time(480, Some(&c), 0), 485);

        c.rounding_type = RoundingType::Subtract;
        assert_eq!(round_time(480, Some(&c), 0), 475);
    }

    #[test]
    fn test_plan_start_anchor_shifts_grid() {
        let c = RoundingConfig {
            rounding_type: RoundingType::Up,
            interval_minutes: 15,
            anchor: RoundingAnchor::PlanStart,
            offset_minutes: 0,
        };
        // Grid origin 07:05 (425): points at 425, 440, 455, ...
        assert_eq!(round_time(426, Some(&c), 425), 440);
        assert_eq!(round_time(440, Some(&c), 425), 440);
        // Before the origin the euclidean remainder still lands on the grid
        assert_eq!(round_time(420, Some(&c), 425), 425);
    }

    #[test]
    fn test_idempotence_on_aligned_values() {
        for t in [RoundingType::Up, RoundingType::Down, RoundingType::Nearest] {
            let c = cfg(t, 15);
            for m in (0..1440).step_by(15) {
                let m = m as i32;
                assert_eq!(round_time(m, Some(&c), 0), m);
                let once = round_time(m + 7, Some(&c), 0);
                assert_eq!(round_time(once, Some(&c), 0), once);
            }
        }
    }
}
