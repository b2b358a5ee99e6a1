use shared::Coordinate;

use crate::time::minute_of_hour;

/// Reduce a position log to the entries worth pinning: the sentinel first,
/// then the first sample of every run whose minute-of-hour differs from the
/// last kept one.
///
/// The comparison is against the last kept minute only. A minute value that
/// comes back later (an hour rollover, out-of-order samples) is kept again;
/// this is a change detector, not a once-per-value dedup. A sample whose
/// timestamp does not parse compares unequal to everything, including a
/// preceding unparseable one, so such samples are always kept and force the
/// next sample to be kept as well.
pub fn pin_positions(positions: &[Coordinate]) -> Vec<Coordinate> {
    let mut pins = vec![Coordinate::sentinel()];
    let mut last_minute: Option<u32> = None;

    for position in positions {
        let minute = minute_of_hour(&position.timestamp);
        if minute.is_none() || minute != last_minute {
            pins.push(position.clone());
            last_minute = minute;
        }
    }

    pins
}
