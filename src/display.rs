//! Text derived from the charge: the time-remaining estimate and the status line.
//! Both are pure and recomputed on every render.

use crate::model::Charge;
use crate::util::{FULLY_CHARGED, format_time};

pub const FULL_THRESHOLD: u8 = 99;
pub const ALMOST_THRESHOLD: u8 = 80;
pub const CHARGING_THRESHOLD: u8 = 30;

/// Rough time until full. Charging slows down as the battery fills, so the
/// minutes-per-percent rate rises in bands.
pub fn time_remaining(charge: Charge) -> String {
    let remaining = u32::from(charge.remaining());
    match remaining {
        0..=1 => FULLY_CHARGED.to_string(),
        2..=5 => format_time(0, remaining),
        // floor(r * 1.2)
        6..=20 => format_time(0, remaining * 6 / 5),
        // floor(r * 1.5)
        21..=50 => {
            let minutes = remaining * 3 / 2;
            format_time(minutes / 60, minutes % 60)
        }
        _ => format_time(remaining / 20, (remaining % 20) * 3),
    }
}

pub fn status_message(charge: Charge) -> &'static str {
    match charge.value() {
        v if v >= FULL_THRESHOLD => FULLY_CHARGED,
        v if v >= ALMOST_THRESHOLD => "almost charged",
        v if v >= CHARGING_THRESHOLD => "charging...",
        _ => "low battery",
    }
}
