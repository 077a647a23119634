//! Day colors: a fixed palette for the first days of a trip, random light
//! colors after that.

use rand::Rng;

use crate::models::DayColor;

pub static PALETTE: [DayColor; 10] = [
    DayColor::from_static("#00c8ff"),
    DayColor::from_static("#8e8ee0"),
    DayColor::from_static("#ed7fcc"),
    DayColor::from_static("#f1a731"),
    DayColor::from_static("#41e26c"),
    DayColor::from_static("#2ddde3"),
    DayColor::from_static("#2c4ae0"),
    DayColor::from_static("#83d685"),
    DayColor::from_static("#dc9a61"),
    DayColor::from_static("#dc618a"),
];

/// Hex digits used for fallback colors. Restricting to B..F keeps every
/// channel at 0xBB or above.
pub const LIGHT_DIGITS: &[u8; 5] = b"BCDEF";

/// Color for the day at `day_index`.
///
/// Only consumes randomness once the palette is exhausted, so a seeded `rng`
/// makes the whole plan reproducible.
pub fn color_for_day<R: Rng + ?Sized>(day_index: usize, rng: &mut R) -> DayColor {
    match PALETTE.get(day_index) {
        Some(color) => color.clone(),
        None => random_light_color(rng),
    }
}

pub fn random_light_color<R: Rng + ?Sized>(rng: &mut R) -> DayColor {
    let mut color = String::with_capacity(7);
    color.push('#');
    for _ in 0..6 {
        color.push(LIGHT_DIGITS[rng.random_range(0..LIGHT_DIGITS.len())] as char);
    }
    DayColor::from(color)
}
