//! Turning trip days into something a map can draw.

pub mod transform;
pub mod validate;

use rand::Rng;

use crate::models::{Day, DayPlan, Result};

pub use transform::{process_days, process_days_with};
pub use validate::validate_days;

/// Validate `days`, then process them.
pub fn plan_days<R: Rng + ?Sized>(days: &[Day], rng: &mut R) -> Result<DayPlan> {
    validate_days(days)?;
    Ok(process_days_with(days, rng))
}
