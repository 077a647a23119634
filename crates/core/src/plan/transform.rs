//! Flattening of a trip's days into map markers and route lines.

use rand::Rng;
use tracing::debug;

use crate::models::{Day, DayPlan, PlannedPlace, PlannedRoute};
use crate::palette::color_for_day;

/// Process days with the thread-local RNG for fallback colors.
///
/// Days past the palette get a fresh random color on every call.
pub fn process_days(days: &[Day]) -> DayPlan {
    process_days_with(days, &mut rand::rng())
}

/// Flatten `days` into numbered, colored places and colored routes.
///
/// Places keep day-major order and are numbered from 1 within their day.
/// Every place carrying a route contributes exactly one route, with its
/// coordinates swapped into `[lng, lat]` order. Coordinates are not checked
/// here; see [`super::validate_days`].
pub fn process_days_with<R: Rng + ?Sized>(days: &[Day], rng: &mut R) -> DayPlan {
    let place_count = days.iter().map(|day| day.places.len()).sum();
    let mut places = Vec::with_capacity(place_count);
    let mut routes = Vec::new();

    for (day_index, day) in days.iter().enumerate() {
        let color = color_for_day(day_index, rng);

        for (index, place) in day.places.iter().enumerate() {
            if let Some(route) = &place.route {
                routes.push(PlannedRoute {
                    kind: route.kind.clone(),
                    coordinates: route.coordinates.iter().map(|c| c.to_lng_lat()).collect(),
                    color: color.clone(),
                });
            }

            places.push(PlannedPlace {
                place: place.clone(),
                color: color.clone(),
                number: index + 1,
                day: day_index,
            });
        }
    }

    debug!(
        "processed {} days into {} places and {} routes",
        days.len(),
        places.len(),
        routes.len()
    );

    DayPlan { places, routes }
}
