//! Coordinate checks run before a trip is planned.

use crate::models::{Day, LatLng, PlanError, Result};

fn in_range(lat: f64, lng: f64) -> bool {
    lat.is_finite()
        && lng.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng)
}

/// Reject the first place or route coordinate that is not a finite
/// latitude/longitude within range.
pub fn validate_days(days: &[Day]) -> Result<()> {
    for (day, d) in days.iter().enumerate() {
        for (place, p) in d.places.iter().enumerate() {
            if !in_range(p.latitude, p.longitude) {
                return Err(PlanError::InvalidPlaceCoordinate {
                    day,
                    place,
                    latitude: p.latitude,
                    longitude: p.longitude,
                });
            }

            let Some(route) = &p.route else { continue };
            if let Some((coordinate, &LatLng { lat, lng })) = route
                .coordinates
                .iter()
                .enumerate()
                .find(|(_, c)| !in_range(c.lat, c.lng))
            {
                return Err(PlanError::InvalidRouteCoordinate {
                    day,
                    place,
                    coordinate,
                    lat,
                    lng,
                });
            }
        }
    }

    Ok(())
}
