//! Map camera placement.
//!
//! Fitting works in normalized Web Mercator space (`x`, `y` in `0..1`, `y = 0`
//! at the north edge) with 512 px tiles, the same math the map widget uses for
//! its fit-bounds.

use std::f64::consts::PI;

use geo::Rect;
use serde::{Deserialize, Serialize};

use crate::models::PlannedPlace;
use crate::spatial::bounds::place_bounds;

pub const TILE_SIZE: f64 = 512.0;
/// Latitude limit of the Web Mercator projection.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;
/// Zoom used when flying to a single place.
pub const FOCUS_ZOOM: f64 = 14.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitOptions {
    /// Screen-space padding on every side, in pixels.
    pub padding: f64,
    pub max_zoom: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding: 50.0,
            max_zoom: 15.0,
        }
    }
}

fn mercator_x(lng: f64) -> f64 {
    (lng + 180.0) / 360.0
}

fn mercator_y(lat: f64) -> f64 {
    let sin = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians().sin();
    0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI)
}

fn longitude_of(x: f64) -> f64 {
    x * 360.0 - 180.0
}

fn latitude_of(y: f64) -> f64 {
    (PI - 2.0 * PI * y).sinh().atan().to_degrees()
}

/// Largest zoom at which `span` (normalized) fits in `pixels`.
fn zoom_for_span(span: f64, pixels: f64) -> f64 {
    if span > 0.0 {
        (pixels / (TILE_SIZE * span)).log2()
    } else {
        f64::INFINITY
    }
}

impl Viewport {
    /// Whole-world view shown before any place is added.
    pub const DEFAULT: Viewport = Viewport {
        longitude: 0.0,
        latitude: 0.0,
        zoom: 1.5,
    };

    /// Center on a single place, keeping the given zoom.
    pub fn focus(planned: &PlannedPlace, zoom: f64) -> Self {
        Self {
            longitude: planned.place.longitude,
            latitude: planned.place.latitude,
            zoom,
        }
    }

    /// Fit all `places` into a `width` x `height` pixel map.
    pub fn fit<'a>(
        places: impl IntoIterator<Item = &'a PlannedPlace>,
        width: f64,
        height: f64,
        options: FitOptions,
    ) -> Self {
        match place_bounds(places) {
            Some(rect) => Self::fit_bounds(rect, width, height, options),
            None => Self::DEFAULT,
        }
    }

    pub fn fit_bounds(rect: Rect, width: f64, height: f64, options: FitOptions) -> Self {
        let x0 = mercator_x(rect.min().x);
        let x1 = mercator_x(rect.max().x);
        // North edge has the smaller y
        let y0 = mercator_y(rect.max().y);
        let y1 = mercator_y(rect.min().y);

        let available_width = (width - 2.0 * options.padding).max(1.0);
        let available_height = (height - 2.0 * options.padding).max(1.0);

        let zoom = zoom_for_span(x1 - x0, available_width)
            .min(zoom_for_span(y1 - y0, available_height))
            .min(options.max_zoom)
            .max(0.0);

        Self {
            longitude: longitude_of((x0 + x1) / 2.0),
            latitude: latitude_of((y0 + y1) / 2.0),
            zoom,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DEFAULT
    }
}
