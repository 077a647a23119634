//! Bounds and camera helpers for planned places.

pub mod bounds;
pub mod viewport;

pub use bounds::place_bounds;
pub use viewport::{FOCUS_ZOOM, FitOptions, Viewport};
