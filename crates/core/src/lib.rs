//! # tripmap-core
//!
//! Day-by-day trip plans shaped for an interactive map.
//!
//! - **Day plans**: flatten days of places into numbered, per-day colored
//!   markers and route lines
//! - **Validation**: reject out-of-range coordinates before planning
//! - **Viewport**: fit-bounds camera for the planned places
//! - **GeoJSON**: marker and line sources for map layers
//!
//! ## Example
//!
//! ```
//! use tripmap_core::prelude::*;
//!
//! let days = vec![Day::new(vec![
//!     Place::new("Hotel", 1.0, 2.0),
//!     Place::new("Museum", 3.0, 4.0).with_route(RouteInput::line_string(vec![
//!         LatLng::new(1.0, 2.0),
//!         LatLng::new(3.0, 4.0),
//!     ])),
//! ])];
//!
//! let plan = process_days(&days);
//! assert_eq!(plan.places[1].number, 2);
//! assert_eq!(plan.routes[0].coordinates, vec![[2.0, 1.0], [4.0, 3.0]]);
//! assert_eq!(plan.routes[0].color.as_str(), "#00c8ff");
//! ```

pub mod export;
pub mod identifiers;
pub mod models;
pub mod palette;
pub mod plan;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::export::to_feature_collection;
    pub use crate::identifiers::PlaceIdentifier;
    pub use crate::models::types::*;
    pub use crate::palette::{PALETTE, color_for_day};
    pub use crate::plan::{plan_days, process_days, process_days_with, validate_days};
    pub use crate::spatial::{FOCUS_ZOOM, FitOptions, Viewport};
}

pub use prelude::*;
