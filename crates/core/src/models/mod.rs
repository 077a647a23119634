//! Trip data models and errors.

pub mod types;

// Re-exports for convenience
pub use types::{
    Day, DayColor, DayPlan, GeometryKind, LatLng, Place, PlanError, PlannedPlace, PlannedRoute,
    Result, RouteInput,
};
