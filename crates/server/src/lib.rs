//! HTTP surface for trip day plans.
//!
//! - `POST /plan`: markers, routes and a fitted viewport as JSON
//! - `POST /plan/geojson`: the same plan as a GeoJSON FeatureCollection
//! - `GET /health`

pub mod config;
pub mod error;
pub mod routes;
mod server;

pub use config::Config;
pub use routes::create_router;
pub use server::MapServer;
