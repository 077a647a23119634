//! GeoJSON sources for the trip map: numbered markers and colored lines.

use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;
use tracing::warn;

use crate::models::{DayPlan, GeometryKind, PlannedPlace, PlannedRoute};

/// Line width the trip map draws routes with, in pixels.
pub const ROUTE_LINE_WIDTH: u32 = 5;

fn place_to_feature(planned: &PlannedPlace) -> Feature {
    let place = &planned.place;

    let mut properties = JsonObject::new();
    properties.insert("feature_type".to_string(), json!("place"));
    properties.insert("name".to_string(), json!(place.name));
    properties.insert("color".to_string(), json!(planned.color.as_str()));
    properties.insert("number".to_string(), json!(planned.number));
    properties.insert("day".to_string(), json!(planned.day));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![
            place.longitude,
            place.latitude,
        ]))),
        id: place
            .id
            .as_ref()
            .filter(|id| !id.is_empty())
            .map(|id| Id::String(id.as_str().to_owned())),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// `None` when the route cannot be drawn as a line layer.
fn route_to_feature(route: &PlannedRoute, index: usize) -> Option<Feature> {
    if route.kind != GeometryKind::LineString {
        warn!("skipping route {index}: unsupported geometry type {}", route.kind);
        return None;
    }
    if route.coordinates.len() < 2 {
        warn!(
            "skipping route {index}: {} coordinates is too few for a line",
            route.coordinates.len()
        );
        return None;
    }

    let positions = route.coordinates.iter().map(|c| c.to_vec()).collect();

    let mut properties = JsonObject::new();
    properties.insert("feature_type".to_string(), json!("route"));
    properties.insert("color".to_string(), json!(route.color.as_str()));
    properties.insert("line_width".to_string(), json!(ROUTE_LINE_WIDTH));
    properties.insert("index".to_string(), json!(index));

    Some(Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::LineString(positions))),
        id: Some(Id::String(format!("route-{index}"))),
        properties: Some(properties),
        foreign_members: None,
    })
}

/// Places first, then routes, each in plan order.
pub fn to_feature_collection(plan: &DayPlan) -> FeatureCollection {
    let features = plan
        .places
        .iter()
        .map(place_to_feature)
        .chain(
            plan.routes
                .iter()
                .enumerate()
                .filter_map(|(i, route)| route_to_feature(route, i)),
        )
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
