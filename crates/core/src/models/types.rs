//! Core data types for trips and processed day plans.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::identifiers::PlaceIdentifier;

// ============================================================================
// Input
// ============================================================================

/// Coordinate as the trip editor stores it: latitude first.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Swap into the `[longitude, latitude]` order map layers expect.
    pub fn to_lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

/// Geometry type tag of a route as returned by the directions service.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GeometryKind {
    LineString,
    Other(Arc<str>),
}

impl GeometryKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::LineString => "LineString",
            Self::Other(kind) => kind,
        }
    }
}

impl From<String> for GeometryKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "LineString" => Self::LineString,
            _ => Self::Other(s.into()),
        }
    }
}

impl From<GeometryKind> for String {
    fn from(kind: GeometryKind) -> Self {
        kind.as_str().to_owned()
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Route geometry attached to a place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteInput {
    #[serde(rename = "type")]
    pub kind: GeometryKind,
    #[serde(default)]
    pub coordinates: Vec<LatLng>,
}

impl RouteInput {
    pub fn line_string(coordinates: Vec<LatLng>) -> Self {
        Self {
            kind: GeometryKind::LineString,
            coordinates,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PlaceIdentifier>,
    pub name: String,
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng")]
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteInput>,
}

impl Place {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            latitude,
            longitude,
            route: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<PlaceIdentifier>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_route(mut self, route: RouteInput) -> Self {
        self.route = Some(route);
        self
    }

    pub fn position(&self) -> geo::Point {
        geo::Point::new(self.longitude, self.latitude)
    }
}

/// One day of a trip itinerary.
///
/// The day-level `route` is carried through deserialization but only
/// per-place routes reach the map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Day {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub places: Vec<Place>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteInput>,
}

/// The trip editor sends `null` for a day whose place list was never filled.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Place>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Place>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Day {
    pub fn new(places: Vec<Place>) -> Self {
        Self {
            places,
            route: None,
        }
    }
}

// ============================================================================
// Output
// ============================================================================

/// Display color shared by every marker and line of a day.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayColor(Cow<'static, str>);

impl DayColor {
    pub const fn from_static(color: &'static str) -> Self {
        Self(Cow::Borrowed(color))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for DayColor {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

impl fmt::Display for DayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A place annotated for display as a numbered map marker.
///
/// Serializes with the input place's fields inlined; coordinates always come
/// out as `latitude`/`longitude`, even when the input used `lat`/`lng`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannedPlace {
    #[serde(flatten)]
    pub place: Place,
    pub color: DayColor,
    /// 1-based position within its day.
    pub number: usize,
    /// 0-based index of the owning day.
    pub day: usize,
}

/// A route line ready for a map layer, coordinates in `[lng, lat]` order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannedRoute {
    #[serde(rename = "type")]
    pub kind: GeometryKind,
    pub coordinates: Vec<[f64; 2]>,
    pub color: DayColor,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub places: Vec<PlannedPlace>,
    pub routes: Vec<PlannedRoute>,
}

impl DayPlan {
    pub fn is_empty(&self) -> bool {
        self.places.is_empty() && self.routes.is_empty()
    }

    pub fn find_place(&self, id: &PlaceIdentifier) -> Option<&PlannedPlace> {
        self.places
            .iter()
            .find(|planned| planned.place.id.as_ref() == Some(id))
    }

    /// Places of a single day, in visiting order.
    pub fn places_for_day(&self, day: usize) -> impl Iterator<Item = &PlannedPlace> {
        self.places.iter().filter(move |planned| planned.day == day)
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Rejections raised by trip validation. Indices are 0-based.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    #[error("Invalid coordinate ({latitude}, {longitude}) for place {place} of day {day}")]
    InvalidPlaceCoordinate {
        day: usize,
        place: usize,
        latitude: f64,
        longitude: f64,
    },

    #[error(
        "Invalid route coordinate {coordinate} ({lat}, {lng}) for place {place} of day {day}"
    )]
    InvalidRouteCoordinate {
        day: usize,
        place: usize,
        coordinate: usize,
        lat: f64,
        lng: f64,
    },
}

pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_swap() {
        let coord = LatLng::new(25.03, 121.56);
        assert_eq!(coord.to_lng_lat(), [121.56, 25.03]);
    }

    #[test]
    fn test_geometry_kind_from_string() {
        assert_eq!(GeometryKind::from("LineString".to_owned()), GeometryKind::LineString);
        let other = GeometryKind::from("MultiLineString".to_owned());
        assert_eq!(other.as_str(), "MultiLineString");
        assert_eq!(String::from(other), "MultiLineString");
    }

    #[test]
    fn test_place_accepts_short_coordinate_names() {
        let json = r#"{ "id": "p1", "name": "Taipei 101", "lat": 25.03, "lng": 121.56 }"#;
        let place: Place = serde_json::from_str(json).unwrap();

        assert_eq!(place.id, Some(PlaceIdentifier::new("p1")));
        assert_eq!(place.latitude, 25.03);
        assert_eq!(place.longitude, 121.56);
        assert!(place.route.is_none());
    }

    #[test]
    fn test_day_without_places() {
        let day: Day = serde_json::from_str("{}").unwrap();
        assert!(day.places.is_empty());
        assert!(day.route.is_none());
    }

    #[test]
    fn test_day_with_null_places() {
        let day: Day = serde_json::from_str(r#"{ "places": null }"#).unwrap();
        assert!(day.places.is_empty());

        let json = r#"[{ "places": null }, { "places": [{ "name": "a", "lat": 1, "lng": 2 }] }]"#;
        let days: Vec<Day> = serde_json::from_str(json).unwrap();
        assert!(days[0].places.is_empty());
        assert_eq!(days[1].places.len(), 1);
    }

    #[test]
    fn test_route_deserializes_type_tag() {
        let json = r#"{ "type": "LineString", "coordinates": [{ "lat": 1, "lng": 2 }] }"#;
        let route: RouteInput = serde_json::from_str(json).unwrap();

        assert_eq!(route.kind, GeometryKind::LineString);
        assert_eq!(route.coordinates, vec![LatLng::new(1.0, 2.0)]);
    }

    #[test]
    fn test_planned_place_serializes_flat() {
        let json = r#"{ "name": "Museum", "lat": 1.0, "lng": 2.0 }"#;
        let planned = PlannedPlace {
            place: serde_json::from_str(json).unwrap(),
            color: DayColor::from_static("#00c8ff"),
            number: 1,
            day: 0,
        };

        let value = serde_json::to_value(&planned).unwrap();
        assert_eq!(value["name"], "Museum");
        assert_eq!(value["latitude"], 1.0);
        assert_eq!(value["longitude"], 2.0);
        assert!(value.get("lat").is_none());
        assert!(value.get("lng").is_none());
        assert_eq!(value["color"], "#00c8ff");
        assert_eq!(value["number"], 1);
        assert!(value.get("route").is_none());
    }

    #[test]
    fn test_find_place() {
        let planned = |id: &str, day| PlannedPlace {
            place: Place::new(id, 0.0, 0.0).with_id(id),
            color: DayColor::from_static("#00c8ff"),
            number: 1,
            day,
        };
        let plan = DayPlan {
            places: vec![planned("a", 0), planned("b", 1)],
            routes: vec![],
        };

        assert_eq!(plan.find_place(&PlaceIdentifier::new("b")).unwrap().day, 1);
        assert!(plan.find_place(&PlaceIdentifier::new("c")).is_none());
        assert_eq!(plan.places_for_day(0).count(), 1);
    }

    #[test]
    fn test_plan_error_message() {
        let err = PlanError::InvalidPlaceCoordinate {
            day: 1,
            place: 2,
            latitude: 95.0,
            longitude: 0.0,
        };
        assert_eq!(err.to_string(), "Invalid coordinate (95, 0) for place 2 of day 1");
    }
}
