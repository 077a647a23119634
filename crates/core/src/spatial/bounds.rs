use geo::{BoundingRect, MultiPoint, Rect};

use crate::models::{DayPlan, PlannedPlace};

/// Bounding box of the given places, x = longitude and y = latitude.
pub fn place_bounds<'a>(places: impl IntoIterator<Item = &'a PlannedPlace>) -> Option<Rect> {
    let points: MultiPoint = places
        .into_iter()
        .map(|planned| planned.place.position())
        .collect();
    points.bounding_rect()
}

impl DayPlan {
    pub fn bounds(&self) -> Option<Rect> {
        place_bounds(&self.places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Place};
    use crate::plan::process_days;

    #[test]
    fn test_empty_bounds() {
        assert!(DayPlan::default().bounds().is_none());
    }

    #[test]
    fn test_bounds_span_all_days() {
        let plan = process_days(&[
            Day::new(vec![Place::new("Tokyo", 35.68, 139.69)]),
            Day::new(vec![Place::new("Osaka", 34.69, 135.50)]),
        ]);

        let rect = plan.bounds().unwrap();
        assert_eq!(rect.min().x, 135.50);
        assert_eq!(rect.min().y, 34.69);
        assert_eq!(rect.max().x, 139.69);
        assert_eq!(rect.max().y, 35.68);
    }
}
