use anyhow::{Context, Result};
use clap::ValueEnum;
use geojson::GeoJson;
use std::path::Path;
use tripmap_core::{DayPlan, to_feature_collection};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `{ places, routes }` as the trip map consumes it
    #[default]
    Json,
    /// FeatureCollection of place points and route lines
    Geojson,
}

pub fn render_plan(plan: &DayPlan, format: Format) -> Result<String> {
    match format {
        Format::Json => serde_json::to_string_pretty(plan).context("Failed to serialize plan"),
        Format::Geojson => {
            let geojson = GeoJson::from(to_feature_collection(plan));
            serde_json::to_string_pretty(&geojson).context("Failed to serialize GeoJSON")
        }
    }
}

pub fn write_plan(plan: &DayPlan, output_path: &Path, format: Format) -> Result<()> {
    log::info!(
        "Writing {} places and {} routes to {}",
        plan.places.len(),
        plan.routes.len(),
        output_path.display()
    );

    let json_string = render_plan(plan, format)?;
    std::fs::write(output_path, json_string)
        .with_context(|| format!("Failed to write plan to {}", output_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripmap_core::{Day, LatLng, Place, RouteInput, process_days};

    fn sample_plan() -> DayPlan {
        process_days(&[Day::new(vec![
            Place::new("Hotel", 1.0, 2.0),
            Place::new("Museum", 3.0, 4.0).with_route(RouteInput::line_string(vec![
                LatLng::new(1.0, 2.0),
                LatLng::new(3.0, 4.0),
            ])),
        ])])
    }

    #[test]
    fn test_render_json() {
        let value: serde_json::Value =
            serde_json::from_str(&render_plan(&sample_plan(), Format::Json).unwrap()).unwrap();

        assert_eq!(value["places"].as_array().unwrap().len(), 2);
        assert_eq!(value["routes"][0]["coordinates"][1][0], 4.0);
    }

    #[test]
    fn test_write_geojson() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.geojson");

        write_plan(&sample_plan(), &path, Format::Geojson).unwrap();

        let geojson: GeoJson = std::fs::read_to_string(&path).unwrap().parse().unwrap();
        match geojson {
            GeoJson::FeatureCollection(fc) => assert_eq!(fc.features.len(), 3),
            _ => panic!("Expected FeatureCollection"),
        }
    }
}
