use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;
use tripmap_core::Day;

/// The trip editor's document form. Fields other than `days` are ignored.
#[derive(Deserialize)]
struct TripFile {
    days: Vec<Day>,
}

/// Trip files are either the editor's `{ "days": [...] }` document or a bare
/// array of days.
pub fn parse_days(json: &str) -> Result<Vec<Day>> {
    match json.trim_start().as_bytes().first() {
        Some(b'[') => serde_json::from_str(json).context("Failed to parse trip days"),
        Some(b'{') => {
            let file: TripFile =
                serde_json::from_str(json).context("Failed to parse trip document")?;
            Ok(file.days)
        }
        _ => bail!("Trip JSON must be an array of days or an object with \"days\""),
    }
}

pub fn read_days(path: &Path) -> Result<Vec<Day>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read trip from {}", path.display()))?;
    parse_days(&json).with_context(|| format!("Invalid trip file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_array() {
        let days = parse_days(r#"[{ "places": [{ "name": "a", "lat": 1, "lng": 2 }] }, {}]"#)
            .unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].places[0].longitude, 2.0);
        assert!(days[1].places.is_empty());
    }

    #[test]
    fn test_trip_document() {
        let json = r#"{ "title": "Kyoto", "days": [{ "places": [] }] }"#;
        assert_eq!(parse_days(json).unwrap().len(), 1);
    }

    #[test]
    fn test_garbage() {
        assert!(parse_days(r#"{ "places": 3 }"#).is_err());
        assert!(parse_days("42").is_err());
        assert!(parse_days("").is_err());
    }

    #[test]
    fn test_error_points_at_bad_field() {
        let json = "[\n  { \"places\": [{ \"name\": \"a\", \"lat\": \"north\", \"lng\": 2 }] }\n]";
        let message = format!("{:#}", parse_days(json).unwrap_err());
        assert!(message.contains("invalid type"), "{message}");
        assert!(message.contains("line 2"), "{message}");

        let json = r#"{ "days": [{ "places": [{ "name": "a" }] }] }"#;
        let message = format!("{:#}", parse_days(json).unwrap_err());
        assert!(message.contains("missing field `latitude`"), "{message}");
    }

    #[test]
    fn test_null_places() {
        let days = parse_days(r#"{ "days": [{ "places": null }] }"#).unwrap();
        assert!(days[0].places.is_empty());
    }
}
