//! GeoJSON point loader.
//!
//! Reads `features[*].geometry.coordinates` from a `FeatureCollection`.
//! Only the first two numbers of each position are used; an altitude, if
//! present, is ignored. All other members are ignored.

use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{TspError, TspResult};
use crate::models::Point;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: Vec<f64>,
}

/// Loads points from a GeoJSON file, one per feature, in file order.
///
/// # Errors
///
/// - [`TspError::InputNotFound`] if the file does not exist
/// - [`TspError::PermissionDenied`] if it may not be read
/// - [`TspError::InputUnreadable`] for any other I/O failure
/// - [`TspError::InputMalformed`] if the content is not a feature
///   collection of point positions
pub fn load_points(path: impl AsRef<Path>) -> TspResult<Vec<Point>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => TspError::InputNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => TspError::PermissionDenied {
            path: path.to_path_buf(),
        },
        ErrorKind::InvalidData => TspError::InputMalformed {
            path: path.to_path_buf(),
            reason: source.to_string(),
        },
        _ => TspError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let points = parse_points(&text).map_err(|reason| TspError::InputMalformed {
        path: path.to_path_buf(),
        reason,
    })?;
    debug!(path = %path.display(), points = points.len(), "loaded coordinates");
    Ok(points)
}

/// Parses points from GeoJSON text.
///
/// Returns a description of the problem on failure.
///
/// # Examples
///
/// ```
/// use u_tsp::io::parse_points;
///
/// let text = r#"{
///     "type": "FeatureCollection",
///     "features": [
///         {"type": "Feature", "geometry": {"type": "Point", "coordinates": [21.9, 48.7]}},
///         {"type": "Feature", "geometry": {"type": "Point", "coordinates": [22.1, 48.9, 120.0]}}
///     ]
/// }"#;
/// let points = parse_points(text).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].x(), 22.1);
/// ```
pub fn parse_points(text: &str) -> Result<Vec<Point>, String> {
    let collection: FeatureCollection = serde_json::from_str(text).map_err(|e| e.to_string())?;

    collection
        .features
        .iter()
        .enumerate()
        .map(|(i, feature)| match feature.geometry.coordinates.as_slice() {
            [x, y, ..] => Ok(Point::new(*x, *y)),
            other => Err(format!(
                "feature {i}: expected at least 2 coordinates, got {}",
                other.len()
            )),
        })
        .collect()
}
