//! Coordinate sources.
//!
//! - [`load_points`] — Reads point features from a GeoJSON `FeatureCollection`

mod geojson;

pub use geojson::{load_points, parse_points};
