use serde::{Deserialize, Serialize};

/// WGS84 coordinate pair in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Seoul City Hall, used as the camera target when no location fix exists.
pub const CITY_HALL: LatLng = LatLng {
    lat: 37.5662952,
    lon: 126.97794509999994,
};

/// Default camera zoom for the street-level restroom view.
pub const DEFAULT_ZOOM: f32 = 17.0;
