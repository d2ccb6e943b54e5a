use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::latlng::LatLng;

/// Handle to a marker bitmap owned by the rendering side.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconId(pub u64);

impl IconId {
    /// The restroom-sign bitmap every fetched record is rendered with.
    pub const RESTROOM: IconId = IconId(0);
}

/// A placeable, titled map marker built from one source record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapPoint {
    pub position: LatLng,
    pub title: String,
    pub snippet: String,
    pub icon: IconId,
}

impl MapPoint {
    pub fn new(
        position: LatLng,
        title: impl Into<String>,
        snippet: impl Into<String>,
        icon: IconId,
    ) -> Self {
        Self {
            position,
            title: title.into(),
            snippet: snippet.into(),
            icon,
        }
    }
}

/// Two points are the same place on screen when coordinates, title and
/// snippet all match exactly. The icon is presentation only and excluded.
impl PartialEq for MapPoint {
    fn eq(&self, other: &Self) -> bool {
        self.position.lat == other.position.lat
            && self.position.lon == other.position.lon
            && self.title == other.title
            && self.snippet == other.snippet
    }
}

// Coordinates come from parsed JSON; NaN never reaches a constructed point.
impl Eq for MapPoint {}

impl Hash for MapPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.lat.to_bits().hash(state);
        self.position.lon.to_bits().hash(state);
        self.title.hash(state);
        self.snippet.hash(state);
    }
}
