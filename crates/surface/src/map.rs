use model::{LatLng, MapPoint};

/// An opaque rendering target the core pushes points into.
pub trait MapSurface {
    /// Places one marker on the surface.
    fn add_marker(&mut self, point: MapPoint);

    /// Removes every marker.
    fn clear(&mut self);

    /// Moves the camera to `target` at `zoom`.
    fn move_camera(&mut self, target: LatLng, zoom: f32);
}

/// In-memory surface that records operations, for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemorySurface {
    markers: Vec<MapPoint>,
    camera: Option<(LatLng, f32)>,
    clears: u32,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> &[MapPoint] {
        &self.markers
    }

    pub fn camera(&self) -> Option<(LatLng, f32)> {
        self.camera
    }

    /// Number of `clear` calls seen so far.
    pub fn clears(&self) -> u32 {
        self.clears
    }
}

impl MapSurface for MemorySurface {
    fn add_marker(&mut self, point: MapPoint) {
        self.markers.push(point);
    }

    fn clear(&mut self) {
        self.markers.clear();
        self.clears += 1;
    }

    fn move_camera(&mut self, target: LatLng, zoom: f32) {
        self.camera = Some((target, zoom));
    }
}
