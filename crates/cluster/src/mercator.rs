use model::LatLng;

/// Pixel size of one tile edge; the world at zoom `z` spans `256 * 2^z` px.
pub const TILE_PX: f64 = 256.0;

/// A position in Web-Mercator world-pixel space at some zoom level.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldPx {
    pub x: f64,
    pub y: f64,
}

/// World edge length in pixels at the given zoom.
pub fn world_px(zoom: u8) -> f64 {
    TILE_PX * f64::powi(2.0, i32::from(zoom))
}

/// Projects a WGS84 coordinate into world pixels at the given zoom.
///
/// Y grows southward (tile convention); latitudes beyond the Mercator
/// limit project onto the world edge.
pub fn project(position: LatLng, zoom: u8) -> WorldPx {
    let world = world_px(zoom);
    let x = (position.lon + 180.0) / 360.0 * world;

    let lat_rad = position.lat.to_radians();
    let y_unit = (1.0 - lat_rad.tan().asinh() / std::f64::consts::PI) / 2.0;
    let y = y_unit.clamp(0.0, 1.0) * world;

    WorldPx { x, y }
}

#[cfg(test)]
mod tests {
    use model::LatLng;

    use super::{project, world_px};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn null_island_is_the_world_center() {
        let p = project(LatLng::new(0.0, 0.0), 3);
        let half = world_px(3) / 2.0;
        assert_close(p.x, half, 1e-9);
        assert_close(p.y, half, 1e-9);
    }

    #[test]
    fn antimeridian_maps_to_world_edges() {
        let w = world_px(0);
        assert_close(project(LatLng::new(0.0, -180.0), 0).x, 0.0, 1e-9);
        assert_close(project(LatLng::new(0.0, 180.0), 0).x, w, 1e-9);
    }

    #[test]
    fn north_is_up() {
        let seoul = project(LatLng::new(37.56, 126.97), 10);
        let busan = project(LatLng::new(35.18, 129.07), 10);
        assert!(seoul.y < busan.y);
        assert!(seoul.x < busan.x);
    }

    #[test]
    fn extreme_zoom_levels_stay_finite() {
        // Any u8 can reach this path from the viewer's zoom flag.
        let w = world_px(64);
        assert!(w.is_finite());
        assert_close(w, 256.0 * 2f64.powi(64), 1e-3);

        let p = project(LatLng::new(37.56, 126.97), u8::MAX);
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!(p.x > 0.0 && p.y > 0.0);
    }

    #[test]
    fn doubling_zoom_doubles_coordinates() {
        let lo = project(LatLng::new(37.56, 126.97), 10);
        let hi = project(LatLng::new(37.56, 126.97), 11);
        assert_close(hi.x, lo.x * 2.0, 1e-6);
        assert_close(hi.y, lo.y * 2.0, 1e-6);
    }
}
