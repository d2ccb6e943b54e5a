use std::collections::BTreeMap;

use model::{LatLng, MapPoint};

use crate::mercator::project;

/// Default cell edge in pixels; roughly the footprint of one cluster badge.
pub const DEFAULT_CELL_PX: u32 = 100;

/// Clustering parameters for one render pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridParams {
    /// Zoom level to project at.
    pub zoom: u8,
    /// Cell edge in world pixels.
    pub cell_px: u32,
}

impl GridParams {
    pub fn at_zoom(zoom: u8) -> Self {
        Self {
            zoom,
            cell_px: DEFAULT_CELL_PX,
        }
    }
}

/// A screen-space group of points rendered as one interactive marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Arithmetic mean of the member coordinates.
    pub centroid: LatLng,
    pub points: Vec<MapPoint>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Singletons render as a plain marker instead of a count badge.
    pub fn is_singleton(&self) -> bool {
        self.points.len() == 1
    }
}

/// Groups points into one cluster per occupied grid cell.
///
/// Output order follows cell keys (west-to-east, then north-to-south), so
/// the same input always produces the same cluster list. Members keep their
/// input order within a cluster.
pub fn cluster(points: &[MapPoint], params: GridParams) -> Vec<Cluster> {
    let cell = f64::from(params.cell_px.max(1));
    let mut cells: BTreeMap<(i64, i64), Vec<MapPoint>> = BTreeMap::new();

    for point in points {
        let px = project(point.position, params.zoom);
        let key = ((px.x / cell).floor() as i64, (px.y / cell).floor() as i64);
        cells.entry(key).or_default().push(point.clone());
    }

    cells
        .into_values()
        .map(|members| {
            let n = members.len() as f64;
            let lat = members.iter().map(|m| m.position.lat).sum::<f64>() / n;
            let lon = members.iter().map(|m| m.position.lon).sum::<f64>() / n;
            Cluster {
                centroid: LatLng::new(lat, lon),
                points: members,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use model::{CITY_HALL, IconId, LatLng, MapPoint};

    use super::{Cluster, GridParams, cluster};

    fn point(lat: f64, lon: f64, title: &str) -> MapPoint {
        MapPoint::new(LatLng::new(lat, lon), title, "Jung-gu", IconId::RESTROOM)
    }

    fn downtown() -> Vec<MapPoint> {
        vec![
            point(CITY_HALL.lat, CITY_HALL.lon, "City Hall"),
            point(37.5663, 126.9781, "Plaza"),
            point(37.5670, 126.9790, "Underpass"),
            point(37.5800, 127.0000, "Station"),
        ]
    }

    #[test]
    fn low_zoom_merges_everything() {
        let clusters = cluster(&downtown(), GridParams::at_zoom(10));
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].len(), 4);
        assert!(!clusters[0].is_singleton());
    }

    #[test]
    fn higher_zoom_splits_clusters() {
        let at_17 = cluster(&downtown(), GridParams::at_zoom(17));
        assert_eq!(at_17.len(), 3);

        let at_20 = cluster(&downtown(), GridParams::at_zoom(20));
        assert_eq!(at_20.len(), 4);
        assert!(at_20.iter().all(Cluster::is_singleton));
    }

    #[test]
    fn centroid_is_the_member_mean() {
        let points = vec![point(37.0, 127.0, "A"), point(38.0, 128.0, "B")];
        // One world of one cell: everything lands together.
        let clusters = cluster(
            &points,
            GridParams {
                zoom: 0,
                cell_px: 256,
            },
        );
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].centroid, LatLng::new(37.5, 127.5));
    }

    #[test]
    fn output_is_deterministic() {
        let a = cluster(&downtown(), GridParams::at_zoom(17));
        let b = cluster(&downtown(), GridParams::at_zoom(17));
        assert_eq!(a, b);
    }

    #[test]
    fn no_points_no_clusters() {
        assert!(cluster(&[], GridParams::at_zoom(17)).is_empty());
    }

    #[test]
    fn members_keep_input_order() {
        let clusters = cluster(&downtown(), GridParams::at_zoom(10));
        let titles: Vec<&str> = clusters[0].points.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["City Hall", "Plaza", "Underpass", "Station"]);
    }
}
