//! Screen-space grouping of map points.
//!
//! Points are projected to Web-Mercator world pixels at the active zoom and
//! bucketed into fixed-size cells; each occupied cell becomes one cluster.
//! The same set of points therefore clusters differently as the camera zooms:
//! higher zoom, bigger world, fewer points per cell.

pub mod grid;
pub mod mercator;

pub use grid::*;
pub use mercator::*;
