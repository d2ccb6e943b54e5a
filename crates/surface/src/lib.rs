//! The map surface and location services as opaque targets.
//!
//! The core pushes markers into a `MapSurface` and asks a
//! `LocationProvider` for a last-known fix; neither side binds to a
//! platform here. `MemorySurface` records operations for tests and
//! headless runs.

pub mod location;
pub mod map;

pub use location::*;
pub use map::*;
