pub mod latlng;
pub mod page;
pub mod point;

pub use latlng::*;
pub use page::*;
pub use point::*;
