//! Paginated open-data fetching.
//!
//! This crate covers the data path from the Seoul open-data service to the
//! rendering side:
//! - Wire format for the service envelope and restroom rows
//! - `PageSource` abstraction over HTTP and in-memory backends
//! - The incremental fetch session: fixed-size pages, progressive emission,
//!   cooperative cancellation, one terminal update per session

pub mod error;
pub mod protocol;
pub mod session;
pub mod source;

pub use error::*;
pub use protocol::*;
pub use session::*;
pub use source::*;
