//! Metadata store access for clipstore.
//!
//! The broker consumes video records read-mostly: a point lookup by storage
//! key for the ownership check, a descending-by-creation listing for the
//! owner's library, and a single insert on behalf of the caller once a direct
//! upload has completed.

mod video_repository;

pub use video_repository::{VideoRepository, VideoStore};
