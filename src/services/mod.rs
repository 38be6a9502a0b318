//! Service layer for volume operations

pub mod volume_service;

pub use volume_service::{VolumeChange, VolumeService};
