//! Shared application service layer for roomload.
//!
//! This crate provides one interface for every front end, centralizing
//! project loading, room resolution and batch heat-loss computation.

pub mod compute_service;
pub mod error;
pub mod project_service;

// Re-export key types for convenience
pub use compute_service::{
    ComputeOptions, ProjectReport, RoomReport, compute_project, compute_room,
};
pub use error::{AppError, AppResult};
pub use project_service::{RoomSummary, list_rooms, load_project, plausibility_issues};
