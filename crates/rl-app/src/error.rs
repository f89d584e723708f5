//! Error types for the rl-app service layer.

use rl_project::{PlausibilityIssue, ProjectError};

/// Application error type that wraps errors from the backend crates
/// and gives CLI and library callers one error surface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("Room not found: {0}")]
    RoomNotFound(String),

    #[error("{} implausible input(s), first: {}", .0.len(), first_issue(.0))]
    Implausible(Vec<PlausibilityIssue>),

    #[error("Output error: {0}")]
    Output(String),
}

fn first_issue(issues: &[PlausibilityIssue]) -> String {
    issues
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

pub type AppResult<T> = Result<T, AppError>;
