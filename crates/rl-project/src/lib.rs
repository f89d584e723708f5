//! rl-project: room definition file format, resolution and validation.

pub mod resolve;
pub mod schema;
pub mod validate;

pub use resolve::ResolvedRoom;
pub use schema::*;
pub use validate::{
    LATEST_VERSION, PlausibilityIssue, ValidationError, check_plausibility, validate_project,
};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error in room '{room}': {source}")]
    Config {
        room: String,
        source: rl_engine::ConfigError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    let project: Project = serde_yaml::from_str(&content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn save_yaml(path: &std::path::Path, project: &Project) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_yaml::to_string(project)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    let project: Project = serde_json::from_str(&content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn save_json(path: &std::path::Path, project: &Project) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_json::to_string_pretty(project)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a project, picking the format from the file extension.
///
/// `.json` is read as JSON, everything else as YAML.
pub fn load(path: &std::path::Path) -> ProjectResult<Project> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}

/// Resolve every room, stopping at the first configuration error.
pub fn resolve_rooms(project: &Project) -> ProjectResult<Vec<ResolvedRoom>> {
    project
        .rooms
        .iter()
        .map(|room| {
            room.resolve().map_err(|source| ProjectError::Config {
                room: room.id.clone(),
                source,
            })
        })
        .collect()
}
