//! Project loading and introspection.

use std::path::Path;

use rl_project::schema::Project;
use rl_project::{PlausibilityIssue, check_plausibility};
use tracing::{info, warn};

use crate::error::AppResult;

/// Summary of a room for listing.
#[derive(Debug, Clone)]
pub struct RoomSummary {
    pub id: String,
    pub name: String,
    pub floor_area_m2: f64,
    pub ventilation_method: String,
    pub room_type: Option<String>,
}

/// Load and structurally validate a YAML or JSON project file.
pub fn load_project(path: &Path) -> AppResult<Project> {
    let project = rl_project::load(path)?;
    info!(
        path = %path.display(),
        name = %project.name,
        rooms = project.rooms.len(),
        "project loaded"
    );
    Ok(project)
}

/// List all rooms in the project with summaries.
pub fn list_rooms(project: &Project) -> Vec<RoomSummary> {
    project
        .rooms
        .iter()
        .map(|room| RoomSummary {
            id: room.id.clone(),
            name: room.display_name().to_string(),
            floor_area_m2: room.floor_area,
            ventilation_method: room.ventilation_calculation_method.clone(),
            room_type: room.room_type.clone(),
        })
        .collect()
}

/// Plausibility issues of every room, each logged as a warning.
pub fn plausibility_issues(project: &Project) -> Vec<PlausibilityIssue> {
    let issues: Vec<_> = project.rooms.iter().flat_map(check_plausibility).collect();
    for issue in &issues {
        warn!(room = %issue.room_id, field = issue.field, value = issue.value, "{}", issue.reason);
    }
    issues
}
