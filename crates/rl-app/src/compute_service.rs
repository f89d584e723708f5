//! Heat-loss computation for single rooms and whole projects.

use rayon::prelude::*;
use rl_core::units::{Power, w};
use rl_engine::{HeatLoss, OutputMode, compute};
use rl_project::schema::{Project, RoomDef};
use rl_project::{ProjectError, ResolvedRoom, check_plausibility};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default)]
pub struct ComputeOptions {
    /// Only compute the room with this id.
    pub room: Option<String>,
    /// Return the breakdown for every room regardless of `returnDetail`.
    pub force_detail: bool,
    /// Refuse to compute when any room has implausible inputs.
    pub strict: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomReport {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub heat_loss: HeatLoss,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub name: String,
    pub rooms: Vec<RoomReport>,
    /// Sum of the room totals, in W.
    pub total_heat_loss: Power,
}

/// Compute one room definition, honouring its `returnDetail` flag.
pub fn compute_room(room: &RoomDef) -> AppResult<HeatLoss> {
    let resolved = resolve(room)?;
    Ok(compute(&resolved.config, resolved.output))
}

/// Compute every selected room of a project.
///
/// All rooms are resolved before any is computed, so a configuration error
/// in one room yields no report at all. Rooms are then computed in parallel
/// and reported in project order.
pub fn compute_project(project: &Project, options: &ComputeOptions) -> AppResult<ProjectReport> {
    let selected: Vec<&RoomDef> = match &options.room {
        Some(id) => {
            let room = project
                .rooms
                .iter()
                .find(|room| &room.id == id)
                .ok_or_else(|| AppError::RoomNotFound(id.clone()))?;
            vec![room]
        }
        None => project.rooms.iter().collect(),
    };

    if options.strict {
        let issues: Vec<_> = selected
            .iter()
            .flat_map(|room| check_plausibility(room))
            .collect();
        if !issues.is_empty() {
            return Err(AppError::Implausible(issues));
        }
    }

    let resolved = selected
        .into_iter()
        .map(resolve)
        .collect::<AppResult<Vec<_>>>()?;

    info!(
        project = %project.name,
        rooms = resolved.len(),
        "computing heat losses"
    );

    let rooms: Vec<RoomReport> = resolved
        .into_par_iter()
        .map(|room| {
            let mode = if options.force_detail {
                OutputMode::Detailed
            } else {
                room.output
            };
            let heat_loss = compute(&room.config, mode);
            debug!(room = %room.id, total_w = heat_loss.total().value, "room computed");
            RoomReport {
                id: room.id,
                name: room.name,
                heat_loss,
            }
        })
        .collect();

    let total_heat_loss = w(rooms.iter().map(|r| r.heat_loss.total().value).sum());

    Ok(ProjectReport {
        name: project.name.clone(),
        rooms,
        total_heat_loss,
    })
}

fn resolve(room: &RoomDef) -> AppResult<ResolvedRoom> {
    room.resolve().map_err(|source| {
        AppError::Project(ProjectError::Config {
            room: room.id.clone(),
            source,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        let mut bath = RoomDef::new("bath", 6.0, 0.24, 0.24, 0.7, "C");
        bath.return_detail = true;
        Project {
            version: rl_project::LATEST_VERSION,
            name: "p".into(),
            rooms: vec![RoomDef::new("living", 20.0, 0.24, 0.24, 0.7, "C"), bath],
        }
    }

    #[test]
    fn return_detail_decides_per_room() {
        let report = compute_project(&project(), &ComputeOptions::default()).unwrap();
        assert!(report.rooms[0].heat_loss.breakdown().is_none());
        assert!(report.rooms[1].heat_loss.breakdown().is_some());
    }

    #[test]
    fn force_detail_overrides_rooms() {
        let options = ComputeOptions {
            force_detail: true,
            ..Default::default()
        };
        let report = compute_project(&project(), &options).unwrap();
        assert!(report.rooms.iter().all(|r| r.heat_loss.breakdown().is_some()));
    }

    #[test]
    fn unknown_room_selection() {
        let options = ComputeOptions {
            room: Some("attic".into()),
            ..Default::default()
        };
        let err = compute_project(&project(), &options).unwrap_err();
        assert!(matches!(err, AppError::RoomNotFound(id) if id == "attic"));
    }
}
