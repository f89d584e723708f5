//! Project validation logic.
//!
//! Structural validation runs on every load and save. Plausibility checks on
//! physical inputs are opt-in: they never alter computed values.

use crate::schema::{Project, RoomDef};
use std::collections::HashSet;
use std::fmt;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Empty room ID at position {index}")]
    EmptyId { index: usize },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut room_ids = HashSet::new();
    for (index, room) in project.rooms.iter().enumerate() {
        if room.id.trim().is_empty() {
            return Err(ValidationError::EmptyId { index });
        }
        if !room_ids.insert(&room.id) {
            return Err(ValidationError::DuplicateId {
                id: room.id.clone(),
                context: format!("project '{}' rooms", project.name),
            });
        }
    }

    Ok(())
}

/// A physical input that is outside what a real room could have.
#[derive(Debug, Clone, PartialEq)]
pub struct PlausibilityIssue {
    pub room_id: String,
    pub field: &'static str,
    pub value: f64,
    pub reason: &'static str,
}

impl fmt::Display for PlausibilityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "room '{}': {} = {} ({})",
            self.room_id, self.field, self.value, self.reason
        )
    }
}

/// Collect every implausible physical input of a room.
pub fn check_plausibility(room: &RoomDef) -> Vec<PlausibilityIssue> {
    let mut issues = Vec::new();
    let mut flag = |field: &'static str, value: f64, reason: &'static str| {
        issues.push(PlausibilityIssue {
            room_id: room.id.clone(),
            field,
            value,
            reason,
        });
    };

    let non_negative = [
        ("floorArea", room.floor_area),
        ("wallHeight", room.wall_height),
        ("exposedPerimeter", room.exposed_perimeter),
        ("neighbourPerimeter", room.neighbour_perimeter),
        ("Uw", room.u_w),
        ("Uroof", room.u_roof),
        ("Uground", room.u_ground),
        ("Un", room.u_n),
        ("v50", room.v50),
        ("LIR", room.lir),
    ];
    let temperatures = [
        ("Tin", room.t_in),
        ("Tout", room.t_out),
        ("neighbourT", room.neighbour_t),
    ];

    for (field, value) in non_negative {
        if !value.is_finite() {
            flag(field, value, "not a finite number");
        } else if value < 0.0 {
            flag(field, value, "must not be negative");
        }
    }
    for (field, value) in temperatures {
        if !value.is_finite() {
            flag(field, value, "not a finite number");
        }
    }

    if room.floor_area == 0.0 {
        flag("floorArea", room.floor_area, "must be positive");
    }
    if room.wall_height == 0.0 {
        flag("wallHeight", room.wall_height, "must be positive");
    }
    if room.t_in <= room.t_out {
        flag("Tin", room.t_in, "indoor design temperature not above outdoor");
    }

    issues
}
