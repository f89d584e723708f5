//! Heat-loss surface areas derived from room geometry.

use crate::config::{AreaEstimation, RoomConfig};
use rl_core::units::{Area, m2};
use tracing::debug;

/// Heat-loss areas of one room.
///
/// Exactly one of `ground` and `neighbour_floor` equals the floor area: a
/// floor either touches the ground or faces a neighbouring unit below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaSet {
    pub exterior_wall: Area,
    pub neighbour_wall: Area,
    pub ground: Area,
    pub roof: Area,
    pub neighbour_floor: Area,
}

impl AreaSet {
    /// Surfaces facing outdoor air or the ground.
    pub fn exterior_envelope(&self) -> Area {
        self.exterior_wall + self.roof + self.ground
    }

    /// Surfaces facing neighbouring zones.
    pub fn neighbour_envelope(&self) -> Area {
        self.neighbour_wall + self.neighbour_floor
    }
}

pub fn estimate_areas(room: &RoomConfig) -> AreaSet {
    let floor = room.floor_area.value;
    let height = room.wall_height.value;

    let (exterior_wall, neighbour_wall) = match room.area_estimation {
        AreaEstimation::FromFloorArea => {
            // Square footprint, two walls out and two toward neighbours
            let side = floor.sqrt();
            (side * height * 2.0, side * height * 2.0)
        }
        AreaEstimation::FromExposedPerimeter => (
            room.exposed_perimeter.value * height,
            room.neighbour_perimeter.value * height,
        ),
    };

    let ground = if room.on_ground { floor } else { 0.0 };
    let roof = if room.under_roof { floor } else { 0.0 };
    let neighbour_floor = if ground == 0.0 { floor } else { 0.0 };

    debug!(
        estimation = %room.area_estimation,
        exterior_wall,
        neighbour_wall,
        ground,
        roof,
        neighbour_floor,
        "heat loss areas"
    );

    AreaSet {
        exterior_wall: m2(exterior_wall),
        neighbour_wall: m2(neighbour_wall),
        ground: m2(ground),
        roof: m2(roof),
        neighbour_floor: m2(neighbour_floor),
    }
}
