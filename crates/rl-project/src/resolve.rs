//! Turning string-keyed room definitions into engine configurations.

use crate::schema::RoomDef;
use rl_core::units::{degc, m, m2};
use rl_engine::{AreaEstimation, ConfigError, OutputMode, RoomConfig, VentilationMethod};

/// A room ready for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoom {
    pub id: String,
    pub name: Option<String>,
    pub config: RoomConfig,
    pub output: OutputMode,
}

impl RoomDef {
    /// Resolve the option keys of this room.
    ///
    /// Fails on an unknown area estimation, an unknown ventilation system
    /// under the simple method, or an unknown room type under the table
    /// method. Physical values are passed through unchecked.
    pub fn resolve(&self) -> Result<ResolvedRoom, ConfigError> {
        let area_estimation: AreaEstimation = self.heat_loss_area_estimation.parse()?;
        let ventilation = VentilationMethod::resolve(
            &self.ventilation_calculation_method,
            &self.v_system,
            self.room_type.as_deref(),
        )?;

        let config = RoomConfig {
            floor_area: m2(self.floor_area),
            wall_height: m(self.wall_height),
            exposed_perimeter: m(self.exposed_perimeter),
            neighbour_perimeter: m(self.neighbour_perimeter),
            u_wall: self.u_w,
            u_roof: self.u_roof,
            u_ground: self.u_ground,
            u_neighbour: self.u_n,
            v50: self.v50,
            leakage_ratio: self.lir,
            ventilation,
            t_in: degc(self.t_in),
            t_out: degc(self.t_out),
            t_neighbour: degc(self.neighbour_t),
            on_ground: self.on_ground,
            under_roof: self.under_roof,
            add_neighbour_losses: self.add_neighbour_losses,
            area_estimation,
        };

        Ok(ResolvedRoom {
            id: self.id.clone(),
            name: self.name.clone(),
            config,
            output: OutputMode::from_detail_flag(self.return_detail),
        })
    }
}
