//! Project schema definitions.
//!
//! Room fields keep the names and defaults of the calculation inputs, so a
//! room can be written down with only the values that differ:
//!
//! ```yaml
//! version: 1
//! name: Terraced house
//! rooms:
//!   - id: living
//!     floorArea: 28.0
//!     Uw: 0.24
//!     Uroof: 0.24
//!     Uground: 0.7
//!     vSystem: C
//!     onGround: true
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RoomDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// m²
    pub floor_area: f64,
    /// W/(m²·K)
    #[serde(rename = "Uw")]
    pub u_w: f64,
    #[serde(rename = "Uroof")]
    pub u_roof: f64,
    #[serde(rename = "Uground")]
    pub u_ground: f64,
    /// `C` (exhaust only) or `D` (balanced with heat recovery)
    pub v_system: String,

    /// m³/(h·m²) at 50 Pa
    #[serde(default = "default_v50")]
    pub v50: f64,
    /// °C
    #[serde(rename = "Tin", default = "default_t_in")]
    pub t_in: f64,
    #[serde(rename = "Tout", default = "default_t_out")]
    pub t_out: f64,
    #[serde(default = "default_neighbour_t")]
    pub neighbour_t: f64,
    #[serde(rename = "Un", default = "default_u_n")]
    pub u_n: f64,
    #[serde(rename = "LIR", default = "default_lir")]
    pub lir: f64,

    #[serde(default = "default_heat_loss_area_estimation")]
    pub heat_loss_area_estimation: String,
    #[serde(default = "default_ventilation_calculation_method")]
    pub ventilation_calculation_method: String,
    /// m, perimeter mode only
    #[serde(default)]
    pub exposed_perimeter: f64,
    #[serde(default)]
    pub on_ground: bool,
    #[serde(default)]
    pub under_roof: bool,
    #[serde(default)]
    pub add_neighbour_losses: bool,
    #[serde(default)]
    pub neighbour_perimeter: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    /// m
    #[serde(default = "default_wall_height")]
    pub wall_height: f64,
    #[serde(default)]
    pub return_detail: bool,
}

impl RoomDef {
    /// A room with the required inputs set and every other input at its default.
    pub fn new(
        id: impl Into<String>,
        floor_area: f64,
        u_w: f64,
        u_roof: f64,
        u_ground: f64,
        v_system: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: None,
            floor_area,
            u_w,
            u_roof,
            u_ground,
            v_system: v_system.into(),
            v50: default_v50(),
            t_in: default_t_in(),
            t_out: default_t_out(),
            neighbour_t: default_neighbour_t(),
            u_n: default_u_n(),
            lir: default_lir(),
            heat_loss_area_estimation: default_heat_loss_area_estimation(),
            ventilation_calculation_method: default_ventilation_calculation_method(),
            exposed_perimeter: 0.0,
            on_ground: false,
            under_roof: false,
            add_neighbour_losses: false,
            neighbour_perimeter: 0.0,
            room_type: None,
            wall_height: default_wall_height(),
            return_detail: false,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

fn default_v50() -> f64 {
    rl_engine::config::DEFAULT_V50
}

fn default_t_in() -> f64 {
    rl_engine::config::DEFAULT_T_IN_C
}

fn default_t_out() -> f64 {
    rl_engine::config::DEFAULT_T_OUT_C
}

fn default_neighbour_t() -> f64 {
    rl_engine::config::DEFAULT_T_NEIGHBOUR_C
}

fn default_u_n() -> f64 {
    rl_engine::config::DEFAULT_U_NEIGHBOUR
}

fn default_lir() -> f64 {
    rl_engine::config::DEFAULT_LEAKAGE_RATIO
}

fn default_wall_height() -> f64 {
    rl_engine::config::DEFAULT_WALL_HEIGHT_M
}

fn default_heat_loss_area_estimation() -> String {
    rl_engine::AreaEstimation::FromFloorArea.as_str().to_string()
}

fn default_ventilation_calculation_method() -> String {
    rl_engine::ventilation::METHOD_SIMPLE.to_string()
}
