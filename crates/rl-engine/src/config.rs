//! Room configuration: geometry, envelope, airtightness and boundary conditions.

use crate::error::ConfigError;
use crate::ventilation::VentilationMethod;
use rl_core::units::{Area, Length, Temperature, degc, m, m2};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_WALL_HEIGHT_M: f64 = 2.7;
pub const DEFAULT_V50: f64 = 6.0;
pub const DEFAULT_LEAKAGE_RATIO: f64 = 0.2;
pub const DEFAULT_U_NEIGHBOUR: f64 = 1.0;
pub const DEFAULT_T_IN_C: f64 = 20.0;
pub const DEFAULT_T_OUT_C: f64 = -7.0;
pub const DEFAULT_T_NEIGHBOUR_C: f64 = 18.0;

/// How wall areas are derived from geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AreaEstimation {
    /// Square footprint: two sides exterior, two sides toward neighbours.
    #[default]
    FromFloorArea,
    /// Walls from the supplied exposed and neighbour perimeters.
    FromExposedPerimeter,
}

impl AreaEstimation {
    pub fn as_str(self) -> &'static str {
        match self {
            AreaEstimation::FromFloorArea => "fromFloorArea",
            AreaEstimation::FromExposedPerimeter => "fromExposedPerimeter",
        }
    }
}

impl fmt::Display for AreaEstimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AreaEstimation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fromFloorArea" => Ok(AreaEstimation::FromFloorArea),
            "fromExposedPerimeter" => Ok(AreaEstimation::FromExposedPerimeter),
            other => Err(ConfigError::UnknownAreaEstimation(other.to_string())),
        }
    }
}

/// Whether the caller wants the scalar total or the full breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Total,
    Detailed,
}

impl OutputMode {
    pub fn from_detail_flag(return_detail: bool) -> Self {
        if return_detail {
            OutputMode::Detailed
        } else {
            OutputMode::Total
        }
    }
}

/// Everything one heat-loss calculation needs.
///
/// U-values are in W/(m²·K), `v50` in m³/(h·m²) of envelope at 50 Pa and
/// `leakage_ratio` is the dimensionless factor applied to `v50`.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomConfig {
    pub floor_area: Area,
    pub wall_height: Length,
    /// Only read by [`AreaEstimation::FromExposedPerimeter`].
    pub exposed_perimeter: Length,
    /// Only read by [`AreaEstimation::FromExposedPerimeter`].
    pub neighbour_perimeter: Length,

    pub u_wall: f64,
    pub u_roof: f64,
    pub u_ground: f64,
    pub u_neighbour: f64,

    pub v50: f64,
    pub leakage_ratio: f64,

    pub ventilation: VentilationMethod,

    pub t_in: Temperature,
    pub t_out: Temperature,
    pub t_neighbour: Temperature,

    pub on_ground: bool,
    pub under_roof: bool,
    pub add_neighbour_losses: bool,
    pub area_estimation: AreaEstimation,
}

impl RoomConfig {
    /// Create a room with every other input at its design default.
    pub fn new(
        floor_area: Area,
        u_wall: f64,
        u_roof: f64,
        u_ground: f64,
        ventilation: VentilationMethod,
    ) -> Self {
        Self {
            floor_area,
            wall_height: m(DEFAULT_WALL_HEIGHT_M),
            exposed_perimeter: m(0.0),
            neighbour_perimeter: m(0.0),
            u_wall,
            u_roof,
            u_ground,
            u_neighbour: DEFAULT_U_NEIGHBOUR,
            v50: DEFAULT_V50,
            leakage_ratio: DEFAULT_LEAKAGE_RATIO,
            ventilation,
            t_in: degc(DEFAULT_T_IN_C),
            t_out: degc(DEFAULT_T_OUT_C),
            t_neighbour: degc(DEFAULT_T_NEIGHBOUR_C),
            on_ground: false,
            under_roof: false,
            add_neighbour_losses: false,
            area_estimation: AreaEstimation::FromFloorArea,
        }
    }

    pub fn with_wall_height(mut self, wall_height: Length) -> Self {
        self.wall_height = wall_height;
        self
    }

    /// Switch to perimeter-based wall areas.
    pub fn with_perimeters(mut self, exposed: Length, neighbour: Length) -> Self {
        self.area_estimation = AreaEstimation::FromExposedPerimeter;
        self.exposed_perimeter = exposed;
        self.neighbour_perimeter = neighbour;
        self
    }

    pub fn with_area_estimation(mut self, area_estimation: AreaEstimation) -> Self {
        self.area_estimation = area_estimation;
        self
    }

    pub fn with_temperatures(
        mut self,
        t_in: Temperature,
        t_out: Temperature,
        t_neighbour: Temperature,
    ) -> Self {
        self.t_in = t_in;
        self.t_out = t_out;
        self.t_neighbour = t_neighbour;
        self
    }

    pub fn with_airtightness(mut self, v50: f64, leakage_ratio: f64) -> Self {
        self.v50 = v50;
        self.leakage_ratio = leakage_ratio;
        self
    }

    pub fn with_u_neighbour(mut self, u_neighbour: f64) -> Self {
        self.u_neighbour = u_neighbour;
        self
    }

    pub fn with_ventilation(mut self, ventilation: VentilationMethod) -> Self {
        self.ventilation = ventilation;
        self
    }

    pub fn on_ground(mut self, on_ground: bool) -> Self {
        self.on_ground = on_ground;
        self
    }

    pub fn under_roof(mut self, under_roof: bool) -> Self {
        self.under_roof = under_roof;
        self
    }

    pub fn with_neighbour_losses(mut self, add_neighbour_losses: bool) -> Self {
        self.add_neighbour_losses = add_neighbour_losses;
        self
    }

    /// Air volume of the room, floor area times wall height.
    pub fn volume_m3(&self) -> f64 {
        self.floor_area.value * self.wall_height.value
    }
}

impl Default for RoomConfig {
    /// A 10 m² room on default inputs, exhaust-only simple ventilation.
    fn default() -> Self {
        Self::new(m2(10.0), 0.24, 0.24, 0.7, VentilationMethod::default())
    }
}
