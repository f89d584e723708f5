//! Ventilation airflow estimation.
//!
//! Two methods are supported:
//! - `simple`: a fixed air-change rate per ventilation system, all air
//!   drawn from outdoors
//! - `NBN-D-50-001`: nominal flow of 3.6 m³/h per m² of floor, clamped to
//!   the bounds of the room's function; dry rooms get outdoor supply air,
//!   wet rooms get air transferred from neighbouring rooms
//!
//! Any other method name yields no ventilation flow at all.

use crate::config::RoomConfig;
use crate::error::ConfigError;
use rl_core::units::{VolumeRate, as_m3ph, m3ph};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

pub const METHOD_SIMPLE: &str = "simple";
pub const METHOD_NBN_D_50_001: &str = "NBN-D-50-001";

/// Nominal flow per m² of floor under NBN D 50-001, in m³/h.
pub const NBN_FLOW_PER_M2: f64 = 3.6;

/// Heat-recovery systems pass on this share of the supply-air load.
pub const RECOVERY_FACTOR: f64 = 0.3;

/// Mechanical ventilation system type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VentilationSystem {
    /// System C: mechanical exhaust, natural supply.
    #[default]
    ExhaustOnly,
    /// System D: balanced mechanical supply and exhaust with heat recovery.
    BalancedWithRecovery,
}

impl VentilationSystem {
    /// Effective air changes per hour under the simple method.
    ///
    /// The balanced system folds ~70 % heat recovery into a reduced rate.
    pub fn air_change_rate(self) -> f64 {
        match self {
            VentilationSystem::ExhaustOnly => 1.0,
            VentilationSystem::BalancedWithRecovery => RECOVERY_FACTOR,
        }
    }

    /// Read a system key the way the table method does.
    ///
    /// The table method only asks whether supply air passes a heat
    /// exchanger, so any key other than `D` counts as exhaust only.
    pub fn from_recovery_key(key: &str) -> Self {
        key.parse().unwrap_or_else(|_| {
            debug!(v_system = key, "no heat recovery for unknown system key");
            VentilationSystem::ExhaustOnly
        })
    }

    pub fn has_heat_recovery(self) -> bool {
        matches!(self, VentilationSystem::BalancedWithRecovery)
    }

    pub fn code(self) -> &'static str {
        match self {
            VentilationSystem::ExhaustOnly => "C",
            VentilationSystem::BalancedWithRecovery => "D",
        }
    }
}

impl fmt::Display for VentilationSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for VentilationSystem {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(VentilationSystem::ExhaustOnly),
            "D" => Ok(VentilationSystem::BalancedWithRecovery),
            other => Err(ConfigError::UnknownVentilationSystem(other.to_string())),
        }
    }
}

/// Room function, keying the NBN D 50-001 flow table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoomType {
    Living,
    Kitchen,
    Bedroom,
    Laundry,
    Bathroom,
    Toilet,
    /// No function given.
    #[default]
    Unspecified,
}

/// Inclusive nominal-flow bounds in m³/h.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowBounds {
    pub min: f64,
    pub max: f64,
}

impl FlowBounds {
    /// Cap at `max` first, then lift to `min`.
    pub fn clamp(self, flow: f64) -> f64 {
        flow.min(self.max).max(self.min)
    }
}

impl RoomType {
    pub const ALL: [RoomType; 7] = [
        RoomType::Living,
        RoomType::Kitchen,
        RoomType::Bedroom,
        RoomType::Laundry,
        RoomType::Bathroom,
        RoomType::Toilet,
        RoomType::Unspecified,
    ];

    pub fn flow_bounds(self) -> FlowBounds {
        let (min, max) = match self {
            RoomType::Living => (75.0, 150.0),
            RoomType::Kitchen => (50.0, 75.0),
            RoomType::Bedroom => (25.0, 72.0),
            RoomType::Laundry => (50.0, 75.0),
            RoomType::Bathroom => (50.0, 150.0),
            RoomType::Toilet => (25.0, 25.0),
            RoomType::Unspecified => (0.0, 150.0),
        };
        FlowBounds { min, max }
    }

    /// Dry rooms receive outdoor supply air; all others are exhausted.
    pub fn is_supply(self) -> bool {
        matches!(self, RoomType::Living | RoomType::Bedroom)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoomType::Living => "Living",
            RoomType::Kitchen => "Kitchen",
            RoomType::Bedroom => "Bedroom",
            RoomType::Laundry => "Laundry",
            RoomType::Bathroom => "Bathroom",
            RoomType::Toilet => "Toilet",
            RoomType::Unspecified => "None",
        }
    }

    /// Parse an optional key; an absent key means [`RoomType::Unspecified`].
    pub fn from_key(key: Option<&str>) -> Result<Self, ConfigError> {
        key.map_or(Ok(RoomType::Unspecified), |k| k.parse())
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomType::ALL
            .into_iter()
            .find(|room_type| room_type.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownRoomType(s.to_string()))
    }
}

/// Ventilation calculation method, carrying exactly the keys it consults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VentilationMethod {
    /// Fixed air-change rate per system.
    Simple { system: VentilationSystem },
    /// Table method keyed by room function.
    NbnD50001 {
        system: VentilationSystem,
        room_type: RoomType,
    },
    /// Unknown method name. Contributes no ventilation flow.
    Unrecognized(String),
}

impl Default for VentilationMethod {
    fn default() -> Self {
        VentilationMethod::Simple {
            system: VentilationSystem::default(),
        }
    }
}

impl VentilationMethod {
    /// Build a method from its string keys.
    ///
    /// Only the keys the method actually uses are parsed: the simple method
    /// never looks at `room_type`, the table method reads `v_system` only as
    /// a heat-recovery switch, and an unrecognized method looks at neither
    /// key.
    pub fn resolve(
        method: &str,
        v_system: &str,
        room_type: Option<&str>,
    ) -> Result<Self, ConfigError> {
        match method {
            METHOD_SIMPLE => Ok(VentilationMethod::Simple {
                system: v_system.parse()?,
            }),
            METHOD_NBN_D_50_001 => Ok(VentilationMethod::NbnD50001 {
                system: VentilationSystem::from_recovery_key(v_system),
                room_type: RoomType::from_key(room_type)?,
            }),
            other => {
                warn!(
                    method = other,
                    "unrecognized ventilation calculation method, ventilation flow set to zero"
                );
                Ok(VentilationMethod::Unrecognized(other.to_string()))
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            VentilationMethod::Simple { .. } => METHOD_SIMPLE,
            VentilationMethod::NbnD50001 { .. } => METHOD_NBN_D_50_001,
            VentilationMethod::Unrecognized(name) => name,
        }
    }

    pub fn system(&self) -> Option<VentilationSystem> {
        match self {
            VentilationMethod::Simple { system } | VentilationMethod::NbnD50001 { system, .. } => {
                Some(*system)
            }
            VentilationMethod::Unrecognized(_) => None,
        }
    }
}

/// Volume flows exchanged with outdoor air and with neighbouring rooms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowPair {
    pub from_outside: VolumeRate,
    pub from_inside: VolumeRate,
}

impl FlowPair {
    pub fn zero() -> Self {
        Self::from_m3ph(0.0, 0.0)
    }

    pub fn from_m3ph(from_outside: f64, from_inside: f64) -> Self {
        Self {
            from_outside: m3ph(from_outside),
            from_inside: m3ph(from_inside),
        }
    }

    pub fn outside_m3ph(&self) -> f64 {
        as_m3ph(self.from_outside)
    }

    pub fn inside_m3ph(&self) -> f64 {
        as_m3ph(self.from_inside)
    }
}

/// Estimate the room's ventilation flows under its configured method.
pub fn estimate_flows(room: &RoomConfig) -> FlowPair {
    let flows = match &room.ventilation {
        VentilationMethod::Simple { system } => simple_flows(room.volume_m3(), *system),
        VentilationMethod::NbnD50001 { system, room_type } => {
            nbn_flows(room.floor_area.value, *system, *room_type)
        }
        VentilationMethod::Unrecognized(_) => FlowPair::zero(),
    };

    debug!(
        method = room.ventilation.name(),
        from_outside_m3ph = flows.outside_m3ph(),
        from_inside_m3ph = flows.inside_m3ph(),
        "ventilation flows"
    );

    flows
}

/// All air is drawn from outdoors; wet rooms on system C are overestimated.
fn simple_flows(volume_m3: f64, system: VentilationSystem) -> FlowPair {
    FlowPair::from_m3ph(volume_m3 * system.air_change_rate(), 0.0)
}

fn nbn_flows(floor_area_m2: f64, system: VentilationSystem, room_type: RoomType) -> FlowPair {
    let nominal = room_type.flow_bounds().clamp(NBN_FLOW_PER_M2 * floor_area_m2);

    if room_type.is_supply() {
        // Recovery only ever reduces supply air.
        let supply = if system.has_heat_recovery() {
            nominal * RECOVERY_FACTOR
        } else {
            nominal
        };
        FlowPair::from_m3ph(supply, 0.0)
    } else {
        FlowPair::from_m3ph(0.0, nominal)
    }
}
