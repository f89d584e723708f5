//! Aggregation of areas, flows and boundary temperatures into heat losses.

use crate::config::{OutputMode, RoomConfig};
use crate::envelope::{AreaSet, estimate_areas};
use crate::ventilation::{FlowPair, estimate_flows};
use rl_core::units::constants::AIR_HEAT_CAPACITY_WH_PER_M3K;
use rl_core::units::{Power, as_degc, w};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Design heat loss split by mechanism, all in watts.
///
/// Components are signed. `total` is always the plain sum of the other four.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatLossBreakdown {
    #[serde(rename = "totalHeatLoss")]
    pub total: Power,
    #[serde(rename = "transmissionHeatLoss")]
    pub transmission: Power,
    #[serde(rename = "ventilationHeatLoss")]
    pub ventilation: Power,
    #[serde(rename = "infiltrationHeatLoss")]
    pub infiltration: Power,
    #[serde(rename = "neighbourLosses")]
    pub neighbour: Power,
}

/// Result of [`compute`]: a scalar total or the full breakdown.
///
/// Serializes as a bare number or as the labelled breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeatLoss {
    Total(Power),
    Detailed(HeatLossBreakdown),
}

impl HeatLoss {
    pub fn total(&self) -> Power {
        match self {
            HeatLoss::Total(total) => *total,
            HeatLoss::Detailed(breakdown) => breakdown.total,
        }
    }

    pub fn breakdown(&self) -> Option<&HeatLossBreakdown> {
        match self {
            HeatLoss::Total(_) => None,
            HeatLoss::Detailed(breakdown) => Some(breakdown),
        }
    }
}

/// Combine the room's areas and flows into the four loss components.
pub fn aggregate(room: &RoomConfig, areas: &AreaSet, flows: &FlowPair) -> HeatLossBreakdown {
    let t_in = as_degc(room.t_in);
    let t_out = as_degc(room.t_out);
    let t_neighbour = as_degc(room.t_neighbour);

    let delta_t = t_in - t_out;
    // Transfer air from a warmer neighbour is never counted as a gain
    let inside_delta_t = (t_in - t_neighbour).max(0.0);

    let wall = areas.exterior_wall.value;
    let roof = areas.roof.value;
    let ground = areas.ground.value;

    let transmission =
        (wall * room.u_wall + roof * room.u_roof + ground * room.u_ground) * delta_t;

    let ventilation = AIR_HEAT_CAPACITY_WH_PER_M3K * flows.outside_m3ph() * delta_t
        + AIR_HEAT_CAPACITY_WH_PER_M3K * flows.inside_m3ph() * inside_delta_t;

    let infiltration = AIR_HEAT_CAPACITY_WH_PER_M3K
        * room.leakage_ratio
        * room.v50
        * (wall + roof + ground)
        * delta_t;

    // Unclamped: a warmer neighbour is a net gain here
    let neighbour = if room.add_neighbour_losses {
        room.u_neighbour * (t_in - t_neighbour) * areas.neighbour_envelope().value
    } else {
        0.0
    };

    let total = transmission + ventilation + infiltration + neighbour;

    debug!(
        transmission,
        ventilation,
        infiltration,
        neighbour,
        total,
        "heat loss components"
    );

    HeatLossBreakdown {
        total: w(total),
        transmission: w(transmission),
        ventilation: w(ventilation),
        infiltration: w(infiltration),
        neighbour: w(neighbour),
    }
}

/// Compute the design heat loss of one room.
///
/// Pure and stateless: rooms may be computed concurrently without
/// coordination.
pub fn compute(room: &RoomConfig, mode: OutputMode) -> HeatLoss {
    let areas = estimate_areas(room);
    let flows = estimate_flows(room);
    let breakdown = aggregate(room, &areas, &flows);

    match mode {
        OutputMode::Total => HeatLoss::Total(breakdown.total),
        OutputMode::Detailed => HeatLoss::Detailed(breakdown),
    }
}
