//! rl-engine: steady-state design heat loss of a single room.
//!
//! The engine is three independent steps feeding one result:
//! - `envelope` estimates the heat-loss surfaces from room geometry
//! - `ventilation` estimates outdoor and inter-zone airflow
//! - `aggregate` turns areas, flows and boundary temperatures into
//!   transmission, ventilation, infiltration and neighbour losses
//!
//! Every input is a typed enumeration, so once a [`RoomConfig`] exists the
//! calculation cannot fail. String-keyed options are turned into those
//! enumerations by the `FromStr` impls and [`VentilationMethod::resolve`],
//! which is where configuration errors surface.
//!
//! # Example
//!
//! ```
//! use rl_core::units::m2;
//! use rl_engine::{OutputMode, RoomConfig, VentilationMethod, VentilationSystem, compute};
//!
//! let room = RoomConfig::new(
//!     m2(10.0),
//!     0.24,
//!     0.24,
//!     0.7,
//!     VentilationMethod::Simple {
//!         system: VentilationSystem::ExhaustOnly,
//!     },
//! )
//! .with_airtightness(1.0, 0.2)
//! .on_ground(true);
//!
//! let loss = compute(&room, OutputMode::Total);
//! println!("Design heat loss: {:.0} W", loss.total().value);
//! ```

pub mod aggregate;
pub mod config;
pub mod envelope;
pub mod error;
pub mod ventilation;

// Re-exports
pub use aggregate::{HeatLoss, HeatLossBreakdown, aggregate, compute};
pub use config::{AreaEstimation, OutputMode, RoomConfig};
pub use envelope::{AreaSet, estimate_areas};
pub use error::{ConfigError, ConfigResult};
pub use ventilation::{
    FlowBounds, FlowPair, RoomType, VentilationMethod, VentilationSystem, estimate_flows,
};
