//! Configuration errors raised while turning string keys into engine options.

use thiserror::Error;

/// An option key that names no known strategy, system or room type.
///
/// These are fatal: no part of the calculation runs once one is raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown heat loss area estimation: '{0}' (expected fromFloorArea or fromExposedPerimeter)")]
    UnknownAreaEstimation(String),

    #[error("Unknown ventilation system: '{0}' (expected C or D)")]
    UnknownVentilationSystem(String),

    #[error("Unknown room type: '{0}'")]
    UnknownRoomType(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_key() {
        let err = ConfigError::UnknownRoomType("Bahtroom".into());
        assert!(err.to_string().contains("Bahtroom"));

        let err = ConfigError::UnknownAreaEstimation("fromVolume".into());
        assert!(err.to_string().contains("fromExposedPerimeter"));
    }
}
