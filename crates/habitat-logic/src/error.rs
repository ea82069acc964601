//! Error types for loading scene configuration and restored layouts.
//!
//! Nothing on the placement/scoring/advice path can fail; these only cover
//! reading and validating a [`SceneConfig`](crate::config::SceneConfig) and
//! deserializing a [`Habitat`](crate::placement::Habitat).

use std::fmt;

/// A single configuration validation finding.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Boundary radius must be positive.
    NonPositiveRadius(f32),
    /// Boundary centre must be finite.
    NonFiniteCenter { x: f32, y: f32 },
    /// An advice distance threshold must be positive.
    NonPositiveThreshold { name: &'static str, value: f32 },
    /// Capacity target of zero would make every layout "complete".
    ZeroCapacityTarget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveRadius(r) => {
                write!(f, "boundary radius must be positive, got {}", r)
            }
            ConfigError::NonFiniteCenter { x, y } => {
                write!(f, "boundary centre must be finite, got ({}, {})", x, y)
            }
            ConfigError::NonPositiveThreshold { name, value } => {
                write!(f, "{} must be positive, got {}", name, value)
            }
            ConfigError::ZeroCapacityTarget => write!(f, "target crew capacity must be at least 1"),
        }
    }
}

/// A restored layout that cannot be used as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Two modules share an id, so neither would see the other as a neighbour.
    DuplicateModuleId(u32),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::DuplicateModuleId(id) => write!(f, "duplicate module id {}", id),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Errors that can occur while loading a scene configuration.
#[derive(Debug)]
pub enum HabitatError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    InvalidConfig(Vec<ConfigError>),
}

impl From<std::io::Error> for HabitatError {
    fn from(e: std::io::Error) -> Self {
        HabitatError::Io(e)
    }
}

impl From<serde_json::Error> for HabitatError {
    fn from(e: serde_json::Error) -> Self {
        HabitatError::Parse(e)
    }
}

impl fmt::Display for HabitatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HabitatError::Io(e) => write!(f, "IO error: {}", e),
            HabitatError::Parse(e) => write!(f, "Config parse error: {}", e),
            HabitatError::InvalidConfig(errors) => {
                write!(f, "Invalid config: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for HabitatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HabitatError::Io(e) => Some(e),
            HabitatError::Parse(e) => Some(e),
            HabitatError::InvalidConfig(_) => None,
        }
    }
}
