//! Error types for the chaos image cipher.

use std::fmt;

use thiserror::Error;

/// Identifies one of the three chaotic generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    /// Logistic map `x' = r·x·(1−x)`.
    Logistic,
    /// Henon map, two-dimensional.
    Henon,
    /// Chebyshev map `x' = cos(l·arccos x)`.
    Chebyshev,
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKind::Logistic => write!(f, "logistic"),
            MapKind::Henon => write!(f, "henon"),
            MapKind::Chebyshev => write!(f, "chebyshev"),
        }
    }
}

/// Axis along which adjacent pixel pairs are formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::Vertical => write!(f, "vertical"),
        }
    }
}

/// Errors produced by the chaos image cipher.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChaosCryptError {
    /// Seed outside the domain required by its map.
    #[error("Seed {value} is outside the {map} map domain")]
    InvalidSeed { map: MapKind, value: f64 },
    /// Map control parameter outside its usable range.
    #[error("Map parameter `{name}` has unusable value {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    /// Keystream shorter than the larger grid dimension.
    #[error("Keystream has {actual} bytes but at least {required} are required")]
    KeystreamTooShort { required: usize, actual: usize },
    /// Correlation undefined because a channel has zero variance.
    #[error("The {direction} correlation is undefined (zero variance)")]
    DegenerateCorrelation { direction: Direction },
    /// Grid or plane with a zero dimension.
    #[error("Grid dimensions {width}x{height} must both be at least 1")]
    InvalidDimensions { width: usize, height: usize },
    /// Raw buffer length does not match the declared dimensions.
    #[error("Buffer holds {actual} values but the dimensions require {expected}")]
    InvalidBufferLength { expected: usize, actual: usize },
    /// Planes merged into one grid disagree on shape.
    #[error("Plane shape {actual:?} does not match expected {expected:?}")]
    PlaneShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}
