//! Error taxonomy.
//!
//! Per-shape and per-pair failures never abort a frame: callers log them and
//! move on. Only `ConfigError` is meant to stop startup.

use std::fmt;

use super::shape::ShapeId;

/// Degenerate geometry handed to the mesh builders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// `coords_to_mesh` got no coordinates.
    EmptyCoordinates,
    /// The coordinates span more cells than a mesh may hold.
    ExtentTooLarge { width: usize, height: usize },
    /// A 3D solid has no faces to project.
    NoFaces,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::EmptyCoordinates => write!(f, "coordinate list is empty"),
            GeometryError::ExtentTooLarge { width, height } => {
                write!(f, "coordinates span {}x{} cells", width, height)
            }
            GeometryError::NoFaces => write!(f, "solid has no faces"),
        }
    }
}

impl std::error::Error for GeometryError {}

/// A shape could not be built. Nothing outside the failed call is touched.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstructionError {
    UnknownShapeType(String),
    MissingParameter { shape: &'static str, field: &'static str },
    InvalidMesh(String),
    InvalidOptions(String),
    Geometry(GeometryError),
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::UnknownShapeType(tag) => write!(f, "unknown shape type '{}'", tag),
            ConstructionError::MissingParameter { shape, field } => {
                write!(f, "{} shape requires '{}'", shape, field)
            }
            ConstructionError::InvalidMesh(reason) => write!(f, "invalid mesh: {}", reason),
            ConstructionError::InvalidOptions(reason) => write!(f, "invalid options: {}", reason),
            ConstructionError::Geometry(e) => write!(f, "geometry error: {}", e),
        }
    }
}

impl std::error::Error for ConstructionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConstructionError::Geometry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GeometryError> for ConstructionError {
    fn from(e: GeometryError) -> Self {
        ConstructionError::Geometry(e)
    }
}

/// A body the integrator refused to advance this batch.
#[derive(Clone, Debug, PartialEq)]
pub struct IntegrationWarning {
    pub id: ShapeId,
    pub reason: String,
}

impl fmt::Display for IntegrationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape {} skipped: {}", self.id, self.reason)
    }
}

impl std::error::Error for IntegrationWarning {}

/// Collision routines were called with too few shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionError {
    TooFewShapes { found: usize },
}

impl fmt::Display for CollisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionError::TooFewShapes { found } => {
                write!(f, "collision detection needs at least 2 shapes, got {}", found)
            }
        }
    }
}

impl std::error::Error for CollisionError {}

/// A shape does not fit on the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderError {
    MeshTooLarge {
        id: ShapeId,
        width: usize,
        height: usize,
        screen_width: usize,
        screen_height: usize,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MeshTooLarge { id, width, height, screen_width, screen_height } => write!(
                f,
                "shape {} is {}x{}, larger than the {}x{} screen",
                id, width, height, screen_width, screen_height
            ),
        }
    }
}

impl std::error::Error for RenderError {}

/// Engine configuration rejected at startup.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    Parse(String),
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigError::Invalid { field, reason } => write!(f, "invalid {}: {}", field, reason),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
