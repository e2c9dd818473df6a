//! Domain model: engine configuration, construction options, errors and
//! the shape entity itself.

pub mod config;
pub mod errors;
pub mod options;
pub mod shape;

pub use config::EngineConfig;
pub use errors::{
    CollisionError, ConfigError, ConstructionError, GeometryError, IntegrationWarning, RenderError,
};
pub use options::ShapeOptions;
pub use shape::{
    combine_meshes, BodyClass, Camera, CollisionSides, PhysicsBody, Rotation, Shape, ShapeId, ShapeKind,
};
