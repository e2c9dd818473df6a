use crate::core::{Point2D, Vec2D};
use crate::domain::config::EngineConfig;

use super::{CollisionSides, Rotation, Shape, ShapeId, ShapeKind};

/// Broad-phase family of a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyClass {
    Box,
    Line,
    Circle,
    Other,
}

/// What the integrator and collision detector need from a body.
///
/// Both systems work only through this trait, over the common fields
/// (position, velocity, point tables, flags).
pub trait PhysicsBody {
    fn id(&self) -> ShapeId;
    fn class(&self) -> BodyClass;

    fn position(&self) -> Vec2D;
    fn set_position(&mut self, position: Vec2D);
    /// Bounding box `(width, height)` in cells.
    fn size(&self) -> (f64, f64);

    fn velocity(&self) -> Vec2D;
    fn set_velocity(&mut self, velocity: Vec2D);
    fn rotation_mut(&mut self) -> &mut Rotation;

    fn has_gravity(&self) -> bool;
    fn collides(&self) -> bool;

    fn sides(&self) -> CollisionSides;
    fn sides_mut(&mut self) -> &mut CollisionSides;

    /// World points from the last `calculate()`.
    fn world_points(&self) -> &[Point2D];
    fn center(&self) -> Point2D;
    fn calculate(&mut self);

    fn weight(&self) -> f64;
    fn friction(&self) -> f64;
    fn recalculate_weight(&mut self, config: &EngineConfig);
}

impl PhysicsBody for Shape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn class(&self) -> BodyClass {
        match self.kind {
            ShapeKind::Rect { .. } => BodyClass::Box,
            ShapeKind::Line { .. } => BodyClass::Line,
            ShapeKind::Circle { .. } => BodyClass::Circle,
            _ => BodyClass::Other,
        }
    }

    fn position(&self) -> Vec2D {
        Vec2D::new(self.x, self.y)
    }

    fn set_position(&mut self, position: Vec2D) {
        self.x = position.x;
        self.y = position.y;
    }

    fn size(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    fn velocity(&self) -> Vec2D {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2D) {
        self.velocity = velocity;
    }

    fn rotation_mut(&mut self) -> &mut Rotation {
        &mut self.rotation
    }

    fn has_gravity(&self) -> bool {
        self.gravity
    }

    fn collides(&self) -> bool {
        self.collide
    }

    fn sides(&self) -> CollisionSides {
        self.sides
    }

    fn sides_mut(&mut self) -> &mut CollisionSides {
        &mut self.sides
    }

    fn world_points(&self) -> &[Point2D] {
        &self.upd_point_table
    }

    fn center(&self) -> Point2D {
        self.center_point
    }

    fn calculate(&mut self) {
        Shape::calculate(self)
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn friction(&self) -> f64 {
        self.friction
    }

    fn recalculate_weight(&mut self, config: &EngineConfig) {
        Shape::recalculate_weight(self, config)
    }
}
