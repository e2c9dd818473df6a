use crate::core::Vec2D;
use crate::domain::{CollisionSides, EngineConfig};

/// Vertical velocity after a top or bottom contact.
pub const REBOUND_VELOCITY: f64 = -0.25;

/// Clamp both components to `[-terminal, terminal]`.
#[inline]
pub fn clamp_velocity(velocity: Vec2D, terminal: f64) -> Vec2D {
    Vec2D::new(
        velocity.x.clamp(-terminal, terminal),
        velocity.y.clamp(-terminal, terminal),
    )
}

/// Landing rule: a vertical contact resets to a small rebound, otherwise
/// weight accumulates while the body is within terminal velocity.
pub fn vertical_response(vy: f64, weight: f64, sides: CollisionSides, terminal: f64) -> f64 {
    if sides.vertical() {
        REBOUND_VELOCITY
    } else if vy.abs() <= terminal {
        vy + weight
    } else {
        vy
    }
}

/// Horizontal contact stops the body; otherwise kinetic friction pulls `vx`
/// toward zero without crossing it. Anything slower than the friction
/// constant is snapped to rest.
pub fn apply_friction(vx: f64, friction: f64, sides: CollisionSides, config: &EngineConfig) -> f64 {
    let vx = if sides.horizontal() {
        0.0
    } else if vx > 0.0 {
        (vx - friction).max(0.0)
    } else if vx < 0.0 {
        (vx + friction).min(0.0)
    } else {
        0.0
    };
    if vx.abs() < config.friction_constant.x {
        0.0
    } else {
        vx
    }
}
