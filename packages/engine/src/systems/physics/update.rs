use crate::core::math::clamp_lenient;
use crate::core::Vec2D;
use crate::domain::{EngineConfig, IntegrationWarning, PhysicsBody};

use super::delta::displacement;
use super::forces::{apply_friction, clamp_velocity, vertical_response};
use super::types::IntegrationReport;

/// Keep a `width` x `height` box inside the screen. Oversized boxes pin to 0.
pub fn clamp_to_screen(position: Vec2D, width: f64, height: f64, config: &EngineConfig) -> Vec2D {
    Vec2D::new(
        clamp_lenient(position.x, 0.0, config.width as f64 - width),
        clamp_lenient(position.y, 0.0, config.height as f64 - height),
    )
}

fn on_floor(y: f64, height: f64, config: &EngineConfig) -> bool {
    y + height == config.height as f64
}

/// Advance one body by `dt`.
///
/// Returns `Ok(false)` for bodies that take no part in gravity. A body with
/// non-finite position or velocity is rejected untouched.
pub fn integrate_body<B: PhysicsBody>(body: &mut B, dt: f64, config: &EngineConfig) -> Result<bool, IntegrationWarning> {
    if !(body.has_gravity() || config.all_gravity) {
        return Ok(false);
    }

    let position = body.position();
    let velocity = body.velocity();
    if !position.is_finite() || !velocity.is_finite() {
        return Err(IntegrationWarning {
            id: body.id(),
            reason: format!("non-finite state: position {:?}, velocity {:?}", position, velocity),
        });
    }

    body.calculate();
    let (width, height) = body.size();

    let mut v = clamp_velocity(velocity, config.terminal_velocity);
    if on_floor(position.y, height, config) {
        v.y = 0.0;
    }

    if config.recalculate_weight_on_frame {
        body.recalculate_weight(config);
    }

    let moved = position + displacement(v, dt, config);
    let rotation = body.rotation_mut();
    rotation.theta += rotation.omega * dt;

    if config.debug_mode {
        log::debug!(
            "[PHYSICS_UPDATE] {} moved by ({:.4}, {:.4}) with dt {:.4}",
            body.id(),
            moved.x - position.x,
            moved.y - position.y,
            dt
        );
    }

    let sides = body.sides();
    v.y = vertical_response(v.y, body.weight(), sides, config.terminal_velocity);
    v.x = apply_friction(v.x, body.friction(), sides, config);

    let clamped = clamp_to_screen(moved, width, height, config);
    if on_floor(clamped.y, height, config) {
        v.y = 0.0;
    }

    body.set_position(clamped);
    body.set_velocity(v);
    Ok(true)
}

/// Advance every body with the same `dt`. Malformed bodies are logged and
/// skipped; the rest of the batch still runs.
pub fn integrate_bodies<B: PhysicsBody>(bodies: &mut [B], dt: f64, config: &EngineConfig) -> IntegrationReport {
    let mut report = IntegrationReport { delta_time: dt, ..Default::default() };
    for body in bodies.iter_mut() {
        match integrate_body(body, dt, config) {
            Ok(true) => report.integrated += 1,
            Ok(false) => report.idle += 1,
            Err(warning) => {
                log::error!("[PHYSICS_UPDATE] skipping {}", warning);
                report.skipped.push(warning);
            }
        }
    }
    report
}
