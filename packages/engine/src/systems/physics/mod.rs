//! Physics integrator.
//!
//! One delta time is computed per batch and shared by every body in it.
//! Per body, in order:
//! - clamp velocity to terminal velocity, snap vertical velocity on the floor
//! - optionally recompute weight
//! - move by the displacement for this delta (linear or damped)
//! - collision flags: vertical rebound, horizontal stop
//! - otherwise gravity and kinetic friction
//! - clamp to the screen and snap to the floor again
//!
//! Malformed bodies are skipped with a warning; the batch keeps going.

mod delta;
mod forces;
mod types;
mod update;

pub use delta::{delta_time, displacement, displacement_factor};
pub use forces::{apply_friction, clamp_velocity, vertical_response, REBOUND_VELOCITY};
pub use types::IntegrationReport;
pub use update::{clamp_to_screen, integrate_bodies, integrate_body};
