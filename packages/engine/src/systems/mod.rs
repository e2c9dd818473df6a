//! Per-frame systems. Each one is a set of free functions over
//! [`PhysicsBody`](crate::domain::PhysicsBody) slices and the engine config;
//! `simulation::World` owns the state they read and write.
//!
//! - physics    - gravity/friction integration
//! - collision  - broad and narrow phase, side flags
//! - render     - compositing shapes into a text frame
//! - controls   - keyboard/mouse driven movement

pub mod collision;
pub mod controls;
pub mod physics;
pub mod render;
