//! Asciiphys Engine - ASCII character physics in WASM
//!
//! Shapes are character meshes; the engine integrates them, resolves
//! collisions between them and composites everything into a text frame.
//!
//! Architecture:
//! - core/        - Vectors, points, rounding, logging
//! - spatial/     - Meshes and rasterisation
//! - domain/      - Config, options, errors, shapes
//! - systems/     - Physics, collisions, controls, compositing
//! - simulation/  - World orchestration, gates and loops
//! - api/         - Public API

pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Thread pool initialization for the parallel narrow phase
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logger.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init(false);
    log::log!(crate::core::logging::BANNER_LEVEL, "[INIT] asciiphys engine {}", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::{AsciiWorld, FrameStats};
pub use domain::{
    combine_meshes, CollisionError, ConfigError, ConstructionError, EngineConfig, PhysicsBody, Shape,
    ShapeId, ShapeOptions,
};
pub use simulation::{FrameOutcome, RenderLoop, SimulationLoop, TickGate, World};
pub use systems::render::{Frame, FrameSink, MemorySink, RenderOptions};
