use crate::domain::Shape;
use crate::systems::render::{Frame, RenderOptions};

use super::World;

/// Headless driver: runs a fixed number of frames at synthetic timestamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationLoop {
    pub fps: f64,
    pub start_ms: f64,
    pub options: RenderOptions,
}

impl SimulationLoop {
    pub fn new(fps: f64, start_ms: f64) -> Self {
        SimulationLoop { fps, start_ms, options: RenderOptions::default() }
    }

    /// Number of frames `run` produces for `seconds`.
    pub fn frame_count(&self, seconds: f64) -> usize {
        if !(self.fps.is_finite() && self.fps > 0.0 && seconds > 0.0) {
            return 0;
        }
        (self.fps * seconds).round() as usize
    }

    /// Timestamp of frame `k`.
    pub fn timestamp(&self, k: usize) -> f64 {
        self.start_ms + k as f64 * 1000.0 / self.fps
    }

    /// Run `round(fps * seconds)` frames and return them in order.
    pub fn run(&self, world: &mut World, shapes: &mut [Shape], seconds: f64) -> Vec<Frame> {
        let count = self.frame_count(seconds);
        log::debug!("[SIM_LOOP] {} frames at {} fps", count, self.fps);
        (1..=count)
            .map(|k| world.frame(shapes, self.timestamp(k), self.options).frame)
            .collect()
    }
}
