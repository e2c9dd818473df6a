use crate::domain::Shape;
use crate::systems::render::{Frame, RenderOptions};

use super::step::FrameOutcome;
use super::timing::TickGate;
use super::World;

/// Called after every rendered frame. An `Err` counts as a failed callback.
pub type FrameCallback = Box<dyn FnMut(&Frame) -> Result<(), String>>;

/// Fps-gated driver for [`World::frame`].
///
/// The host calls [`RenderLoop::step`] from its own timer (for example
/// `requestAnimationFrame`); the loop decides whether a frame is due.
pub struct RenderLoop {
    gate: TickGate,
    options: RenderOptions,
    running: bool,
    first_run: bool,
    on_frame: Option<FrameCallback>,
    frames_rendered: u64,
}

impl RenderLoop {
    pub fn new(fps: f64, start_ms: f64) -> Self {
        RenderLoop {
            gate: TickGate::per_second(fps, start_ms),
            options: RenderOptions::default(),
            running: false,
            first_run: true,
            on_frame: None,
            frames_rendered: 0,
        }
    }

    /// Loop at the world's `renderPerSecond`.
    pub fn for_world(world: &World, start_ms: f64) -> Self {
        RenderLoop::new(world.config.render_per_second, start_ms)
    }

    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    pub fn set_on_frame(&mut self, callback: FrameCallback) {
        self.on_frame = Some(callback);
    }

    pub fn has_callback(&self) -> bool {
        self.on_frame.is_some()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Render a frame if the loop runs and one is due. The first step after
    /// construction always renders.
    pub fn step(&mut self, world: &mut World, shapes: &mut [Shape], now_ms: f64) -> Option<FrameOutcome> {
        if !self.running {
            return None;
        }
        let due = self.gate.poll(now_ms);
        if !(due || self.first_run) {
            return None;
        }
        self.first_run = false;

        let outcome = world.frame(shapes, now_ms, self.options);
        self.frames_rendered += 1;
        self.run_callback(&outcome.frame, world.config.stop_render_function_on_error);
        Some(outcome)
    }

    fn run_callback(&mut self, frame: &Frame, stop_on_error: bool) {
        let Some(callback) = self.on_frame.as_mut() else {
            return;
        };
        if let Err(e) = callback(frame) {
            if stop_on_error {
                log::error!("[RENDER_LOOP] frame callback failed, disabling it: {}", e);
                self.on_frame = None;
            } else {
                log::warn!("[RENDER_LOOP] frame callback failed: {}", e);
            }
        }
    }
}
