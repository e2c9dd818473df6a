use wasm_bindgen::prelude::*;

/// Snapshot of the last frame. Timings stay zero unless perf metrics are on;
/// counters are always filled.
#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq)]
pub struct FrameStats {
    pub(super) frame_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) render_ms: f64,

    pub(super) frames: u32,
    pub(super) shapes: u32,
    pub(super) bodies_integrated: u32,
    pub(super) bodies_skipped: u32,
    pub(super) delta_time: f64,
    pub(super) current_fps: f64,

    pub(super) considered_pairs: u32,
    pub(super) narrow_pairs: u32,
    pub(super) contacts: u32,
    pub(super) collision_efficiency: f64,

    pub(super) chars_per_frame: u32,
    pub(super) render_errors: u32,
}

impl FrameStats {
    /// Clear per-frame fields; the frame counter and the last known rates
    /// carry over.
    pub(crate) fn reset(&mut self) {
        *self = FrameStats {
            frames: self.frames,
            delta_time: self.delta_time,
            current_fps: self.current_fps,
            collision_efficiency: self.collision_efficiency,
            ..FrameStats::default()
        };
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        FrameStats {
            frame_ms: 0.0,
            integrate_ms: 0.0,
            collision_ms: 0.0,
            render_ms: 0.0,

            frames: 0,
            shapes: 0,
            bodies_integrated: 0,
            bodies_skipped: 0,
            delta_time: 0.0,
            current_fps: 0.0,

            considered_pairs: 0,
            narrow_pairs: 0,
            contacts: 0,
            collision_efficiency: -1.0,

            chars_per_frame: 0,
            render_errors: 0,
        }
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u32 { self.frames }
    #[wasm_bindgen(getter)]
    pub fn shapes(&self) -> u32 { self.shapes }
    #[wasm_bindgen(getter)]
    pub fn bodies_integrated(&self) -> u32 { self.bodies_integrated }
    #[wasm_bindgen(getter)]
    pub fn bodies_skipped(&self) -> u32 { self.bodies_skipped }
    #[wasm_bindgen(getter)]
    pub fn delta_time(&self) -> f64 { self.delta_time }
    #[wasm_bindgen(getter)]
    pub fn current_fps(&self) -> f64 { self.current_fps }
    #[wasm_bindgen(getter)]
    pub fn considered_pairs(&self) -> u32 { self.considered_pairs }
    #[wasm_bindgen(getter)]
    pub fn narrow_pairs(&self) -> u32 { self.narrow_pairs }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn collision_efficiency(&self) -> f64 { self.collision_efficiency }
    #[wasm_bindgen(getter)]
    pub fn chars_per_frame(&self) -> u32 { self.chars_per_frame }
    #[wasm_bindgen(getter)]
    pub fn render_errors(&self) -> u32 { self.render_errors }
}
