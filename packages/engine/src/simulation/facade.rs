use std::fmt::Display;

use wasm_bindgen::prelude::*;

use crate::core::Point2D;
use crate::domain::{combine_meshes, Shape, ShapeId};
use crate::systems::controls::{control_mouse, mouse_to_cell, GravityController, KeyState};
use crate::systems::render::RenderOptions;

use super::perf_stats::FrameStats;
use super::perf_timer::now_ms;
use super::render_loop::RenderLoop;
use super::World;

fn js_err<E: Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Browser-facing scene: a world plus the shapes it simulates.
#[wasm_bindgen]
pub struct AsciiWorld {
    world: World,
    shapes: Vec<Shape>,
    render_loop: RenderLoop,
    keys: KeyState,
    controller: GravityController,
    controlled: Option<ShapeId>,
    mouse: Option<Point2D>,
}

impl AsciiWorld {
    fn shape_mut(&mut self, id: u32) -> Option<&mut Shape> {
        let id = ShapeId::from_raw(id);
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    fn shape(&self, id: u32) -> Option<&Shape> {
        let id = ShapeId::from_raw(id);
        self.shapes.iter().find(|s| s.id() == id)
    }

    fn push(&mut self, shape: Shape) -> u32 {
        let id = shape.id().raw();
        self.shapes.push(shape);
        id
    }

    /// Keyboard and mouse input for the controlled shape.
    fn apply_input(&mut self, now_ms: f64) {
        let Some(id) = self.controlled else {
            return;
        };
        let (keys, mouse) = (self.keys, self.mouse);
        let config = self.world.config().clone();
        let Some(shape) = self.shapes.iter_mut().find(|s| s.id() == id) else {
            return;
        };
        if keys.any() {
            self.controller.apply(shape, keys, now_ms, &config);
        }
        if let Some(cell) = mouse {
            control_mouse(shape, cell);
        }
    }
}

#[wasm_bindgen]
impl AsciiWorld {
    /// Build a world from a camelCase JSON config; `"{}"` gives the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<AsciiWorld, JsValue> {
        let start = now_ms();
        let world = World::from_json(config_json, start).map_err(js_err)?;
        let render_loop = RenderLoop::for_world(&world, start);
        Ok(AsciiWorld {
            world,
            shapes: Vec::new(),
            render_loop,
            keys: KeyState::default(),
            controller: GravityController::new(),
            controlled: None,
            mouse: None,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> usize { self.world.config().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> usize { self.world.config().height }

    #[wasm_bindgen(getter)]
    pub fn shape_count(&self) -> usize { self.shapes.len() }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u64 { self.world.frame_count() }

    #[wasm_bindgen(getter)]
    pub fn collision_efficiency(&self) -> f64 { self.world.collision_efficiency() }

    pub fn set_gravity(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.world.set_gravity(x, y).map_err(js_err)
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.world.set_debug(debug);
    }

    /// Enable or disable per-phase timings (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.world.enable_perf_metrics(enabled);
    }

    /// Last frame's stats
    pub fn stats(&self) -> FrameStats {
        self.world.stats()
    }

    // === SHAPES ===

    /// Create a shape from its type tag and a camelCase options object.
    /// Returns the shape id.
    pub fn add_shape(&mut self, shape_type: &str, options_json: &str) -> Result<u32, JsValue> {
        let shape = Shape::from_json(shape_type, options_json, self.world.config()).map_err(js_err)?;
        Ok(self.push(shape))
    }

    /// Merge existing shapes into a new `custom` one. The sources stay.
    pub fn combine_shapes(&mut self, ids: Vec<u32>) -> Result<u32, JsValue> {
        let sources: Vec<Shape> = ids.iter().filter_map(|&id| self.shape(id).cloned()).collect();
        let combined = combine_meshes(&sources, self.world.config()).map_err(js_err)?;
        Ok(self.push(combined))
    }

    pub fn remove_shape(&mut self, id: u32) -> bool {
        let before = self.shapes.len();
        self.shapes.retain(|s| s.id().raw() != id);
        if self.controlled.map(ShapeId::raw) == Some(id) {
            self.controlled = None;
        }
        self.shapes.len() != before
    }

    pub fn set_position(&mut self, id: u32, x: f64, y: f64) -> bool {
        match self.shape_mut(id) {
            Some(shape) => {
                shape.x = x;
                shape.y = y;
                true
            }
            None => false,
        }
    }

    pub fn set_velocity(&mut self, id: u32, vx: f64, vy: f64) -> bool {
        match self.shape_mut(id) {
            Some(shape) => {
                shape.velocity.x = vx;
                shape.velocity.y = vy;
                true
            }
            None => false,
        }
    }

    pub fn get_x(&self, id: u32) -> Option<f64> {
        self.shape(id).map(|s| s.x)
    }

    pub fn get_y(&self, id: u32) -> Option<f64> {
        self.shape(id).map(|s| s.y)
    }

    pub fn get_vx(&self, id: u32) -> Option<f64> {
        self.shape(id).map(|s| s.velocity.x)
    }

    pub fn get_vy(&self, id: u32) -> Option<f64> {
        self.shape(id).map(|s| s.velocity.y)
    }

    // === INPUT ===

    /// Shape steered by keys and mouse. Unknown ids clear the selection.
    pub fn set_controlled(&mut self, id: u32) -> bool {
        self.controlled = self.shape(id).map(Shape::id);
        self.controlled.is_some()
    }

    pub fn set_keys(&mut self, up: bool, down: bool, left: bool, right: bool) {
        self.keys = KeyState::new(up, down, left, right);
    }

    /// Feed a DOM `keyCode`; non-arrow keys are ignored.
    pub fn key_event(&mut self, key_code: u32, pressed: bool) -> bool {
        self.keys.set_key_code(key_code, pressed)
    }

    /// Mouse in page pixels, relative to an element at `offset` of the given
    /// size. Positions outside the element clear the target.
    pub fn set_mouse(
        &mut self,
        page_x: f64,
        page_y: f64,
        offset_x: f64,
        offset_y: f64,
        view_width: f64,
        view_height: f64,
    ) -> bool {
        self.mouse = mouse_to_cell(
            Point2D::new(page_x, page_y),
            Point2D::new(offset_x, offset_y),
            (view_width, view_height),
            self.world.config(),
        );
        self.mouse.is_some()
    }

    pub fn clear_mouse(&mut self) {
        self.mouse = None;
    }

    // === FRAMES ===

    /// Send frames to the element with this id (newlines become `<br>`).
    #[cfg(target_arch = "wasm32")]
    pub fn attach_element(&mut self, element_id: &str) -> Result<(), JsValue> {
        let sink = crate::systems::render::DomSink::from_id(element_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", element_id)))?;
        let mut config = self.world.config().clone();
        config.newline = "<br>".to_string();
        self.world.set_config(config).map_err(js_err)?;
        self.world.set_sink(Box::new(sink));
        Ok(())
    }

    /// Input, physics, collisions and compositing in one call. Returns the
    /// frame text.
    pub fn frame(&mut self, now_ms: f64) -> String {
        self.apply_input(now_ms);
        self.world.frame(&mut self.shapes, now_ms, RenderOptions::default()).frame.text
    }

    pub fn start(&mut self) {
        self.render_loop.start();
    }

    pub fn stop(&mut self) {
        self.render_loop.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.render_loop.is_running() }

    /// Call from `requestAnimationFrame`: renders when the fps gate allows.
    pub fn tick(&mut self, now_ms: f64) -> Option<String> {
        if !self.render_loop.is_running() {
            return None;
        }
        self.apply_input(now_ms);
        self.render_loop
            .step(&mut self.world, &mut self.shapes, now_ms)
            .map(|outcome| outcome.frame.text)
    }

    pub fn recall_frame(&self) -> Option<String> {
        self.world.recall_frame().map(str::to_string)
    }

    pub fn display_saved_frame(&mut self, text: &str) -> bool {
        self.world.display_saved_frame(text)
    }

    pub fn clear(&mut self) {
        self.world.clear();
    }
}
