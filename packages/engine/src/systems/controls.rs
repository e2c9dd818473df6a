//! Keyboard and mouse driven movement.
//!
//! The host feeds key/mouse state in; nothing here touches the DOM. Every
//! control respects the shape's `enable_up/down/left/right` flags.

use crate::core::math::round_half_up;
use crate::core::{Point2D, Vec2D};
use crate::domain::{EngineConfig, Shape};

/// Minimum time between two jumps.
pub const JUMP_COOLDOWN_MS: f64 = 900.0;
pub const JUMP_LIFT: f64 = 2.0;
pub const JUMP_VELOCITY: f64 = -10.0;
pub const DROP_VELOCITY: f64 = 10.0;
pub const WALK_VELOCITY: f64 = 5.0;

const KEY_LEFT: u32 = 37;
const KEY_UP: u32 = 38;
const KEY_RIGHT: u32 = 39;
const KEY_DOWN: u32 = 40;

/// Arrow keys currently held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    pub fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        KeyState { up, down, left, right }
    }

    /// Apply a DOM `keyCode` event. Returns `false` for non-arrow keys.
    pub fn set_key_code(&mut self, key_code: u32, pressed: bool) -> bool {
        match key_code {
            KEY_LEFT => self.left = pressed,
            KEY_UP => self.up = pressed,
            KEY_RIGHT => self.right = pressed,
            KEY_DOWN => self.down = pressed,
            _ => return false,
        }
        true
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Platformer-style control: jump, drop, walk.
#[derive(Clone, Debug)]
pub struct GravityController {
    cooldown_ms: f64,
    last_jump_ms: Option<f64>,
}

impl Default for GravityController {
    fn default() -> Self {
        GravityController { cooldown_ms: JUMP_COOLDOWN_MS, last_jump_ms: None }
    }
}

impl GravityController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cooldown(cooldown_ms: f64) -> Self {
        GravityController { cooldown_ms, last_jump_ms: None }
    }

    fn cooled_down(&self, now_ms: f64) -> bool {
        self.last_jump_ms.map_or(true, |last| now_ms - last > self.cooldown_ms)
    }

    /// Steer `shape` from `keys`. Returns `true` when anything changed.
    pub fn apply(&mut self, shape: &mut Shape, keys: KeyState, now_ms: f64, config: &EngineConfig) -> bool {
        let g = config.gravitational_constant.y;
        let terminal = config.terminal_velocity;
        let mut changed = false;

        if keys.up && shape.enable_up && shape.velocity.y < g && self.cooled_down(now_ms) {
            self.last_jump_ms = Some(now_ms);
            shape.y -= JUMP_LIFT;
            shape.velocity.y = JUMP_VELOCITY;
            changed = true;
        }
        if keys.down && shape.enable_down && (shape.on_floor(config.height) || shape.velocity.y < g) {
            shape.velocity.y = DROP_VELOCITY;
            changed = true;
        }
        let walking = shape.velocity.x.abs() < terminal;
        if keys.left && shape.enable_left && walking {
            shape.velocity.x = -WALK_VELOCITY;
            changed = true;
        }
        if keys.right && shape.enable_right && walking {
            shape.velocity.x = WALK_VELOCITY;
            changed = true;
        }
        changed
    }
}

/// Move the shape directly by `multiplier` cells per held key.
pub fn control_raw(shape: &mut Shape, keys: KeyState, multiplier: f64) {
    if keys.up && shape.enable_up {
        shape.y -= multiplier;
    }
    if keys.down && shape.enable_down {
        shape.y += multiplier;
    }
    if keys.left && shape.enable_left {
        shape.x -= multiplier;
    }
    if keys.right && shape.enable_right {
        shape.x += multiplier;
    }
}

/// Page pixel position to a screen cell, scaling the viewport onto the
/// `width` x `height` character grid.
pub fn mouse_to_cell(page: Point2D, offset: Point2D, viewport: (f64, f64), config: &EngineConfig) -> Option<Point2D> {
    let (vw, vh) = viewport;
    if vw <= 0.0 || vh <= 0.0 {
        log::warn!("[CONTROL_MOUSE] viewport {}x{} cannot be mapped to cells", vw, vh);
        return None;
    }
    let per_col = vw / config.width as f64;
    let per_row = vh / config.height as f64;
    Some(Point2D::new(
        round_half_up((page.x - offset.x) / per_col),
        round_half_up((page.y - offset.y) / per_row),
    ))
}

/// Follow the mouse cell. Each direction flag allows moving toward the
/// mouse along that direction only.
pub fn control_mouse(shape: &mut Shape, cell: Point2D) {
    if (shape.enable_up && cell.y <= shape.y) || (shape.enable_down && cell.y >= shape.y) {
        shape.y = cell.y;
    }
    if (shape.enable_left && cell.x <= shape.x) || (shape.enable_right && cell.x >= shape.x) {
        shape.x = cell.x;
    }
}

/// Point the velocity at `target`, no faster than `max_speed`.
pub fn move_towards(shape: &mut Shape, target: Point2D, max_speed: f64) {
    let delta = Vec2D::new(target.x - shape.x, target.y - shape.y);
    let distance = delta.length();
    shape.velocity = if distance == 0.0 {
        Vec2D::ZERO
    } else if distance > max_speed {
        delta.normalized(max_speed)
    } else {
        delta
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShapeOptions;

    fn player(config: &EngineConfig) -> Shape {
        let opts = ShapeOptions::at(10.0, 10.0).with_size(2, 2).with_gravity(true);
        Shape::new("rect", &opts, config).unwrap()
    }

    #[test]
    fn key_codes_map_to_arrows() {
        let mut keys = KeyState::default();
        assert!(keys.set_key_code(38, true));
        assert!(keys.set_key_code(37, true));
        assert!(!keys.set_key_code(65, true));
        assert_eq!(keys, KeyState::new(true, false, true, false));
        keys.set_key_code(38, false);
        assert!(!keys.up);
    }

    #[test]
    fn jump_has_a_cooldown() {
        let config = EngineConfig::default();
        let mut shape = player(&config);
        let mut controller = GravityController::new();
        let up = KeyState { up: true, ..Default::default() };

        assert!(controller.apply(&mut shape, up, 1000.0, &config));
        assert_eq!(shape.y, 8.0);
        assert_eq!(shape.velocity.y, JUMP_VELOCITY);

        shape.velocity.y = 0.0;
        assert!(!controller.apply(&mut shape, up, 1500.0, &config));
        assert_eq!(shape.y, 8.0);

        assert!(controller.apply(&mut shape, up, 2000.0, &config));
        assert_eq!(shape.y, 6.0);
    }

    #[test]
    fn walking_and_dropping() {
        let config = EngineConfig::default();
        let mut shape = player(&config);
        let mut controller = GravityController::new();
        let keys = KeyState { down: true, left: true, ..Default::default() };
        controller.apply(&mut shape, keys, 0.0, &config);
        assert_eq!(shape.velocity, Vec2D::new(-WALK_VELOCITY, DROP_VELOCITY));

        shape.enable_right = false;
        controller.apply(&mut shape, KeyState { right: true, ..Default::default() }, 0.0, &config);
        assert_eq!(shape.velocity.x, -WALK_VELOCITY);
    }

    #[test]
    fn raw_control_moves_by_multiplier() {
        let config = EngineConfig::default();
        let mut shape = player(&config);
        control_raw(&mut shape, KeyState { up: true, right: true, ..Default::default() }, 2.0);
        assert_eq!((shape.x, shape.y), (12.0, 8.0));
    }

    #[test]
    fn mouse_maps_pixels_to_cells() {
        let config = EngineConfig { width: 100, height: 50, ..EngineConfig::default() };
        let cell = mouse_to_cell(Point2D::new(420.0, 210.0), Point2D::new(20.0, 10.0), (1000.0, 500.0), &config);
        assert_eq!(cell, Some(Point2D::new(40.0, 20.0)));
        assert_eq!(mouse_to_cell(Point2D::default(), Point2D::default(), (0.0, 10.0), &config), None);
    }

    #[test]
    fn mouse_follow_respects_direction_flags() {
        let config = EngineConfig::default();
        let mut shape = player(&config);
        shape.enable_left = false;
        control_mouse(&mut shape, Point2D::new(4.0, 15.0));
        assert_eq!((shape.x, shape.y), (10.0, 15.0));
        control_mouse(&mut shape, Point2D::new(14.0, 15.0));
        assert_eq!(shape.x, 14.0);
    }

    #[test]
    fn move_towards_caps_speed() {
        let config = EngineConfig::default();
        let mut shape = player(&config);
        move_towards(&mut shape, Point2D::new(13.0, 14.0), 2.5);
        assert!((shape.velocity.length() - 2.5).abs() < 1e-12);
        move_towards(&mut shape, Point2D::new(11.0, 10.0), 2.5);
        assert_eq!(shape.velocity, Vec2D::new(1.0, 0.0));
        move_towards(&mut shape, Point2D::new(10.0, 10.0), 2.5);
        assert_eq!(shape.velocity, Vec2D::ZERO);
    }
}
