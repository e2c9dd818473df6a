use serde::{Deserialize, Serialize};

use super::errors::ConstructionError;
use super::shape::Camera;

/// Options accepted by the shape factory.
///
/// Every key is optional at the parser level; each shape type decides which
/// ones it requires. Unknown keys are rejected so typos fail loudly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ShapeOptions {
    pub x: f64,
    pub y: f64,
    pub z: f64,

    pub width: Option<usize>,
    pub height: Option<usize>,
    pub depth: Option<usize>,
    pub radius: Option<usize>,
    pub length: Option<usize>,

    /// Only the first character is used.
    pub character: Option<String>,
    pub color: Option<String>,
    pub filled: Option<bool>,

    pub collide: Option<bool>,
    pub gravity: Option<bool>,
    /// Alias of `gravity`.
    pub physics: Option<bool>,
    pub enable_up: Option<bool>,
    pub enable_down: Option<bool>,
    pub enable_left: Option<bool>,
    pub enable_right: Option<bool>,

    /// Rows of a `custom` shape.
    pub mesh: Option<Vec<String>>,
    pub override_spaces_in_custom_shape: bool,

    // bline endpoints
    pub x1: Option<f64>,
    pub y1: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,

    pub override_render_limit: bool,
    pub only_write_nonempty_pixels: Option<bool>,
    pub replace_with_space: bool,

    pub camera: Option<Camera>,
}

impl ShapeOptions {
    pub fn from_json(json: &str) -> Result<Self, ConstructionError> {
        serde_json::from_str(json).map_err(|e| ConstructionError::InvalidOptions(e.to_string()))
    }

    pub fn at(x: f64, y: f64) -> Self {
        ShapeOptions { x, y, ..Default::default() }
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_char(mut self, ch: char) -> Self {
        self.character = Some(ch.to_string());
        self
    }

    pub fn with_gravity(mut self, gravity: bool) -> Self {
        self.gravity = Some(gravity);
        self
    }

    pub fn with_collide(mut self, collide: bool) -> Self {
        self.collide = Some(collide);
        self
    }

    pub fn with_radius(mut self, radius: usize) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_mesh<S: AsRef<str>>(mut self, rows: &[S]) -> Self {
        self.mesh = Some(rows.iter().map(|r| r.as_ref().to_string()).collect());
        self
    }

    /// `gravity` wins over its `physics` alias; both default to off.
    pub fn gravity_enabled(&self) -> bool {
        self.gravity.or(self.physics).unwrap_or(false)
    }
}
