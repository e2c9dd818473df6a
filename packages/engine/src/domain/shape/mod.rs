//! Shape - a character mesh that moves as a unit
//!
//! The mesh is built once by the factory in `build.rs`. Every tick the
//! world-space point table and center are refreshed by `calculate()` and the
//! integrator advances position/velocity.
//!
//! Local cells are `(row, col)`; world points are `(col + x, row + y)`.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::core::{Point2D, Point3D, Vec2D};
use crate::domain::config::EngineConfig;
use crate::spatial::mesh::{coords_to_mesh, LocalCell, Mesh};

mod body;
mod build;
mod combine;
mod primitives;
mod solid;

pub use body::{BodyClass, PhysicsBody};
pub use combine::combine_meshes;
pub use solid::{Camera, Solid, SolidKind};

static NEXT_SHAPE_ID: AtomicU32 = AtomicU32::new(1);

/// Process-unique shape identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u32);

impl ShapeId {
    pub(crate) fn next() -> Self {
        ShapeId(NEXT_SHAPE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn from_raw(raw: u32) -> Self {
        ShapeId(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the shape was built from.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    Rect { filled: bool },
    Line { length: usize },
    BLine { x1: f64, y1: f64, x2: f64, y2: f64 },
    Triangle,
    Circle { radius: usize, filled: bool },
    Custom { override_spaces: bool },
    Cube(Solid),
    Pyramid(Solid),
}

impl ShapeKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ShapeKind::Rect { .. } => "rect",
            ShapeKind::Line { .. } => "line",
            ShapeKind::BLine { .. } => "bline",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Circle { .. } => "circle",
            ShapeKind::Custom { .. } => "custom",
            ShapeKind::Cube(_) => "cube",
            ShapeKind::Pyramid(_) => "pyramid",
        }
    }

    fn solid_mut(&mut self) -> Option<&mut Solid> {
        match self {
            ShapeKind::Cube(s) | ShapeKind::Pyramid(s) => Some(s),
            _ => None,
        }
    }
}

/// Sides touched during the current collision pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionSides {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl CollisionSides {
    pub fn reset(&mut self) {
        *self = CollisionSides::default();
    }

    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }

    pub fn vertical(&self) -> bool {
        self.top || self.bottom
    }

    pub fn horizontal(&self) -> bool {
        self.left || self.right
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    /// Radians.
    pub theta: f64,
    /// Radians per update.
    pub omega: f64,
}

#[derive(Clone)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    character: char,
    color: String,

    // === Geometry ===
    mesh: Mesh,
    width: usize,
    height: usize,
    point_table: Vec<LocalCell>,
    spaces_are_solid: bool,

    // === World placement ===
    pub x: f64,
    pub y: f64,
    upd_point_table: Vec<Point2D>,
    center_point: Point2D,

    // === Kinematics ===
    pub velocity: Vec2D,
    pub acceleration: Vec2D,
    pub rotation: Rotation,
    characters: usize,
    mass: f64,
    weight: f64,
    friction: f64,

    pub sides: CollisionSides,

    // === Flags ===
    pub gravity: bool,
    pub collide: bool,
    pub enable_up: bool,
    pub enable_down: bool,
    pub enable_left: bool,
    pub enable_right: bool,
    pub override_render_limit: bool,
    pub only_write_nonempty_pixels: bool,
    pub replace_with_space: bool,
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Solid local cells, unique, in row-major order.
    pub fn point_table(&self) -> &[LocalCell] {
        &self.point_table
    }

    /// World points from the last `calculate()`.
    pub fn upd_point_table(&self) -> &[Point2D] {
        &self.upd_point_table
    }

    /// First world point plus half the bounding box. An approximation of the
    /// middle, not a centroid.
    pub fn center_point(&self) -> Point2D {
        self.center_point
    }

    pub fn characters(&self) -> usize {
        self.characters
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn friction(&self) -> f64 {
        self.friction
    }

    /// Bottom edge sits exactly on the floor of a `world_height` screen.
    pub fn on_floor(&self, world_height: usize) -> bool {
        self.y + self.height as f64 == world_height as f64
    }

    /// Refresh the world point table and center from `x`/`y`.
    pub fn calculate(&mut self) {
        let (x, y) = (self.x, self.y);
        self.upd_point_table.clear();
        self.upd_point_table
            .extend(self.point_table.iter().map(|&(r, c)| Point2D::new(c as f64 + x, r as f64 + y)));

        let half_w = self.width as f64 / 2.0;
        let half_h = self.height as f64 / 2.0;
        self.center_point = match self.upd_point_table.first() {
            Some(p) => Point2D::new(p.x + half_w, p.y + half_h),
            None => Point2D::new(x + half_w, y + half_h),
        };
    }

    /// `mass = sqrt(characters) * weightPerCharacter`, weight and friction
    /// follow from the gravitational and friction constants.
    pub fn recalculate_weight(&mut self, config: &EngineConfig) {
        self.characters = match self.kind {
            _ if self.spaces_are_solid => self.point_table.len(),
            // combined shapes mix characters; every visible cell has mass
            ShapeKind::Custom { .. } => self.mesh.solid_count(),
            _ => self.mesh.count_char(self.character),
        };
        self.mass = (self.characters as f64).sqrt() * config.weight_per_character;
        self.weight = config.gravitational_constant.y * self.mass;
        self.friction = config.friction_constant.x * self.weight;
    }

    pub(crate) fn set_mesh(&mut self, mesh: Mesh) {
        let cells = if self.spaces_are_solid { mesh.all_cells() } else { mesh.solid_cells() };
        self.point_table = dedup_cells(cells);
        self.width = mesh.width();
        self.height = mesh.height();
        self.mesh = mesh;
    }

    // === 3D ===

    pub fn solid(&self) -> Option<&Solid> {
        match &self.kind {
            ShapeKind::Cube(s) | ShapeKind::Pyramid(s) => Some(s),
            _ => None,
        }
    }

    /// Rotate a cube/pyramid about the origin (z, then y, then x). Returns
    /// `false` for flat shapes.
    pub fn rotate_axis(&mut self, theta_x: f64, theta_y: f64, theta_z: f64) -> bool {
        self.transform_solid(|s| s.rotate_axis(theta_x, theta_y, theta_z))
    }

    pub fn rotate_center(&mut self, center: Point3D, theta: f64, phi: f64) -> bool {
        self.transform_solid(|s| s.rotate_center(center, theta, phi))
    }

    pub fn dilate(&mut self, mult: f64) -> bool {
        self.transform_solid(|s| s.dilate(mult))
    }

    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) -> bool {
        self.transform_solid(|s| s.translate(dx, dy, dz))
    }

    fn transform_solid<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut Solid) -> Point3D,
    {
        if self.solid().is_none() {
            log::warn!("[SHAPE] {} shape {} has no 3D vertices to transform", self.kind.tag(), self.id);
            return false;
        }
        let Some(solid) = self.kind.solid_mut() else {
            return false;
        };
        let delta = f(solid);
        solid.z += delta.z;
        self.x += delta.x;
        self.y += delta.y;
        self.regenerate_solid_mesh();
        true
    }

    /// Re-project a solid. Degenerate projections leave an empty mesh.
    fn regenerate_solid_mesh(&mut self) {
        let Some(solid) = self.solid() else {
            return;
        };
        let mesh = match solid.coords().and_then(|c| coords_to_mesh(&c, self.character)) {
            Ok(placed) => placed.mesh,
            Err(e) => {
                log::error!("[SHAPE] {} could not project solid: {}", self.id, e);
                Mesh::new()
            }
        };
        self.set_mesh(mesh);
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("id", &self.id)
            .field("type", &self.kind.tag())
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("velocity", &self.velocity)
            .field("sides", &self.sides)
            .finish()
    }
}

fn dedup_cells(cells: Vec<LocalCell>) -> Vec<LocalCell> {
    let mut seen = HashSet::with_capacity(cells.len());
    cells.into_iter().filter(|c| seen.insert(*c)).collect()
}
