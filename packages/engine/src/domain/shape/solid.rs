//! Wireframe cube and pyramid projected onto the character grid.
//!
//! Vertex transforms return the displacement of vertex 0 so the owning shape
//! can move its 2D position along with the wireframe.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Point2D, Point3D};
use crate::domain::errors::GeometryError;
use crate::spatial::raster;

const CUBE_FACES: &[&[usize]] = &[
    &[0, 1, 2, 3], // front
    &[3, 2, 5, 4], // right
    &[4, 5, 6, 7], // back
    &[7, 6, 1, 0], // left
    &[7, 0, 3, 4], // bottom
    &[1, 6, 5, 2], // top
];

const PYRAMID_FACES: &[&[usize]] = &[
    &[3, 0, 1, 2], // base
    &[0, 1, 4],
    &[0, 3, 4],
    &[2, 3, 4],
    &[2, 1, 4],
];

fn default_distance() -> f64 {
    300.0
}

/// 3D -> 2D projection used when drawing a solid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Camera {
    /// `(x + z, y - z)`
    #[default]
    Orthographic,
    /// `(x, z)`
    Basic,
    /// `(r * x, r * z)` with `r = distance / y`
    Perspective {
        #[serde(default = "default_distance")]
        distance: f64,
    },
}

impl Camera {
    pub fn project(&self, p: Point3D) -> Point2D {
        match *self {
            Camera::Orthographic => p.project_ortho(),
            Camera::Basic => p.project_basic(),
            Camera::Perspective { distance } => p.project_distance(distance),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolidKind {
    Cube,
    Pyramid,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Solid {
    pub z: f64,
    pub depth: f64,
    pub camera: Camera,
    kind: SolidKind,
    vertices: Vec<Point3D>,
}

impl Solid {
    /// Vertices are laid out around `(x - w/2, y - h/2, z - d/2)` with a half
    /// extent of `(w/2 + h/2 + d/2) / 3`.
    pub fn new(kind: SolidKind, origin: Point3D, width: f64, height: f64, depth: f64, camera: Camera) -> Self {
        let (wr, hr, dr) = (width / 2.0, height / 2.0, depth / 2.0);
        let center = Point3D::new(origin.x - wr, origin.y - hr, origin.z - dr);
        let d = (hr + wr + dr) / 3.0;
        let (cx, cy, cz) = (center.x, center.y, center.z);

        let vertices = match kind {
            SolidKind::Cube => vec![
                Point3D::new(cx - d, cy - d, cz + d),
                Point3D::new(cx - d, cy - d, cz - d),
                Point3D::new(cx + d, cy - d, cz - d),
                Point3D::new(cx + d, cy - d, cz + d),
                Point3D::new(cx + d, cy + d, cz + d),
                Point3D::new(cx + d, cy + d, cz - d),
                Point3D::new(cx - d, cy + d, cz - d),
                Point3D::new(cx - d, cy + d, cz + d),
            ],
            SolidKind::Pyramid => vec![
                Point3D::new(cx - d, cy - d, cz + d),
                Point3D::new(cx + d, cy - d, cz + d),
                Point3D::new(cx + d, cy + d, cz + d),
                Point3D::new(cx - d, cy + d, cz + d),
                Point3D::new(cx, cy + d, cz),
            ],
        };

        Solid { z: origin.z, depth, camera, kind, vertices }
    }

    pub fn kind(&self) -> SolidKind {
        self.kind
    }

    pub fn vertices(&self) -> &[Point3D] {
        &self.vertices
    }

    fn faces(&self) -> &'static [&'static [usize]] {
        match self.kind {
            SolidKind::Cube => CUBE_FACES,
            SolidKind::Pyramid => PYRAMID_FACES,
        }
    }

    /// Mean of the vertices.
    pub fn centroid(&self) -> Point3D {
        let n = self.vertices.len().max(1) as f64;
        let (sx, sy, sz) = self
            .vertices
            .iter()
            .fold((0.0, 0.0, 0.0), |(x, y, z), v| (x + v.x, y + v.y, z + v.z));
        Point3D::new(sx / n, sy / n, sz / n)
    }

    /// Every face edge projected and rasterized, closing edge included.
    pub fn coords(&self) -> Result<Vec<Cell>, GeometryError> {
        let faces = self.faces();
        if faces.is_empty() {
            return Err(GeometryError::NoFaces);
        }
        let mut coords = Vec::new();
        for face in faces {
            let Some(&first) = face.first() else {
                continue;
            };
            let mut from = self.camera.project(self.vertices[first]);
            for j in 1..=face.len() {
                let to = self.camera.project(self.vertices[face[j % face.len()]]);
                coords.extend(raster::line(from, to));
                from = to;
            }
        }
        Ok(coords)
    }

    pub fn rotate_axis(&mut self, theta_x: f64, theta_y: f64, theta_z: f64) -> Point3D {
        self.map_vertices(|v| v.rotate_axis(theta_x, theta_y, theta_z))
    }

    pub fn rotate_center(&mut self, center: Point3D, theta: f64, phi: f64) -> Point3D {
        self.map_vertices(|v| v.rotate_center(center, theta, phi))
    }

    pub fn dilate(&mut self, mult: f64) -> Point3D {
        self.map_vertices(|v| Point3D::new(v.x * mult, v.y * mult, v.z * mult))
    }

    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) -> Point3D {
        self.map_vertices(|v| Point3D::new(v.x + dx, v.y + dy, v.z + dz))
    }

    /// Apply `f` to every vertex (rounded afterwards) and return how far
    /// vertex 0 moved before rounding.
    fn map_vertices<F>(&mut self, f: F) -> Point3D
    where
        F: Fn(&Point3D) -> Point3D,
    {
        let delta = match self.vertices.first() {
            Some(v0) => {
                let moved = f(v0);
                Point3D::new(moved.x - v0.x, moved.y - v0.y, moved.z - v0.z)
            }
            None => Point3D::default(),
        };
        for v in self.vertices.iter_mut() {
            *v = f(&*v).rounded();
        }
        delta
    }
}
