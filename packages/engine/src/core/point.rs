use serde::{Deserialize, Serialize};

/// Integer grid coordinate `[x, y]`.
pub type Cell = [i32; 2];

/// 2D point in world (character) space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 3D point used by wireframe solids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Cabinet-style projection: depth shifts right and up.
    pub fn project_ortho(&self) -> Point2D {
        Point2D::new(self.x + self.z, self.y - self.z)
    }

    /// Drop the y axis.
    pub fn project_basic(&self) -> Point2D {
        Point2D::new(self.x, self.z)
    }

    /// Perspective divide by `y`. A non-finite ratio collapses to zero.
    pub fn project_distance(&self, distance: f64) -> Point2D {
        let mut r = distance / self.y;
        if !r.is_finite() {
            log::warn!("[POINT3D] perspective ratio {} is out of bounds, using 0", r);
            r = 0.0;
        }
        Point2D::new(r * self.x, r * self.z)
    }

    /// Rotate around `center` by `theta` (about z) and `phi` (about x).
    pub fn rotate_center(&self, center: Point3D, theta: f64, phi: f64) -> Point3D {
        let (st, ct) = theta.sin_cos();
        let (sp, cp) = phi.sin_cos();

        let x = self.x - center.x;
        let y = self.y - center.y;
        let z = self.z - center.z;

        Point3D {
            x: ct * x - st * cp * y + st * sp * z + center.x,
            y: st * x + ct * cp * y - ct * sp * z + center.y,
            z: sp * y + cp * z + center.z,
        }
    }

    /// Rotate around the origin: z axis first, then y, then x.
    pub fn rotate_axis(&self, theta_x: f64, theta_y: f64, theta_z: f64) -> Point3D {
        let (sx, cx) = theta_x.sin_cos();
        let (sy, cy) = theta_y.sin_cos();
        let (sz, cz) = theta_z.sin_cos();

        let (mut x, mut y, mut z) = (self.x, self.y, self.z);

        let (px, py) = (x, y);
        x = px * cz - py * sz;
        y = py * cz + px * sz;

        let (px, pz) = (x, z);
        x = px * cy - pz * sy;
        z = pz * cy + px * sy;

        let (py, pz) = (y, z);
        y = py * cx - pz * sx;
        z = pz * cx + py * sx;

        Point3D { x, y, z }
    }

    pub fn rounded(&self) -> Point3D {
        use super::math::round_half_up;
        Point3D {
            x: round_half_up(self.x),
            y: round_half_up(self.y),
            z: round_half_up(self.z),
        }
    }
}
