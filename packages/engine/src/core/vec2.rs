use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use super::math::{degrees_to_radians, radians_to_degrees};

/// 2D vector for velocities, forces and constants.
///
/// Operators (`+`, `-`, `*`, `/`) return a new vector; the `*Assign`
/// operators and the `&mut self` helpers (`normalize`, `rotate`, `limit`,
/// `mix`) modify in place. `Vec2D * Vec2D` and `Vec2D / Vec2D` are
/// component-wise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2D {
    pub x: f64,
    pub y: f64,
}

impl Vec2D {
    pub const ZERO: Vec2D = Vec2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn dot(&self, other: Vec2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(&self, other: Vec2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn distance(&self, other: Vec2D) -> f64 {
        (*self - other).length()
    }

    /// Scale to length `mult`. A zero vector becomes `(1, 0)` instead of NaN.
    pub fn normalize(&mut self, mult: f64) -> &mut Self {
        let len = self.length();
        if len == 0.0 {
            self.x = 1.0;
            self.y = 0.0;
        } else {
            self.x = self.x / len * mult;
            self.y = self.y / len * mult;
        }
        self
    }

    pub fn normalized(mut self, mult: f64) -> Self {
        self.normalize(mult);
        self
    }

    /// Multiply each component whose magnitude exceeds `max` by `factor`.
    pub fn limit(&mut self, max: f64, factor: f64) -> &mut Self {
        if self.x.abs() > max {
            self.x *= factor;
        }
        if self.y.abs() > max {
            self.y *= factor;
        }
        self
    }

    /// Linear blend toward `other`; `amount = 0.5` is the midpoint.
    pub fn mix(&mut self, other: Vec2D, amount: f64) -> &mut Self {
        self.x = (1.0 - amount) * self.x + amount * other.x;
        self.y = (1.0 - amount) * self.y + amount * other.y;
        self
    }

    pub fn rotate(&mut self, radians: f64) -> &mut Self {
        let (sin, cos) = radians.sin_cos();
        let nx = self.x * cos - self.y * sin;
        let ny = self.x * sin + self.y * cos;
        self.x = nx;
        self.y = ny;
        self
    }

    pub fn rotate_degrees(&mut self, degrees: f64) -> &mut Self {
        self.rotate(degrees_to_radians(degrees))
    }

    pub fn rotated(mut self, radians: f64) -> Self {
        self.rotate(radians);
        self
    }

    /// Horizontal convention: `atan2(y, x)`.
    pub fn angle_radians(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn angle_degrees(&self) -> f64 {
        radians_to_degrees(self.angle_radians())
    }

    /// Vertical convention: `atan2(x, y)`.
    pub fn vertical_angle_radians(&self) -> f64 {
        self.x.atan2(self.y)
    }

    pub fn vertical_angle_degrees(&self) -> f64 {
        radians_to_degrees(self.vertical_angle_radians())
    }
}

impl Add for Vec2D {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Vec2D {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Mul for Vec2D {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self { x: self.x * rhs.x, y: self.y * rhs.y }
    }
}

impl Div for Vec2D {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self { x: self.x / rhs.x, y: self.y / rhs.y }
    }
}

impl Mul<f64> for Vec2D {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Div<f64> for Vec2D {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}

impl Neg for Vec2D {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

impl AddAssign for Vec2D {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2D {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign for Vec2D {
    fn mul_assign(&mut self, rhs: Self) {
        self.x *= rhs.x;
        self.y *= rhs.y;
    }
}

impl DivAssign for Vec2D {
    fn div_assign(&mut self, rhs: Self) {
        self.x /= rhs.x;
        self.y /= rhs.y;
    }
}

impl MulAssign<f64> for Vec2D {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl DivAssign<f64> for Vec2D {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn pure_operators_leave_operands_untouched() {
        let a = Vec2D::new(1.0, 2.0);
        let b = Vec2D::new(3.0, 4.0);
        let c = a + b;
        assert_eq!(c, Vec2D::new(4.0, 6.0));
        assert_eq!(a, Vec2D::new(1.0, 2.0));
        assert_eq!(a * b, Vec2D::new(3.0, 8.0));
        assert_eq!(b / a, Vec2D::new(3.0, 2.0));
    }

    #[test]
    fn assign_operators_mutate() {
        let mut a = Vec2D::new(1.0, 2.0);
        a += Vec2D::new(1.0, 1.0);
        a *= 2.0;
        a -= Vec2D::new(1.0, 0.0);
        assert_eq!(a, Vec2D::new(3.0, 6.0));
        a /= Vec2D::new(3.0, 2.0);
        assert_eq!(a, Vec2D::new(1.0, 3.0));
    }

    #[test]
    fn normalize_zero_vector_points_right() {
        let mut v = Vec2D::zero();
        v.normalize(5.0);
        assert_eq!(v, Vec2D::new(1.0, 0.0));

        let n = Vec2D::new(3.0, 4.0).normalized(10.0);
        assert!(approx(n.x, 6.0) && approx(n.y, 8.0));
    }

    #[test]
    fn angles_and_products() {
        let v = Vec2D::new(0.0, 1.0);
        assert!(approx(v.angle_degrees(), 90.0));
        assert!(approx(v.vertical_angle_degrees(), 0.0));
        assert!(approx(Vec2D::new(1.0, 0.0).cross(v), 1.0));
        assert!(approx(Vec2D::new(2.0, 3.0).dot(Vec2D::new(4.0, 5.0)), 23.0));
        assert!(approx(Vec2D::new(0.0, 0.0).distance(Vec2D::new(3.0, 4.0)), 5.0));
    }

    #[test]
    fn rotate_quarter_turn() {
        let mut v = Vec2D::new(1.0, 0.0);
        v.rotate_degrees(90.0);
        assert!(approx(v.x, 0.0) && approx(v.y, 1.0));
    }

    #[test]
    fn rotated_leaves_the_original() {
        let v = Vec2D::new(0.0, 2.0);
        let r = v.rotated(std::f64::consts::PI);
        assert_eq!(v, Vec2D::new(0.0, 2.0));
        assert!(approx(r.x, 0.0) && approx(r.y, -2.0));
    }

    #[test]
    fn limit_and_mix() {
        let mut v = Vec2D::new(10.0, 1.0);
        v.limit(5.0, 0.5);
        assert_eq!(v, Vec2D::new(5.0, 1.0));
        v.mix(Vec2D::new(1.0, 1.0), 0.5);
        assert_eq!(v, Vec2D::new(3.0, 1.0));
    }
}
