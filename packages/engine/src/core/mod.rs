//! Core value types shared by every layer.
//!
//! - vec2     - 2D vector with pure and in-place arithmetic
//! - point    - 2D/3D points, projections and integer cells
//! - math     - rounding helpers matching browser semantics
//! - logging  - `log` backend writing to the browser console (stderr natively)

pub mod logging;
pub mod math;
pub mod point;
pub mod vec2;

pub use point::{Cell, Point2D, Point3D};
pub use vec2::Vec2D;
