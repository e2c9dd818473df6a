use crate::core::math::{clamp_lenient, round_half_up};
use crate::domain::config::EngineConfig;
use crate::domain::errors::ConstructionError;
use crate::domain::options::ShapeOptions;
use crate::spatial::mesh::{optimize_mesh, trim_mesh, Mesh, StampMode};

use super::Shape;

/// Flatten `shapes` into one `custom` shape.
///
/// Shapes are composited onto a blank screen-sized grid the same way the
/// compositor draws them. With `useMeshOptimizationWhenCombining` the result
/// is cropped and placed where its first visible cell was; otherwise it is
/// only trimmed and sits at `(0, 0)`.
pub fn combine_meshes(shapes: &[Shape], config: &EngineConfig) -> Result<Shape, ConstructionError> {
    let mut canvas = Mesh::blank(config.width, config.height);
    for shape in shapes {
        let x = clamp_lenient(shape.x, 0.0, config.width as f64 - shape.width() as f64);
        let y = clamp_lenient(shape.y, 0.0, config.height as f64 - shape.height() as f64);
        let mode = StampMode {
            only_nonempty: shape.only_write_nonempty_pixels,
            replace_with_space: shape.replace_with_space,
        };
        canvas.stamp(shape.mesh(), round_half_up(y) as i64, round_half_up(x) as i64, mode);
    }

    let (mesh, x, y) = if config.use_mesh_optimization_when_combining {
        let optimized = optimize_mesh(&canvas);
        (optimized.mesh, optimized.x as f64, optimized.y as f64)
    } else {
        (trim_mesh(&canvas), 0.0, 0.0)
    };
    if mesh.is_empty() {
        return Err(ConstructionError::InvalidMesh("combined shapes have no visible cells".to_string()));
    }

    let mut options = ShapeOptions::at(x, y).with_mesh(&mesh.to_strings());
    options.character = shapes.first().map(|s| s.character().to_string());
    Shape::new("custom", &options, config)
}
