//! Shape factory: `(type tag, options) -> Shape`.

use crate::core::{Point2D, Point3D, Vec2D};
use crate::domain::config::EngineConfig;
use crate::domain::errors::{ConstructionError, GeometryError};
use crate::domain::options::ShapeOptions;
use crate::spatial::mesh::{coords_to_mesh, trim_mesh, Mesh, MAX_MESH_EXTENT};

use super::primitives;
use super::solid::{Solid, SolidKind};
use super::{CollisionSides, Rotation, Shape, ShapeId, ShapeKind};

const DEFAULT_SIZE: usize = 10;

/// Zero counts as "not given", like an unset option.
fn dim(value: Option<usize>, default: usize) -> usize {
    value.filter(|&v| v > 0).unwrap_or(default)
}

/// Primitive grids are allocated up front, so oversized ones fail here.
fn check_extent(width: usize, height: usize) -> Result<(), GeometryError> {
    if width > MAX_MESH_EXTENT || height > MAX_MESH_EXTENT {
        return Err(GeometryError::ExtentTooLarge { width, height });
    }
    Ok(())
}

impl Shape {
    /// Build a shape from a type tag (`rect`/`box`, `line`, `bline`,
    /// `triangle`, `circle`, `custom`, `cube`, `pyramid`).
    pub fn new(tag: &str, options: &ShapeOptions, config: &EngineConfig) -> Result<Shape, ConstructionError> {
        let character = options
            .character
            .as_deref()
            .and_then(|s| s.chars().next())
            .unwrap_or(config.default_shape_char);
        let (mut x, mut y) = (options.x, options.y);
        if !x.is_finite() || !y.is_finite() {
            return Err(ConstructionError::InvalidOptions(format!("position ({}, {}) is not finite", x, y)));
        }

        let mut spaces_are_solid = false;
        let (kind, mesh) = match tag {
            "rect" | "box" => {
                let filled = options.filled.unwrap_or(true);
                let (width, height) = (dim(options.width, DEFAULT_SIZE), dim(options.height, DEFAULT_SIZE));
                check_extent(width, height)?;
                let mesh = primitives::rect(width, height, filled, character);
                (ShapeKind::Rect { filled }, mesh)
            }
            "line" => {
                let length = dim(options.length, DEFAULT_SIZE);
                check_extent(length, 1)?;
                (ShapeKind::Line { length }, primitives::line(length, character))
            }
            "bline" => {
                let x1 = options.x1.unwrap_or(0.0);
                let y1 = options.y1.unwrap_or(0.0);
                let x2 = options.x2.unwrap_or(5.0);
                let y2 = options.y2.unwrap_or(5.0);
                let (mesh, dx, dy) = primitives::bline(Point2D::new(x1, y1), Point2D::new(x2, y2), character)?;
                x += dx;
                y += dy;
                (ShapeKind::BLine { x1, y1, x2, y2 }, mesh)
            }
            "triangle" => {
                let (width, height) = match (options.width.filter(|&w| w > 0), options.height.filter(|&h| h > 0)) {
                    (Some(w), Some(h)) => (w, h),
                    (Some(w), None) => (w, w / 2),
                    (None, Some(h)) => (h * 2, h),
                    (None, None) => {
                        return Err(ConstructionError::MissingParameter { shape: "triangle", field: "width or height" });
                    }
                };
                check_extent(width, height)?;
                (ShapeKind::Triangle, primitives::triangle(width, height, character))
            }
            "circle" => {
                let radius = dim(options.radius, DEFAULT_SIZE);
                let filled = options.filled.unwrap_or(false);
                let size = radius.saturating_mul(2).saturating_add(1);
                check_extent(size, size)?;
                (ShapeKind::Circle { radius, filled }, primitives::circle(radius, filled, character))
            }
            "custom" => {
                let Some(rows) = options.mesh.as_ref() else {
                    return Err(ConstructionError::MissingParameter { shape: "custom", field: "mesh" });
                };
                if rows.iter().all(|r| r.is_empty()) {
                    return Err(ConstructionError::InvalidMesh("custom mesh has no cells".to_string()));
                }
                spaces_are_solid = options.override_spaces_in_custom_shape;
                let mesh = Mesh::from_rows(rows);
                if !spaces_are_solid && mesh.solid_count() == 0 {
                    return Err(ConstructionError::InvalidMesh("custom mesh has only spaces".to_string()));
                }
                let override_spaces = spaces_are_solid;
                (ShapeKind::Custom { override_spaces }, mesh)
            }
            "cube" | "pyramid" => {
                let solid_kind = if tag == "cube" { SolidKind::Cube } else { SolidKind::Pyramid };
                let solid = Solid::new(
                    solid_kind,
                    Point3D::new(x, y, options.z),
                    dim(options.width, DEFAULT_SIZE) as f64,
                    dim(options.height, DEFAULT_SIZE) as f64,
                    dim(options.depth, DEFAULT_SIZE) as f64,
                    options.camera.unwrap_or_default(),
                );
                let placed = coords_to_mesh(&solid.coords()?, character)?;
                let kind = match solid_kind {
                    SolidKind::Cube => ShapeKind::Cube(solid),
                    SolidKind::Pyramid => ShapeKind::Pyramid(solid),
                };
                (kind, placed.mesh)
            }
            other => return Err(ConstructionError::UnknownShapeType(other.to_string())),
        };

        // solid spaces are cells too; trimming would drop them
        let mesh = if config.trim_mesh_on_shape_creation && !spaces_are_solid { trim_mesh(&mesh) } else { mesh };

        let mut shape = Shape {
            id: ShapeId::next(),
            kind,
            character,
            color: options.color.clone().unwrap_or_else(|| "black".to_string()),
            mesh: Mesh::new(),
            width: 0,
            height: 0,
            point_table: Vec::new(),
            spaces_are_solid,
            x,
            y,
            upd_point_table: Vec::new(),
            center_point: Point2D::default(),
            velocity: Vec2D::zero(),
            acceleration: Vec2D::zero(),
            rotation: Rotation::default(),
            characters: 0,
            mass: 0.0,
            weight: 0.0,
            friction: 0.0,
            sides: CollisionSides::default(),
            gravity: options.gravity_enabled(),
            collide: options.collide.unwrap_or(true),
            enable_up: options.enable_up.unwrap_or(true),
            enable_down: options.enable_down.unwrap_or(true),
            enable_left: options.enable_left.unwrap_or(true),
            enable_right: options.enable_right.unwrap_or(true),
            override_render_limit: options.override_render_limit,
            only_write_nonempty_pixels: options.only_write_nonempty_pixels.unwrap_or(true),
            replace_with_space: options.replace_with_space,
        };
        shape.set_mesh(mesh);
        shape.recalculate_weight(config);
        shape.calculate();

        log::debug!(
            "[SHAPE_CONSTRUCT] {} {} at ({}, {}) {}x{} with {} points",
            shape.tag(),
            shape.id,
            shape.x,
            shape.y,
            shape.width,
            shape.height,
            shape.point_table.len()
        );
        Ok(shape)
    }

    /// Parse `options_json` and build.
    pub fn from_json(tag: &str, options_json: &str, config: &EngineConfig) -> Result<Shape, ConstructionError> {
        let options = ShapeOptions::from_json(options_json)?;
        Shape::new(tag, &options, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn filled_rect_has_hundred_points() {
        let opts = ShapeOptions::at(0.0, 0.0).with_size(10, 10).with_char('*');
        let shape = Shape::new("rect", &opts, &cfg()).unwrap();
        assert_eq!(shape.mesh().height(), 10);
        for row in shape.mesh().to_strings() {
            assert_eq!(row, "**********");
        }
        assert_eq!(shape.point_table().len(), 100);
        assert_eq!(shape.characters(), 100);
    }

    #[test]
    fn weight_follows_square_root_law() {
        let opts = ShapeOptions::at(0.0, 0.0).with_size(4, 4);
        let shape = Shape::new("box", &opts, &cfg()).unwrap();
        let expected_mass = 4.0 * 0.4;
        assert!((shape.mass() - expected_mass).abs() < 1e-12);
        assert!((shape.weight() - 0.05 * expected_mass).abs() < 1e-12);
        assert!((shape.friction() - shape.weight()).abs() < 1e-12);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = Shape::new("hexagon", &ShapeOptions::default(), &cfg()).unwrap_err();
        assert_eq!(err, ConstructionError::UnknownShapeType("hexagon".to_string()));
    }

    #[test]
    fn custom_requires_a_mesh() {
        let err = Shape::new("custom", &ShapeOptions::default(), &cfg()).unwrap_err();
        assert!(matches!(err, ConstructionError::MissingParameter { field: "mesh", .. }));

        let empty = ShapeOptions::default().with_mesh::<&str>(&[]);
        let err = Shape::new("custom", &empty, &cfg()).unwrap_err();
        assert!(matches!(err, ConstructionError::InvalidMesh(_)));
    }

    #[test]
    fn triangle_needs_a_dimension() {
        let err = Shape::new("triangle", &ShapeOptions::default(), &cfg()).unwrap_err();
        assert!(matches!(err, ConstructionError::MissingParameter { shape: "triangle", .. }));

        let mut opts = ShapeOptions::default();
        opts.height = Some(3);
        let tri = Shape::new("triangle", &opts, &cfg()).unwrap();
        assert_eq!(tri.height(), 3);
        assert_eq!(tri.point_table().len(), 1 + 3 + 5);
    }

    #[test]
    fn custom_override_counts_spaces() {
        let mut opts = ShapeOptions::default().with_mesh(&["a a", "aaa"]);
        let plain = Shape::new("custom", &opts, &cfg()).unwrap();
        assert_eq!(plain.point_table().len(), 5);

        opts.override_spaces_in_custom_shape = true;
        let solid = Shape::new("custom", &opts, &cfg()).unwrap();
        assert_eq!(solid.point_table().len(), 6);
    }

    #[test]
    fn custom_of_only_spaces_is_rejected() {
        let opts = ShapeOptions::default().with_mesh(&["   ", "  "]);
        let err = Shape::new("custom", &opts, &cfg()).unwrap_err();
        assert!(matches!(err, ConstructionError::InvalidMesh(_)));
    }

    #[test]
    fn solid_spaces_survive_trimming() {
        let mut opts = ShapeOptions::default().with_mesh(&["a  ", "aaa", "   "]);
        opts.override_spaces_in_custom_shape = true;
        let shape = Shape::new("custom", &opts, &cfg()).unwrap();
        assert_eq!((shape.width(), shape.height()), (3, 3));
        assert_eq!(shape.point_table().len(), 9);
        assert_eq!(shape.characters(), 9);
    }

    #[test]
    fn oversized_primitives_fail_before_allocating() {
        let opts = ShapeOptions::default().with_size(200_000, 3);
        let err = Shape::new("rect", &opts, &cfg()).unwrap_err();
        assert_eq!(err, ConstructionError::Geometry(GeometryError::ExtentTooLarge { width: 200_000, height: 3 }));

        let mut opts = ShapeOptions::default();
        opts.radius = Some(usize::MAX);
        let err = Shape::new("circle", &opts, &cfg()).unwrap_err();
        assert!(matches!(err, ConstructionError::Geometry(GeometryError::ExtentTooLarge { .. })));

        opts.length = Some(MAX_MESH_EXTENT + 1);
        assert!(Shape::new("line", &opts, &cfg()).is_err());
        assert!(Shape::new("line", &ShapeOptions::default(), &cfg()).is_ok());
    }

    #[test]
    fn weight_counts_own_character_or_every_custom_cell() {
        let rect = Shape::new("rect", &ShapeOptions::default().with_size(3, 2).with_char('#'), &cfg()).unwrap();
        assert_eq!(rect.characters(), 6);

        let mixed = Shape::new("custom", &ShapeOptions::default().with_mesh(&["ab", "c "]), &cfg()).unwrap();
        assert_eq!(mixed.characters(), 3);
    }

    #[test]
    fn bline_moves_shape_to_line_start() {
        let mut opts = ShapeOptions::at(10.0, 10.0);
        opts.x1 = Some(2.0);
        opts.y1 = Some(1.0);
        opts.x2 = Some(6.0);
        opts.y2 = Some(1.0);
        let shape = Shape::new("bline", &opts, &cfg()).unwrap();
        assert_eq!((shape.x, shape.y), (12.0, 11.0));
        assert_eq!(shape.mesh().to_strings(), vec!["*****"]);
    }

    #[test]
    fn cube_builds_a_wireframe() {
        let mut opts = ShapeOptions::at(30.0, 30.0);
        opts.width = Some(6);
        opts.height = Some(6);
        opts.depth = Some(6);
        let mut cube = Shape::new("cube", &opts, &cfg()).unwrap();
        assert!(cube.point_table().len() > 8);
        assert_eq!(cube.point_table().len(), cube.mesh().solid_count());

        assert!(cube.translate(1.0, 2.0, 0.0));
        assert_eq!((cube.x, cube.y), (31.0, 32.0));
        assert_eq!(cube.point_table().len(), cube.mesh().solid_count());
    }

    #[test]
    fn ids_are_unique() {
        let a = Shape::new("line", &ShapeOptions::default(), &cfg()).unwrap();
        let b = Shape::new("line", &ShapeOptions::default(), &cfg()).unwrap();
        assert_ne!(a.id(), b.id());
    }
}
