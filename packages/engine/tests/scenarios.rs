use std::collections::HashSet;

use asciiphys_engine::core::Point2D;
use asciiphys_engine::spatial::{line, trim_mesh, Mesh};
use asciiphys_engine::systems::collision::detect;
use asciiphys_engine::systems::physics::integrate_body;
use asciiphys_engine::{EngineConfig, Shape, ShapeOptions};

fn shape(tag: &str, options: ShapeOptions, config: &EngineConfig) -> Shape {
    Shape::new(tag, &options, config).unwrap()
}

fn rect(x: f64, y: f64, w: usize, h: usize, config: &EngineConfig) -> Shape {
    shape("rect", ShapeOptions::at(x, y).with_size(w, h).with_char('*'), config)
}

#[test]
fn filled_rect_of_ten_by_ten() {
    let config = EngineConfig::default();
    let s = rect(0.0, 0.0, 10, 10, &config);
    let rows = s.mesh().to_strings();
    assert_eq!(rows.len(), 10);
    assert!(rows.iter().all(|r| r == "**********"));
    assert_eq!(s.point_table().len(), 100);
}

#[test]
fn line_of_six_cells() {
    let cells = line(Point2D::new(0.0, 0.0), Point2D::new(5.0, 0.0));
    assert_eq!(cells, vec![[0, 0], [1, 0], [2, 0], [3, 0], [4, 0], [5, 0]]);
}

#[test]
fn line_covers_same_cells_in_both_directions() {
    let a = Point2D::new(1.0, 7.0);
    let b = Point2D::new(9.0, 2.0);
    let forward: HashSet<_> = line(a, b).into_iter().collect();
    let backward: HashSet<_> = line(b, a).into_iter().collect();
    assert_eq!(forward, backward);
}

#[test]
fn mesh_and_point_table_agree() {
    let config = EngineConfig::default();
    let shapes = vec![
        rect(0.0, 0.0, 4, 3, &config),
        shape("rect", ShapeOptions { filled: Some(false), ..ShapeOptions::at(0.0, 0.0).with_size(5, 4) }, &config),
        shape("circle", ShapeOptions::at(0.0, 0.0).with_radius(4), &config),
        shape("circle", ShapeOptions { filled: Some(true), ..ShapeOptions::at(0.0, 0.0).with_radius(3) }, &config),
        shape("triangle", ShapeOptions::at(0.0, 0.0).with_size(8, 4), &config),
        shape("line", ShapeOptions { length: Some(7), ..ShapeOptions::at(0.0, 0.0) }, &config),
    ];
    for s in &shapes {
        assert_eq!(s.mesh().solid_count(), s.point_table().len(), "{}", s.tag());
        let unique: HashSet<_> = s.point_table().iter().collect();
        assert_eq!(unique.len(), s.point_table().len(), "{}", s.tag());
    }
}

#[test]
fn trim_is_idempotent() {
    let mesh = Mesh::from_rows(&["      ", "  **  ", "   *  ", "      "]);
    let once = trim_mesh(&mesh);
    assert_eq!(trim_mesh(&once), once);
}

#[test]
fn broad_phase_sides_follow_centers() {
    let config = EngineConfig::default();
    let mut shapes = vec![rect(0.0, 0.0, 10, 10, &config), rect(5.0, 5.0, 10, 10, &config)];
    let stats = detect(&mut shapes, &config).unwrap();
    assert_eq!(stats.broad_pairs, 1);

    let (a, b) = (shapes[0].sides, shapes[1].sides);
    assert!(!a.left);
    assert!(a.right && a.bottom);
    assert!(b.left && b.top);
}

#[test]
fn circle_and_box_fall_back_to_narrow_phase() {
    let config = EngineConfig::default();
    let mut shapes = vec![
        shape("circle", ShapeOptions { filled: Some(true), ..ShapeOptions::at(0.0, 0.0).with_radius(2) }, &config),
        rect(1.0, 1.0, 3, 3, &config),
    ];
    let stats = detect(&mut shapes, &config).unwrap();
    assert_eq!(stats.narrow_pairs, 1);
    assert_eq!(stats.contacts, 1);
    assert!(shapes[0].sides.any());
    assert!(shapes[1].sides.any());
}

#[test]
fn side_flags_stay_exclusive() {
    let config = EngineConfig::default();
    let mut shapes = vec![
        rect(5.0, 5.0, 6, 6, &config),
        rect(0.0, 0.0, 7, 7, &config),
        rect(9.0, 9.0, 7, 7, &config),
        rect(0.0, 9.0, 7, 7, &config),
        rect(9.0, 0.0, 7, 7, &config),
        shape("circle", ShapeOptions { filled: Some(true), ..ShapeOptions::at(4.0, 4.0).with_radius(3) }, &config),
    ];
    detect(&mut shapes, &config).unwrap();
    for s in &shapes {
        assert!(!(s.sides.top && s.sides.bottom), "{}", s.id());
        assert!(!(s.sides.left && s.sides.right), "{}", s.id());
    }
}

#[test]
fn a_shape_never_collides_with_itself() {
    let config = EngineConfig::default();
    let a = rect(3.0, 3.0, 4, 4, &config);
    let mut shapes = vec![a.clone(), a];
    let stats = detect(&mut shapes, &config).unwrap();
    assert_eq!(stats.considered_pairs, 0);
    assert!(!shapes[0].sides.any());
    assert!(!shapes[1].sides.any());
}

#[test]
fn resting_on_the_floor_keeps_vertical_velocity_at_zero() {
    let config = EngineConfig { width: 40, height: 20, ..EngineConfig::default() };
    let mut s = shape("rect", ShapeOptions::at(3.0, 18.0).with_size(2, 2).with_gravity(true), &config);
    for _ in 0..5 {
        assert_eq!(integrate_body(&mut s, 1.0, &config), Ok(true));
        assert_eq!(s.velocity.y, 0.0);
        assert_eq!(s.y, 18.0);
    }
}
