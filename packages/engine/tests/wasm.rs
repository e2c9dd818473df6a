#![cfg(target_arch = "wasm32")]

use asciiphys_engine::AsciiWorld;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn facade_builds_shapes_and_renders() {
    let mut world = AsciiWorld::new(r#"{"width": 20, "height": 6}"#).unwrap();
    let id = world.add_shape("rect", r##"{"x": 1, "y": 1, "width": 3, "height": 2, "character": "#"}"##).unwrap();
    assert_eq!(world.shape_count(), 1);
    assert_eq!(world.get_x(id), Some(1.0));

    let text = world.frame(js_sys::Date::now() + 100.0);
    assert!(text.starts_with("PHYV7:"));
    assert!(text.contains("###"));
    assert_eq!(world.recall_frame(), Some(text));
}

#[wasm_bindgen_test]
fn facade_reports_construction_errors() {
    let mut world = AsciiWorld::new("{}").unwrap();
    assert!(world.add_shape("hexagon", "{}").is_err());
    assert!(world.add_shape("custom", "{}").is_err());
    assert!(AsciiWorld::new(r#"{"width": 0}"#).is_err());
}

#[wasm_bindgen_test]
fn removing_a_shape_drops_control() {
    let mut world = AsciiWorld::new("{}").unwrap();
    let id = world.add_shape("circle", r#"{"radius": 2}"#).unwrap();
    assert!(world.set_controlled(id));
    assert!(world.remove_shape(id));
    assert!(!world.remove_shape(id));
    assert_eq!(world.get_x(id), None);
}
