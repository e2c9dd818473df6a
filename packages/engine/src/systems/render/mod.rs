//! Compositor: draws shapes into a screen-sized character buffer and hands
//! the resulting text frame to a [`FrameSink`].
//!
//! Compositing only reads shapes. Bounds clamping of positions happens in
//! the integrator; here the draw position is clamped and rounded on the fly.

mod sink;

#[cfg(target_arch = "wasm32")]
pub use sink::DomSink;
pub use sink::{FrameSink, MemorySink};

use crate::core::math::{clamp_lenient, round_half_up};
use crate::domain::{EngineConfig, RenderError, Shape};
use crate::spatial::mesh::{Mesh, StampMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Start from a blank buffer instead of drawing over the last one.
    pub clear_screen: bool,
    /// Hand the frame to the sink.
    pub render_to_screen: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { clear_screen: true, render_to_screen: true }
    }
}

/// One composited frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub text: String,
    /// Cells written while drawing.
    pub chars_per_frame: usize,
    /// The sink received this frame.
    pub written: bool,
    /// Shapes that were skipped.
    pub errors: Vec<RenderError>,
}

/// `header + nl + nl + rows.join(nl)`.
pub fn frame_text<S: AsRef<str>>(rows: &[S], config: &EngineConfig) -> String {
    let nl = config.newline.as_str();
    let mut out = String::with_capacity(config.header.len() + rows.len() * (config.width + nl.len()));
    out.push_str(&config.header);
    out.push_str(nl);
    out.push_str(nl);
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push_str(nl);
        }
        out.push_str(row.as_ref());
    }
    out
}

/// Draw one shape. Too-large shapes are refused unless `ignoreMeshSize`
/// (or the shape's own `overrideRenderLimit`) allows a partial draw.
pub fn draw_shape(buffer: &mut Mesh, shape: &Shape, config: &EngineConfig) -> Result<usize, RenderError> {
    let (w, h) = (shape.width(), shape.height());
    if w > config.width || h > config.height {
        let err = RenderError::MeshTooLarge {
            id: shape.id(),
            width: w,
            height: h,
            screen_width: config.width,
            screen_height: config.height,
        };
        if !(config.ignore_mesh_size || shape.override_render_limit) {
            log::error!("[RENDER_MAIN] {}", err);
            return Err(err);
        }
        log::warn!("[RENDER_MAIN] {}; drawing what fits", err);
    }

    let x = round_half_up(clamp_lenient(shape.x, 0.0, config.width as f64 - w as f64));
    let y = round_half_up(clamp_lenient(shape.y, 0.0, config.height as f64 - h as f64));
    let mode = StampMode {
        only_nonempty: shape.only_write_nonempty_pixels,
        replace_with_space: shape.replace_with_space,
    };
    Ok(buffer.stamp(shape.mesh(), y as i64, x as i64, mode))
}

/// Render buffer, last frame and output sink.
pub struct Compositor {
    buffer: Mesh,
    last_frame: Option<String>,
    last_written: Option<String>,
    sink: Option<Box<dyn FrameSink>>,
}

impl Compositor {
    pub fn new(width: usize, height: usize) -> Self {
        Compositor {
            buffer: Mesh::blank(width, height),
            last_frame: None,
            last_written: None,
            sink: None,
        }
    }

    pub fn set_sink(&mut self, sink: Box<dyn FrameSink>) {
        self.sink = Some(sink);
        self.last_written = None;
    }

    pub fn take_sink(&mut self) -> Option<Box<dyn FrameSink>> {
        self.sink.take()
    }

    pub fn buffer(&self) -> &Mesh {
        &self.buffer
    }

    pub fn compose(&mut self, shapes: &[Shape], options: RenderOptions, config: &EngineConfig) -> Frame {
        let size_changed = self.buffer.height() != config.height || self.buffer.width() != config.width;
        if options.clear_screen || size_changed {
            self.buffer = Mesh::blank(config.width, config.height);
        }

        let mut chars_per_frame = 0;
        let mut errors = Vec::new();
        for shape in shapes {
            match draw_shape(&mut self.buffer, shape, config) {
                Ok(n) => chars_per_frame += n,
                Err(e) => errors.push(e),
            }
        }

        let text = frame_text(&self.buffer.to_strings(), config);
        let written = options.render_to_screen && chars_per_frame > 0 && self.write(&text);
        self.last_frame = Some(text.clone());

        Frame { text, chars_per_frame, written, errors }
    }

    /// Send `text` to the sink unless it is what the sink already shows.
    fn write(&mut self, text: &str) -> bool {
        if self.last_written.as_deref() == Some(text) {
            return false;
        }
        let Some(sink) = self.sink.as_mut() else {
            return false;
        };
        sink.write_frame(text);
        self.last_written = Some(text.to_string());
        true
    }

    /// Last composited frame.
    pub fn recall_frame(&self) -> Option<&str> {
        self.last_frame.as_deref()
    }

    /// Show a previously recalled frame as-is.
    pub fn display_saved_frame(&mut self, text: &str) -> bool {
        self.last_frame = Some(text.to_string());
        self.write(text)
    }

    /// Show saved rows under the configured header.
    pub fn display_saved_rows<S: AsRef<str>>(&mut self, rows: &[S], config: &EngineConfig) -> bool {
        let text = frame_text(rows, config);
        self.display_saved_frame(&text)
    }

    pub fn clear(&mut self, config: &EngineConfig) {
        self.buffer = Mesh::blank(config.width, config.height);
        self.last_written = None;
        if let Some(sink) = self.sink.as_mut() {
            sink.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShapeOptions;

    fn cfg() -> EngineConfig {
        EngineConfig { width: 12, height: 4, ..EngineConfig::default() }
    }

    fn rect(x: f64, y: f64, w: usize, h: usize, config: &EngineConfig) -> Shape {
        Shape::new("rect", &ShapeOptions::at(x, y).with_size(w, h).with_char('#'), config).unwrap()
    }

    #[test]
    fn frame_has_header_blank_line_and_rows() {
        let config = cfg();
        let mut compositor = Compositor::new(config.width, config.height);
        let frame = compositor.compose(&[rect(1.0, 1.0, 2, 2, &config)], RenderOptions::default(), &config);
        assert_eq!(frame.chars_per_frame, 4);
        let lines: Vec<&str> = frame.text.split('\n').collect();
        assert_eq!(lines[0], "PHYV7:");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "            ");
        assert_eq!(lines[3], " ##         ");
        assert_eq!(lines.len(), 2 + 4);
    }

    #[test]
    fn draw_position_is_clamped_and_rounded() {
        let config = cfg();
        let mut compositor = Compositor::new(config.width, config.height);
        let mut shape = rect(0.0, 0.0, 2, 1, &config);
        shape.x = 50.0;
        shape.y = 1.5;
        compositor.compose(&[shape], RenderOptions::default(), &config);
        assert_eq!(compositor.buffer().row_string(2), "          ##");
    }

    #[test]
    fn oversized_shape_is_skipped() {
        let config = cfg();
        let mut compositor = Compositor::new(config.width, config.height);
        let big = rect(0.0, 0.0, 20, 2, &config);
        let frame = compositor.compose(&[big], RenderOptions::default(), &config);
        assert_eq!(frame.chars_per_frame, 0);
        assert!(matches!(frame.errors[0], RenderError::MeshTooLarge { width: 20, .. }));

        let lenient = EngineConfig { ignore_mesh_size: true, ..cfg() };
        let big = rect(0.0, 0.0, 20, 2, &lenient);
        let frame = compositor.compose(&[big], RenderOptions::default(), &lenient);
        assert!(frame.errors.is_empty());
        assert_eq!(frame.chars_per_frame, 24);
    }

    #[test]
    fn sink_only_sees_changed_frames() {
        let config = cfg();
        let sink = MemorySink::new();
        let mut compositor = Compositor::new(config.width, config.height);
        compositor.set_sink(Box::new(sink.clone()));

        let shapes = [rect(0.0, 0.0, 2, 2, &config)];
        assert!(compositor.compose(&shapes, RenderOptions::default(), &config).written);
        assert!(!compositor.compose(&shapes, RenderOptions::default(), &config).written);
        assert_eq!(sink.writes(), 1);

        let quiet = RenderOptions { render_to_screen: false, ..Default::default() };
        let moved = [rect(3.0, 0.0, 2, 2, &config)];
        let frame = compositor.compose(&moved, quiet, &config);
        assert!(!frame.written);
        assert_eq!(sink.writes(), 1);
        assert_eq!(compositor.recall_frame(), Some(frame.text.as_str()));
    }

    #[test]
    fn empty_frames_are_not_written() {
        let config = cfg();
        let sink = MemorySink::new();
        let mut compositor = Compositor::new(config.width, config.height);
        compositor.set_sink(Box::new(sink.clone()));
        let frame = compositor.compose(&[], RenderOptions::default(), &config);
        assert!(!frame.written);
        assert_eq!(sink.writes(), 0);
    }

    #[test]
    fn replace_with_space_cuts_holes() {
        let config = cfg();
        let mut compositor = Compositor::new(config.width, config.height);
        let base = rect(0.0, 0.0, 4, 1, &config);
        let mut eraser = rect(1.0, 0.0, 2, 1, &config);
        eraser.replace_with_space = true;
        compositor.compose(&[base, eraser], RenderOptions::default(), &config);
        assert_eq!(compositor.buffer().row_string(0).trim_end(), "#  #");
    }

    #[test]
    fn saved_frames_and_clear_go_to_the_sink() {
        let config = cfg();
        let sink = MemorySink::new();
        let mut compositor = Compositor::new(config.width, config.height);
        compositor.set_sink(Box::new(sink.clone()));

        assert!(compositor.display_saved_rows(&["ab", "cd"], &config));
        assert_eq!(sink.last().as_deref(), Some("PHYV7:\n\nab\ncd"));
        assert_eq!(compositor.recall_frame(), Some("PHYV7:\n\nab\ncd"));

        compositor.clear(&config);
        assert_eq!(sink.clears(), 1);
        assert_eq!(compositor.buffer().solid_count(), 0);
    }
}
