use crate::domain::Shape;
use crate::systems::render::{Frame, RenderOptions};

use super::{PerfTimer, World};

pub(super) fn render(world: &mut World, shapes: &[Shape], options: RenderOptions) -> Frame {
    let timer = PerfTimer::start_if(world.perf_enabled);
    let frame = world.compositor.compose(shapes, options, &world.config);

    let stats = &mut world.perf_stats;
    stats.chars_per_frame = frame.chars_per_frame as u32;
    stats.render_errors = frame.errors.len() as u32;
    if let Some(t0) = timer {
        stats.render_ms = t0.elapsed_ms();
    }
    frame
}

pub(super) fn display_saved_rows<S: AsRef<str>>(world: &mut World, rows: &[S]) -> bool {
    world.compositor.display_saved_rows(rows, &world.config)
}

pub(super) fn clear(world: &mut World) {
    world.compositor.clear(&world.config);
}
