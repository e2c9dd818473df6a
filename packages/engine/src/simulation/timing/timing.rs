use crate::domain::EngineConfig;
use crate::systems::physics::delta_time;

/// Fixed-rate gate with drift correction.
///
/// Fires once more than one interval has passed since the last firing. The
/// remainder of the elapsed time carries over, so a late frame does not push
/// every later one back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickGate {
    interval_ms: f64,
    next_ms: f64,
}

impl TickGate {
    pub fn new(interval_ms: f64, start_ms: f64) -> Self {
        TickGate { interval_ms, next_ms: start_ms }
    }

    /// Gate for `rate` firings per second.
    pub fn per_second(rate: f64, start_ms: f64) -> Self {
        TickGate::new(1000.0 / rate, start_ms)
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn set_rate(&mut self, rate: f64) {
        self.interval_ms = 1000.0 / rate;
    }

    pub fn poll(&mut self, now_ms: f64) -> bool {
        let elapsed = now_ms - self.next_ms;
        if elapsed > self.interval_ms {
            self.next_ms = now_ms - elapsed % self.interval_ms;
            true
        } else {
            false
        }
    }
}

/// Delta-time bookkeeping for integration batches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTiming {
    pub last_update: f64,
    pub old_delta: f64,
    pub current_fps: f64,
}

impl FrameTiming {
    pub fn new(start_ms: f64) -> Self {
        FrameTiming { last_update: start_ms, old_delta: 0.0, current_fps: 0.0 }
    }

    /// Close the batch at `now_ms` and return its delta time.
    pub fn advance(&mut self, now_ms: f64, config: &EngineConfig) -> f64 {
        let dt = delta_time(now_ms - self.last_update, self.old_delta, config);
        self.old_delta = dt;
        self.current_fps = if dt == 0.0 { 0.0 } else { config.updates_per_second / dt };
        self.last_update = now_ms;
        dt
    }
}
