use crate::core::Vec2D;
use crate::domain::EngineConfig;

/// Drag base for the damped displacement integral.
const DRAG: f64 = 0.99;

/// Delta time as a ratio of the nominal update interval.
///
/// `1.0` means exactly one update interval passed. With `forceAverageDelta`
/// the result is averaged with the previous batch's delta to smooth spikes.
pub fn delta_time(elapsed_ms: f64, old_delta: f64, config: &EngineConfig) -> f64 {
    let raw = elapsed_ms / config.update_interval_ms();
    if config.force_average_delta {
        (old_delta + raw) / 2.0
    } else {
        raw
    }
}

/// Multiplier turning a velocity into a displacement for `dt`.
///
/// Complex mode integrates `v * DRAG^(t*dt)` over `t in [0, dt]`:
/// `(DRAG^(dt^2) - 1) / (dt * ln DRAG)`. A non-positive `dt` moves nothing.
pub fn displacement_factor(dt: f64, config: &EngineConfig) -> f64 {
    if !config.dynamic_physics {
        return 1.0;
    }
    if config.simple_delta_calculations {
        return dt;
    }
    if dt <= 0.0 {
        return 0.0;
    }
    (DRAG.powf(dt * dt) - 1.0) / (dt * DRAG.ln())
}

pub fn displacement(velocity: Vec2D, dt: f64, config: &EngineConfig) -> Vec2D {
    velocity * displacement_factor(dt, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_ratio_of_update_interval() {
        let cfg = EngineConfig::default();
        // 40 updates per second -> 25 ms interval
        assert!((delta_time(50.0, 0.0, &cfg) - 2.0).abs() < 1e-12);
        assert_eq!(delta_time(0.0, 3.0, &cfg), 0.0);
    }

    #[test]
    fn averaged_delta_uses_previous_value() {
        let cfg = EngineConfig { force_average_delta: true, ..EngineConfig::default() };
        assert!((delta_time(50.0, 1.0, &cfg) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn displacement_modes() {
        let v = Vec2D::new(2.0, -4.0);

        let fixed = EngineConfig { dynamic_physics: false, ..EngineConfig::default() };
        assert_eq!(displacement(v, 3.0, &fixed), v);

        let simple = EngineConfig::default();
        assert_eq!(displacement(v, 0.5, &simple), Vec2D::new(1.0, -2.0));

        let complex = EngineConfig { simple_delta_calculations: false, ..EngineConfig::default() };
        assert_eq!(displacement(v, 0.0, &complex), Vec2D::ZERO);
        assert_eq!(displacement(v, -1.0, &complex), Vec2D::ZERO);
        let one = displacement_factor(1.0, &complex);
        assert!(one > 0.99 && one < 1.0, "damped factor for dt=1 was {}", one);
    }
}
