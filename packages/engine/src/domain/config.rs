//! Engine-wide configuration.
//!
//! Parsed from camelCase JSON (every key optional) and validated once at
//! startup. Physics and collision code only read it.

use serde::{Deserialize, Serialize};

use crate::core::Vec2D;

use super::errors::ConfigError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    // === CONSTANTS ===
    pub gravitational_constant: Vec2D,
    pub friction_constant: Vec2D,
    pub weight_per_character: f64,
    pub terminal_velocity: f64,

    // === RATES ===
    pub ticks_per_second: f64,
    pub updates_per_second: f64,
    pub render_per_second: f64,

    // === SCREEN ===
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,

    /// Max axis distance between two points that counts as touching.
    pub collision_accuracy: f64,

    // === PHYSICS SWITCHES ===
    /// Scale displacement by delta time instead of one step per update.
    pub dynamic_physics: bool,
    /// Linear `v * dt` displacement instead of the damped integral.
    pub simple_delta_calculations: bool,
    pub force_average_delta: bool,
    /// AABB broad phase for box/line pairs.
    pub more_efficient_physics: bool,
    pub all_gravity: bool,
    pub recalculate_weight_on_frame: bool,

    // === GENERAL ===
    pub debug_mode: bool,
    /// Draw oversized shapes partially instead of skipping them.
    pub ignore_mesh_size: bool,
    pub stop_render_function_on_error: bool,
    pub trim_mesh_on_shape_creation: bool,
    pub use_mesh_optimization_when_combining: bool,

    // === OUTPUT ===
    pub default_shape_char: char,
    pub newline: String,
    pub header: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            gravitational_constant: Vec2D::new(0.0, 0.05),
            friction_constant: Vec2D::new(1.0, 0.0),
            weight_per_character: 0.4,
            terminal_velocity: 7.0,
            ticks_per_second: 60.0,
            updates_per_second: 40.0,
            render_per_second: 50.0,
            width: 120,
            height: 40,
            collision_accuracy: 0.5,
            dynamic_physics: true,
            simple_delta_calculations: true,
            force_average_delta: false,
            more_efficient_physics: true,
            all_gravity: false,
            recalculate_weight_on_frame: true,
            debug_mode: false,
            ignore_mesh_size: false,
            stop_render_function_on_error: true,
            trim_mesh_on_shape_creation: true,
            use_mesh_optimization_when_combining: true,
            default_shape_char: '*',
            newline: "\n".to_string(),
            header: "PHYV7:".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(invalid("width", "must be at least 1 column"));
        }
        if self.height == 0 {
            return Err(invalid("height", "must be at least 1 row"));
        }
        positive("ticksPerSecond", self.ticks_per_second)?;
        positive("updatesPerSecond", self.updates_per_second)?;
        positive("renderPerSecond", self.render_per_second)?;
        positive("collisionAccuracy", self.collision_accuracy)?;
        positive("terminalVelocity", self.terminal_velocity)?;
        if !self.weight_per_character.is_finite() || self.weight_per_character < 0.0 {
            return Err(invalid("weightPerCharacter", "must be finite and not negative"));
        }
        if !self.gravitational_constant.is_finite() {
            return Err(invalid("gravitationalConstant", "must be finite"));
        }
        if !self.friction_constant.is_finite() {
            return Err(invalid("frictionConstant", "must be finite"));
        }
        if self.default_shape_char == ' ' {
            return Err(invalid("defaultShapeChar", "must not be a space"));
        }
        Ok(())
    }

    /// Nominal milliseconds between integration batches.
    pub fn update_interval_ms(&self) -> f64 {
        1000.0 / self.updates_per_second
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.to_string() }
}

fn positive(field: &'static str, v: f64) -> Result<(), ConfigError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: format!("must be a positive number, got {}", v) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = EngineConfig::from_json(r#"{"width": 80, "gravitationalConstant": {"x": 0, "y": 0.1}}"#)
            .unwrap();
        assert_eq!(cfg.width, 80);
        assert_eq!(cfg.height, 40);
        assert_eq!(cfg.gravitational_constant, Vec2D::new(0.0, 0.1));
        assert_eq!(cfg.collision_accuracy, 0.5);
    }

    #[test]
    fn rejects_non_positive_rates() {
        let err = EngineConfig::from_json(r#"{"updatesPerSecond": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "updatesPerSecond", .. }));
    }

    #[test]
    fn rejects_empty_screen() {
        let err = EngineConfig::from_json(r#"{"height": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "height", .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(EngineConfig::from_json("{width"), Err(ConfigError::Parse(_))));
    }
}
