//! Data-driven game balance
//!
//! Every number the update step reads lives here. Defaults reproduce the
//! stock game; a page (or the native binary) may override any subset via JSON.

use serde::Deserialize;
use thiserror::Error;

/// Errors produced while loading a tuning override
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Box-proximity thresholds for vehicle overlap
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CollisionBox {
    /// Maximum |dx| that still counts as overlapping
    pub lateral: f32,
    /// Maximum |dz| that still counts as overlapping
    pub longitudinal: f32,
}

impl Default for CollisionBox {
    fn default() -> Self {
        Self {
            lateral: 3.0,
            longitudinal: 5.0,
        }
    }
}

/// Chase camera placement relative to the player
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraRig {
    pub height: f32,
    /// Distance behind the player (along -z)
    pub follow_distance: f32,
    /// Distance ahead of the player the camera looks at
    pub look_ahead: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            height: 5.0,
            follow_distance: 10.0,
            look_ahead: 10.0,
        }
    }
}

/// Game balance parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Road speed at the start of a run (units/s)
    pub initial_speed: f32,
    pub max_speed: f32,
    /// Speed added on every spawn
    pub speed_step: f32,
    pub initial_spawn_interval_ms: f64,
    pub min_spawn_interval_ms: f64,
    /// Interval removed on every spawn
    pub spawn_interval_step_ms: f64,
    /// Enemies close at `speed * multiplier`
    pub enemy_speed_multiplier: f32,
    pub lane_width: f32,
    pub collision: CollisionBox,
    /// Score awarded when an enemy leaves the playfield behind the player
    pub pass_through_bonus: f64,
    /// Length of one road segment
    pub road_length: f32,
    /// Enemies with z below this are retired
    pub pass_through_z: f32,
    /// Longitudinal offset where enemies appear
    pub spawn_z: f32,
    /// Fraction of the remaining lateral distance covered per reference frame
    pub lane_easing: f32,
    pub camera: CameraRig,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_speed: 10.0,
            max_speed: 20.0,
            speed_step: 0.2,
            initial_spawn_interval_ms: 1500.0,
            min_spawn_interval_ms: 600.0,
            spawn_interval_step_ms: 50.0,
            enemy_speed_multiplier: 1.5,
            lane_width: 4.0,
            collision: CollisionBox::default(),
            pass_through_bonus: 10.0,
            road_length: 300.0,
            pass_through_z: -10.0,
            spawn_z: 50.0,
            lane_easing: 0.1,
            camera: CameraRig::default(),
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override; missing keys keep defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the game's invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if !(self.initial_speed > 0.0) {
            return invalid("initial_speed", "must be positive");
        }
        if self.max_speed < self.initial_speed {
            return invalid("max_speed", "must not be below initial_speed");
        }
        if self.speed_step < 0.0 {
            return invalid("speed_step", "must not be negative");
        }
        if !(self.min_spawn_interval_ms > 0.0) {
            return invalid("min_spawn_interval_ms", "must be positive");
        }
        if self.initial_spawn_interval_ms < self.min_spawn_interval_ms {
            return invalid(
                "initial_spawn_interval_ms",
                "must not be below min_spawn_interval_ms",
            );
        }
        if self.spawn_interval_step_ms < 0.0 {
            return invalid("spawn_interval_step_ms", "must not be negative");
        }
        if !(self.enemy_speed_multiplier > 0.0) {
            return invalid("enemy_speed_multiplier", "must be positive");
        }
        if !(self.lane_width > 0.0) {
            return invalid("lane_width", "must be positive");
        }
        if !(self.collision.lateral > 0.0) || !(self.collision.longitudinal > 0.0) {
            return invalid("collision", "thresholds must be positive");
        }
        if self.pass_through_bonus < 0.0 {
            return invalid("pass_through_bonus", "must not be negative");
        }
        if !(self.road_length > 0.0) {
            return invalid("road_length", "must be positive");
        }
        if !(self.lane_easing > 0.0 && self.lane_easing <= 1.0) {
            return invalid("lane_easing", "must be in (0, 1]");
        }
        if self.spawn_z <= self.pass_through_z {
            return invalid("spawn_z", "must be ahead of pass_through_z");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "max_speed": 30.0, "collision": { "lateral": 2.5 } }"#)
            .unwrap();
        assert_eq!(tuning.max_speed, 30.0);
        assert_eq!(tuning.collision.lateral, 2.5);
        assert_eq!(tuning.collision.longitudinal, 5.0);
        assert_eq!(tuning.initial_speed, 10.0);
        assert_eq!(tuning.road_length, 300.0);
    }

    #[test]
    fn test_rejects_inverted_speed_range() {
        let err = Tuning::from_json(r#"{ "initial_speed": 25.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "max_speed", .. }));
    }

    #[test]
    fn test_rejects_interval_below_floor() {
        let err = Tuning::from_json(r#"{ "initial_spawn_interval_ms": 100.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "initial_spawn_interval_ms",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().starts_with("tuning JSON is malformed"));
    }
}
