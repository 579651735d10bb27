//! Runtime preferences
//!
//! Read from the page URL query string on web (`?easing=per-tick&seed=42`).
//! Nothing here is persisted between sessions.

use crate::consts::{FRAME_RATE_REF, MAX_FRAME_DT};

/// How the player car eases toward its lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingMode {
    /// Fixed fraction of the remaining distance every tick (speed depends on refresh rate)
    PerTick,
    /// Same feel at 60 Hz, but scaled by elapsed time so any refresh rate matches
    #[default]
    FrameRateIndependent,
}

impl EasingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EasingMode::PerTick => "per-tick",
            EasingMode::FrameRateIndependent => "frame-rate-independent",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "per-tick" | "tick" | "classic" => Some(EasingMode::PerTick),
            "frame-rate-independent" | "time" | "smooth" => Some(EasingMode::FrameRateIndependent),
            _ => None,
        }
    }

    /// Fraction of the remaining distance to cover this tick
    pub fn blend(&self, fraction: f32, dt: f32) -> f32 {
        match self {
            EasingMode::PerTick => fraction,
            EasingMode::FrameRateIndependent => 1.0 - (1.0 - fraction).powf(dt * FRAME_RATE_REF),
        }
    }
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub easing: EasingMode,
    /// Upper bound on a single frame's elapsed time (seconds)
    pub max_frame_dt: f32,
    /// Fixed RNG seed for reproducible enemy lanes
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            easing: EasingMode::default(),
            max_frame_dt: MAX_FRAME_DT,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse a URL query string such as `?easing=per-tick&max_dt=0.05&seed=7`
    ///
    /// Unknown keys and unparsable values are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "easing" => {
                    if let Some(mode) = EasingMode::from_str(value) {
                        settings.easing = mode;
                    } else {
                        log::warn!("Unknown easing mode '{}'", value);
                    }
                }
                "max_dt" => {
                    if let Ok(dt) = value.parse::<f32>() {
                        if dt > 0.0 {
                            settings.max_frame_dt = dt;
                        }
                    }
                }
                "seed" => settings.seed = value.parse().ok(),
                _ => {}
            }
        }

        settings
    }

    /// Clamp a raw frame delta into `[0, max_frame_dt]`
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        if dt.is_finite() {
            dt.clamp(0.0, self.max_frame_dt)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parsing() {
        let settings = Settings::from_query("?easing=per-tick&seed=42&max_dt=0.05&foo=bar");
        assert_eq!(settings.easing, EasingMode::PerTick);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.max_frame_dt, 0.05);
    }

    #[test]
    fn test_empty_query_is_default() {
        assert_eq!(Settings::from_query(""), Settings::default());
        assert_eq!(Settings::from_query("?"), Settings::default());
    }

    #[test]
    fn test_clamp_dt() {
        let settings = Settings::default();
        assert_eq!(settings.clamp_dt(5.0), MAX_FRAME_DT);
        assert_eq!(settings.clamp_dt(-1.0), 0.0);
        assert_eq!(settings.clamp_dt(f32::NAN), 0.0);
        assert_eq!(settings.clamp_dt(0.016), 0.016);
    }

    #[test]
    fn test_easing_blend() {
        assert_eq!(EasingMode::PerTick.blend(0.1, 0.5), 0.1);
        // One reference frame reproduces the per-tick fraction
        let one_frame = EasingMode::FrameRateIndependent.blend(0.1, 1.0 / FRAME_RATE_REF);
        assert!((one_frame - 0.1).abs() < 1e-5);
        assert_eq!(EasingMode::FrameRateIndependent.blend(0.1, 0.0), 0.0);
    }
}
