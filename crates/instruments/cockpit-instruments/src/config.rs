//! Cockpit-wide configuration.

use cockpit_animation_core::Config;
use serde::{Deserialize, Serialize};

use crate::error::CockpitError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CockpitConfig {
    /// Tuning handed to every animation the built-in controls create.
    pub animation: Config,
    /// Upper bound on the per-frame time delta, in seconds. Long host stalls
    /// would otherwise snap every needle in one frame.
    pub max_dt: f64,
}

impl Default for CockpitConfig {
    fn default() -> Self {
        Self {
            animation: Config::default(),
            max_dt: 0.25,
        }
    }
}

impl CockpitConfig {
    pub fn from_json(s: &str) -> Result<Self, CockpitError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Clamp a host time delta into `[0, max_dt]`; NaN and negatives become 0.
    #[inline]
    pub fn clamp_dt(&self, dt: f64) -> f64 {
        if dt > 0.0 {
            dt.min(self.max_dt)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_animation_config() {
        let cfg = CockpitConfig::from_json(
            r#"{ "max_dt": 0.1, "animation": { "arrival_epsilon": 1e-6 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.max_dt, 0.1);
        assert_eq!(cfg.animation.arrival_epsilon, 1e-6);
        assert_eq!(cfg.animation.state_digits, 4);
    }

    #[test]
    fn rejects_bad_json() {
        assert!(matches!(
            CockpitConfig::from_json("{ max_dt: }"),
            Err(CockpitError::Config(_))
        ));
    }

    #[test]
    fn clamp_dt_bounds() {
        let cfg = CockpitConfig::default();
        assert_eq!(cfg.clamp_dt(-1.0), 0.0);
        assert_eq!(cfg.clamp_dt(f64::NAN), 0.0);
        assert_eq!(cfg.clamp_dt(0.01), 0.01);
        assert_eq!(cfg.clamp_dt(3.0), 0.25);
    }
}
