//! Core configuration for cockpit-animation-core.

use serde::{Deserialize, Serialize};

/// Tuning shared by every [`Animation`](crate::Animation) built from it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Distance below which `current` counts as having reached `target`.
    /// Strategies snap exactly on arrival, so this only absorbs values
    /// restored or supplied from outside the strategies.
    pub arrival_epsilon: f64,

    /// Significant digits written per persisted state token.
    pub state_digits: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arrival_epsilon: 1e-9,
            state_digits: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: Config = serde_json::from_str(r#"{ "state_digits": 6 }"#).unwrap();
        assert_eq!(cfg.state_digits, 6);
        assert_eq!(cfg.arrival_epsilon, Config::default().arrival_epsilon);
    }
}
