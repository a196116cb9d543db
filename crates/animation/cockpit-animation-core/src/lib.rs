//! Cockpit Animation Core (host-agnostic)
//!
//! Moves a scalar animation state toward a target over time. Every gauge
//! needle, switch lever and rolling digit drum is one [`Animation`] driven by
//! one of three update strategies:
//! - [`Strategy::Direct`]: snap to the target.
//! - [`Strategy::Target`]: rate-limited linear approach with a terminal snap.
//! - [`Strategy::Wrap`]: rate-limited approach on the unit circle, always
//!   taking the shorter arc.
//!
//! The host calls `step(target, dt)` once per frame, reads `state()` to drive
//! a mesh transform or UV offset, and persists the value as one text token.

pub mod animation;
pub mod config;
pub mod error;
pub mod ids;
pub mod interp;
pub mod numeric;
pub mod persist;
pub mod state;

// Re-exports for consumers (instruments, host adapters)
pub use animation::{Animation, Phase};
pub use config::Config;
pub use error::StateTokenError;
pub use ids::{AnimHandle, IdAllocator};
pub use interp::{Strategy, StepOutcome};
pub use persist::{format_state, parse_state_token};
pub use state::InterpolationState;
