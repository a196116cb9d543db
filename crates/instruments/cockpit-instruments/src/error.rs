use thiserror::Error;

use crate::ids::InstrumentId;

#[derive(Debug, Error)]
pub enum CockpitError {
    #[error("cockpit config parse error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("duplicate instrument name '{0}'")]
    DuplicateName(String),
    #[error("unknown instrument '{0}'")]
    UnknownInstrument(String),
    #[error("unknown instrument id {0:?}")]
    UnknownId(InstrumentId),
    #[error("unrouted {kind} handle {id}")]
    UnknownHandle { kind: &'static str, id: u32 },
}
