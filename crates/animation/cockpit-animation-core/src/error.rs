use std::num::ParseFloatError;

use thiserror::Error;

/// Why a persisted animation token could not be applied.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateTokenError {
    #[error("missing state token")]
    Missing,
    #[error("malformed state token '{token}': {source}")]
    Malformed {
        token: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("non-finite state token '{token}'")]
    NonFinite { token: String },
}
