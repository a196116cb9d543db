//! Text form of a persisted animation state.
//!
//! A state is one whitespace-delimited ASCII token embedded in a longer line
//! of component state. Writing uses a fixed number of significant digits;
//! reading parses a float and leaves range clamping to the caller.

use crate::error::StateTokenError;

/// Format `v` with `digits` significant digits, trailing zeros trimmed
/// (`0.5` rather than `0.5000`, `1` rather than `1.000`).
pub fn format_state(v: f64, digits: usize) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let digits = digits.max(1) as i32;
    let magnitude = v.abs().log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).max(0) as usize;
    let mut s = format!("{v:.decimals$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Parse one persisted token.
pub fn parse_state_token(token: &str) -> Result<f64, StateTokenError> {
    let v: f64 = token
        .parse()
        .map_err(|source| StateTokenError::Malformed {
            token: token.to_string(),
            source,
        })?;
    if !v.is_finite() {
        return Err(StateTokenError::NonFinite {
            token: token.to_string(),
        });
    }
    Ok(v)
}

/// Pull the next token off a whitespace token stream and parse it.
pub fn next_state_token<'a, I>(tokens: &mut I) -> Result<f64, StateTokenError>
where
    I: Iterator<Item = &'a str> + ?Sized,
{
    let token = tokens.next().ok_or(StateTokenError::Missing)?;
    parse_state_token(token)
}
