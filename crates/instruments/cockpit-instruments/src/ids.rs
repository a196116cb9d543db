//! Instrument ids and typed event-bus handles.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstrumentId(pub u32);

/// Mouse-hit region registered in the virtual cockpit.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct VcMouseHandle(pub u32);

/// Mouse-hit region registered on a 2-D panel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PanelMouseHandle(pub u32);

/// Panel area the host repaints when asked.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PanelRedrawHandle(pub u32);
