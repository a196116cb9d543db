//! Instrument: one control plus the capability records the host sees.

use std::fmt;

use cockpit_animation_core::AnimHandle;

use crate::control::Control;
use crate::ids::{InstrumentId, PanelMouseHandle, PanelRedrawHandle, VcMouseHandle};

/// Virtual-cockpit animation tracks, one per control animation, in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VcAnimation {
    pub tracks: Vec<AnimHandle>,
}

/// 2-D panel area repainted when the control moves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelRedraw {
    pub handle: PanelRedrawHandle,
    /// Set when the next frame must repaint regardless of motion (after a
    /// load or a mouse event).
    pub pending: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MouseBinding {
    pub vc: Option<VcMouseHandle>,
    pub panel: Option<PanelMouseHandle>,
}

pub struct Instrument {
    pub id: InstrumentId,
    pub control: Box<dyn Control>,
    pub vc_animation: Option<VcAnimation>,
    pub panel_redraw: Option<PanelRedraw>,
    pub mouse: Option<MouseBinding>,
}

impl fmt::Debug for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instrument")
            .field("id", &self.id)
            .field("name", &self.control.name())
            .field("vc_animation", &self.vc_animation)
            .field("panel_redraw", &self.panel_redraw)
            .field("mouse", &self.mouse)
            .finish()
    }
}

impl Instrument {
    pub fn new(id: InstrumentId, control: Box<dyn Control>) -> Self {
        Self {
            id,
            control,
            vc_animation: None,
            panel_redraw: None,
            mouse: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.control.name()
    }

    pub(crate) fn request_redraw(&mut self) {
        if let Some(r) = self.panel_redraw.as_mut() {
            r.pending = true;
        }
    }
}
