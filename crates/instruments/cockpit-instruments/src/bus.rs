//! Event bus: routes host-side handles back to the instrument that owns them.
//!
//! Each handle category has its own newtype and its own table, so a panel
//! redraw id can never be looked up as a mouse region. The bus is built once
//! during cockpit setup and owned by the [`Cockpit`](crate::Cockpit).

use hashbrown::HashMap;

use crate::ids::{InstrumentId, PanelMouseHandle, PanelRedrawHandle, VcMouseHandle};

#[derive(Debug, Default)]
pub struct EventBus {
    next_vc_mouse: u32,
    next_panel_mouse: u32,
    next_panel_redraw: u32,
    vc_mouse: HashMap<VcMouseHandle, InstrumentId>,
    panel_mouse: HashMap<PanelMouseHandle, InstrumentId>,
    panel_redraw: HashMap<PanelRedrawHandle, InstrumentId>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_vc_mouse(&mut self, owner: InstrumentId) -> VcMouseHandle {
        let h = VcMouseHandle(self.next_vc_mouse);
        self.next_vc_mouse += 1;
        self.vc_mouse.insert(h, owner);
        h
    }

    pub fn register_panel_mouse(&mut self, owner: InstrumentId) -> PanelMouseHandle {
        let h = PanelMouseHandle(self.next_panel_mouse);
        self.next_panel_mouse += 1;
        self.panel_mouse.insert(h, owner);
        h
    }

    pub fn register_panel_redraw(&mut self, owner: InstrumentId) -> PanelRedrawHandle {
        let h = PanelRedrawHandle(self.next_panel_redraw);
        self.next_panel_redraw += 1;
        self.panel_redraw.insert(h, owner);
        h
    }

    #[inline]
    pub fn vc_mouse_owner(&self, h: VcMouseHandle) -> Option<InstrumentId> {
        self.vc_mouse.get(&h).copied()
    }

    #[inline]
    pub fn panel_mouse_owner(&self, h: PanelMouseHandle) -> Option<InstrumentId> {
        self.panel_mouse.get(&h).copied()
    }

    #[inline]
    pub fn panel_redraw_owner(&self, h: PanelRedrawHandle) -> Option<InstrumentId> {
        self.panel_redraw.get(&h).copied()
    }

    pub fn len(&self) -> usize {
        self.vc_mouse.len() + self.panel_mouse.len() + self.panel_redraw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
