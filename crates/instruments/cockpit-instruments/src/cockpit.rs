//! Cockpit: the root that owns every instrument and the event bus.
//!
//! Per frame the host calls [`Cockpit::step`] with its time delta and applies
//! the returned [`Frame`]: VC track states to mesh transforms, redraw handles
//! to panel repaints. Mouse hits come back in through the typed handles the
//! bus handed out during setup.

use cockpit_animation_core::{AnimHandle, IdAllocator};
use hashbrown::HashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::bus::EventBus;
use crate::config::CockpitConfig;
use crate::control::{Control, MouseEvent};
use crate::error::CockpitError;
use crate::ids::{InstrumentId, PanelMouseHandle, PanelRedrawHandle, VcMouseHandle};
use crate::instrument::{Instrument, MouseBinding, PanelRedraw, VcAnimation};

/// One animation state for a host track this frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackUpdate {
    pub track: AnimHandle,
    pub state: f64,
}

/// Output of one [`Cockpit::step`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub dt: f64,
    #[serde(default)]
    pub tracks: Vec<TrackUpdate>,
    #[serde(default)]
    pub redraws: Vec<PanelRedrawHandle>,
}

#[derive(Debug, Default)]
pub struct Cockpit {
    cfg: CockpitConfig,
    bus: EventBus,
    tracks: IdAllocator,
    instruments: Vec<Instrument>,
    by_name: HashMap<String, InstrumentId>,
}

impl Cockpit {
    pub fn new(cfg: CockpitConfig) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    #[inline]
    pub fn config(&self) -> &CockpitConfig {
        &self.cfg
    }

    #[inline]
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Add a fully wired control. Names must be unique.
    pub fn add<C: Control + 'static>(&mut self, control: C) -> Result<InstrumentId, CockpitError> {
        let name = control.name().to_string();
        if self.by_name.contains_key(&name) {
            return Err(CockpitError::DuplicateName(name));
        }
        let id = InstrumentId(self.instruments.len() as u32);
        self.instruments.push(Instrument::new(id, Box::new(control)));
        self.by_name.insert(name, id);
        Ok(id)
    }

    /// Give each of the instrument's animations a host track handle.
    pub fn bind_vc_animation(&mut self, id: InstrumentId) -> Result<Vec<AnimHandle>, CockpitError> {
        let tracks = &mut self.tracks;
        let inst = Self::slot_mut(&mut self.instruments, id)?;
        let mut handles = Vec::new();
        for anim in inst.control.animations_mut() {
            let h = match anim.handle() {
                Some(h) => h,
                None => {
                    let h = tracks.alloc_anim();
                    anim.register(h);
                    h
                }
            };
            handles.push(h);
        }
        inst.vc_animation = Some(VcAnimation {
            tracks: handles.clone(),
        });
        Ok(handles)
    }

    pub fn bind_panel_redraw(&mut self, id: InstrumentId) -> Result<PanelRedrawHandle, CockpitError> {
        let inst = Self::slot_mut(&mut self.instruments, id)?;
        let handle = self.bus.register_panel_redraw(id);
        inst.panel_redraw = Some(PanelRedraw {
            handle,
            pending: true,
        });
        Ok(handle)
    }

    pub fn bind_vc_mouse(&mut self, id: InstrumentId) -> Result<VcMouseHandle, CockpitError> {
        let inst = Self::slot_mut(&mut self.instruments, id)?;
        let handle = self.bus.register_vc_mouse(id);
        inst.mouse.get_or_insert_with(MouseBinding::default).vc = Some(handle);
        Ok(handle)
    }

    pub fn bind_panel_mouse(&mut self, id: InstrumentId) -> Result<PanelMouseHandle, CockpitError> {
        let inst = Self::slot_mut(&mut self.instruments, id)?;
        let handle = self.bus.register_panel_mouse(id);
        inst.mouse.get_or_insert_with(MouseBinding::default).panel = Some(handle);
        Ok(handle)
    }

    fn slot_mut(instruments: &mut [Instrument], id: InstrumentId) -> Result<&mut Instrument, CockpitError> {
        instruments
            .get_mut(id.0 as usize)
            .ok_or(CockpitError::UnknownId(id))
    }

    pub fn instrument(&self, id: InstrumentId) -> Option<&Instrument> {
        self.instruments.get(id.0 as usize)
    }

    pub fn find(&self, name: &str) -> Option<&Instrument> {
        self.by_name.get(name).and_then(|id| self.instrument(*id))
    }

    pub fn instruments(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Advance every instrument by `dt` (clamped by the config) and collect
    /// what the host has to apply.
    pub fn step(&mut self, dt: f64) -> Frame {
        let dt = self.cfg.clamp_dt(dt);
        let mut frame = Frame {
            dt,
            ..Frame::default()
        };
        for inst in &mut self.instruments {
            let moved = inst.control.step(dt);

            if let Some(vc) = &inst.vc_animation {
                let anims = inst.control.animations();
                for (track, anim) in vc.tracks.iter().zip(anims) {
                    frame.tracks.push(TrackUpdate {
                        track: *track,
                        state: anim.state(),
                    });
                }
            }

            if let Some(redraw) = inst.panel_redraw.as_mut() {
                if moved || redraw.pending {
                    frame.redraws.push(redraw.handle);
                    redraw.pending = false;
                }
            }
        }
        frame
    }

    pub fn vc_mouse(&mut self, handle: VcMouseHandle, event: MouseEvent) -> Result<bool, CockpitError> {
        let id = self.bus.vc_mouse_owner(handle).ok_or(CockpitError::UnknownHandle {
            kind: "vc mouse",
            id: handle.0,
        })?;
        self.dispatch_mouse(id, event)
    }

    pub fn panel_mouse(
        &mut self,
        handle: PanelMouseHandle,
        event: MouseEvent,
    ) -> Result<bool, CockpitError> {
        let id = self.bus.panel_mouse_owner(handle).ok_or(CockpitError::UnknownHandle {
            kind: "panel mouse",
            id: handle.0,
        })?;
        self.dispatch_mouse(id, event)
    }

    /// Host-side invalidation of a panel region (panel reopened, texture
    /// lost). The owner is listed in the next frame's redraws even if idle.
    pub fn invalidate_panel(&mut self, handle: PanelRedrawHandle) -> Result<(), CockpitError> {
        let id = self.bus.panel_redraw_owner(handle).ok_or(CockpitError::UnknownHandle {
            kind: "panel redraw",
            id: handle.0,
        })?;
        Self::slot_mut(&mut self.instruments, id)?.request_redraw();
        Ok(())
    }

    fn dispatch_mouse(&mut self, id: InstrumentId, event: MouseEvent) -> Result<bool, CockpitError> {
        let inst = Self::slot_mut(&mut self.instruments, id)?;
        let used = inst.control.on_mouse(event);
        if used {
            inst.request_redraw();
        } else {
            debug!("{}: mouse event {event:?} not handled", inst.name());
        }
        Ok(used)
    }

    /// One `"<NAME> <token>..."` line per instrument that persists anything.
    pub fn save_state(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.instruments.len());
        for inst in &self.instruments {
            let mut line = inst.name().to_string();
            let bare = line.len();
            inst.control.write_state(&mut line);
            if line.len() > bare {
                lines.push(line);
            }
        }
        lines
    }

    /// Restore one persisted line. Dependents are not notified until
    /// [`finish_load`](Self::finish_load).
    pub fn load_state_line(&mut self, line: &str) -> Result<(), CockpitError> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(());
        };
        let id = *self
            .by_name
            .get(name)
            .ok_or_else(|| CockpitError::UnknownInstrument(name.to_string()))?;
        let inst = Self::slot_mut(&mut self.instruments, id)?;
        inst.control.read_state(&mut tokens);
        inst.request_redraw();
        Ok(())
    }

    /// Restore every recognised line of `text`, skipping blank lines, `#`
    /// comments and lines owned by something other than an instrument.
    /// Returns how many lines were applied.
    pub fn load_state(&mut self, text: &str) -> usize {
        let mut applied = 0;
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match self.load_state_line(line) {
                Ok(()) => applied += 1,
                Err(e) => debug!("skipping state line '{line}': {e}"),
            }
        }
        applied
    }

    /// Broadcast loaded state to every dependent. Call once after all lines
    /// have been read.
    pub fn finish_load(&mut self) {
        for inst in &mut self.instruments {
            inst.control.propagate();
            inst.request_redraw();
        }
    }
}
