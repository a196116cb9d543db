use cockpit_animation_core::Animation;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MouseEvent {
    Press,
    Release,
}

/// Behaviour shared by every cockpit control.
///
/// A control owns its animations and whatever signals/slots connect it to the
/// rest of the vehicle. The [`Cockpit`](crate::Cockpit) only ever talks to it
/// through this trait.
pub trait Control {
    /// Unique name, used as the first token of the persisted state line.
    fn name(&self) -> &str;

    /// Advance every animation by `dt` seconds. Returns whether anything moved.
    fn step(&mut self, dt: f64) -> bool;

    /// Animations in host track order.
    fn animations(&self) -> Vec<&Animation>;

    fn animations_mut(&mut self) -> Vec<&mut Animation>;

    /// Append this control's persisted tokens, each preceded by a space.
    fn write_state(&self, _out: &mut String) {}

    /// Consume this control's tokens, in the order `write_state` wrote them.
    fn read_state(&mut self, _tokens: &mut dyn Iterator<Item = &str>) {}

    /// Broadcast current state to dependents after a load.
    fn propagate(&mut self) {}

    /// Handle a mouse event routed from the host. Returns whether it was used.
    fn on_mouse(&mut self, _event: MouseEvent) -> bool {
        false
    }
}
