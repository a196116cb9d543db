//! Bevy adapter for cockpit-instruments.
//!
//! The cockpit's signal wiring is `Rc`-based, so it lives in a non-send
//! resource and is stepped on the main thread. Insert a populated
//! [`CockpitResource`] before adding [`CockpitPlugin`] to use your own
//! instrument set; otherwise the plugin starts from an empty cockpit.

use bevy::log::debug;
use bevy::prelude::*;
use cockpit_instruments::{Cockpit, CockpitConfig, Frame};

/// Non-send resource holding the cockpit.
pub struct CockpitResource(pub Cockpit);

/// Output of the most recent cockpit step, for render-side systems.
#[derive(Resource, Debug, Default)]
pub struct LastFrame(pub Frame);

#[derive(Default)]
pub struct CockpitPlugin {
    pub config: CockpitConfig,
}

impl Plugin for CockpitPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_non_send::<CockpitResource>() {
            app.insert_non_send_resource(CockpitResource(Cockpit::new(self.config.clone())));
        }
        if let Some(res) = app.world().get_non_send_resource::<CockpitResource>() {
            debug!("cockpit plugin installed with {} instruments", res.0.len());
        }
        app.init_resource::<LastFrame>()
            .add_systems(Update, tick_cockpit);
    }
}

/// Steps the cockpit with the frame's time delta.
pub fn tick_cockpit(
    mut cockpit: NonSendMut<CockpitResource>,
    time: Res<Time>,
    mut last: ResMut<LastFrame>,
) {
    last.0 = cockpit.0.step(time.delta_seconds_f64());
}
