//! Debug module: feature gated button stats logging & reset key.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;

#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use crate::core::config::SpinConfig;
#[cfg(feature = "debug")]
use crate::core::system::system_order::HoldButtonSet;

#[cfg(feature = "debug")]
pub use logging::{button_mode_counts, ModeCounts};

#[cfg(feature = "debug")]
#[derive(Resource, Debug, Clone)]
pub struct DebugState {
    pub log_interval: f32,
    pub time_accum: f32,
    pub resets_sent: u64,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self { log_interval: 2.0, time_accum: 0.0, resets_sent: 0 }
    }
}

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, keys::debug_key_input_system.before(HoldButtonSet::Input))
            .add_systems(
                Update,
                (
                    (
                        logging::sync_log_interval.run_if(resource_exists_and_changed::<SpinConfig>),
                        logging::debug_logging_system,
                    )
                        .chain(),
                    logging::log_mode_changes,
                )
                    .after(HoldButtonSet::Tick),
            );
    }
}

// Stub plugin (no-op) when debug feature disabled so callers can unconditionally add it
#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
