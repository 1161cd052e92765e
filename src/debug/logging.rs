#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use super::DebugState;
#[cfg(feature = "debug")]
use crate::core::config::SpinConfig;
#[cfg(feature = "debug")]
use crate::interaction::hold_button::{ButtonMode, HoldButton, HoldButtonModeChanged};

#[cfg(feature = "debug")]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModeCounts {
    pub normal: usize,
    pub holding: usize,
    pub auto_spin: usize,
}

#[cfg(feature = "debug")]
pub fn button_mode_counts<'a>(buttons: impl IntoIterator<Item = &'a HoldButton>) -> ModeCounts {
    let mut c = ModeCounts::default();
    for b in buttons {
        match b.mode() {
            ButtonMode::Normal => c.normal += 1,
            ButtonMode::Holding => c.holding += 1,
            ButtonMode::AutoSpin => c.auto_spin += 1,
        }
    }
    c
}

#[cfg(feature = "debug")]
/// Runs whenever `SpinConfig` is inserted or replaced, so hot reloads retime the log too.
pub fn sync_log_interval(cfg: Res<SpinConfig>, mut state: ResMut<DebugState>) {
    state.log_interval = cfg.debug.log_interval.max(0.1);
}

#[cfg(feature = "debug")]
pub fn debug_logging_system(time: Res<Time>, mut state: ResMut<DebugState>, q: Query<&HoldButton>) {
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        let c = button_mode_counts(q.iter());
        let held = q.iter().filter(|b| b.mode() == ButtonMode::Holding).map(|b| b.state.fill_amount(&b.tuning)).fold(0.0f32, f32::max);
        info!(target: "hold_button", "BUTTONS t={:.3}s normal={} holding={} auto={} max_fill={:.2} resets={}",
            time.elapsed_secs(),
            c.normal,
            c.holding,
            c.auto_spin,
            held,
            state.resets_sent);
    }
}

#[cfg(feature = "debug")]
pub fn log_mode_changes(mut er: EventReader<HoldButtonModeChanged>) {
    for ev in er.read() {
        info!(target: "hold_button", "MODE_CHANGE entity={} from={:?} to={:?}", ev.entity, ev.from, ev.to);
    }
}
