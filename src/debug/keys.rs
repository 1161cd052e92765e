#[cfg(feature = "debug")]
use super::DebugState;
#[cfg(feature = "debug")]
use crate::interaction::hold_button::{ButtonMode, HoldButton, ResetHoldButton};
#[cfg(feature = "debug")]
use bevy::prelude::*;

/// F1 drops every button that is not Normal back to Normal.
#[cfg(feature = "debug")]
pub fn debug_key_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    q: Query<(Entity, &HoldButton)>,
    mut state: ResMut<DebugState>,
    mut ew: EventWriter<ResetHoldButton>,
) {
    if !keys.just_pressed(KeyCode::F1) {
        return;
    }
    let mut sent = 0;
    for (entity, button) in &q {
        if button.mode() != ButtonMode::Normal {
            ew.write(ResetHoldButton { entity });
            sent += 1;
        }
    }
    state.resets_sent += sent;
    info!(target: "hold_button", "DEBUG reset requested for {sent} button(s)");
}
