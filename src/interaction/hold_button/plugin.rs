use bevy::prelude::*;

use super::events::{HoldButtonModeChanged, HoldButtonPointer, ResetHoldButton};
use super::systems::*;
use crate::core::system::system_order::HoldButtonSet;
use crate::rendering::glow::animate_glow;
use crate::rendering::tween::advance_scale_tweens;

pub struct HoldButtonPlugin;

impl Plugin for HoldButtonPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<HoldButtonPointer>()
            .add_event::<HoldButtonModeChanged>()
            .add_event::<ResetHoldButton>()
            .configure_sets(
                Update,
                (
                    HoldButtonSet::Input,
                    HoldButtonSet::Tick,
                    HoldButtonSet::Visuals,
                    HoldButtonSet::Animate,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (capture_base_scale, emit_pointer_events, handle_pointer_events)
                    .chain()
                    .in_set(HoldButtonSet::Input),
            )
            .add_systems(Update, tick_hold_buttons.in_set(HoldButtonSet::Tick))
            .add_systems(Update, apply_button_visuals.in_set(HoldButtonSet::Visuals))
            .add_systems(
                Update,
                (advance_scale_tweens, animate_glow).in_set(HoldButtonSet::Animate),
            );
    }
}
