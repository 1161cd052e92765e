//! Central system ordering labels to make the per-frame button sequence explicit.
//! Stages (all in `Update`, chained):
//! 1. Input    (pointer edges -> events -> state machine)
//! 2. Tick     (hold timer accumulation)
//! 3. Visuals  (pending effects applied to ECS collaborators)
//! 4. Animate  (tweens and glow advance with the frame delta)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum HoldButtonSet {
    Input,
    Tick,
    Visuals,
    Animate,
}
