use bevy::prelude::*;

use super::state::ButtonMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Up,
}

/// Pointer input addressed to one button. Written by the `Interaction` watcher,
/// but anything (keyboard bindings, tests, scripted input) may send it.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldButtonPointer {
    pub entity: Entity,
    pub phase: PointerPhase,
}

impl HoldButtonPointer {
    pub fn down(entity: Entity) -> Self {
        Self { entity, phase: PointerPhase::Down }
    }
    pub fn up(entity: Entity) -> Self {
        Self { entity, phase: PointerPhase::Up }
    }
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldButtonModeChanged {
    pub entity: Entity,
    pub from: ButtonMode,
    pub to: ButtonMode,
}

/// Force a button back to Normal (e.g. stop auto-spin when credits run out).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetHoldButton {
    pub entity: Entity,
}
