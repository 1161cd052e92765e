use bevy::prelude::*;

use super::state::{ButtonMode, ButtonSprite, ButtonState, Effects};
use crate::core::config::HoldTuning;

/// Root component of a press-and-hold button.
/// `pending` collects effects between the input/tick stages and the visuals stage.
#[derive(Component, Debug, Clone, Default)]
#[require(PointerLatch)]
pub struct HoldButton {
    pub state: ButtonState,
    pub tuning: HoldTuning,
    pub pending: Effects,
}

impl HoldButton {
    pub fn new(tuning: HoldTuning) -> Self {
        Self { tuning, ..default() }
    }
    pub fn mode(&self) -> ButtonMode {
        self.state.mode()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSkin {
    pub image: Handle<Image>,
    pub tint: Color,
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct ButtonSkins {
    pub normal: ButtonSkin,
    pub pressed: ButtonSkin,
}

impl ButtonSkins {
    pub fn get(&self, sprite: ButtonSprite) -> &ButtonSkin {
        match sprite {
            ButtonSprite::Normal => &self.normal,
            ButtonSprite::Pressed => &self.pressed,
        }
    }
}

impl Default for ButtonSkins {
    fn default() -> Self {
        Self {
            normal: ButtonSkin { image: Handle::default(), tint: Color::srgb(0.20, 0.55, 0.95) },
            pressed: ButtonSkin { image: Handle::default(), tint: Color::srgb(0.12, 0.38, 0.72) },
        }
    }
}

/// Entities the button drives besides itself.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldButtonParts {
    pub fill: Entity,
    pub overlay: Entity,
    pub glow: Option<Entity>,
}

/// Marks the node whose width shows hold progress.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct FillBar;

/// Marks the node shown while AutoSpin is active.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct AutoSpinOverlay;

/// Resting scale, captured the first frame the button exists.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BaseScale(pub Vec3);

/// Last seen pressed state, used to turn `Interaction` changes into edges.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PointerLatch {
    pub pressed: bool,
}
