//! Press-and-hold "auto spin" button.
//!
//! Hold the button: after `fillDelay` a progress bar fills, and once it is full
//! the button latches into AutoSpin (overlay shown, scale pulsing). Releasing
//! early resets it; pressing again while in AutoSpin turns auto mode off.

pub mod components;
pub mod events;
pub mod plugin;
pub mod spawn;
pub mod state;
pub mod systems;
pub mod visuals;

pub use components::{AutoSpinOverlay, BaseScale, ButtonSkin, ButtonSkins, FillBar, HoldButton, HoldButtonParts};
pub use events::{HoldButtonModeChanged, HoldButtonPointer, PointerPhase, ResetHoldButton};
pub use plugin::HoldButtonPlugin;
pub use spawn::{spawn_hold_button, HoldButtonLayout};
pub use state::{ButtonEffect, ButtonMode, ButtonSprite, ButtonState, ModeChange, ScaleAnimation};
pub use visuals::ButtonVisuals;
