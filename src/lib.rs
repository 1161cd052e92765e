pub mod app;
pub mod core;
pub mod debug;
pub mod interaction;
pub mod rendering;

// Curated re-exports
pub use crate::core::config::{ConfigOverrides, HoldTuning, SpinConfig};
pub use crate::interaction::hold_button::{ButtonMode, ButtonState, HoldButton, HoldButtonPlugin};
pub use crate::app::game::SpinButtonPlugin;
