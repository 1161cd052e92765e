pub mod config;

pub use config::{ConfigOverrides, DebugConfig, GlowConfig, HoldTuning, SpinConfig, WindowConfig};
