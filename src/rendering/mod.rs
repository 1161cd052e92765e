pub mod glow;
pub mod tween;
