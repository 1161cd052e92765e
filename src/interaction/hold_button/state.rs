//! Press-and-hold controller. Pure logic: every operation returns the visual
//! effects it wants and the mode change (if any); applying them is the host's job.

use smallvec::SmallVec;

use crate::core::config::HoldTuning;
use crate::rendering::tween::{Ease, TweenRepeat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonMode {
    #[default]
    Normal,
    Holding,
    AutoSpin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSprite {
    Normal,
    Pressed,
}

/// Scale animation relative to the button's base scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleAnimation {
    pub factor: f32,
    pub duration: f32,
    pub ease: Ease,
    pub repeat: TweenRepeat,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonEffect {
    ShowSprite(ButtonSprite),
    SetFill(f32),
    SetOverlay(bool),
    PlayGlow,
    CancelScaleAnimation,
    ResetScale,
    PlayScale(ScaleAnimation),
}

pub type Effects = SmallVec<[ButtonEffect; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    pub from: ButtonMode,
    pub to: ButtonMode,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonState {
    mode: ButtonMode,
    hold_elapsed: f32,
    fill_delay_elapsed: f32,
    fill_started: bool,
}

impl ButtonState {
    pub fn mode(&self) -> ButtonMode { self.mode }
    pub fn hold_elapsed(&self) -> f32 { self.hold_elapsed }
    pub fn fill_delay_elapsed(&self) -> f32 { self.fill_delay_elapsed }
    pub fn fill_started(&self) -> bool { self.fill_started }

    /// Current progress in [0, 1]; zero until the fill delay has passed.
    pub fn fill_amount(&self, tuning: &HoldTuning) -> f32 {
        if !self.fill_started {
            return 0.0;
        }
        fill_ratio(self.hold_elapsed, tuning.hold_time_to_auto_spin)
    }

    pub fn pointer_down(&mut self, tuning: &HoldTuning, out: &mut Effects) -> Option<ModeChange> {
        if self.mode == ButtonMode::AutoSpin {
            return self.enter_normal(out);
        }
        let from = self.mode;
        self.mode = ButtonMode::Holding;
        self.reset_timers();
        out.push(ButtonEffect::PlayGlow);
        out.push(ButtonEffect::ShowSprite(ButtonSprite::Pressed));
        out.push(ButtonEffect::CancelScaleAnimation);
        out.push(ButtonEffect::PlayScale(ScaleAnimation {
            factor: tuning.press_scale,
            duration: tuning.press_duration,
            ease: Ease::OutSine,
            repeat: TweenRepeat::Once,
        }));
        // Re-press while already holding restarts the hold without a mode change.
        (from != ButtonMode::Holding).then_some(ModeChange { from, to: ButtonMode::Holding })
    }

    pub fn pointer_up(&mut self, out: &mut Effects) -> Option<ModeChange> {
        if self.mode == ButtonMode::AutoSpin {
            return None;
        }
        self.enter_normal(out)
    }

    pub fn tick(&mut self, dt: f32, tuning: &HoldTuning, out: &mut Effects) -> Option<ModeChange> {
        if self.mode != ButtonMode::Holding {
            return None;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.fill_delay_elapsed += dt;

        if !self.fill_started && self.fill_delay_elapsed >= tuning.fill_delay {
            self.fill_started = true;
            out.push(ButtonEffect::SetFill(0.0));
        }
        if !self.fill_started {
            return None;
        }
        self.hold_elapsed += dt;
        out.push(ButtonEffect::SetFill(fill_ratio(self.hold_elapsed, tuning.hold_time_to_auto_spin)));

        if self.hold_elapsed >= tuning.hold_time_to_auto_spin {
            return self.enter_auto_spin(tuning, out);
        }
        None
    }

    /// Drop back to Normal from any mode (external stop of auto-spin).
    pub fn force_normal(&mut self, out: &mut Effects) -> Option<ModeChange> {
        self.enter_normal(out)
    }

    fn enter_normal(&mut self, out: &mut Effects) -> Option<ModeChange> {
        let from = self.mode;
        self.mode = ButtonMode::Normal;
        self.reset_timers();
        out.push(ButtonEffect::CancelScaleAnimation);
        out.push(ButtonEffect::ShowSprite(ButtonSprite::Normal));
        out.push(ButtonEffect::SetFill(0.0));
        out.push(ButtonEffect::SetOverlay(false));
        out.push(ButtonEffect::ResetScale);
        (from != ButtonMode::Normal).then_some(ModeChange { from, to: ButtonMode::Normal })
    }

    fn enter_auto_spin(&mut self, tuning: &HoldTuning, out: &mut Effects) -> Option<ModeChange> {
        let from = self.mode;
        self.mode = ButtonMode::AutoSpin;
        self.reset_timers();
        out.push(ButtonEffect::SetOverlay(true));
        out.push(ButtonEffect::SetFill(0.0));
        out.push(ButtonEffect::ShowSprite(ButtonSprite::Normal));
        out.push(ButtonEffect::CancelScaleAnimation);
        out.push(ButtonEffect::ResetScale);
        out.push(ButtonEffect::PlayScale(ScaleAnimation {
            factor: tuning.pulse_scale,
            duration: tuning.pulse_duration,
            ease: Ease::InOutSine,
            repeat: TweenRepeat::YoyoForever,
        }));
        Some(ModeChange { from, to: ButtonMode::AutoSpin })
    }

    fn reset_timers(&mut self) {
        self.hold_elapsed = 0.0;
        self.fill_delay_elapsed = 0.0;
        self.fill_started = false;
    }
}

fn fill_ratio(elapsed: f32, threshold: f32) -> f32 {
    if threshold <= 0.0 {
        return 1.0;
    }
    (elapsed / threshold).clamp(0.0, 1.0)
}
