use super::state::{ButtonEffect, ButtonSprite, ScaleAnimation};

/// What the host must be able to do for the button. The state machine never
/// touches the engine directly; it hands a list of effects to one of these.
pub trait ButtonVisuals {
    fn show_sprite(&mut self, sprite: ButtonSprite);
    fn set_fill(&mut self, amount: f32);
    fn set_overlay_visible(&mut self, visible: bool);
    fn play_glow(&mut self);
    fn cancel_scale_animation(&mut self);
    fn reset_scale(&mut self);
    fn play_scale_animation(&mut self, anim: ScaleAnimation);

    fn apply(&mut self, effect: ButtonEffect) {
        match effect {
            ButtonEffect::ShowSprite(s) => self.show_sprite(s),
            ButtonEffect::SetFill(v) => self.set_fill(v),
            ButtonEffect::SetOverlay(v) => self.set_overlay_visible(v),
            ButtonEffect::PlayGlow => self.play_glow(),
            ButtonEffect::CancelScaleAnimation => self.cancel_scale_animation(),
            ButtonEffect::ResetScale => self.reset_scale(),
            ButtonEffect::PlayScale(anim) => self.play_scale_animation(anim),
        }
    }

    fn apply_all<I: IntoIterator<Item = ButtonEffect>>(&mut self, effects: I)
    where
        Self: Sized,
    {
        for e in effects {
            self.apply(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::HoldTuning;
    use crate::interaction::hold_button::state::{ButtonState, Effects};
    use crate::rendering::tween::TweenRepeat;

    /// Mirrors what a host would display, without an engine.
    #[derive(Default)]
    struct Panel {
        sprite: Option<ButtonSprite>,
        fill: f32,
        overlay: bool,
        glows: u32,
        scale: f32,
        looping: bool,
    }

    impl ButtonVisuals for Panel {
        fn show_sprite(&mut self, sprite: ButtonSprite) { self.sprite = Some(sprite); }
        fn set_fill(&mut self, amount: f32) { self.fill = amount; }
        fn set_overlay_visible(&mut self, visible: bool) { self.overlay = visible; }
        fn play_glow(&mut self) { self.glows += 1; }
        fn cancel_scale_animation(&mut self) { self.looping = false; }
        fn reset_scale(&mut self) { self.scale = 1.0; }
        fn play_scale_animation(&mut self, anim: ScaleAnimation) {
            self.scale = anim.factor;
            self.looping = anim.repeat == TweenRepeat::YoyoForever;
        }
    }

    #[test]
    fn full_hold_cycle_drives_panel() {
        let tuning = HoldTuning { hold_time_to_auto_spin: 0.5, fill_delay: 0.125, ..HoldTuning::default() };
        let mut state = ButtonState::default();
        let mut panel = Panel { scale: 1.0, ..Default::default() };
        let mut out = Effects::new();

        state.pointer_down(&tuning, &mut out);
        panel.apply_all(out.drain(..));
        assert_eq!(panel.sprite, Some(ButtonSprite::Pressed));
        assert_eq!(panel.glows, 1);
        assert_eq!(panel.scale, tuning.press_scale);

        state.tick(0.125, &tuning, &mut out);
        state.tick(0.125, &tuning, &mut out);
        panel.apply_all(out.drain(..));
        assert_eq!(panel.fill, 0.5);
        assert!(!panel.overlay);

        state.tick(0.25, &tuning, &mut out);
        panel.apply_all(out.drain(..));
        assert!(panel.overlay);
        assert!(panel.looping);
        assert_eq!(panel.fill, 0.0);
        assert_eq!(panel.sprite, Some(ButtonSprite::Normal));

        state.pointer_down(&tuning, &mut out);
        panel.apply_all(out.drain(..));
        assert!(!panel.overlay);
        assert!(!panel.looping);
        assert_eq!(panel.scale, 1.0);
    }
}
