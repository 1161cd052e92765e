use bevy::prelude::*;

use crate::core::config::GlowConfig;

/// One-shot flash behind the button, restarted on every press.
/// The node stays hidden while idle.
#[derive(Component, Debug, Clone)]
pub struct GlowBurst {
    pub timer: Timer,
    pub peak_alpha: f32,
    pub spread: f32,
    pub color: Color,
    pub active: bool,
}

impl GlowBurst {
    pub fn from_config(cfg: &GlowConfig) -> Self {
        let (r, g, b) = cfg.color;
        Self {
            timer: Timer::from_seconds(cfg.duration.max(0.0), TimerMode::Once),
            peak_alpha: cfg.peak_alpha.clamp(0.0, 1.0),
            spread: cfg.spread,
            color: Color::srgb(r, g, b),
            active: false,
        }
    }

    /// Take new look and length from config without restarting a burst in flight.
    pub fn retune(&mut self, cfg: &GlowConfig) {
        let (r, g, b) = cfg.color;
        self.timer
            .set_duration(std::time::Duration::from_secs_f32(cfg.duration.max(0.0)));
        self.peak_alpha = cfg.peak_alpha.clamp(0.0, 1.0);
        self.spread = cfg.spread;
        self.color = Color::srgb(r, g, b);
    }

    pub fn play(&mut self) {
        self.timer.reset();
        self.active = true;
    }

    /// Normalized progress of the current burst (1.0 when idle or finished).
    pub fn progress(&self) -> f32 {
        if !self.active {
            return 1.0;
        }
        self.timer.fraction().min(1.0)
    }
}

pub fn animate_glow(
    time: Res<Time>,
    mut q: Query<(&mut GlowBurst, &mut BackgroundColor, &mut Transform, &mut Visibility)>,
) {
    for (mut glow, mut bg, mut tf, mut vis) in q.iter_mut() {
        if !glow.active {
            continue;
        }
        glow.timer.tick(time.delta());
        let t = glow.progress();
        bg.0 = glow.color.with_alpha(glow.peak_alpha * (1.0 - t));
        tf.scale = Vec3::splat(1.0 + glow.spread * t);
        if glow.timer.finished() {
            glow.active = false;
            *vis = Visibility::Hidden;
        } else {
            *vis = Visibility::Inherited;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_glow_reports_done() {
        let g = GlowBurst::from_config(&GlowConfig::default());
        assert!(!g.active);
        assert_eq!(g.progress(), 1.0);
    }

    #[test]
    fn play_restarts_from_zero() {
        let mut g = GlowBurst::from_config(&GlowConfig::default());
        g.timer.tick(std::time::Duration::from_millis(100));
        g.play();
        assert!(g.active);
        assert_eq!(g.progress(), 0.0);
    }

    #[test]
    fn retune_keeps_burst_in_flight() {
        let mut g = GlowBurst::from_config(&GlowConfig::default());
        g.play();
        g.timer.tick(std::time::Duration::from_millis(100));
        let cfg = GlowConfig {
            duration: 0.5,
            peak_alpha: 0.4,
            ..default()
        };
        g.retune(&cfg);
        assert!(g.active);
        assert_eq!(g.timer.elapsed(), std::time::Duration::from_millis(100));
        assert!((g.progress() - 0.2).abs() < 1e-4);
        assert_eq!(g.peak_alpha, 0.4);
    }
}
