use bevy::prelude::*;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Linear,
    OutSine,
    InOutSine,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Ease::Linear => t,
            Ease::OutSine => (t * PI * 0.5).sin(),
            Ease::InOutSine => -((PI * t).cos() - 1.0) * 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TweenRepeat {
    #[default]
    Once,
    /// start -> end -> start ... one leg per `duration`, never finishes.
    YoyoForever,
}

/// Animates `Transform::scale`. Removing the component kills the tween where it stands.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ScaleTween {
    pub start: Vec3,
    pub end: Vec3,
    pub duration: f32,
    pub elapsed: f32,
    pub ease: Ease,
    pub repeat: TweenRepeat,
}

impl ScaleTween {
    pub fn new(start: Vec3, end: Vec3, duration: f32, ease: Ease, repeat: TweenRepeat) -> Self {
        Self { start, end, duration, elapsed: 0.0, ease, repeat }
    }

    pub fn is_finished(&self) -> bool {
        self.repeat == TweenRepeat::Once && self.elapsed >= self.duration
    }

    pub fn sample(&self) -> Vec3 {
        if self.duration <= 0.0 || self.is_finished() {
            return self.end;
        }
        let t = match self.repeat {
            TweenRepeat::Once => self.elapsed / self.duration,
            TweenRepeat::YoyoForever => {
                let legs = self.elapsed / self.duration;
                let leg = legs.floor();
                let local = legs - leg;
                // Odd legs run backwards.
                if (leg as u64) % 2 == 0 { local } else { 1.0 - local }
            }
        };
        self.start.lerp(self.end, self.ease.apply(t))
    }
}

pub fn advance_scale_tweens(
    time: Res<Time>,
    mut commands: Commands,
    mut q: Query<(Entity, &mut Transform, &mut ScaleTween)>,
) {
    let dt = time.delta_secs();
    for (entity, mut tf, mut tween) in q.iter_mut() {
        tween.elapsed += dt;
        tf.scale = tween.sample();
        if tween.is_finished() {
            commands.entity(entity).remove::<ScaleTween>();
        }
    }
}
