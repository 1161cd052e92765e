//! Bevy systems that feed the button state machine and apply its effects.
use bevy::prelude::*;

use super::components::*;
use super::events::*;
use super::state::{ButtonMode, ButtonSprite, ModeChange, ScaleAnimation};
use super::visuals::ButtonVisuals;
use crate::rendering::glow::GlowBurst;
use crate::rendering::tween::ScaleTween;

pub fn capture_base_scale(
    mut commands: Commands,
    q: Query<(Entity, &Transform), (With<HoldButton>, Without<BaseScale>)>,
) {
    for (entity, tf) in &q {
        commands.entity(entity).insert(BaseScale(tf.scale));
    }
}

/// Turn `Interaction` changes into pointer edges.
pub fn emit_pointer_events(
    mut q: Query<(Entity, &Interaction, &mut PointerLatch), (Changed<Interaction>, With<HoldButton>)>,
    mut ew: EventWriter<HoldButtonPointer>,
) {
    for (entity, interaction, mut latch) in q.iter_mut() {
        let pressed = matches!(interaction, Interaction::Pressed);
        if pressed == latch.pressed {
            continue;
        }
        latch.pressed = pressed;
        ew.write(if pressed { HoldButtonPointer::down(entity) } else { HoldButtonPointer::up(entity) });
    }
}

fn report(ew: &mut EventWriter<HoldButtonModeChanged>, entity: Entity, change: Option<ModeChange>) {
    if let Some(ModeChange { from, to }) = change {
        debug!(target: "hold_button", "{entity}: {from:?} -> {to:?}");
        ew.write(HoldButtonModeChanged { entity, from, to });
    }
}

pub fn handle_pointer_events(
    mut pointer_er: EventReader<HoldButtonPointer>,
    mut reset_er: EventReader<ResetHoldButton>,
    mut q: Query<&mut HoldButton>,
    mut ew: EventWriter<HoldButtonModeChanged>,
) {
    for ev in pointer_er.read() {
        let Ok(mut button) = q.get_mut(ev.entity) else {
            warn!(target: "hold_button", "pointer event for {} which is not a hold button", ev.entity);
            continue;
        };
        let button = &mut *button;
        let change = match ev.phase {
            PointerPhase::Down => button.state.pointer_down(&button.tuning, &mut button.pending),
            PointerPhase::Up => button.state.pointer_up(&mut button.pending),
        };
        report(&mut ew, ev.entity, change);
    }
    for ev in reset_er.read() {
        let Ok(mut button) = q.get_mut(ev.entity) else { continue; };
        let button = &mut *button;
        let change = button.state.force_normal(&mut button.pending);
        report(&mut ew, ev.entity, change);
    }
}

pub fn tick_hold_buttons(
    time: Res<Time>,
    mut q: Query<(Entity, &mut HoldButton)>,
    mut ew: EventWriter<HoldButtonModeChanged>,
) {
    let dt = time.delta_secs();
    for (entity, mut button) in q.iter_mut() {
        // Only a held button has timers to advance; leave the rest unchanged.
        if button.mode() != ButtonMode::Holding {
            continue;
        }
        let button = &mut *button;
        let change = button.state.tick(dt, &button.tuning, &mut button.pending);
        report(&mut ew, entity, change);
    }
}

/// `ButtonVisuals` backed by the ECS collaborators of one button.
struct EcsButtonVisuals<'a, 'w, 's> {
    entity: Entity,
    commands: &'a mut Commands<'w, 's>,
    skins: &'a ButtonSkins,
    image: &'a mut ImageNode,
    transform: &'a mut Transform,
    base: Vec3,
    fill: Option<Mut<'a, Node>>,
    overlay: Option<Mut<'a, Visibility>>,
    glow: Option<(Mut<'a, GlowBurst>, Mut<'a, Visibility>)>,
}

impl ButtonVisuals for EcsButtonVisuals<'_, '_, '_> {
    fn show_sprite(&mut self, sprite: ButtonSprite) {
        let skin = self.skins.get(sprite);
        self.image.image = skin.image.clone();
        self.image.color = skin.tint;
    }
    fn set_fill(&mut self, amount: f32) {
        match self.fill.as_mut() {
            Some(node) => node.width = Val::Percent(amount.clamp(0.0, 1.0) * 100.0),
            None => warn_once!(target: "hold_button", "hold button {} has no fill bar", self.entity),
        }
    }
    fn set_overlay_visible(&mut self, visible: bool) {
        match self.overlay.as_mut() {
            Some(vis) => **vis = if visible { Visibility::Inherited } else { Visibility::Hidden },
            None => warn_once!(target: "hold_button", "hold button {} has no auto-spin overlay", self.entity),
        }
    }
    fn play_glow(&mut self) {
        if let Some((glow, vis)) = self.glow.as_mut() {
            glow.play();
            **vis = Visibility::Inherited;
        }
    }
    fn cancel_scale_animation(&mut self) {
        self.commands.entity(self.entity).remove::<ScaleTween>();
    }
    fn reset_scale(&mut self) {
        self.transform.scale = self.base;
    }
    fn play_scale_animation(&mut self, anim: ScaleAnimation) {
        self.commands.entity(self.entity).insert(ScaleTween::new(
            self.transform.scale,
            self.base * anim.factor,
            anim.duration,
            anim.ease,
            anim.repeat,
        ));
    }
}

type ButtonVisualQuery<'a> = (
    Entity,
    &'a mut HoldButton,
    &'a HoldButtonParts,
    &'a ButtonSkins,
    &'a mut ImageNode,
    &'a mut Transform,
    Option<&'a BaseScale>,
);

pub fn apply_button_visuals(
    mut commands: Commands,
    mut q: Query<ButtonVisualQuery>,
    mut fills: Query<&mut Node, (With<FillBar>, Without<HoldButton>)>,
    mut overlays: Query<&mut Visibility, (With<AutoSpinOverlay>, Without<GlowBurst>)>,
    mut glows: Query<(&mut GlowBurst, &mut Visibility), Without<AutoSpinOverlay>>,
) {
    for (entity, mut button, parts, skins, mut image, mut tf, base) in q.iter_mut() {
        if button.pending.is_empty() {
            continue;
        }
        let pending = std::mem::take(&mut button.pending);
        let base = base.map(|b| b.0).unwrap_or(tf.scale);
        let mut visuals = EcsButtonVisuals {
            entity,
            commands: &mut commands,
            skins,
            image: &mut *image,
            transform: &mut *tf,
            base,
            fill: fills.get_mut(parts.fill).ok(),
            overlay: overlays.get_mut(parts.overlay).ok(),
            glow: parts.glow.and_then(|g| glows.get_mut(g).ok()),
        };
        visuals.apply_all(pending);
    }
}
