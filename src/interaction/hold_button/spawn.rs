use bevy::prelude::*;

use super::components::*;
use crate::core::config::{GlowConfig, HoldTuning};
use crate::rendering::glow::GlowBurst;

/// Size and placement of a spawned button; `node` is used as the root layout.
#[derive(Debug, Clone)]
pub struct HoldButtonLayout {
    pub node: Node,
    pub fill_height: Val,
    pub fill_color: Color,
    pub overlay_color: Color,
    pub label: Option<String>,
}

impl Default for HoldButtonLayout {
    fn default() -> Self {
        Self {
            node: Node {
                width: Val::Px(180.0),
                height: Val::Px(180.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            fill_height: Val::Px(10.0),
            fill_color: Color::srgb(1.0, 0.8, 0.2),
            overlay_color: Color::srgba(1.0, 1.0, 1.0, 0.25),
            label: Some("SPIN".into()),
        }
    }
}

/// Spawn a hold button (root + fill track + overlay + glow) and return the root entity.
pub fn spawn_hold_button(
    commands: &mut Commands,
    tuning: HoldTuning,
    glow: &GlowConfig,
    skins: ButtonSkins,
    layout: HoldButtonLayout,
) -> Entity {
    let glow_entity = commands
        .spawn((
            GlowBurst::from_config(glow),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            BackgroundColor(Color::NONE),
            Visibility::Hidden,
            ZIndex(-1),
        ))
        .id();

    let fill = commands
        .spawn((
            FillBar,
            Node {
                width: Val::Percent(0.0),
                height: Val::Percent(100.0),
                ..default()
            },
            BackgroundColor(layout.fill_color),
        ))
        .id();

    let track = commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                bottom: Val::Px(0.0),
                height: layout.fill_height,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.35)),
        ))
        .add_child(fill)
        .id();

    let overlay = commands
        .spawn((
            AutoSpinOverlay,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            BackgroundColor(layout.overlay_color),
            Visibility::Hidden,
        ))
        .id();

    let image = ImageNode::new(skins.normal.image.clone()).with_color(skins.normal.tint);
    let root = commands
        .spawn((
            Button,
            HoldButton::new(tuning),
            HoldButtonParts { fill, overlay, glow: Some(glow_entity) },
            skins,
            image,
            layout.node,
        ))
        .add_children(&[glow_entity, track, overlay])
        .id();

    if let Some(label) = layout.label {
        commands.entity(root).with_children(|p| {
            p.spawn((Text::new(label), TextColor(Color::WHITE)));
        });
    }
    info!(target: "hold_button", "spawned hold button {root} (hold={:.2}s fill_delay={:.2}s)", tuning.hold_time_to_auto_spin, tuning.fill_delay);
    root
}
