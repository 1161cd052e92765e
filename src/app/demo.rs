use bevy::prelude::*;

use crate::core::config::SpinConfig;
use crate::interaction::hold_button::{
    spawn_hold_button, ButtonMode, ButtonSkins, HoldButton, HoldButtonLayout, HoldButtonModeChanged,
};

/// Demo scene: one centered spin button and a status line reporting its mode.
pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpinCounter>()
            .add_systems(Startup, spawn_demo_ui)
            .add_systems(Update, (count_auto_spins, update_status_text));
    }
}

#[derive(Resource, Default, Debug)]
pub struct SpinCounter {
    pub auto_spins_started: u32,
}

#[derive(Component)]
struct StatusText;

fn spawn_demo_ui(mut commands: Commands, cfg: Res<SpinConfig>) {
    commands.spawn(Camera2d);
    let root = commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            row_gap: Val::Px(24.0),
            ..default()
        })
        .id();
    let button = spawn_hold_button(
        &mut commands,
        cfg.button,
        &cfg.glow,
        ButtonSkins::default(),
        HoldButtonLayout::default(),
    );
    let status = commands.spawn((StatusText, Text::new("Hold to auto-spin"))).id();
    commands.entity(root).add_children(&[button, status]);
    info!(target: "demo", "Demo ready: hold the button for {:.1}s to enable auto-spin", cfg.button.hold_time_to_auto_spin + cfg.button.fill_delay);
}

fn count_auto_spins(mut er: EventReader<HoldButtonModeChanged>, mut counter: ResMut<SpinCounter>) {
    for ev in er.read() {
        if ev.to == ButtonMode::AutoSpin {
            counter.auto_spins_started += 1;
            info!(target: "demo", "Auto-spin engaged (#{})", counter.auto_spins_started);
        } else if ev.from == ButtonMode::AutoSpin {
            info!(target: "demo", "Auto-spin stopped");
        }
    }
}

fn update_status_text(
    q_button: Query<&HoldButton>,
    counter: Res<SpinCounter>,
    mut q_text: Query<&mut Text, With<StatusText>>,
) {
    let Ok(mut text) = q_text.single_mut() else { return; };
    let Some(button) = q_button.iter().next() else { return; };
    let s = match button.mode() {
        ButtonMode::Normal => format!("Hold to auto-spin  (auto-spins: {})", counter.auto_spins_started),
        ButtonMode::Holding => format!("Holding... {:>3.0}%", button.state.fill_amount(&button.tuning) * 100.0),
        ButtonMode::AutoSpin => "AUTO SPIN (tap to stop)".to_string(),
    };
    if text.as_str() != s { *text = Text::new(s); }
}
