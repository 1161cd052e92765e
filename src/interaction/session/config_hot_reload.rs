use bevy::prelude::*;
use std::{collections::HashMap, path::{Path, PathBuf}, time::SystemTime};

use crate::core::config::{ConfigOverrides, SpinConfig};
use crate::interaction::hold_button::HoldButton;
use crate::rendering::glow::GlowBurst;

#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings { pub paths: Vec<PathBuf>, pub interval_secs: f32 }
impl Default for ConfigReloadSettings { fn default() -> Self { Self { paths: vec![ PathBuf::from("assets/config/spin.ron"), PathBuf::from("assets/config/spin.local.ron"), ], interval_secs: 0.5 } } }
#[derive(Resource, Debug)]
struct ConfigReloadState { last_mod: HashMap<PathBuf, SystemTime>, timer: Timer }
impl FromWorld for ConfigReloadState {
    /// Start from the files as they are now, so only later edits count as dirty.
    fn from_world(world: &mut World) -> Self {
        let paths = world.get_resource::<ConfigReloadSettings>().map(|s| s.paths.clone()).unwrap_or_default();
        let mut last_mod = HashMap::new();
        for path in paths { if let Some(t) = modified_time(&path) { last_mod.insert(path, t); } }
        Self { last_mod, timer: Timer::from_seconds(0.5, TimerMode::Repeating) }
    }
}
fn modified_time(path: &Path) -> Option<SystemTime> { std::fs::metadata(path).ok()?.modified().ok() }

pub struct ConfigHotReloadPlugin;
impl Plugin for ConfigHotReloadPlugin { fn build(&self, app: &mut App) { #[cfg(not(target_arch = "wasm32"))] { app.init_resource::<ConfigReloadSettings>().init_resource::<ConfigReloadState>().add_systems(Update, poll_and_reload_config); } } }

/// Push new tuning into live buttons. A button mid-hold keeps its elapsed time
/// and simply measures it against the new threshold from the next tick.
pub fn apply_config_to_buttons(
    cfg: &SpinConfig,
    buttons: &mut Query<&mut HoldButton>,
    glows: &mut Query<&mut GlowBurst>,
) -> usize {
    let mut touched = 0;
    for mut b in buttons.iter_mut() {
        if b.tuning != cfg.button {
            b.tuning = cfg.button;
            touched += 1;
        }
    }
    for mut g in glows.iter_mut() {
        g.retune(&cfg.glow);
    }
    touched
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<SpinConfig>,
    overrides: Option<Res<ConfigOverrides>>,
    mut windows: Query<&mut Window>,
    mut buttons: Query<&mut HoldButton>,
    mut glows: Query<&mut GlowBurst>,
) {
    if (state.timer.duration().as_secs_f32() - settings.interval_secs).abs() > f32::EPSILON { state.timer.set_duration(std::time::Duration::from_secs_f32(settings.interval_secs.max(0.05))); }
    if !state.timer.tick(time.delta()).finished() { return; }
    let mut dirty = false; for path in &settings.paths { if let Some(mod_time) = modified_time(path) { if state.last_mod.get(path).is_none_or(|seen| mod_time > *seen) { state.last_mod.insert(path.clone(), mod_time); dirty = true; } } }
    if !dirty { return; }
    let (mut new_cfg, _used, errors) = SpinConfig::load_layered(settings.paths.iter()); if !errors.is_empty() { for e in errors { warn!(target: "config", "CONFIG HOT-RELOAD issue: {e}"); } }
    if let Some(o) = overrides { o.apply(&mut new_cfg); }
    if *cfg_res == new_cfg { return; }
    for w in new_cfg.validate() { warn!(target: "config", "config: {w}"); }
    let touched = apply_config_to_buttons(&new_cfg, &mut buttons, &mut glows);
    info!(target: "config", "Config hot-reload applied ({touched} button(s) retuned)");
    if let Ok(mut window) = windows.single_mut() { if window.title != new_cfg.window.title { window.title = new_cfg.window.title.clone(); } if window.width() != new_cfg.window.width || window.height() != new_cfg.window.height { window.resolution.set(new_cfg.window.width, new_cfg.window.height); } }
    *cfg_res = new_cfg;
}
