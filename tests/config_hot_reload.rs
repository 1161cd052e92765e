use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use spin_button::core::config::{ConfigOverrides, SpinConfig};
use spin_button::interaction::hold_button::HoldButton;
use spin_button::interaction::session::config_hot_reload::{
    ConfigHotReloadPlugin, ConfigReloadSettings,
};

/// Mirrors `main`: load the layers, apply the command-line overrides, then
/// start the app with the same file list being watched.
fn reload_app(path: &Path, overrides: ConfigOverrides) -> (App, Entity) {
    let (mut cfg, _used, errors) = SpinConfig::load_layered([path]);
    assert!(errors.is_empty(), "{errors:?}");
    overrides.apply(&mut cfg);

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(300)))
        .insert_resource(cfg.clone())
        .insert_resource(overrides)
        .insert_resource(ConfigReloadSettings {
            paths: vec![PathBuf::from(path)],
            interval_secs: 0.1,
        })
        .add_plugins(ConfigHotReloadPlugin);
    let e = app.world_mut().spawn(HoldButton::new(cfg.button)).id();
    (app, e)
}

fn hold_time(app: &App, e: Entity) -> f32 {
    app.world().get::<HoldButton>(e).unwrap().tuning.hold_time_to_auto_spin
}

fn rewrite(path: &Path, body: &str) {
    fs::write(path, body).expect("rewrite config");
    // Push the mtime forward so coarse filesystem clocks still see a change.
    fs::File::options()
        .write(true)
        .open(path)
        .expect("open config")
        .set_modified(SystemTime::now() + Duration::from_secs(5))
        .expect("set mtime");
}

#[test]
fn untouched_file_keeps_command_line_hold() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("spin.ron");
    fs::write(&path, "(button: (holdTimeToAutoSpin: 1.0))").expect("write config");

    let (mut app, e) = reload_app(&path, ConfigOverrides { hold: Some(3.0), fill_delay: None });
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(hold_time(&app, e), 3.0);
    assert_eq!(app.world().resource::<SpinConfig>().button.hold_time_to_auto_spin, 3.0);
}

#[test]
fn untouched_file_is_not_reapplied() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("spin.ron");
    fs::write(&path, "(button: (holdTimeToAutoSpin: 2.0))").expect("write config");

    let (mut app, e) = reload_app(&path, ConfigOverrides::default());
    // Live tuning diverges from the file; with no edit it must stay put.
    app.world_mut().resource_mut::<SpinConfig>().button.hold_time_to_auto_spin = 4.0;
    app.world_mut().get_mut::<HoldButton>(e).unwrap().tuning.hold_time_to_auto_spin = 4.0;
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(hold_time(&app, e), 4.0);
}

#[test]
fn edited_file_reloads_but_overrides_still_win() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("spin.ron");
    fs::write(&path, "(button: (holdTimeToAutoSpin: 1.0, fillDelay: 0.2))").expect("write config");

    let (mut app, e) = reload_app(&path, ConfigOverrides { hold: Some(3.0), fill_delay: None });
    app.update();
    rewrite(&path, "(button: (holdTimeToAutoSpin: 1.5, fillDelay: 0.4))");
    for _ in 0..5 {
        app.update();
    }
    let tuning = app.world().get::<HoldButton>(e).unwrap().tuning;
    assert_eq!(tuning.fill_delay, 0.4);
    assert_eq!(tuning.hold_time_to_auto_spin, 3.0);
    assert_eq!(app.world().resource::<SpinConfig>().button.fill_delay, 0.4);
}
