use std::fs;

use spin_button::core::config::SpinConfig;

#[test]
fn local_layer_overrides_single_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("spin.ron");
    let local = dir.path().join("spin.local.ron");
    fs::write(
        &base,
        r#"(
            window: (title: "Base", width: 800.0, height: 600.0),
            button: (holdTimeToAutoSpin: 1.5, fillDelay: 0.3),
        )"#,
    )
    .expect("write base");
    fs::write(&local, r#"(button: (fillDelay: 0.1))"#).expect("write local");

    let (cfg, used, errors) = SpinConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.window.title, "Base");
    assert_eq!(cfg.button.hold_time_to_auto_spin, 1.5);
    assert_eq!(cfg.button.fill_delay, 0.1);
    // Untouched fields keep defaults.
    assert_eq!(cfg.button.pulse_scale, 1.05);
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
}

#[test]
fn missing_and_broken_layers_fall_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let broken = dir.path().join("broken.ron");
    fs::write(&broken, "(button: (holdTimeToAutoSpin: ").expect("write broken");
    let missing = dir.path().join("nope.ron");

    let (cfg, used, errors) = SpinConfig::load_layered([&broken, &missing]);
    assert!(used.is_empty());
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.contains("parse error")));
    assert!(errors.iter().any(|e| e.contains("read error")));
    assert_eq!(cfg, SpinConfig::default());
}

#[test]
fn load_or_default_reports_error() {
    let (cfg, err) = SpinConfig::load_or_default("definitely/not/here.ron");
    assert_eq!(cfg, SpinConfig::default());
    assert!(err.unwrap().contains("read config"));
}

#[test]
fn shipped_config_parses() {
    let cfg = SpinConfig::load_from_file("assets/config/spin.ron").expect("shipped config");
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    assert_eq!(cfg.button.hold_time_to_auto_spin, 1.0);
}
