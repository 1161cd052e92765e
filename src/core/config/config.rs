use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 540.0,
            title: "Spin Button".into(),
        }
    }
}

/// Per-button timing and animation tuning.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct HoldTuning {
    /// Seconds of continuous press (after the fill delay starts counting) before AutoSpin.
    #[serde(rename = "holdTimeToAutoSpin")]
    pub hold_time_to_auto_spin: f32,
    /// Grace period before the progress fill begins.
    #[serde(rename = "fillDelay")]
    pub fill_delay: f32,
    pub press_scale: f32,
    pub press_duration: f32,
    pub pulse_scale: f32,
    /// Length of one pulse leg; the yoyo repeats forever.
    pub pulse_duration: f32,
}
impl Default for HoldTuning {
    fn default() -> Self {
        Self {
            hold_time_to_auto_spin: 1.0,
            fill_delay: 0.2,
            press_scale: 0.95,
            press_duration: 0.1,
            pulse_scale: 1.05,
            pulse_duration: 0.8,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct GlowConfig {
    pub duration: f32,
    pub peak_alpha: f32,
    pub spread: f32,
    pub color: (f32, f32, f32),
}
impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            duration: 0.35,
            peak_alpha: 0.8,
            spread: 0.35,
            color: (1.0, 0.85, 0.35),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    pub log_interval: f32,
}
impl Default for DebugConfig {
    fn default() -> Self {
        Self { log_interval: 2.0 }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SpinConfig {
    pub window: WindowConfig,
    pub button: HoldTuning,
    pub glow: GlowConfig,
    pub debug: DebugConfig,
}

impl SpinConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
    /// Merge several RON files in order (later files override earlier ones field by field).
    /// Missing or broken files are reported in the error list; defaults fill the gaps.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        // Keys absent from the base layer are added as-is.
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (SpinConfig::default(), used, errors);
        };
        match val.into_rust::<SpinConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (SpinConfig::default(), used, errors)
            }
        }
    }
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        let b = &self.button;
        if b.hold_time_to_auto_spin <= 0.0 {
            w.push(format!(
                "button.holdTimeToAutoSpin {} <= 0 -> AutoSpin triggers on the first held frame",
                b.hold_time_to_auto_spin
            ));
        }
        if b.fill_delay < 0.0 {
            w.push(format!(
                "button.fillDelay {} negative -> treated as 0",
                b.fill_delay
            ));
        }
        if b.fill_delay > 0.0 && b.fill_delay >= b.hold_time_to_auto_spin {
            w.push(format!(
                "button.fillDelay {} not shorter than holdTimeToAutoSpin {}; the fill barely shows before AutoSpin",
                b.fill_delay, b.hold_time_to_auto_spin
            ));
        }
        if !(b.press_scale > 0.0 && b.press_scale <= 1.0) {
            w.push(format!(
                "button.press_scale {} outside (0, 1]; pressing will not shrink the button",
                b.press_scale
            ));
        }
        if b.pulse_scale < 1.0 {
            w.push(format!(
                "button.pulse_scale {} < 1 -> the AutoSpin pulse shrinks instead of growing",
                b.pulse_scale
            ));
        }
        if b.press_duration <= 0.0 {
            w.push("button.press_duration must be > 0 (press animation snaps)".into());
        }
        if b.pulse_duration <= 0.0 {
            w.push("button.pulse_duration must be > 0 (pulse will not animate)".into());
        }
        if self.glow.duration <= 0.0 {
            w.push("glow.duration must be > 0 (glow never shows)".into());
        }
        if !(0.0..=1.0).contains(&self.glow.peak_alpha) {
            w.push(format!(
                "glow.peak_alpha {} outside 0..1",
                self.glow.peak_alpha
            ));
        }
        if self.debug.log_interval <= 0.0 {
            w.push("debug.log_interval must be > 0".into());
        }
        w
    }
}

/// Command-line tuning that wins over every config layer, including layers
/// picked up later by hot reload.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigOverrides {
    pub hold: Option<f32>,
    pub fill_delay: Option<f32>,
}

impl ConfigOverrides {
    pub fn apply(&self, cfg: &mut SpinConfig) {
        if let Some(h) = self.hold {
            cfg.button.hold_time_to_auto_spin = h;
        }
        if let Some(d) = self.fill_delay {
            cfg.button.fill_delay = d;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_cleanly() {
        let cfg = SpinConfig::default();
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
        assert_eq!(cfg.button.hold_time_to_auto_spin, 1.0);
        assert_eq!(cfg.button.fill_delay, 0.2);
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let cfg: SpinConfig = ron::from_str("(button: (holdTimeToAutoSpin: 2.5))").unwrap();
        assert_eq!(cfg.button.hold_time_to_auto_spin, 2.5);
        assert_eq!(cfg.button.fill_delay, 0.2);
        assert_eq!(cfg.window, WindowConfig::default());
    }

    #[test]
    fn validate_flags_bad_tuning() {
        let mut cfg = SpinConfig::default();
        cfg.button.hold_time_to_auto_spin = 0.0;
        cfg.button.fill_delay = -1.0;
        cfg.button.pulse_scale = 0.9;
        let warns = cfg.validate().join("\n");
        assert!(warns.contains("holdTimeToAutoSpin"));
        assert!(warns.contains("fillDelay"));
        assert!(warns.contains("pulse_scale"));
    }

    #[test]
    fn overrides_only_touch_given_fields() {
        let mut cfg = SpinConfig::default();
        ConfigOverrides { hold: Some(3.0), fill_delay: None }.apply(&mut cfg);
        assert_eq!(cfg.button.hold_time_to_auto_spin, 3.0);
        assert_eq!(cfg.button.fill_delay, 0.2);
        ConfigOverrides::default().apply(&mut cfg);
        assert_eq!(cfg.button.hold_time_to_auto_spin, 3.0);
    }

    #[test]
    fn layered_merge_recurses_and_adds_new_sections() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("base.ron");
        let local = dir.path().join("local.ron");
        fs::write(&base, "(button: (holdTimeToAutoSpin: 2.0, fillDelay: 0.5))").unwrap();
        // Nested key already present in base, plus a section base never declared.
        fs::write(&local, "(button: (fillDelay: 0.1), glow: (peak_alpha: 0.4))").unwrap();
        let (cfg, used, errors) = SpinConfig::load_layered([&base, &local]);
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(used.len(), 2);
        assert_eq!(cfg.button.hold_time_to_auto_spin, 2.0);
        assert_eq!(cfg.button.fill_delay, 0.1);
        assert_eq!(cfg.glow.peak_alpha, 0.4);
        assert_eq!(cfg.glow.duration, GlowConfig::default().duration);
    }
}
