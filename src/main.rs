use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use spin_button::app::demo::DemoPlugin;
use spin_button::interaction::session::config_hot_reload::ConfigReloadSettings;
use spin_button::{ConfigOverrides, SpinButtonPlugin, SpinConfig};

#[derive(Parser, Debug)]
#[command(name = "spin_button", about = "Press-and-hold auto-spin button demo")]
struct Args {
    /// RON config files, layered in order (later overrides earlier)
    #[arg(long = "config")]
    config: Vec<PathBuf>,
    /// Override the hold time (seconds) needed to enter auto-spin
    #[arg(long)]
    hold: Option<f32>,
    /// Override the delay (seconds) before the progress fill starts
    #[arg(long = "fill-delay")]
    fill_delay: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let paths = if args.config.is_empty() {
        vec![
            PathBuf::from("assets/config/spin.ron"),
            PathBuf::from("assets/config/spin.local.ron"),
        ]
    } else {
        args.config.clone()
    };

    // Load configuration (fall back to defaults if missing)
    let overrides = ConfigOverrides {
        hold: args.hold,
        fill_delay: args.fill_delay,
    };
    let (mut cfg, used, errors) = SpinConfig::load_layered(&paths);
    overrides.apply(&mut cfg);
    let warnings = cfg.validate();

    let mut app = App::new();
    app.insert_resource(cfg.clone())
        .insert_resource(overrides)
        .insert_resource(ConfigReloadSettings { paths, ..default() })
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins((SpinButtonPlugin, DemoPlugin));

    // Logging is only live once LogPlugin has been built.
    info!(target: "config", "config layers used: {:?}", used);
    for e in errors {
        warn!(target: "config", "config load: {e}");
    }
    for w in warnings {
        warn!(target: "config", "config: {w}");
    }

    if app.run().is_error() {
        anyhow::bail!("app exited with an error");
    }
    Ok(())
}
