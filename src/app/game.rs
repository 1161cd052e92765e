// This file is part of Spin Button.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::debug::DebugPlugin;
use crate::interaction::hold_button::HoldButtonPlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;

/// Everything a host app needs for hold buttons: controller, debug tooling, config reload.
/// Expects a `SpinConfig` resource to be inserted beforehand.
pub struct SpinButtonPlugin;

impl Plugin for SpinButtonPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((HoldButtonPlugin, DebugPlugin, ConfigHotReloadPlugin));
    }
}
