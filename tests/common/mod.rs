//! Shared fixtures for binary tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const MANIFEST: &str = r##"
package = "com.example.app"
label = "Example"
icon = "ic_launcher"
launch_activity = "com.example.app.MainActivity"

[drawables]
ic_launcher = "icons/launcher.png"

[strings]
welcome_title = "Welcome, %1$s!"

[raw]
custom_tone = "sounds/custom_tone.oga"

[colors]
brand = "#FF3366"

[metadata]
"com.google.firebase.messaging.default_notification_color" = "@color/brand"
"##;

pub fn push_tray_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_push-tray"))
}

/// Isolate a command from the user's config and environment overrides
pub fn isolate<'a>(cmd: &'a mut Command, config_home: &Path) -> &'a mut Command {
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("PUSH_TRAY_MANIFEST")
        .env_remove("PUSH_TRAY_BACKEND")
        .env_remove("PUSH_TRAY_LOG")
        .env_remove("RUST_LOG")
}

/// `assert_cmd` command for the binary, isolated like [`isolate`]
pub fn push_tray_cmd(config_home: &Path) -> assert_cmd::Command {
    let mut cmd = push_tray_bin();
    isolate(&mut cmd, config_home);
    assert_cmd::Command::from_std(cmd)
}

pub fn write_manifest(dir: &Path) -> PathBuf {
    let path = dir.join("app.toml");
    fs::write(&path, MANIFEST).expect("Failed to write manifest");
    path
}

pub fn write_message(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("message.json");
    fs::write(&path, json).expect("Failed to write message");
    path
}
