#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Binary under test with an isolated HOME, so no real config is read.
pub fn rsp(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rslotpay");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env_remove("RSLOTPAY_LOG");
    cmd
}

pub fn temp_home() -> TempDir {
    tempfile::tempdir().expect("create temp home")
}

/// Write a YAML config into the isolated HOME.
pub fn write_config(home: &Path, yaml: &str) {
    let dir = if cfg!(target_os = "windows") {
        home.join("rslotpay")
    } else {
        home.join(".rslotpay")
    };
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(dir.join("rslotpay.conf"), yaml).expect("write config");
}
