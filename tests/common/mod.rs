#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CONFIG_SCHEMA_URL: &str =
    "https://developer.microsoft.com/json-schemas/spfx-build/config.2.0.schema.json";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub root: PathBuf,
    cargo_home: PathBuf,
    rustup_home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let root = tmp.path().to_path_buf();

        let orig_home = std::env::var("HOME").unwrap_or_default();
        let cargo_home = PathBuf::from(&orig_home).join(".cargo");
        let rustup_home = PathBuf::from(&orig_home).join(".rustup");

        Self {
            _tmp: tmp,
            home,
            root,
            cargo_home,
            rustup_home,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("o365");
        cmd.env("HOME", &self.home)
            .env("CARGO_HOME", &self.cargo_home)
            .env("RUSTUP_HOME", &self.rustup_home)
            .env_remove("O365_ACCESS_TOKEN");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .args(["--output", "json"])
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let p = self.root.join(name);
        fs::write(&p, contents).expect("write file");
        p
    }

    pub fn project(&self, name: &str, config: Option<Value>) -> PathBuf {
        make_fixture_project(&self.root, name, config)
    }
}

pub fn make_fixture_project(base: &Path, name: &str, config: Option<Value>) -> PathBuf {
    let project = base.join(name);
    fs::create_dir_all(project.join("config")).expect("create config dir");
    fs::write(
        project.join("package.json"),
        serde_json::json!({
            "name": name,
            "version": "0.0.1",
            "dependencies": {"@microsoft/sp-core-library": "~1.4.1"}
        })
        .to_string(),
    )
    .expect("write package.json");
    if let Some(config) = config {
        fs::write(
            project.join("config/config.json"),
            serde_json::to_string_pretty(&config).expect("serialize config"),
        )
        .expect("write config.json");
    }
    project
}
