mod common;

use common::{TestEnv, CONFIG_SCHEMA_URL};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::json;

#[test]
fn e2e_connect_status_disconnect() {
    let env = TestEnv::new();

    let status = env.run_json(&["spo", "status"]);
    assert_eq!(status["connected"], false);

    let connected = env.run_json(&[
        "spo",
        "connect",
        "https://contoso.sharepoint.com/",
        "--access-token",
        "ABC",
    ]);
    assert_eq!(connected["connected"], true);
    assert_eq!(connected["url"], "https://contoso.sharepoint.com");

    env.cmd()
        .args(["spo", "status"])
        .assert()
        .success()
        .stdout(contains("Connected to https://contoso.sharepoint.com"))
        .stdout(contains("ABC").not());

    env.run_json(&["spo", "disconnect"]);
    env.cmd()
        .args(["spo", "status"])
        .assert()
        .success()
        .stdout(contains("Not connected"));
}

#[test]
fn connect_rejects_invalid_url() {
    let env = TestEnv::new();
    env.cmd()
        .args(["spo", "connect", "contoso"])
        .assert()
        .failure()
        .stderr(contains("Invalid SharePoint site URL: contoso"));
}

#[test]
fn app_add_aborts_when_not_connected() {
    let env = TestEnv::new();
    let pkg = env.write_file("spfx.sppkg", "123");
    env.cmd()
        .args(["spo", "app", "add", "--debug", "--file-path"])
        .arg(&pkg)
        .assert()
        .failure()
        .stderr(contains("Connect to a SharePoint Online site first"));
}

#[test]
fn app_add_validates_file_path_before_anything_else() {
    let env = TestEnv::new();
    let missing = env.root.join("abc");
    env.cmd()
        .args(["spo", "app", "add", "--file-path"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(contains("not found"));

    env.cmd()
        .args(["spo", "app", "add", "--file-path"])
        .arg(&env.root)
        .assert()
        .failure()
        .stderr(contains("points to a directory"));

    env.cmd()
        .args(["spo", "app", "add", "--file-path", ""])
        .assert()
        .failure()
        .stderr(contains("Missing required option: --file-path"));
}

#[test]
fn e2e_upgrade_reports_outdated_config() {
    let env = TestEnv::new();
    let project = env.project(
        "outdated",
        Some(json!({
            "$schema": "https://dev.office.com/json-schemas/spfx-build/config.1.0.schema.json",
            "version": "1.0",
            "bundles": {}
        })),
    );

    let findings = env.run_json(&["spfx", "project", "upgrade", "--project-dir", project.to_str().unwrap()]);
    let ids: Vec<&str> = findings
        .as_array()
        .expect("findings array")
        .iter()
        .map(|f| f["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["FN003001", "FN003002"]);
    assert!(findings[0]["resolution"]
        .as_str()
        .unwrap()
        .contains(CONFIG_SCHEMA_URL));

    env.cmd()
        .args(["spfx", "project", "upgrade", "--project-dir"])
        .arg(&project)
        .assert()
        .success()
        .stdout(contains("FN003001\tRequired\t./config/config.json\tconfig.json schema"));
}

#[test]
fn e2e_upgrade_up_to_date_project() {
    let env = TestEnv::new();
    let project = env.project(
        "current",
        Some(json!({"$schema": CONFIG_SCHEMA_URL, "version": "2.0", "bundles": {}})),
    );

    env.cmd()
        .args(["spfx", "project", "upgrade", "--project-dir"])
        .arg(&project)
        .assert()
        .success()
        .stdout(contains("Project is up to date"));

    let findings = env.run_json(&["spfx", "project", "upgrade", "--project-dir", project.to_str().unwrap()]);
    assert_eq!(findings, json!([]));
}

#[test]
fn upgrade_without_config_reports_both_rules() {
    let env = TestEnv::new();
    let project = env.project("no-config", None);
    let findings = env.run_json(&["spfx", "project", "upgrade", "--project-dir", project.to_str().unwrap()]);
    assert_eq!(findings.as_array().map(|a| a.len()), Some(2));
}

#[test]
fn upgrade_fails_for_missing_project_dir() {
    let env = TestEnv::new();
    env.cmd()
        .args(["spfx", "project", "upgrade", "--project-dir"])
        .arg(env.root.join("missing"))
        .assert()
        .failure()
        .stderr(contains("Project directory not found"));
}
