use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "tok-secret-123";

const NAMES: [&str; 4] = [
    "worker-linux-amd64.tar.gz",
    "worker-linux-arm64.tar.gz",
    "coordinator-linux-amd64.tar.gz",
    "coordinator-linux-arm64.tar.gz",
];

#[allow(deprecated)]
fn drafter() -> Command {
    let mut cmd = Command::cargo_bin("drafter").unwrap();
    cmd.env_remove("RUST_LOG");
    for var in [
        "DRAFTER_CONFIG",
        "DRAFTER_ARTIFACTS_DIR",
        "DRAFTER_API_URL",
        "DRAFTER_UPLOADS_URL",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// A project dir with `bin/` holding every default artifact.
fn project_with_artifacts() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let bin = tmp.path().join("bin");
    std::fs::create_dir_all(&bin).unwrap();
    for name in NAMES {
        std::fs::write(bin.join(name), name.as_bytes()).unwrap();
    }
    tmp
}

fn point_at(cmd: &mut Command, server: &MockServer, dir: &Path) {
    cmd.current_dir(dir)
        .arg("--api-url")
        .arg(server.uri())
        .arg("--uploads-url")
        .arg(server.uri())
        .args(["--owner", "acme", "--project", "rocket"]);
}

#[test]
fn test_help_lists_positionals() {
    drafter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("<TOKEN>"))
        .stdout(predicate::str::contains("<TAG>"));
}

#[test]
fn test_missing_tag_fails() {
    drafter().arg("tok").assert().failure();
}

#[test]
fn test_empty_tag_exits_one() {
    let tmp = TempDir::new().unwrap();
    drafter()
        .current_dir(tmp.path())
        .args([TOKEN, "refs/tags/"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid release tag"));
}

#[test]
fn test_trailing_slash_tag_exits_one() {
    let tmp = project_with_artifacts();
    drafter()
        .current_dir(tmp.path())
        .args([TOKEN, "refs/tags/v1/", "--dry-run"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid release tag"));
}

#[test]
fn test_bad_config_exits_one() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Drafter.toml"), "[forge\n").unwrap();
    drafter()
        .current_dir(tmp.path())
        .args([TOKEN, "v1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_dry_run_prints_plan_without_token() {
    let tmp = project_with_artifacts();
    std::fs::remove_file(tmp.path().join("bin").join(NAMES[3])).unwrap();

    drafter()
        .current_dir(tmp.path())
        .args([TOKEN, "release/v2.0.0", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tag_name: release/v2.0.0"))
        .stdout(predicate::str::contains("name:     Apollo v2.0.0"))
        .stdout(predicate::str::contains(
            "/releases/<id>/assets?name=worker-linux-amd64.tar.gz",
        ))
        .stdout(predicate::str::contains(TOKEN).not())
        .stderr(predicate::str::contains(NAMES[3]));
}

#[test]
fn test_partial_upload_failure_still_exits_zero() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(async {
        Mock::given(method("POST"))
            .and(path("/repos/acme/rocket/releases"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 42})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(query_param("name", NAMES[1]))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/repos/acme/rocket/releases/42/assets"))
            .respond_with(ResponseTemplate::new(201))
            .expect(3)
            .mount(&server)
            .await;
    });

    let tmp = project_with_artifacts();
    let mut cmd = drafter();
    point_at(&mut cmd, &server, tmp.path());
    cmd.args([TOKEN, "release/v2.0.0"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains(format!("Could not upload {}", NAMES[1])))
        .stderr(predicate::str::contains(TOKEN).not())
        .stdout(predicate::str::contains(TOKEN).not());
}

#[test]
fn test_partial_upload_failure_with_strict_exits_two() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(async {
        Mock::given(method("POST"))
            .and(path("/repos/acme/rocket/releases"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 42})))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/repos/acme/rocket/releases/42/assets"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;
    });

    let tmp = project_with_artifacts();
    std::fs::remove_file(tmp.path().join("bin").join(NAMES[0])).unwrap();

    let mut cmd = drafter();
    point_at(&mut cmd, &server, tmp.path());
    cmd.args([TOKEN, "v1", "--strict"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to upload"))
        .stderr(predicate::str::contains(NAMES[0]));
}

#[test]
fn test_creation_failure_exits_one_and_uploads_nothing() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(async {
        Mock::given(method("POST"))
            .and(path("/repos/acme/rocket/releases"))
            .respond_with(
                ResponseTemplate::new(422).set_body_string(r#"{"code":"already_exists"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(path_regex(r"/assets$"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;
    });

    let tmp = project_with_artifacts();
    let mut cmd = drafter();
    point_at(&mut cmd, &server, tmp.path());
    cmd.args([TOKEN, "v1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already_exists"))
        .stderr(predicate::str::contains(TOKEN).not());

    let requests = rt.block_on(server.received_requests()).unwrap();
    assert_eq!(requests.len(), 1);
}

#[test]
fn test_api_url_from_environment() {
    let tmp = project_with_artifacts();
    drafter()
        .current_dir(tmp.path())
        .env("DRAFTER_API_URL", "http://forge.test")
        .args([TOKEN, "v1", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("POST http://forge.test/repos/"));
}

#[test]
fn test_api_url_flag_overrides_environment() {
    let tmp = project_with_artifacts();
    drafter()
        .current_dir(tmp.path())
        .env("DRAFTER_API_URL", "http://forge.test")
        .args([TOKEN, "v1", "--dry-run", "--api-url", "http://flag.test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("POST http://flag.test/repos/"))
        .stdout(predicate::str::contains("forge.test").not());
}

#[test]
fn test_empty_owner_override_is_rejected() {
    let tmp = project_with_artifacts();
    drafter()
        .current_dir(tmp.path())
        .args([TOKEN, "v1", "--dry-run", "--owner", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("owner and project must not be empty"))
        .stdout(predicate::str::contains("repos//").not());
}

#[test]
fn test_strict_from_config_file_exits_two() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(async {
        Mock::given(method("POST"))
            .and(path("/repos/acme/rocket/releases"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 42})))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/repos/acme/rocket/releases/42/assets"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;
    });

    let tmp = project_with_artifacts();
    std::fs::write(tmp.path().join("Drafter.toml"), "[release]\nstrict = true\n").unwrap();
    std::fs::remove_file(tmp.path().join("bin").join(NAMES[2])).unwrap();

    let mut cmd = drafter();
    point_at(&mut cmd, &server, tmp.path());
    cmd.args([TOKEN, "v1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(NAMES[2]));
}
