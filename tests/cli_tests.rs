//! CLI integration tests using the real datafun binary

mod common;

use assert_cmd::Command;
use common::{TestServer, TestWorkspace};
use predicates::prelude::*;

const ROMEO: &str = "Romeo, Romeo! wherefore art thou Romeo?\nDeny thy father.\n";
const SCORES: &str = "Country name,Ladder score\nFinland,7.8\nDenmark,7.6\nNowhere,n/a\nSwitzerland,7.5\n";
const ASTROS: &str = r#"{"message": "success", "number": 4, "people": [{"name": "A", "craft": "ISS"}, {"name": "B", "craft": "Tiangong"}, {"name": "C", "craft": "ISS"}, {"name": "D"}]}"#;

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
fn datafun_cmd(workspace: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("datafun").unwrap();
    cmd.current_dir(&workspace.path)
        .env_remove("DATAFUN_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .env("NO_PROXY", "127.0.0.1")
        .env("no_proxy", "127.0.0.1");
    cmd
}

fn server() -> TestServer {
    TestServer::start(&[
        ("/romeo.txt", 200, ROMEO),
        ("/happiness.csv", 200, SCORES),
        ("/astros.json", 200, ASTROS),
        ("/broken.csv", 500, "internal error"),
    ])
}

fn config_yaml(romeo_url: &str, csv_url: &str, json_url: &str) -> String {
    format!(
        r#"fetched_dir: data
processed_dir: processed
fetch:
  - name: romeo
    url: "{romeo_url}"
    kind: text
    file: romeo.txt
  - name: happiness
    url: "{csv_url}"
    kind: csv
    file: happiness.csv
  - name: astronauts
    url: "{json_url}"
    kind: json
    file: astros.json
analyze:
  - name: romeo-count
    input: romeo.txt
    output: romeo_count.txt
    analysis:
      type: word_count
      word: Romeo
  - name: happiness-stats
    input: happiness.csv
    output: ladder_stats.txt
    title: "Ladder Score Statistics:"
    analysis:
      type: column_stats
      column: Ladder score
  - name: astronauts-by-craft
    input: astros.json
    output: by_craft.txt
    analysis:
      type: group_count
      list: people
      field: craft
"#
    )
}

fn workspace_with_config(server: &TestServer) -> TestWorkspace {
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "datafun.yaml",
        &config_yaml(
            &server.url("/romeo.txt"),
            &server.url("/happiness.csv"),
            &server.url("/astros.json"),
        ),
    );
    workspace
}

#[test]
fn test_help_output() {
    datafun_cmd(&TestWorkspace::new())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fetch"))
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("--strict"));
}

#[test]
fn test_version_output() {
    datafun_cmd(&TestWorkspace::new())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("datafun"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_run_end_to_end() {
    let server = server();
    let workspace = workspace_with_config(&server);

    datafun_cmd(&workspace)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("6 of 6 stages succeeded"));

    assert_eq!(workspace.read_file("data/romeo.txt"), ROMEO);
    assert_eq!(
        workspace.read_file("processed/romeo_count.txt"),
        "Occurrences of 'Romeo': 3\n"
    );
    assert!(
        workspace
            .read_file("processed/ladder_stats.txt")
            .starts_with("Ladder Score Statistics:\nMinimum: 7.50\nMaximum: 7.80\nMean: 7.63\n")
    );
    assert_eq!(
        workspace.read_file("processed/by_craft.txt"),
        "Counts by craft:\nISS: 2\nTiangong: 1\nUnknown: 1\n"
    );
}

#[test]
fn test_fetched_json_is_indented_and_ordered() {
    let server = server();
    let workspace = workspace_with_config(&server);

    datafun_cmd(&workspace).arg("fetch").assert().success();

    let json = workspace.read_file("data/astros.json");
    assert!(json.starts_with(
        "{\n    \"message\": \"success\",\n    \"number\": 4,\n    \"people\": [\n"
    ));
    assert!(!workspace.file_exists("processed"));
}

#[test]
fn test_spreadsheet_fetched_as_binary_and_counted() {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "Feedback").unwrap();
    worksheet.write_string(1, 0, "GitHub made it easy").unwrap();
    worksheet.write_string(2, 0, "more github, please").unwrap();
    worksheet.write_string(3, 1, "GitHub").unwrap();
    let xlsx = workbook.save_to_buffer().unwrap();

    let server = TestServer::start(&[]).with_bytes("/feedback.xlsx", 200, &xlsx);
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "datafun.yaml",
        &format!(
            r#"fetched_dir: data
processed_dir: processed
fetch:
  - name: feedback
    url: "{}"
    kind: excel
    file: Feedback.xlsx
analyze:
  - name: feedback-github
    input: Feedback.xlsx
    output: excel_feedback_github.txt
    analysis:
      type: column_word_count
      column: A
      word: GitHub
"#,
            server.url("/feedback.xlsx")
        ),
    );

    datafun_cmd(&workspace)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 of 2 stages succeeded"));

    let fetched = std::fs::read(workspace.path.join("data/Feedback.xlsx")).unwrap();
    assert_eq!(fetched, xlsx);
    assert_eq!(
        workspace.read_file("processed/excel_feedback_github.txt"),
        "Occurrences of 'GitHub' in column A: 2\n"
    );
}

#[test]
fn test_no_subcommand_runs_everything() {
    let server = server();
    let workspace = workspace_with_config(&server);

    datafun_cmd(&workspace).assert().success();

    assert!(workspace.file_exists("processed/by_craft.txt"));
}

#[test]
fn test_failed_stage_does_not_stop_run() {
    let server = server();
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "datafun.yaml",
        &config_yaml(
            &server.url("/romeo.txt"),
            &server.url("/broken.csv"),
            &server.url("/astros.json"),
        ),
    );

    datafun_cmd(&workspace)
        .assert()
        .success()
        .stdout(predicate::str::contains("FAILED fetch happiness [remote]"))
        .stdout(predicate::str::contains("FAILED analysis happiness-stats [io]"))
        .stdout(predicate::str::contains("4 of 6 stages succeeded"))
        .stderr(predicate::str::contains("HTTP error occurred: 500"));

    assert!(!workspace.file_exists("data/happiness.csv"));
    assert!(!workspace.file_exists("processed/ladder_stats.txt"));
    assert!(workspace.file_exists("processed/romeo_count.txt"));
    assert!(workspace.file_exists("processed/by_craft.txt"));
}

#[test]
fn test_strict_exits_non_zero_on_failure() {
    let server = server();
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "datafun.yaml",
        &config_yaml("", &server.url("/happiness.csv"), &server.url("/astros.json")),
    );

    datafun_cmd(&workspace)
        .arg("--strict")
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAILED fetch romeo [validation]"))
        .stderr(predicate::str::contains("2 of 6 stages failed"));
}

#[test]
fn test_process_without_fetched_data() {
    let workspace = TestWorkspace::new();
    workspace.write_file("datafun.yaml", &config_yaml("", "", ""));

    datafun_cmd(&workspace)
        .arg("process")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 3 stages succeeded"));

    assert!(!workspace.file_exists("processed/romeo_count.txt"));
}

#[test]
fn test_directory_overrides() {
    let server = server();
    let workspace = workspace_with_config(&server);

    datafun_cmd(&workspace)
        .args(["run", "--fetched-dir", "raw", "--processed-dir", "reports", "-j", "3"])
        .assert()
        .success();

    assert!(workspace.file_exists("raw/romeo.txt"));
    assert!(workspace.file_exists("reports/romeo_count.txt"));
    assert!(!workspace.file_exists("data"));
}

#[test]
fn test_config_option_and_env() {
    let server = server();
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "jobs/custom.yaml",
        &config_yaml(
            &server.url("/romeo.txt"),
            &server.url("/happiness.csv"),
            &server.url("/astros.json"),
        ),
    );

    datafun_cmd(&workspace)
        .args(["list", "--config", "jobs/custom.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("happiness-stats"));

    datafun_cmd(&workspace)
        .arg("list")
        .env("DATAFUN_CONFIG", "jobs/custom.yaml")
        .assert()
        .success()
        .stdout(predicate::str::contains(server.url("/astros.json")));
}

#[test]
fn test_list_without_config_shows_builtin_jobs() {
    datafun_cmd(&TestWorkspace::new())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("romeo"))
        .stdout(predicate::str::contains("example_data"))
        .stdout(predicate::str::contains("astronauts-by-craft"));
}

#[test]
fn test_missing_config_file() {
    datafun_cmd(&TestWorkspace::new())
        .args(["list", "-c", "absent.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_invalid_config_fails_before_running() {
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "datafun.yaml",
        "analyze:\n  - name: bad\n    input: a.txt\n    output: b.txt\n    analysis:\n      type: word_count\n      word: ''\n",
    );

    datafun_cmd(&workspace)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_init_then_refuse_overwrite() {
    let workspace = TestWorkspace::new();

    datafun_cmd(&workspace)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote datafun.yaml"));
    assert!(workspace.read_file("datafun.yaml").contains("romeo"));

    datafun_cmd(&workspace)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    datafun_cmd(&workspace).args(["init", "--force"]).assert().success();
}

#[test]
fn test_log_file_receives_log_output() {
    let server = server();
    let workspace = workspace_with_config(&server);

    datafun_cmd(&workspace)
        .args(["fetch", "--log-file", "logs/datafun.log"])
        .assert()
        .success();

    let log = workspace.read_file("logs/datafun.log");
    assert!(log.contains("Fetching"));
    assert!(log.contains("SUCCESS"));
}

#[test]
fn test_completions() {
    datafun_cmd(&TestWorkspace::new())
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("datafun"));

    datafun_cmd(&TestWorkspace::new())
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shell"));
}
