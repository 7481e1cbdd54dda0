//! Integration tests for the `tl` CLI.
//!
//! Each test creates a temp list directory, runs `tl` as a subprocess,
//! and verifies stdout and/or the saved tasks.json.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the built `tl` binary.
fn tl_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("tl");
    path
}

/// Create a minimal list in the given directory with two fixture tasks.
fn create_test_list(root: &Path) {
    let tally_dir = root.join("tally");
    fs::create_dir_all(&tally_dir).unwrap();

    fs::write(
        tally_dir.join("config.toml"),
        r#"[defaults]
priority = "medium"

[ui]
newest_first = true
"#,
    )
    .unwrap();

    fs::write(
        tally_dir.join("tasks.json"),
        r#"[
  {
    "id": 1714000000000,
    "text": "Buy milk",
    "completed": false,
    "priority": "low",
    "created_at": "2025-05-01T09:00:00Z"
  },
  {
    "id": 1714000000001,
    "text": "Call bank",
    "completed": false,
    "priority": "high",
    "created_at": "2025-05-01T09:05:00Z"
  }
]"#,
    )
    .unwrap();
}

/// Run `tl` with the given args in the given directory, returning (stdout, stderr, success).
fn run_tl(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(tl_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run tl");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `tl` expecting success, return stdout.
fn run_tl_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_tl(dir, args);
    if !success {
        panic!(
            "tl {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

/// Parse the saved tasks.json as generic JSON.
fn saved_tasks(root: &Path) -> serde_json::Value {
    let content = fs::read_to_string(root.join("tally/tasks.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

// ---------------------------------------------------------------------------
// Init
// ---------------------------------------------------------------------------

#[test]
fn test_init_creates_config_and_empty_tasks() {
    let tmp = tempfile::TempDir::new().unwrap();

    let out = run_tl_ok(tmp.path(), &["init"]);
    assert!(out.contains("initialized"));
    assert!(tmp.path().join("tally/config.toml").exists());
    assert_eq!(
        fs::read_to_string(tmp.path().join("tally/tasks.json")).unwrap(),
        "[]"
    );
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_tl_ok(tmp.path(), &["init"]);

    let (_, stderr, success) = run_tl(tmp.path(), &["init"]);
    assert!(!success);
    assert!(stderr.contains("already exists"));

    run_tl_ok(tmp.path(), &["init", "--force"]);
}

#[test]
fn test_commands_outside_a_list_fail() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_tl(tmp.path(), &["list"]);
    assert!(!success);
    assert!(stderr.contains("tl init"));
}

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

#[test]
fn test_add_persists_task_with_defaults() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_tl_ok(tmp.path(), &["init"]);

    let out = run_tl_ok(tmp.path(), &["add", "Water", "the", "plants"]);
    assert!(out.contains("added"));
    assert!(out.contains("(medium)"));

    let tasks = saved_tasks(tmp.path());
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["text"], "Water the plants");
    assert_eq!(tasks[0]["completed"], false);
    assert_eq!(tasks[0]["priority"], "medium");
    assert!(tasks[0]["id"].as_i64().unwrap() > 0);
}

#[test]
fn test_add_with_priority_flag() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_tl_ok(tmp.path(), &["init"]);

    run_tl_ok(tmp.path(), &["add", "Call bank", "--priority", "high"]);
    let tasks = saved_tasks(tmp.path());
    assert_eq!(tasks[0]["priority"], "high");
}

#[test]
fn test_add_empty_text_is_rejected_before_the_store() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_tl_ok(tmp.path(), &["init"]);

    let (_, stderr, success) = run_tl(tmp.path(), &["add", "   "]);
    assert!(!success);
    assert!(stderr.contains("empty"));
    // No mutation happened
    assert_eq!(saved_tasks(tmp.path()).as_array().unwrap().len(), 0);
}

#[test]
fn test_add_assigns_distinct_increasing_ids() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_tl_ok(tmp.path(), &["init"]);

    run_tl_ok(tmp.path(), &["add", "one"]);
    run_tl_ok(tmp.path(), &["add", "two"]);
    run_tl_ok(tmp.path(), &["add", "three"]);

    let tasks = saved_tasks(tmp.path());
    let ids: Vec<i64> = tasks
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 3);
    assert!(ids[0] < ids[1] && ids[1] < ids[2]);
}

// ---------------------------------------------------------------------------
// List / search / stats
// ---------------------------------------------------------------------------

#[test]
fn test_list_newest_first_with_stats_line() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_list(tmp.path());

    let out = run_tl_ok(tmp.path(), &["list"]);
    let milk = out.find("Buy milk").unwrap();
    let bank = out.find("Call bank").unwrap();
    // newest_first = true → the later task prints first
    assert!(bank < milk);
    assert!(out.contains("2 total | 2 pending | 0 completed | 1 high priority"));
}

#[test]
fn test_list_search_is_case_insensitive() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_list(tmp.path());

    let out = run_tl_ok(tmp.path(), &["list", "--search", "CALL"]);
    assert!(out.contains("Call bank"));
    assert!(!out.contains("Buy milk"));

    let out = run_tl_ok(tmp.path(), &["search", "call"]);
    assert!(out.contains("Call bank"));
    assert!(!out.contains("Buy milk"));
}

#[test]
fn test_list_status_and_priority_filters() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_list(tmp.path());
    run_tl_ok(tmp.path(), &["toggle", "1714000000000"]);

    let out = run_tl_ok(tmp.path(), &["list", "--status", "completed"]);
    assert!(out.contains("Buy milk"));
    assert!(!out.contains("Call bank"));

    let out = run_tl_ok(tmp.path(), &["list", "--status", "active"]);
    assert!(out.contains("Call bank"));
    assert!(!out.contains("Buy milk"));

    let out = run_tl_ok(tmp.path(), &["list", "--priority", "high"]);
    assert!(out.contains("Call bank"));
    assert!(!out.contains("Buy milk"));
}

#[test]
fn test_list_empty_state_messages() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_tl_ok(tmp.path(), &["init"]);

    let out = run_tl_ok(tmp.path(), &["list"]);
    assert!(out.contains("no tasks yet"));

    run_tl_ok(tmp.path(), &["add", "only task"]);

    let out = run_tl_ok(tmp.path(), &["list", "--search", "zebra"]);
    assert!(out.contains("no tasks match your search/filter"));

    let out = run_tl_ok(tmp.path(), &["list", "--status", "completed"]);
    assert!(out.contains("no completed tasks"));
}

#[test]
fn test_invalid_filter_values_fail() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_list(tmp.path());

    let (_, stderr, success) = run_tl(tmp.path(), &["list", "--status", "done"]);
    assert!(!success);
    assert!(stderr.contains("invalid status"));

    let (_, stderr, success) = run_tl(tmp.path(), &["list", "--priority", "urgent"]);
    assert!(!success);
    assert!(stderr.contains("invalid priority"));
}

#[test]
fn test_stats_counts_ignore_filters() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_list(tmp.path());

    let out = run_tl_ok(tmp.path(), &["stats"]);
    assert_eq!(
        out.trim(),
        "2 total | 2 pending | 0 completed | 1 high priority"
    );
}

#[test]
fn test_json_output() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_list(tmp.path());

    let out = run_tl_ok(tmp.path(), &["list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["tasks"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["tasks"][0]["text"], "Buy milk");
    assert_eq!(parsed["stats"]["high_priority"], 1);

    let out = run_tl_ok(tmp.path(), &["stats", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["pending"], 2);
}

// ---------------------------------------------------------------------------
// Toggle / rm / priority
// ---------------------------------------------------------------------------

#[test]
fn test_toggle_twice_restores_completed() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_list(tmp.path());

    run_tl_ok(tmp.path(), &["toggle", "1714000000000"]);
    assert_eq!(saved_tasks(tmp.path())[0]["completed"], true);

    run_tl_ok(tmp.path(), &["toggle", "1714000000000"]);
    assert_eq!(saved_tasks(tmp.path())[0]["completed"], false);
}

#[test]
fn test_toggle_unknown_id_is_a_noop() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_list(tmp.path());
    let before = saved_tasks(tmp.path());

    let out = run_tl_ok(tmp.path(), &["toggle", "999"]);
    assert!(out.contains("no task with id 999"));
    assert_eq!(saved_tasks(tmp.path()), before);
}

#[test]
fn test_rm_removes_and_is_idempotent() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_list(tmp.path());

    run_tl_ok(tmp.path(), &["rm", "1714000000000"]);
    let tasks = saved_tasks(tmp.path());
    assert_eq!(tasks.as_array().unwrap().len(), 1);
    assert_eq!(tasks[0]["text"], "Call bank");

    // Removing again: no-op, still exit 0, collection unchanged
    let out = run_tl_ok(tmp.path(), &["rm", "1714000000000"]);
    assert!(out.contains("no task with id"));
    assert_eq!(saved_tasks(tmp.path()).as_array().unwrap().len(), 1);
}

#[test]
fn test_priority_set_and_cycle() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_list(tmp.path());

    run_tl_ok(tmp.path(), &["priority", "1714000000000", "high"]);
    assert_eq!(saved_tasks(tmp.path())[0]["priority"], "high");

    // Cycling steps high → low → medium → high
    run_tl_ok(tmp.path(), &["priority", "1714000000000"]);
    assert_eq!(saved_tasks(tmp.path())[0]["priority"], "low");
    run_tl_ok(tmp.path(), &["priority", "1714000000000"]);
    assert_eq!(saved_tasks(tmp.path())[0]["priority"], "medium");
    run_tl_ok(tmp.path(), &["priority", "1714000000000"]);
    assert_eq!(saved_tasks(tmp.path())[0]["priority"], "high");
}

#[test]
fn test_priority_unknown_id_is_a_noop() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_list(tmp.path());
    let before = saved_tasks(tmp.path());

    let out = run_tl_ok(tmp.path(), &["priority", "999", "high"]);
    assert!(out.contains("no task with id 999"));
    assert_eq!(saved_tasks(tmp.path()), before);
}

// ---------------------------------------------------------------------------
// Persistence edge cases
// ---------------------------------------------------------------------------

#[test]
fn test_malformed_tasks_file_falls_back_to_empty() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_list(tmp.path());
    fs::write(tmp.path().join("tally/tasks.json"), "not json {{{").unwrap();

    let (stdout, stderr, success) = run_tl(tmp.path(), &["list"]);
    assert!(success);
    assert!(stderr.contains("warning"));
    assert!(stdout.contains("no tasks yet"));
}

#[test]
fn test_missing_tasks_file_starts_empty() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_list(tmp.path());
    fs::remove_file(tmp.path().join("tally/tasks.json")).unwrap();

    let out = run_tl_ok(tmp.path(), &["list"]);
    assert!(out.contains("no tasks yet"));
}

#[test]
fn test_dir_flag_runs_against_another_directory() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_list(tmp.path());
    let elsewhere = tempfile::TempDir::new().unwrap();

    let dir = tmp.path().to_str().unwrap();
    let out = run_tl_ok(elsewhere.path(), &["-C", dir, "stats"]);
    assert!(out.contains("2 total"));
}

#[test]
fn test_no_subcommand_defaults_to_list() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_list(tmp.path());

    let out = run_tl_ok(tmp.path(), &[]);
    assert!(out.contains("Buy milk"));
    assert!(out.contains("Call bank"));
}
