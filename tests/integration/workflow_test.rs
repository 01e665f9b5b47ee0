//! End-to-end workflows across several CLI invocations
//!
//! Every invocation is a fresh process, so these exercise the full
//! load → mutate → persist cycle through the file store.

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::{cleanmate, json};

/// Add a task, complete it, and check the persisted structure
#[test]
fn test_e2e_add_then_done() {
    let temp = TempDir::new().unwrap();

    let added = json(&temp, &["add", "Clean Kitchen", "--due", "2024-03-01"]);
    let id = added["task"]["id"].as_u64().unwrap();
    let id_arg = id.to_string();

    cleanmate(&temp)
        .args(["done", id_arg.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Completed: {id}")));

    let raw = fs::read_to_string(temp.path().join("data/tasks")).unwrap();
    assert_eq!(
        raw,
        format!(r#"[{{"id":{id},"name":"Clean Kitchen","dueDate":"2024-03-01","completed":true}}]"#)
    );

    // Marking it again changes nothing
    cleanmate(&temp)
        .args(["done", id_arg.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already done"));
    assert_eq!(fs::read_to_string(temp.path().join("data/tasks")).unwrap(), raw);
}

/// Tasks list in insertion order and filter by status
#[test]
fn test_list_order_and_filters() {
    let temp = TempDir::new().unwrap();
    json(&temp, &["add", "Vacuum Bedroom", "--due", "2024-03-01"]);
    let second = json(&temp, &["add", "Mop Floor", "--due", "2024-03-02"]);
    json(&temp, &["add", "Wash Dishes", "--due", "2024-03-03"]);

    let id = second["task"]["id"].as_u64().unwrap().to_string();
    json(&temp, &["done", id.as_str()]);

    let all = json(&temp, &["list"]);
    let names: Vec<&str> =
        all["tasks"].as_array().unwrap().iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Vacuum Bedroom", "Mop Floor", "Wash Dishes"]);
    assert_eq!(all["pending"], 2);

    let pending = json(&temp, &["list", "--pending"]);
    assert_eq!(pending["total"], 2);

    let done = json(&temp, &["list", "--done"]);
    assert_eq!(done["total"], 1);
    assert_eq!(done["tasks"][0]["name"], "Mop Floor");
}

/// Theme toggles persist across runs
#[test]
fn test_theme_toggle_persists() {
    let temp = TempDir::new().unwrap();

    cleanmate(&temp)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to dark theme"));
    assert_eq!(fs::read_to_string(temp.path().join("data/theme")).unwrap(), "dark");

    let shown = json(&temp, &["theme"]);
    assert_eq!(shown["theme"], "dark");
    assert_eq!(shown["changed"], false);

    let toggled = json(&temp, &["theme", "toggle"]);
    assert_eq!(toggled["theme"], "light");
    assert_eq!(fs::read_to_string(temp.path().join("data/theme")).unwrap(), "light");
}

/// A corrupt task file is treated as an empty list
#[test]
fn test_corrupt_tasks_file_recovers() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("tasks"), "{{{").unwrap();

    let listed = json(&temp, &["list"]);
    assert_eq!(listed["total"], 0);

    let added = json(&temp, &["add", "Clean Kitchen", "--due", "2024-03-01"]);
    assert_eq!(added["success"], true);
    assert_eq!(json(&temp, &["list"])["total"], 1);
}

/// Config file templates replace the built-in ones
#[test]
fn test_config_templates() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".cleanmate");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[tasks]\ntemplates = [\"Water Plants\"]\n").unwrap();

    let listed = json(&temp, &["templates"]);
    assert_eq!(listed["templates"], serde_json::json!(["Water Plants"]));

    let added = json(&temp, &["add", "--template", "water plants", "--due", "2024-03-01"]);
    assert_eq!(added["task"]["name"], "Water Plants");
}

/// The dashboard shows tasks, theme, and a tip together
#[test]
fn test_dashboard_json() {
    let temp = TempDir::new().unwrap();
    json(&temp, &["add", "Mop Floor", "--due", "2024-03-02"]);

    let dashboard = json(&temp, &[]);
    assert_eq!(dashboard["theme"], "light");
    assert_eq!(dashboard["total"], 1);
    assert!(dashboard["tip"].is_string());
}
