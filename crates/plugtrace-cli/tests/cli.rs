use anyhow::Result;
use assert_cmd::Command;
use plugtrace_testing::RecordBuilder;
use plugtrace_testing::fixtures::{nested_pair, odata_batch, raw_row, write_json};
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

fn plugtrace(workspace: &Path) -> Result<Command> {
    let mut cmd = Command::cargo_bin("plugtrace")?;
    cmd.env_remove("RUST_LOG")
        .env("PLUGTRACE_PATH", workspace)
        .arg("--log-level")
        .arg("error");
    Ok(cmd)
}

#[test]
fn test_timeline_plain_renders_tree() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let batch = temp_dir.path().join("batch.json");
    write_json(&batch, &odata_batch(&nested_pair()))?;

    plugtrace(temp_dir.path())?
        .arg("timeline")
        .arg(&batch)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 records | 2 roots | 0 orphans"))
        .stdout(predicate::str::contains("    B  Create/account  Synchronous  50ms"))
        .stdout(predicate::str::contains("span 230ms"));

    Ok(())
}

#[test]
fn test_timeline_json_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let batch = temp_dir.path().join("batch.json");
    write_json(&batch, &odata_batch(&nested_pair()))?;

    let output = plugtrace(temp_dir.path())?
        .args(["--format", "json", "timeline"])
        .arg(&batch)
        .output()?;
    assert!(output.status.success());

    let view: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(view["summary"]["record_count"], 3);
    assert_eq!(view["roots"].as_array().map(Vec::len), Some(2));
    assert_eq!(view["roots"][0]["children"][0]["record"]["plugin_name"], "B");
    assert_eq!(view["roots"][1]["start_offset_percent"].as_f64().map(|v| v > 80.0), Some(true));

    Ok(())
}

#[test]
fn test_invalid_row_aborts_unless_skipped() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let records = nested_pair();
    let mut rows: Vec<Value> = records.iter().map(raw_row).collect();
    rows[1]["mode"] = Value::from(7);

    let batch = temp_dir.path().join("batch.json");
    write_json(&batch, &Value::Array(rows))?;

    plugtrace(temp_dir.path())?
        .arg("timeline")
        .arg(&batch)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown execution mode code: 7"));

    plugtrace(temp_dir.path())?
        .arg("timeline")
        .arg(&batch)
        .arg("--skip-invalid")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 records | 2 roots"));

    Ok(())
}

#[test]
fn test_group_by_correlation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let records = vec![
        RecordBuilder::new("A").at(0).duration(100).correlation(1).build(),
        RecordBuilder::new("X").at(50).duration(150).correlation(2).build(),
        RecordBuilder::new("A.1").depth(1).at(60).duration(10).correlation(1).build(),
    ];
    let batch = temp_dir.path().join("batch.json");
    write_json(&batch, &odata_batch(&records))?;

    let by_batch = plugtrace(temp_dir.path())?
        .args(["--format", "json", "timeline"])
        .arg(&batch)
        .output()?;
    let view: Value = serde_json::from_slice(&by_batch.stdout)?;
    assert_eq!(view["roots"][1]["children"][0]["record"]["plugin_name"], "A.1");

    let by_correlation = plugtrace(temp_dir.path())?
        .args(["--format", "json", "timeline", "--group-by", "correlation"])
        .arg(&batch)
        .output()?;
    let view: Value = serde_json::from_slice(&by_correlation.stdout)?;
    assert_eq!(view["roots"][0]["children"][0]["record"]["plugin_name"], "A.1");
    assert_eq!(view["summary"]["correlation_count"], 2);

    Ok(())
}

#[test]
fn test_query_from_filter_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let filter = temp_dir.path().join("filter.toml");
    std::fs::write(
        &filter,
        "top = 20\n\n[[conditions]]\nfield = \"plugin_name\"\noperator = \"contains\"\nvalue = \"Foo\"\n",
    )?;

    plugtrace(temp_dir.path())?
        .arg("query")
        .arg("--filter")
        .arg(&filter)
        .assert()
        .success()
        .stdout(predicate::str::contains("$filter=(contains(typename, 'Foo'))\n"))
        .stdout(predicate::str::contains("$orderby=createdon desc\n"))
        .stdout(predicate::str::contains("$top=20\n"));

    Ok(())
}

#[test]
fn test_query_top_is_clamped() -> Result<()> {
    let temp_dir = TempDir::new()?;

    plugtrace(temp_dir.path())?
        .args(["query", "--top", "99999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$top=5000\n"))
        .stdout(predicate::str::contains("$filter").not());

    Ok(())
}

#[test]
fn test_config_init_and_show() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.toml");

    plugtrace(temp_dir.path())?
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, showing defaults"));

    plugtrace(temp_dir.path())?
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config_path.exists());

    plugtrace(temp_dir.path())?
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    std::fs::write(&config_path, "[timeline]\ngrouping = \"correlation\"\n")?;
    let output = plugtrace(temp_dir.path())?
        .args(["--format", "json", "config", "show"])
        .output()?;
    let config: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(config["timeline"]["grouping"], "correlation");
    assert_eq!(config["query"]["top"], 100);

    plugtrace(temp_dir.path())?
        .args(["config", "init", "--force"])
        .assert()
        .success();
    let output = plugtrace(temp_dir.path())?
        .args(["--format", "json", "config", "show"])
        .output()?;
    let config: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(config["timeline"]["grouping"], "batch");

    Ok(())
}

#[test]
fn test_data_dir_overrides_env() -> Result<()> {
    let env_dir = TempDir::new()?;
    let explicit_dir = TempDir::new()?;

    plugtrace(env_dir.path())?
        .arg("--data-dir")
        .arg(explicit_dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    assert!(explicit_dir.path().join("config.toml").exists());
    assert!(!env_dir.path().join("config.toml").exists());

    Ok(())
}
