use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("magicgen_cli_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn magicgen(cwd: &PathBuf, args: &[&str]) -> Output {
    magicgen_with_filter(cwd, "info", args)
}

fn magicgen_with_filter(cwd: &PathBuf, filter: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_magicgen"))
        .current_dir(cwd)
        .env("RUST_LOG", filter)
        .args(args)
        .output()
        .expect("run magicgen")
}

#[test]
fn zero_files_prints_to_stdout() {
    let dir = temp_dir("console");
    let output = magicgen(
        &dir,
        &[
            "--path-to-save-files",
            ".",
            "--files-count",
            "0",
            "--data-lines",
            "3",
            "--data-schema",
            r#"{"name": "str:rand", "age": "int:rand(1, 100)", "type": "str:['client','partner']"}"#,
        ],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let records: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&stdout)
        .into_iter()
        .map(|item| item.expect("json record"))
        .collect();
    assert_eq!(records.len(), 3);
    assert!(fs::read_dir(&dir).expect("read dir").next().is_none());
}

#[test]
fn writes_files_from_schema_file() {
    let dir = temp_dir("files");
    fs::write(
        dir.join("schema.json"),
        r#"{"id": "str:rand", "score": "int:[1, 2, 3]", "at": "timestamp:"}"#,
    )
    .expect("write schema");
    fs::create_dir_all(dir.join("out")).expect("create out dir");

    let output = magicgen(
        &dir,
        &[
            "--path-to-save-files",
            "out",
            "--files-count",
            "4",
            "--file-name",
            "batch",
            "--file-prefix",
            "default",
            "--data-lines",
            "5",
            "--multiprocessing",
            "2",
            "--data-schema",
            "./schema.json",
        ],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    for index in 1..=4 {
        let path = dir.join("out").join(format!("batch_{index}.json"));
        let contents = fs::read_to_string(&path).expect("output file");
        let parsed: serde_json::Value = serde_json::from_str(&contents).expect("json array");
        assert_eq!(parsed.as_array().map(Vec::len), Some(5));
    }
}

#[test]
fn invalid_schema_exits_non_zero_with_field() {
    let dir = temp_dir("bad_schema");
    let output = magicgen(
        &dir,
        &["--path-to-save-files", ".", "--data-schema", r#"{"score": "int:rand(100, 10)"}"#],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("score"), "stderr: {stderr}");
    assert!(fs::read_dir(&dir).expect("read dir").next().is_none());
}

#[test]
fn errors_reach_stderr_with_logging_disabled() {
    let dir = temp_dir("quiet");
    let output = magicgen_with_filter(
        &dir,
        "off",
        &["--path-to-save-files", ".", "--data-schema", r#"{"score": "int:rand(100, 10)"}"#],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("score"), "stderr: {stderr}");
    assert!(stderr.contains("hint:"), "stderr: {stderr}");
}

#[test]
fn negative_files_count_is_rejected() {
    let dir = temp_dir("negative");
    let output = magicgen(
        &dir,
        &["--path-to-save-files", ".", "--files-count", "-1", "--data-schema", r#"{"a": "str:"}"#],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("files-count"));
}

#[test]
fn config_file_supplies_defaults() {
    let dir = temp_dir("config");
    fs::write(
        dir.join("magicgen.toml"),
        "path_to_save_files = \".\"\nfiles_count = 2\nfile_name = \"cfg\"\nfile_prefix = \"count\"\n",
    )
    .expect("write config");

    let output = magicgen(&dir, &["--data-schema", r#"{"n": "int:1"}"#]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(dir.join("cfg_1").is_file());
    assert!(dir.join("cfg_2").is_file());
}

#[test]
fn missing_schema_file_is_reported() {
    let dir = temp_dir("missing_schema");
    let output = magicgen(&dir, &["--path-to-save-files", ".", "--data-schema", "nope.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}
