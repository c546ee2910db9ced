use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use magicgen_core::{ValidatedSchema, validate_schema};
use magicgen_generate::{
    FilePrefix, GenerateOptions, GenerationEngine, GenerationError, OutputMode,
};
use serde_json::{Value, json};

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("magicgen_generate_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

fn user_schema() -> ValidatedSchema {
    validate_schema(&json!({
        "id": "str:rand",
        "age": "int:rand(18, 65)",
        "role": "str:['admin', 'user']",
        "created": "timestamp:"
    }))
    .expect("valid schema")
}

fn options(out_dir: PathBuf) -> GenerateOptions {
    GenerateOptions {
        output_dir: out_dir,
        file_name: "users".to_string(),
        file_prefix: FilePrefix::Indexed,
        files_count: 3,
        data_lines: 4,
        clear_path: false,
        workers: 1,
        seed: Some(7),
    }
}

fn file_names(dir: &PathBuf) -> BTreeSet<String> {
    fs::read_dir(dir)
        .expect("read out dir")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
        .collect()
}

fn read_array(path: &PathBuf) -> Vec<Value> {
    let contents = fs::read_to_string(path).expect("read output file");
    let parsed: Value = serde_json::from_str(&contents).expect("parse output");
    parsed.as_array().expect("array of records").clone()
}

#[test]
fn console_mode_prints_records_and_writes_nothing() {
    let out_dir = temp_out_dir("console");
    let mut opts = options(out_dir.clone());
    opts.files_count = 0;
    opts.data_lines = 2;

    let engine = GenerationEngine::new(opts);
    assert_eq!(engine.mode(), OutputMode::Console);

    let mut console = Vec::new();
    let summary = engine
        .run_with_console(&user_schema(), &mut console)
        .expect("console run");

    assert_eq!(summary.records_generated, 2);
    assert!(summary.files.is_empty());
    assert!(file_names(&out_dir).is_empty());

    let text = String::from_utf8(console).expect("utf8");
    let stream = serde_json::Deserializer::from_str(&text).into_iter::<Value>();
    let records: Vec<Value> = stream.map(|item| item.expect("record")).collect();
    assert_eq!(records.len(), 2);
    assert!(records[0]["created"].is_f64());
}

#[test]
fn single_process_writes_every_file() {
    let out_dir = temp_out_dir("single");
    let engine = GenerationEngine::new(options(out_dir.clone()));
    let summary = engine.run(&user_schema()).expect("single run");

    assert_eq!(summary.mode, OutputMode::SingleProcess);
    assert_eq!(summary.records_generated, 12);
    let expected: BTreeSet<String> = ["users_1.json", "users_2.json", "users_3.json"]
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(file_names(&out_dir), expected);

    for record in read_array(&out_dir.join("users_2.json")) {
        let age = record["age"].as_i64().expect("age");
        assert!((18..=65).contains(&age));
        let role = record["role"].as_str().expect("role");
        assert!(role == "admin" || role == "user");
        let id = record["id"].as_str().expect("id");
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }
}

#[test]
fn single_file_is_named_after_base() {
    let out_dir = temp_out_dir("one");
    let mut opts = options(out_dir.clone());
    opts.files_count = 1;
    opts.file_prefix = FilePrefix::Uuid;

    GenerationEngine::new(opts)
        .run(&user_schema())
        .expect("single file run");
    assert_eq!(
        file_names(&out_dir),
        BTreeSet::from(["users.json".to_string()])
    );
}

#[test]
fn parallel_run_uses_only_non_empty_buckets() {
    let out_dir = temp_out_dir("parallel");
    let mut opts = options(out_dir.clone());
    opts.files_count = 2;
    opts.workers = 4;
    opts.file_prefix = FilePrefix::Count;

    let summary = GenerationEngine::new(opts)
        .run(&user_schema())
        .expect("parallel run");

    assert_eq!(summary.mode, OutputMode::MultiProcess);
    assert_eq!(summary.workers_used, 2);
    assert_eq!(
        file_names(&out_dir),
        BTreeSet::from(["users_1".to_string(), "users_2".to_string()])
    );
    let indices: Vec<u64> = summary.files.iter().map(|file| file.index).collect();
    assert_eq!(indices, vec![1, 2]);
}

#[test]
fn parallel_run_covers_all_indices() {
    let out_dir = temp_out_dir("parallel_many");
    let mut opts = options(out_dir.clone());
    opts.files_count = 10;
    opts.workers = 3;

    let summary = GenerationEngine::new(opts)
        .run(&user_schema())
        .expect("parallel run");

    assert_eq!(summary.workers_used, 3);
    assert_eq!(summary.files.len(), 10);
    let expected: BTreeSet<String> = (1..=10).map(|i| format!("users_{i}.json")).collect();
    assert_eq!(file_names(&out_dir), expected);
}

#[test]
fn seeded_runs_repeat_non_time_fields() {
    let schema = validate_schema(&json!({"n": "int:rand", "s": "str:rand"})).expect("schema");
    let dir_a = temp_out_dir("seed_a");
    let dir_b = temp_out_dir("seed_b");

    GenerationEngine::new(options(dir_a.clone()))
        .run(&schema)
        .expect("run a");
    GenerationEngine::new(options(dir_b.clone()))
        .run(&schema)
        .expect("run b");

    for name in ["users_1.json", "users_2.json", "users_3.json"] {
        let a = fs::read_to_string(dir_a.join(name)).expect("read a");
        let b = fs::read_to_string(dir_b.join(name)).expect("read b");
        assert_eq!(a, b, "{name} should repeat under a fixed seed");
    }
}

#[test]
fn clear_path_removes_previous_output() {
    let out_dir = temp_out_dir("clear");
    fs::write(out_dir.join("users_99.json"), "[]").expect("seed stale file");
    fs::write(out_dir.join("keep.json"), "[]").expect("seed unrelated file");

    let mut opts = options(out_dir.clone());
    opts.clear_path = true;
    opts.files_count = 1;
    let summary = GenerationEngine::new(opts)
        .run(&user_schema())
        .expect("run with cleanup");

    assert_eq!(summary.files_cleared, 1);
    assert_eq!(
        file_names(&out_dir),
        BTreeSet::from(["keep.json".to_string(), "users.json".to_string()])
    );
}

#[test]
fn failed_cleanup_aborts_before_generation() {
    let out_dir = temp_out_dir("clear_fail");
    fs::write(out_dir.join("users_0.json"), "[]").expect("seed stale file");
    fs::create_dir(out_dir.join("users_dir.json")).expect("seed undeletable match");

    let mut opts = options(out_dir.clone());
    opts.clear_path = true;
    let err = GenerationEngine::new(opts)
        .run(&user_schema())
        .unwrap_err();

    match err {
        GenerationError::Cleanup { path, .. } => assert_eq!(path, out_dir.join("users_dir.json")),
        other => panic!("expected cleanup error, got {other:?}"),
    }
    assert_eq!(
        file_names(&out_dir),
        BTreeSet::from(["users_dir.json".to_string()])
    );
}

#[test]
fn write_failure_aborts_parallel_run() {
    let out_dir = temp_out_dir("missing").join("does_not_exist");
    let mut opts = options(out_dir);
    opts.workers = 2;

    let err = GenerationEngine::new(opts)
        .run(&user_schema())
        .unwrap_err();
    assert!(matches!(err, GenerationError::Worker { .. }));
}

#[test]
fn zero_data_lines_is_rejected() {
    let mut opts = options(temp_out_dir("zero_lines"));
    opts.data_lines = 0;
    let err = GenerationEngine::new(opts).run(&user_schema()).unwrap_err();
    assert!(matches!(err, GenerationError::InvalidOptions(_)));
}
