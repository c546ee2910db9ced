use magicgen_core::validate_schema;
use magicgen_generate::{RngSource, SystemClock, generate_batch};
use serde_json::json;

#[test]
fn ranged_and_bare_rand_stay_in_bounds() {
    let schema = validate_schema(&json!({
        "ranged": "int:rand(-20, 20)",
        "bare": "int:rand"
    }))
    .expect("valid schema");
    let mut rng = RngSource::from_entropy();

    for record in generate_batch(&schema, 1000, &mut rng, &SystemClock) {
        let ranged = record.get("ranged").and_then(|v| v.as_i64()).expect("ranged");
        let bare = record.get("bare").and_then(|v| v.as_i64()).expect("bare");
        assert!((-20..=20).contains(&ranged));
        assert!((0..=10000).contains(&bare));
    }
}

#[test]
fn list_choice_stays_in_list() {
    let schema = validate_schema(&json!({"letter": "str:[\"a\",\"b\",\"c\"]"})).expect("schema");
    let mut rng = RngSource::from_entropy();
    let batch = generate_batch(&schema, 1000, &mut rng, &SystemClock);

    let mut seen = std::collections::BTreeSet::new();
    for record in &batch {
        let letter = record.get("letter").and_then(|v| v.as_str()).expect("letter");
        assert!(["a", "b", "c"].contains(&letter));
        seen.insert(letter.to_string());
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn int_empty_is_null_and_constants_repeat() {
    let schema = validate_schema(&json!({
        "missing": "int:",
        "blank": "str:",
        "fixed": "int:42",
        "label": "str:hello"
    }))
    .expect("schema");
    let mut rng = RngSource::seeded(1);
    let record = magicgen_generate::generate_record(&schema, &mut rng, &SystemClock);

    let encoded = serde_json::to_value(&record).expect("serialize");
    assert_eq!(
        encoded,
        json!({"missing": null, "blank": "", "fixed": 42, "label": "hello"})
    );
}
