use crate::engine::types::Value;
use crate::test_helpers::factory::Factory;
use serde_json::json;

use super::records_from_json;

#[test]
fn test_record_factory() {
    let record = Factory::record()
        .with("dept", "Ops")
        .with("region", "EU")
        .without("sales")
        .create();

    assert_eq!(record.get("dept"), Some(&Value::from("Ops")));
    assert_eq!(record.get("region"), Some(&Value::from("EU")));
    assert!(!record.contains("sales"));
}

#[test]
fn test_record_factory_list() {
    let records = Factory::record().with("region", "EU").create_list(5);
    assert_eq!(records.len(), 5);
    for (i, r) in records.iter().enumerate() {
        assert_eq!(r.get("index"), Some(&Value::Number(i as f64)));
        assert_eq!(r.get("region"), Some(&Value::from("EU")));
        assert!(r.get("sales").and_then(Value::as_f64).is_some());
    }
}

#[test]
fn test_records_from_json() {
    let records = records_from_json(json!([{"a": 1, "b": "x"}, {"a": null}]));
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("a"), Some(&Value::Number(1.0)));
    assert_eq!(records[1].get("a"), Some(&Value::Null));
}
