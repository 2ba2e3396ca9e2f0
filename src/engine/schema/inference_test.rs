use serde_json::json;

use crate::engine::schema::infer_schema;
use crate::engine::types::FieldType;
use crate::test_helpers::factories::records_from_json;

#[test]
fn infers_fields_in_first_seen_order() {
    let records = records_from_json(json!([
        {"dept": "Eng", "sales": 10},
        {"dept": "Ops", "hired": "2021-04-01", "remote": true}
    ]));
    let fields = infer_schema(&records);
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["dept", "sales", "hired", "remote"]);
    assert_eq!(fields[0].field_type, FieldType::String);
    assert_eq!(fields[1].field_type, FieldType::Number);
    assert_eq!(fields[2].field_type, FieldType::Date);
    assert_eq!(fields[3].field_type, FieldType::Boolean);
    assert_eq!(fields[3].label, "Remote");
}

#[test]
fn type_comes_from_first_non_empty_value() {
    let records = records_from_json(json!([
        {"score": null},
        {"score": ""},
        {"score": "12.5"},
        {"score": "abc"}
    ]));
    let fields = infer_schema(&records);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].field_type, FieldType::Number);
}

#[test]
fn never_populated_field_is_string() {
    let records = records_from_json(json!([{"note": null}]));
    assert_eq!(infer_schema(&records)[0].field_type, FieldType::String);
    assert!(infer_schema(&[]).is_empty());
}
