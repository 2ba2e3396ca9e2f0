use crate::engine::types::FieldType;
use crate::test_helpers::factories::DatasetFactory;
use crate::test_helpers::factory::Factory;

#[test]
fn test_dataset_factory_infers_schema() {
    let dataset = DatasetFactory::sales_example().create();
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.field("sales").unwrap().field_type, FieldType::Number);
    assert_eq!(dataset.field("dept").unwrap().label, "Dept");
}

#[test]
fn test_dataset_factory_explicit_fields() {
    let dataset = Factory::dataset()
        .with_record(Factory::record().create())
        .with_fields(Vec::new())
        .create();
    assert_eq!(dataset.len(), 1);
    assert!(dataset.fields.is_empty());
}
