use plugtrace_types::{FilterField, FilterOperator, FilterValue, SortDirection, TraceFilter};

const SAVED_FILTER: &str = r#"{
    "conditions": [
        {"field": "created_on", "operator": "between", "value": "2025-01-01", "value_to": "2025-01-02T12:30:00Z"},
        {"field": "correlation_id", "operator": "equals", "value": "00000000-0000-0000-0000-0000000000aa", "join": "or"},
        {"field": "depth", "operator": "greater_than", "value": "2"},
        {"field": "plugin_name", "operator": "contains", "value": "Foo", "enabled": false}
    ],
    "top": 50,
    "order_by": {"field": "created_on", "direction": "asc"}
}"#;

#[test]
fn test_saved_filter_document() {
    let filter: TraceFilter = serde_json::from_str(SAVED_FILTER).unwrap();

    assert_eq!(filter.conditions.len(), 4);
    assert_eq!(filter.enabled_conditions().count(), 3);
    assert_eq!(filter.top, Some(50));
    assert_eq!(
        filter.order_by.map(|o| o.direction),
        Some(SortDirection::Asc)
    );

    assert_eq!(
        filter.build_filter_expression().as_deref(),
        Some(
            "(createdon ge 2025-01-01T00:00:00.000Z and createdon le 2025-01-02T12:30:00.000Z) \
             or (correlationid eq 00000000-0000-0000-0000-0000000000aa) \
             and (depth gt 2)"
        )
    );
}

#[test]
fn test_text_operands_are_read_as_field_type() {
    let filter: TraceFilter = serde_json::from_str(SAVED_FILTER).unwrap();
    let depth = &filter.conditions[2];

    assert_eq!(depth.field, FilterField::Depth);
    assert_eq!(depth.operator, FilterOperator::GreaterThan);
    assert_eq!(depth.value, Some(FilterValue::Text("2".to_string())));
    assert_eq!(depth.build_expression().as_deref(), Some("depth gt 2"));
}

#[test]
fn test_empty_document_uses_defaults() {
    let filter: TraceFilter = serde_json::from_str("{}").unwrap();

    assert!(filter.conditions.is_empty());
    assert_eq!(filter.top, None);
    assert_eq!(filter.order_by, None);
    assert_eq!(filter.build_filter_expression(), None);
}

#[test]
fn test_text_fields_keep_date_and_guid_shaped_values() {
    let json = r#"{
        "conditions": [
            {"field": "exception_details", "operator": "contains", "value": "2025-01-15T12:00:00+02:00"},
            {"field": "plugin_name", "operator": "equals", "value": "6F9619FF-8B86-D011-B42D-00C04FC964FF"}
        ]
    }"#;
    let filter: TraceFilter = serde_json::from_str(json).unwrap();

    assert_eq!(
        filter.build_filter_expression().as_deref(),
        Some(
            "(contains(exceptiondetails, '2025-01-15T12:00:00+02:00')) \
             and (typename eq '6F9619FF-8B86-D011-B42D-00C04FC964FF')"
        )
    );
}

#[test]
fn test_date_field_still_reads_text_as_timestamp() {
    let toml = "[[conditions]]\nfield = \"created_on\"\noperator = \"greater_or_equal\"\nvalue = \"2025-01-15T12:00:00+02:00\"\n";
    let filter: TraceFilter = toml::from_str(toml).unwrap();

    assert_eq!(
        filter.build_filter_expression().as_deref(),
        Some("(createdon ge 2025-01-15T10:00:00.000Z)")
    );
}
