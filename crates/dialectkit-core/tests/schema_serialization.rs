use dialectkit_core::{Column, Index, IndexKind, SqlType, SqlTypeName};

#[test]
fn serializes_index_deterministically() {
    let index = Index::new(
        "email",
        IndexKind::Unique,
        vec!["email".to_string(), "phone".to_string()],
    );

    let json = serde_json::to_string_pretty(&index).expect("serialize index");
    let expected = r#"{
  "name": "email",
  "kind": "unique",
  "cols": [
    "email",
    "phone"
  ]
}"#;
    assert_eq!(json, expected);
}

#[test]
fn serializes_generic_type_names_in_uppercase() {
    let column = Column::new("created", SqlType::new(SqlTypeName::TimeStampz));
    let value = serde_json::to_value(&column).expect("serialize column");
    assert_eq!(value["sql_type"]["name"], "TIMESTAMPZ");
    assert_eq!(value["nullable"], true);

    let back: Column = serde_json::from_value(value).expect("deserialize column");
    assert_eq!(back, column);
}
