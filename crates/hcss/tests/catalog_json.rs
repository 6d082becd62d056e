//! Tests for reading style records from catalog JSON.

use hcss::serialize::serialize;
use hcss::types::{Property, StyleRecord, StyleValue};

#[test]
fn test_record_from_json_object() {
    let record: StyleRecord = serde_json::from_str(
        r#"{
            "boxShadow": "rgba(0, 0, 0, 0.24) 0px 3px 8px",
            "borderRadius": "12px",
            "opacity": 1,
            "color": null,
            "&:hover": { "boxShadow": "rgba(0, 0, 0, 0.35) 0px 5px 15px" }
        }"#,
    )
    .unwrap();

    assert_eq!(record.len(), 5);
    assert_eq!(record.get(&Property::Color.into()), Some(&StyleValue::Unset));
    assert_eq!(
        serialize(&record),
        "box-shadow: rgba(0, 0, 0, 0.24) 0px 3px 8px; border-radius: 12px; opacity: 1; \
         :hover { box-shadow: rgba(0, 0, 0, 0.35) 0px 5px 15px; }"
    );
}

#[test]
fn test_object_under_plain_key_is_ignored() {
    let record: StyleRecord =
        serde_json::from_str(r#"{ "border": { "width": 1 }, "color": "red" }"#).unwrap();

    assert_eq!(record.len(), 1);
    assert_eq!(record.text(&Property::Color), Some("red"));
}

#[test]
fn test_record_json_round_trip() {
    let mut record = StyleRecord::new();
    record.insert(Property::Background, "#fff");
    record.insert(Property::Opacity, 0.5);
    record.insert_nested(":hover", [(Property::Opacity, 1)].into_iter().collect());

    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(
        json,
        r##"{"background":"#fff","opacity":0.5,"&:hover":{"opacity":1.0}}"##
    );
    let back: StyleRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
