//! Tests for dataset parsing.

use std::fs;

use payload_model::{Dataset, PayloadError};

const WRAPPED: &str = r#"{
  "data": {
    "missions": [
      {
        "id": "aaaaaa11",
        "name": "Apollo",
        "payloads": [
          { "id": "p1", "payload_mass_kg": 10, "nationality": "US" },
          null
        ]
      },
      {
        "id": "bbbbbb22",
        "name": "Vostok",
        "payloads": [
          { "id": "p2", "payload_mass_kg": null, "nationality": "SU" }
        ]
      }
    ]
  }
}"#;

#[test]
fn parses_wrapped_document() {
    let dataset = Dataset::from_json_str(WRAPPED).expect("parse wrapped");
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.missions[0].name, "Apollo");
    assert_eq!(dataset.missions[0].payloads.len(), 2);
    assert!(dataset.missions[0].payloads[1].is_none());
    assert_eq!(dataset.missions[1].payloads[0].as_ref().unwrap().payload_mass_kg, None);
}

#[test]
fn parses_plain_document() {
    let dataset = Dataset::from_json_str(
        r#"{"missions":[{"id":"cccccc","name":"Gemini","payloads":[]}]}"#,
    )
    .expect("parse plain");
    assert_eq!(dataset.len(), 1);
    assert!(dataset.missions[0].payloads.is_empty());
}

#[test]
fn missing_payload_list_is_empty() {
    let dataset =
        Dataset::from_json_str(r#"{"missions":[{"id":"dddddd","name":"Mercury"}]}"#).unwrap();
    assert_eq!(dataset.missions[0].present_payloads().count(), 0);
}

#[test]
fn rejects_malformed_document() {
    let error = Dataset::from_json_str(r#"{"launches":[]}"#).unwrap_err();
    assert!(matches!(error, PayloadError::Json(_)));
    assert!(error.to_string().contains("missing field `missions`"));
}

#[test]
fn reads_dataset_from_file() {
    let mut path = std::env::temp_dir();
    path.push(format!("payload-model-dataset-{}.json", std::process::id()));
    fs::write(&path, WRAPPED).unwrap();

    let dataset = Dataset::from_path(&path).expect("read dataset");
    fs::remove_file(&path).unwrap();

    assert_eq!(dataset.missions[1].name, "Vostok");
}

#[test]
fn missing_file_is_an_io_error() {
    let error = Dataset::from_path(std::path::Path::new("/nonexistent/missions.json")).unwrap_err();
    assert!(matches!(error, PayloadError::Io(_)));
}

#[test]
fn bad_field_error_points_at_the_record() {
    let text = r#"{
  "data": {
    "missions": [
      {
        "id": "aaaaaa11",
        "name": "Apollo",
        "payloads": [{ "id": "p1", "payload_mass_kg": "heavy", "nationality": "US" }]
      }
    ]
  }
}"#;
    let error = Dataset::from_json_str(text).unwrap_err();
    assert!(matches!(error, PayloadError::Json(_)));
    let message = error.to_string();
    assert!(message.contains("\"heavy\""), "{message}");
    assert!(message.contains("line 7"), "{message}");
    assert!(!message.contains("untagged"), "{message}");
}
