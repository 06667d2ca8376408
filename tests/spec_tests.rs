use asyncapi_readme::generator::render_readme;
use asyncapi_readme::spec::{build_readme_meta, load_document};
use std::fs;
use std::path::PathBuf;

fn write_spec(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_yaml_and_json_documents_render_identically() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = write_spec(
        &dir,
        "api.yaml",
        r#"
info:
  title: Parity
  version: 2.0.0
servers:
  main:
    protocol: kafka
    host: broker:9092
channels:
  events:
    operations:
      publish:
        action: send
        messages:
          - name: EventRaised
"#,
    );
    let json = write_spec(
        &dir,
        "api.json",
        r#"{
  "info": {"title": "Parity", "version": "2.0.0"},
  "servers": {"main": {"protocol": "kafka", "host": "broker:9092"}},
  "channels": {
    "events": {
      "operations": {
        "publish": {"action": "send", "messages": [{"name": "EventRaised"}]}
      }
    }
  }
}"#,
    );

    let from_yaml = render_readme(&build_readme_meta(&load_document(&yaml).unwrap()).unwrap())
        .unwrap()
        .content;
    let from_json = render_readme(&build_readme_meta(&load_document(&json).unwrap()).unwrap())
        .unwrap()
        .content;
    assert_eq!(from_yaml, from_json);
}

#[test]
fn test_json_map_order_survives_into_bullets() {
    let dir = tempfile::tempdir().unwrap();
    let json = write_spec(
        &dir,
        "ordered.json",
        r#"{
  "info": {"title": "Ordered"},
  "servers": {
    "zulu": {"protocol": "mqtt", "host": "z:1883"},
    "alpha": {"protocol": "kafka", "host": "a:9092"}
  }
}"#,
    );

    let meta = build_readme_meta(&load_document(&json).unwrap()).unwrap();
    let names: Vec<_> = meta.servers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["zulu", "alpha"]);
    assert_eq!(meta.protocols.iter().collect::<Vec<_>>(), ["mqtt", "kafka"]);
}

#[test]
fn test_extractor_does_not_mutate_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = write_spec(
        &dir,
        "api.yaml",
        "info:\n  title: Stable\nservers:\n  main:\n    protocol: Kafka\n",
    );

    let doc = load_document(&yaml).unwrap();
    let first = build_readme_meta(&doc).unwrap();
    let second = build_readme_meta(&doc).unwrap();
    assert_eq!(first, second);
    // protocol is lower-cased in the metadata, not in the document
    assert_eq!(doc.servers()[0].1.protocol(), Some("Kafka"));
    assert_eq!(first.servers[0].protocol.as_deref(), Some("kafka"));
}

#[test]
fn test_missing_title_error_propagates_through_load() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = write_spec(&dir, "untitled.yaml", "channels: {}\n");
    let doc = load_document(&yaml).unwrap();
    let err = build_readme_meta(&doc).unwrap_err();
    assert!(err.to_string().contains("info"));
}

#[test]
fn test_intermediate_model_serializes() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = write_spec(
        &dir,
        "api.yaml",
        "info:\n  title: Serial\nservers:\n  main:\n    protocol: kafka\n",
    );
    let meta = build_readme_meta(&load_document(&yaml).unwrap()).unwrap();

    let value = serde_json::to_value(&meta).unwrap();
    assert_eq!(value["info"]["title"], "Serial");
    assert_eq!(value["protocols"][0], "kafka");
}
