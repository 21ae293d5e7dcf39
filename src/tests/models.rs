use crate::api::models::*;
use crate::api::ApiError;
use serde_json::json;

fn record(id: i64, content: &str) -> DnsRecord {
    serde_json::from_value(json!({
        "record_id": id,
        "type": "TXT",
        "content": content,
        "domain": "example.com",
        "subdomain": "_acme-challenge"
    }))
    .unwrap()
}

fn priority_of(value: serde_json::Value) -> u64 {
    let record: DnsRecord = serde_json::from_value(json!({
        "record_id": 1,
        "content": "x",
        "priority": value
    }))
    .unwrap();
    record.priority
}

#[test]
fn test_priority_number_is_kept() {
    assert_eq!(priority_of(json!(5)), 5);
    assert_eq!(priority_of(json!(10)), 10);
}

#[test]
fn test_priority_string_decodes_to_zero() {
    assert_eq!(priority_of(json!("5")), 0);
    assert_eq!(priority_of(json!("")), 0);
    assert_eq!(priority_of(json!("high")), 0);
}

#[test]
fn test_priority_unrecognized_shapes_decode_to_zero() {
    assert_eq!(priority_of(json!(null)), 0);
    assert_eq!(priority_of(json!(-3)), 0);
    assert_eq!(priority_of(json!(2.5)), 0);
    assert_eq!(priority_of(json!(true)), 0);
}

#[test]
fn test_priority_absent_defaults_to_zero() {
    let record: DnsRecord =
        serde_json::from_str(r#"{"record_id": 7, "content": "abc"}"#).unwrap();
    assert_eq!(record.priority, 0);
    assert_eq!(record.fqdn, None);
}

#[test]
fn test_record_deserialization() {
    let record: DnsRecord = serde_json::from_value(json!({
        "record_id": 42,
        "type": "TXT",
        "content": "tok123",
        "domain": "example.com",
        "fqdn": "_acme-challenge.example.com",
        "priority": "",
        "ttl": 3600,
        "subdomain": "_acme-challenge"
    }))
    .unwrap();

    assert_eq!(record.id, 42);
    assert_eq!(record.record_type, "TXT");
    assert_eq!(record.content, "tok123");
    assert_eq!(record.domain, "example.com");
    assert_eq!(record.fqdn.as_deref(), Some("_acme-challenge.example.com"));
    assert_eq!(record.ttl, 3600);
    assert_eq!(record.subdomain, "_acme-challenge");
}

#[test]
fn test_filter_by_content_keeps_matches_in_order() {
    let records = vec![record(1, "abc"), record(2, "xyz"), record(3, "abc"), record(4, "def")];

    let filtered = filter_by_content(records, &["abc", "def"]);
    let ids: Vec<i64> = filtered.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[test]
fn test_filter_by_content_no_match_is_empty() {
    let records = vec![record(1, "abc"), record(2, "xyz")];
    assert!(filter_by_content(records, &["nope"]).is_empty());
    assert!(filter_by_content(Vec::new(), &["abc"]).is_empty());
}

#[test]
fn test_filter_by_content_is_exact() {
    let records = vec![record(1, "xyz "), record(2, "XYZ"), record(3, "xy")];
    assert!(filter_by_content(records, &["xyz"]).is_empty());
}

#[test]
fn test_status_discriminator() {
    assert_eq!(Status::from("error".to_string()), Status::Error);
    assert_eq!(Status::from("ok".to_string()), Status::Ok);
    assert_eq!(Status::from(String::new()), Status::Ok);
}

#[test]
fn test_error_envelope_surfaces_message() {
    let result = decode_response::<RecordList>(
        r#"{"success": "error", "error": "quota exceeded"}"#.to_string(),
    );

    match result {
        Err(ApiError::Provider { message }) => assert_eq!(message, "quota exceeded"),
        other => panic!("expected provider error, got {:?}", other),
    }
}

#[test]
fn test_error_envelope_with_null_records_is_provider_error() {
    let result = decode_response::<RecordList>(
        r#"{"success": "error", "error": "no_auth", "records": null}"#.to_string(),
    );

    match result {
        Err(ApiError::Provider { message }) => assert_eq!(message, "no_auth"),
        other => panic!("expected provider error, got {:?}", other),
    }
}

#[test]
fn test_error_envelope_payload_is_not_decoded() {
    let result = decode_response::<CreatedRecord>(
        r#"{"success": "error", "error": "no_auth", "record": "unexpected"}"#.to_string(),
    );
    assert!(matches!(result, Err(ApiError::Provider { .. })));
}

#[test]
fn test_null_records_on_success_is_empty() {
    let list = decode_response::<RecordList>(r#"{"success": "ok", "records": null}"#.to_string())
        .unwrap();
    assert!(list.records.is_empty());
}

#[test]
fn test_payload_mismatch_on_success_is_decode_error() {
    let body = r#"{"success": "ok", "records": "nope"}"#.to_string();

    match decode_response::<RecordList>(body.clone()) {
        Err(ApiError::Decode { body: reported, .. }) => assert_eq!(reported, body),
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[test]
fn test_list_envelope() {
    let body = json!({
        "domain": "example.com",
        "records": [
            {"record_id": 1, "type": "TXT", "content": "abc", "priority": "10"},
            {"record_id": 2, "type": "MX", "content": "mx.example.com", "priority": 10}
        ],
        "success": "ok"
    });

    let records = decode_response::<RecordList>(body.to_string()).unwrap().records;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].priority, 0);
    assert_eq!(records[1].priority, 10);
}

#[test]
fn test_delete_envelope_ignores_echoed_fields() {
    let body = json!({
        "domain": "example.com",
        "record_id": 2,
        "success": "ok"
    });

    assert!(decode_response::<Deleted>(body.to_string()).is_ok());
}
