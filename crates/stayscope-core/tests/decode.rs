use stayscope_core::decode::decode_request;
use stayscope_core::error::DecodeError;

#[test]
fn full_payload_decodes_every_field() {
    let req = decode_request(r#"{"id":"r1","location":"Istanbul","status":"Pending"}"#)
        .expect("valid payload");

    assert_eq!(req.id.as_deref(), Some("r1"));
    assert_eq!(req.location.as_deref(), Some("Istanbul"));
    assert_eq!(req.status.as_deref(), Some("Pending"));
}

#[test]
fn field_names_match_case_insensitively() {
    let req = decode_request(r#"{"ID":"r2","LOCATION":"Ankara","Status":"x"}"#)
        .expect("valid payload");

    assert_eq!(req.id.as_deref(), Some("r2"));
    assert_eq!(req.location.as_deref(), Some("Ankara"));
    assert_eq!(req.status.as_deref(), Some("x"));
}

#[test]
fn optional_fields_may_be_absent() {
    let req = decode_request(r#"{"location":"Izmir"}"#).expect("valid payload");

    assert_eq!(req.id, None);
    assert_eq!(req.location.as_deref(), Some("Izmir"));
    assert_eq!(req.status, None);
}

#[test]
fn empty_object_decodes_to_empty_request() {
    let req = decode_request("{}").expect("valid payload");

    assert_eq!(req.id, None);
    assert_eq!(req.location, None);
}

#[test]
fn unknown_fields_are_ignored() {
    let req = decode_request(r#"{"location":"Bodrum","priority":"high","extra":42}"#)
        .expect("valid payload");

    assert_eq!(req.location.as_deref(), Some("Bodrum"));
}

#[test]
fn null_field_values_decode_as_absent() {
    let req = decode_request(r#"{"id":null,"location":"Bursa"}"#).expect("valid payload");

    assert_eq!(req.id, None);
    assert_eq!(req.location.as_deref(), Some("Bursa"));
}

#[test]
fn non_json_payload_fails() {
    assert!(matches!(
        decode_request("not json"),
        Err(DecodeError::Json(_))
    ));
}

#[test]
fn empty_payload_fails() {
    assert!(decode_request("").is_err());
}

#[test]
fn non_object_json_fails() {
    assert!(matches!(
        decode_request(r#"["a","b"]"#),
        Err(DecodeError::NotAnObject)
    ));
    assert!(matches!(
        decode_request(r#""just a string""#),
        Err(DecodeError::NotAnObject)
    ));
}
