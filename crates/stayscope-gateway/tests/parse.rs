use stayscope_gateway::error::GatewayError;
use stayscope_gateway::types::{parse_contacts, parse_hotels};

#[test]
fn hotels_response_parses_to_record_list() {
    let body = r#"{"data":{"hotelsByLocation":[{"id":"h1"},{"id":"h2"}]}}"#;
    let hotels = parse_hotels(body).expect("well-formed response");

    assert_eq!(hotels.len(), 2);
    assert_eq!(hotels[0].id.as_deref(), Some("h1"));
}

#[test]
fn contacts_response_parses_type_tag() {
    let body = r#"{"data":{"contactsByLocation":[
        {"id":"c1","type":"PHONE"},
        {"id":"c2","type":"EMAIL"},
        {"id":"c3"}
    ]}}"#;
    let contacts = parse_contacts(body).expect("well-formed response");

    assert_eq!(contacts.len(), 3);
    assert_eq!(contacts[0].contact_type.as_deref(), Some("PHONE"));
    assert_eq!(contacts[2].contact_type, None);
}

#[test]
fn absent_result_list_is_empty_not_an_error() {
    let hotels = parse_hotels(r#"{"data":{}}"#).expect("empty data is fine");
    assert!(hotels.is_empty());

    let hotels = parse_hotels(r#"{"data":{"hotelsByLocation":null}}"#).expect("null list is fine");
    assert!(hotels.is_empty());

    let contacts = parse_contacts(r#"{"data":{}}"#).expect("empty data is fine");
    assert!(contacts.is_empty());
}

#[test]
fn missing_data_key_is_a_failure() {
    assert!(matches!(
        parse_hotels(r#"{"errors":[{"message":"boom"}]}"#),
        Err(GatewayError::MissingData)
    ));
    assert!(matches!(
        parse_contacts(r#"{"data":null}"#),
        Err(GatewayError::MissingData)
    ));
}

#[test]
fn undecodable_body_is_a_failure() {
    assert!(matches!(parse_hotels("<html>"), Err(GatewayError::Json(_))));
}

#[test]
fn entries_without_ids_still_count_as_entries() {
    let hotels = parse_hotels(r#"{"data":{"hotelsByLocation":[{},{"id":null},{"id":"h3"}]}}"#)
        .expect("nullable ids are fine");

    assert_eq!(hotels.len(), 3);
}
