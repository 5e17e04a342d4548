//! Pure counting over already-shaped query results.
//!
//! These functions are total and idempotent: empty input counts as zero,
//! never as an error. The error path belongs to the query call itself,
//! not to aggregation.

use stayscope_gateway::types::{ContactRecord, HotelRecord};

/// Channel tag marking a contact entry as a phone number. Matched
/// ASCII-case-insensitively.
const PHONE_TAG: &str = "phone";

pub fn hotel_count(hotels: &[HotelRecord]) -> u32 {
    hotels.len() as u32
}

/// Count contact entries tagged as phone numbers. Entries with an
/// absent type never match.
pub fn phone_number_count(contacts: &[ContactRecord]) -> u32 {
    contacts
        .iter()
        .filter(|contact| {
            contact
                .contact_type
                .as_deref()
                .is_some_and(|tag| tag.eq_ignore_ascii_case(PHONE_TAG))
        })
        .count() as u32
}
