//! Round-trip parsing and serialization tests for vCard.
//!
//! These tests verify that valid cards survive serialize-then-parse without
//! losing structural information, and pin down the documented wire forms.

use vcardio_core::CodecConfig;

use super::fixtures::*;
use crate::rfc::validation::validate_card;
use crate::rfc::vcard::build::{encode_datetime, fold_line, serialize, serialize_with};
use crate::rfc::vcard::core::{Card, DateTime, Parameter, Property};
use crate::rfc::vcard::error::CardErrorKind;
use crate::rfc::vcard::json::{json_to_str_list, str_list_to_json};
use crate::rfc::vcard::parse::{ContentLines, parse_str};

/// Parse and validate a card, serialize it, then parse again and compare.
fn round_trip(input: &str) -> Result<Card, String> {
    let card1 = parse_str(input).map_err(|e| format!("First parse failed: {e}"))?;
    validate_card(&card1).map_err(|e| format!("Validation failed: {e}"))?;

    let serialized = serialize(&card1).map_err(|e| format!("Serialize failed: {e}"))?;

    let card2 =
        parse_str(&serialized).map_err(|e| format!("Second parse failed: {e}\n{serialized}"))?;

    if !card1.structurally_eq(&card2) {
        return Err(format!("Cards differ:\n{card1:?}\n{card2:?}"));
    }

    Ok(card1)
}

#[test]
fn round_trip_author_vcard() {
    let card = round_trip(VCARD_AUTHOR).expect("round trip should succeed");
    assert_eq!(card.birthday, Some(DateTime::date("--0203")));
    assert_eq!(card.get_properties("LANG").len(), 2);
    let tel = card.get_property("TEL").unwrap();
    assert_eq!(tel.values, vec!["tel:+1-418-656-9254", "ext=102"]);
    assert_eq!(tel.parameters[1], Parameter::new("TYPE", "work,voice"));
}

#[test]
fn round_trip_minimal_vcard() {
    round_trip(VCARD_MINIMAL).expect("round trip should succeed");
}

#[test]
fn round_trip_basic_vcard() {
    round_trip(VCARD_BASIC).expect("round trip should succeed");
}

#[test]
fn round_trip_grouped_properties() {
    let card = round_trip(VCARD_GROUPED).expect("round trip should succeed");
    assert_eq!(card.formatted_name(), Some("Jane Doe"));
    let adr = card.get_property("ADR").unwrap();
    assert_eq!(adr.group, "Work");
    assert_eq!(adr.values.len(), 7);
}

#[test]
fn round_trip_dates() {
    let card = round_trip(VCARD_DATES).expect("round trip should succeed");
    assert_eq!(card.birthday, Some(DateTime::text("circa 1800")));
    assert_eq!(
        card.anniversary,
        Some(DateTime::structured("19961022", "140000", true))
    );
}

#[test]
fn round_trip_dashed_times() {
    for (line, time) in [("BDAY:T-30", "--30"), ("BDAY:19850412T-3000", "--3000")] {
        let input = format!("BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\n{line}\r\nEND:VCARD\r\n");
        let card = round_trip(&input).expect("round trip should succeed");
        assert_eq!(card.birthday.as_ref().map(DateTime::time_value), Some(time));
    }
}

#[test]
fn date_property_outside_its_slot_fails_validation() {
    let mut card = Card::with_formatted_name("Jane");
    card.birthday = Some(DateTime::date("19850315"));
    card.add_property(Property::text("BDAY", "19860101"));
    let err = validate_card(&card).unwrap_err();
    assert_eq!(err.kind, CardErrorKind::InvalidCard);
}

#[test]
fn round_trip_group_card() {
    let card = round_trip(VCARD_GROUP).expect("round trip should succeed");
    assert_eq!(card.get_properties("MEMBER").len(), 2);
}

#[test]
fn round_trip_folded_vcard() {
    let card = round_trip(VCARD_FOLDED).expect("round trip should succeed");
    assert_eq!(card.formatted_name(), Some("Renée Dupont"));
    assert_eq!(
        card.get_property("NOTE").and_then(Property::first_value),
        Some("Cette note est assez longue pour être repliée sur plusieurs lignes physiques.")
    );
}

#[test]
fn round_trip_second_formatted_name() {
    let card = round_trip(VCARD_TWO_NAMES).expect("round trip should succeed");
    assert_eq!(card.formatted_name(), Some("Jane Doe"));
    assert_eq!(card.get_properties("FN").len(), 1);
}

#[test]
fn round_trip_built_card() {
    let mut card = Card::with_formatted_name("Built Card");
    card.add_property(Property::grouped_text("g", "EMAIL", "a@example.com"));
    card.add_property(Property::multi("ORG", ["Example", "R&D"]).with_param(Parameter::type_param("work")));
    card.add_property(Property::text("UID", "urn:uuid:1"));
    card.birthday = Some(DateTime::structured("", "1022", true));
    card.anniversary = Some(DateTime::text("sometime in June"));
    validate_card(&card).unwrap();

    let text = serialize(&card).unwrap();
    assert!(parse_str(&text).unwrap().structurally_eq(&card));
}

#[test]
fn round_trip_with_folding() {
    let mut card = Card::with_formatted_name("日本語の名前".repeat(8));
    card.add_property(Property::text("NOTE", "word ".repeat(60)));

    let config = CodecConfig {
        fold_output: true,
        fold_width: 30,
        ..CodecConfig::default()
    };
    let folded = serialize_with(&card, &config).unwrap();
    assert!(folded.split("\r\n").all(|line| line.len() <= 30));
    assert!(parse_str(&folded).unwrap().structurally_eq(&card));
}

#[test]
fn folding_is_inverted_by_unfolding() {
    let logical = "NOTE;LANGUAGE=en:Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod";
    for width in 2..=logical.len() + 1 {
        let physical = format!("{}\r\n", fold_line(logical, width));
        let mut lines = ContentLines::with_min_len(&physical, 0).unwrap();
        assert_eq!(
            lines.unfold_next().unwrap(),
            Some(format!("{logical}\r\n")),
            "width {width}"
        );
        assert_eq!(lines.unfold_next().unwrap(), None);
    }
}

#[test]
fn scenario_minimal_card() {
    let card = parse_str("BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane Doe\r\nEND:VCARD\r\n").unwrap();
    assert_eq!(card.fn_prop.as_ref().unwrap().values, vec!["Jane Doe"]);
    assert!(card.optional_properties.is_empty());
    assert!(validate_card(&card).is_ok());
}

#[test]
fn scenario_structured_birthday() {
    let card = parse_str("BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nBDAY:19850315\r\nEND:VCARD\r\n")
        .unwrap();
    let bday = card.birthday.unwrap();
    assert!(!bday.is_text());
    assert_eq!(bday.date_value(), "19850315");
    assert_eq!(bday.time_value(), "");
    assert!(!bday.is_utc());
    assert_eq!(encode_datetime(&bday).unwrap(), ":19850315");
}

#[test]
fn scenario_text_birthday() {
    let card = parse_str(
        "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nBDAY;VALUE=text:circa 1985\r\nEND:VCARD\r\n",
    )
    .unwrap();
    let bday = card.birthday.unwrap();
    assert!(bday.is_text());
    assert_eq!(bday.text_value(), "circa 1985");
    assert_eq!(encode_datetime(&bday).unwrap(), ";Value=Text:circa 1985");
}

#[test]
fn scenario_property_line() {
    let mut card = Card::with_formatted_name("Jane");
    card.add_property(Property::text("TEL", "555-1234"));
    assert!(serialize(&card).unwrap().contains("\r\nTEL:555-1234\r\n"));
}

#[test]
fn scenario_json_quote_escape() {
    let values = vec!["a\"b".to_string()];
    let json = str_list_to_json(&values);
    assert_eq!(json, "[\"a\\\"b\"]");
    assert_eq!(json_to_str_list(&json), Some(values));
}

#[test]
fn nineteen_byte_input_is_invalid_file() {
    let input = "BEGIN:VCARD\r\nEND:VC";
    assert_eq!(input.len(), 19);
    assert_eq!(parse_str(input).unwrap_err().kind, CardErrorKind::InvalidFile);

    let input = "BEGIN:VCARD\r\nEND:VCA";
    assert_eq!(input.len(), 20);
    assert_ne!(parse_str(input).unwrap_err().kind, CardErrorKind::InvalidFile);
}

#[test]
fn unterminated_parameter_is_malformed_property() {
    let err = parse_str("BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nTEL;TYPE=work\r\nEND:VCARD\r\n")
        .unwrap_err();
    assert_eq!(err.kind, CardErrorKind::InvalidProperty);
}

#[test]
fn cardinality_violations_fail_validation() {
    let cases = [
        ("N:Doe;Jane;;\r\n", CardErrorKind::InvalidProperty),
        ("UID:1\r\nUID:2\r\n", CardErrorKind::InvalidProperty),
        ("EMAIL:a;b\r\n", CardErrorKind::InvalidProperty),
        ("X-CUSTOM:value\r\n", CardErrorKind::InvalidProperty),
        ("VERSION:4.0\r\n", CardErrorKind::InvalidCard),
        ("MEMBER:urn:uuid:1\r\n", CardErrorKind::InvalidCard),
        ("BDAY:1985-\r\n", CardErrorKind::InvalidDateTime),
    ];

    for (body, expected) in cases {
        let input = format!("BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\n{body}END:VCARD\r\n");
        let err = parse_str(&input)
            .and_then(|card| validate_card(&card))
            .unwrap_err();
        assert_eq!(err.kind, expected, "{body:?}");
    }
}

#[test]
fn content_after_end_is_ignored() {
    let card = parse_str("BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nEND:VCARD\r\ngarbage\n").unwrap();
    assert_eq!(card.formatted_name(), Some("Jane"));
}
