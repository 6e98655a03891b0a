//! Repair-pass recovery through the public `parse` entry point.

use pretty_assertions::assert_eq;
use trilex::parse;

#[test]
fn test_trailing_comma_before_closing_brace() {
    let raw = "{\"modes\": {\"professional\": {\"definition\": \"d\",}}}";
    assert_eq!(parse(raw, "x").professional.definition, "d");
}

#[test]
fn test_trailing_comma_in_array() {
    let raw = r#"{"modes": {"professional": {"academicUsage": ["one", "two",]}}}"#;
    assert_eq!(parse(raw, "x").professional.academic_usage, vec!["one", "two"]);
}

#[test]
fn test_stray_control_character_in_string() {
    let raw = "{\"modes\": {\"professional\": {\"definition\": \"cle\u{0002}an\"}}}";
    assert_eq!(parse(raw, "x").professional.definition, "clean");
}

#[test]
fn test_literal_tabs_and_carriage_returns() {
    let raw = "{\r\n\t\"modes\": {\"professional\": {\"definition\": \"d\"}}\r\n}";
    assert_eq!(parse(raw, "x").professional.definition, "d");
}

#[test]
fn test_zero_width_and_bom_prefixes() {
    let raw = "\u{FEFF}\u{200B}{\"modes\": {\"professional\": {\"definition\": \"d\"}}}";
    assert_eq!(parse(raw, "x").professional.definition, "d");
}

#[test]
fn test_repaired_fenced_block() {
    let raw = "```json\n{\"modes\": {\"elementary\": {\"tips\": \"t\",}}}\n```";
    assert_eq!(parse(raw, "x").elementary.tips, "t");
}
