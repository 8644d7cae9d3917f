use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use warodai_config::Config;
use warodai_core::Dictionary;

use crate::convert;
use crate::io::write_json;

const SOURCE: &str = "\
license\n\n\
ねこ【猫】(нэко)〔002-10-05〕\n\
1. домашнее животное\n\
2. перен. хитрец\n\n\
broken header\n\
кошка\n\n\
あい【愛】(ай)〔001-01-01〕\n\
общее пояснение\n\
1) любовь\n\
2) привязанность";

fn write_utf16le(path: &Path, text: &str) {
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
    fs::write(path, bytes).unwrap();
}

#[test]
fn test_convert_writes_json_and_reports_skips() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("warodai.txt");
    let output = dir.path().join("warodai.json");
    write_utf16le(&input, SOURCE);

    let report = convert(&input, Some(&output), &Config::default()).unwrap();
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.dictionary.entry_count(), 2);

    let json = fs::read_to_string(&output).unwrap();
    assert!(json.contains("\"common_note\": \"общее пояснение\""));
    assert!(json.contains("\n  \"entries\": ["));

    let back: Dictionary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report.dictionary);
}

#[test]
fn test_convert_missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.txt");

    let err = convert(&input, None, &Config::default()).unwrap_err();
    assert!(format!("{err:#}").contains("File not found"));
}

#[test]
fn test_convert_rejects_bad_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("warodai.txt");
    write_utf16le(&input, SOURCE);

    let mut config = Config::default();
    config.parser.header_pattern = "(".into();

    let err = convert(&input, None, &config).unwrap_err();
    assert!(format!("{err:#}").contains("invalid header pattern"));
}

#[test]
fn test_compact_and_indent_output() {
    let dict = Dictionary::default();
    let mut config = Config::default().output;

    let mut buf = Vec::new();
    write_json(&dict, &config, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "{\n  \"entries\": []\n}\n");

    config.pretty = false;
    let mut buf = Vec::new();
    write_json(&dict, &config, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "{\"entries\":[]}\n");
}

#[test]
fn test_non_ascii_is_literal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("warodai.txt");
    write_utf16le(&input, SOURCE);

    let mut config = Config::default();
    config.output.indent = 4;
    let report = convert(&input, Some(&dir.path().join("out.json")), &config).unwrap();

    let mut buf = Vec::new();
    write_json(&report.dictionary, &config.output, &mut buf).unwrap();
    let json = String::from_utf8(buf).unwrap();
    assert!(json.contains("\"猫\""));
    assert!(!json.contains("\\u"));
    assert!(json.contains("\n    \"entries\""));
}
