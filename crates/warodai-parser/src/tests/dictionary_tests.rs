use pretty_assertions::assert_eq;
use warodai_config::parser::ParserConfig;
use warodai_core::{CardError, Dictionary, HeaderFault};

use crate::DictionaryParser;

const SOURCE: &str = "\
Warodai license text
распространяется по лицензии CC BY-SA

ああ(а:)〔000-00-01〕
межд. ах!, ох!

あい【愛】(ай) [яп.]〔001-01-01〕
общее пояснение
1) любовь
愛の告白 признание в любви
2) привязанность

this header is broken
1) потерянный смысл

ねこ【猫】(нэко)〔002-10-05〕
1. домашнее животное
猫をかぶる прикидываться тихоней
2. перен. хитрец";

fn parser() -> DictionaryParser {
    DictionaryParser::new(&ParserConfig::default()).unwrap()
}

#[test]
fn test_entries_in_source_order() {
    let report = parser().parse(SOURCE);

    let ids: Vec<&str> = report
        .dictionary
        .entries
        .iter()
        .map(|e| e.header.id.as_str())
        .collect();
    assert_eq!(ids, vec!["000-00-01", "001-01-01", "002-10-05"]);
}

#[test]
fn test_bad_header_skips_only_that_card() {
    let report = parser().parse(SOURCE);

    assert_eq!(report.diagnostics.len(), 1);
    let diagnostic = &report.diagnostics[0];
    assert_eq!(diagnostic.card_index, 2);
    match &diagnostic.error {
        CardError::Header(e) => {
            assert_eq!(e.line, "this header is broken");
            assert_eq!(e.reason, HeaderFault::NoMatch);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let neko = report.dictionary.get_by_id("002-10-05").unwrap();
    assert_eq!(neko.sections.len(), 2);
}

#[test]
fn test_parsed_entry_shapes() {
    let dict = parser().parse(SOURCE).dictionary;

    let aa = dict.get_by_id("000-00-01").unwrap();
    assert_eq!(aa.header.kanji, None);
    assert_eq!(aa.sections[0].rubrics[0].translation, "межд. ах!, ох!");

    let ai = &dict.lookup_exact("愛")[0];
    assert_eq!(ai.header.corpus.as_deref(), Some("яп."));
    assert_eq!(ai.common_note.as_deref(), Some("общее пояснение"));
    assert_eq!(ai.sections[0].rubrics.len(), 2);
    assert_eq!(ai.sections[0].rubrics[0].examples.len(), 1);
}

#[test]
fn test_blank_and_front_matter_only_sources() {
    assert!(parser().parse("").dictionary.is_empty());
    assert!(parser().parse("license only").dictionary.is_empty());

    let report = parser().parse("license\n\n\n\nねこ(нэко)〔1〕\nкошка\n\n");
    assert_eq!(report.dictionary.entry_count(), 1);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_json_round_trip() {
    let dict = parser().parse(SOURCE).dictionary;

    let json = serde_json::to_string_pretty(&dict).unwrap();
    assert!(json.contains("\"ねこ\""));
    assert!(json.contains("\"kanji\": null"));

    let back: Dictionary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dict);
}

#[test]
fn test_header_tokens_resplit_identically() {
    let parser = parser();
    let splitter = parser.card_parser().splitter();
    let dict = parser.parse(SOURCE).dictionary;

    for entry in &dict.entries {
        let header = &entry.header;
        assert_eq!(splitter.split(&header.kana.join(", ")), header.kana);
        assert_eq!(
            splitter.split(&header.transcription.join(", ")),
            header.transcription
        );
        if let Some(kanji) = &header.kanji {
            assert_eq!(&splitter.split(&kanji.join("・")), kanji);
        }
    }
}

#[test]
fn test_reparsing_is_deterministic() {
    let parser = parser();

    assert_eq!(parser.parse(SOURCE), parser.parse(SOURCE));
}
