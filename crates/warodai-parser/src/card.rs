use warodai_config::OrphanExamplePolicy;
use warodai_config::parser::ParserConfig;
use warodai_core::{
    CardError, Entry, LinePreprocessor, PatternError, Preprocessor, StructuralInvariantError,
};

use crate::assembler::CardAccumulator;
use crate::classifier::classify;
use crate::header::{TokenSplitter, parse_header};
use crate::note::extract_common_note;
use crate::patterns::CardPatterns;

/// Parses one card block into an [`Entry`]
#[derive(Debug, Clone)]
pub struct CardParser {
    patterns: CardPatterns,
    splitter: TokenSplitter,
    preprocessor: LinePreprocessor,
    orphan_examples: OrphanExamplePolicy,
}

impl CardParser {
    pub fn new(config: &ParserConfig) -> Result<Self, PatternError> {
        Ok(Self {
            patterns: CardPatterns::from_config(config)?,
            splitter: TokenSplitter::from_config(config),
            preprocessor: LinePreprocessor::new(&config.trailing_punctuation),
            orphan_examples: config.orphan_examples,
        })
    }

    pub fn splitter(&self) -> &TokenSplitter {
        &self.splitter
    }

    /// The first non-blank line is the header, everything after it the body
    pub fn parse_card(&self, block: &str) -> Result<Entry, CardError> {
        let mut lines = block.lines().filter(|line| !line.trim().is_empty());
        let header_line = lines.next().ok_or(CardError::EmptyCard)?;
        let header = parse_header(header_line, &self.patterns.header, &self.splitter)?;

        let structure_error = |source: StructuralInvariantError| CardError::Structure {
            header: header_line.to_string(),
            source,
        };

        let assembled = lines
            .map(|line| self.preprocessor.process(line))
            .filter_map(|line| classify(line, &self.patterns))
            .try_fold(CardAccumulator::new(), |acc, line| {
                acc.feed(line, self.orphan_examples)
            })
            .map_err(structure_error)?
            .finish();

        let (sections, common_note) =
            extract_common_note(assembled, &header.id).map_err(structure_error)?;

        tracing::debug!(
            id = %header.id,
            sections = sections.len(),
            common_note = common_note.is_some(),
            "Parsed card"
        );

        Ok(Entry {
            header,
            sections,
            common_note,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use warodai_core::{Example, HeaderFault, Rubric, Section};

    fn parser() -> CardParser {
        CardParser::new(&ParserConfig::default()).unwrap()
    }

    #[test]
    fn test_minimal_card() {
        let entry = parser().parse_card("ねこ【猫】(нэко)〔002-10-05〕\nкошка").unwrap();

        assert_eq!(entry.header.id, "002-10-05");
        assert_eq!(
            entry.sections,
            vec![Section {
                rubrics: vec![Rubric::new("кошка")]
            }]
        );
        assert_eq!(entry.common_note, None);
    }

    #[test]
    fn test_header_only_card_has_empty_section() {
        let entry = parser().parse_card("ねこ【猫】(нэко)〔002-10-05〕").unwrap();

        assert_eq!(entry.sections, vec![Section::default()]);
    }

    #[test]
    fn test_trailing_separators_trimmed_from_body() {
        let entry = parser()
            .parse_card("ねこ【猫】(нэко)〔002-10-05〕\nкошка;\n猫をかぶる прикидываться тихоней.")
            .unwrap();

        let rubric = &entry.sections[0].rubrics[0];
        assert_eq!(rubric.translation, "кошка");
        assert_eq!(
            rubric.examples,
            vec![Example::from("猫をかぶる прикидываться тихоней")]
        );
    }

    #[test]
    fn test_leading_blank_lines_before_header() {
        let entry = parser().parse_card("\n  \nねこ(нэко)〔1〕\nкошка").unwrap();

        assert_eq!(entry.header.kana, vec!["ねこ".to_string()]);
    }

    #[test]
    fn test_bad_header() {
        let err = parser().parse_card("not a header\nкошка").unwrap_err();

        match err {
            CardError::Header(e) => {
                assert_eq!(e.line, "not a header");
                assert_eq!(e.reason, HeaderFault::NoMatch);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_block() {
        assert_eq!(parser().parse_card(" \n\n").unwrap_err(), CardError::EmptyCard);
    }

    #[test]
    fn test_rejected_orphan_example_names_header() {
        let config = ParserConfig {
            orphan_examples: OrphanExamplePolicy::Reject,
            ..ParserConfig::default()
        };
        let parser = CardParser::new(&config).unwrap();

        let err = parser.parse_card("ねこ(нэко)〔1〕\n猫舌\nкошка").unwrap_err();
        assert_eq!(
            err,
            CardError::Structure {
                header: "ねこ(нэко)〔1〕".into(),
                source: StructuralInvariantError::OrphanExample {
                    line: "猫舌".into()
                },
            }
        );
    }
}
