pub mod assembler;
pub mod card;
pub mod classifier;
pub mod header;
pub mod loader;
pub mod note;
pub mod patterns;
pub mod segmenter;

#[cfg(test)]
mod tests;

pub use card::CardParser;
pub use loader::WarodaiLoader;
pub use segmenter::Segmenter;

use warodai_config::parser::ParserConfig;
use warodai_core::{CardError, Dictionary, PatternError};

/// A card that was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDiagnostic {
    /// Position among the card blocks, front-matter excluded
    pub card_index: usize,
    pub error: CardError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub dictionary: Dictionary,
    pub diagnostics: Vec<CardDiagnostic>,
}

/// Segmenter and card parser built once from configuration
#[derive(Debug, Clone)]
pub struct DictionaryParser {
    segmenter: Segmenter,
    cards: CardParser,
}

impl DictionaryParser {
    pub fn new(config: &ParserConfig) -> Result<Self, PatternError> {
        Ok(Self {
            segmenter: Segmenter::from_config(config)?,
            cards: CardParser::new(config)?,
        })
    }

    pub fn card_parser(&self) -> &CardParser {
        &self.cards
    }

    /// Parse every card of `text`; failed cards are reported and skipped
    pub fn parse(&self, text: &str) -> ParseReport {
        let mut report = ParseReport::default();

        for (card_index, block) in self.segmenter.blocks(text).enumerate() {
            if block.trim().is_empty() {
                tracing::debug!(card_index, "Skipping blank block");
                continue;
            }

            match self.cards.parse_card(block) {
                Ok(entry) => report.dictionary.entries.push(entry),
                Err(error) => {
                    tracing::warn!(
                        card_index,
                        header = error.raw_header().unwrap_or_default(),
                        "Skipping card: {error}"
                    );
                    report.diagnostics.push(CardDiagnostic { card_index, error });
                }
            }
        }

        let meta = report.dictionary.metadata();
        tracing::info!(
            entries = meta.entry_count,
            rubrics = meta.rubric_count,
            examples = meta.example_count,
            common_notes = meta.common_note_count,
            skipped = report.diagnostics.len(),
            "Parsed dictionary"
        );

        report
    }
}
