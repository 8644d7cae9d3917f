use std::env;

use serde::{Deserialize, Serialize};

fn default_header_pattern() -> String {
    r"^(?P<kana>[\w,、・ ]+)(?:【(?P<kanji>.+)】)?\((?P<transcription>.+)\)(?: \[(?P<corpus>.+)\])?〔(?P<id>.+)〕$"
        .to_string()
}

fn default_section_marker_pattern() -> String {
    r"^\d$".to_string()
}

fn default_rubric_number_pattern() -> String {
    r"^(?P<number>\d+)(?P<style>[.)]) (?P<text>.+)$".to_string()
}

fn default_example_pattern() -> String {
    // kana, CJK ext A, CJK unified, compatibility ideographs, halfwidth katakana, 々 〆
    r"^[\x{3040}-\x{30FF}\x{3400}-\x{4DBF}\x{4E00}-\x{9FFF}\x{F900}-\x{FAFF}\x{FF66}-\x{FF9F}\x{3005}\x{3006}]"
        .to_string()
}

fn default_card_separator() -> String {
    r"\r?\n\r?\n".to_string()
}

fn default_skip_leading_blocks() -> usize {
    1
}

fn default_token_separators() -> String {
    ",、・".to_string()
}

fn default_split_on_whitespace() -> bool {
    true
}

fn default_trailing_punctuation() -> String {
    ";,. ".to_string()
}

/// What to do with an example line that shows up before any rubric
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrphanExamplePolicy {
    /// Attach it to an implicit rubric with an empty translation
    #[default]
    Placeholder,
    /// Skip the whole card
    Reject,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ParserConfig {
    /// Whole header line; named groups `kana`, `kanji`, `transcription`, `corpus`, `id`
    #[serde(default = "default_header_pattern")]
    pub header_pattern: String,
    #[serde(default = "default_section_marker_pattern")]
    pub section_marker_pattern: String,
    /// Leading rubric numeral; named groups `style` (`.` or `)`) and `text`
    #[serde(default = "default_rubric_number_pattern")]
    pub rubric_number_pattern: String,
    #[serde(default = "default_example_pattern")]
    pub example_pattern: String,
    #[serde(default = "default_card_separator")]
    pub card_separator: String,
    /// Front-matter blocks dropped before the first card
    #[serde(default = "default_skip_leading_blocks")]
    pub skip_leading_blocks: usize,
    /// Characters splitting kana/kanji/transcription lists
    #[serde(default = "default_token_separators")]
    pub token_separators: String,
    #[serde(default = "default_split_on_whitespace")]
    pub split_on_whitespace: bool,
    #[serde(default = "default_trailing_punctuation")]
    pub trailing_punctuation: String,
    #[serde(default)]
    pub orphan_examples: OrphanExamplePolicy,
}

impl ParserConfig {
    pub fn apply_env_overrides(&mut self) {
        if let Some(skip) = env::var("WARODAI_SKIP_LEADING_BLOCKS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.skip_leading_blocks = skip;
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            header_pattern: default_header_pattern(),
            section_marker_pattern: default_section_marker_pattern(),
            rubric_number_pattern: default_rubric_number_pattern(),
            example_pattern: default_example_pattern(),
            card_separator: default_card_separator(),
            skip_leading_blocks: default_skip_leading_blocks(),
            token_separators: default_token_separators(),
            split_on_whitespace: default_split_on_whitespace(),
            trailing_punctuation: default_trailing_punctuation(),
            orphan_examples: OrphanExamplePolicy::default(),
        }
    }
}
