use regex::Regex;
use warodai_config::parser::ParserConfig;
use warodai_core::PatternError;

/// Compiled line patterns of one dictionary source
#[derive(Debug, Clone)]
pub struct CardPatterns {
    pub header: Regex,
    pub section_marker: Regex,
    pub rubric_number: Regex,
    pub example: Regex,
}

impl CardPatterns {
    pub fn from_config(config: &ParserConfig) -> Result<Self, PatternError> {
        Ok(Self {
            header: compile("header", &config.header_pattern)?,
            section_marker: compile("section marker", &config.section_marker_pattern)?,
            rubric_number: compile("rubric number", &config.rubric_number_pattern)?,
            example: compile("example", &config.example_pattern)?,
        })
    }
}

pub(crate) fn compile(name: &'static str, pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError { name, source })
}
