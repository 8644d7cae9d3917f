use regex::Regex;
use warodai_config::parser::ParserConfig;
use warodai_core::{Header, HeaderFault, HeaderParseError};

/// Splits a reading/spelling list into trimmed, non-empty tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSplitter {
    separators: Vec<char>,
    split_on_whitespace: bool,
}

impl TokenSplitter {
    pub fn new(separators: &str, split_on_whitespace: bool) -> Self {
        Self {
            separators: separators.chars().collect(),
            split_on_whitespace,
        }
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(&config.token_separators, config.split_on_whitespace)
    }

    fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c) || (self.split_on_whitespace && c.is_whitespace())
    }

    pub fn split(&self, list: &str) -> Vec<String> {
        list.split(|c| self.is_separator(c))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Decompose a card header line.
///
/// `pattern` must expose the named groups `kana`, `transcription` and `id`;
/// `kanji` and `corpus` are optional.
pub fn parse_header(
    line: &str,
    pattern: &Regex,
    splitter: &TokenSplitter,
) -> Result<Header, HeaderParseError> {
    let fail = |reason| HeaderParseError {
        line: line.to_string(),
        reason,
    };

    let caps = pattern
        .captures(line.trim_end())
        .ok_or_else(|| fail(HeaderFault::NoMatch))?;
    let group = |name| caps.name(name).map(|m| m.as_str().trim());

    let kana = splitter.split(group("kana").unwrap_or_default());
    if kana.is_empty() {
        return Err(fail(HeaderFault::EmptyField("kana")));
    }

    let transcription = splitter.split(group("transcription").unwrap_or_default());
    if transcription.is_empty() {
        return Err(fail(HeaderFault::EmptyField("transcription")));
    }

    let id = group("id").unwrap_or_default();
    if id.is_empty() {
        return Err(fail(HeaderFault::EmptyField("id")));
    }

    let kanji = group("kanji")
        .map(|list| splitter.split(list))
        .filter(|tokens| !tokens.is_empty());
    let corpus = group("corpus")
        .filter(|code| !code.is_empty())
        .map(str::to_string);

    Ok(Header {
        kana,
        kanji,
        transcription,
        corpus,
        id: id.to_string(),
    })
}
