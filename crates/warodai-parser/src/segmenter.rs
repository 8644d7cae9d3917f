use std::iter::Skip;

use regex::Regex;
use warodai_config::parser::ParserConfig;
use warodai_core::PatternError;

use crate::patterns::compile;

/// Splits source text into raw card blocks
#[derive(Debug, Clone)]
pub struct Segmenter {
    separator: Regex,
    skip_leading: usize,
}

impl Segmenter {
    pub fn from_config(config: &ParserConfig) -> Result<Self, PatternError> {
        Ok(Self {
            separator: compile("card separator", &config.card_separator)?,
            skip_leading: config.skip_leading_blocks,
        })
    }

    /// Card blocks of `text`, front-matter already dropped.
    ///
    /// The iterator is lazy and `Clone`, so it can be restarted at any point.
    pub fn blocks<'a>(&'a self, text: &'a str) -> Skip<CardBlocks<'a>> {
        CardBlocks::new(text, &self.separator).skip(self.skip_leading)
    }
}

#[derive(Debug, Clone)]
pub struct CardBlocks<'a> {
    text: &'a str,
    separator: &'a Regex,
    position: usize,
    finished: bool,
}

impl<'a> CardBlocks<'a> {
    pub fn new(text: &'a str, separator: &'a Regex) -> Self {
        Self {
            text,
            separator,
            position: 0,
            finished: false,
        }
    }
}

impl<'a> Iterator for CardBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.finished {
            return None;
        }

        match self.separator.find_at(self.text, self.position) {
            // an empty separator match would never advance
            Some(m) if !m.is_empty() => {
                let block = &self.text[self.position..m.start()];
                self.position = m.end();
                Some(block)
            }
            _ => {
                self.finished = true;
                Some(&self.text[self.position..])
            }
        }
    }
}
