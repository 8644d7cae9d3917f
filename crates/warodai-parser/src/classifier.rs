//! Lexical classification of card body lines.

use crate::patterns::CardPatterns;

/// Style of a leading rubric numeral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numbering {
    /// `1) text`
    Parenthesis,
    /// `1. text`, also opens a new section
    Period,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    SectionMarker,
    Example(&'a str),
    Rubric {
        text: &'a str,
        numbering: Option<Numbering>,
    },
}

/// Classify one right-trimmed body line; `None` for a blank line.
pub fn classify<'a>(line: &'a str, patterns: &CardPatterns) -> Option<LineKind<'a>> {
    if line.trim().is_empty() {
        return None;
    }

    if patterns.section_marker.is_match(line) {
        return Some(LineKind::SectionMarker);
    }

    if patterns.example.is_match(line) {
        return Some(LineKind::Example(line));
    }

    let kind = match patterns.rubric_number.captures(line) {
        Some(caps) => {
            let numbering = match caps.name("style").map(|m| m.as_str()) {
                Some(".") => Numbering::Period,
                _ => Numbering::Parenthesis,
            };
            LineKind::Rubric {
                text: caps.name("text").map_or(line, |m| m.as_str()),
                numbering: Some(numbering),
            }
        }
        None => LineKind::Rubric {
            text: line,
            numbering: None,
        },
    };

    Some(kind)
}
