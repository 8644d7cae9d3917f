use std::path::PathBuf;

/// Header line of a card that could not be decomposed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed header ({reason}): {line}")]
pub struct HeaderParseError {
    /// Offending line, verbatim
    pub line: String,
    pub reason: HeaderFault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HeaderFault {
    #[error("pattern mismatch")]
    NoMatch,

    #[error("no {0} tokens")]
    EmptyField(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralInvariantError {
    #[error("example line before any rubric: {line}")]
    OrphanExample { line: String },

    #[error("common note requested but the first section of card {id} has no rubric")]
    EmptyLeadingSection { id: String },
}

/// Per-card failure; the card is skipped and the run continues
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error(transparent)]
    Header(#[from] HeaderParseError),

    #[error("{source} (header: {header})")]
    Structure {
        header: String,
        #[source]
        source: StructuralInvariantError,
    },

    #[error("card block has no header line")]
    EmptyCard,
}

impl CardError {
    /// Raw header line of the failed card, if it had one
    pub fn raw_header(&self) -> Option<&str> {
        match self {
            CardError::Header(e) => Some(&e.line),
            CardError::Structure { header, .. } => Some(header),
            CardError::EmptyCard => None,
        }
    }
}

/// A configured pattern failed to compile
#[derive(Debug, thiserror::Error)]
#[error("invalid {name} pattern")]
pub struct PatternError {
    pub name: &'static str,
    #[source]
    pub source: regex::Error,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("Malformed {encoding} input")]
    Malformed { encoding: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
