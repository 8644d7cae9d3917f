pub mod dictionary;
pub mod error;
pub mod preprocess;

pub use dictionary::{Dictionary, DictionaryMetadata, Entry, Example, Header, Rubric, Section};
pub use error::{
    CardError, HeaderFault, HeaderParseError, LoadError, PatternError, StructuralInvariantError,
};
pub use preprocess::{LinePreprocessor, Preprocessor};
