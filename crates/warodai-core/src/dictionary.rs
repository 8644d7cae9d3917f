use serde::{Deserialize, Serialize};

/// Structured header line of one card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Phonetic readings, never empty
    pub kana: Vec<String>,
    /// Logographic spellings; `None` when the word has no kanji form
    pub kanji: Option<Vec<String>>,
    /// Romanized readings, never empty
    pub transcription: Vec<String>,
    /// Source corpus code, e.g. `"яп."`
    pub corpus: Option<String>,
    pub id: String,
}

/// Idiom or usage example tied to one rubric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Example(pub String);

impl From<&str> for Example {
    fn from(line: &str) -> Self {
        Self(line.to_string())
    }
}

/// One numbered sense/translation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rubric {
    pub translation: String,
    pub examples: Vec<Example>,
}

impl Rubric {
    pub fn new(translation: impl Into<String>) -> Self {
        Self {
            translation: translation.into(),
            examples: Vec::new(),
        }
    }
}

/// Group of rubrics delimited by a numeral line in the source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub rubrics: Vec<Rubric>,
}

/// One parsed card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub header: Header,
    pub sections: Vec<Section>,
    /// Unnumbered introduction preceding every rubric of the card
    pub common_note: Option<String>,
}

impl Entry {
    /// Main headword: first kanji spelling, falling back to the first reading
    pub fn headword(&self) -> &str {
        self.header
            .kanji
            .as_ref()
            .and_then(|kanji| kanji.first())
            .or_else(|| self.header.kana.first())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// All rubrics of all sections in source order
    pub fn rubrics(&self) -> impl Iterator<Item = &Rubric> {
        self.sections.iter().flat_map(|section| section.rubrics.iter())
    }
}

/// Parsed dictionary snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryMetadata {
    pub entry_count: usize,
    pub section_count: usize,
    pub rubric_count: usize,
    pub example_count: usize,
    pub common_note_count: usize,
}

impl Dictionary {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get entry by its card identifier
    pub fn get_by_id(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.header.id == id)
    }

    /// Entries whose kana or kanji list contains `term` exactly, in source order
    pub fn lookup_exact(&self, term: &str) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| {
                e.header.kana.iter().any(|k| k == term)
                    || e.header
                        .kanji
                        .as_ref()
                        .is_some_and(|kanji| kanji.iter().any(|k| k == term))
            })
            .collect()
    }

    pub fn metadata(&self) -> DictionaryMetadata {
        let mut meta = DictionaryMetadata {
            entry_count: self.entries.len(),
            section_count: 0,
            rubric_count: 0,
            example_count: 0,
            common_note_count: 0,
        };

        for entry in &self.entries {
            meta.section_count += entry.sections.len();
            if entry.common_note.is_some() {
                meta.common_note_count += 1;
            }
            for rubric in entry.rubrics() {
                meta.rubric_count += 1;
                meta.example_count += rubric.examples.len();
            }
        }

        meta
    }
}
