//! Section/rubric/example tree assembly for one card body.

use warodai_config::OrphanExamplePolicy;
use warodai_core::{Example, Rubric, Section, StructuralInvariantError};

use crate::classifier::{LineKind, Numbering};

/// What the body walk saw, consumed by the common-note post-pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardObservations {
    pub numbered_rubrics_exist: bool,
    pub sections_exist: bool,
    /// A `N.` rubric opened a section
    pub period_sections_exist: bool,
    /// The first rubric line of the body carried no numeral
    pub leading_rubric_unnumbered: bool,
}

/// Output of the body walk, before common-note extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledCard {
    /// Never empty
    pub sections: Vec<Section>,
    pub observations: CardObservations,
}

/// Explicit state of the body walk.
///
/// The open rubric is the last element of `rubrics`, or the last rubric of
/// the last closed section once a marker has emptied `rubrics`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardAccumulator {
    rubrics: Vec<Rubric>,
    sections: Vec<Section>,
    rubric_line_seen: bool,
    observations: CardObservations,
}

impl CardAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one classified line
    pub fn feed(
        mut self,
        line: LineKind<'_>,
        orphans: OrphanExamplePolicy,
    ) -> Result<Self, StructuralInvariantError> {
        match line {
            LineKind::SectionMarker => {
                self.observations.sections_exist = true;
                self.close_section();
            }
            LineKind::Rubric { text, numbering } => {
                if !self.rubric_line_seen {
                    self.rubric_line_seen = true;
                    self.observations.leading_rubric_unnumbered = numbering.is_none();
                }
                if let Some(numbering) = numbering {
                    self.observations.numbered_rubrics_exist = true;
                    if numbering == Numbering::Period {
                        self.observations.period_sections_exist = true;
                        self.close_section();
                    }
                }
                self.rubrics.push(Rubric::new(text));
            }
            LineKind::Example(text) => {
                if let Some(rubric) = self.open_rubric() {
                    rubric.examples.push(Example::from(text));
                    return Ok(self);
                }

                match orphans {
                    OrphanExamplePolicy::Placeholder => {
                        tracing::debug!("Example before any rubric, opening placeholder: {text}");
                        let mut rubric = Rubric::default();
                        rubric.examples.push(Example::from(text));
                        self.rubrics.push(rubric);
                    }
                    OrphanExamplePolicy::Reject => {
                        return Err(StructuralInvariantError::OrphanExample {
                            line: text.to_string(),
                        });
                    }
                }
            }
        }

        Ok(self)
    }

    // Closed sections are never empty, so the last one ends with the previously opened rubric
    fn open_rubric(&mut self) -> Option<&mut Rubric> {
        if !self.rubrics.is_empty() {
            return self.rubrics.last_mut();
        }
        self.sections
            .last_mut()
            .and_then(|section| section.rubrics.last_mut())
    }

    /// Close the in-progress rubric list, if any, into a section
    fn close_section(&mut self) {
        if !self.rubrics.is_empty() {
            let rubrics = std::mem::take(&mut self.rubrics);
            self.sections.push(Section { rubrics });
        }
    }

    /// The last rubric list is closed unconditionally so a card always has a section
    pub fn finish(mut self) -> AssembledCard {
        let rubrics = std::mem::take(&mut self.rubrics);
        self.sections.push(Section { rubrics });

        AssembledCard {
            sections: self.sections,
            observations: self.observations,
        }
    }
}
