//! Promotion of an unnumbered leading translation to a card-level note.

use warodai_core::{Section, StructuralInvariantError};

use crate::assembler::{AssembledCard, CardObservations};

/// Whether the first rubric of the card is a common note rather than a sense.
///
/// Either several sections without any numbered rubric, or one implicit
/// section holding several rubrics where numbering was seen but no section
/// marker was. An unnumbered line ahead of `N.` senses counts as the second
/// case, since the period numerals split it into its own section.
pub fn has_common_note(sections: &[Section], observations: CardObservations) -> bool {
    let many_rubrics = !observations.sections_exist
        && observations.numbered_rubrics_exist
        && sections.len() == 1
        && sections[0].rubrics.len() > 1;

    let intro_before_periods = !observations.sections_exist
        && observations.period_sections_exist
        && observations.leading_rubric_unnumbered
        && sections.len() > 1;

    (sections.len() > 1 && !observations.numbered_rubrics_exist)
        || many_rubrics
        || intro_before_periods
}

/// Split the common note off an assembled card.
///
/// A leading section emptied by the extraction is dropped when other sections
/// remain, so the result still holds at least one section.
pub fn extract_common_note(
    card: AssembledCard,
    id: &str,
) -> Result<(Vec<Section>, Option<String>), StructuralInvariantError> {
    let AssembledCard {
        mut sections,
        observations,
    } = card;

    if !has_common_note(&sections, observations) {
        return Ok((sections, None));
    }

    let first = sections
        .first_mut()
        .filter(|section| !section.rubrics.is_empty())
        .ok_or_else(|| StructuralInvariantError::EmptyLeadingSection { id: id.to_string() })?;
    let note = first.rubrics.remove(0).translation;
    let emptied = first.rubrics.is_empty();

    if emptied && sections.len() > 1 {
        sections.remove(0);
    }

    Ok((sections, Some(note)))
}
