//! Search corpus construction
//!
//! Normalizes an item's scattered text fields into the single lowercase
//! string that every downstream pattern table matches against. Absent fields
//! contribute an empty segment; the matching layer is tolerant of the
//! resulting extra whitespace, so no trimming happens here.

use crate::item::VisualItem;

/// Build the lowercase search corpus for an item.
///
/// Field order is fixed: slug, name, description, structural prompt, prompt
/// instruction, text zone, intent id. The order is part of the contract only
/// in that it is stable; matching itself is position-independent.
pub fn build_corpus(item: &VisualItem) -> String {
    let field = |value: &Option<String>| value.as_deref().unwrap_or("").to_string();

    [
        field(&item.slug),
        field(&item.name),
        field(&item.description),
        field(&item.structural_prompt),
        field(&item.prompt_instruction),
        field(&item.text_zone),
        field(&item.intent_id),
    ]
    .join(" ")
    .to_lowercase()
}
