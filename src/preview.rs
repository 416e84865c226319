// Copyright 2025 Cowboy AI, LLC.

//! Preview descriptor assembly
//!
//! The one entry point external callers should depend on. Orchestrates the
//! corpus builder, the classification cascade, the variant selector, and the
//! label synthesizer into a single output record; the inner stages are
//! implementation detail.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classifier::classify;
use crate::corpus::build_corpus;
use crate::item::VisualItem;
use crate::kind::PreviewKind;
use crate::labels::{describe, Labels};
use crate::mode::PickerMode;
use crate::variant::{select_variant, variant_key, CARD_VARIANTS, THUMBNAIL_VARIANTS};

/// Everything the rendering layer needs to draw one preview card.
///
/// The renderer maps `(kind, variant)` to a fixed drawing; `title`,
/// `description`, and `section_label` are displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompositionPreviewData {
    /// Visual category the item classified into
    pub kind: PreviewKind,
    /// Deterministic variant index within the kind's drawing set
    pub variant: u32,
    /// Localized display title
    pub title: String,
    /// Localized one-sentence description
    pub description: String,
    /// Heading of the picker section this descriptor belongs to
    pub section_label: String,
}

impl CompositionPreviewData {
    /// Assemble the descriptor for the full illustrated thumbnail.
    ///
    /// Total and deterministic: identical inputs always produce an identical
    /// descriptor, and no input can make assembly fail.
    pub fn assemble(item: &VisualItem, mode: PickerMode) -> Self {
        Self::assemble_with_variants(item, mode, THUMBNAIL_VARIANTS)
    }

    /// Assemble the descriptor for the compact picker card.
    ///
    /// Uses a smaller variant modulus over the same identity key; the two
    /// contexts intentionally pick variants independently.
    pub fn assemble_card(item: &VisualItem, mode: PickerMode) -> Self {
        Self::assemble_with_variants(item, mode, CARD_VARIANTS)
    }

    /// Assemble with a caller-chosen variant modulus
    pub fn assemble_with_variants(item: &VisualItem, mode: PickerMode, variants: u32) -> Self {
        let corpus = build_corpus(item);
        let kind = classify(&corpus, mode);
        let variant = select_variant(&variant_key(item), variants);
        let Labels { title, description } = describe(mode, item, kind);

        tracing::trace!(
            item_id = %item.id,
            mode = %mode,
            kind = %kind,
            variant,
            "assembled composition preview"
        );

        Self {
            kind,
            variant,
            title,
            description,
            section_label: mode.section_label().to_string(),
        }
    }
}
