//! Catalog item metadata consumed by the classifier

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::PreviewResult;

/// A catalog entry to classify into a preview descriptor.
///
/// Items arrive from the catalog layer and from backend composition lists.
/// Only the identifier is required; every other field is free text that may
/// or may not be present, and an absent field simply contributes nothing to
/// the search corpus. No schema validation happens beyond that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisualItem {
    /// Opaque, stable identity anchor. Never displayed.
    ///
    /// Backend payloads spell this `_id`; both spellings deserialize.
    #[serde(alias = "_id")]
    pub id: String,

    /// Short display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Short free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// URL-ish identifier, often the richest classification signal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Long-form structural guidance for the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structural_prompt: Option<String>,

    /// Long-form prompt instruction text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_instruction: Option<String>,

    /// Coarse text placement hint (e.g. "top", "center", "overlay")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_zone: Option<String>,

    /// Semantic intent group this item belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent_id: Option<String>,
}

impl VisualItem {
    /// Create an item with only its identifier set
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Decode an item from a catalog or backend JSON payload
    pub fn from_json(payload: &str) -> PreviewResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Attach a name (builder style)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a slug (builder style)
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Attach a description (builder style)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
