//! Picker modes and their presentation metadata

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::PreviewError;

/// The picker context a classification runs in.
///
/// The mode selects which rule tiers apply and which label dictionary is
/// consulted; it never changes the search corpus itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PickerMode {
    /// Visual style picker ("look" of the composition)
    Motif,
    /// Structural picker (how content is distributed)
    Skeleton,
    /// Narrative picker (how reading and attention are guided)
    Operator,
}

impl PickerMode {
    /// Every picker mode, in declaration order
    pub const ALL: [PickerMode; 3] = [PickerMode::Motif, PickerMode::Skeleton, PickerMode::Operator];

    /// The lowercase literal used on the wire and in UI state
    pub fn as_str(&self) -> &'static str {
        match self {
            PickerMode::Motif => "motif",
            PickerMode::Skeleton => "skeleton",
            PickerMode::Operator => "operator",
        }
    }

    /// Presentation strings for this mode's picker section.
    ///
    /// These depend on the mode alone, never on the item being classified.
    pub fn presentation(&self) -> ModePresentation {
        match self {
            PickerMode::Skeleton => ModePresentation {
                section_label: "Estructura",
                auto_label: "Auto",
                auto_description: "El sistema decide como distribuir el contenido para tu idea.",
                empty_description: "Distribucion visual base de la composicion.",
            },
            PickerMode::Operator => ModePresentation {
                section_label: "Enfoque narrativo",
                auto_label: "Auto",
                auto_description: "El sistema decide como guiar la lectura y la atencion.",
                empty_description: "Guia visual del recorrido de lectura.",
            },
            PickerMode::Motif => ModePresentation {
                section_label: "Estilo visual",
                auto_label: "Auto",
                auto_description: "El sistema define el look visual que mejor encaja con tu idea.",
                empty_description: "Look visual dominante de la composicion.",
            },
        }
    }

    /// The section heading shown above this mode's picker grid
    pub fn section_label(&self) -> &'static str {
        self.presentation().section_label
    }
}

impl fmt::Display for PickerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PickerMode {
    type Err = PreviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "motif" => Ok(PickerMode::Motif),
            "skeleton" => Ok(PickerMode::Skeleton),
            "operator" => Ok(PickerMode::Operator),
            other => Err(PreviewError::UnknownMode {
                value: other.to_string(),
            }),
        }
    }
}

/// Mode-level presentation strings for a picker section.
///
/// Covers the section heading, the synthetic "auto" option, and the fallback
/// sentence shown when an item carries no descriptive text of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePresentation {
    /// Heading above the picker grid
    pub section_label: &'static str,
    /// Label on the "let the system decide" option
    pub auto_label: &'static str,
    /// Description under the "auto" option
    pub auto_description: &'static str,
    /// Generic sentence used when an item has no description to show
    pub empty_description: &'static str,
}
