// Copyright 2025 Cowboy AI, LLC.

//! The closed set of preview categories

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::PreviewError;

/// The visual category a catalog item is classified into.
///
/// The downstream renderer maps `(kind, variant)` to a fixed drawing, so this
/// set is closed: classification always lands on one of these tags, and
/// [`PreviewKind::Generic`] is the universal terminal fallback reachable from
/// every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PreviewKind {
    /// Central emphasis with supporting accents, for offers and urgency
    OfferBurst,
    /// One dominant protagonist block with secondary supports
    HeroStage,
    /// Modular cell grid for ordered content
    MosaicGrid,
    /// Diagonal reveal path for launches and teasers
    LaunchTeaser,
    /// Connected nodes explaining relationships or flow
    ServiceBlueprint,
    /// Official statement with clear textual hierarchy
    Bulletin,
    /// Card with header band and highlighted event block
    EventCard,
    /// Ordered blocks for checklists or key points
    ChecklistGrid,
    /// Split comparison showing visual contrast
    BeforeAfter,
    /// Central seal for milestones and achievements
    CommemorationSeal,
    /// Column of profile cards
    TeamCards,
    /// Typographic composition for quotes and statements
    QuotePoster,
    /// Main focus with supports for talent acquisition
    HiringSpotlight,
    /// Highlighted center with celebratory accents
    ConfettiIsland,
    /// Overlapping layers adding depth and context
    CutawayLayers,
    /// Bars and callouts spotlighting key figures
    DataSpotlight,
    /// Guided reading route for sequences and processes
    StepFlow,
    /// Term block with an explanation area
    DefinitionTerm,
    /// Axis-based reading rhythm; the operator-mode terminal default
    AxisScan,
    /// Z-shaped reading path
    OpReadingZ,
    /// F-shaped reading path
    OpReadingF,
    /// S-shaped reading path
    OpReadingS,
    /// Radial reading path from the center outward
    OpRadial,
    /// Alternating left-right reading rhythm
    OpAlternatingLr,
    /// Center-to-edge pulse
    OpCenterEdge,
    /// Universal terminal fallback
    Generic,
}

impl PreviewKind {
    /// Every preview kind, in declaration order
    pub const ALL: [PreviewKind; 26] = [
        PreviewKind::OfferBurst,
        PreviewKind::HeroStage,
        PreviewKind::MosaicGrid,
        PreviewKind::LaunchTeaser,
        PreviewKind::ServiceBlueprint,
        PreviewKind::Bulletin,
        PreviewKind::EventCard,
        PreviewKind::ChecklistGrid,
        PreviewKind::BeforeAfter,
        PreviewKind::CommemorationSeal,
        PreviewKind::TeamCards,
        PreviewKind::QuotePoster,
        PreviewKind::HiringSpotlight,
        PreviewKind::ConfettiIsland,
        PreviewKind::CutawayLayers,
        PreviewKind::DataSpotlight,
        PreviewKind::StepFlow,
        PreviewKind::DefinitionTerm,
        PreviewKind::AxisScan,
        PreviewKind::OpReadingZ,
        PreviewKind::OpReadingF,
        PreviewKind::OpReadingS,
        PreviewKind::OpRadial,
        PreviewKind::OpAlternatingLr,
        PreviewKind::OpCenterEdge,
        PreviewKind::Generic,
    ];

    /// The kebab-case tag used on the wire and as the renderer lookup key
    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewKind::OfferBurst => "offer-burst",
            PreviewKind::HeroStage => "hero-stage",
            PreviewKind::MosaicGrid => "mosaic-grid",
            PreviewKind::LaunchTeaser => "launch-teaser",
            PreviewKind::ServiceBlueprint => "service-blueprint",
            PreviewKind::Bulletin => "bulletin",
            PreviewKind::EventCard => "event-card",
            PreviewKind::ChecklistGrid => "checklist-grid",
            PreviewKind::BeforeAfter => "before-after",
            PreviewKind::CommemorationSeal => "commemoration-seal",
            PreviewKind::TeamCards => "team-cards",
            PreviewKind::QuotePoster => "quote-poster",
            PreviewKind::HiringSpotlight => "hiring-spotlight",
            PreviewKind::ConfettiIsland => "confetti-island",
            PreviewKind::CutawayLayers => "cutaway-layers",
            PreviewKind::DataSpotlight => "data-spotlight",
            PreviewKind::StepFlow => "step-flow",
            PreviewKind::DefinitionTerm => "definition-term",
            PreviewKind::AxisScan => "axis-scan",
            PreviewKind::OpReadingZ => "op-reading-z",
            PreviewKind::OpReadingF => "op-reading-f",
            PreviewKind::OpReadingS => "op-reading-s",
            PreviewKind::OpRadial => "op-radial",
            PreviewKind::OpAlternatingLr => "op-alternating-lr",
            PreviewKind::OpCenterEdge => "op-center-edge",
            PreviewKind::Generic => "generic",
        }
    }

    /// Check if this is one of the operator reading-path kinds
    pub fn is_reading_path(&self) -> bool {
        matches!(
            self,
            PreviewKind::OpReadingZ
                | PreviewKind::OpReadingF
                | PreviewKind::OpReadingS
                | PreviewKind::OpRadial
                | PreviewKind::OpAlternatingLr
                | PreviewKind::OpCenterEdge
        )
    }
}

impl fmt::Display for PreviewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreviewKind {
    type Err = PreviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PreviewKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PreviewError::UnknownKind {
                value: s.to_string(),
            })
    }
}
