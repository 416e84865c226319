// Copyright 2025 Cowboy AI, LLC.

//! Category classification cascade
//!
//! Maps a search corpus and a picker mode to exactly one [`PreviewKind`]
//! through three tiers, evaluated in order with the first non-empty result
//! winning:
//!
//! 1. Mode-specific ordered checks (operator and skeleton only). Operator
//!    carries its own terminal default (`axis-scan`) and never proceeds past
//!    this tier; skeleton falls through when nothing matches.
//! 2. Weighted semantic scoring over category groups; strictly highest score
//!    wins and ties resolve to the earlier group.
//! 3. Generic single-pattern fallback, terminating in `generic`.
//!
//! The cascade is total: it never fails and never returns an unset kind.

mod rules;

pub(crate) use rules::{ALTERNATING_LR, CENTER_EDGE, READING_F, READING_S, READING_Z};

use crate::kind::PreviewKind;
use crate::mode::PickerMode;

/// Classify a search corpus under the given picker mode.
///
/// Cheap, synchronous, and pure; safe to call concurrently from any number
/// of rendering passes.
pub fn classify(corpus: &str, mode: PickerMode) -> PreviewKind {
    if mode == PickerMode::Operator {
        for check in rules::operator_checks() {
            if check.pattern.is_match(corpus) {
                return check.kind;
            }
        }
        return PreviewKind::AxisScan;
    }

    if mode == PickerMode::Skeleton {
        for check in rules::skeleton_checks() {
            if check.pattern.is_match(corpus) {
                return check.kind;
            }
        }
    }

    if let Some(kind) = semantic_kind(corpus) {
        return kind;
    }

    for check in rules::generic_checks() {
        if check.pattern.is_match(corpus) {
            return check.kind;
        }
    }

    PreviewKind::Generic
}

/// Tier-2 scoring: strictly highest group wins, earlier registration breaks ties.
fn semantic_kind(corpus: &str) -> Option<PreviewKind> {
    let mut winner = None;
    let mut best = 0;

    for group in rules::semantic_groups() {
        let score = group.score(corpus);
        if score > best {
            best = score;
            winner = Some(group.kind);
        }
    }

    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    /// Test operator tier-1 ordered dispatch
    ///
    /// ```mermaid
    /// graph TD
    ///     A[corpus] -->|reading path z| B[op-reading-z]
    ///     A -->|orbit| C[op-radial]
    ///     A -->|no match| D[axis-scan]
    /// ```
    #[test_case("reading path z layout", PreviewKind::OpReadingZ; "path z")]
    #[test_case("f-scan hierarchy", PreviewKind::OpReadingF; "path f")]
    #[test_case("serpentine route", PreviewKind::OpReadingS; "serpentine wins over route")]
    #[test_case("orbit around the logo", PreviewKind::OpRadial; "orbit")]
    #[test_case("alternating emphasis", PreviewKind::OpAlternatingLr; "alternating")]
    #[test_case("pulse outward", PreviewKind::OpCenterEdge; "pulse")]
    #[test_case("bridge two ideas", PreviewKind::ServiceBlueprint; "bridge")]
    #[test_case("split comparison", PreviewKind::BeforeAfter; "split")]
    #[test_case("vertical emphasis", PreviewKind::TeamCards; "vertical")]
    #[test_case("sequence of moments", PreviewKind::EventCard; "sequence")]
    #[test_case("guided scan", PreviewKind::StepFlow; "scan")]
    fn test_operator_tier1(corpus: &str, expected: PreviewKind) {
        assert_eq!(classify(corpus, PickerMode::Operator), expected);
    }

    /// Narrower reading-path vocabulary beats broader structural vocabulary
    #[test]
    fn test_operator_tier_ordering() {
        // Matches both the tier-1 "reading path z" rule and the later
        // "split" rule; the earlier entry must win.
        let corpus = "reading path z with split panels";
        assert_eq!(classify(corpus, PickerMode::Operator), PreviewKind::OpReadingZ);
    }

    /// Operator mode terminates in axis-scan, never in generic
    #[test]
    fn test_operator_terminal_default() {
        assert_eq!(
            classify("lorem ipsum dolor", PickerMode::Operator),
            PreviewKind::AxisScan
        );
    }

    /// Test skeleton tier-1 ordered dispatch
    #[test_case("quadrant spread", PreviewKind::MosaicGrid; "quadrant")]
    #[test_case("two-column bay", PreviewKind::BeforeAfter; "two column")]
    #[test_case("zig fold", PreviewKind::LaunchTeaser; "zig")]
    #[test_case("silent field arrangement", PreviewKind::ConfettiIsland; "silent field")]
    #[test_case("lineup of panels", PreviewKind::TeamCards; "lineup")]
    #[test_case("cutaway window", PreviewKind::CutawayLayers; "cutaway")]
    fn test_skeleton_tier1(corpus: &str, expected: PreviewKind) {
        assert_eq!(classify(corpus, PickerMode::Skeleton), expected);
    }

    /// Skeleton falls through to semantic scoring when tier 1 is silent
    #[test]
    fn test_skeleton_falls_through() {
        assert_eq!(
            classify("oferta con burst de urgencia", PickerMode::Skeleton),
            PreviewKind::OfferBurst
        );
    }

    /// A two-signal group beats a one-signal group regardless of order
    #[test]
    fn test_semantic_scoring_prefers_stronger_group() {
        // "hero" scores 1 for hero-stage; "cita" + "texto" score 2 for
        // quote-poster, which is registered later but wins on score.
        let corpus = "hero cita con texto";
        assert_eq!(classify(corpus, PickerMode::Motif), PreviewKind::QuotePoster);
    }

    /// On equal scores the earlier registered group wins
    #[test]
    fn test_semantic_tie_break() {
        // "timeline" is a signal for both event-card (registered earlier)
        // and step-flow; both score 1.
        assert_eq!(classify("timeline", PickerMode::Motif), PreviewKind::EventCard);

        // "texto" votes once for bulletin and once for quote-poster;
        // bulletin is registered first.
        assert_eq!(classify("texto", PickerMode::Motif), PreviewKind::Bulletin);
    }

    /// Zero-score groups can never win; tier 3 picks up single weak signals
    #[test]
    fn test_generic_fallback_tier() {
        // "showcase" hits tier-2 hero-stage with score 1, so tier 2 wins;
        // "figure" hits nothing in tier 2 and lands on tier-3 data-spotlight.
        assert_eq!(classify("figure caption", PickerMode::Motif), PreviewKind::DataSpotlight);
        assert_eq!(classify("behind the scenes", PickerMode::Motif), PreviewKind::CutawayLayers);
    }

    /// A corpus with no known vocabulary lands on the universal fallback
    #[test]
    fn test_generic_floor() {
        for mode in [PickerMode::Motif, PickerMode::Skeleton] {
            assert_eq!(classify("lorem ipsum dolor", mode), PreviewKind::Generic);
        }
        assert_eq!(classify("", PickerMode::Motif), PreviewKind::Generic);
    }

    /// Mode never changes the corpus, only the tiers that see it
    #[test]
    fn test_mode_selects_tiers() {
        let corpus = "grid of cells";
        assert_eq!(classify(corpus, PickerMode::Skeleton), PreviewKind::MosaicGrid);
        assert_eq!(classify(corpus, PickerMode::Motif), PreviewKind::MosaicGrid);
        // Operator has no grid vocabulary and terminates on its own default.
        assert_eq!(classify(corpus, PickerMode::Operator), PreviewKind::AxisScan);
    }
}
