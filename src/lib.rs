//! # Composition Preview
//!
//! Deterministic composition classification for studio picker surfaces.
//!
//! Given a catalog item's free-text metadata and a picker mode, this crate
//! infers a visual category, a stable variant index, and localized display
//! labels, packaged as a preview descriptor the rendering layer turns into a
//! thumbnail without any pre-rendered image asset:
//! - **Corpus**: normalize scattered text fields into one search string
//! - **Classification**: a three-tier cascade over ordered rule tables
//! - **Variant**: a rolling hash over a stable identity key
//! - **Labels**: pattern-first titles with per-category boilerplate
//! - **Descriptor**: the packaged record, memoizable per catalog version
//!
//! ## Design Principles
//!
//! 1. **Totality**: every `(item, mode)` pair classifies; the cascade always
//!    terminates in a reachable default
//! 2. **Determinism**: no clock, no I/O, no randomness beyond the seeded
//!    rolling hash; identical inputs give identical descriptors
//! 3. **Tables as data**: rule tiers are ordered pattern lists interpreted
//!    by a small dispatch loop, testable independently of the rules
//! 4. **Best guess, never crash**: a preview is decorative, so unknown
//!    vocabulary degrades to a generic descriptor instead of an error
//!
//! Most callers only need [`CompositionPreviewData::assemble`]; the inner
//! stages are exported for tests and specialized call sites.

#![warn(missing_docs)]

mod cache;
mod classifier;
mod corpus;
mod errors;
mod item;
mod kind;
mod labels;
mod mode;
mod preview;
mod variant;

// Re-export core types
pub use cache::PreviewCache;
pub use classifier::classify;
pub use corpus::build_corpus;
pub use errors::{PreviewError, PreviewResult};
pub use item::VisualItem;
pub use kind::PreviewKind;
pub use labels::{describe, Labels};
pub use mode::{ModePresentation, PickerMode};
pub use preview::CompositionPreviewData;
pub use variant::{hash_seed, select_variant, variant_key, CARD_VARIANTS, THUMBNAIL_VARIANTS};
