//! Deterministic variant selection
//!
//! Each preview kind ships several pre-authored minor drawings; the variant
//! index picks one. The index comes from a rolling hash over a stable
//! identity key, so the same item keeps the same variant across renders,
//! reloads, and sessions without persisting anything.

use crate::item::VisualItem;

/// Variant modulus for the full illustrated thumbnail
pub const THUMBNAIL_VARIANTS: u32 = 6;

/// Variant modulus for the compact picker card
pub const CARD_VARIANTS: u32 = 3;

const HASH_SEED: u32 = 17;
const HASH_MODULUS: u32 = 9973;

/// Rolling hash over a key's characters.
///
/// `acc = (acc * 31 + char) mod 9973`, seeded with 17. The accumulator stays
/// below the modulus, so the arithmetic cannot overflow `u32`.
pub fn hash_seed(key: &str) -> u32 {
    key.chars()
        .fold(HASH_SEED, |acc, ch| (acc * 31 + ch as u32) % HASH_MODULUS)
}

/// Reduce the key hash into `[0, modulus)`.
///
/// A zero modulus yields 0 rather than failing.
pub fn select_variant(key: &str, modulus: u32) -> u32 {
    if modulus == 0 {
        return 0;
    }
    hash_seed(key) % modulus
}

/// Identity key for an item: slug (or name when the slug is absent or
/// empty), then the id, joined with a dash. Two items sharing a name but not
/// an identity usually diverge, and the same item never does.
pub fn variant_key(item: &VisualItem) -> String {
    let base = item
        .slug
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(item.name.as_deref())
        .unwrap_or("");
    format!("{base}-{}", item.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Test known hash values stay pinned
    ///
    /// These anchor the exact rolling-hash recipe; a change here silently
    /// reshuffles every rendered variant in the catalog.
    #[test]
    fn test_hash_values_pinned() {
        assert_eq!(hash_seed("offer-burst-demo-x1"), 3890);
        assert_eq!(hash_seed("reading-path-z-y9"), 5131);
        assert_eq!(hash_seed(""), 17);
    }

    /// Test variant selection is stable and confined
    #[test]
    fn test_select_variant() {
        assert_eq!(select_variant("offer-burst-demo-x1", THUMBNAIL_VARIANTS), 2);
        assert_eq!(select_variant("offer-burst-demo-x1", CARD_VARIANTS), 2);
        assert_eq!(select_variant("reading-path-z-y9", THUMBNAIL_VARIANTS), 1);

        for modulus in 1..=8 {
            let v = select_variant("alpha-1", modulus);
            assert!(v < modulus);
            assert_eq!(v, select_variant("alpha-1", modulus));
        }
    }

    /// Test the degenerate zero modulus
    #[test]
    fn test_zero_modulus() {
        assert_eq!(select_variant("anything", 0), 0);
    }

    /// Test nearby identities diverge
    #[test]
    fn test_identity_divergence() {
        assert_ne!(hash_seed("alpha-1"), hash_seed("alpha-2"));
    }

    /// Test key construction prefers slug, falls back to name, then id alone
    #[test]
    fn test_variant_key() {
        let full = VisualItem::new("x1")
            .with_name("Oferta Flash")
            .with_slug("offer-burst-demo");
        assert_eq!(variant_key(&full), "offer-burst-demo-x1");

        let named = VisualItem::new("x1").with_name("Oferta Flash");
        assert_eq!(variant_key(&named), "Oferta Flash-x1");

        let empty_slug = VisualItem::new("x1").with_name("Oferta Flash").with_slug("");
        assert_eq!(variant_key(&empty_slug), "Oferta Flash-x1");

        let bare = VisualItem::new("x1");
        assert_eq!(variant_key(&bare), "-x1");
    }
}
