// Copyright 2025 Cowboy AI, LLC.

//! Rule tables for the classification cascade
//!
//! Every tier is plain data: ordered lists of compiled patterns paired with
//! the kind they resolve to. Table order is load-bearing: several patterns
//! reuse overlapping vocabulary ("split", "spotlight", "ruta") and resolve to
//! different kinds purely by position, so entries must not be reordered.

use std::sync::LazyLock;

use regex::Regex;

use crate::kind::PreviewKind;

/// Z-shaped reading-path vocabulary, shared with the title table
pub(crate) const READING_Z: &str =
    r"(reading[-\s]*path[-\s]*z|\bpath[-\s]*z\b|\breading[-\s]*z\b|\bz-like\b|\bzeta\b)";
/// F-shaped reading-path vocabulary, shared with the title table
pub(crate) const READING_F: &str =
    r"(reading[-\s]*path[-\s]*f|\bpath[-\s]*f\b|\breading[-\s]*f\b|\bf-scan\b)";
/// S-shaped reading-path vocabulary, shared with the title table
pub(crate) const READING_S: &str =
    r"(reading[-\s]*path[-\s]*s|\bpath[-\s]*s\b|\breading[-\s]*s\b|\bs-like\b|serpentine)";
/// Alternating left-right vocabulary, shared with the title table
pub(crate) const ALTERNATING_LR: &str = r"(alternating|left[- ]right|left to right|lr\b)";
/// Center-to-edge vocabulary, shared with the title table
pub(crate) const CENTER_EDGE: &str = r"(center to edge|center-edge|centre to edge|pulse)";

fn rule(pattern: &str) -> Regex {
    Regex::new(pattern).expect("rule table pattern must compile")
}

/// An ordered `(pattern, kind)` check
pub(crate) struct Check {
    pub pattern: Regex,
    pub kind: PreviewKind,
}

impl Check {
    fn new(pattern: &str, kind: PreviewKind) -> Self {
        Self {
            pattern: rule(pattern),
            kind,
        }
    }
}

/// A tier-2 category group: two independent signals voting for one kind
pub(crate) struct SemanticGroup {
    pub kind: PreviewKind,
    pub signals: [Regex; 2],
}

impl SemanticGroup {
    fn new(kind: PreviewKind, first: &str, second: &str) -> Self {
        Self {
            kind,
            signals: [rule(first), rule(second)],
        }
    }

    /// Count how many of this group's signals match the corpus
    pub fn score(&self, corpus: &str) -> usize {
        self.signals.iter().filter(|s| s.is_match(corpus)).count()
    }
}

static OPERATOR_CHECKS: LazyLock<Vec<Check>> = LazyLock::new(|| {
    // Narrow reading-path vocabulary first; broader structural vocabulary
    // after, so a corpus combining both resolves to the narrower concept.
    vec![
        Check::new(READING_Z, PreviewKind::OpReadingZ),
        Check::new(READING_F, PreviewKind::OpReadingF),
        Check::new(READING_S, PreviewKind::OpReadingS),
        Check::new(r"(orbit|radial|circular|ring)", PreviewKind::OpRadial),
        Check::new(ALTERNATING_LR, PreviewKind::OpAlternatingLr),
        Check::new(CENTER_EDGE, PreviewKind::OpCenterEdge),
        Check::new(r"(bridge|link|connect|signal)", PreviewKind::ServiceBlueprint),
        Check::new(r"(split|dual|compare|versus)", PreviewKind::BeforeAfter),
        Check::new(r"(stack|vertical|column)", PreviewKind::TeamCards),
        Check::new(r"(timeline|sequence|step)", PreviewKind::EventCard),
        Check::new(r"(reading|path|ruta|scan|route|flow)", PreviewKind::StepFlow),
    ]
});

static SKELETON_CHECKS: LazyLock<Vec<Check>> = LazyLock::new(|| {
    vec![
        Check::new(r"(quadrant|grid|mosaic|cells|cell)", PreviewKind::MosaicGrid),
        Check::new(r"(split|bay|dual|two-column|two column)", PreviewKind::BeforeAfter),
        Check::new(r"(diagonal|fold|zig|step)", PreviewKind::LaunchTeaser),
        Check::new(r"(orbit|radial|ring|silent field)", PreviewKind::ConfettiIsland),
        Check::new(r"(cards|lineup|stack|panel)", PreviewKind::TeamCards),
        Check::new(r"(frame|window|cutaway|layer)", PreviewKind::CutawayLayers),
    ]
});

static SEMANTIC_GROUPS: LazyLock<Vec<SemanticGroup>> = LazyLock::new(|| {
    vec![
        SemanticGroup::new(
            PreviewKind::OfferBurst,
            r"(oferta|discount|descuento|rebaja|promo|flash|precio|impacto|urgencia)",
            r"(burst|explosion|sale|oferta)",
        ),
        SemanticGroup::new(
            PreviewKind::HeroStage,
            r"(hero|protagon|escenario|showcase|spotlight|foco)",
            r"(centro|central|dominante|principal)",
        ),
        SemanticGroup::new(
            PreviewKind::MosaicGrid,
            r"(mosaico|reticula|retícula|grid|celdas|cuadrantes|modular|rejilla)",
            r"(bloques|modulos|módulos|cells)",
        ),
        SemanticGroup::new(
            PreviewKind::BeforeAfter,
            r"(comparativa|versus|before|after|antes|despues|después|split|dividido|diptico|díptico)",
            r"(dual|dos|columnas|mitad)",
        ),
        SemanticGroup::new(
            PreviewKind::LaunchTeaser,
            r"(lanzamiento|reveal|teaser|anticipa|anticipación|anticipacion|diagonal|zig|zeta|plegado|pliegue)",
            r"(impulso|velocidad|kinetic|kinetico|cinetico)",
        ),
        SemanticGroup::new(
            PreviewKind::ServiceBlueprint,
            r"(servicio|blueprint|plano|planos|nodos|conectores|conexiones|flujo|route|ruta)",
            r"(proceso|sistema|relaciones|arquitectura)",
        ),
        SemanticGroup::new(
            PreviewKind::Bulletin,
            r"(comunicado|bulletin|memo|aviso|notice|oficial|statement|marquesina|cartel)",
            r"(texto|bloque textual|jerarquia|jerarquía)",
        ),
        SemanticGroup::new(
            PreviewKind::EventCard,
            r"(evento|agenda|fecha|hora|timeline|calendario|countdown|save the date)",
            r"(cabecera|tarjeta|card)",
        ),
        SemanticGroup::new(
            PreviewKind::ChecklistGrid,
            r"(checklist|check list|lista|tareas|tasks|todo|puntos|items|ítems)",
            r"(orden|ordenado|ordenar|bullets|numerado)",
        ),
        SemanticGroup::new(
            PreviewKind::CommemorationSeal,
            r"(sello|seal|badge|medalla|hito|conmemor|insignia|logro)",
            r"(centro|central)",
        ),
        SemanticGroup::new(
            PreviewKind::TeamCards,
            r"(equipo|team|profiles|perfiles|cards|tarjetas|lineup|personas|talento)",
            r"(columna|stack|apilad)",
        ),
        SemanticGroup::new(
            PreviewKind::QuotePoster,
            r"(cita|quote|testimonial|frase|poster|póster|tipografica|tipográfica)",
            r"(texto|statement)",
        ),
        SemanticGroup::new(
            PreviewKind::HiringSpotlight,
            r"(hiring|vacante|empleo|job|talent|talento|seleccion|selección)",
            r"(foco|spotlight)",
        ),
        SemanticGroup::new(
            PreviewKind::ConfettiIsland,
            r"(celebr|confetti|isla|island|festiv|premio|achievement)",
            r"(acento|acentos|particulas|partículas)",
        ),
        SemanticGroup::new(
            PreviewKind::CutawayLayers,
            r"(capas|layers|superpuestas|superposicion|superposición|ventana|window|marco|frame)",
            r"(profundidad|depth|planos)",
        ),
        SemanticGroup::new(
            PreviewKind::DataSpotlight,
            r"(dato|data|stat|estadistica|estadística|kpi|grafico|gráfico|barras|infografia|infografía)",
            r"(destacado|spotlight|foco)",
        ),
        SemanticGroup::new(
            PreviewKind::StepFlow,
            r"(pasos|step|secuencia|timeline|proceso|recorrido|flujo|ruta)",
            r"(orden|progres|fase)",
        ),
        SemanticGroup::new(
            PreviewKind::DefinitionTerm,
            r"(definicion|definición|termino|término|glosario|concepto|enciclopedia)",
            r"(explicacion|explicación|termino|término)",
        ),
    ]
});

static GENERIC_CHECKS: LazyLock<Vec<Check>> = LazyLock::new(|| {
    vec![
        Check::new(r"(offer|burst|promo|descuento|impact|teaser)", PreviewKind::OfferBurst),
        Check::new(r"(hero|showcase|stage|protagon)", PreviewKind::HeroStage),
        Check::new(r"(mosaic|catalog|catalogo|quadrant|grid spread)", PreviewKind::MosaicGrid),
        Check::new(r"(launch|reveal|anticip|window)", PreviewKind::LaunchTeaser),
        Check::new(r"(blueprint|service|signal|bridge|panel)", PreviewKind::ServiceBlueprint),
        Check::new(r"(official|bulletin|statement|notice)", PreviewKind::Bulletin),
        Check::new(r"(event|date|timeline|agenda)", PreviewKind::EventCard),
        Check::new(r"(checklist|check list|tasks|todo)", PreviewKind::ChecklistGrid),
        Check::new(r"(before|after|comparison|versus|split)", PreviewKind::BeforeAfter),
        Check::new(r"(commemorat|seal|medal|badge)", PreviewKind::CommemorationSeal),
        Check::new(r"(team|lineup|profile|cards)", PreviewKind::TeamCards),
        Check::new(r"(quote|poster|testimonial)", PreviewKind::QuotePoster),
        Check::new(r"(hiring|vacan|job|talent|spotlight)", PreviewKind::HiringSpotlight),
        Check::new(r"(confetti|achievement|celebrat|island)", PreviewKind::ConfettiIsland),
        Check::new(r"(behind|scenes|cutaway|layers|layered)", PreviewKind::CutawayLayers),
        Check::new(r"(data|stat|figure|kpi)", PreviewKind::DataSpotlight),
        Check::new(r"(step|flow|paso|ruta|path)", PreviewKind::StepFlow),
        Check::new(r"(definition|term|glossary|concept)", PreviewKind::DefinitionTerm),
    ]
});

/// Tier-1 ordered checks for operator mode
pub(crate) fn operator_checks() -> &'static [Check] {
    &OPERATOR_CHECKS
}

/// Tier-1 ordered checks for skeleton mode
pub(crate) fn skeleton_checks() -> &'static [Check] {
    &SKELETON_CHECKS
}

/// Tier-2 scored category groups, in registration order
pub(crate) fn semantic_groups() -> &'static [SemanticGroup] {
    &SEMANTIC_GROUPS
}

/// Tier-3 generic fallback checks
pub(crate) fn generic_checks() -> &'static [Check] {
    &GENERIC_CHECKS
}
