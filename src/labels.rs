// Copyright 2025 Cowboy AI, LLC.

//! Display title and description synthesis
//!
//! Titles resolve pattern-first so a recognizable slug or name surfaces the
//! catalog author's own vocabulary; descriptions are fixed boilerplate per
//! category so sibling items read consistently. The two tables are
//! independent of each other.

use std::sync::LazyLock;

use regex::Regex;

use crate::classifier::{ALTERNATING_LR, CENTER_EDGE, READING_F, READING_S, READING_Z};
use crate::item::VisualItem;
use crate::kind::PreviewKind;
use crate::mode::PickerMode;

/// The localized display strings for one classified item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Short display title
    pub title: String,
    /// One-sentence category description
    pub description: String,
}

/// Synthesize the title and description for a classified item.
///
/// Both outputs are guaranteed non-empty: the title falls back through the
/// kind dictionary, the item's own name, and a literal placeholder; the
/// description dictionary covers every kind.
pub fn describe(mode: PickerMode, item: &VisualItem, kind: PreviewKind) -> Labels {
    Labels {
        title: title(mode, item, kind),
        description: description(mode, kind).to_string(),
    }
}

fn rule(pattern: &str) -> Regex {
    Regex::new(pattern).expect("title table pattern must compile")
}

/// Ordered title patterns over the item's slug and name.
///
/// Reading-path vocabulary sits first, mirroring the operator tier of the
/// classifier; position is load-bearing for overlapping entries.
static TITLE_CHECKS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (rule(READING_Z), "Ruta de Lectura Z"),
        (rule(READING_F), "Ruta de Lectura F"),
        (rule(READING_S), "Ruta de Lectura S"),
        (rule(r"(radial|orbit|circular|ring)"), "Ruta de Lectura Radial"),
        (rule(ALTERNATING_LR), "Alternancia Izquierda-Derecha"),
        (rule(CENTER_EDGE), "Pulso Centro-Borde"),
        (rule(r"(offer|burst|promo|descuento|impact)"), "Nucleo de Oferta Impacto"),
        (rule(r"(hero|showcase|stage)"), "Escenario Hero"),
        (rule(r"(mosaic|catalog|catalogo|quadrant)"), "Mosaico de Catalogo"),
        (rule(r"(launch|teaser|reveal)"), "Revelado de Lanzamiento"),
        (rule(r"(blueprint|service)"), "Planos de Servicio"),
        (rule(r"(official|bulletin|statement|notice)"), "Comunicado Oficial"),
        (rule(r"(event|date|agenda|timeline)"), "Tarjeta de Evento"),
        (rule(r"(checklist|tasks|todo)"), "Cuadricula Checklist"),
        (rule(r"(before|after|comparison|versus|split)"), "Comparativa Antes-Despues"),
        (rule(r"(commemorat|seal|medal|badge)"), "Sello Conmemorativo"),
        (rule(r"(team|lineup|profile)"), "Tarjetas de Equipo"),
        (rule(r"(quote|testimonial)"), "Poster de Cita"),
        (rule(r"(hiring|vacan|job|talent)"), "Foco de Talento"),
        (rule(r"(confetti|achievement|celebrat)"), "Isla de Celebracion"),
        (rule(r"(behind|scenes|cutaway|layer)"), "Capas Tras Bastidores"),
        (rule(r"(data|stat|figure|kpi)"), "Dato Destacado"),
        (rule(r"(step|flow|paso|ruta|path)"), "Flujo Paso a Paso"),
        (rule(r"(definition|term|glossary|concept)"), "Tarjeta de Definicion"),
    ]
});

fn title(mode: PickerMode, item: &VisualItem, kind: PreviewKind) -> String {
    let text = format!(
        "{} {}",
        item.slug.as_deref().unwrap_or(""),
        item.name.as_deref().unwrap_or("")
    )
    .to_lowercase();

    for (pattern, label) in TITLE_CHECKS.iter() {
        if pattern.is_match(&text) {
            return (*label).to_string();
        }
    }

    fallback_title(mode, item, kind)
}

/// Kind-keyed default titles, mode-sensitive only for the shared
/// `axis-scan` and `generic` tags.
fn fallback_title(mode: PickerMode, item: &VisualItem, kind: PreviewKind) -> String {
    let fixed = match kind {
        PreviewKind::OfferBurst => "Nucleo de Oferta",
        PreviewKind::HeroStage => "Escenario Hero",
        PreviewKind::MosaicGrid => "Mosaico",
        PreviewKind::LaunchTeaser => "Lanzamiento",
        PreviewKind::ServiceBlueprint => "Planos de Servicio",
        PreviewKind::Bulletin => "Comunicado",
        PreviewKind::EventCard => "Evento",
        PreviewKind::ChecklistGrid => "Checklist",
        PreviewKind::BeforeAfter => "Antes-Despues",
        PreviewKind::CommemorationSeal => "Sello",
        PreviewKind::TeamCards => "Equipo",
        PreviewKind::QuotePoster => "Cita",
        PreviewKind::HiringSpotlight => "Talento",
        PreviewKind::ConfettiIsland => "Celebracion",
        PreviewKind::CutawayLayers => "Capas",
        PreviewKind::DataSpotlight => "Dato",
        PreviewKind::StepFlow => "Flujo",
        PreviewKind::DefinitionTerm => "Definicion",
        PreviewKind::AxisScan => {
            if mode == PickerMode::Operator {
                "Recorrido por Ejes"
            } else {
                "Ejes"
            }
        }
        PreviewKind::OpReadingZ => "Ruta de Lectura Z",
        PreviewKind::OpReadingF => "Ruta de Lectura F",
        PreviewKind::OpReadingS => "Ruta de Lectura S",
        PreviewKind::OpRadial => "Ruta de Lectura Radial",
        PreviewKind::OpAlternatingLr => "Alternancia Izquierda-Derecha",
        PreviewKind::OpCenterEdge => "Pulso Centro-Borde",
        PreviewKind::Generic => {
            return item
                .name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "Componente".to_string());
        }
    };
    fixed.to_string()
}

/// One-sentence description per kind; the catch-all row is mode-specific.
fn description(mode: PickerMode, kind: PreviewKind) -> &'static str {
    match kind {
        PreviewKind::OfferBurst => "Enfasis central con apoyos para comunicar impacto.",
        PreviewKind::HeroStage => "Elemento protagonista con bloques de apoyo secundarios.",
        PreviewKind::MosaicGrid => "Composicion modular en celdas para ordenar contenido.",
        PreviewKind::LaunchTeaser => "Recorrido en diagonal para anticipar y revelar.",
        PreviewKind::ServiceBlueprint => "Nodos conectados para explicar relaciones o flujo.",
        PreviewKind::Bulletin => "Estructura de comunicado con jerarquia textual clara.",
        PreviewKind::EventCard => "Tarjeta con cabecera y bloque destacado de evento.",
        PreviewKind::ChecklistGrid => "Bloques ordenados para checklist o puntos clave.",
        PreviewKind::BeforeAfter => "Comparativa dividida para mostrar contraste visual.",
        PreviewKind::CommemorationSeal => "Sello central para mensajes de logro o hito.",
        PreviewKind::TeamCards => "Tarjetas en columna para perfiles o equipo.",
        PreviewKind::QuotePoster => "Composicion tipografica para citas o declaraciones.",
        PreviewKind::HiringSpotlight => "Foco principal con apoyos para captar talento.",
        PreviewKind::ConfettiIsland => "Centro destacado con acentos para celebracion.",
        PreviewKind::CutawayLayers => "Capas superpuestas para dar profundidad y contexto.",
        PreviewKind::DataSpotlight => "Barras y llamadas para destacar datos clave.",
        PreviewKind::StepFlow => "Ruta guiada de lectura para secuencia o proceso.",
        PreviewKind::DefinitionTerm => "Bloque de termino y area de explicacion.",
        PreviewKind::AxisScan => "Lectura sobre ejes para ritmo y direccion visual.",
        PreviewKind::OpReadingZ => "Lectura en Z: arriba, cruce y cierre inferior.",
        PreviewKind::OpReadingF => "Lectura en F: ancla vertical y cortes horizontales.",
        PreviewKind::OpReadingS => "Lectura en S: recorrido curvo y progresivo.",
        PreviewKind::OpRadial => "Lectura radial desde el centro hacia los apoyos.",
        PreviewKind::OpAlternatingLr => "Lectura alterna izquierda-derecha para ritmo.",
        PreviewKind::OpCenterEdge => "Del centro a bordes: pulso y expansion visual.",
        PreviewKind::Generic => match mode {
            PickerMode::Operator => "Enfoque visual para guiar el recorrido de lectura.",
            PickerMode::Skeleton => "Estructura visual para organizar la composicion.",
            PickerMode::Motif => "Estilo visual para definir el gesto de la composicion.",
        },
    }
}
