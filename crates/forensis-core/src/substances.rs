//! Read-only substance reference data
//!
//! The catalog is populated once at startup and never mutated. Lookups by
//! unknown identifier return `None` rather than failing.

use serde::Serialize;

/// Characteristic phase-transition point of a substance, in degrees Celsius.
///
/// The source data records a boiling point for liquids and a melting point
/// for solids, so the variant carries which one was measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "celsius", rename_all = "snake_case")]
pub enum PhasePoint {
    Boiling(f64),
    Melting(f64),
}

impl PhasePoint {
    pub fn celsius(&self) -> f64 {
        match self {
            PhasePoint::Boiling(c) | PhasePoint::Melting(c) => *c,
        }
    }

    /// Label for display, e.g. `"bp 78.37 °C"`.
    pub fn display(&self) -> String {
        match self {
            PhasePoint::Boiling(c) => format!("bp {c} °C"),
            PhasePoint::Melting(c) => format!("mp {c} °C"),
        }
    }
}

/// Immutable chemical reference data for one substance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstanceRecord {
    /// Display name, e.g. `"Ethanol"`
    pub name: &'static str,
    /// Chemical formula with unicode subscripts, e.g. `"C₂H₅OH"`
    pub formula: &'static str,
    /// Molecular weight in g/mol
    pub molecular_weight: f64,
    /// Boiling or melting point
    pub phase_point: PhasePoint,
    /// One-line description for the reference table
    pub description: &'static str,
}

/// Read-only lookup table from substance identifier to record.
///
/// Built once via [`SubstanceCatalog::builtin`] and queried for the rest of
/// the process lifetime.
#[derive(Debug, Clone)]
pub struct SubstanceCatalog {
    entries: Vec<(&'static str, SubstanceRecord)>,
}

impl SubstanceCatalog {
    /// The built-in reference data set.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                (
                    "alcohol",
                    SubstanceRecord {
                        name: "Ethanol",
                        formula: "C₂H₅OH",
                        molecular_weight: 46.07,
                        phase_point: PhasePoint::Boiling(78.37),
                        description: "Principal component of consumable alcohol",
                    },
                ),
                (
                    "cocaine",
                    SubstanceRecord {
                        name: "Cocaine",
                        formula: "C₁₇H₂₁NO₄",
                        molecular_weight: 303.35,
                        phase_point: PhasePoint::Melting(98.0),
                        description: "Alkaloid extracted from coca leaves",
                    },
                ),
                (
                    "morphine",
                    SubstanceRecord {
                        name: "Morphine",
                        formula: "C₁₇H₁₉NO₃",
                        molecular_weight: 285.34,
                        phase_point: PhasePoint::Melting(255.0),
                        description: "Opiate alkaloid isolated from poppy latex",
                    },
                ),
                (
                    "thc",
                    SubstanceRecord {
                        name: "THC",
                        formula: "C₂₁H₃₀O₂",
                        molecular_weight: 314.45,
                        phase_point: PhasePoint::Boiling(157.0),
                        description: "Primary psychoactive cannabinoid of cannabis",
                    },
                ),
                (
                    "caffeine",
                    SubstanceRecord {
                        name: "Caffeine",
                        formula: "C₈H₁₀N₄O₂",
                        molecular_weight: 194.19,
                        phase_point: PhasePoint::Melting(235.0),
                        description: "Common cutting agent in seized street samples",
                    },
                ),
            ],
        }
    }

    /// Look up a record by identifier. Unknown identifiers yield `None`.
    pub fn get(&self, id: &str) -> Option<&SubstanceRecord> {
        self.entries
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, record)| record)
    }

    /// Iterate over `(id, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SubstanceRecord)> {
        self.entries.iter().map(|(id, record)| (*id, record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
