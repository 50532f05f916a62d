//! Unit tables and conversion constants
//!
//! Fixed conversion tables for weight (into grams) and length (into meters).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical quantity a unit table measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    /// Mass, canonical unit gram
    Weight,
    /// Distance, canonical unit meter
    Length,
}

impl Quantity {
    /// Symbol of the canonical unit every conversion is routed through
    pub fn canonical_unit(&self) -> &'static str {
        match self {
            Quantity::Weight => "g",
            Quantity::Length => "m",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Quantity::Weight => "weight",
            Quantity::Length => "length",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per milligram
pub const G_PER_MG: f64 = 0.001;
/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per metric tonne
pub const G_PER_T: f64 = 1_000_000.0;

// ============================================================================
// Length Conversion Constants (to meters)
// ============================================================================

/// Meters per centimeter
pub const M_PER_CM: f64 = 0.01;
/// Meters per millimeter
pub const M_PER_MM: f64 = 0.001;
/// Meters per kilometer
pub const M_PER_KM: f64 = 1000.0;
/// Meters per inch
pub const M_PER_IN: f64 = 0.0254;
/// Meters per foot
pub const M_PER_FT: f64 = 0.3048;
/// Meters per yard
pub const M_PER_YD: f64 = 0.9144;
/// Meters per mile
pub const M_PER_MI: f64 = 1609.34;

// ============================================================================
// Tables
// ============================================================================

/// Immutable mapping from unit symbol to its multiplier into the canonical unit
#[derive(Debug, Clone, Copy)]
pub struct ConversionTable {
    quantity: Quantity,
    entries: &'static [(&'static str, f64)],
}

/// Weight units, multiplier into grams
pub const WEIGHT_UNITS: ConversionTable = ConversionTable {
    quantity: Quantity::Weight,
    entries: &[
        ("g", 1.0),
        ("kg", G_PER_KG),
        ("mg", G_PER_MG),
        ("lb", G_PER_LB),
        ("oz", G_PER_OZ),
        ("t", G_PER_T),
    ],
};

/// Length units, multiplier into meters
pub const LENGTH_UNITS: ConversionTable = ConversionTable {
    quantity: Quantity::Length,
    entries: &[
        ("m", 1.0),
        ("cm", M_PER_CM),
        ("mm", M_PER_MM),
        ("km", M_PER_KM),
        ("in", M_PER_IN),
        ("ft", M_PER_FT),
        ("yd", M_PER_YD),
        ("mi", M_PER_MI),
    ],
};

impl ConversionTable {
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Multiplier into the canonical unit. Symbols match exactly, case-sensitive.
    pub fn factor(&self, symbol: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, factor)| *factor)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.factor(symbol).is_some()
    }

    /// Unit symbols in table order
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(s, _)| *s)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
