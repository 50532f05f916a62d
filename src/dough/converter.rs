//! Unit conversion functions
//!
//! Converts values between units of the same quantity by routing through the
//! canonical unit: `canonical = value * table[from]`, `result = canonical / table[to]`.

use super::error::{CalcError, CalcResult};
use super::units::{ConversionTable, Quantity, LENGTH_UNITS, WEIGHT_UNITS};

/// Converter over a fixed pair of weight and length tables
#[derive(Debug, Clone, Copy)]
pub struct UnitConverter {
    weight: ConversionTable,
    length: ConversionTable,
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new(WEIGHT_UNITS, LENGTH_UNITS)
    }
}

impl UnitConverter {
    pub fn new(weight: ConversionTable, length: ConversionTable) -> Self {
        Self { weight, length }
    }

    pub fn table(&self, quantity: Quantity) -> &ConversionTable {
        match quantity {
            Quantity::Weight => &self.weight,
            Quantity::Length => &self.length,
        }
    }

    pub fn convert_weight(&self, value: f64, from: &str, to: &str) -> CalcResult<f64> {
        self.convert(Quantity::Weight, value, from, to)
    }

    pub fn convert_length(&self, value: f64, from: &str, to: &str) -> CalcResult<f64> {
        self.convert(Quantity::Length, value, from, to)
    }

    /// Convert `value` from one unit to another within the given quantity
    pub fn convert(&self, quantity: Quantity, value: f64, from: &str, to: &str) -> CalcResult<f64> {
        let table = self.table(quantity);
        let from_factor = lookup(table, from)?;
        let to_factor = lookup(table, to)?;

        let canonical = value * from_factor;
        Ok(canonical / to_factor)
    }

    pub fn weight_units(&self) -> impl Iterator<Item = &'static str> {
        self.weight.symbols()
    }

    pub fn length_units(&self) -> impl Iterator<Item = &'static str> {
        self.length.symbols()
    }
}

fn lookup(table: &ConversionTable, symbol: &str) -> CalcResult<f64> {
    table.factor(symbol).ok_or_else(|| CalcError::UnknownUnit {
        kind: table.quantity(),
        unit: symbol.to_string(),
    })
}

/// Convert a weight with the standard tables
pub fn convert_weight(value: f64, from: &str, to: &str) -> CalcResult<f64> {
    UnitConverter::default().convert_weight(value, from, to)
}

/// Convert a length with the standard tables
pub fn convert_length(value: f64, from: &str, to: &str) -> CalcResult<f64> {
    UnitConverter::default().convert_length(value, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dough::error::ErrorKind;
    use proptest::prelude::*;

    #[test]
    fn test_kg_to_g() {
        assert_eq!(convert_weight(1.0, "kg", "g").unwrap(), 1000.0);
    }

    #[test]
    fn test_g_to_kg() {
        assert_eq!(convert_weight(1000.0, "g", "kg").unwrap(), 1.0);
    }

    #[test]
    fn test_lb_to_kg() {
        let kg = convert_weight(1.0, "lb", "kg").unwrap();
        assert!((kg - 0.453592).abs() < 1e-5);
    }

    #[test]
    fn test_m_to_cm() {
        assert_eq!(convert_length(1.0, "m", "cm").unwrap(), 100.0);
    }

    #[test]
    fn test_km_to_m() {
        assert_eq!(convert_length(1.0, "km", "m").unwrap(), 1000.0);
    }

    #[test]
    fn test_ft_to_m() {
        let m = convert_length(1.0, "ft", "m").unwrap();
        assert!((m - 0.3048).abs() < 1e-4);
    }

    #[test]
    fn test_unknown_weight_unit() {
        let err = convert_weight(1.0, "xyz", "g").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownUnit);
        assert_eq!(
            err,
            CalcError::UnknownUnit { kind: Quantity::Weight, unit: "xyz".to_string() }
        );
    }

    #[test]
    fn test_unknown_target_unit_is_reported() {
        let err = convert_length(1.0, "m", "parsec").unwrap_err();
        assert_eq!(
            err,
            CalcError::UnknownUnit { kind: Quantity::Length, unit: "parsec".to_string() }
        );
    }

    #[test]
    fn test_units_do_not_cross_tables() {
        assert!(convert_weight(1.0, "m", "g").is_err());
        assert!(convert_length(1.0, "kg", "m").is_err());
    }

    #[test]
    fn test_available_units() {
        let converter = UnitConverter::default();
        let weight: Vec<_> = converter.weight_units().collect();
        assert!(weight.contains(&"kg"));
        assert!(weight.contains(&"g"));
        assert!(weight.contains(&"lb"));
        let length: Vec<_> = converter.length_units().collect();
        assert!(length.contains(&"m"));
        assert!(length.contains(&"cm"));
        assert!(length.contains(&"ft"));
    }

    fn weight_symbol() -> impl Strategy<Value = &'static str> {
        proptest::sample::select(WEIGHT_UNITS.symbols().collect::<Vec<_>>())
    }

    fn length_symbol() -> impl Strategy<Value = &'static str> {
        proptest::sample::select(LENGTH_UNITS.symbols().collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn prop_weight_round_trip(value in 1e-3f64..1e6, u in weight_symbol(), v in weight_symbol()) {
            let there = convert_weight(value, u, v).unwrap();
            let back = convert_weight(there, v, u).unwrap();
            prop_assert!(((back - value) / value).abs() < 1e-6);
        }

        #[test]
        fn prop_length_transitive(
            value in 1e-3f64..1e6,
            a in length_symbol(),
            b in length_symbol(),
            c in length_symbol(),
        ) {
            let direct = convert_length(value, a, c).unwrap();
            let chained = convert_length(convert_length(value, a, b).unwrap(), b, c).unwrap();
            prop_assert!(((chained - direct) / direct).abs() < 1e-9);
        }
    }
}
