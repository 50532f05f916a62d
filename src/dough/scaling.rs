//! Recipe scaling
//!
//! Scales an ingredient map from a base batch size to a target batch size.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::{CalcError, CalcResult};
use super::rounding::round_to;

/// Ingredient name to amount. Units are whatever the caller uses.
pub type IngredientQuantities = BTreeMap<String, f64>;

/// Decimal places of the reported scaling factor
pub const FACTOR_PLACES: u32 = 4;
/// Decimal places of each scaled ingredient amount
pub const AMOUNT_PLACES: u32 = 2;

/// Outcome of scaling a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingResult {
    pub scaling_factor: f64,
    pub scaled_ingredients: IngredientQuantities,
}

/// Scale `ingredients` by `target_amount / base_amount`.
///
/// The reported factor is rounded to 4 places, but each ingredient is
/// multiplied by the unrounded factor and rounded to 2 places on its own.
pub fn scale(
    base_amount: f64,
    target_amount: f64,
    ingredients: &IngredientQuantities,
) -> CalcResult<ScalingResult> {
    if base_amount == 0.0 {
        return Err(CalcError::Division);
    }

    let factor = target_amount / base_amount;

    let scaled_ingredients = ingredients
        .iter()
        .map(|(name, amount)| (name.clone(), round_to(amount * factor, AMOUNT_PLACES)))
        .collect();

    tracing::debug!(base_amount, target_amount, factor, count = ingredients.len(), "scaled recipe");

    Ok(ScalingResult {
        scaling_factor: round_to(factor, FACTOR_PLACES),
        scaled_ingredients,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dough::error::ErrorKind;
    use proptest::prelude::*;

    fn quantities(items: &[(&str, f64)]) -> IngredientQuantities {
        items.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_double_flour() {
        let result = scale(1.0, 2.0, &quantities(&[("flour", 500.0)])).unwrap();
        assert_eq!(result.scaling_factor, 2.0);
        assert_eq!(result.scaled_ingredients, quantities(&[("flour", 1000.0)]));
    }

    #[test]
    fn test_zero_base_is_division_error() {
        let err = scale(0.0, 5.0, &quantities(&[("x", 1.0)])).unwrap_err();
        assert_eq!(err, CalcError::Division);
        assert_eq!(err.kind(), ErrorKind::Division);
    }

    #[test]
    fn test_unrounded_factor_used_per_ingredient() {
        // 1/3 reports as 0.3333 but 900 * (1/3) must be exactly 300
        let result = scale(3.0, 1.0, &quantities(&[("flour", 900.0), ("salt", 1.0)])).unwrap();
        assert_eq!(result.scaling_factor, 0.3333);
        assert_eq!(result.scaled_ingredients["flour"], 300.0);
        assert_eq!(result.scaled_ingredients["salt"], 0.33);
    }

    #[test]
    fn test_huge_amount_stays_finite() {
        let result = scale(1.0, 1.0, &quantities(&[("x", 1e307)])).unwrap();
        assert_eq!(result.scaled_ingredients["x"], 1e307);
    }

    #[test]
    fn test_empty_ingredients() {
        let result = scale(4.0, 6.0, &IngredientQuantities::new()).unwrap();
        assert_eq!(result.scaling_factor, 1.5);
        assert!(result.scaled_ingredients.is_empty());
    }

    proptest! {
        #[test]
        fn prop_factor_and_keys(
            base in 0.01f64..1000.0,
            target in 0.01f64..1000.0,
            items in proptest::collection::btree_map("[a-z]{1,8}", 0.0f64..5000.0, 0..12),
        ) {
            let result = scale(base, target, &items).unwrap();
            prop_assert_eq!(result.scaling_factor, round_to(target / base, FACTOR_PLACES));
            prop_assert!(result.scaled_ingredients.keys().eq(items.keys()));
        }
    }
}
