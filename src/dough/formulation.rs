//! Ratio-based dough formulation
//!
//! Derives flour, water and salt masses from a ball count, a ball weight and
//! a hydration percentage.

use serde::{Deserialize, Serialize};

/// Salt as a fraction of flour mass
pub const SALT_RATIO: f64 = 0.02;

/// Ingredient masses for a batch of dough, in grams
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DoughMasses {
    pub flour: f64,
    pub water: f64,
    pub salt: f64,
}

impl DoughMasses {
    /// Combined mass of all ingredients
    pub fn total(&self) -> f64 {
        self.flour + self.water + self.salt
    }
}

/// Compute flour, water and salt for `num_balls` balls of `ball_weight` grams.
///
/// The total dough weight is `flour * (1 + hydration/100 + 0.02)`, so flour is
/// solved directly from it. Values are not rounded and inputs are not
/// validated; zero balls or zero weight give all-zero masses.
pub fn formulate(num_balls: u32, ball_weight: f64, hydration_percent: f64) -> DoughMasses {
    let total = f64::from(num_balls) * ball_weight;
    let hydration = hydration_percent / 100.0;

    let flour = total / (1.0 + hydration + SALT_RATIO);
    let water = flour * hydration;
    let salt = flour * SALT_RATIO;

    tracing::debug!(num_balls, ball_weight, hydration_percent, flour, "formulated dough");

    DoughMasses { flour, water, salt }
}
