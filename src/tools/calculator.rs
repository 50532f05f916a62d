//! Calculator Tools
//!
//! Validates caller input, runs the dough arithmetic and shapes the responses.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::Serialize;

use crate::dough::{
    formulate, round_to, schedule, IngredientQuantities, ProductionSchedule, Quantity,
    ScalingResult, StageDurations, UnitConverter,
};

/// Decimal places used when presenting masses
const DISPLAY_PLACES: u32 = 2;

/// Naive timestamp formats accepted for a finish time
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Response for calculate_dough
#[derive(Debug, Serialize)]
pub struct DoughResponse {
    pub num_balls: u32,
    pub ball_weight: f64,
    pub hydration_percent: f64,
    pub total_weight: f64,
    pub flour: f64,
    pub water: f64,
    pub salt: f64,
}

/// Response for convert_weight / convert_length
#[derive(Debug, Serialize)]
pub struct ConversionResponse {
    pub quantity: Quantity,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct UnitsResponse {
    pub weight: Vec<&'static str>,
    pub length: Vec<&'static str>,
}

/// A schedule in whichever time representation the caller used
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PlannedTimeline {
    Zoned(ProductionSchedule<DateTime<FixedOffset>>),
    Naive(ProductionSchedule<NaiveDateTime>),
}

/// Response for plan_production
#[derive(Debug, Serialize)]
pub struct ProductionPlanResponse {
    pub durations: StageDurations,
    pub total_minutes: u64,
    pub timeline: PlannedTimeline,
}

/// Compute flour, water and salt for a batch of dough balls
pub fn calculate_dough(
    num_balls: u32,
    ball_weight: f64,
    hydration_percent: f64,
) -> Result<DoughResponse, String> {
    if num_balls == 0 {
        return Err("num_balls must be greater than 0".to_string());
    }
    if !ball_weight.is_finite() || ball_weight <= 0.0 {
        return Err("ball_weight must be greater than 0".to_string());
    }
    if !hydration_percent.is_finite() || hydration_percent < 0.0 {
        return Err("hydration_percent must not be negative".to_string());
    }

    let masses = formulate(num_balls, ball_weight, hydration_percent);

    Ok(DoughResponse {
        num_balls,
        ball_weight,
        hydration_percent,
        total_weight: round_to(masses.total(), DISPLAY_PLACES),
        flour: round_to(masses.flour, DISPLAY_PLACES),
        water: round_to(masses.water, DISPLAY_PLACES),
        salt: round_to(masses.salt, DISPLAY_PLACES),
    })
}

/// Scale an ingredient map from a base batch size to a target batch size
pub fn scale_recipe(
    base_amount: f64,
    target_amount: f64,
    ingredients: &IngredientQuantities,
) -> Result<ScalingResult, String> {
    if !base_amount.is_finite() || base_amount < 0.0 {
        return Err("base_amount must be a positive number".to_string());
    }
    if !target_amount.is_finite() || target_amount <= 0.0 {
        return Err("target_amount must be a positive number".to_string());
    }
    if let Some((name, _)) = ingredients.iter().find(|(_, v)| !v.is_finite() || **v < 0.0) {
        return Err(format!("Ingredient '{}' must have a non-negative amount", name));
    }

    crate::dough::scale(base_amount, target_amount, ingredients).map_err(|e| e.to_string())
}

/// Convert between two units of the same quantity.
///
/// Symbols are trimmed and lower-cased before lookup.
pub fn convert(
    quantity: Quantity,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<ConversionResponse, String> {
    if !value.is_finite() {
        return Err("value must be a finite number".to_string());
    }

    let from_unit = from_unit.trim().to_lowercase();
    let to_unit = to_unit.trim().to_lowercase();

    let result = UnitConverter::default()
        .convert(quantity, value, &from_unit, &to_unit)
        .map_err(|e| e.to_string())?;

    Ok(ConversionResponse {
        quantity,
        value,
        from_unit,
        to_unit,
        result,
    })
}

/// List every unit symbol the converter knows
pub fn list_units() -> UnitsResponse {
    let converter = UnitConverter::default();
    UnitsResponse {
        weight: converter.weight_units().collect(),
        length: converter.length_units().collect(),
    }
}

/// Plan production backward from `finish_time`.
///
/// RFC 3339 input keeps its offset; naive input stays naive.
pub fn plan_production(
    finish_time: &str,
    durations: StageDurations,
) -> Result<ProductionPlanResponse, String> {
    let finish_time = finish_time.trim();

    let timeline = if let Ok(zoned) = DateTime::parse_from_rfc3339(finish_time) {
        PlannedTimeline::Zoned(schedule(&durations, zoned).map_err(|e| e.to_string())?)
    } else {
        let naive = parse_naive(finish_time).ok_or_else(|| {
            format!(
                "Invalid finish_time '{}'. Use RFC 3339 (2025-06-14T19:00:00+02:00) or YYYY-MM-DDTHH:MM",
                finish_time
            )
        })?;
        PlannedTimeline::Naive(schedule(&durations, naive).map_err(|e| e.to_string())?)
    };

    Ok(ProductionPlanResponse {
        durations,
        total_minutes: durations.total_minutes(),
        timeline,
    })
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
