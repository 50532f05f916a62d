//! Status Tool
//!
//! Provides runtime status information about the doughcalc service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::store::{RecipeRepository, WidgetRepository};

/// Dough planning instructions for AI assistants
pub const DOUGH_INSTRUCTIONS: &str = r#"
# Pizza Dough Calculator Instructions

## Formulating a batch

Call `calculate_dough` with:
- `num_balls` - how many dough balls (at least 1)
- `ball_weight` - grams per ball (e.g. 250 for Neapolitan, 280-300 for New York)
- `hydration_percent` - water as a percentage of flour (e.g. 65)

Salt is always 2% of the flour. The returned flour, water and salt add up to
`num_balls * ball_weight`.

**Example:** 4 balls of 250g at 65% hydration
→ flour 598.80g, water 389.22g, salt 11.98g

## Scaling an existing recipe

Call `scale_recipe` with `base_amount` (what the recipe currently makes),
`target_amount` (what you want) and an `ingredients` map of name → amount.
Amounts keep whatever unit you gave them in. The factor is reported to 4
decimals; every ingredient is rounded to 2 decimals.

## Converting units

- `convert_weight`: g, kg, mg, lb, oz, t
- `convert_length`: m, cm, mm, km, in, ft, yd, mi
- `list_units` shows both tables

## Planning the bake

Call `plan_production` with `finish_time` (when the pizzas should be done).

| Stage | Default minutes |
|-------|-----------------|
| knet (kneading) | 10 |
| stockgare (bulk fermentation) | 120 |
| portionier (portioning) | 15 |
| stueckgare (ball proof) | 60 |
| back (baking) | 30 |

Override any stage by passing its minutes. Use an RFC 3339 timestamp with an
offset (`2025-06-14T19:00:00+02:00`) to get zoned results, or a plain local
time (`2025-06-14T19:00`) to get plain local results. Times are never
converted between zones.

## Reference data

- `list_pizza_styles` - regional styles
- `list_preferment_methods` - Poolish, Biga, Pâte Fermentée, Sauerteig
"#;

/// Runtime status of the doughcalc service
#[derive(Debug, Clone, Serialize)]
pub struct DoughcalcStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Store information
    pub recipe_count: usize,
    pub widget_count: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(
        &self,
        recipes: &dyn RecipeRepository,
        widgets: &dyn WidgetRepository,
    ) -> Result<DoughcalcStatus, String> {
        let build_info = BuildInfo::current();

        let recipe_count = recipes
            .count()
            .map_err(|e| format!("Failed to count recipes: {}", e))?;
        let widget_count = widgets
            .get_all()
            .map_err(|e| format!("Failed to count widgets: {}", e))?
            .len();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        Ok(DoughcalcStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            recipe_count,
            widget_count,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryRecipeRepository, InMemoryWidgetRepository};

    #[test]
    fn test_status_reports_store_counts() {
        let tracker = StatusTracker::new();
        let recipes = InMemoryRecipeRepository::new();
        let widgets = InMemoryWidgetRepository::new();

        let status = tracker.get_status(&recipes, &widgets).unwrap();
        assert_eq!(status.recipe_count, 0);
        assert_eq!(status.widget_count, 0);
        assert_eq!(status.process_id, std::process::id());
    }
}
