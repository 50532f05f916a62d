//! Backward production scheduling
//!
//! Works back from the moment the pizzas should be finished to the moment
//! kneading has to start. Timestamps are never normalized: a zoned input
//! yields zoned boundaries in the same zone, a naive input yields naive ones.

use std::fmt;

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::error::{CalcError, CalcResult};

/// One phase of dough production
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Kneading
    Knet,
    /// Bulk fermentation
    Stockgare,
    /// Portioning into balls
    Portionier,
    /// Final proof of the balls
    Stueckgare,
    /// Baking
    Back,
}

impl Stage {
    /// All stages in production order
    pub const ALL: [Stage; 5] = [
        Stage::Knet,
        Stage::Stockgare,
        Stage::Portionier,
        Stage::Stueckgare,
        Stage::Back,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Knet => "knet",
            Stage::Stockgare => "stockgare",
            Stage::Portionier => "portionier",
            Stage::Stueckgare => "stueckgare",
            Stage::Back => "back",
        }
    }

    /// Minutes used when the caller does not supply a duration
    pub const fn default_minutes(&self) -> u32 {
        match self {
            Stage::Knet => 10,
            Stage::Stockgare => 120,
            Stage::Portionier => 15,
            Stage::Stueckgare => 60,
            Stage::Back => 30,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-stage durations in minutes. Omitted fields take the stage default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDurations {
    #[serde(default = "default_knet")]
    pub knet: u32,
    #[serde(default = "default_stockgare")]
    pub stockgare: u32,
    #[serde(default = "default_portionier")]
    pub portionier: u32,
    #[serde(default = "default_stueckgare")]
    pub stueckgare: u32,
    #[serde(default = "default_back")]
    pub back: u32,
}

fn default_knet() -> u32 { Stage::Knet.default_minutes() }
fn default_stockgare() -> u32 { Stage::Stockgare.default_minutes() }
fn default_portionier() -> u32 { Stage::Portionier.default_minutes() }
fn default_stueckgare() -> u32 { Stage::Stueckgare.default_minutes() }
fn default_back() -> u32 { Stage::Back.default_minutes() }

impl Default for StageDurations {
    fn default() -> Self {
        Self {
            knet: default_knet(),
            stockgare: default_stockgare(),
            portionier: default_portionier(),
            stueckgare: default_stueckgare(),
            back: default_back(),
        }
    }
}

impl StageDurations {
    /// Fill every missing duration with its default
    pub fn with_overrides(
        knet: Option<u32>,
        stockgare: Option<u32>,
        portionier: Option<u32>,
        stueckgare: Option<u32>,
        back: Option<u32>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            knet: knet.unwrap_or(defaults.knet),
            stockgare: stockgare.unwrap_or(defaults.stockgare),
            portionier: portionier.unwrap_or(defaults.portionier),
            stueckgare: stueckgare.unwrap_or(defaults.stueckgare),
            back: back.unwrap_or(defaults.back),
        }
    }

    pub fn minutes(&self, stage: Stage) -> u32 {
        match stage {
            Stage::Knet => self.knet,
            Stage::Stockgare => self.stockgare,
            Stage::Portionier => self.portionier,
            Stage::Stueckgare => self.stueckgare,
            Stage::Back => self.back,
        }
    }

    pub fn total_minutes(&self) -> u64 {
        Stage::ALL.iter().map(|s| u64::from(self.minutes(*s))).sum()
    }
}

/// Start and end of one stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageSpan<T> {
    pub stage: Stage,
    pub start: T,
    pub end: T,
}

/// Computed production timeline, stages in production order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionSchedule<T> {
    spans: [StageSpan<T>; 5],
}

impl<T: Copy> ProductionSchedule<T> {
    /// When kneading starts
    pub fn production_start(&self) -> T {
        self.spans[0].start
    }

    /// When baking ends
    pub fn finish(&self) -> T {
        self.spans[4].end
    }

    pub fn span(&self, stage: Stage) -> &StageSpan<T> {
        // spans are stored in Stage::ALL order
        &self.spans[stage as usize]
    }

    pub fn spans(&self) -> &[StageSpan<T>] {
        &self.spans
    }

    /// Named boundaries in production order, `produktion_start` through `fertigstellung`
    pub fn boundaries(&self) -> Vec<(String, T)> {
        let mut out = Vec::with_capacity(12);
        out.push(("produktion_start".to_string(), self.production_start()));
        for span in &self.spans {
            out.push((format!("{}_start", span.stage), span.start));
            out.push((format!("{}_ende", span.stage), span.end));
        }
        out.push(("fertigstellung".to_string(), self.finish()));
        out
    }
}

impl<T: Copy + Serialize> Serialize for ProductionSchedule<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let boundaries = self.boundaries();
        let mut map = serializer.serialize_map(Some(boundaries.len()))?;
        for (name, at) in &boundaries {
            map.serialize_entry(name, at)?;
        }
        map.end()
    }
}

/// A point in time that can be moved back by whole minutes
pub trait Timestamp: Copy {
    /// `None` when the result falls outside the representable range
    fn minus_minutes(self, minutes: u32) -> Option<Self>;
}

impl Timestamp for NaiveDateTime {
    fn minus_minutes(self, minutes: u32) -> Option<Self> {
        self.checked_sub_signed(Duration::minutes(i64::from(minutes)))
    }
}

impl<Tz: TimeZone> Timestamp for DateTime<Tz>
where
    Tz::Offset: Copy,
{
    fn minus_minutes(self, minutes: u32) -> Option<Self> {
        self.checked_sub_signed(Duration::minutes(i64::from(minutes)))
    }
}

/// Compute the timeline that ends at `finish`.
///
/// Folds backward over back, stueckgare, portionier, stockgare, knet: each
/// stage ends where the following one starts. Fails with
/// [`CalcError::TimeOutOfRange`] when a stage would start before the
/// earliest representable instant.
pub fn schedule<T: Timestamp>(
    durations: &StageDurations,
    finish: T,
) -> CalcResult<ProductionSchedule<T>> {
    let mut end = finish;
    let mut spans = Stage::ALL.map(|stage| StageSpan { stage, start: finish, end: finish });

    for span in spans.iter_mut().rev() {
        let start = end
            .minus_minutes(durations.minutes(span.stage))
            .ok_or(CalcError::TimeOutOfRange { stage: span.stage })?;
        span.start = start;
        span.end = end;
        end = start;
    }

    tracing::debug!(total_minutes = durations.total_minutes(), "computed production schedule");

    Ok(ProductionSchedule { spans })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
    use proptest::prelude::*;

    fn naive(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 14)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_default_schedule() {
        let finish = naive(19, 0);
        let plan = schedule(&StageDurations::default(), finish).unwrap();

        assert_eq!(plan.production_start(), finish - Duration::minutes(235));
        assert_eq!(plan.span(Stage::Back).start, finish - Duration::minutes(30));
        assert_eq!(plan.finish(), finish);
        assert_eq!(plan.production_start(), naive(15, 5));
    }

    #[test]
    fn test_spans_are_contiguous() {
        let plan = schedule(&StageDurations::default(), naive(20, 0)).unwrap();
        for pair in plan.spans().windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(plan.span(Stage::Knet).start, plan.production_start());
    }

    #[test]
    fn test_overrides_keep_remaining_defaults() {
        let durations = StageDurations::with_overrides(Some(20), None, None, Some(90), None);
        assert_eq!(durations.knet, 20);
        assert_eq!(durations.stockgare, 120);
        assert_eq!(durations.stueckgare, 90);
        assert_eq!(durations.total_minutes(), 20 + 120 + 15 + 90 + 30);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let durations: StageDurations = serde_json::from_str(r#"{"back": 5}"#).unwrap();
        assert_eq!(durations.back, 5);
        assert_eq!(durations.knet, 10);
        assert_eq!(durations.stockgare, 120);
    }

    #[test]
    fn test_zone_is_preserved() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let finish: DateTime<FixedOffset> = offset.with_ymd_and_hms(2025, 6, 14, 19, 0, 0).unwrap();
        let plan = schedule(&StageDurations::default(), finish).unwrap();
        assert_eq!(plan.production_start().offset(), &offset);
        assert_eq!(plan.production_start().to_rfc3339(), "2025-06-14T15:05:00+02:00");
    }

    #[test]
    fn test_zero_durations_collapse() {
        let durations = StageDurations::with_overrides(Some(0), Some(0), Some(0), Some(0), Some(0));
        let finish = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let plan = schedule(&durations, finish).unwrap();
        assert!(plan.boundaries().iter().all(|(_, at)| *at == finish));
    }

    #[test]
    fn test_boundary_names_in_order() {
        let plan = schedule(&StageDurations::default(), naive(19, 0)).unwrap();
        let names: Vec<_> = plan.boundaries().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "produktion_start",
                "knet_start",
                "knet_ende",
                "stockgare_start",
                "stockgare_ende",
                "portionier_start",
                "portionier_ende",
                "stueckgare_start",
                "stueckgare_ende",
                "back_start",
                "back_ende",
                "fertigstellung",
            ]
        );
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let plan = schedule(&StageDurations::default(), naive(19, 0)).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["fertigstellung"], "2025-06-14T19:00:00");
        assert_eq!(json["back_start"], "2025-06-14T18:30:00");
        assert_eq!(json["produktion_start"], "2025-06-14T15:05:00");
    }

    #[test]
    fn test_finish_near_minimum_date_is_out_of_range() {
        let finish = NaiveDateTime::MIN + Duration::minutes(100);
        let err = schedule(&StageDurations::default(), finish).unwrap_err();
        // back and stueckgare fit, portionier does not
        assert_eq!(err, CalcError::TimeOutOfRange { stage: Stage::Portionier });
        assert_eq!(err.kind(), crate::dough::ErrorKind::TimeOutOfRange);

        let plan = schedule(&StageDurations::default(), finish + Duration::minutes(135)).unwrap();
        assert_eq!(plan.production_start(), NaiveDateTime::MIN);
    }

    proptest! {
        #[test]
        fn prop_total_duration_matches(
            knet in 0u32..600,
            stockgare in 0u32..4000,
            portionier in 0u32..600,
            stueckgare in 0u32..4000,
            back in 0u32..600,
        ) {
            let durations = StageDurations { knet, stockgare, portionier, stueckgare, back };
            let finish = naive(19, 0);
            let plan = schedule(&durations, finish).unwrap();

            let total = Duration::minutes(durations.total_minutes() as i64);
            prop_assert_eq!(plan.production_start() + total, plan.finish());
            for span in plan.spans() {
                prop_assert_eq!(span.end - span.start, Duration::minutes(i64::from(durations.minutes(span.stage))));
            }
            for pair in plan.spans().windows(2) {
                prop_assert_eq!(pair[0].end, pair[1].start);
            }
        }
    }
}
