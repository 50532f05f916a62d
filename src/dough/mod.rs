//! Dough calculation module
//!
//! Pure formulation, scaling, unit conversion and scheduling arithmetic.
//! Nothing in here holds state or performs I/O.

pub mod converter;
pub mod error;
pub mod formulation;
pub mod rounding;
pub mod scaling;
pub mod schedule;
pub mod units;

pub use converter::{convert_length, convert_weight, UnitConverter};
pub use error::{CalcError, CalcResult, ErrorKind};
pub use formulation::{formulate, DoughMasses, SALT_RATIO};
pub use rounding::round_to;
pub use scaling::{scale, IngredientQuantities, ScalingResult};
pub use schedule::{schedule, ProductionSchedule, Stage, StageDurations, StageSpan, Timestamp};
pub use units::{ConversionTable, Quantity, LENGTH_UNITS, WEIGHT_UNITS};
