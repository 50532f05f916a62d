//! Data models
//!
//! Value types stored by the repositories and served by the catalog tools.

mod catalog;
mod recipe;
mod widget;

pub use catalog::{PizzaStyle, PrefermentMethod, PIZZA_STYLES, PREFERMENT_METHODS};
pub use recipe::{Recipe, RecipeCreate};
pub use widget::Widget;
