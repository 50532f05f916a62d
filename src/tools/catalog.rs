//! Catalog Tools
//!
//! Read-only pizza style and preferment listings.

use serde::Serialize;

use crate::models::{PizzaStyle, PrefermentMethod, PIZZA_STYLES, PREFERMENT_METHODS};

/// Response envelope for catalog listings
#[derive(Debug, Serialize)]
pub struct CatalogResponse<T: 'static> {
    pub success: bool,
    pub data: &'static [T],
    pub count: usize,
}

pub fn list_pizza_styles() -> CatalogResponse<PizzaStyle> {
    CatalogResponse {
        success: true,
        data: PIZZA_STYLES,
        count: PIZZA_STYLES.len(),
    }
}

pub fn list_preferment_methods() -> CatalogResponse<PrefermentMethod> {
    CatalogResponse {
        success: true,
        data: PREFERMENT_METHODS,
        count: PREFERMENT_METHODS.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pizza_styles_envelope() {
        let json = serde_json::to_value(list_pizza_styles()).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 5);
        assert_eq!(json["data"][0]["name"], "Neapolitan");
        assert_eq!(json["data"][0]["characteristics"][3], "Wood-fired oven");
    }

    #[test]
    fn test_preferment_envelope() {
        let json = serde_json::to_value(list_preferment_methods()).unwrap();
        assert_eq!(json["count"], 4);
        assert_eq!(json["data"][1]["name"], "Biga");
        assert_eq!(json["data"][1]["water_ratio"], 0.45);
    }
}
