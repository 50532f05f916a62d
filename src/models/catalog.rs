//! Pizza style and preferment catalogs
//!
//! Fixed reference data served read-only.

use serde::Serialize;

/// A regional pizza style
#[derive(Debug, Clone, Serialize)]
pub struct PizzaStyle {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub origin: &'static str,
    pub characteristics: &'static [&'static str],
}

/// A preferment method with its typical composition
#[derive(Debug, Clone, Serialize)]
pub struct PrefermentMethod {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub flour_ratio: f64,
    pub water_ratio: f64,
    pub yeast_ratio: f64,
    pub fermentation_time: &'static str,
    pub temperature: &'static str,
}

pub static PIZZA_STYLES: &[PizzaStyle] = &[
    PizzaStyle {
        id: 1,
        name: "Neapolitan",
        description: "Traditional Italian pizza with thin crust, simple toppings, and high-temperature baking",
        origin: "Naples, Italy",
        characteristics: &["Thin crust", "Leopard spotting", "Simple ingredients", "Wood-fired oven"],
    },
    PizzaStyle {
        id: 2,
        name: "New York Style",
        description: "Large, thin-crust pizza that's crispy yet flexible, typically sold by the slice",
        origin: "New York, USA",
        characteristics: &["Large slices", "Thin but sturdy crust", "Foldable", "Generous cheese"],
    },
    PizzaStyle {
        id: 3,
        name: "Chicago Deep Dish",
        description: "Thick-crust pizza baked in a deep pan with cheese on bottom and sauce on top",
        origin: "Chicago, USA",
        characteristics: &["Deep dish", "Thick crust", "Cheese first", "Chunky tomato sauce on top"],
    },
    PizzaStyle {
        id: 4,
        name: "Sicilian",
        description: "Square-cut pizza with thick, airy crust and robust toppings",
        origin: "Sicily, Italy",
        characteristics: &["Square cut", "Thick focaccia-like crust", "Airy texture", "Robust flavors"],
    },
    PizzaStyle {
        id: 5,
        name: "Detroit Style",
        description: "Rectangular pizza with crispy, cheesy edges and sauce on top",
        origin: "Detroit, USA",
        characteristics: &["Rectangular shape", "Crispy edges", "Brick cheese", "Sauce on top"],
    },
];

pub static PREFERMENT_METHODS: &[PrefermentMethod] = &[
    PrefermentMethod {
        id: 1,
        name: "Poolish",
        description: "Flüssiger Vorteig mit gleichen Teilen Mehl und Wasser",
        flour_ratio: 0.5,
        water_ratio: 0.5,
        yeast_ratio: 0.001,
        fermentation_time: "12-16 Stunden",
        temperature: "20-22°C",
    },
    PrefermentMethod {
        id: 2,
        name: "Biga",
        description: "Fester italienischer Vorteig",
        flour_ratio: 1.0,
        water_ratio: 0.45,
        yeast_ratio: 0.001,
        fermentation_time: "12-24 Stunden",
        temperature: "18-20°C",
    },
    PrefermentMethod {
        id: 3,
        name: "Pâte Fermentée",
        description: "Alter Teig als Vorteig verwendet",
        flour_ratio: 1.0,
        water_ratio: 0.6,
        yeast_ratio: 0.02,
        fermentation_time: "8-24 Stunden",
        temperature: "4-6°C",
    },
    PrefermentMethod {
        id: 4,
        name: "Sauerteig",
        description: "Natürlich fermentierter Vorteig mit wilden Hefen",
        flour_ratio: 1.0,
        water_ratio: 1.0,
        yeast_ratio: 0.0,
        fermentation_time: "4-12 Stunden",
        temperature: "24-28°C",
    },
];
