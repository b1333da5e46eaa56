use serde::{Deserialize, Serialize};

pub mod client;
pub mod config;
pub mod state;
pub mod transform;

pub use client::{ClassifyClient, ClassifyError, Concept};
pub use config::{ApiConfig, ConfigError};
pub use state::{Phase, ScreenState};
pub use transform::{prepare_image, PreparedImage};

/// Fixed tip shown when the provider finds no vegetable on the plate.
pub const ADD_VEGETABLES_TIP: &str = "Adicione vegetais em seu prato!";

/// Concept name that clears the vegetable tip.
pub const VEGETABLE_CONCEPT: &str = "vegetable";

/// One row of the result list: a food label plus its confidence rendered
/// as a rounded percentage (e.g. "87%").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateItem {
    pub name: String,
    pub percentage: String,
}

impl From<Concept> for PlateItem {
    fn from(concept: Concept) -> Self {
        Self {
            percentage: format_percentage(concept.value),
            name: concept.name,
        }
    }
}

/// Render a confidence in [0,1] as an integer percentage string,
/// rounded to nearest.
pub fn format_percentage(value: f32) -> String {
    format!("{}%", (value * 100.0).round() as i64)
}

/// Exact, case-sensitive membership test on item names. Duplicate names
/// are allowed in the list.
pub fn contains_food(items: &[PlateItem], name: &str) -> bool {
    items.iter().any(|item| item.name == name)
}

/// Tip for a plate: empty when a vegetable concept is present.
pub fn advisory_message(items: &[PlateItem]) -> String {
    if contains_food(items, VEGETABLE_CONCEPT) {
        String::new()
    } else {
        ADD_VEGETABLES_TIP.to_string()
    }
}
