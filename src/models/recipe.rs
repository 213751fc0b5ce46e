use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::RECIPE_PAGE_SIZE;

/// Image shown when a recipe has none
pub const DEFAULT_RECIPE_IMAGE: &str = "/images/default-recipe.jpg";

/// Read-only recipe snapshot (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default)]
    pub cook_time: u32,
    #[serde(default)]
    pub calories_per_serving: Option<f64>,
    #[serde(default)]
    pub protein_g: Option<f64>,
    #[serde(default)]
    pub carb_g: Option<f64>,
    #[serde(default)]
    pub fat_g: Option<f64>,
    #[serde(default)]
    pub fiber_g: Option<f64>,
    #[serde(default)]
    pub sodium_mg: Option<f64>,
    #[serde(default)]
    pub main_ingredients: Vec<Value>,
    #[serde(default)]
    pub sub_ingredients: Vec<Value>,
    #[serde(default)]
    pub seasonings: Vec<Value>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub meal_type: String,
    #[serde(default)]
    pub cuisine_type: String,
    #[serde(default)]
    pub health_tips: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub total_ratings: Option<u32>,
}

impl Recipe {
    pub fn total_minutes(&self) -> u32 {
        self.prep_time + self.cook_time
    }

    pub fn image(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_RECIPE_IMAGE)
    }

    pub fn difficulty(&self) -> Difficulty {
        Difficulty::parse(&self.difficulty)
    }

    /// "250 kcal"
    pub fn calories_label(&self) -> Option<String> {
        self.calories_per_serving
            .map(|kcal| format!("{} kcal", kcal.round() as i64))
    }

    /// Ingredient entries may be plain strings or `{name, amount}` objects
    pub fn ingredient_label(value: &Value) -> String {
        match value {
            Value::String(name) => name.clone(),
            Value::Object(fields) => {
                let name = fields.get("name").and_then(Value::as_str).unwrap_or_default();
                match fields.get("amount").and_then(Value::as_str) {
                    Some(amount) if !amount.is_empty() => format!("{} {}", name, amount),
                    _ => name.to_string(),
                }
            }
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl Difficulty {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "easy" | "쉬움" => Difficulty::Easy,
            "medium" | "보통" => Difficulty::Medium,
            "hard" | "어려움" => Difficulty::Hard,
            _ => Difficulty::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "쉬움",
            Difficulty::Medium => "보통",
            Difficulty::Hard => "어려움",
            Difficulty::Unknown => "-",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Difficulty::Easy => "badge bg-green-100 text-green-800",
            Difficulty::Medium => "badge bg-yellow-100 text-yellow-800",
            Difficulty::Hard => "badge bg-red-100 text-red-800",
            Difficulty::Unknown => "badge bg-gray-100 text-gray-800",
        }
    }
}

/// `GET /recipes` filters
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeQuery {
    pub page: u32,
    pub size: u32,
    pub meal_type: Option<String>,
    pub cuisine_type: Option<String>,
    pub search: Option<String>,
}

impl Default for RecipeQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: RECIPE_PAGE_SIZE,
            meal_type: None,
            cuisine_type: None,
            search: None,
        }
    }
}

impl RecipeQuery {
    /// Query-string pairs; empty filters are omitted
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ];
        let optional = [
            ("meal_type", &self.meal_type),
            ("cuisine_type", &self.cuisine_type),
            ("search", &self.search),
        ];
        for (key, value) in optional {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                pairs.push((key.to_string(), value.to_string()));
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kimchi_stew() -> Recipe {
        serde_json::from_value(json!({
            "id": "1",
            "title": "김치찌개",
            "description": "맛있는 김치찌개",
            "calories_per_serving": 250,
            "prep_time": 10,
            "cook_time": 20,
            "difficulty": "easy",
            "meal_type": "lunch",
            "cuisine_type": "korean"
        }))
        .unwrap()
    }

    #[test]
    fn test_sparse_listing_item_decodes() {
        let recipe = kimchi_stew();
        assert_eq!(recipe.title, "김치찌개");
        assert!(recipe.instructions.is_empty());
        assert_eq!(recipe.avg_rating, None);
    }

    #[test]
    fn test_card_labels() {
        let recipe = kimchi_stew();
        assert_eq!(recipe.total_minutes(), 30);
        assert_eq!(recipe.calories_label().as_deref(), Some("250 kcal"));
        assert_eq!(recipe.difficulty().label(), "쉬움");
        assert!(recipe.difficulty().badge_class().contains("bg-green-100"));
        assert_eq!(recipe.image(), DEFAULT_RECIPE_IMAGE);
    }

    #[test]
    fn test_ingredient_labels() {
        assert_eq!(Recipe::ingredient_label(&json!("김치")), "김치");
        assert_eq!(
            Recipe::ingredient_label(&json!({ "name": "두부", "amount": "1/2모" })),
            "두부 1/2모"
        );
    }

    #[test]
    fn test_query_skips_empty_filters() {
        let query = RecipeQuery {
            meal_type: Some("점심".to_string()),
            search: Some("  ".to_string()),
            ..Default::default()
        };
        let pairs = query.to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "1".to_string()),
                ("size".to_string(), "12".to_string()),
                ("meal_type".to_string(), "점심".to_string()),
            ]
        );
    }
}
