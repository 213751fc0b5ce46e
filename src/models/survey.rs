use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

/// Single-valued survey answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    Age,
    Gender,
    Height,
    Weight,
    Email,
    Name,
    Phone,
    ActivityLevel,
    HealthStatus,
    MealTarget,
    DietGoal,
    WeeklyBudget,
    HouseholdSize,
    SpiceTolerance,
    CookingExperience,
    CookingFrequency,
}

impl ScalarField {
    /// Fields that must be filled before submission
    pub const REQUIRED: [ScalarField; 2] = [ScalarField::Age, ScalarField::Email];

    pub fn key(self) -> &'static str {
        match self {
            ScalarField::Age => "age",
            ScalarField::Gender => "gender",
            ScalarField::Height => "height",
            ScalarField::Weight => "weight",
            ScalarField::Email => "email",
            ScalarField::Name => "name",
            ScalarField::Phone => "phone",
            ScalarField::ActivityLevel => "activity_level",
            ScalarField::HealthStatus => "health_status",
            ScalarField::MealTarget => "meal_target",
            ScalarField::DietGoal => "diet_goal",
            ScalarField::WeeklyBudget => "weekly_budget",
            ScalarField::HouseholdSize => "household_size",
            ScalarField::SpiceTolerance => "spice_tolerance",
            ScalarField::CookingExperience => "cooking_experience",
            ScalarField::CookingFrequency => "cooking_frequency",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(
            self,
            ScalarField::Height | ScalarField::Weight | ScalarField::HouseholdSize
        )
    }
}

/// Multi-select survey answers with set semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    DiagnosedDiseases,
    HealthInterests,
    DietaryRestrictions,
    NutritionPreferences,
    CookingStyles,
    PreferredMeats,
    PreferredSeafoods,
    AvoidFoods,
    Allergens,
    AvailableEquipment,
    PreferredCuisines,
}

/// In-progress, not yet submitted survey answers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "whole_number")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "whole_number")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "whole_number")]
    pub household_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spice_tolerance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_frequency: Option<String>,

    pub diagnosed_diseases: Vec<String>,
    pub health_interests: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub nutrition_preferences: Vec<String>,
    pub cooking_styles: Vec<String>,
    pub preferred_meats: Vec<String>,
    pub preferred_seafoods: Vec<String>,
    pub avoid_foods: Vec<String>,
    pub allergens: Vec<String>,
    pub available_equipment: Vec<String>,
    pub preferred_cuisines: Vec<String>,
    pub meal_times: BTreeMap<String, String>,
}

impl SurveyDraft {
    /// Overwrite a scalar answer. Blank input clears the field; numeric
    /// fields that fail to parse are cleared as well.
    pub fn set_field(&mut self, field: ScalarField, value: &str) {
        let value = value.trim();
        let text = (!value.is_empty()).then(|| value.to_string());
        if field.is_numeric() {
            let number = text
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v >= 0.0);
            match field {
                ScalarField::Height => self.height = number,
                ScalarField::Weight => self.weight = number,
                _ => self.household_size = number,
            }
            return;
        }
        if let Some(slot) = self.text_slot(field) {
            *slot = text;
        }
    }

    /// Current value of a scalar answer, rendered as text
    pub fn field(&self, field: ScalarField) -> Option<String> {
        match field {
            ScalarField::Height => self.height.map(|v| v.to_string()),
            ScalarField::Weight => self.weight.map(|v| v.to_string()),
            ScalarField::HouseholdSize => self.household_size.map(|v| v.to_string()),
            ScalarField::Age => self.age.clone(),
            ScalarField::Gender => self.gender.clone(),
            ScalarField::Email => self.email.clone(),
            ScalarField::Name => self.name.clone(),
            ScalarField::Phone => self.phone.clone(),
            ScalarField::ActivityLevel => self.activity_level.clone(),
            ScalarField::HealthStatus => self.health_status.clone(),
            ScalarField::MealTarget => self.meal_target.clone(),
            ScalarField::DietGoal => self.diet_goal.clone(),
            ScalarField::WeeklyBudget => self.weekly_budget.clone(),
            ScalarField::SpiceTolerance => self.spice_tolerance.clone(),
            ScalarField::CookingExperience => self.cooking_experience.clone(),
            ScalarField::CookingFrequency => self.cooking_frequency.clone(),
        }
    }

    fn text_slot(&mut self, field: ScalarField) -> Option<&mut Option<String>> {
        let slot = match field {
            ScalarField::Age => &mut self.age,
            ScalarField::Gender => &mut self.gender,
            ScalarField::Email => &mut self.email,
            ScalarField::Name => &mut self.name,
            ScalarField::Phone => &mut self.phone,
            ScalarField::ActivityLevel => &mut self.activity_level,
            ScalarField::HealthStatus => &mut self.health_status,
            ScalarField::MealTarget => &mut self.meal_target,
            ScalarField::DietGoal => &mut self.diet_goal,
            ScalarField::WeeklyBudget => &mut self.weekly_budget,
            ScalarField::SpiceTolerance => &mut self.spice_tolerance,
            ScalarField::CookingExperience => &mut self.cooking_experience,
            ScalarField::CookingFrequency => &mut self.cooking_frequency,
            ScalarField::Height | ScalarField::Weight | ScalarField::HouseholdSize => return None,
        };
        Some(slot)
    }

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::DiagnosedDiseases => &self.diagnosed_diseases,
            ListField::HealthInterests => &self.health_interests,
            ListField::DietaryRestrictions => &self.dietary_restrictions,
            ListField::NutritionPreferences => &self.nutrition_preferences,
            ListField::CookingStyles => &self.cooking_styles,
            ListField::PreferredMeats => &self.preferred_meats,
            ListField::PreferredSeafoods => &self.preferred_seafoods,
            ListField::AvoidFoods => &self.avoid_foods,
            ListField::Allergens => &self.allergens,
            ListField::AvailableEquipment => &self.available_equipment,
            ListField::PreferredCuisines => &self.preferred_cuisines,
        }
    }

    fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::DiagnosedDiseases => &mut self.diagnosed_diseases,
            ListField::HealthInterests => &mut self.health_interests,
            ListField::DietaryRestrictions => &mut self.dietary_restrictions,
            ListField::NutritionPreferences => &mut self.nutrition_preferences,
            ListField::CookingStyles => &mut self.cooking_styles,
            ListField::PreferredMeats => &mut self.preferred_meats,
            ListField::PreferredSeafoods => &mut self.preferred_seafoods,
            ListField::AvoidFoods => &mut self.avoid_foods,
            ListField::Allergens => &mut self.allergens,
            ListField::AvailableEquipment => &mut self.available_equipment,
            ListField::PreferredCuisines => &mut self.preferred_cuisines,
        }
    }

    pub fn contains(&self, field: ListField, value: &str) -> bool {
        self.list(field).iter().any(|v| v == value)
    }

    /// Remove `value` if present, append it otherwise
    pub fn toggle(&mut self, field: ListField, value: &str) {
        let list = self.list_mut(field);
        if list.iter().any(|v| v == value) {
            list.retain(|v| v != value);
        } else {
            list.push(value.to_string());
        }
    }

    /// Required fields that are still blank
    pub fn missing_required(&self) -> Vec<&'static str> {
        ScalarField::REQUIRED
            .iter()
            .filter(|field| {
                self.field(**field)
                    .map(|value| value.trim().is_empty())
                    .unwrap_or(true)
            })
            .map(|field| field.key())
            .collect()
    }
}

/// Measurements are stored as `f64` so backend values like `172.5` decode;
/// whole numbers still go out as JSON integers.
fn whole_number<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) if v.fract() == 0.0 && *v >= 0.0 && *v <= u64::MAX as f64 => serializer.serialize_u64(*v as u64),
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_none(),
    }
}

/// Stored survey as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub id: String,
    #[serde(default)]
    pub wellness_score: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub answers: SurveyDraft,
}

/// `POST /survey/wellness` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessResult {
    #[serde(default)]
    pub survey_id: Option<String>,
    pub wellness_score: f64,
    #[serde(default)]
    pub health_category: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub improvement_areas: Vec<String>,
}

impl WellnessResult {
    /// Share of the score ring to fill, clamped to 0..=1
    pub fn score_fraction(&self) -> f64 {
        (self.wellness_score / 100.0).clamp(0.0, 1.0)
    }

    pub fn category(&self) -> HealthCategory {
        HealthCategory::parse(&self.health_category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthCategory {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthCategory {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Excellent" => HealthCategory::Excellent,
            "Good" => HealthCategory::Good,
            "Fair" => HealthCategory::Fair,
            _ => HealthCategory::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthCategory::Excellent => "매우 좋음",
            HealthCategory::Good => "좋음",
            HealthCategory::Fair => "보통",
            HealthCategory::Poor => "개선 필요",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            HealthCategory::Excellent => "text-green-600",
            HealthCategory::Good => "text-blue-600",
            HealthCategory::Fair => "text-yellow-600",
            HealthCategory::Poor => "text-red-600",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ALL_LISTS: [ListField; 11] = [
        ListField::DiagnosedDiseases,
        ListField::HealthInterests,
        ListField::DietaryRestrictions,
        ListField::NutritionPreferences,
        ListField::CookingStyles,
        ListField::PreferredMeats,
        ListField::PreferredSeafoods,
        ListField::AvoidFoods,
        ListField::Allergens,
        ListField::AvailableEquipment,
        ListField::PreferredCuisines,
    ];

    #[test]
    fn test_new_draft_is_empty() {
        let draft = SurveyDraft::default();
        for field in ALL_LISTS {
            assert!(draft.list(field).is_empty());
        }
        assert_eq!(draft.field(ScalarField::Age), None);
        assert_eq!(draft.missing_required(), vec!["age", "email"]);
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let mut draft = SurveyDraft::default();
        let values = ["당뇨병", "고혈압", "당뇨병", "없음", "고혈압", "당뇨병"];
        for value in values {
            draft.toggle(ListField::DiagnosedDiseases, value);
            let list = draft.list(ListField::DiagnosedDiseases);
            let mut deduped = list.to_vec();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), list.len());
        }
        assert_eq!(draft.list(ListField::DiagnosedDiseases), ["없음", "당뇨병"]);
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        for field in ALL_LISTS {
            let mut draft = SurveyDraft::default();
            draft.toggle(field, "a");
            let before = draft.clone();

            draft.toggle(field, "b");
            draft.toggle(field, "b");
            assert_eq!(draft, before);

            draft.toggle(field, "a");
            assert!(!draft.contains(field, "a"));
            draft.toggle(field, "a");
            assert!(draft.contains(field, "a"));
        }
    }

    #[test]
    fn test_set_field_overwrites_and_clears() {
        let mut draft = SurveyDraft::default();
        draft.set_field(ScalarField::Age, "30-39");
        draft.set_field(ScalarField::Age, "40-49");
        assert_eq!(draft.age.as_deref(), Some("40-49"));

        draft.set_field(ScalarField::Height, "172");
        assert_eq!(draft.height, Some(172.0));
        assert_eq!(draft.field(ScalarField::Height).as_deref(), Some("172"));
        draft.set_field(ScalarField::Height, "tall");
        assert_eq!(draft.height, None);

        draft.set_field(ScalarField::Email, "   ");
        assert_eq!(draft.email, None);
    }

    #[test]
    fn test_submission_body_omits_absent_scalars() {
        let mut draft = SurveyDraft::default();
        draft.set_field(ScalarField::Age, "30-39");
        draft.set_field(ScalarField::Email, "a@b.com");

        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["age"], "30-39");
        assert_eq!(body["email"], "a@b.com");
        assert!(body.get("gender").is_none());
        assert!(body.get("height").is_none());
        assert_eq!(body["allergens"], json!([]));
        assert_eq!(body["meal_times"], json!({}));
    }

    #[test]
    fn test_measurements_sent_as_integers() {
        let mut draft = SurveyDraft::default();
        draft.set_field(ScalarField::Height, "172");
        draft.set_field(ScalarField::Weight, "65.5");
        draft.set_field(ScalarField::HouseholdSize, "3");

        let body = serde_json::to_string(&draft).unwrap();
        assert!(body.contains(r#""height":172,"#));
        assert!(body.contains(r#""weight":65.5,"#));
        assert!(body.contains(r#""household_size":3,"#));
    }

    #[test]
    fn test_stored_survey_with_fractional_measurements_decodes() {
        let survey: SurveyResponse = serde_json::from_value(json!({
            "id": "S1",
            "age": "30-39",
            "email": "a@b.com",
            "height": 172.5,
            "weight": 64,
            "wellness_score": 72.0
        }))
        .unwrap();

        assert_eq!(survey.id, "S1");
        assert_eq!(survey.answers.height, Some(172.5));
        assert_eq!(survey.answers.weight, Some(64.0));
        assert_eq!(survey.answers.field(ScalarField::Height).as_deref(), Some("172.5"));
        assert_eq!(survey.answers.field(ScalarField::Weight).as_deref(), Some("64"));
        assert_eq!(survey.answers.household_size, None);
    }

    #[test]
    fn test_health_category_labels() {
        assert_eq!(HealthCategory::parse("Excellent").label(), "매우 좋음");
        assert_eq!(HealthCategory::parse("Good").label(), "좋음");
        assert_eq!(HealthCategory::parse("Fair").label(), "보통");
        assert_eq!(HealthCategory::parse("Poor").label(), "개선 필요");
        assert_eq!(HealthCategory::parse("unknown"), HealthCategory::Poor);
    }

    #[test]
    fn test_score_fraction_is_clamped() {
        let result: WellnessResult =
            serde_json::from_value(json!({ "wellness_score": 75, "health_category": "Good" })).unwrap();
        assert_eq!(result.score_fraction(), 0.75);

        let result = WellnessResult { wellness_score: 140.0, ..result };
        assert_eq!(result.score_fraction(), 1.0);
    }
}
