use serde::{Deserialize, Serialize};

use crate::form::Field;

/// Request body of `POST /predict`, also echoed back in the response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PredictionInput {
    pub age: f64,
    pub sleep_hours: f64,
    pub tea_coffee_per_day: f64,
    pub exercise_days: f64,
    pub healthy_meals: f64,
    pub meals_per_day: f64,
}

impl PredictionInput {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Age => self.age,
            Field::SleepHours => self.sleep_hours,
            Field::TeaCoffeePerDay => self.tea_coffee_per_day,
            Field::ExerciseDays => self.exercise_days,
            Field::HealthyMeals => self.healthy_meals,
            Field::MealsPerDay => self.meals_per_day,
        }
    }

    /// Values paired with their field, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL.into_iter().map(|field| (field, self.get(field)))
    }
}

/// Model that produced a prediction, as named by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelName {
    LogisticRegression,
    RandomForest,
}

impl ModelName {
    pub fn display_name(self) -> &'static str {
        match self {
            ModelName::LogisticRegression => "Logistic Regression",
            ModelName::RandomForest => "Random Forest",
        }
    }
}

/// Predicted lifestyle class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum HealthStatus {
    Good,
    Average,
    Poor,
}

impl HealthStatus {
    pub fn label(self) -> &'static str {
        match self {
            HealthStatus::Good => "Good",
            HealthStatus::Average => "Average",
            HealthStatus::Poor => "Poor",
        }
    }
}

/// Successful response body of `POST /predict`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PredictionResult {
    pub model: ModelName,
    pub input: PredictionInput,
    pub prediction: HealthStatus,
}

/// Self-description served at `GET /`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    #[serde(default)]
    pub endpoints: serde_json::Value,
}

/// Error payload the service attaches to 4xx/5xx answers.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_serializes_with_wire_names() {
        let input = PredictionInput {
            age: 30.0,
            sleep_hours: 6.5,
            tea_coffee_per_day: 2.0,
            exercise_days: 3.0,
            healthy_meals: 2.0,
            meals_per_day: 3.0,
        };

        let value = serde_json::to_value(input).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 6);
        for (field, v) in input.entries() {
            assert_eq!(obj[field.wire_name()].as_f64(), Some(v));
        }
    }

    #[test]
    fn result_parses_service_body() {
        let body = r#"{
            "model": "logistic_regression",
            "input": {"Age": 30, "SleepHours": 6, "TeaCoffeePerDay": 2,
                      "ExerciseDays": 3, "HealthyMeals": 2, "MealsPerDay": 3},
            "prediction": "Average"
        }"#;

        let result: PredictionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.model, ModelName::LogisticRegression);
        assert_eq!(result.prediction, HealthStatus::Average);
        assert_eq!(result.input.sleep_hours, 6.0);
    }

    #[test]
    fn result_rejects_unknown_label() {
        let body = r#"{
            "model": "random_forest",
            "input": {"Age": 30, "SleepHours": 6, "TeaCoffeePerDay": 2,
                      "ExerciseDays": 3, "HealthyMeals": 2, "MealsPerDay": 3},
            "prediction": "Excellent"
        }"#;

        assert!(serde_json::from_str::<PredictionResult>(body).is_err());
    }

    #[test]
    fn result_rejects_missing_input_field() {
        let body = r#"{
            "model": "random_forest",
            "input": {"Age": 30, "SleepHours": 6},
            "prediction": "Good"
        }"#;

        assert!(serde_json::from_str::<PredictionResult>(body).is_err());
    }
}
