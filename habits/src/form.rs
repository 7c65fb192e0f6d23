use crate::wire::PredictionInput;

/// The six numeric inputs of the form, in declaration order.
///
/// The derived ordering follows the declaration, so ordered maps keyed by
/// `Field` iterate in the same order the form shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Age,
    SleepHours,
    TeaCoffeePerDay,
    ExerciseDays,
    HealthyMeals,
    MealsPerDay,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Age,
        Field::SleepHours,
        Field::TeaCoffeePerDay,
        Field::ExerciseDays,
        Field::HealthyMeals,
        Field::MealsPerDay,
    ];

    /// Key used for this field in request and response bodies.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::SleepHours => "SleepHours",
            Field::TeaCoffeePerDay => "TeaCoffeePerDay",
            Field::ExerciseDays => "ExerciseDays",
            Field::HealthyMeals => "HealthyMeals",
            Field::MealsPerDay => "MealsPerDay",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Age => "Your Age",
            Field::SleepHours => "Sleep Hours",
            Field::TeaCoffeePerDay => "Tea / Coffee Per Day",
            Field::ExerciseDays => "Exercise Days",
            Field::HealthyMeals => "Healthy Meals Per Day",
            Field::MealsPerDay => "Meals Per Day",
        }
    }

    /// Message reported by the validator when the field is missing.
    pub fn required_message(self) -> &'static str {
        match self {
            Field::Age => "Age is required",
            Field::SleepHours => "Sleep Hours required",
            Field::TeaCoffeePerDay => "Tea / Coffee is required",
            Field::ExerciseDays => "Exercise Days required",
            Field::HealthyMeals => "Healthy Meal required",
            Field::MealsPerDay => "Meals Per Day required",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Which model the service should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelChoice {
    Lr,
    #[default]
    Rf,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 2] = [ModelChoice::Lr, ModelChoice::Rf];

    /// Value of the `model` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            ModelChoice::Lr => "lr",
            ModelChoice::Rf => "rf",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ModelChoice::Lr => "Logistic Regression",
            ModelChoice::Rf => "Random Forest",
        }
    }

    /// Returns the other model.
    pub fn toggle(self) -> Self {
        match self {
            ModelChoice::Lr => ModelChoice::Rf,
            ModelChoice::Rf => ModelChoice::Lr,
        }
    }
}

/// Parses the text of a numeric input.
///
/// Blank text is unset. Text that is not a finite number is also unset, the
/// same way a browser number input reports an empty value for garbage.
pub fn parse_input(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Everything the user has typed so far.
///
/// Fields are independently nullable, so the state is never partially
/// invalid. Non-finite numbers are never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: [Option<f64>; 6],
    model: ModelChoice,
}

impl FormState {
    /// Creates a form with every field unset and the default model.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        self.values[field.index()]
    }

    /// Sets or clears a field. Non-finite values clear it.
    pub fn set(&mut self, field: Field, value: Option<f64>) {
        self.values[field.index()] = value.filter(|v| v.is_finite());
    }

    /// Sets a field from raw input text, see [`parse_input`].
    pub fn set_input(&mut self, field: Field, text: &str) {
        self.set(field, parse_input(text));
    }

    pub fn model(&self) -> ModelChoice {
        self.model
    }

    pub fn set_model(&mut self, model: ModelChoice) {
        self.model = model;
    }

    /// Unsets every field. The model selection is kept.
    pub fn clear(&mut self) {
        self.values = [None; 6];
    }

    /// Builds the request body if every field is set.
    ///
    /// # Returns
    /// `None` if at least one field is unset.
    pub fn to_input(&self) -> Option<PredictionInput> {
        Some(PredictionInput {
            age: self.get(Field::Age)?,
            sleep_hours: self.get(Field::SleepHours)?,
            tea_coffee_per_day: self.get(Field::TeaCoffeePerDay)?,
            exercise_days: self.get(Field::ExerciseDays)?,
            healthy_meals: self.get(Field::HealthyMeals)?,
            meals_per_day: self.get(Field::MealsPerDay)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_is_unset_with_random_forest() {
        let form = FormState::new();
        assert!(Field::ALL.iter().all(|f| form.get(*f).is_none()));
        assert_eq!(form.model(), ModelChoice::Rf);
        assert!(form.to_input().is_none());
    }

    #[test]
    fn parse_input_handles_blank_numbers_and_garbage() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("   "), None);
        assert_eq!(parse_input("7.5"), Some(7.5));
        assert_eq!(parse_input(" 30 "), Some(30.0));
        assert_eq!(parse_input("0"), Some(0.0));
        assert_eq!(parse_input("."), None);
        assert_eq!(parse_input("1.2.3"), None);
        assert_eq!(parse_input("NaN"), None);
        assert_eq!(parse_input("inf"), None);
    }

    #[test]
    fn set_rejects_non_finite_values() {
        let mut form = FormState::new();
        form.set(Field::Age, Some(f64::NAN));
        assert_eq!(form.get(Field::Age), None);

        form.set(Field::Age, Some(41.0));
        form.set(Field::Age, Some(f64::INFINITY));
        assert_eq!(form.get(Field::Age), None);
    }

    #[test]
    fn to_input_maps_every_field() {
        let mut form = FormState::new();
        for (i, field) in Field::ALL.iter().enumerate() {
            form.set(*field, Some(i as f64 + 1.0));
        }

        let input = form.to_input().unwrap();
        assert_eq!(input.age, 1.0);
        assert_eq!(input.sleep_hours, 2.0);
        assert_eq!(input.tea_coffee_per_day, 3.0);
        assert_eq!(input.exercise_days, 4.0);
        assert_eq!(input.healthy_meals, 5.0);
        assert_eq!(input.meals_per_day, 6.0);
    }

    #[test]
    fn clear_keeps_model() {
        let mut form = FormState::new();
        form.set_model(ModelChoice::Lr);
        form.set_input(Field::MealsPerDay, "3");
        form.clear();

        assert_eq!(form.get(Field::MealsPerDay), None);
        assert_eq!(form.model(), ModelChoice::Lr);
    }

    #[test]
    fn model_codes() {
        assert_eq!(ModelChoice::Lr.code(), "lr");
        assert_eq!(ModelChoice::Rf.code(), "rf");
        assert_eq!(ModelChoice::Rf.toggle(), ModelChoice::Lr);
    }
}
