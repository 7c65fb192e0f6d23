use std::{collections::BTreeMap, fmt, str::FromStr};

use crate::form::{Field, FormState};

/// Per-field validation messages, iterated in field declaration order.
pub type FormErrors = BTreeMap<Field, &'static str>;

/// Decides when a numeric field counts as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenceRule {
    /// Only an unset field is missing. Zero is a valid answer.
    #[default]
    Explicit,
    /// Unset and zero are both missing, like a falsy check on the raw value.
    Truthy,
}

impl PresenceRule {
    pub fn is_missing(self, value: Option<f64>) -> bool {
        match (self, value) {
            (_, None) => true,
            (PresenceRule::Explicit, Some(_)) => false,
            (PresenceRule::Truthy, Some(v)) => v == 0.0,
        }
    }
}

impl fmt::Display for PresenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresenceRule::Explicit => write!(f, "explicit"),
            PresenceRule::Truthy => write!(f, "truthy"),
        }
    }
}

impl FromStr for PresenceRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "explicit" => Ok(PresenceRule::Explicit),
            "truthy" => Ok(PresenceRule::Truthy),
            other => Err(format!("unknown presence rule: {other}")),
        }
    }
}

/// Computes the required-field errors of a form.
///
/// The model selector always has a value and is never reported.
///
/// # Args
/// * `form` - The form to check.
/// * `rule` - What counts as a missing value.
///
/// # Returns
/// One entry per missing field, empty if the form can be submitted.
pub fn validate(form: &FormState, rule: PresenceRule) -> FormErrors {
    Field::ALL
        .iter()
        .filter(|field| rule.is_missing(form.get(**field)))
        .map(|field| (*field, field.required_message()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ModelChoice;

    fn filled(value: f64) -> FormState {
        let mut form = FormState::new();
        for field in Field::ALL {
            form.set(field, Some(value));
        }
        form
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate(&FormState::new(), PresenceRule::Explicit);

        let got: Vec<_> = errors.into_iter().collect();
        assert_eq!(
            got,
            vec![
                (Field::Age, "Age is required"),
                (Field::SleepHours, "Sleep Hours required"),
                (Field::TeaCoffeePerDay, "Tea / Coffee is required"),
                (Field::ExerciseDays, "Exercise Days required"),
                (Field::HealthyMeals, "Healthy Meal required"),
                (Field::MealsPerDay, "Meals Per Day required"),
            ]
        );
    }

    #[test]
    fn empty_form_is_identical_under_both_rules() {
        let form = FormState::new();
        assert_eq!(
            validate(&form, PresenceRule::Explicit),
            validate(&form, PresenceRule::Truthy)
        );
    }

    #[test]
    fn filled_form_passes_for_both_models() {
        for model in ModelChoice::ALL {
            let mut form = filled(3.0);
            form.set_model(model);
            assert!(validate(&form, PresenceRule::Explicit).is_empty());
            assert!(validate(&form, PresenceRule::Truthy).is_empty());
        }
    }

    #[test]
    fn truthy_rule_treats_zero_as_missing() {
        let mut form = filled(2.0);
        form.set(Field::TeaCoffeePerDay, Some(0.0));

        let errors = validate(&form, PresenceRule::Truthy);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::TeaCoffeePerDay], "Tea / Coffee is required");
    }

    #[test]
    fn explicit_rule_accepts_zero() {
        let mut form = filled(2.0);
        form.set(Field::TeaCoffeePerDay, Some(0.0));
        form.set(Field::ExerciseDays, Some(0.0));

        assert!(validate(&form, PresenceRule::Explicit).is_empty());
    }

    #[test]
    fn partial_form_reports_only_missing_fields() {
        let mut form = FormState::new();
        form.set(Field::Age, Some(30.0));
        form.set(Field::MealsPerDay, Some(3.0));

        let errors = validate(&form, PresenceRule::Explicit);
        let fields: Vec<_> = errors.keys().copied().collect();
        assert_eq!(
            fields,
            vec![
                Field::SleepHours,
                Field::TeaCoffeePerDay,
                Field::ExerciseDays,
                Field::HealthyMeals
            ]
        );
    }

    #[test]
    fn presence_rule_parses() {
        assert_eq!("Truthy".parse::<PresenceRule>(), Ok(PresenceRule::Truthy));
        assert_eq!(" explicit".parse::<PresenceRule>(), Ok(PresenceRule::Explicit));
        assert!("falsy".parse::<PresenceRule>().is_err());
    }
}
