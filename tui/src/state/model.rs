use habits::{Field, FormState};

/// Which control of the form has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Model,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Field(Field::Age),
        Focus::Field(Field::SleepHours),
        Focus::Field(Field::TeaCoffeePerDay),
        Focus::Field(Field::ExerciseDays),
        Focus::Field(Field::HealthyMeals),
        Focus::Field(Field::MealsPerDay),
        Focus::Model,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Raw text of the numeric inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffers {
    texts: [String; 6],
}

impl InputBuffers {
    pub fn get(&self, field: Field) -> &str {
        &self.texts[slot(field)]
    }

    /// Appends `c` if the field would still look like a number.
    ///
    /// # Returns
    /// Whether the character was accepted.
    pub fn push(&mut self, field: Field, c: char) -> bool {
        let text = &mut self.texts[slot(field)];
        let accepted = match c {
            '0'..='9' => true,
            '.' => !text.contains('.'),
            '-' => text.is_empty(),
            _ => false,
        };
        if accepted {
            text.push(c);
        }
        accepted
    }

    pub fn pop(&mut self, field: Field) {
        self.texts[slot(field)].pop();
    }

    pub fn clear(&mut self) {
        self.texts = Default::default();
    }

    /// Copies the parsed value of `field` into the form.
    pub fn sync(&self, field: Field, form: &mut FormState) {
        form.set_input(field, self.get(field));
    }
}

fn slot(field: Field) -> usize {
    Field::ALL.iter().position(|f| *f == field).unwrap_or(0)
}

/// A single line of the events panel.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub level: &'static str,
    pub message: String,
}
