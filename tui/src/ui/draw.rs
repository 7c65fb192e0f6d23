use habits::{metrics, Field, Pane, PredictionResult};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Frame,
};

use crate::state::model::Focus;
use crate::ui::screens::form::FormScreenState;
use crate::ui::theme::Theme;

use super::{layout, widgets};

/// Input pairs in the order they appear on screen, left to right then top
/// to bottom. Must match the focus cycle.
const ROWS: [(Field, Field); 3] = [
    (Field::Age, Field::SleepHours),
    (Field::TeaCoffeePerDay, Field::ExerciseDays),
    (Field::HealthyMeals, Field::MealsPerDay),
];

/// Draws the entire form screen.
pub fn form_screen(f: &mut Frame, state: &FormScreenState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let session = state.driver.session();
    let (header_area, body_area, events_area) = layout::vertical(area, state.show_events);
    let (form_area, pane_area) = layout::body(body_area);

    f.render_widget(widgets::header(session, state.ctx.base_url()), header_area);
    draw_form(f, form_area, state);

    match session.pane() {
        Pane::Metrics => draw_metrics(f, pane_area),
        Pane::Result(result) => draw_result(f, pane_area, result),
    }

    if let Some(events) = events_area {
        f.render_widget(widgets::events(state.driver.logs()), events);
    }
}

fn draw_form(f: &mut Frame, area: Rect, state: &FormScreenState) {
    let session = state.driver.session();
    let (pairs, model_area, submit_area) = layout::form(area);

    for ((left, right), (left_area, right_area)) in ROWS.iter().zip(pairs) {
        for (field, slot) in [(*left, left_area), (*right, right_area)] {
            let (box_area, error_area) = layout::input(slot);
            let error = session.errors().get(&field).copied();

            f.render_widget(
                widgets::input_box(
                    field,
                    state.buffers.get(field),
                    state.focus == Focus::Field(field),
                    error.is_some(),
                ),
                box_area,
            );
            f.render_widget(widgets::field_error(error), error_area);
        }
    }

    let (selector_area, notice_area) = layout::input(model_area);
    f.render_widget(
        widgets::model_selector(
            session.form().model(),
            state.focus == Focus::Model,
            session.notice().is_some(),
        ),
        selector_area,
    );
    f.render_widget(widgets::field_error(session.notice()), notice_area);

    f.render_widget(widgets::submit_line(session.is_loading()), submit_area);
}

/// Static model-quality summaries.
pub fn draw_metrics(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(widgets::metrics_title(), rows[0]);
    for (i, m) in metrics::ALL.iter().enumerate() {
        f.render_widget(widgets::r2_gauge(m, i), rows[i + 1]);
    }
    f.render_widget(widgets::error_metrics(&metrics::ALL), rows[3]);
}

/// Predicted label and the input that produced it.
pub fn draw_result(f: &mut Frame, area: Rect, result: &PredictionResult) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(widgets::result_title(result), rows[0]);
    f.render_widget(widgets::result_label(result), rows[1]);
    f.render_widget(widgets::result_inputs(result), rows[2]);
}

#[cfg(test)]
pub(crate) mod tests {
    use habits::{HealthStatus, ModelName, PredictionInput};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;

    /// Rendered rows of a buffer as plain text.
    pub(crate) fn rows(buffer: &Buffer) -> Vec<String> {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect()
    }

    pub(crate) fn screen_text(buffer: &Buffer) -> String {
        rows(buffer).join("\n")
    }

    fn sample() -> PredictionResult {
        PredictionResult {
            model: ModelName::LogisticRegression,
            input: PredictionInput {
                age: 30.0,
                sleep_hours: 7.5,
                tea_coffee_per_day: 0.0,
                exercise_days: 3.0,
                healthy_meals: 2.0,
                meals_per_day: 3.0,
            },
            prediction: HealthStatus::Poor,
        }
    }

    #[test]
    fn result_pane_echoes_input_verbatim() {
        let result = sample();
        let mut terminal = Terminal::new(TestBackend::new(70, 14)).unwrap();
        terminal
            .draw(|f| draw_result(f, f.size(), &result))
            .unwrap();

        let text = screen_text(terminal.backend().buffer());
        assert!(text.contains("Poor"));
        assert!(text.contains("Logistic Regression Analysis"));
        for (field, value) in result.input.entries() {
            let cell = format!("{value} {}", field.wire_name());
            assert!(text.contains(&cell), "missing '{cell}' in:\n{text}");
        }
        assert!(text.contains("7.5 SleepHours"));
        assert!(text.contains("30 Age"));
    }

    #[test]
    fn grid_reads_in_focus_order() {
        let mut focus = Focus::Field(Field::Age);
        for (left, right) in ROWS {
            assert_eq!(focus, Focus::Field(left));
            focus = focus.next();
            assert_eq!(focus, Focus::Field(right));
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Model);
    }

    #[test]
    fn metrics_pane_shows_constants() {
        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal.draw(|f| draw_metrics(f, f.size())).unwrap();

        let text = screen_text(terminal.backend().buffer());
        assert!(text.contains("18.8%"));
        assert!(text.contains("35.4%"));
        assert!(text.contains("Linear Regression"));
        assert!(text.contains("0.667"));
        assert!(text.contains("0.642"));
    }
}
