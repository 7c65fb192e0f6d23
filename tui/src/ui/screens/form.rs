use std::sync::Arc;

use crossterm::event::KeyCode;
use habits::Session;
use ratatui::Frame;

use crate::app::context::Context;
use crate::state::{
    model::{Focus, InputBuffers},
    session::{SessionState, SharedPredictor},
};
use crate::ui::draw;

use super::Action;

/// The prediction form and its result pane.
pub struct FormScreenState {
    pub(crate) ctx: Context,
    pub(crate) driver: SessionState,
    pub(crate) buffers: InputBuffers,
    pub(crate) focus: Focus,
    pub(crate) show_events: bool,
}

impl FormScreenState {
    /// Creates a form submitting through the context's HTTP client.
    pub fn new(ctx: Context) -> Self {
        let predictor: SharedPredictor = Arc::new(ctx.predictor.clone());
        Self::with_predictor(ctx, predictor)
    }

    /// Creates a form submitting through `predictor`.
    pub fn with_predictor(ctx: Context, predictor: SharedPredictor) -> Self {
        let session = Session::new(ctx.rule);

        Self {
            ctx,
            driver: SessionState::new(session, predictor),
            buffers: InputBuffers::default(),
            focus: Focus::Field(habits::Field::Age),
            show_events: true,
        }
    }
}

pub fn handle_key(state: &mut FormScreenState, key: KeyCode) -> Action {
    match key {
        KeyCode::Esc => return Action::Back,
        KeyCode::Tab | KeyCode::Down => state.focus = state.focus.next(),
        KeyCode::BackTab | KeyCode::Up => state.focus = state.focus.prev(),
        KeyCode::Enter => {
            state.driver.submit();
        }
        KeyCode::Char('c') => {
            state.buffers.clear();
            state.driver.session_mut().clear_form();
        }
        KeyCode::Char('e') => state.show_events = !state.show_events,
        _ => match state.focus {
            Focus::Field(field) => edit_field(state, field, key),
            Focus::Model => edit_model(state, key),
        },
    }

    Action::None
}

fn edit_field(state: &mut FormScreenState, field: habits::Field, key: KeyCode) {
    let changed = match key {
        KeyCode::Char(c) => state.buffers.push(field, c),
        KeyCode::Backspace => {
            state.buffers.pop(field);
            true
        }
        _ => false,
    };

    if changed {
        state
            .buffers
            .sync(field, state.driver.session_mut().form_mut());
    }
}

fn edit_model(state: &mut FormScreenState, key: KeyCode) {
    if matches!(key, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) {
        let session = state.driver.session_mut();
        let next = session.form().model().toggle();
        session.set_model(next);
    }
}

pub fn draw(f: &mut Frame, state: &FormScreenState) {
    draw::form_screen(f, state);
}
