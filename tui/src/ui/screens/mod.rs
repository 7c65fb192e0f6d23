pub mod form;
pub mod menu;
pub mod service;

use crossterm::event::KeyCode;
use ratatui::Frame;

pub enum Action {
    None,
    Quit,
    /// Leave the current screen for the menu.
    Back,
    Transition(Screen),
}

pub enum Screen {
    Menu(menu::MenuState),
    Form(form::FormScreenState),
    Service(service::ServiceState),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Menu(s) => menu::draw(f, s),
            Screen::Form(s) => form::draw(f, s),
            Screen::Service(s) => service::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match self {
            Screen::Menu(s) => menu::handle_key(s, key),
            Screen::Form(s) => form::handle_key(s, key),
            Screen::Service(s) => service::handle_key(s, key),
        }
    }

    /// Applies background work that finished since the last frame.
    pub fn tick(&mut self) {
        match self {
            Screen::Menu(s) => s.tick(),
            Screen::Form(s) => s.driver.tick(),
            Screen::Service(s) => s.tick(),
        }
    }

    /// Returns to the menu, keeping the form and its session alive.
    pub fn into_menu(self) -> Screen {
        match self {
            Screen::Menu(s) => Screen::Menu(s),
            Screen::Form(s) => {
                let ctx = s.ctx.clone();
                Screen::Menu(menu::MenuState::new(ctx).with_form(Some(s)))
            }
            Screen::Service(s) => {
                let (ctx, parked) = s.into_parts();
                let mut state = menu::MenuState::new(ctx).with_form(parked);
                state.selected = menu::SERVICE_ITEM;
                Screen::Menu(state)
            }
        }
    }
}
