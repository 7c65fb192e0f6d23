use std::thread;

use crossterm::event::KeyCode;
use habits::{ClientError, ServiceInfo};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tokio::sync::oneshot;

use crate::app::context::Context;
use crate::ui::{layout::centered_rect, theme::Theme, widgets};

use super::{form::FormScreenState, Action};

/// What the service answered on its root endpoint.
#[derive(Debug)]
pub enum InfoStatus {
    Loading,
    Loaded(ServiceInfo),
    Failed(String),
}

pub struct ServiceState {
    ctx: Context,
    status: InfoStatus,
    pending: Option<oneshot::Receiver<Result<ServiceInfo, ClientError>>>,
    /// The form kept aside while this screen is shown.
    parked: Option<FormScreenState>,
}

impl ServiceState {
    /// Creates the screen and starts fetching the service description.
    pub fn new(ctx: Context, parked: Option<FormScreenState>) -> Self {
        let mut state = Self {
            ctx,
            status: InfoStatus::Loading,
            pending: None,
            parked,
        };
        state.refresh();
        state
    }

    pub fn into_parts(self) -> (Context, Option<FormScreenState>) {
        (self.ctx, self.parked)
    }

    pub fn status(&self) -> &InfoStatus {
        &self.status
    }

    /// Fetches the service description again on a background thread.
    pub fn refresh(&mut self) {
        let (tx, rx) = oneshot::channel();
        let predictor = self.ctx.predictor.clone();

        thread::spawn(move || {
            let _ = tx.send(predictor.service_info());
        });

        self.status = InfoStatus::Loading;
        self.pending = Some(rx);
    }

    /// Picks up the fetch result if it arrived. Non-blocking.
    pub fn tick(&mut self) {
        if let Some(form) = self.parked.as_mut() {
            form.driver.tick();
        }

        let Some(rx) = self.pending.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                self.apply(outcome);
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => {
                self.pending = None;
                self.status = InfoStatus::Failed("request thread ended without an answer".into());
            }
        }
    }

    fn apply(&mut self, outcome: Result<ServiceInfo, ClientError>) {
        self.status = match outcome {
            Ok(info) => {
                log::info!("service says: {}", info.message);
                InfoStatus::Loaded(info)
            }
            Err(e) => {
                log::error!("fetching service info failed: {e}");
                InfoStatus::Failed(e.to_string())
            }
        };
    }
}

pub fn handle_key(state: &mut ServiceState, key: KeyCode) -> Action {
    match key {
        KeyCode::Esc | KeyCode::Char('q') => return Action::Back,
        KeyCode::Char('r') => state.refresh(),
        KeyCode::Char('o') => {
            if let Err(e) = open::that(state.ctx.base_url()) {
                log::warn!("could not open {}: {e}", state.ctx.base_url());
            }
        }
        _ => {}
    }

    Action::None
}

pub fn draw(f: &mut Frame, state: &ServiceState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = centered_rect(80, 80, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(outer);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Service: ", Theme::dim()),
            Span::styled(state.ctx.base_url().to_string(), Theme::accent()),
        ]),
        Line::from(""),
    ];

    match state.status() {
        InfoStatus::Loading => lines.push(Line::from(Span::styled("Loading...", Theme::warn()))),
        InfoStatus::Failed(reason) => {
            lines.push(Line::from(Span::styled("Unreachable", Theme::error())));
            lines.push(Line::from(Span::styled(reason.clone(), Theme::dim())));
        }
        InfoStatus::Loaded(info) => {
            lines.push(Line::from(Span::styled(info.message.clone(), Theme::title())));
            lines.push(Line::from(""));
            if !info.endpoints.is_null() {
                let pretty = serde_json::to_string_pretty(&info.endpoints)
                    .unwrap_or_else(|_| info.endpoints.to_string());
                lines.extend(
                    pretty
                        .lines()
                        .map(|l| Line::from(Span::styled(l.to_string(), Theme::text()))),
                );
            }
        }
    }

    let body = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(" Service Info ")
                .title_style(Theme::title()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(body, chunks[0]);
    f.render_widget(
        widgets::hints(&[("r", "refresh"), ("o", "open in browser"), ("esc", "back")]),
        chunks[1],
    );
}
