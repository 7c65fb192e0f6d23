use habits::{metrics::ModelMetrics, Field, ModelChoice, Phase, PredictionResult, Session};
use ratatui::{
    layout::{Alignment, Constraint},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, Wrap},
};

use crate::state::model::LogLine;
use crate::ui::theme::Theme;

pub fn header<'a>(session: &Session, base_url: &'a str) -> Paragraph<'a> {
    let phase = match session.phase() {
        Phase::ShowingMetrics => "READY",
        Phase::Validating => "VALIDATING",
        Phase::Submitting => "PREDICTING",
        Phase::Idle => "IDLE",
        Phase::ShowingResult => "RESULT",
    };

    let line1 = Line::from(vec![
        Span::styled("Lifestyle Habits Model", Theme::title()),
        Span::styled("  |  AI-powered lifestyle habits assessment", Theme::dim()),
    ]);

    let line2 = Line::from(vec![
        Span::raw(format!("Service: {base_url}")),
        Span::raw(format!(
            "  |  Model: {}",
            session.form().model().display_name()
        )),
        Span::raw("  |  Status: "),
        Span::styled(phase, Theme::accent()),
    ]);

    Paragraph::new(vec![line1, line2])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(" Overview "),
        )
        .wrap(Wrap { trim: true })
}

/// A numeric input box. Shows the field label as placeholder while empty.
pub fn input_box<'a>(field: Field, text: &'a str, focused: bool, invalid: bool) -> Paragraph<'a> {
    let border = if invalid {
        Theme::error()
    } else if focused {
        Theme::border_focus()
    } else {
        Theme::border()
    };

    let mut spans = if text.is_empty() {
        vec![Span::styled(field.label(), Theme::muted())]
    } else {
        vec![Span::styled(text, Theme::text())]
    };
    if focused {
        spans.push(Span::styled("█", Theme::accent()));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", field.label()))
            .title_style(Theme::dim()),
    )
}

/// Red message under an input, or nothing.
pub fn field_error(message: Option<&str>) -> Paragraph<'_> {
    match message {
        Some(msg) => Paragraph::new(Span::styled(msg, Theme::error())),
        None => Paragraph::new(""),
    }
}

pub fn model_selector(model: ModelChoice, focused: bool, flagged: bool) -> Paragraph<'static> {
    let border = if flagged {
        Theme::error()
    } else if focused {
        Theme::border_focus()
    } else {
        Theme::border()
    };

    let options = ModelChoice::ALL.iter().flat_map(|m| {
        let style = if *m == model {
            Theme::title().add_modifier(Modifier::REVERSED)
        } else {
            Theme::dim()
        };
        [Span::styled(format!(" {} ", m.display_name()), style), Span::raw("  ")]
    });

    Paragraph::new(Line::from(options.collect::<Vec<_>>())).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Select Model ")
            .title_style(Theme::dim()),
    )
}

pub fn submit_line(loading: bool) -> Paragraph<'static> {
    let line = if loading {
        Line::from(Span::styled("Predicting...", Theme::warn()))
    } else {
        Line::from(vec![
            Span::styled("[enter]", Theme::accent()),
            Span::styled(" Get Predict", Theme::title()),
        ])
    };

    Paragraph::new(line).alignment(Alignment::Center)
}

pub fn metrics_title() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            "Lifestyle Habits – Model Performance",
            Theme::title(),
        )),
        Line::from(Span::styled(
            "Comparison of Linear Regression & Random Forest",
            Theme::dim(),
        )),
    ])
}

/// R² gauge of one model.
pub fn r2_gauge(metrics: &ModelMetrics, index: usize) -> Gauge<'static> {
    Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(format!(" {} ", metrics.name))
                .title_style(Theme::title()),
        )
        .gauge_style(Theme::gauge(index))
        .ratio(metrics.r2.clamp(0.0, 1.0))
        .label(format!(
            "{:.1}%  R² Score • {}",
            metrics.r2_percent(),
            metrics.r2
        ))
}

/// MAE / MSE / RMSE of every model side by side.
pub fn error_metrics<'a>(all: &[ModelMetrics]) -> Table<'a> {
    let header = std::iter::once(Cell::from(""))
        .chain(all.iter().map(|m| Cell::from(m.name)))
        .collect::<Vec<_>>();

    let row = |name: &'static str, pick: fn(&ModelMetrics) -> f64| {
        let cells = std::iter::once(Cell::from(name))
            .chain(all.iter().map(|m| Cell::from(pick(m).to_string())))
            .collect::<Vec<_>>();
        Row::new(cells)
    };

    let rows = vec![
        row("MAE", |m| m.mae),
        row("MSE", |m| m.mse),
        row("RMSE", |m| m.rmse),
    ];

    Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(10),
            Constraint::Min(10),
        ],
    )
    .header(Row::new(header).style(Theme::title()))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border())
            .title(" Error Metrics "),
    )
}

pub fn result_title(result: &PredictionResult) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Lifestyle Prediction", Theme::title()),
            Span::styled("   Prediction Report", Theme::muted()),
        ]),
        Line::from(Span::styled(
            format!("{} Analysis", result.model.display_name()),
            Theme::dim(),
        )),
    ])
}

pub fn result_label(result: &PredictionResult) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            result.prediction.label(),
            Theme::prediction(result.prediction),
        )),
        Line::from(vec![
            Span::styled("Prediction Result", Theme::accent()),
            Span::styled(" • ", Theme::muted()),
            Span::styled(result.model.display_name(), Theme::dim()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    )
}

/// Echoed input values with their wire names, two per row.
pub fn result_inputs(result: &PredictionResult) -> Table<'static> {
    let entries = result.input.entries().collect::<Vec<_>>();

    let rows = entries.chunks(2).map(|pair| {
        let cells = pair
            .iter()
            .map(|(field, value)| {
                Cell::from(Line::from(vec![
                    Span::styled(value.to_string(), Theme::title()),
                    Span::raw(" "),
                    Span::styled(field.wire_name(), Theme::dim()),
                ]))
            })
            .collect::<Vec<_>>();
        Row::new(cells)
    });

    Table::new(
        rows.collect::<Vec<_>>(),
        [Constraint::Percentage(50), Constraint::Percentage(50)],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border())
            .title(" Input Information "),
    )
}

pub fn events(logs: &[LogLine]) -> Paragraph<'_> {
    let tail = logs.iter().rev().take(5).rev();

    let lines = tail
        .map(|l| {
            let style = match l.level {
                "ERROR" => Theme::error(),
                "WARN" => Theme::warn(),
                _ => Theme::dim(),
            };
            Line::from(vec![
                Span::styled(format!("[{}] ", l.level), style),
                Span::raw(l.message.as_str()),
            ])
        })
        .collect::<Vec<_>>();

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(" Events "),
        )
        .wrap(Wrap { trim: true })
}

/// One line of `[key] action` pairs.
pub fn hints<'a>(hints: &[(&'a str, &'a str)]) -> Paragraph<'a> {
    let spans = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!("[{key}]"), Theme::accent()),
                Span::styled(format!(" {action}   "), Theme::muted()),
            ]
        })
        .collect::<Vec<_>>();

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}
