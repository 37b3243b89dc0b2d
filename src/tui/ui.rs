//! Main UI renderer

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use crate::core::flow::FlowStage;
use crate::core::keypad::LAYOUT;
use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Render the UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_points(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    if app.flow.is_open() {
        render_exchange_popup(frame, app);
    }

    // Help goes over everything, including the popup
    if app.show_help {
        render_help_overlay(frame, app);
    }
}

/// Render the header
fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(" studypoints │ Points ")
        .style(Theme::header())
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

/// Render the points summary with recent requests
fn render_points(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let summary = vec![
        Line::from(vec![
            Span::styled("  Balance   ", Theme::muted()),
            Span::styled(
                app.label_format.label_or(app.balance, "0").into_owned(),
                Theme::amount(),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Account   ", Theme::muted()),
            Span::raw(app.account.clone()),
        ]),
        Line::from(Span::styled("  [x] Exchange points", Theme::normal())),
    ];

    let summary = Paragraph::new(summary).block(
        Block::default()
            .title(" My Points ")
            .borders(Borders::ALL)
            .border_style(Theme::normal()),
    );
    frame.render_widget(summary, chunks[0]);

    let items: Vec<ListItem> = if app.requests.is_empty() {
        vec![ListItem::new(Span::styled(
            "  No exchange requests yet",
            Theme::muted(),
        ))]
    } else {
        app.requests
            .iter()
            .map(|request| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("  {}  ", request.requested_at.format("%H:%M")),
                        Theme::muted(),
                    ),
                    Span::raw(app.label_format.label_or(request.amount, "0").into_owned()),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Requests ")
            .borders(Borders::ALL)
            .border_style(Theme::normal()),
    );
    frame.render_widget(list, chunks[1]);
}

/// Centered popup area, clipped to the frame
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Render the exchange dialog for the current stage
fn render_exchange_popup(frame: &mut Frame, app: &App) {
    let area = popup_area(frame.area(), 46, 15);

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let (title, lines) = match app.flow.stage() {
        Some(FlowStage::Input) => (" Exchange Points ", input_lines(app)),
        Some(FlowStage::Confirm) => (" Confirm Exchange ", confirm_lines(app)),
        None => return,
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::SECONDARY)),
        )
        .style(Theme::popup())
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn input_lines(app: &App) -> Vec<Line<'static>> {
    let label = app.flow.entry().display_label(&app.label_format);
    let amount = if label.is_empty() {
        Span::styled(app.placeholder.clone(), Theme::muted())
    } else {
        Span::styled(label, Theme::amount())
    };

    let mut lines = vec![Line::from(""), Line::from(amount), Line::from("")];

    let cursor = app.flow.keypad().cursor();
    for (row, keys) in LAYOUT.iter().enumerate() {
        let spans: Vec<Span> = keys
            .iter()
            .enumerate()
            .map(|(col, key)| {
                let face = format!("  {:^4}  ", key.face());
                if (row, col) == cursor {
                    Span::styled(face, Theme::selected())
                } else {
                    Span::raw(face)
                }
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "[Space] Press [Enter] Next [Esc] Cancel",
        Theme::muted(),
    )));
    lines
}

fn confirm_lines(app: &App) -> Vec<Line<'static>> {
    let amount = app.flow.amount();
    let amount = if amount == 0 {
        Span::styled("No amount entered", Theme::muted())
    } else {
        Span::styled(app.label_format.label(amount), Theme::amount())
    };

    vec![
        Line::from(""),
        Line::from("Exchange"),
        Line::from(amount),
        Line::from(""),
        Line::from("to"),
        Line::from(Span::raw(app.account.clone())),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter/y] Confirm  [Esc/n] Cancel",
            Theme::muted(),
        )),
    ]
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status_text = match &app.status_message {
        Some(msg) => msg.clone(),
        None => format!(" {} request(s) │ ? for help ", app.requests.len()),
    };

    let status = Paragraph::new(status_text)
        .style(Theme::status_bar())
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(status, area);
}

/// Render the help overlay
fn render_help_overlay(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (popup_width, popup_height) = help_popup_size(area);
    let popup = popup_area(area, popup_width, popup_height);

    frame.render_widget(Clear, popup);

    let (title, help_lines) = help_content(app.flow.stage());

    let text: Vec<Line> = help_lines
        .into_iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {:14}", key), Style::default().fg(Theme::PRIMARY)),
                Span::raw(desc),
            ])
        })
        .collect();

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::SECONDARY)),
        )
        .style(Theme::popup());

    frame.render_widget(help, popup);
}

/// 60% of the width and 70% of the height, capped at 60x14
fn help_popup_size(area: Rect) -> (u16, u16) {
    let width = (u32::from(area.width) * 60 / 100).min(60) as u16;
    let height = (u32::from(area.height) * 70 / 100).min(14) as u16;
    (width, height)
}

/// Help content for whatever currently has focus
fn help_content(stage: Option<FlowStage>) -> (&'static str, Vec<(&'static str, &'static str)>) {
    match stage {
        None => (
            "Help - Points",
            vec![
                ("x / Enter", "Exchange points"),
                ("q", "Quit"),
                ("?", "Show this help"),
            ],
        ),
        Some(FlowStage::Input) => (
            "Help - Enter Amount",
            vec![
                ("0-9", "Type a digit"),
                ("Backspace", "Delete last digit"),
                ("Arrows/hjkl", "Move on keypad"),
                ("Space", "Press highlighted key"),
                ("Enter", "Review exchange"),
                ("Esc", "Cancel"),
                ("?", "Show this help"),
            ],
        ),
        Some(FlowStage::Confirm) => (
            "Help - Confirm",
            vec![
                ("Enter / y", "Request exchange"),
                ("Esc / n", "Cancel"),
                ("?", "Show this help"),
            ],
        ),
    }
}
