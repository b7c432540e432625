use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, Tabs};

use crate::competition::Gender;
use crate::tui::app::{App, FlashKind, InputMode, QueryKind, Tab};
use crate::tui::theme;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 8 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Tabs(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);
    match app.current_tab {
        Tab::Entry => render_entry_tab(frame, chunks[2], app),
        Tab::Standings => render_standings_tab(frame, chunks[2], app),
        Tab::Query => render_query_tab(frame, chunks[2], app),
    }
    render_status_bar(frame, chunks[3], app);

    match app.input_mode {
        InputMode::InitForm => render_init_popup(frame, app),
        InputMode::CellInput => render_cell_popup(frame, app),
        InputMode::QueryInput => render_query_popup(frame, app),
        InputMode::Help => render_help_popup(frame),
        InputMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "Medal Tally",
        Style::default().fg(theme::TITLE_COLOR).bold(),
    )];

    if let Some(comp) = &app.competition {
        let summary = format!(
            "{} countries, {} events ({} men's, {} women's)",
            comp.country_count(),
            comp.event_count(),
            comp.men_event_count(),
            comp.women_event_count()
        );
        let left_len = "Medal Tally".len();
        let padding_len = (area.width as usize).saturating_sub(left_len + summary.len());
        spans.push(Span::raw(" ".repeat(padding_len)));
        spans.push(Span::styled(summary, Style::default().fg(theme::MUTED)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles = vec!["Entry", "Standings", "Query"];
    let selected = match app.current_tab {
        Tab::Entry => 0,
        Tab::Standings => 1,
        Tab::Query => 2,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(theme::MUTED))
        .highlight_style(Style::default().fg(theme::TITLE_COLOR).bold().reversed())
        .divider(" | ");

    frame.render_widget(tabs, area);
}

fn select(selected: bool, cell: Cell<'_>) -> Cell<'_> {
    if selected {
        cell.style(theme::CELL_SELECTED)
    } else {
        cell
    }
}

fn render_entry_tab(frame: &mut Frame, area: Rect, app: &App) {
    let Some(comp) = &app.competition else {
        let msg = Paragraph::new("No competition. Press i to initialize, d for sample data.")
            .alignment(Alignment::Center)
            .block(Block::default());
        frame.render_widget(msg, area);
        return;
    };

    let rows: Vec<Row> = comp
        .configs()
        .iter()
        .zip(comp.entries())
        .enumerate()
        .map(|(idx, (cfg, entry))| {
            let on_cursor_row = idx == app.entry_row;

            let gender = match cfg.gender {
                Gender::Male => "men",
                Gender::Female => "women",
            };
            let mode_cell = select(
                on_cursor_row && app.entry_col == 0,
                Cell::from(cfg.top_n.label()),
            );

            let mut cells = vec![
                Cell::from(cfg.event_id.to_string()),
                Cell::from(gender),
                mode_cell,
            ];
            for pos in 0..5 {
                let active = pos < cfg.top_n.required();
                let text = match entry.get(pos) {
                    Some(id) => id.to_string(),
                    None if active => "-".to_string(),
                    None => "·".to_string(),
                };
                let mut cell = Cell::from(text);
                if !active {
                    cell = cell.style(Style::default().fg(theme::DISABLED_CELL));
                }
                cells.push(select(on_cursor_row && app.entry_col == pos + 1, cell));
            }

            let status = app.statuses.get(idx).map(String::as_str).unwrap_or("");
            let status_color = match status {
                "valid" => theme::VALID_STATUS,
                "unchecked" | "" => theme::MUTED,
                _ => theme::INVALID_STATUS,
            };
            cells.push(Cell::from(status.to_string()).style(Style::default().fg(status_color)));

            let row_style = if idx % 2 == 1 {
                Style::default().bg(theme::ROW_ALT_BG)
            } else {
                Style::default()
            };
            Row::new(cells).style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(5),  // event id
        Constraint::Length(6),  // gender
        Constraint::Length(7),  // mode
        Constraint::Length(6),  // 1st
        Constraint::Length(6),  // 2nd
        Constraint::Length(6),  // 3rd
        Constraint::Length(6),  // 4th
        Constraint::Length(6),  // 5th
        Constraint::Fill(1),    // status
    ];

    let table = Table::new(rows, widths).header(
        Row::new(vec![
            "event", "gender", "mode", "1st", "2nd", "3rd", "4th", "5th", "status",
        ])
        .style(theme::HEADER_STYLE)
        .bottom_margin(1),
    );

    frame.render_widget(table, area);
}

fn render_standings_tab(frame: &mut Frame, area: Rect, app: &App) {
    if app.competition.is_none() {
        let msg = Paragraph::new("No competition. Press i to initialize, d for sample data.")
            .alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    let standings = app.standings();
    let max_total = standings.iter().map(|s| s.total).max().unwrap_or(0);

    let rows: Vec<Row> = standings
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let bar = score_bar(s.total, max_total, 12);
            let row_style = if idx % 2 == 1 {
                Style::default().bg(theme::ROW_ALT_BG)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(format!("{}.", idx + 1))
                    .style(Style::default().fg(theme::INDEX_COLOR)),
                Cell::from(s.id.to_string()),
                Cell::from(s.total.to_string()),
                Cell::from(s.male.to_string()),
                Cell::from(s.female.to_string()),
                Cell::from(bar),
            ])
            .style(row_style)
        })
        .collect();

    let direction = if app.ascending { "↑" } else { "↓" };
    let header_label = format!("sorted by {} {}", app.sort_key.label(), direction);

    let widths = [
        Constraint::Length(5),
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, widths).header(
        Row::new(vec!["#", "country", "total", "men", "women", &header_label])
            .style(theme::HEADER_STYLE)
            .bottom_margin(1),
    );

    frame.render_widget(table, area);
}

fn score_bar(score: u32, max_score: u32, width: usize) -> Line<'static> {
    if max_score == 0 {
        return Line::from("");
    }
    let filled = ((score as f64 / max_score as f64) * width as f64).round() as usize;
    let filled = filled.min(width);
    let empty = width - filled;

    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled(
            "█".repeat(filled),
            Style::default().fg(theme::BAR_FILLED),
        ));
    }
    if empty > 0 {
        spans.push(Span::styled(
            "░".repeat(empty),
            Style::default().fg(theme::BAR_EMPTY),
        ));
    }
    Line::from(spans)
}

fn render_query_tab(frame: &mut Frame, area: Rect, app: &App) {
    let chunks =
        Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).split(area);

    render_country_results(frame, chunks[0], app);
    render_event_results(frame, chunks[1], app);
}

fn render_country_results(frame: &mut Frame, area: Rect, app: &App) {
    let title = match &app.country_results {
        Some((id, _)) => format!(" By country: {} ", id),
        None => " By country (press c) ".to_string(),
    };
    let block = Block::bordered().title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some((_, results)) = &app.country_results else {
        let msg = Paragraph::new("Press c and enter a country id.")
            .style(Style::default().fg(theme::MUTED));
        frame.render_widget(msg, inner);
        return;
    };

    let rows: Vec<Row> = results
        .iter()
        .map(|r| {
            let gender = match r.gender {
                Gender::Male => "men",
                Gender::Female => "women",
            };
            let placement = match r.placement {
                Some(p) => p.to_string(),
                None => "-".to_string(),
            };
            let style = if r.placement.is_none() {
                Style::default().fg(theme::MUTED)
            } else {
                Style::default()
            };
            Row::new(vec![
                r.event_id.to_string(),
                gender.to_string(),
                placement,
                r.score.to_string(),
                r.note.to_string(),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Length(10),
        Constraint::Length(6),
        Constraint::Fill(1),
    ];
    let table = Table::new(rows, widths).header(
        Row::new(vec!["event", "gender", "placement", "score", "note"])
            .style(theme::HEADER_STYLE),
    );
    frame.render_widget(table, inner);
}

fn render_event_results(frame: &mut Frame, area: Rect, app: &App) {
    let title = match &app.event_results {
        Some((id, _)) => format!(" By event: {} ", id),
        None => " By event (press e) ".to_string(),
    };
    let block = Block::bordered().title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some((_, results)) = &app.event_results else {
        let msg = Paragraph::new("Press e and enter an event id.")
            .style(Style::default().fg(theme::MUTED));
        frame.render_widget(msg, inner);
        return;
    };

    let rows: Vec<Row> = results
        .iter()
        .map(|r| {
            let country = match r.country {
                Some(id) => id.to_string(),
                None => "-".to_string(),
            };
            Row::new(vec![
                format!("{}.", r.placement),
                country,
                r.score.to_string(),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Fill(1),
    ];
    let table = Table::new(rows, widths).header(
        Row::new(vec!["placement", "country", "score"]).style(theme::HEADER_STYLE),
    );
    frame.render_widget(table, inner);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, kind, _)) = app.flash_message {
        let msg_color = match kind {
            FlashKind::Success => theme::FLASH_SUCCESS,
            FlashKind::Error => theme::FLASH_ERROR,
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints: Vec<(&str, &str)> = match app.current_tab {
            Tab::Entry => vec![
                ("jkhl", ":move "),
                ("Enter", ":edit "),
                ("t", ":mode "),
                ("x", ":clear "),
                ("v", ":validate "),
                ("i", ":init "),
                ("d", ":sample "),
                ("Tab", ":next "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            Tab::Standings => vec![
                ("c", ":by country "),
                ("t", ":by total "),
                ("m", ":by men "),
                ("w", ":by women "),
                ("Tab", ":next "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            Tab::Query => vec![
                ("c", ":country query "),
                ("e", ":event query "),
                ("Tab", ":next "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                *key,
                Style::default().fg(theme::STATUS_KEY_COLOR),
            ));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme::STATUS_BAR_BG)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn render_init_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(44, 7, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered().title(" Initialize competition ");
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    let labels = ["countries n (>=1):", "men's events m:", "women's events w:"];
    for (i, label) in labels.iter().enumerate() {
        let active = app.init_form.field == i;
        let value = &app.init_form.values[i];
        let cursor = if active { "|" } else { "" };
        let style = if active {
            Style::default().fg(theme::TITLE_COLOR)
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::styled(format!("{:<20}", label), style),
            Span::raw(format!("{}{}", value, cursor)),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[i]);
    }

    let help = Paragraph::new("Tab: next field | Enter: create | Esc: cancel")
        .style(Style::default().fg(theme::MUTED));
    frame.render_widget(help, chunks[4]);
}

fn render_cell_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(36, 5, frame.area());
    frame.render_widget(Clear, popup_area);

    let title = format!(" Placement {} — country id ", app.entry_col);
    let block = Block::bordered().title(title);
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);

    frame.render_widget(
        Paragraph::new(format!("{}|", app.cell_input)),
        chunks[0],
    );
    let help = Paragraph::new("Enter: set | Esc: cancel | empty = clear")
        .style(Style::default().fg(theme::MUTED));
    frame.render_widget(help, chunks[1]);
}

fn render_query_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(36, 5, frame.area());
    frame.render_widget(Clear, popup_area);

    let title = match app.query_kind {
        QueryKind::Country => " Country id ",
        QueryKind::Event => " Event id ",
    };
    let block = Block::bordered().title(title);
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);

    frame.render_widget(
        Paragraph::new(format!("{}|", app.query_input)),
        chunks[0],
    );
    let help =
        Paragraph::new("Enter: query | Esc: cancel").style(Style::default().fg(theme::MUTED));
    frame.render_widget(help, chunks[1]);
}

fn render_help_popup(frame: &mut Frame) {
    let popup_area = centered_rect_fixed(52, 18, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered().title(" Keyboard Shortcuts ");
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(Color::Cyan).bold();
    let help_lines = vec![
        Line::from(vec![
            Span::styled("j/k, h/l      ", key_style),
            Span::raw("Move around the entry table"),
        ]),
        Line::from(vec![
            Span::styled("Enter         ", key_style),
            Span::raw("Edit the selected placement"),
        ]),
        Line::from(vec![
            Span::styled("t / Space     ", key_style),
            Span::raw("Toggle top 3 / top 5 (on entry tab)"),
        ]),
        Line::from(vec![
            Span::styled("x             ", key_style),
            Span::raw("Clear the selected placement"),
        ]),
        Line::from(vec![
            Span::styled("v             ", key_style),
            Span::raw("Validate all entries"),
        ]),
        Line::from(vec![
            Span::styled("i             ", key_style),
            Span::raw("Initialize (discards entries)"),
        ]),
        Line::from(vec![
            Span::styled("d             ", key_style),
            Span::raw("Load sample data"),
        ]),
        Line::from(vec![
            Span::styled("c/t/m/w       ", key_style),
            Span::raw("Sort standings (on standings tab)"),
        ]),
        Line::from(vec![
            Span::styled("c / e         ", key_style),
            Span::raw("Query by country / event (on query tab)"),
        ]),
        Line::from(vec![
            Span::styled("Tab/Shift-Tab ", key_style),
            Span::raw("Switch tabs"),
        ]),
        Line::from(vec![
            Span::styled("?             ", key_style),
            Span::raw("Show/hide this help"),
        ]),
        Line::from(vec![
            Span::styled("q / Ctrl-c    ", key_style),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(theme::MUTED),
        )),
    ];

    frame.render_widget(Paragraph::new(help_lines), inner);
}
