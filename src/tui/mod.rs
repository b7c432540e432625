pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

use crate::ranking::SortKey;
use app::{InputMode, QueryKind, Tab};

pub fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let mut events = EventHandler::new(250); // 250ms tick for flash expiry

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::InitForm => handle_init_form_key(app, key),
        InputMode::CellInput => handle_text_key(app, key, |a| a.confirm_cell_input(), |a| {
            a.cancel_cell_input()
        }),
        InputMode::QueryInput => {
            handle_text_key(app, key, |a| a.confirm_query(), |a| a.cancel_query())
        }
        InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    // Global keys first
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.next_tab();
            return;
        }
        KeyCode::BackTab => {
            app.previous_tab();
            return;
        }
        KeyCode::Char('?') => {
            app.show_help();
            return;
        }
        KeyCode::Char('i') => {
            app.open_init_form();
            return;
        }
        KeyCode::Char('d') => {
            app.load_sample();
            return;
        }
        _ => {}
    }

    match app.current_tab {
        Tab::Entry => match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.next_row(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_row(),
            KeyCode::Char('h') | KeyCode::Left => app.previous_col(),
            KeyCode::Char('l') | KeyCode::Right => app.next_col(),
            KeyCode::Enter => {
                if app.entry_col == 0 {
                    app.toggle_mode();
                } else {
                    app.start_cell_input();
                }
            }
            KeyCode::Char('t') | KeyCode::Char(' ') => app.toggle_mode(),
            KeyCode::Char('x') | KeyCode::Delete => app.clear_cell(),
            KeyCode::Char('v') => app.validate(),
            _ => {}
        },
        Tab::Standings => match key.code {
            KeyCode::Char('c') => app.set_sort(SortKey::Id, true),
            KeyCode::Char('t') => app.set_sort(SortKey::Total, false),
            KeyCode::Char('m') => app.set_sort(SortKey::Male, false),
            KeyCode::Char('w') => app.set_sort(SortKey::Female, false),
            _ => {}
        },
        Tab::Query => match key.code {
            KeyCode::Char('c') => app.start_query(QueryKind::Country),
            KeyCode::Char('e') => app.start_query(QueryKind::Event),
            _ => {}
        },
    }
}

fn handle_init_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_init_form(),
        KeyCode::Enter => {
            if app.init_form.field < 2 {
                app.init_form.field += 1;
            } else {
                app.submit_init_form();
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            app.init_form.field = (app.init_form.field + 1) % 3;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.init_form.field = (app.init_form.field + 2) % 3;
        }
        KeyCode::Backspace => {
            let field = app.init_form.field;
            app.init_form.values[field].pop();
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let field = app.init_form.field;
            app.init_form.values[field].push(c);
        }
        _ => {}
    }
}

/// Shared handling for the one-line numeric input popups.
fn handle_text_key(
    app: &mut App,
    key: KeyEvent,
    confirm: impl FnOnce(&mut App),
    cancel: impl FnOnce(&mut App),
) {
    match key.code {
        KeyCode::Enter => confirm(app),
        KeyCode::Esc => cancel(app),
        KeyCode::Backspace => {
            match app.input_mode {
                InputMode::CellInput => {
                    app.cell_input.pop();
                }
                InputMode::QueryInput => {
                    app.query_input.pop();
                }
                _ => {}
            };
        }
        KeyCode::Char(c) if c.is_ascii_digit() => match app.input_mode {
            InputMode::CellInput => app.cell_input.push(c),
            InputMode::QueryInput => app.query_input.push(c),
            _ => {}
        },
        _ => {}
    }
}
