//! Ratatui-based registration form.
//!
//! The TUI is the interactive equivalent of `checkin register`: fill the
//! attendee fields, submit, and the derived code is shown as a barcode.
//! One screen, two states: `Editing -> Submitted(code) -> Editing` (on
//! "register another"), with the reset transition clearing all derived state.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Terminal,
};

use crate::app::pipeline::RegistrationOutput;
use crate::cli::EventArgs;
use crate::domain::{BarcodeStyle, RegistrationInput};
use crate::error::AppError;

mod barcode_chart;

use barcode_chart::BarcodeChart;

/// Start the TUI.
pub fn run(args: EventArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(&args);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Editing,
    Submitted,
}

const FIELD_LABELS: [&str; 5] = ["Name", "Email", "Phone", "Event", "Event date"];

struct App {
    /// Prefilled from the event context; editable like the attendee fields.
    event_name: String,
    name: String,
    email: String,
    phone: String,
    /// Event date as editable text (validated on submit).
    date_input: String,
    selected_field: usize,
    screen: Screen,
    status: String,
    run: Option<RegistrationOutput>,
}

impl App {
    fn new(args: &EventArgs) -> Self {
        Self {
            event_name: args.event.clone(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date_input: args.date.to_string(),
            selected_field: 0,
            screen: Screen::Editing,
            status: "Fill in the attendee details, Enter to register.".to_string(),
            run: None,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.screen {
            Screen::Editing => self.handle_editing_key(code),
            Screen::Submitted => self.handle_submitted_key(code),
        }
    }

    fn handle_editing_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::BackTab => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down | KeyCode::Tab => {
                if self.selected_field < FIELD_LABELS.len() - 1 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.selected_value_mut().pop();
            }
            KeyCode::Char(c) => {
                // The date field only accepts YYYY-MM-DD characters.
                if self.selected_field == 4 && !(c.is_ascii_digit() || c == '-') {
                    return false;
                }
                self.selected_value_mut().push(c);
            }
            _ => {}
        }
        false
    }

    fn handle_submitted_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('d') => {
                if let Some(run) = &self.run {
                    match crate::debug::write_debug_bundle(run) {
                        Ok(path) => {
                            self.status = format!("Wrote debug bundle: {}", path.display());
                        }
                        Err(err) => {
                            self.status = format!("Debug write failed: {err}");
                        }
                    }
                }
            }
            _ => {}
        }
        false
    }

    fn selected_value_mut(&mut self) -> &mut String {
        match self.selected_field {
            0 => &mut self.name,
            1 => &mut self.email,
            2 => &mut self.phone,
            3 => &mut self.event_name,
            _ => &mut self.date_input,
        }
    }

    fn field_value(&self, idx: usize) -> &str {
        match idx {
            0 => &self.name,
            1 => &self.email,
            2 => &self.phone,
            3 => &self.event_name,
            _ => &self.date_input,
        }
    }

    fn submit(&mut self) {
        let trimmed = self.date_input.trim();
        let event_date = match chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            Ok(d) => d,
            Err(e) => {
                self.status = format!("Invalid date '{trimmed}': {e}");
                return;
            }
        };

        let input = RegistrationInput {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            event_name: self.event_name.clone(),
            event_date,
        };

        match crate::app::pipeline::register(&input, &BarcodeStyle::default()) {
            Ok(out) => {
                self.status = format!("Registered. Code: {}", out.code);
                self.run = Some(out);
                self.screen = Screen::Submitted;
            }
            Err(err) => {
                self.status = err.to_string();
            }
        }
    }

    /// "Register another attendee": clears the form and all derived state.
    fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.run = None;
        self.selected_field = 0;
        self.screen = Screen::Editing;
        self.status = "Ready for the next attendee.".to_string();
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        match self.screen {
            Screen::Editing => self.draw_form(frame, chunks[1]),
            Screen::Submitted => self.draw_result(frame, chunks[1]),
        }
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("checkin", Style::default().fg(Color::Cyan)),
            Span::raw(" — event registration"),
        ]));
        lines.push(Line::from(Span::styled(
            format!("event: {} | date: {}", self.event_name, self.date_input),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_form(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = FIELD_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| ListItem::new(format!("{label}: {}", self.field_value(i))))
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Attendee").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_result(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Registration Complete").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(run) = &self.run else {
            let msg = Paragraph::new("No registration yet.")
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(6),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let headline = Paragraph::new(format!("{} — your registration code", run.code))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(headline, chunks[0]);

        frame.render_widget(BarcodeChart { pattern: &run.pattern }, chunks[1]);

        let label = Paragraph::new(run.pattern.label.clone())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(label, chunks[2]);

        let hint = Paragraph::new("Save this barcode for event check-in.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(hint, chunks[3]);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = match self.screen {
            Screen::Editing => "↑/↓ select  type to edit  Enter register  Esc quit",
            Screen::Submitted => "r register another  d debug  q quit",
        };
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn app() -> App {
        App::new(&EventArgs {
            event: "Sample Event".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        })
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn full_submission_reaches_submitted_with_golden_code() {
        let mut app = app();
        type_str(&mut app, "Jane Doe");
        app.handle_key(KeyCode::Down);
        type_str(&mut app, "jane@x.com");
        app.handle_key(KeyCode::Down);
        type_str(&mut app, "+1000");
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.screen, Screen::Submitted);
        let run = app.run.as_ref().unwrap();
        assert_eq!(run.code.as_str(), "923917");
        assert_eq!(run.pattern.bars.len(), 6);
    }

    #[test]
    fn missing_fields_stay_in_editing_with_a_status() {
        let mut app = app();
        type_str(&mut app, "Jane Doe");
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.screen, Screen::Editing);
        assert!(app.run.is_none());
        assert!(app.status.contains("email"));
    }

    #[test]
    fn event_name_is_editable_and_feeds_the_derivation() {
        let mut app = app();
        type_str(&mut app, "Jane Doe");
        app.handle_key(KeyCode::Down);
        type_str(&mut app, "jane@x.com");
        app.handle_key(KeyCode::Down);
        type_str(&mut app, "+1000");
        app.handle_key(KeyCode::Down);
        assert_eq!(app.field_value(3), "Sample Event");
        type_str(&mut app, " 2");
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.screen, Screen::Submitted);
        assert_eq!(app.event_name, "Sample Event 2");
        assert_eq!(app.run.as_ref().unwrap().code.as_str(), "492063");
    }

    #[test]
    fn date_field_rejects_non_date_characters() {
        let mut app = app();
        app.selected_field = 4;
        app.date_input.clear();
        type_str(&mut app, "2x0c2!4-01-02");
        assert_eq!(app.date_input, "2024-01-02");
    }

    #[test]
    fn register_another_clears_all_derived_state() {
        let mut app = app();
        type_str(&mut app, "Jane Doe");
        app.handle_key(KeyCode::Down);
        type_str(&mut app, "jane@x.com");
        app.handle_key(KeyCode::Down);
        type_str(&mut app, "+1000");
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.screen, Screen::Submitted);

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.screen, Screen::Editing);
        assert!(app.run.is_none());
        assert!(app.name.is_empty() && app.email.is_empty() && app.phone.is_empty());
        // Event context is kept for the next attendee.
        assert_eq!(app.event_name, "Sample Event");
        assert_eq!(app.date_input, "2024-01-01");
    }

    #[test]
    fn quit_keys_depend_on_screen() {
        let mut app = app();
        // 'q' is ordinary text while editing.
        assert!(!app.handle_key(KeyCode::Char('q')));
        assert_eq!(app.name, "q");
        assert!(app.handle_key(KeyCode::Esc));
    }
}
