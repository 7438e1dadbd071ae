use std::cell::RefCell;
use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;
use std::sync::Once;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use serde_json::json;
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use avfield::prelude::*;

const HELP_TEXT: &str =
    "Tab/Shift+Tab focus • type to edit • Enter/click tap field • Ctrl+E tap icon • Ctrl+Q quit";
const ACTION_FILL: &str = "Picked from list";

fn main() -> Result<()> {
    let saved_password = Rc::new(RefCell::new(None));
    let fields = build_fields(&saved_password)?;
    let mut app = App::new(fields, saved_password);
    app.run()
}

/// Listener matching the original demo: keep the latest password only while
/// it validates.
struct PasswordRecorder {
    saved: Rc<RefCell<Option<String>>>,
}

impl EventListener for PasswordRecorder {
    fn on_validation(&mut self, is_valid: bool, text: &str) {
        *self.saved.borrow_mut() = if is_valid { Some(text.to_string()) } else { None };
    }
}

struct DemoField {
    label: &'static str,
    buffer: String,
    controller: FieldController,
}

fn build_fields(saved_password: &Rc<RefCell<Option<String>>>) -> Result<Vec<DemoField>> {
    // The regex crate has no lookaround, so the password rule is a plain
    // length-and-charset check.
    let password_attrs = json!({
        "input": "password",
        "invalid_error": "Invalid input",
        "validation": {
            "pattern": "[!-~]{8,}",
            "empty_error": "Password is required",
            "invalid_error": "Use at least 8 visible characters",
        },
    });
    let password = FieldController::from_config(FieldConfig::from_attrs(&password_attrs))
        .context("password field configuration")?
        .with_listener(PasswordRecorder {
            saved: Rc::clone(saved_password),
        });

    let pin_attrs = json!({
        "input": "number",
        "validation": {
            "pattern": "[0-9]{4}",
            "empty_error": "Required",
            "invalid_error": "4 digits",
        },
    });
    let pin = FieldController::from_config(FieldConfig::from_attrs(&pin_attrs))
        .context("pin field configuration")?;

    let appointment_attrs = json!({
        "mode": "click",
        "end_icon": "action",
    });
    let appointment = FieldController::from_config(FieldConfig::from_attrs(&appointment_attrs))
        .context("appointment field configuration")?;

    Ok(vec![
        DemoField {
            label: "Password",
            buffer: String::new(),
            controller: password,
        },
        DemoField {
            label: "PIN",
            buffer: String::new(),
            controller: pin,
        },
        DemoField {
            label: "Appointment",
            buffer: String::new(),
            controller: appointment,
        },
    ])
}

struct App {
    fields: Vec<DemoField>,
    focused: usize,
    status_message: String,
    should_quit: bool,
    saved_password: Rc<RefCell<Option<String>>>,
    field_areas: Vec<FieldArea>,
}

#[derive(Debug, Clone, Copy, Default)]
struct FieldArea {
    block: Rect,
    icon: Option<Rect>,
}

impl App {
    fn new(fields: Vec<DemoField>, saved_password: Rc<RefCell<Option<String>>>) -> Self {
        Self {
            fields,
            focused: 0,
            status_message: HELP_TEXT.to_string(),
            should_quit: false,
            saved_password,
            field_areas: Vec::new(),
        }
    }

    fn run(&mut self) -> Result<()> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(_, _) => {}
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('c')
                | KeyCode::Char('C') => {
                    self.should_quit = true;
                }
                KeyCode::Char('e') | KeyCode::Char('E') => self.tap_icon(self.focused),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(1),
            KeyCode::BackTab | KeyCode::Up => self.focus_next(-1),
            KeyCode::Enter => self.tap_field(self.focused),
            KeyCode::Esc => self.status_message = HELP_TEXT.to_string(),
            KeyCode::Char(ch) => self.edit_focused(|buffer| {
                buffer.push(ch);
                true
            }),
            KeyCode::Backspace => self.edit_focused(|buffer| buffer.pop().is_some()),
            KeyCode::Delete => self.edit_focused(|buffer| {
                let had_text = !buffer.is_empty();
                buffer.clear();
                had_text
            }),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let position = (mouse.column, mouse.row);
        let areas = self.field_areas.clone();
        for (idx, area) in areas.iter().enumerate() {
            if area.icon.is_some_and(|icon| contains(icon, position)) {
                self.tap_icon(idx);
                return;
            }
            if contains(area.block, position) {
                if self.fields[idx].controller.interaction().focusable {
                    self.focused = idx;
                }
                self.tap_field(idx);
                return;
            }
        }
    }

    fn focus_next(&mut self, delta: i32) {
        let len = self.fields.len() as i32;
        self.focused = (self.focused as i32 + delta).rem_euclid(len) as usize;
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String) -> bool) {
        let field = &mut self.fields[self.focused];
        if !field.controller.interaction().focusable {
            return;
        }
        if edit(&mut field.buffer) {
            field.controller.on_text_changed(&field.buffer);
            self.status_message = format!("Editing {}", field.label);
        }
    }

    fn tap_field(&mut self, idx: usize) {
        let field = &mut self.fields[idx];
        if field.controller.tap(TapSource::Field) {
            field.buffer = ACTION_FILL.to_string();
            field.controller.on_text_changed(&field.buffer);
            self.status_message = format!("Action on {}", field.label);
        }
    }

    fn tap_icon(&mut self, idx: usize) {
        let field = &mut self.fields[idx];
        let was_masked = field.controller.is_masked();
        if field.controller.tap(TapSource::Icon) {
            field.buffer = ACTION_FILL.to_string();
            field.controller.on_text_changed(&field.buffer);
            self.status_message = format!("Action on {}", field.label);
        } else if field.controller.is_masked() != was_masked {
            self.status_message = format!("{} visibility toggled", field.label);
        }
    }

    fn draw(&mut self, frame: &mut Frame<'_>) {
        let mut constraints = Vec::with_capacity(self.fields.len() * 2 + 2);
        for _ in &self.fields {
            constraints.push(Constraint::Length(3));
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(frame.area());

        self.field_areas.clear();
        let mut cursor: Option<(u16, u16)> = None;
        for (idx, field) in self.fields.iter().enumerate() {
            let block_area = chunks[idx * 2];
            let error_area = chunks[idx * 2 + 1];
            let focused = idx == self.focused;

            let border_style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let block = Block::default()
                .title(field.label)
                .borders(Borders::ALL)
                .border_style(border_style);
            let inner = block.inner(block_area);
            frame.render_widget(
                Paragraph::new(field.controller.display_text()).block(block),
                block_area,
            );

            let icon_area = icon_glyph(&field.controller).map(|glyph| {
                let area = Rect {
                    x: block_area.x + block_area.width.saturating_sub(4),
                    y: inner.y,
                    width: 3.min(block_area.width),
                    height: 1,
                };
                frame.render_widget(
                    Paragraph::new(glyph).style(Style::default().fg(Color::Cyan)),
                    area,
                );
                area
            });

            if let Some(error) = field.controller.error() {
                let width = (error_area.width.saturating_sub(2) as usize).max(1);
                if let Some(line) = wrap(error, width).first() {
                    frame.render_widget(
                        Paragraph::new(Line::from(Span::styled(
                            format!(" {line}"),
                            Style::default().fg(Color::Red),
                        ))),
                        error_area,
                    );
                }
            }

            if focused && field.controller.interaction().cursor_visible {
                let value_width = field.controller.display_text().width() as u16;
                cursor = Some((inner.x.saturating_add(value_width), inner.y));
            }

            self.field_areas.push(FieldArea {
                block: block_area,
                icon: icon_area,
            });
        }

        let stored = if self.saved_password.borrow().is_some() {
            "password stored"
        } else {
            "no password stored"
        };
        let status = Line::from(vec![
            Span::raw(self.status_message.clone()),
            Span::styled(
                format!("  •  {stored}"),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(status), chunks[chunks.len() - 1]);

        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }
    }
}

fn icon_glyph(controller: &FieldController) -> Option<&'static str> {
    match controller.end_icon() {
        EndIcon::PasswordToggle => Some(if controller.is_masked() { "[o]" } else { "[-]" }),
        EndIcon::Action => Some("[>]"),
        EndIcon::None => None,
    }
}

fn contains(area: Rect, (column, row): (u16, u16)) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

static PANIC_HOOK: Once = Once::new();

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("failed to initialize terminal")?;
        install_panic_hook();
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        restore_terminal();
    }
}

impl Deref for TerminalGuard {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore_terminal();
            previous(panic_info);
        }));
    });
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
}
