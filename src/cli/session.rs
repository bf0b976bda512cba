//! Interactive converter session using ratatui
//!
//! The screen mirrors a small converter form: a mode selector, three format
//! toggles, an input line and the result. Every edit reconverts immediately.

use std::io::{stdout, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};
use tracing::{debug, warn};

use crate::cli::clipboard::{is_copyable, write_clipboard, CopyOutcome};
use crate::converter::{convert, ConversionMode, FormatOptions, PLACEHOLDER};

// ============================================================================
// State
// ============================================================================

/// Message shown under the result
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    None,
    Info(String),
    Error(String),
}

/// Action to take after handling a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Keep running
    Stay,
    /// Copy this text to the clipboard
    Copy(String),
    /// Leave the session
    Quit,
}

/// Everything the session screen shows
#[derive(Debug, Clone)]
pub struct SessionState {
    pub mode: ConversionMode,
    pub options: FormatOptions,
    pub input: String,
    pub output: String,
    pub status: Status,
}

impl SessionState {
    pub fn new(mode: ConversionMode, options: FormatOptions) -> Self {
        Self {
            mode,
            options,
            input: String::new(),
            output: PLACEHOLDER.to_string(),
            status: Status::None,
        }
    }

    /// Replace the input and reconvert
    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
        self.convert();
    }

    /// Recompute output and status from the current input
    pub fn convert(&mut self) {
        self.status = Status::None;
        match convert(&self.input, self.mode, &self.options) {
            Ok(conversion) => self.output = conversion.as_str().to_string(),
            Err(e) => {
                self.output = PLACEHOLDER.to_string();
                self.status = Status::Error(e.message().to_string());
            }
        }
    }

    pub fn swap_mode(&mut self) {
        self.mode = self.mode.swap();
        self.convert();
    }

    pub fn toggle_prefix(&mut self) {
        self.options.prefix = !self.options.prefix;
        self.convert();
    }

    pub fn toggle_group(&mut self) {
        self.options.group = !self.options.group;
        self.convert();
    }

    pub fn toggle_trim(&mut self) {
        self.options.trim = !self.options.trim;
        self.convert();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.output = PLACEHOLDER.to_string();
        self.status = Status::None;
    }

    /// Text to copy, or `None` while only the placeholder is shown
    pub fn copy_request(&self) -> Option<String> {
        is_copyable(&self.output).then(|| self.output.clone())
    }

    /// Reflect the outcome of a clipboard write in the status line
    pub fn record_copy(&mut self, outcome: Result<CopyOutcome>) {
        match outcome {
            Ok(CopyOutcome::Copied) => self.status = Status::Info("Result copied.".to_string()),
            Ok(CopyOutcome::NothingToCopy) => {}
            Err(e) => {
                warn!("Clipboard write failed: {:#}", e);
                self.status = Status::Error("could not copy.".to_string());
            }
        }
    }

    /// Apply a key press to the session
    pub fn handle_key(&mut self, key: KeyEvent) -> SessionAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => SessionAction::Quit,
            KeyCode::Char('c') if ctrl => SessionAction::Quit,
            KeyCode::Char('y') if ctrl => match self.copy_request() {
                Some(text) => SessionAction::Copy(text),
                None => SessionAction::Stay,
            },
            KeyCode::Char('l') if ctrl => {
                self.clear();
                SessionAction::Stay
            }
            KeyCode::F(2) => {
                self.toggle_prefix();
                SessionAction::Stay
            }
            KeyCode::Char('p') if ctrl => {
                self.toggle_prefix();
                SessionAction::Stay
            }
            KeyCode::F(3) => {
                self.toggle_group();
                SessionAction::Stay
            }
            KeyCode::Char('g') if ctrl => {
                self.toggle_group();
                SessionAction::Stay
            }
            KeyCode::F(4) => {
                self.toggle_trim();
                SessionAction::Stay
            }
            KeyCode::Char('t') if ctrl => {
                self.toggle_trim();
                SessionAction::Stay
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.swap_mode();
                SessionAction::Stay
            }
            KeyCode::Enter => {
                self.convert();
                SessionAction::Stay
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.convert();
                SessionAction::Stay
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.input.push(c);
                self.convert();
                SessionAction::Stay
            }
            _ => SessionAction::Stay,
        }
    }
}

// ============================================================================
// Terminal Setup/Teardown
// ============================================================================

/// Setup terminal for TUI rendering with panic-safe cleanup
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    // Install panic hook for clean terminal restoration
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        teardown_terminal();
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

// ============================================================================
// Entry Point
// ============================================================================

/// Run the interactive session until the user quits
pub fn run_session(
    mode: ConversionMode,
    options: FormatOptions,
    initial: Option<&str>,
) -> Result<()> {
    let mut session = SessionState::new(mode, options);
    if let Some(value) = initial {
        session.set_input(value);
    }

    let mut terminal = setup_terminal()?;
    let result = run_session_loop(&mut terminal, &mut session);
    teardown_terminal();

    result
}

fn run_session_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut SessionState,
) -> Result<()> {
    loop {
        terminal.draw(|f| render_session(f, session))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match session.handle_key(key) {
            SessionAction::Quit => return Ok(()),
            SessionAction::Copy(text) => {
                debug!("Copying result to clipboard");
                let outcome = write_clipboard(terminal.backend_mut(), &text);
                session.record_copy(outcome);
            }
            SessionAction::Stay => {}
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn centered_fixed_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_session(f: &mut Frame, session: &SessionState) {
    let box_area = centered_fixed_rect(66, 12, f.area());
    f.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" bitconv ")
        .title_style(Style::default().fg(Color::Cyan).bold())
        .title_alignment(Alignment::Center);
    let inner = block.inner(box_area);
    f.render_widget(block, box_area);

    let lines = vec![
        mode_line(session.mode),
        options_line(&session.options),
        Line::from(""),
        input_line(session),
        Line::from(vec![
            Span::styled("  = ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                session.output.clone(),
                Style::default().fg(Color::Green).bold(),
            ),
        ]),
        Line::from(""),
        status_line(&session.status),
    ];
    f.render_widget(Paragraph::new(lines), inner);

    let hint_area = Rect::new(
        box_area.x,
        box_area.y + box_area.height,
        box_area.width,
        1,
    );
    if hint_area.y < f.area().height {
        render_help_bar(f, hint_area);
    }
}

fn mode_line(mode: ConversionMode) -> Line<'static> {
    let radio = |m: ConversionMode| {
        let (marker, style) = if m == mode {
            ("(•) ", Style::default().fg(Color::Cyan).bold())
        } else {
            ("( ) ", Style::default().fg(Color::DarkGray))
        };
        Span::styled(format!("{}{}", marker, m.title()), style)
    };

    Line::from(vec![
        Span::raw("  "),
        radio(ConversionMode::DecimalToBinary),
        Span::raw("   "),
        radio(ConversionMode::BinaryToDecimal),
    ])
}

fn options_line(options: &FormatOptions) -> Line<'static> {
    let checkbox = |on: bool, label: &str| {
        let (marker, style) = if on {
            ("[x] ", Style::default().fg(Color::Yellow))
        } else {
            ("[ ] ", Style::default().fg(Color::DarkGray))
        };
        Span::styled(format!("{}{}", marker, label), style)
    };

    Line::from(vec![
        Span::raw("  "),
        checkbox(options.prefix, "0b prefix"),
        Span::raw("  "),
        checkbox(options.group, "group 4 bits"),
        Span::raw("  "),
        checkbox(options.trim, "trim zeros"),
    ])
}

fn input_line(session: &SessionState) -> Line<'static> {
    let prompt = Span::styled("  > ", Style::default().fg(Color::Cyan).bold());
    if session.input.is_empty() {
        Line::from(vec![
            prompt,
            Span::styled("█", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!(" {}", session.mode.input_hint()),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::raw(session.input.clone()),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ])
    }
}

fn status_line(status: &Status) -> Line<'static> {
    match status {
        Status::None => Line::from(""),
        Status::Info(msg) => Line::from(Span::styled(
            format!("  {}", msg),
            Style::default().fg(Color::Green),
        )),
        Status::Error(msg) => Line::from(vec![
            Span::styled("  Error: ", Style::default().fg(Color::Red).bold()),
            Span::styled(msg.clone(), Style::default().fg(Color::Red)),
        ]),
    }
}

fn render_help_bar(f: &mut Frame, area: Rect) {
    let keys = [
        ("Tab", " swap  "),
        ("F2", " prefix  "),
        ("F3", " group  "),
        ("F4", " trim  "),
        ("^Y", " copy  "),
        ("^L", " clear  "),
        ("Esc", " quit"),
    ];

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, Style::default().fg(Color::Cyan)),
                Span::styled(*label, Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
