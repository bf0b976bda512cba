//! Unit tests for the interactive session state machine
//!
//! These tests drive `SessionState` with key events directly. Rendering and
//! terminal handling are not exercised here.

use bitconv::cli::clipboard::CopyOutcome;
use bitconv::cli::session::{SessionAction, SessionState, Status};
use bitconv::converter::{ConversionMode, FormatOptions, PLACEHOLDER};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(session: &mut SessionState, text: &str) {
    for c in text.chars() {
        assert_eq!(session.handle_key(key(KeyCode::Char(c))), SessionAction::Stay);
    }
}

fn new_session() -> SessionState {
    SessionState::new(ConversionMode::DecimalToBinary, FormatOptions::default())
}

#[test]
fn test_starts_with_placeholder() {
    let session = new_session();
    assert_eq!(session.output, PLACEHOLDER);
    assert_eq!(session.status, Status::None);
    assert!(session.copy_request().is_none());
}

#[test]
fn test_typing_converts_live() {
    let mut session = new_session();

    type_text(&mut session, "-4");
    assert_eq!(session.output, "-100");
    type_text(&mut session, "2");
    assert_eq!(session.output, "-101010");
}

#[test]
fn test_backspace_reconverts() {
    let mut session = new_session();
    type_text(&mut session, "10");
    session.handle_key(key(KeyCode::Backspace));
    assert_eq!(session.input, "1");
    assert_eq!(session.output, "1");

    session.handle_key(key(KeyCode::Backspace));
    assert_eq!(session.output, PLACEHOLDER);
}

#[test]
fn test_invalid_input_shows_error() {
    let mut session = new_session();
    type_text(&mut session, "4x");

    assert_eq!(session.output, PLACEHOLDER);
    assert_eq!(
        session.status,
        Status::Error("Invalid decimal number.".to_string())
    );

    // Fixing the input clears the error
    session.handle_key(key(KeyCode::Backspace));
    assert_eq!(session.status, Status::None);
    assert_eq!(session.output, "100");
}

#[test]
fn test_swap_reinterprets_input() {
    let mut session = new_session();
    type_text(&mut session, "101");
    assert_eq!(session.output, "1100101");

    session.handle_key(key(KeyCode::Tab));
    assert_eq!(session.mode, ConversionMode::BinaryToDecimal);
    assert_eq!(session.output, "5");

    session.handle_key(key(KeyCode::BackTab));
    assert_eq!(session.mode, ConversionMode::DecimalToBinary);
}

#[test]
fn test_toggles_reformat_output() {
    let mut session = new_session();
    type_text(&mut session, "42");

    session.handle_key(key(KeyCode::F(2)));
    assert!(session.options.prefix);
    assert_eq!(session.output, "0b101010");

    session.handle_key(key(KeyCode::F(3)));
    assert!(session.options.group);
    assert_eq!(session.output, "0010 1010");

    session.handle_key(ctrl('g'));
    assert!(!session.options.group);
    session.handle_key(ctrl('p'));
    assert!(!session.options.prefix);
    assert_eq!(session.output, "101010");

    session.handle_key(key(KeyCode::F(4)));
    assert!(session.options.trim);
    session.handle_key(ctrl('t'));
    assert!(!session.options.trim);
}

#[test]
fn test_clear_resets_everything() {
    let mut session = new_session();
    type_text(&mut session, "zz");
    session.handle_key(ctrl('l'));

    assert!(session.input.is_empty());
    assert_eq!(session.output, PLACEHOLDER);
    assert_eq!(session.status, Status::None);
}

#[test]
fn test_copy_only_real_results() {
    let mut session = new_session();
    assert_eq!(session.handle_key(ctrl('y')), SessionAction::Stay);

    type_text(&mut session, "3");
    assert_eq!(
        session.handle_key(ctrl('y')),
        SessionAction::Copy("11".to_string())
    );
}

#[test]
fn test_copy_outcome_updates_status() {
    let mut session = new_session();
    session.record_copy(Ok(CopyOutcome::Copied));
    assert_eq!(session.status, Status::Info("Result copied.".to_string()));

    session.record_copy(Err(anyhow::anyhow!("no terminal")));
    assert_eq!(session.status, Status::Error("could not copy.".to_string()));
}

#[test]
fn test_quit_keys() {
    let mut session = new_session();
    assert_eq!(session.handle_key(key(KeyCode::Esc)), SessionAction::Quit);
    assert_eq!(session.handle_key(ctrl('c')), SessionAction::Quit);
}

#[test]
fn test_control_chars_are_not_typed() {
    let mut session = new_session();
    session.handle_key(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::ALT));
    assert!(session.input.is_empty());
}

#[test]
fn test_initial_input() {
    let mut session = SessionState::new(ConversionMode::BinaryToDecimal, FormatOptions::default());
    session.set_input("-0b1010");
    assert_eq!(session.output, "-10");
}
