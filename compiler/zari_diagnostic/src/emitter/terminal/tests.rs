use std::sync::Arc;

use super::*;
use crate::Issue;
use zari_ir::SourceBuffer;

fn sample_diagnostic() -> Diagnostic {
    let source = Arc::new(SourceBuffer::from_string("let x = 9$ + 1"));
    let span = source.span(9, 1).unwrap();
    Diagnostic::new(source, Issue::InvalidCharacter, span, "unrecognized character '$'")
}

fn emit_to_string(mode: ColorMode, f: impl FnOnce(&mut TerminalEmitter<Vec<u8>>)) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
    f(&mut emitter);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn emit_writes_rendered_listing() {
    let diag = sample_diagnostic();
    let text = emit_to_string(ColorMode::Never, |e| e.emit(&diag));
    assert_eq!(text, format!("{}\n\n", diag.render()));
}

#[test]
fn emit_with_color() {
    let text = emit_to_string(ColorMode::Always, |e| e.emit(&sample_diagnostic()));
    assert!(text.contains("\x1b["));
    assert!(text.contains("Invalid Character"));
}

#[test]
fn emit_all_keeps_order() {
    let source = Arc::new(SourceBuffer::from_string("$ #"));
    let first = Diagnostic::new(
        Arc::clone(&source),
        Issue::InvalidCharacter,
        source.span(0, 1).unwrap(),
        "first",
    );
    let second = Diagnostic::new(
        Arc::clone(&source),
        Issue::InvalidCharacter,
        source.span(2, 1).unwrap(),
        "second",
    );
    let text = emit_to_string(ColorMode::Never, |e| e.emit_all(&[first, second]));
    let a = text.find("Note: first").unwrap();
    let b = text.find("Note: second").unwrap();
    assert!(a < b);
}

#[test]
fn summary_counts() {
    let text = emit_to_string(ColorMode::Never, |e| e.emit_summary(1, 0));
    assert_eq!(text, "Error: lexing failed with 1 error\n");

    let text = emit_to_string(ColorMode::Never, |e| e.emit_summary(3, 2));
    assert_eq!(text, "Error: lexing failed with 3 errors and 2 warnings\n");

    let text = emit_to_string(ColorMode::Never, |e| e.emit_summary(0, 1));
    assert_eq!(text, "Warning: 1 warning emitted\n");
}

#[test]
fn summary_is_silent_without_problems() {
    let text = emit_to_string(ColorMode::Never, |e| e.emit_summary(0, 0));
    assert!(text.is_empty());
}
