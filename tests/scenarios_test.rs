//! End-to-end behavior of compiled programs under the runtime policies:
//! cells wrap mod 256, the pointer wraps mod the tape size, and reading past
//! the end of the input stores 0.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tapegen::{
    compile, compile_all, CompileFailure, Machine, Position, SourceUnit, StructuralError, Target,
};

fn run(text: &str, input: &str) -> String {
    let function = compile(&SourceUnit::parse("program.bf", text)).unwrap();
    Machine::default().run_str(&function, input).unwrap()
}

fn structural(text: &str) -> StructuralError {
    match compile(&SourceUnit::parse("program.bf", text)) {
        Err(CompileFailure::Structural(e)) => e,
        other => panic!("expected a structural error, got {:?}", other),
    }
}

#[test]
fn multiplication_loop_prints_p() {
    let text = "ten times eight\n++++++++++ [> ++++++++ <-] > .";
    assert_eq!(run(text, ""), "P");
}

#[rstest]
#[case::one_char("A", "A")]
#[case::only_first_char_read("xyz", "x")]
#[case::exhausted_input("", "\0")]
fn echo(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(run(",.", input), expected);
}

#[test]
fn single_open_fails_at_offset_zero() {
    let err = structural("[");
    assert!(matches!(err, StructuralError::UnmatchedLoopOpen { .. }));
    assert_eq!(err.position(), Position::new(0, 1, 1));
}

#[test]
fn single_close_fails_at_offset_zero() {
    let err = structural("]");
    assert!(matches!(err, StructuralError::UnmatchedLoopClose { .. }));
    assert_eq!(err.position(), Position::new(0, 1, 1));
}

#[test]
fn cell_wraps_after_256_increments() {
    let text = format!("{}.", "+".repeat(256));
    assert_eq!(run(&text, ""), "\0");
}

#[test]
fn cell_wraps_below_zero() {
    assert_eq!(run("-.", ""), "\u{ff}");
}

#[test]
fn cat_until_exhausted_input() {
    // stops at the first 0 read once input runs out
    assert_eq!(run(",[.,]", "hello"), "hello");
}

#[test]
fn error_position_counts_raw_text() {
    let err = structural("+ +\n  ]");
    assert_eq!(err.position(), Position::new(6, 2, 3));
}

#[test]
fn earliest_unmatched_open_is_reported() {
    let err = structural("[[]  [");
    assert_eq!(err.position().offset, 0);
}

#[rstest]
fn every_target_renders_every_scenario(
    #[values(
        Target::Rust,
        Target::CSharp,
        Target::Python,
        Target::TypeScript,
        Target::Go,
        Target::Java
    )]
    target: Target,
) {
    let compiled = compile_all(&[
        SourceUnit::parse("multiply.bf", "++++++++++[>++++++++<-]>."),
        SourceUnit::parse("echo.bf", ",."),
        SourceUnit::parse("wrap.bf", &format!("{}.", "+".repeat(256))),
        SourceUnit::parse("open.bf", "["),
        SourceUnit::parse("close.bf", "]"),
    ]);

    assert_eq!(compiled.functions.len(), 3);
    assert_eq!(compiled.failures.len(), 2);

    let code = tapegen::render(&compiled, target).unwrap();
    assert_eq!(code, tapegen::render(&compiled, target).unwrap());
    assert!(code.contains("256"));
}
