//! Tests for the exit confirmation prompt

#![allow(clippy::expect_used)]

use std::io::Cursor;

use crate::pause::wait_for_confirmation;

#[test]
fn test_prompt_written_and_line_consumed() {
    let mut input = Cursor::new(b"\nrest".to_vec());
    let mut output = Vec::new();

    wait_for_confirmation(&mut input, &mut output).expect("Failed to wait");

    assert_eq!(String::from_utf8(output).expect("utf8"), "Press Enter to continue...");
    assert_eq!(input.position(), 1);
}

#[test]
fn test_eof_does_not_block() {
    let mut input = Cursor::new(Vec::new());
    let mut output = Vec::new();
    assert!(wait_for_confirmation(&mut input, &mut output).is_ok());
}
