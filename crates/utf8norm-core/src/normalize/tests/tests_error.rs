//! Tests for NormalizeError

use std::io;
use std::path::{Path, PathBuf};

use crate::normalize::NormalizeError;

#[test]
fn test_io_error_exposes_kind_and_path() {
    let err = NormalizeError::io("/src/a.h", io::Error::from(io::ErrorKind::PermissionDenied));
    assert_eq!(err.kind(), Some(io::ErrorKind::PermissionDenied));
    assert_eq!(err.path(), Path::new("/src/a.h"));
}

#[test]
fn test_io_error_display_names_file() {
    let err = NormalizeError::io("/src/a.h", io::Error::new(io::ErrorKind::NotFound, "gone"));
    assert_eq!(err.to_string(), "I/O error on /src/a.h: gone");
}

#[test]
fn test_decode_error_display() {
    let err = NormalizeError::Decode {
        path: PathBuf::from("/src/b.cpp"),
        encoding: "Shift_JIS",
    };
    assert_eq!(err.to_string(), "/src/b.cpp is not valid Shift_JIS");
    assert_eq!(err.kind(), None);
}
