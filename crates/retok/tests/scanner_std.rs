#![allow(missing_docs)]

use std::io::{self, Read};
use std::{env, fs, process};

use retok::Scanner;

#[test]
fn scans_tokens_from_a_file() {
    let path = env::temp_dir().join(format!("retok-scanner-std-{}.txt", process::id()));
    fs::write(&path, "alpha beta\ngamma\n").unwrap();
    let mut scanner = Scanner::from_path(&path).unwrap();
    let tokens: Vec<String> = scanner.tokens().collect();
    fs::remove_file(&path).unwrap();
    assert_eq!(tokens, ["alpha", "beta", "gamma"]);
    assert!(scanner.last_error().is_none());
}

#[test]
fn missing_file_fails_at_construction() {
    let path = env::temp_dir().join(format!("retok-scanner-missing-{}", process::id()));
    let err = Scanner::from_path(&path).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

/// Feeds bytes one at a time so every multi-byte scalar is split across
/// reads; the scanner must still see whole characters.
struct OneByteReader {
    bytes: Vec<u8>,
    pos: usize,
}

impl Read for OneByteReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos == self.bytes.len() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.bytes[self.pos];
        self.pos += 1;
        Ok(1)
    }
}

#[test]
fn reader_construction_decodes_incrementally() {
    let text = "héllo wörld 👍";
    let mut scanner = Scanner::from_reader(OneByteReader {
        bytes: text.as_bytes().to_vec(),
        pos: 0,
    });
    let tokens: Vec<String> = scanner.tokens().collect();
    assert_eq!(tokens, ["héllo", "wörld", "👍"]);
    assert!(scanner.last_error().is_none());
}

#[test]
fn custom_delimiter_over_a_reader() {
    let csv = "one;two;;three";
    let mut scanner = Scanner::from_reader(csv.as_bytes());
    scanner.use_delimiter(";+").unwrap();
    let tokens: Vec<String> = scanner.tokens().collect();
    assert_eq!(tokens, ["one", "two", "three"]);
}
