//! Shared helpers for integration tests
#![allow(dead_code)] // not every test binary uses every helper

use vikey_core::engine::{Config, ProcessResult, Session};

/// Feed a string of printable keys, returning the last result.
pub fn type_keys(session: &mut Session, input: &str) -> ProcessResult {
    let mut last = ProcessResult::default();
    for c in input.chars() {
        last = session.process_key(c as u32, 0);
    }
    last
}

/// Preedit after typing `input` into a fresh default (Telex) session.
pub fn preedit_of(input: &str) -> String {
    let mut session = Session::new();
    type_keys(&mut session, input);
    session.preedit()
}

/// Preedit after typing `input` into a fresh session with `config`.
pub fn preedit_with(config: Config, input: &str) -> String {
    let mut session = Session::with_config(config);
    type_keys(&mut session, input);
    session.preedit()
}
