//! Vikey Vietnamese composition engine core
//!
//! Per-keystroke Vietnamese composition for Telex and VNI: the host
//! framework feeds keysym + modifier events, the engine answers with what
//! to commit into the document and what to draw as the underlined preedit.
//!
//! # FFI Usage
//!
//! ```c
//! // Initialize once at plugin start
//! ime_init();
//! ime_set_method(0);  // 0=Telex, 1=VNI
//!
//! // Process each keystroke
//! ImeResult* r = ime_process_key(keysym, modifiers);
//! if (r && r->handled) {
//!     // insert r->commit, then draw r->preedit underlined
//! }
//! ime_free(r);
//!
//! // Clean up on focus change
//! ime_reset();
//! ```
//!
//! Hosts with several simultaneous input contexts should embed the Rust
//! [`engine::Session`] type directly, one instance per context; the global
//! FFI session is a convenience for single-context plugins.

pub mod data;
pub mod engine;
pub mod input;

use engine::placement::ToneRule;
use engine::{ProcessResult, Session};
use input::InputMethod;
use std::sync::Mutex;

/// Capacity of the UTF-32 text fields crossing the FFI boundary.
pub const MAX: usize = 64;

// Global session instance (thread-safe via Mutex)
static SESSION: Mutex<Option<Session>> = Mutex::new(None);

/// Lock the session mutex, recovering from poisoned state if needed (for tests)
fn lock_session() -> std::sync::MutexGuard<'static, Option<Session>> {
    SESSION.lock().unwrap_or_else(|e| e.into_inner())
}

/// Result for FFI - commit and preedit as UTF-32 with explicit lengths
#[repr(C)]
pub struct ImeResult {
    pub handled: bool,
    pub commit: [u32; MAX],
    pub commit_len: u8,
    pub preedit: [u32; MAX],
    pub preedit_len: u8,
}

impl ImeResult {
    fn from_process_result(r: &ProcessResult) -> Self {
        let mut out = Self {
            handled: r.handled,
            commit: [0; MAX],
            commit_len: 0,
            preedit: [0; MAX],
            preedit_len: 0,
        };
        out.commit_len = fill_utf32(&mut out.commit, &r.commit);
        out.preedit_len = fill_utf32(&mut out.preedit, &r.preedit);
        out
    }
}

/// Copy a string into a fixed UTF-32 buffer, truncating at capacity.
fn fill_utf32(dst: &mut [u32; MAX], s: &str) -> u8 {
    let mut n = 0;
    for c in s.chars().take(MAX) {
        dst[n] = c as u32;
        n += 1;
    }
    n as u8
}

// ============================================================
// FFI Interface
// ============================================================

/// Initialize the global session.
///
/// Must be called before any other `ime_*` function. Safe to call again;
/// it replaces the session with a fresh default one.
#[no_mangle]
pub extern "C" fn ime_init() {
    let mut guard = lock_session();
    *guard = Some(Session::new());
}

/// Process a key event.
///
/// # Arguments
/// * `keysym` - framework keysym (ASCII/Latin-1 code point, 0xFFxx named
///   keys, or codepoint + 0x01000000)
/// * `modifiers` - modifier bitset (Shift=1<<0, Ctrl=1<<2, Alt=1<<3)
///
/// # Returns
/// Pointer to `ImeResult` (free with `ime_free`), or null if the engine
/// was never initialized.
#[no_mangle]
pub extern "C" fn ime_process_key(keysym: u32, modifiers: u32) -> *mut ImeResult {
    let mut guard = lock_session();
    if let Some(ref mut s) = *guard {
        let r = s.process_key(keysym, modifiers);
        Box::into_raw(Box::new(ImeResult::from_process_result(&r)))
    } else {
        std::ptr::null_mut()
    }
}

/// Free a result returned by `ime_process_key`.
///
/// # Safety
/// * `r` must be a pointer returned by `ime_process_key`, or null
/// * Must be called exactly once per non-null result
#[no_mangle]
pub unsafe extern "C" fn ime_free(r: *mut ImeResult) {
    if !r.is_null() {
        drop(Box::from_raw(r));
    }
}

/// Clear the session (focus change, window switch).
/// No-op if not initialized.
#[no_mangle]
pub extern "C" fn ime_reset() {
    let mut guard = lock_session();
    if let Some(ref mut s) = *guard {
        s.reset();
    }
}

/// Enable or disable the engine. While disabled all input passes through.
/// No-op if not initialized.
#[no_mangle]
pub extern "C" fn ime_set_enabled(enabled: bool) {
    let mut guard = lock_session();
    if let Some(ref mut s) = *guard {
        s.set_enabled(enabled);
    }
}

/// Set the input method: 0 = Telex, 1 = VNI. Clears the session.
/// No-op if not initialized.
#[no_mangle]
pub extern "C" fn ime_set_method(method: u8) {
    let mut guard = lock_session();
    if let Some(ref mut s) = *guard {
        s.set_input_method(match method {
            1 => InputMethod::Vni,
            _ => InputMethod::Telex,
        });
    }
}

/// Set the tone placement rule: 0 = old (hòa), 1 = new (hoà... reformed
/// ia/ua pairs). No-op if not initialized.
#[no_mangle]
pub extern "C" fn ime_set_tone_rule(rule: u8) {
    let mut guard = lock_session();
    if let Some(ref mut s) = *guard {
        s.set_tone_rule(if rule == 1 { ToneRule::New } else { ToneRule::Old });
    }
}

/// Enable/disable syllable validation before transformations.
/// No-op if not initialized.
#[no_mangle]
pub extern "C" fn ime_set_validation(enabled: bool) {
    let mut guard = lock_session();
    if let Some(ref mut s) = *guard {
        s.set_validation(enabled);
    }
}

/// Enable/disable double-key revert.
/// No-op if not initialized.
#[no_mangle]
pub extern "C" fn ime_set_double_key_revert(enabled: bool) {
    let mut guard = lock_session();
    if let Some(ref mut s) = *guard {
        s.set_double_key_revert(enabled);
    }
}

/// Enable/disable bare w → ư.
/// No-op if not initialized.
#[no_mangle]
pub extern "C" fn ime_set_w_as_vowel(enabled: bool) {
    let mut guard = lock_session();
    if let Some(ref mut s) = *guard {
        s.set_w_as_vowel(enabled);
    }
}

/// Copy the current preedit as UTF-32 code points into `out`.
///
/// # Returns
/// Number of code points written.
///
/// # Safety
/// `out` must point to valid memory of at least `max_len * sizeof(u32)` bytes.
#[no_mangle]
pub unsafe extern "C" fn ime_get_preedit(out: *mut u32, max_len: i64) -> i64 {
    if out.is_null() || max_len <= 0 {
        return 0;
    }

    let guard = lock_session();
    if let Some(ref s) = *guard {
        let preedit = s.preedit();
        let utf32: Vec<u32> = preedit.chars().map(|c| c as u32).collect();
        let len = utf32.len().min(max_len as usize);
        std::ptr::copy_nonoverlapping(utf32.as_ptr(), out, len);
        len as i64
    } else {
        0
    }
}

// ============================================================
// Tests
// ============================================================
