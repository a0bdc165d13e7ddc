//! Keysym constants and decoding
//!
//! The host framework delivers X11-style keysyms: printable ASCII and
//! Latin-1 keys carry their Unicode code point, named keys use the
//! conventional 0xFFxx sentinels, and anything above 0x0100_0000 is a
//! Unicode code point offset by that base.

// Named keys
pub const BACKSPACE: u32 = 0xFF08;
pub const TAB: u32 = 0xFF09;
pub const RETURN: u32 = 0xFF0D;
pub const ESCAPE: u32 = 0xFF1B;
pub const DELETE: u32 = 0xFFFF;
pub const SPACE: u32 = 0x0020;

/// Offset for Unicode keysyms (keysym = codepoint + 0x0100_0000)
pub const UNICODE_OFFSET: u32 = 0x0100_0000;

// Modifier bits
pub const SHIFT_MASK: u32 = 1 << 0;
pub const LOCK_MASK: u32 = 1 << 1;
pub const CONTROL_MASK: u32 = 1 << 2;
pub const MOD1_MASK: u32 = 1 << 3; // Alt
pub const MOD4_MASK: u32 = 1 << 6; // Super

/// Decode a keysym into a printable code point.
///
/// ASCII 0x20-0x7E and Latin-1 0xA0-0xFF map identically; Unicode keysyms
/// subtract the offset. Named keys and anything else yield `None`.
pub fn to_char(keysym: u32) -> Option<char> {
    match keysym {
        0x20..=0x7E | 0xA0..=0xFF => char::from_u32(keysym),
        UNICODE_OFFSET.. => char::from_u32(keysym - UNICODE_OFFSET).filter(|c| *c != '\0'),
        _ => None,
    }
}

/// True if the raw modifier state forces commit + passthrough (Ctrl/Alt chords).
pub fn is_chord(modifiers: u32) -> bool {
    modifiers & (CONTROL_MASK | MOD1_MASK) != 0
}
