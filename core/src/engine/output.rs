//! Output composition
//!
//! Walks the parsed syllable into a Unicode NFC string: onset verbatim,
//! nucleus with the tone drawn at the placer's position, coda verbatim,
//! then any raw keystrokes the parser left unconsumed. Break markers and
//! consumed modifiers never surface.

use crate::data::chars::{self, Tone};
use crate::engine::buffer::RawKey;
use crate::engine::placement::{tone_index, ToneRule};
use crate::engine::syllable::Syllable;

/// Compose the display string for a parsed syllable.
pub fn compose(s: &Syllable, units: &[RawKey], rule: ToneRule) -> String {
    let mut out = String::with_capacity(s.onset.len() + s.nucleus.len() + s.coda.len() + 4);

    out.push_str(&s.onset);

    let toned = if s.tone != Tone::None {
        tone_index(&s.nucleus, s.has_coda(), rule)
    } else {
        None
    };
    for (i, c) in s.nucleus.chars().enumerate() {
        out.push(if toned == Some(i) {
            chars::with_tone(c, s.tone)
        } else {
            c
        });
    }

    out.push_str(&s.coda);

    // unconsumed keystrokes trail the preedit verbatim
    for u in units.iter().skip(s.consumed) {
        if !u.modifier {
            out.push(u.ch);
        }
    }

    out
}
