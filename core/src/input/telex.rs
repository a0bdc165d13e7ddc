//! Telex input method
//!
//! Tones: s=sắc, f=huyền, r=hỏi, x=ngã, j=nặng, z removes.
//! Marks: aa/ee/oo → â/ê/ô, w → ă/ơ/ư (uow → ươ), dd → đ.

use super::Translation;
use crate::data::chars::{self, Mark, Tone};
use crate::engine::buffer::CompositionBuffer;

pub(super) fn tone_for(c: char) -> Option<Tone> {
    match chars::lower(c) {
        's' => Some(Tone::Acute),
        'f' => Some(Tone::Grave),
        'r' => Some(Tone::Hook),
        'x' => Some(Tone::Tilde),
        'j' => Some(Tone::Dot),
        _ => None,
    }
}

pub(super) fn translate(c: char, buf: &CompositionBuffer, w_as_vowel: bool) -> Translation {
    let lc = chars::lower(c);
    let nucleus = &buf.syllable.nucleus;

    if let Some(tone) = tone_for(c) {
        return if nucleus.is_empty() {
            Translation::Literal
        } else {
            Translation::Tone(tone)
        };
    }

    match lc {
        'z' => {
            if nucleus.is_empty() {
                Translation::Literal
            } else {
                Translation::ToneRemove
            }
        }
        'w' => match horn_target(nucleus) {
            Some(mark) => Translation::VowelMark(mark),
            None if nucleus.is_empty() && w_as_vowel => Translation::WAsVowel,
            None => Translation::Literal,
        },
        'a' | 'e' | 'o' => {
            // second half of a doubled letter marks the matching base
            let matches_last = nucleus
                .chars()
                .last()
                .is_some_and(|v| chars::strip_mark(chars::lower(v)) == lc);
            if matches_last {
                Translation::VowelMark(Mark::Circumflex)
            } else {
                Translation::Literal
            }
        }
        'd' => {
            let after_d = buf
                .last_key()
                .is_some_and(|u| !u.modifier && chars::lower(u.ch) == 'd');
            if after_d {
                Translation::Stroke
            } else {
                Translation::Literal
            }
        }
        _ => Translation::Literal,
    }
}

/// Which mark `w` would apply, scanning the nucleus for the last
/// promotable vowel: a → ă (breve), o/u → ơ/ư (horn).
fn horn_target(nucleus: &str) -> Option<Mark> {
    for v in nucleus.chars().rev() {
        match chars::strip_mark(chars::lower(v)) {
            'a' => return Some(Mark::Breve),
            'o' | 'u' => return Some(Mark::Horn),
            _ => {}
        }
    }
    None
}
