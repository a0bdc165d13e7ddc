//! VNI input method
//!
//! Tones: 1=sắc, 2=huyền, 3=hỏi, 4=ngã, 5=nặng, 0 removes.
//! Marks: 6=circumflex (â/ê/ô), 7=horn (ơ/ư, uo → ươ), 8=breve (ă), 9=đ.

use super::Translation;
use crate::data::chars::{self, Mark, Tone};
use crate::engine::buffer::CompositionBuffer;

pub(super) fn tone_for(c: char) -> Option<Tone> {
    match c {
        '1' => Some(Tone::Acute),
        '2' => Some(Tone::Grave),
        '3' => Some(Tone::Hook),
        '4' => Some(Tone::Tilde),
        '5' => Some(Tone::Dot),
        _ => None,
    }
}

pub(super) fn translate(c: char, buf: &CompositionBuffer) -> Translation {
    let nucleus = &buf.syllable.nucleus;

    if let Some(tone) = tone_for(c) {
        return if nucleus.is_empty() {
            Translation::Literal
        } else {
            Translation::Tone(tone)
        };
    }

    let nucleus_has = |pred: fn(char) -> bool| {
        nucleus
            .chars()
            .any(|v| pred(chars::strip_mark(chars::lower(v))))
    };

    match c {
        '0' => {
            if nucleus.is_empty() {
                Translation::Literal
            } else {
                Translation::ToneRemove
            }
        }
        '6' => {
            if nucleus_has(|v| matches!(v, 'a' | 'e' | 'o')) {
                Translation::VowelMark(Mark::Circumflex)
            } else {
                Translation::Literal
            }
        }
        '7' => {
            if nucleus_has(|v| matches!(v, 'o' | 'u')) {
                Translation::VowelMark(Mark::Horn)
            } else {
                Translation::Literal
            }
        }
        '8' => {
            if nucleus_has(|v| v == 'a') {
                Translation::VowelMark(Mark::Breve)
            } else {
                Translation::Literal
            }
        }
        '9' => {
            if buf.raw_chars().any(|r| chars::lower(r) == 'd') {
                Translation::Stroke
            } else {
                Translation::Literal
            }
        }
        _ => Translation::Literal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::buffer::RawKey;
    use crate::engine::syllable;

    fn buf_from(s: &str) -> CompositionBuffer {
        let mut buf = CompositionBuffer::new();
        for c in s.chars() {
            buf.push(RawKey::literal(c));
        }
        buf.syllable = syllable::parse(buf.units(), Tone::None, Mark::None, true);
        buf
    }

    #[test]
    fn digit_tones() {
        assert_eq!(translate('1', &buf_from("ba")), Translation::Tone(Tone::Acute));
        assert_eq!(translate('5', &buf_from("viet")), Translation::Tone(Tone::Dot));
        assert_eq!(translate('2', &buf_from("b")), Translation::Literal);
    }

    #[test]
    fn marks_need_a_target() {
        assert_eq!(
            translate('6', &buf_from("te")),
            Translation::VowelMark(Mark::Circumflex)
        );
        assert_eq!(
            translate('7', &buf_from("duoc")),
            Translation::VowelMark(Mark::Horn)
        );
        assert_eq!(
            translate('8', &buf_from("can")),
            Translation::VowelMark(Mark::Breve)
        );
        assert_eq!(translate('6', &buf_from("ti")), Translation::Literal);
        assert_eq!(translate('8', &buf_from("tu")), Translation::Literal);
    }

    #[test]
    fn nine_strokes_d() {
        assert_eq!(translate('9', &buf_from("d")), Translation::Stroke);
        assert_eq!(translate('9', &buf_from("ba")), Translation::Literal);
    }

    #[test]
    fn zero_removes_tone() {
        assert_eq!(translate('0', &buf_from("ba")), Translation::ToneRemove);
        assert_eq!(translate('0', &buf_from("")), Translation::Literal);
    }
}
