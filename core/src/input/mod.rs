//! Input methods
//!
//! Telex and VNI are the two romanization conventions the engine speaks.
//! The method is session-scoped configuration that never changes
//! mid-syllable, so dispatch is a tagged enum rather than a trait object.

pub mod telex;
pub mod vni;

use crate::data::chars::{Mark, Tone};
use crate::engine::buffer::CompositionBuffer;

/// What the translator decided for one printable key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Translation {
    /// Not consumed; the key stays a plain character.
    Literal,
    /// Apply a tone to the syllable.
    Tone(Tone),
    /// Explicitly remove the tone (z / 0).
    ToneRemove,
    /// Apply a shape mark to the nucleus (second of aa/ee/oo, w, 6/7/8).
    VowelMark(Mark),
    /// đ substitution (dd / 9).
    Stroke,
    /// Bare consumed w admitted as ư.
    WAsVowel,
}

/// Romanization convention for interpreting modifier keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMethod {
    #[default]
    Telex,
    Vni,
}

impl InputMethod {
    pub fn name(&self) -> &'static str {
        match self {
            InputMethod::Telex => "telex",
            InputMethod::Vni => "vni",
        }
    }

    /// Whether `c` can ever act as a modifier under this method.
    pub fn is_modifier_key(&self, c: char) -> bool {
        match self {
            InputMethod::Telex => crate::data::chars::is_telex_modifier(c),
            InputMethod::Vni => crate::data::chars::is_vni_modifier(c),
        }
    }

    /// The tone `c` maps to, independent of context.
    pub fn tone_for(&self, c: char) -> Option<Tone> {
        match self {
            InputMethod::Telex => telex::tone_for(c),
            InputMethod::Vni => vni::tone_for(c),
        }
    }

    /// Interpret `c` against the current composition state.
    pub fn translate(&self, c: char, buf: &CompositionBuffer, w_as_vowel: bool) -> Translation {
        match self {
            InputMethod::Telex => telex::translate(c, buf, w_as_vowel),
            InputMethod::Vni => vni::translate(c, buf),
        }
    }
}
