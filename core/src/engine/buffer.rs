//! Composition buffer
//!
//! Holds the lossless raw keystroke record for one in-progress word.
//! `raw` is the single source of truth: every transformation is recomputed
//! from it by the parser, so backspace can pop one keystroke and replay the
//! rest to land on the exact prior state.

use crate::data::chars::{Mark, Tone};
use crate::engine::syllable::Syllable;
use smallvec::SmallVec;

/// Zero-width sentinel inserted after a vowel-mark or stroke revert.
/// It tells the parser not to re-promote the doubled-letter pair before it
/// and is filtered from all output.
pub const BREAK_MARKER: char = '\u{200B}';

/// One accepted keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawKey {
    pub ch: char,
    /// True when the translator consumed this key as a transformation
    /// trigger (tone letter, double-letter second half, w, VNI digit)
    /// rather than a literal letter.
    pub modifier: bool,
}

impl RawKey {
    pub fn literal(ch: char) -> Self {
        Self { ch, modifier: false }
    }

    pub fn modifier(ch: char) -> Self {
        Self { ch, modifier: true }
    }

    pub fn marker() -> Self {
        Self { ch: BREAK_MARKER, modifier: true }
    }

    pub fn is_marker(&self) -> bool {
        self.ch == BREAK_MARKER
    }
}

/// Kind of the most recent modifier-key transformation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransformKind {
    #[default]
    None,
    Tone,
    VowelMark,
    Stroke,
    WAsVowel,
}

/// Single-slot undo record. A second press of `key` while this is armed
/// reverts the transformation it recorded.
#[derive(Clone, Copy, Debug, Default)]
pub struct LastTransform {
    /// Lowercased trigger key; meaningful iff `kind != None`.
    pub key: char,
    pub kind: TransformKind,
    /// The letter the transformation targeted, for tracing.
    pub original: char,
}

impl LastTransform {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_none(&self) -> bool {
        self.kind == TransformKind::None
    }
}

/// Per-session mutable composition state.
#[derive(Clone, Debug, Default)]
pub struct CompositionBuffer {
    raw: SmallVec<[RawKey; 16]>,
    /// Latest parsed interpretation of `raw`.
    pub syllable: Syllable,
    /// Tone carried across reparses (applied at composition time).
    pub tone: Tone,
    /// Mark applied by the last vowel-mark transformation; redundant with
    /// nucleus content, kept for the revert bookkeeping.
    pub vowel_mark: Mark,
    pub last_transform: LastTransform,
}

impl CompositionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn units(&self) -> &[RawKey] {
        &self.raw
    }

    pub fn push(&mut self, key: RawKey) {
        self.raw.push(key);
    }

    /// Last real keystroke, markers skipped.
    pub fn last_key(&self) -> Option<RawKey> {
        self.raw.iter().rev().find(|u| !u.is_marker()).copied()
    }

    /// Remove the most recent keystroke together with any break marker that
    /// was inserted for it. Returns false on an empty buffer.
    pub fn pop_key(&mut self) -> bool {
        if self.raw.is_empty() {
            return false;
        }
        self.raw.pop();
        while self.raw.last().is_some_and(|u| u.is_marker()) {
            self.raw.pop();
        }
        true
    }

    /// Verbatim keystrokes as typed, markers elided.
    pub fn raw_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.raw.iter().filter(|u| !u.is_marker()).map(|u| u.ch)
    }

    pub fn raw_string(&self) -> String {
        self.raw_chars().collect()
    }

    pub fn clear(&mut self) {
        self.raw.clear();
        self.syllable = Syllable::default();
        self.tone = Tone::None;
        self.vowel_mark = Mark::None;
        self.last_transform.clear();
    }
}
