//! Composition engine
//!
//! `Session` owns the per-input-context state and routes each keystroke
//! through classifier → translator → parser → composer, answering with what
//! the host should commit and what it should draw as preedit.
//!
//! The raw keystroke record is the single source of truth: transformations
//! are recorded as consumed-modifier flags (plus break markers on revert)
//! and the whole interpretation is reparsed after every mutation. Backspace
//! pops one keystroke and replays the remainder through the same pipeline,
//! so the engine lands on exactly the state of one keystroke earlier.

pub mod buffer;
pub mod output;
pub mod placement;
pub mod syllable;
pub mod validation;

use crate::data::chars::{self, Mark, Tone};
use crate::data::keysyms;
use crate::input::{InputMethod, Translation};
use buffer::{CompositionBuffer, LastTransform, RawKey, TransformKind};
use log::{debug, trace};
use placement::ToneRule;

/// Session construction options.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub input_method: InputMethod,
    pub tone_rule: ToneRule,
    /// Reject transformations that would not form a spellable syllable.
    pub enable_validation: bool,
    /// Second press of the same modifier key undoes its transformation.
    pub enable_double_key_revert: bool,
    /// Bare w is admitted as ư.
    pub enable_w_as_vowel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_method: InputMethod::Telex,
            tone_rule: ToneRule::Old,
            enable_validation: true,
            enable_double_key_revert: true,
            enable_w_as_vowel: true,
        }
    }
}

/// The engine's reply to one key event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessResult {
    /// Whether the engine consumed the key.
    pub handled: bool,
    /// Text the host must insert into the document, NFC.
    pub commit: String,
    /// In-progress composition the host should display, replacing the
    /// previous preedit.
    pub preedit: String,
}

impl ProcessResult {
    fn unhandled() -> Self {
        Self::default()
    }

    fn preedit(preedit: String) -> Self {
        Self {
            handled: true,
            commit: String::new(),
            preedit,
        }
    }

    fn committed(handled: bool, commit: String) -> Self {
        Self {
            handled,
            commit,
            preedit: String::new(),
        }
    }
}

/// One composition session, one per host input context.
///
/// Sessions share nothing; the engine is reentrant across them.
pub struct Session {
    config: Config,
    buf: CompositionBuffer,
    enabled: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            buf: CompositionBuffer::new(),
            enabled: true,
        }
    }

    // ===== Configuration =====

    /// Switching the convention clears the session.
    pub fn set_input_method(&mut self, method: InputMethod) {
        if self.config.input_method != method {
            self.config.input_method = method;
            self.buf.clear();
        }
    }

    pub fn set_tone_rule(&mut self, rule: ToneRule) {
        self.config.tone_rule = rule;
    }

    pub fn set_validation(&mut self, enabled: bool) {
        self.config.enable_validation = enabled;
    }

    pub fn set_double_key_revert(&mut self, enabled: bool) {
        self.config.enable_double_key_revert = enabled;
    }

    pub fn set_w_as_vowel(&mut self, enabled: bool) {
        self.config.enable_w_as_vowel = enabled;
    }

    /// While disabled every key passes through untouched.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.buf.clear();
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ===== Accessors =====

    /// Current preedit string.
    pub fn preedit(&self) -> String {
        self.compose()
    }

    /// Verbatim keystrokes accepted so far, break markers elided.
    pub fn raw_string(&self) -> String {
        self.buf.raw_string()
    }

    /// Clear session state (focus change, window switch).
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    // ===== Key processing =====

    /// Process one key event.
    pub fn process_key(&mut self, keysym: u32, modifiers: u32) -> ProcessResult {
        if !self.enabled {
            return ProcessResult::unhandled();
        }
        trace!("key {keysym:#x} modifiers {modifiers:#x}");

        match keysym {
            keysyms::BACKSPACE => {
                if self.buf.is_empty() {
                    return ProcessResult::unhandled();
                }
                self.buf.pop_key();
                self.replay();
                return ProcessResult::preedit(self.compose());
            }
            keysyms::SPACE => {
                let commit = format!("{} ", self.compose());
                debug!("commit {commit:?}");
                self.buf.clear();
                return ProcessResult::committed(true, commit);
            }
            keysyms::RETURN | keysyms::TAB => {
                if self.buf.is_empty() {
                    return ProcessResult::unhandled();
                }
                let commit = self.compose();
                debug!("commit {commit:?}");
                self.buf.clear();
                return ProcessResult::committed(true, commit);
            }
            keysyms::ESCAPE => {
                self.buf.clear();
                return ProcessResult::preedit(String::new());
            }
            keysyms::DELETE => {
                if self.buf.is_empty() {
                    return ProcessResult::unhandled();
                }
                // commit, then let the host apply Delete to the document
                let commit = self.compose();
                debug!("commit {commit:?}");
                self.buf.clear();
                return ProcessResult::committed(false, commit);
            }
            _ => {}
        }

        // Ctrl/Alt chords reach the application; flush first.
        if keysyms::is_chord(modifiers) {
            if self.buf.is_empty() {
                return ProcessResult::unhandled();
            }
            let commit = self.compose();
            debug!("commit {commit:?} (chord)");
            self.buf.clear();
            return ProcessResult::committed(false, commit);
        }

        let Some(ch) = keysyms::to_char(keysym) else {
            return ProcessResult::unhandled();
        };
        if ch == buffer::BREAK_MARKER {
            // a typed zero-width space would collide with the internal marker
            return ProcessResult::unhandled();
        }

        self.feed(ch);
        ProcessResult::preedit(self.compose())
    }

    /// Run one printable character through the composition pipeline.
    /// Shared between live keystrokes and backspace replay.
    fn feed(&mut self, ch: char) {
        let lc = chars::lower(ch);

        // Double-key revert: the same key again undoes what it did.
        if self.config.enable_double_key_revert
            && !self.buf.last_transform.is_none()
            && lc == self.buf.last_transform.key
        {
            match self.buf.last_transform.kind {
                TransformKind::Tone => {
                    self.buf.tone = Tone::None;
                    self.buf.push(RawKey::modifier(ch));
                }
                TransformKind::VowelMark | TransformKind::Stroke | TransformKind::WAsVowel => {
                    // the marker keeps the parser from re-promoting the pair
                    self.buf.push(RawKey::marker());
                    self.buf.push(RawKey::literal(ch));
                    self.buf.vowel_mark = Mark::None;
                }
                TransformKind::None => {} // guarded above
            }
            self.buf.last_transform.clear();
            self.reparse();
            return;
        }

        let translation = self
            .config
            .input_method
            .translate(ch, &self.buf, self.config.enable_w_as_vowel);

        // Re-applying the tone the syllable already bears toggles it off.
        if let Translation::Tone(tone) = translation {
            if self.buf.tone == tone {
                self.buf.tone = Tone::None;
                self.buf.push(RawKey::modifier(ch));
                self.buf.last_transform.clear();
                self.reparse();
                return;
            }
        }

        let consumed = translation != Translation::Literal;
        if consumed && self.config.enable_validation && !self.would_validate(ch, translation) {
            // non-Vietnamese shape: downgrade to literal
            self.buf.push(RawKey::literal(ch));
            self.buf.last_transform.clear();
            self.reparse();
            return;
        }

        Self::apply(&mut self.buf, ch, translation, &self.config);
    }

    /// Apply a translation to a buffer and reparse it.
    fn apply(buf: &mut CompositionBuffer, ch: char, translation: Translation, config: &Config) {
        let lc = chars::lower(ch);
        let target = buf.syllable.nucleus.chars().last().unwrap_or(lc);
        match translation {
            Translation::Literal => {
                buf.push(RawKey::literal(ch));
                buf.last_transform.clear();
            }
            Translation::Tone(tone) => {
                buf.tone = tone;
                buf.push(RawKey::modifier(ch));
                buf.last_transform = LastTransform {
                    key: lc,
                    kind: TransformKind::Tone,
                    original: target,
                };
            }
            Translation::ToneRemove => {
                buf.tone = Tone::None;
                buf.push(RawKey::modifier(ch));
                buf.last_transform.clear();
            }
            Translation::VowelMark(mark) => {
                buf.vowel_mark = mark;
                buf.push(RawKey::modifier(ch));
                buf.last_transform = LastTransform {
                    key: lc,
                    kind: TransformKind::VowelMark,
                    original: target,
                };
            }
            Translation::Stroke => {
                buf.push(RawKey::modifier(ch));
                buf.last_transform = LastTransform {
                    key: lc,
                    kind: TransformKind::Stroke,
                    original: 'd',
                };
            }
            Translation::WAsVowel => {
                buf.vowel_mark = Mark::Horn;
                buf.push(RawKey::modifier(ch));
                buf.last_transform = LastTransform {
                    key: lc,
                    kind: TransformKind::WAsVowel,
                    original: 'w',
                };
            }
        }
        buf.syllable = syllable::parse(
            buf.units(),
            buf.tone,
            buf.vowel_mark,
            config.enable_w_as_vowel,
        );
    }

    /// Probe whether applying `translation` yields a spellable syllable
    /// with every keystroke accounted for.
    fn would_validate(&self, ch: char, translation: Translation) -> bool {
        let mut probe = self.buf.clone();
        Self::apply(&mut probe, ch, translation, &self.config);
        let tail_empty = probe
            .units()
            .iter()
            .skip(probe.syllable.consumed)
            .all(|u| u.modifier);
        validation::accepts_transform(&probe.syllable, tail_empty)
    }

    fn reparse(&mut self) {
        self.buf.syllable = syllable::parse(
            self.buf.units(),
            self.buf.tone,
            self.buf.vowel_mark,
            self.config.enable_w_as_vowel,
        );
    }

    /// Rebuild state by replaying the remaining keystrokes from scratch.
    fn replay(&mut self) {
        let keys: Vec<char> = self.buf.raw_chars().collect();
        self.buf.clear();
        for c in keys {
            self.feed(c);
        }
    }

    fn compose(&self) -> String {
        output::compose(&self.buf.syllable, self.buf.units(), self.config.tone_rule)
    }
}
