//! Vietnamese syllable parser
//!
//! Segments the raw keystroke record into onset / nucleus / coda, applying
//! the contextual vowel promotions (aa → â, uow → ươ, iê/uô under a coda)
//! recorded by consumed modifier keys. The parser is lenient: it never
//! rejects, it only stops consuming. Whatever it cannot account for stays
//! as a literal tail that the composer appends verbatim.
//!
//! Parsing is a pure function of the raw record plus the tone / vowel-mark
//! tags carried by the controller, which is what makes backspace replay
//! deterministic.

use crate::data::chars::{self, Mark, Tone};
use crate::engine::buffer::RawKey;

/// Parsed interpretation of the raw record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Syllable {
    /// Initial consonant cluster (phụ âm đầu), đ substitution applied.
    pub onset: String,
    /// Vocalic core (âm chính), shape marks applied, tones not.
    pub nucleus: String,
    /// Final consonant (âm cuối).
    pub coda: String,
    /// Tone to draw at composition time.
    pub tone: Tone,
    /// Mark applied by the last vowel-mark transformation.
    pub vowel_mark: Mark,
    /// Cursor into the raw record: units before it are fully accounted.
    pub consumed: usize,
    /// Count of units treated as consumed modifier keys (or markers).
    pub consumed_modifiers: usize,
}

impl Syllable {
    pub fn has_nucleus(&self) -> bool {
        !self.nucleus.is_empty()
    }

    pub fn has_coda(&self) -> bool {
        !self.coda.is_empty()
    }
}

#[derive(PartialEq)]
enum Phase {
    Onset,
    Nucleus,
    Coda,
}

/// Parse the raw record into a syllable.
///
/// `tone` and `vowel_mark` are preserved into the result; `w_as_vowel`
/// admits a bare consumed `w` as ư.
pub fn parse(units: &[RawKey], tone: Tone, vowel_mark: Mark, w_as_vowel: bool) -> Syllable {
    let mut s = Syllable {
        tone,
        vowel_mark,
        ..Default::default()
    };
    let mut phase = Phase::Onset;
    let mut in_tail = false;

    for (i, u) in units.iter().enumerate() {
        if u.is_marker() {
            s.consumed_modifiers += 1;
            if !in_tail {
                s.consumed = i + 1;
            }
            continue;
        }
        if u.modifier {
            s.consumed_modifiers += 1;
            // a marker right behind the trigger means its transformation
            // was reverted; the trigger is inert on reparse
            let reverted = units.get(i + 1).is_some_and(|m| m.is_marker());
            if !reverted {
                apply_trigger(&mut s, u.ch, w_as_vowel);
            }
            if !in_tail {
                s.consumed = i + 1;
            }
            continue;
        }
        if in_tail {
            continue;
        }

        // a consumed w may have seeded the nucleus while we were still
        // scanning the onset (chw → chư)
        if phase == Phase::Onset && !s.nucleus.is_empty() {
            phase = Phase::Nucleus;
        }

        let c = u.ch;
        let accepted = match phase {
            Phase::Onset => {
                if chars::is_vowel(c) {
                    phase = Phase::Nucleus;
                    s.nucleus.push(c);
                    true
                } else if chars::is_consonant(c) || chars::is_telex_tone_letter(c) {
                    // tone letters cannot begin a syllable; fold them into
                    // the onset scan so the vowel search continues past them
                    s.onset.push(c);
                    true
                } else {
                    false
                }
            }
            Phase::Nucleus => {
                if chars::is_vowel(c) && s.nucleus.chars().count() < 3 {
                    s.nucleus.push(c);
                    true
                } else if chars::is_consonant(c) && coda_accepts(&s.coda, c) {
                    phase = Phase::Coda;
                    s.coda.push(c);
                    true
                } else {
                    false
                }
            }
            Phase::Coda => {
                if chars::is_consonant(c) && coda_accepts(&s.coda, c) {
                    s.coda.push(c);
                    true
                } else {
                    false
                }
            }
        };

        if accepted {
            s.consumed = i + 1;
        } else {
            in_tail = true;
        }
    }

    promote_digraph_onset(&mut s);
    if s.has_coda() {
        promote_compound_nucleus(&mut s);
    }
    s
}

/// Whether `c` may extend the current coda: singles c m n p t, then
/// ch / ng / nh as the preferred two-letter finals.
fn coda_accepts(coda: &str, c: char) -> bool {
    let lc = chars::lower(c);
    let mut it = coda.chars();
    match (it.next().map(chars::lower), it.next()) {
        (None, _) => matches!(lc, 'c' | 'm' | 'n' | 'p' | 't'),
        (Some('c'), None) => lc == 'h',
        (Some('n'), None) => lc == 'g' || lc == 'h',
        _ => false,
    }
}

/// Apply a consumed modifier key to the structure parsed so far.
fn apply_trigger(s: &mut Syllable, trigger: char, w_as_vowel: bool) {
    match chars::lower(trigger) {
        // tone letters and digits only carry the tone tag, already set
        's' | 'f' | 'r' | 'x' | 'j' | 'z' | '1' | '2' | '3' | '4' | '5' | '0' => {}
        'w' => apply_horn_breve(s, trigger, w_as_vowel),
        'a' | 'e' | 'o' => {
            let base = chars::lower(trigger);
            remark_nucleus(s, Mark::Circumflex, |c| chars::strip_mark(chars::lower(c)) == base);
        }
        'd' | '9' => stroke_onset(s),
        '6' => remark_nucleus(s, Mark::Circumflex, |c| {
            matches!(chars::strip_mark(chars::lower(c)), 'a' | 'e' | 'o')
        }),
        '7' => apply_horn_compound(s),
        '8' => remark_nucleus(s, Mark::Breve, |c| chars::strip_mark(chars::lower(c)) == 'a'),
        _ => {}
    }
}

/// Telex `w`: horn/breve on the last promotable nucleus vowel, with the
/// `uow → ươ` compound; a bare consumed `w` becomes ư when admitted.
fn apply_horn_breve(s: &mut Syllable, trigger: char, w_as_vowel: bool) {
    if s.nucleus.is_empty() {
        if w_as_vowel {
            s.nucleus.push(if trigger.is_uppercase() { 'Ư' } else { 'ư' });
        }
        return;
    }
    let mut v: Vec<char> = s.nucleus.chars().collect();
    for i in (0..v.len()).rev() {
        match chars::strip_mark(chars::lower(v[i])) {
            'a' => {
                if let Some(m) = chars::apply_mark(v[i], Mark::Breve) {
                    v[i] = m;
                }
                break;
            }
            'o' => {
                if let Some(m) = chars::apply_mark(v[i], Mark::Horn) {
                    v[i] = m;
                }
                if i > 0 && chars::strip_mark(chars::lower(v[i - 1])) == 'u' {
                    if let Some(m) = chars::apply_mark(v[i - 1], Mark::Horn) {
                        v[i - 1] = m;
                    }
                }
                break;
            }
            'u' => {
                if let Some(m) = chars::apply_mark(v[i], Mark::Horn) {
                    v[i] = m;
                }
                break;
            }
            _ => {}
        }
    }
    s.nucleus = v.into_iter().collect();
}

/// VNI `7`: horn on the last o/u, promoting the `uo` compound as a pair.
fn apply_horn_compound(s: &mut Syllable) {
    let mut v: Vec<char> = s.nucleus.chars().collect();
    for i in (0..v.len()).rev() {
        match chars::strip_mark(chars::lower(v[i])) {
            'o' => {
                if let Some(m) = chars::apply_mark(v[i], Mark::Horn) {
                    v[i] = m;
                }
                if i > 0 && chars::strip_mark(chars::lower(v[i - 1])) == 'u' {
                    if let Some(m) = chars::apply_mark(v[i - 1], Mark::Horn) {
                        v[i - 1] = m;
                    }
                }
                break;
            }
            'u' => {
                if let Some(m) = chars::apply_mark(v[i], Mark::Horn) {
                    v[i] = m;
                }
                break;
            }
            _ => {}
        }
    }
    s.nucleus = v.into_iter().collect();
}

/// Re-mark the last nucleus letter matching `eligible`.
fn remark_nucleus(s: &mut Syllable, mark: Mark, eligible: impl Fn(char) -> bool) {
    let mut v: Vec<char> = s.nucleus.chars().collect();
    if let Some(i) = v.iter().rposition(|c| eligible(*c)) {
        if let Some(m) = chars::apply_mark(v[i], mark) {
            v[i] = m;
        }
    }
    s.nucleus = v.into_iter().collect();
}

/// đ substitution on the last plain d of the onset.
fn stroke_onset(s: &mut Syllable) {
    let mut v: Vec<char> = s.onset.chars().collect();
    if let Some(i) = v.iter().rposition(|c| chars::lower(*c) == 'd') {
        if let Some(m) = chars::apply_mark(v[i], Mark::Stroke) {
            v[i] = m;
        }
    }
    s.onset = v.into_iter().collect();
}

/// `q·u·V` and `g·i·V` fold the second letter into the onset (qua, giàu);
/// standalone `qu` / `gi` keep it as nucleus.
fn promote_digraph_onset(s: &mut Syllable) {
    if s.nucleus.chars().count() < 2 {
        return;
    }
    let onset_lc: String = s.onset.chars().map(chars::lower).collect();
    let first = match s.nucleus.chars().next() {
        Some(c) => c,
        None => return,
    };
    let folds = match (onset_lc.as_str(), chars::lower(first)) {
        ("q", 'u') | ("g", 'i') => true,
        _ => false,
    };
    if folds {
        s.onset.push(first);
        s.nucleus = s.nucleus.chars().skip(1).collect();
    }
}

/// Under a coda, `ie` opens to `iê` and `uo` to `uô` (tiêng, buôn).
fn promote_compound_nucleus(s: &mut Syllable) {
    let mut v: Vec<char> = s.nucleus.chars().collect();
    if v.len() < 2 {
        return;
    }
    let (a, b) = (chars::lower(v[0]), chars::lower(v[1]));
    if (a == 'i' && b == 'e') || (a == 'u' && b == 'o') {
        if let Some(m) = chars::apply_mark(v[1], Mark::Circumflex) {
            v[1] = m;
        }
        s.nucleus = v.into_iter().collect();
    }
}
