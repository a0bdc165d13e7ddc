//! Tone placement
//!
//! Picks the nucleus position that carries the tone diacritic. The position
//! is never stored; it is recomputed from (nucleus, coda, rule) each time
//! the syllable is composed, which makes the rule switch free.

use crate::data::chars;

/// Orthographic rule set for tone placement on two-vowel nuclei.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToneRule {
    /// Traditional: nghĩa, mía (ia/ua/ưa carry the tone on the first vowel).
    #[default]
    Old,
    /// Reformed: the same pairs carry it on the final vowel.
    New,
}

/// Index within the nucleus where the tone is drawn.
pub fn tone_index(nucleus: &str, has_coda: bool, rule: ToneRule) -> Option<usize> {
    let v: Vec<char> = nucleus.chars().map(chars::lower).collect();
    if v.is_empty() {
        return None;
    }

    // A marked vowel attracts the tone; the later one wins.
    if let Some(i) = v.iter().rposition(|c| chars::is_marked_vowel(*c)) {
        return Some(i);
    }

    match v.len() {
        1 => Some(0),
        2 if !has_coda => match (v[0], v[1]) {
            ('o', 'a') | ('o', 'e') | ('u', 'y') => Some(1),
            ('i', 'a') | ('u', 'a') => match rule {
                ToneRule::Old => Some(0),
                ToneRule::New => Some(1),
            },
            _ => Some(0), // ao, au, ay, ai, eo, eu...
        },
        2 => Some(0),
        _ => Some(1), // triphthong carries the tone in the middle
    }
}
