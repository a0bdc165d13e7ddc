//! Vietnamese syllable validation
//!
//! Rule-based: each rule is a small check that returns Some(reason) when it
//! rejects. The parser never consults these rules; the controller does,
//! to decide whether a transformation may apply or must fall back to
//! literal input. The c/k, g/gh, ng/ngh spelling rules are advisory only:
//! nothing rewrites the offending onset.

use crate::data::chars;
use crate::engine::syllable::Syllable;

/// Validation outcome with the reason a shape was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    NoVowel,
    InvalidInitial,
    InvalidFinal,
    SpellingRuleViolation,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

// =============================================================================
// DATA TABLES
// =============================================================================

/// Valid single initial consonants
const INITIALS_1: &[char] = &[
    'b', 'c', 'd', 'đ', 'g', 'h', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'x',
];

/// Valid double initial consonants
const INITIALS_2: &[&str] = &[
    "ch", "gh", "gi", "kh", "ng", "nh", "ph", "qu", "th", "tr",
];

/// Valid final consonants and semivowels
const FINALS_1: &[char] = &['c', 'm', 'n', 'p', 't', 'i', 'y', 'o', 'u'];
const FINALS_2: &[&str] = &["ch", "ng", "nh"];

/// Spelling rules: (onset, forbidden first nucleus vowels).
/// A match means the pairing is misspelled (c trước e/i/y phải là k, ...).
const SPELLING_RULES: &[(&str, &[char])] = &[
    ("c", &['e', 'i', 'y']),
    ("k", &['a', 'o', 'u']),
    ("g", &['e']),
    ("ng", &['e', 'i']),
    ("gh", &['a', 'o', 'u']),
    ("ngh", &['a', 'o', 'u']),
];

// =============================================================================
// RULES
// =============================================================================

type Rule = fn(&str, &str, &str) -> Option<ValidationResult>;

const RULES: &[Rule] = &[rule_has_vowel, rule_valid_initial, rule_spelling, rule_valid_final];

fn rule_has_vowel(_onset: &str, nucleus: &str, _coda: &str) -> Option<ValidationResult> {
    if nucleus.is_empty() {
        return Some(ValidationResult::NoVowel);
    }
    None
}

fn rule_valid_initial(onset: &str, _nucleus: &str, _coda: &str) -> Option<ValidationResult> {
    if onset.is_empty() {
        return None;
    }
    let ok = match onset.chars().count() {
        1 => INITIALS_1.contains(&onset.chars().next().unwrap_or_default()),
        2 => INITIALS_2.contains(&onset),
        3 => onset == "ngh",
        _ => false,
    };
    if !ok {
        return Some(ValidationResult::InvalidInitial);
    }
    None
}

fn rule_spelling(onset: &str, nucleus: &str, _coda: &str) -> Option<ValidationResult> {
    if onset.is_empty() || nucleus.is_empty() {
        return None;
    }
    // compare on the bare vowel: spelling is about the letter, not its mark
    let first_vowel = match nucleus.chars().next() {
        Some(c) => chars::strip_mark(c),
        None => return None,
    };
    for (initial, forbidden) in SPELLING_RULES {
        if onset == *initial && forbidden.contains(&first_vowel) {
            return Some(ValidationResult::SpellingRuleViolation);
        }
    }
    None
}

fn rule_valid_final(_onset: &str, _nucleus: &str, coda: &str) -> Option<ValidationResult> {
    if coda.is_empty() {
        return None;
    }
    let ok = match coda.chars().count() {
        1 => FINALS_1.contains(&coda.chars().next().unwrap_or_default()),
        2 => FINALS_2.contains(&coda),
        _ => false,
    };
    if !ok {
        return Some(ValidationResult::InvalidFinal);
    }
    None
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Validate an (onset, nucleus, coda) candidate. Inputs may carry any case.
pub fn validate(onset: &str, nucleus: &str, coda: &str) -> ValidationResult {
    let onset: String = onset.chars().map(chars::lower).collect();
    let nucleus: String = nucleus.chars().map(chars::lower).collect();
    let coda: String = coda.chars().map(chars::lower).collect();

    for rule in RULES {
        if let Some(reason) = rule(&onset, &nucleus, &coda) {
            return reason;
        }
    }
    ValidationResult::Valid
}

/// Whether a parsed syllable may absorb a transformation: the shape must be
/// spellable and the parser must have accounted for every keystroke.
/// A vowelless prefix (đ, ngh-) passes, since the nucleus may still come.
pub fn accepts_transform(s: &Syllable, tail_empty: bool) -> bool {
    if !tail_empty {
        return false;
    }
    match validate(&s.onset, &s.nucleus, &s.coda) {
        ValidationResult::Valid => true,
        ValidationResult::NoVowel => s.coda.is_empty() && is_initial_prefix(&s.onset),
        _ => false,
    }
}

/// True when `onset` is a valid initial or the prefix of one (g → gh/gi,
/// n → ng → ngh, ...), so more letters may legitimately follow.
fn is_initial_prefix(onset: &str) -> bool {
    if onset.is_empty() {
        return true;
    }
    let onset: String = onset.chars().map(chars::lower).collect();
    INITIALS_1.contains(&onset.chars().next().unwrap_or_default()) && onset.chars().count() == 1
        || INITIALS_2.contains(&onset.as_str())
        || "ngh".starts_with(onset.as_str())
}
