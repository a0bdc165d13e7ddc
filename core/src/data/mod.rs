//! Data module - character tables and keysym conventions

pub mod chars;
pub mod keysyms;

pub use chars::{is_consonant, is_marked_vowel, is_vowel, Mark, Tone};
