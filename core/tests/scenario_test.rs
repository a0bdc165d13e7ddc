//! End-to-end composition scenarios
//!
//! Each case is a complete keystroke sequence from reset; the expectation
//! is the preedit after the last keystroke.

mod common;

use common::{preedit_of, preedit_with, type_keys};
use rstest::rstest;
use vikey_core::data::keysyms;
use vikey_core::engine::placement::ToneRule;
use vikey_core::engine::{Config, Session};
use vikey_core::input::InputMethod;

#[rstest]
#[case("nguowif", "người")]
#[case("dduowcj", "được")]
#[case("tiengf", "tiềng")]
#[case("nghiax", "nghĩa")]
#[case("hoaf", "hoà")]
#[case("vietj", "việt")]
#[case("truowngf", "trường")]
#[case("ddieemr", "điểm")]
#[case("banj", "bạn")]
#[case("xinh", "xinh")]
#[case("quaf", "quà")]
#[case("quyr", "quỷ")]
#[case("giaf", "già")]
#[case("muaf", "mùa")]
#[case("chwaf", "chừa")]
#[case("chwngs", "chứng")]
#[case("hoaw", "hoă")]
#[case("buonf", "buồn")]
#[case("khoer", "khoẻ")]
#[case("thuys", "thuý")]
fn telex_words(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(preedit_of(input), expected, "input {input:?}");
}

#[rstest]
#[case("viets", "viết")] // ie already opened to iê by the coda
#[case("vieejt", "việt")] // mark-before-coda typing order
#[case("ddaix", "đãi")]
fn telex_typing_orders(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(preedit_of(input), expected, "input {input:?}");
}

#[rstest]
#[case("duoc75", "dược")]
#[case("d9uoc75", "được")]
#[case("viet65", "việt")]
#[case("nguoi72", "người")]
#[case("can8", "căn")]
#[case("a1", "á")]
#[case("a6", "â")]
#[case("o7", "ơ")]
#[case("u71", "ứ")]
#[case("a9", "a9")] // no d anywhere: digit stays literal
#[case("6a", "6a")] // no target at all
fn vni_words(#[case] input: &str, #[case] expected: &str) {
    let config = Config {
        input_method: InputMethod::Vni,
        ..Config::default()
    };
    assert_eq!(preedit_with(config, input), expected, "input {input:?}");
}

#[rstest]
#[case("miaf", "mìa", "mià")]
#[case("nghiax", "nghĩa", "nghiã")]
#[case("muaf", "mùa", "muà")]
#[case("hoaf", "hoà", "hoà")] // oa is second-vowel under both rules
fn tone_rule_split(#[case] input: &str, #[case] old: &str, #[case] new: &str) {
    assert_eq!(preedit_of(input), old);
    let config = Config {
        tone_rule: ToneRule::New,
        ..Config::default()
    };
    assert_eq!(preedit_with(config, input), new);
}

#[test]
fn mixed_input_keeps_literal_tail() {
    assert_eq!(preedit_of("abcs"), "abcs");
    assert_eq!(preedit_of("zo"), "zo");
    assert_eq!(preedit_of("a1b2"), "a1b2");
}

#[test]
fn space_commits_preedit_plus_space() {
    let mut s = Session::new();
    type_keys(&mut s, "vietj");
    let r = s.process_key(keysyms::SPACE, 0);
    assert!(r.handled);
    assert_eq!(r.commit, "việt ");
    assert_eq!(r.preedit, "");
}

#[test]
fn enter_commits_and_lets_host_handle_newline() {
    let mut s = Session::new();
    type_keys(&mut s, "tiengf");
    let r = s.process_key(keysyms::RETURN, 0);
    assert!(r.handled);
    assert_eq!(r.commit, "tiềng");
    assert_eq!(r.preedit, "");
}

#[test]
fn tab_commits_when_composing() {
    let mut s = Session::new();
    type_keys(&mut s, "as");
    let r = s.process_key(keysyms::TAB, 0);
    assert!(r.handled);
    assert_eq!(r.commit, "á");

    let r = s.process_key(keysyms::TAB, 0);
    assert!(!r.handled);
}

#[test]
fn words_continue_after_commit() {
    let mut s = Session::new();
    type_keys(&mut s, "vietj");
    s.process_key(keysyms::SPACE, 0);
    let r = type_keys(&mut s, "nam");
    assert_eq!(r.preedit, "nam");
    assert_eq!(s.raw_string(), "nam");
}

#[test]
fn w_as_vowel_respects_validation() {
    // ngư is spellable, kư is not (k before u)
    assert_eq!(preedit_of("ngw"), "ngư");
    assert_eq!(preedit_of("kw"), "kw");
}

#[test]
fn w_as_vowel_can_be_disabled() {
    let config = Config {
        enable_w_as_vowel: false,
        ..Config::default()
    };
    assert_eq!(preedit_with(config, "w"), "w");
    assert_eq!(preedit_with(config, "chwa"), "chwa");
}

#[test]
fn uppercase_is_preserved() {
    assert_eq!(preedit_of("Vietj"), "Việt");
    assert_eq!(preedit_of("DDuowcj"), "Được");
    assert_eq!(preedit_of("AA"), "Â");
}
