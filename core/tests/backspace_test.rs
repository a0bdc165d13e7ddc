//! Backspace inverse property
//!
//! Feeding a sequence and then backspacing k keystrokes must land on
//! exactly the state reached by typing the sequence without its last k
//! keystrokes: same preedit, same raw record, from any starting point.

mod common;

use common::type_keys;
use vikey_core::data::keysyms;
use vikey_core::engine::{Config, Session};
use vikey_core::input::InputMethod;

const TELEX_SEQUENCES: &[&str] = &[
    "nguowif", "dduowcj", "tiengf", "nghiax", "hoaf", "vietj", "truowngf", "chwaf", "aaa", "aaaa",
    "ass", "asss", "asos", "uww", "dddd", "abc", "abcs", "a1b2", "expects", "quyr", "www",
    "chwngs",
];

const VNI_SEQUENCES: &[&str] = &["duoc75", "d9uoc75", "viet650", "nguoi72", "a9", "can8"];

fn snapshot(s: &Session) -> (String, String) {
    (s.preedit(), s.raw_string())
}

fn check_inverse(config: Config, sequence: &str) {
    let keys: Vec<char> = sequence.chars().collect();
    for cut in 0..keys.len() {
        let mut walked = Session::with_config(config);
        type_keys(&mut walked, sequence);
        for _ in cut..keys.len() {
            let r = walked.process_key(keysyms::BACKSPACE, 0);
            assert!(r.handled, "backspace on non-empty buffer is handled");
            assert!(r.commit.is_empty(), "backspace never commits");
        }

        let mut direct = Session::with_config(config);
        let prefix: String = keys[..cut].iter().collect();
        type_keys(&mut direct, &prefix);

        assert_eq!(
            snapshot(&walked),
            snapshot(&direct),
            "sequence {sequence:?} cut at {cut}"
        );
    }
}

#[test]
fn telex_backspace_is_inverse() {
    for sequence in TELEX_SEQUENCES {
        check_inverse(Config::default(), sequence);
    }
}

#[test]
fn vni_backspace_is_inverse() {
    let config = Config {
        input_method: InputMethod::Vni,
        ..Config::default()
    };
    for sequence in VNI_SEQUENCES {
        check_inverse(config, sequence);
    }
}

#[test]
fn full_walk_back_empties_the_session() {
    let mut s = Session::new();
    type_keys(&mut s, "abc");
    for expected in ["ab", "a", ""] {
        let r = s.process_key(keysyms::BACKSPACE, 0);
        assert!(r.handled);
        assert_eq!(r.preedit, expected);
    }
    // nothing left: backspace passes through
    let r = s.process_key(keysyms::BACKSPACE, 0);
    assert!(!r.handled);
}

#[test]
fn replay_is_deterministic() {
    // identical keystrokes from reset produce identical replies
    let run = |seq: &str| -> Vec<(bool, String, String)> {
        let mut s = Session::new();
        seq.chars()
            .map(|c| {
                let r = s.process_key(c as u32, 0);
                (r.handled, r.commit, r.preedit)
            })
            .collect()
    };
    for seq in TELEX_SEQUENCES {
        assert_eq!(run(seq), run(seq), "sequence {seq:?}");
    }
}

#[test]
fn commit_snapshots_the_preedit() {
    let mut s = Session::new();
    type_keys(&mut s, "nguowif");
    let before = s.preedit();
    let r = s.process_key(keysyms::SPACE, 0);
    assert_eq!(r.commit, format!("{before} "));
    assert_eq!(s.preedit(), "");
}
