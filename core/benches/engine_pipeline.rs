//! Criterion benchmarks for the Vikey composition engine
//!
//! Run: cargo bench --bench engine_pipeline
//! Output: target/criterion/ (HTML reports)

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vikey_core::data::keysyms;
use vikey_core::engine::Session;

fn key(session: &mut Session, c: char) {
    session.process_key(black_box(c as u32), 0);
}

/// Benchmark single key processing (hot path)
fn bench_single_key(c: &mut Criterion) {
    let mut session = Session::new();

    c.bench_function("process_key_single", |b| {
        b.iter(|| {
            session.reset();
            key(&mut session, 'a');
        })
    });
}

/// Benchmark tone application (a + s → á)
fn bench_tone(c: &mut Criterion) {
    let mut session = Session::new();

    c.bench_function("tone_apply", |b| {
        b.iter(|| {
            session.reset();
            key(&mut session, 'a');
            key(&mut session, 's');
        })
    });
}

/// Benchmark circumflex promotion (aa → â)
fn bench_circumflex(c: &mut Criterion) {
    let mut session = Session::new();

    c.bench_function("circumflex_apply", |b| {
        b.iter(|| {
            session.reset();
            key(&mut session, 'a');
            key(&mut session, 'a');
        })
    });
}

/// Benchmark a multi-transform word: đường (d-d-u-o-w-n-g-f)
fn bench_complex_word(c: &mut Criterion) {
    let mut session = Session::new();

    c.bench_function("word_duong", |b| {
        b.iter(|| {
            session.reset();
            for ch in "dduowngf".chars() {
                key(&mut session, ch);
            }
        })
    });
}

/// Benchmark validation-heavy non-Vietnamese input
fn bench_foreign_word(c: &mut Criterion) {
    let mut session = Session::new();

    c.bench_function("word_foreign", |b| {
        b.iter(|| {
            session.reset();
            for ch in "expects".chars() {
                key(&mut session, ch);
            }
        })
    });
}

/// Benchmark backspace replay over a composed word
fn bench_backspace_replay(c: &mut Criterion) {
    let mut session = Session::new();

    c.bench_function("backspace_replay", |b| {
        b.iter(|| {
            session.reset();
            for ch in "nguowif".chars() {
                key(&mut session, ch);
            }
            session.process_key(black_box(keysyms::BACKSPACE), 0);
        })
    });
}

/// Benchmark commit on space
fn bench_commit(c: &mut Criterion) {
    let mut session = Session::new();

    c.bench_function("commit_space", |b| {
        b.iter(|| {
            for ch in "vietj".chars() {
                key(&mut session, ch);
            }
            session.process_key(black_box(keysyms::SPACE), 0);
        })
    });
}

criterion_group!(
    benches,
    bench_single_key,
    bench_tone,
    bench_circumflex,
    bench_complex_word,
    bench_foreign_word,
    bench_backspace_replay,
    bench_commit
);
criterion_main!(benches);
