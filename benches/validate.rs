//! Validation throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_scramble::{Locale, SessionState, Validator, WordList, WordSet};

fn bench_validate(c: &mut Criterion) {
    let dict = WordSet::from_words(["silk", "worm", "milk", "slim", "swirl", "limo"], Locale::english());
    let validator = Validator::new(dict);
    let state = ["silk", "worm", "milk"]
        .iter()
        .fold(SessionState::new("silkworm"), |state, word| state.record_word(*word));

    c.bench_function("validate_accepted", |b| {
        b.iter(|| validator.validate(black_box("slim"), black_box(&state)))
    });

    c.bench_function("validate_not_derivable", |b| {
        b.iter(|| validator.validate(black_box("silks"), black_box(&state)))
    });

    c.bench_function("record_word", |b| {
        b.iter(|| black_box(&state).record_word("swirl"))
    });
}

fn bench_parse_word_list(c: &mut Criterion) {
    let text: String = WordList::bundled().iter().map(|w| format!("{w}\n")).collect();

    c.bench_function("parse_word_list", |b| b.iter(|| WordList::parse(black_box(&text))));
}

criterion_group!(benches, bench_validate, bench_parse_word_list);
criterion_main!(benches);
