use accent_core::render::render_accents_with;
use accent_core::romaji::{romanize_with, RomajiTable};
use accent_core::settings::{parse_settings_toml, DEFAULT_SETTINGS_TOML};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const WORDS: &[&str] = &[
    "ア",
    "ト＊ウ",
    "カ・キ",
    "トウキョウ",
    "カ／ン・コク",
    "ア／キャ・ク",
    "ト／ウキョ＝",
    "ジ／ドウハンバイ・キ",
];

fn bench_render(c: &mut Criterion) {
    let settings = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
    let mut group = c.benchmark_group("render_accents");
    for word in WORDS {
        group.bench_with_input(BenchmarkId::from_parameter(word), word, |b, w| {
            b.iter(|| render_accents_with(&settings, w, true))
        });
    }
    group.finish();
}

fn bench_plain(c: &mut Criterion) {
    let settings = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
    c.bench_function("strip_all_words", |b| {
        b.iter(|| {
            WORDS
                .iter()
                .map(|w| render_accents_with(&settings, w, false).len())
                .sum::<usize>()
        })
    });
}

fn bench_romanize(c: &mut Criterion) {
    let settings = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
    let table = RomajiTable::global();
    c.bench_function("romanize_all_words", |b| {
        b.iter(|| {
            WORDS
                .iter()
                .map(|w| romanize_with(&settings, table, w).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_render, bench_plain, bench_romanize);
criterion_main!(benches);
