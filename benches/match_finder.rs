use criterion::{black_box, criterion_group, criterion_main, Criterion};
use relfind::buffer::{Position, TextDocument};
use relfind::search::{get_matches, SearchMode};
use std::time::Duration;

fn sample_document(lines: usize) -> TextDocument {
    let line = "The quick brown fox jumps over the lazy dog; the dog sleeps.";
    let text = vec![line; lines].join("\n");
    TextDocument::from_str(&text)
}

/// キー入力1回分の再計算（文書全体の走査と並べ替え）
fn bench_get_matches(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_matches");
    group.measurement_time(Duration::from_secs(5));

    // 一般的なノート程度
    let small = sample_document(200);
    group.bench_function("small_forward", |b| {
        b.iter(|| {
            get_matches(
                black_box(&small),
                black_box("the"),
                SearchMode::Forward,
                Position::new(100, 0),
            )
        })
    });

    // 大きめの文書
    let large = sample_document(20_000);
    group.bench_function("large_backward", |b| {
        b.iter(|| {
            get_matches(
                black_box(&large),
                black_box("dog"),
                SearchMode::Backward,
                Position::new(10_000, 30),
            )
        })
    });

    // 1文字クエリ（候補が最も多い）
    group.bench_function("large_single_char", |b| {
        b.iter(|| {
            get_matches(
                black_box(&large),
                black_box("e"),
                SearchMode::Forward,
                Position::origin(),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_get_matches);
criterion_main!(benches);
