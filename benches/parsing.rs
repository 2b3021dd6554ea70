//! Benchmarks for chatpulse parsing and analysis.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- stages`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatpulse::analysis::{ChatAnalysis, Stage};
use chatpulse::config::OutputConfig;
use chatpulse::core::output::{to_csv, to_json};
use chatpulse::core::{FilterConfig, apply_filters};
use chatpulse::parser::ChatParser;
use chatpulse::pipeline::{analyze, run_pipeline};
use chatpulse::{Message, parsing};

// =============================================================================
// Test Data Generators
// =============================================================================

const TEXTS: &[&str] = &[
    "günaydın canım ❤️",
    "bugün çok yorgunum",
    "mutlu değilim",
    "hahaha 😂😂",
    "akşam pizza yiyelim mi",
    "özür dilerim, trafik vardı",
    "image omitted",
    "harika bir gün 😍",
];

fn generate_whatsapp_txt(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 3 == 0 { "Alice" } else { "Bob" };
        let day = (i / 1440) % 28 + 1;
        let hour = (i / 60) % 24;
        let minute = i % 60;
        lines.push(format!(
            "[{:02}.01.24, {:02}:{:02}:00] {}: {}",
            day,
            hour,
            minute,
            sender,
            TEXTS[i % TEXTS.len()]
        ));
    }
    lines.join("\n")
}

fn parsed(count: usize) -> Vec<Message> {
    ChatParser::new().parse(&generate_whatsapp_txt(count)).unwrap()
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_whatsapp_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("whatsapp_parsing");
    let parser = ChatParser::new();

    for size in [100_usize, 1_000, 10_000, 30_000] {
        let txt = generate_whatsapp_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let messages = parser.parse(black_box(txt)).unwrap();
                black_box(messages)
            });
        });
    }
    group.finish();
}

fn bench_emoji_extraction(c: &mut Criterion) {
    let line = "selam 👋 nasılsın 😂😂 🇹🇷 👨‍👩‍👧‍👦 çok güzel ❤️ ".repeat(20);
    c.bench_function("emoji_extraction", |b| {
        b.iter(|| black_box(parsing::whatsapp::extract_emojis(black_box(&line))));
    });
}

// =============================================================================
// Analysis Benchmarks
// =============================================================================

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let messages = parsed(10_000);
    let base = Stage::Statistics.apply(&messages, ChatAnalysis::default()).unwrap();
    let with_emoji = Stage::Emoji.apply(&messages, base.clone()).unwrap();
    group.throughput(Throughput::Elements(messages.len() as u64));

    for stage in Stage::all() {
        let prior = match stage {
            Stage::Statistics => ChatAnalysis::default(),
            Stage::Relationship => with_emoji.clone(),
            _ => base.clone(),
        };
        group.bench_function(stage.name(), |b| {
            b.iter(|| black_box(stage.apply(black_box(&messages), prior.clone()).unwrap()));
        });
    }
    group.finish();
}

fn bench_filter_by_date(c: &mut Criterion) {
    let messages = parsed(10_000);
    let config = FilterConfig::new()
        .with_date_from("2024-01-03")
        .unwrap()
        .with_date_to("2024-01-05")
        .unwrap();

    c.bench_function("filter_by_date", |b| {
        b.iter(|| black_box(apply_filters(black_box(&messages), &config)));
    });
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let analysis = analyze(&parsed(10_000)).unwrap();
    let config = OutputConfig::default();

    group.bench_function("json", |b| {
        b.iter(|| black_box(to_json(black_box(&analysis), &config).unwrap()));
    });
    group.bench_function("csv", |b| {
        b.iter(|| black_box(to_csv(black_box(&analysis), &config).unwrap()));
    });
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    group.sample_size(20);

    for size in [1_000_usize, 10_000, 30_000] {
        let txt = generate_whatsapp_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| black_box(run_pipeline(black_box(txt), None).unwrap()));
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_whatsapp_parsing,
    bench_emoji_extraction,
    bench_stages,
    bench_filter_by_date,
    bench_output,
    bench_full_pipeline,
);

criterion_main!(benches);
