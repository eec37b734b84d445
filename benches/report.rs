// benches/report.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use frc_scout::{csv, generate_report, join, sample, MatchRecord, ReportOptions};

/// The bundled event repeated until it looks like a full season of qualifiers.
fn season(events: u32) -> Vec<MatchRecord> {
    let base = sample::qualification_matches();
    (0..events)
        .flat_map(|e| {
            base.iter().map(move |m| MatchRecord { match_number: e * 100 + m.match_number, ..m.clone() })
        })
        .collect()
}

fn bench_report(c: &mut Criterion) {
    let opts = ReportOptions::default();
    let small = sample::qualification_matches();
    let large = season(200);

    c.bench_function("report_sample", |b| {
        b.iter(|| {
            let rows = generate_report(black_box(&small), &opts).unwrap();
            black_box(rows.len())
        })
    });

    c.bench_function("report_3000_matches", |b| {
        b.iter(|| {
            let rows = generate_report(black_box(&large), &opts).unwrap();
            black_box(rows.len())
        })
    });

    let text: String = large.iter().map(|m| join!(&m.to_row().join(","), "\n")).collect();
    c.bench_function("parse_3000_matches", |b| {
        b.iter(|| {
            let recs = csv::parse_match_text(black_box(&text), b',').unwrap();
            black_box(recs.len())
        })
    });
}

criterion_group!(benches, bench_report);
criterion_main!(benches);
