// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the access gate and artifact fingerprints in the
// papersmith-security crate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use papersmith_security::{AccessGate, hash_bytes};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Granted and denied checks should cost the same.
fn bench_gate_check(c: &mut Criterion) {
    let gate = AccessGate::default();
    let long = "x".repeat(256);
    let mut group = c.benchmark_group("gate_check");
    for (label, key) in [("granted", "UNCIF01"), ("denied", "UNCIF02"), ("long", long.as_str())] {
        group.bench_function(label, |b| {
            b.iter(|| black_box(gate.check(black_box(key))));
        });
    }
    group.finish();
}

/// SHA-256 fingerprints at typical export sizes: a text PDF, a JPEG page, and
/// a lossless PNG page.
fn bench_artifact_hash(c: &mut Criterion) {
    let sizes: &[(&str, usize)] = &[
        ("4 KiB", 4 * 1024),
        ("150 KiB", 150 * 1024),
        ("3 MiB", 3 * 1024 * 1024),
    ];

    let mut group = c.benchmark_group("artifact_hash_sha256");
    for &(label, size) in sizes {
        let data = vec![0xABu8; size];
        group.bench_function(label, |b| {
            b.iter(|| black_box(hash_bytes(black_box(&data))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_gate_check, bench_artifact_hash);
criterion_main!(benches);
