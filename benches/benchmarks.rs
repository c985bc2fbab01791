//! Benchmarks for repo-compliance.

#![allow(missing_docs)]
#![allow(let_underscore_drop)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use repo_compliance::core::version;
use repo_compliance::{check_repository, templates, Detector};
use tempfile::TempDir;

fn benchmark_version_compare(c: &mut Criterion) {
    let pairs = [
        ("24.10.0", "24.0.0"),
        ("0.8.0", "0.1.0"),
        ("1.7.10", "1.7.9"),
        ("2024.01-rc1", "2024.1"),
    ];

    c.bench_function("version_compare", |b| {
        b.iter(|| {
            for (current, minimum) in pairs {
                black_box(version::compare(black_box(current), black_box(minimum)));
            }
        });
    });
}

fn benchmark_profile_detection(c: &mut Criterion) {
    let temp = TempDir::new().expect("create temp dir");
    std::fs::write(temp.path().join("package.json"), "{}").expect("write package.json");

    c.bench_function("profile_detection", |b| {
        b.iter(|| black_box(Detector::new(black_box(temp.path())).detect_with_reason()));
    });
}

fn benchmark_check_repository(c: &mut Criterion) {
    let temp = TempDir::new().expect("create temp dir");
    let root = temp.path();
    std::fs::write(root.join("pyproject.toml"), "").expect("write pyproject");
    std::fs::write(root.join("CLAUDE.md"), templates::claude_md("Bench")).expect("write");
    std::fs::write(
        root.join(".pre-commit-config.yaml"),
        templates::PRECOMMIT_CONFIG_TEMPLATE,
    )
    .expect("write pre-commit config");

    c.bench_function("check_repository_python", |b| {
        b.iter(|| black_box(check_repository(black_box(root))));
    });
}

criterion_group!(
    benches,
    benchmark_version_compare,
    benchmark_profile_detection,
    benchmark_check_repository
);
criterion_main!(benches);
