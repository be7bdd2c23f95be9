//! Benchmarks for sidebar validation and traversal.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sb_sidebars::{RawRegistry, SidebarRegistry, ValidationPolicy};
use serde_json::{Value, json};

/// Create a sidebar literal with specified depth and breadth.
fn create_sidebar(depth: usize, breadth: usize) -> Value {
    fn create_level(prefix: &str, current_depth: usize, max_depth: usize, breadth: usize) -> Value {
        let mut items = Vec::with_capacity(breadth * 2);
        for i in 0..breadth {
            let id = format!("{prefix}/doc-{i}");
            items.push(Value::String(id));
            if current_depth < max_depth {
                let section = format!("{prefix}/section-{i}");
                items.push(json!({
                    "type": "category",
                    "label": format!("Section {i}"),
                    "link": {"type": "doc", "id": format!("{section}/index")},
                    "items": create_level(&section, current_depth + 1, max_depth, breadth),
                }));
            }
        }
        Value::Array(items)
    }

    create_level("docs", 0, depth, breadth)
}

fn build_registry(depth: usize, breadth: usize) -> (RawRegistry, SidebarRegistry) {
    let mut raw = RawRegistry::new();
    raw.push("docsSidebar", create_sidebar(depth, breadth));
    let registry = SidebarRegistry::validate(&raw, &ValidationPolicy::default()).unwrap();
    (raw, registry)
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for (depth, breadth) in [(2, 5), (3, 5), (5, 3)] {
        let (raw, _) = build_registry(depth, breadth);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("d{depth}_b{breadth}")),
            &raw,
            |b, raw| b.iter(|| SidebarRegistry::validate(raw, &ValidationPolicy::default())),
        );
    }

    group.finish();
}

fn bench_resolve_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_order");

    for (depth, breadth) in [(2, 5), (3, 5), (5, 3)] {
        let (_, registry) = build_registry(depth, breadth);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("d{depth}_b{breadth}")),
            &registry,
            |b, registry| b.iter(|| registry.resolve_order("docsSidebar")),
        );
    }

    group.finish();
}

fn bench_pagination(c: &mut Criterion) {
    let (_, registry) = build_registry(3, 5);

    let mut group = c.benchmark_group("pagination");

    group.bench_function("first_doc", |b| b.iter(|| registry.pagination("docs/doc-0")));

    group.bench_function("deep_doc", |b| {
        b.iter(|| registry.pagination("docs/section-4/section-4/section-4/doc-4"))
    });

    group.bench_function("miss", |b| b.iter(|| registry.pagination("nonexistent")));

    group.finish();
}

criterion_group!(benches, bench_validate, bench_resolve_order, bench_pagination);
criterion_main!(benches);
