//! Benchmarks for range classification queries
//!
//! Classification runs once per call site during code generation, so the
//! per-query cost matters on large compilation units.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use range_codegen::{builtins, calls, classify, Callable, Declaration, PrimitiveKind, TypeRef};

fn sample_types() -> Vec<TypeRef> {
    vec![
        TypeRef::of(Declaration::class("IntRange", builtins::RANGES_PACKAGE)),
        TypeRef::of(Declaration::class(
            "CharProgression",
            builtins::RANGES_PACKAGE,
        )),
        TypeRef::generic(
            Declaration::interface("ClosedRange", builtins::RANGES_PACKAGE),
            vec![builtins::double_type()],
        ),
        TypeRef::of(Declaration::class("String", "kotlin")),
        TypeRef::error(),
    ]
}

fn sample_calls() -> Vec<Callable> {
    vec![
        Callable::top_level(builtins::RANGES_PACKAGE, "rangeTo")
            .with_extension_receiver(builtins::int_type())
            .returning(TypeRef::of(Declaration::class(
                "IntRange",
                builtins::RANGES_PACKAGE,
            ))),
        Callable::member(builtins::primitive_class(PrimitiveKind::Long), "rangeTo")
            .with_parameters(vec![builtins::long_type()]),
        Callable::top_level(builtins::RANGES_PACKAGE, "contains")
            .with_extension_receiver(TypeRef::of(Declaration::class(
                "LongRange",
                builtins::RANGES_PACKAGE,
            )))
            .with_parameters(vec![builtins::int_type()]),
        Callable::top_level(builtins::COLLECTIONS_PACKAGE, "indices")
            .with_extension_receiver(TypeRef::of(Declaration::class("IntArray", "kotlin"))),
        Callable::top_level("user.code", "rangeTo")
            .with_extension_receiver(TypeRef::of(Declaration::class("Version", "user.code"))),
    ]
}

/// Benchmark family classification across recognized and unrecognized types
fn bench_classify(c: &mut Criterion) {
    let types = sample_types();

    c.bench_function("classify_mixed_types", |b| {
        b.iter(|| {
            for ty in &types {
                black_box(classify(black_box(ty)));
            }
        })
    });
}

/// Benchmark the per-call-site operation classifiers
fn bench_call_classifiers(c: &mut Criterion) {
    let call_sites = sample_calls();

    c.bench_function("classify_call_sites", |b| {
        b.iter(|| {
            for call in &call_sites {
                black_box(calls::is_primitive_number_range_to(call));
                black_box(calls::is_primitive_number_range_extension_contains_primitive_number(
                    call,
                ));
                black_box(calls::is_array_or_primitive_array_indices(call));
            }
        })
    });
}

criterion_group!(benches, bench_classify, bench_call_classifiers);
criterion_main!(benches);
