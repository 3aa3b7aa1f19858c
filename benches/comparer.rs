//! Benchmarks for assembly identity comparison.
//!
//! Measures the operations a resolution cache leans on:
//! - Pairwise `compare` and `equals` under both policies
//! - Hashing through `hash_one`
//! - Sorting a reference set into deterministic order
//! - Deduplicating references through the container key types
//! - Type-erased dispatch overhead
//! - Display-name formatting

extern crate asmkey;

use asmkey::identity::{
    AssemblyIdentity, AssemblyIdentityComparer, AssemblyNameFlags, AssemblyVersion,
    PublicKeyToken, RetargetableAgnosticKey, StrictKey,
};
use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::HashSet;
use std::hint::black_box;

/// A mixed reference set: version spreads, cultures, tokens, case-folded
/// duplicates, and retargetable pairs.
fn reference_set() -> Vec<AssemblyIdentity> {
    let token = PublicKeyToken::from_bytes([0xb7, 0x7a, 0x5c, 0x56, 0x19, 0x34, 0xe0, 0x89]);

    let mut references = Vec::with_capacity(24);
    for (index, name) in ["mscorlib", "System.Core", "System.Xml", "Resources"]
        .into_iter()
        .enumerate()
    {
        for major in [1u16, 2, 4] {
            let culture = if name == "Resources" {
                Some("en-US".to_string())
            } else {
                None
            };
            let flags = if major == 2 {
                AssemblyNameFlags::RETARGETABLE
            } else {
                AssemblyNameFlags::empty()
            };
            references.push(AssemblyIdentity::new(
                name,
                AssemblyVersion::new(major, 0, index as u16, 0),
                culture,
                Some(token),
                flags,
            ));
        }
    }

    // Case-folded and flag-stripped twins keep the dedup benches honest.
    let mut twins = Vec::with_capacity(references.len());
    for identity in &references {
        let mut upper = identity.clone();
        upper.name = upper.name.to_uppercase();
        twins.push(upper.with_retargetable(false));
    }
    references.extend(twins);

    references
}

/// Benchmark comparing two identities equal up to name casing.
/// The comparison walks every field before concluding `Equal`.
fn bench_compare_equal_pair(c: &mut Criterion) {
    let token = PublicKeyToken::from_bytes([0xb7, 0x7a, 0x5c, 0x56, 0x19, 0x34, 0xe0, 0x89]);
    let left = AssemblyIdentity::new(
        "mscorlib",
        AssemblyVersion::new(4, 0, 0, 0),
        None,
        Some(token),
        AssemblyNameFlags::empty(),
    );
    let right = AssemblyIdentity::new(
        "MSCORLIB",
        AssemblyVersion::new(4, 0, 0, 0),
        None,
        Some(token),
        AssemblyNameFlags::empty(),
    );
    let comparer = AssemblyIdentityComparer::strict();

    c.bench_function("cmp_compare_equal_pair", |b| {
        b.iter(|| {
            let ordering = comparer.compare(black_box(&left), black_box(&right));
            black_box(ordering)
        });
    });
}

/// Benchmark comparing two identities that tie on name and split on version.
fn bench_compare_version_differs(c: &mut Criterion) {
    let left = AssemblyIdentity::new(
        "System.Core",
        AssemblyVersion::new(2, 0, 5, 0),
        None,
        None,
        AssemblyNameFlags::empty(),
    );
    let right = AssemblyIdentity::new(
        "System.Core",
        AssemblyVersion::new(4, 0, 0, 0),
        None,
        None,
        AssemblyNameFlags::empty(),
    );
    let comparer = AssemblyIdentityComparer::strict();

    c.bench_function("cmp_compare_version_differs", |b| {
        b.iter(|| {
            let ordering = comparer.compare(black_box(&left), black_box(&right));
            black_box(ordering)
        });
    });
}

/// Benchmark strict equality on a pair differing only in the retargetable flag.
fn bench_equals_strict_retargetable(c: &mut Criterion) {
    let left = AssemblyIdentity::new(
        "System.Core",
        AssemblyVersion::new(2, 0, 5, 0),
        None,
        None,
        AssemblyNameFlags::RETARGETABLE,
    );
    let right = left.clone().with_retargetable(false);
    let comparer = AssemblyIdentityComparer::strict();

    c.bench_function("cmp_equals_strict_retargetable", |b| {
        b.iter(|| {
            let verdict = comparer.equals(black_box(&left), black_box(&right));
            black_box(verdict)
        });
    });
}

/// Benchmark retargetable-agnostic equality on the same flag-only pair.
fn bench_equals_agnostic_retargetable(c: &mut Criterion) {
    let left = AssemblyIdentity::new(
        "System.Core",
        AssemblyVersion::new(2, 0, 5, 0),
        None,
        None,
        AssemblyNameFlags::RETARGETABLE,
    );
    let right = left.clone().with_retargetable(false);
    let comparer = AssemblyIdentityComparer::ignore_retargetable();

    c.bench_function("cmp_equals_agnostic_retargetable", |b| {
        b.iter(|| {
            let verdict = comparer.equals(black_box(&left), black_box(&right));
            black_box(verdict)
        });
    });
}

/// Benchmark hashing a fully populated identity.
fn bench_hash_one(c: &mut Criterion) {
    let token = PublicKeyToken::from_bytes([0x31, 0xbf, 0x38, 0x56, 0xad, 0x36, 0x4e, 0x35]);
    let identity = AssemblyIdentity::new(
        "System.Core",
        AssemblyVersion::new(2, 0, 5, 0),
        Some("en-US".to_string()),
        Some(token),
        AssemblyNameFlags::RETARGETABLE,
    );
    let comparer = AssemblyIdentityComparer::strict();

    c.bench_function("cmp_hash_one", |b| {
        b.iter(|| {
            let hash = comparer.hash_one(black_box(&identity));
            black_box(hash)
        });
    });
}

/// Benchmark sorting the reference set, clone included.
fn bench_sort_reference_set(c: &mut Criterion) {
    let references = reference_set();
    let comparer = AssemblyIdentityComparer::strict();

    c.bench_function("cmp_sort_reference_set", |b| {
        b.iter(|| {
            let mut sorted = black_box(&references).clone();
            sorted.sort_by(|left, right| comparer.compare(left, right));
            black_box(sorted)
        });
    });
}

/// Benchmark deduplicating the reference set through strict hash keys.
fn bench_dedup_strict_keys(c: &mut Criterion) {
    let references = reference_set();

    c.bench_function("cmp_dedup_strict_keys", |b| {
        b.iter(|| {
            let set: HashSet<StrictKey> = black_box(&references)
                .iter()
                .cloned()
                .map(StrictKey::new)
                .collect();
            black_box(set)
        });
    });
}

/// Benchmark deduplicating the reference set through retargetable-agnostic keys.
fn bench_dedup_agnostic_keys(c: &mut Criterion) {
    let references = reference_set();

    c.bench_function("cmp_dedup_agnostic_keys", |b| {
        b.iter(|| {
            let set: HashSet<RetargetableAgnosticKey> = black_box(&references)
                .iter()
                .cloned()
                .map(RetargetableAgnosticKey::new)
                .collect();
            black_box(set)
        });
    });
}

/// Benchmark the type-erased comparison path, downcasts included.
fn bench_compare_erased(c: &mut Criterion) {
    let left = AssemblyIdentity::new(
        "mscorlib",
        AssemblyVersion::new(4, 0, 0, 0),
        None,
        None,
        AssemblyNameFlags::empty(),
    );
    let right = AssemblyIdentity::new(
        "mscorlib",
        AssemblyVersion::new(2, 0, 0, 0),
        None,
        None,
        AssemblyNameFlags::empty(),
    );
    let comparer = AssemblyIdentityComparer::strict();

    c.bench_function("cmp_compare_erased", |b| {
        b.iter(|| {
            let ordering = comparer
                .compare_erased(black_box(&left), black_box(&right))
                .unwrap();
            black_box(ordering)
        });
    });
}

/// Benchmark rendering the canonical display name.
fn bench_display_name(c: &mut Criterion) {
    let token = PublicKeyToken::from_bytes([0x31, 0xbf, 0x38, 0x56, 0xad, 0x36, 0x4e, 0x35]);
    let identity = AssemblyIdentity::new(
        "System.Core",
        AssemblyVersion::new(2, 0, 5, 0),
        Some("en-US".to_string()),
        Some(token),
        AssemblyNameFlags::RETARGETABLE,
    );

    c.bench_function("cmp_display_name", |b| {
        b.iter(|| {
            let rendered = black_box(&identity).display_name();
            black_box(rendered)
        });
    });
}

criterion_group!(
    benches,
    // Pairwise operations
    bench_compare_equal_pair,
    bench_compare_version_differs,
    bench_equals_strict_retargetable,
    bench_equals_agnostic_retargetable,
    bench_hash_one,
    // Bulk operations
    bench_sort_reference_set,
    bench_dedup_strict_keys,
    bench_dedup_agnostic_keys,
    // Erased and formatting paths
    bench_compare_erased,
    bench_display_name,
);
criterion_main!(benches);
