use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use alphadex::prelude::ContactDirectory;

// Helper to create a directory prepopulated with `n` contacts in-memory.
// No disk I/O here so the measurements stay on the store operations.
fn make_directory_with_n(n: usize) -> ContactDirectory {
    let mut directory = ContactDirectory::new();
    for i in 0..n {
        directory
            .add(&fields_for(i))
            .expect("bench contact not added");
    }
    directory
}

// Surnames cycle through the alphabet so every bucket carries load.
fn fields_for(i: usize) -> Vec<String> {
    let letter = (b'A' + (i % 26) as u8) as char;
    vec![
        format!("{letter}user{i}"),
        format!("Name{i}"),
        format!("0812{i:07}"),
    ]
}

fn bench_directory_5k(c: &mut Criterion) {
    c.bench_function("add_5k", |b| {
        b.iter_batched(
            ContactDirectory::new,
            |mut directory| {
                for i in 0..5_000 {
                    directory.add(&fields_for(i)).expect("bench contact not added");
                }
                black_box(directory)
            },
            BatchSize::SmallInput,
        )
    });

    let directory = make_directory_with_n(5_000);

    c.bench_function("search_by_surname_5k", |b| {
        b.iter(|| black_box(directory.search_by_surname(black_box("Auser4992"))))
    });

    c.bench_function("search_by_name_5k", |b| {
        b.iter(|| black_box(directory.search_by_name(black_box("Name4999"))))
    });

    c.bench_function("remove_5k", |b| {
        b.iter_batched(
            || make_directory_with_n(5_000),
            |mut directory| {
                directory
                    .remove("Auser4992", None, None)
                    .expect("surname is bucketable");
                black_box(directory)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_directory_5k);
criterion_main!(benches);
