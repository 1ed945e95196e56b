//! Performance benchmarks for sorting and searching the address book.
//!
//! Address books are expected to hold a few hundred persons; these benchmarks
//! measure sort and find at that scale and a little beyond.

use addressbook::commands::{Command, CommandContext, FindCommand, SortCommand};
use addressbook::domain::{Address, Email, Name, Phone, Tag};
use addressbook::{AddressBook, Person};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const FIRST_NAMES: [&str; 8] = ["alice", "Bob", "Charlie", "dana", "Eve", "Finn", "grace", "Hank"];

/// Build a book of `count` distinct persons in a scrambled name order.
fn create_test_book(count: usize) -> AddressBook {
    let persons = (0..count).map(|i| {
        let scrambled = (i * 7919) % count;
        Person::new(
            Name::new(
                &format!("{} Person{}", FIRST_NAMES[i % FIRST_NAMES.len()], scrambled),
                false,
            )
            .unwrap(),
            Phone::new(&format!("9{:07}", i), false).unwrap(),
            Email::new(&format!("person{}@example.com", i), false).unwrap(),
            Address::new(&format!("Blk {}, Street {}, #01-{:02}", i, i % 50, i % 99), false)
                .unwrap(),
            vec![Tag::new("bench").unwrap()],
        )
    });
    AddressBook::from_persons(persons).unwrap()
}

/// Benchmark sorting books of different sizes.
fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [100, 500, 1000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| {
                let mut ctx = CommandContext::new(book.clone());
                Command::from(SortCommand::new())
                    .execute(black_box(&mut ctx))
                    .unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark keyword search over books of different sizes.
fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    let command = Command::from(FindCommand::new(["bob", "GRACE"]).unwrap());

    for size in [100, 500, 1000] {
        let mut ctx = CommandContext::new(create_test_book(size));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| command.execute(black_box(&mut ctx)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort, bench_find);
criterion_main!(benches);
