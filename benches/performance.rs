//! Performance benchmarks for the state store.
//!
//! Change detection clones and deep-compares the whole state on every
//! dispatch, so per-event cost grows with the contact list.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use state_store::{ApplicationState, Contact, ContactId, ContactInput, Event, StateStore};

fn populated_state(contacts: u64) -> ApplicationState {
    ApplicationState::with_contacts(
        (0..contacts)
            .map(|i| Contact {
                id: ContactId(i),
                name: format!("Contact {}", i),
                image_url: format!("https://example.com/{}.png", i),
                email: format!("contact{}@example.com", i),
                phone_number: format!("{:011}", i),
            })
            .collect(),
    )
}

/// Benchmark event dispatch with varying state sizes
fn bench_send_event(c: &mut Criterion) {
    let mut group = c.benchmark_group("send_event");

    for contacts in [10, 100, 1_000, 10_000] {
        let base = populated_state(contacts);

        group.bench_with_input(
            BenchmarkId::new("contact_list_len", contacts),
            &contacts,
            |b, _| {
                b.iter_batched(
                    || StateStore::new(base.clone()),
                    |mut store| {
                        store
                            .send(Event::AddNewContact(ContactInput::new(
                                "Bench Contact",
                                "x",
                                "bench@example.com",
                                "0",
                            )))
                            .unwrap();
                        store
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark listener notification with varying state sizes
fn bench_force_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_update");

    for contacts in [10, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("contact_list_len", contacts),
            &contacts,
            |b, &n| {
                let mut store = StateStore::new(populated_state(n));
                store.on_update(|state| {
                    black_box(state.len());
                });

                b.iter(|| store.force_update());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_send_event, bench_force_update);
criterion_main!(benches);
