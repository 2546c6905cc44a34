use awhaptic_effects::{Effect, EffectTable, Strength};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_lookup_effect(c: &mut Criterion) {
    let table = EffectTable::reference();
    c.bench_function("lookup_effect", |b| {
        b.iter(|| {
            for effect in Effect::ALL {
                black_box(table.lookup_effect(black_box(effect)));
            }
        });
    });
}

fn bench_amplitude_banding(c: &mut Criterion) {
    c.bench_function("from_amplitude", |b| {
        b.iter(|| black_box(Strength::from_amplitude(black_box(0.5))));
    });
}

criterion_group!(benches, bench_lookup_effect, bench_amplitude_banding);
criterion_main!(benches);
