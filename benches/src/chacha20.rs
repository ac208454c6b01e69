//! ChaCha20 keystream benchmark
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use criterion::measurement::Measurement;

use benches::criterion_group_bench;
use chacha20_djb::{
    ChaCha20, ChaChaState,
    cipher::{KeyIvInit, StreamCipher},
};

const KB: usize = 1024;

fn bench<M: Measurement>(c: &mut Criterion<M>) {
    let mut group = c.benchmark_group("chacha20-djb");

    group.throughput(Throughput::Bytes(64));
    group.bench_function("next_block", |b| {
        let mut state = ChaChaState::new(&[0u8; 32], &[0u8; 8]);
        b.iter(|| state.next_block());
    });

    for size in &[KB, 2 * KB, 4 * KB, 8 * KB, 16 * KB] {
        let mut buf = vec![0u8; *size];

        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_function(BenchmarkId::new("apply_keystream", size), |b| {
            let key = Default::default();
            let nonce = Default::default();
            let mut cipher = ChaCha20::new(&key, &nonce);
            b.iter(|| cipher.apply_keystream(&mut buf));
        });
    }

    group.finish();
}

criterion_group_bench!(benches, bench);
criterion_main!(benches);
