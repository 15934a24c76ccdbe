use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use saturnin_algorithms::aead::{SaturninShort, SaturninShort10};
use saturnin_algorithms::block::saturnin::encrypt_block;

fn bench_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("Saturnin block");
    group.throughput(Throughput::Bytes(32));
    let key = [0x42u8; 32];

    for rounds in [1usize, 10, 16] {
        group.bench_with_input(BenchmarkId::new("encrypt", rounds), &rounds, |b, &r| {
            let mut block = [0u8; 32];
            b.iter(|| encrypt_block(r, 6, black_box(&key), black_box(&mut block)))
        });
    }

    group.finish();
}

fn bench_short(c: &mut Criterion) {
    let mut group = c.benchmark_group("Saturnin-Short");
    let key = [0x42u8; 32];
    let nonce = [0x24u8; 16];
    let msg = [0x11u8; 15];

    let demo = SaturninShort::new(&key);
    let standard = SaturninShort10::new(&key);
    let ct_demo = demo.seal_with_nonce(&nonce, &msg, None).expect("seal");
    let ct_standard = standard.seal_with_nonce(&nonce, &msg, None).expect("seal");

    group.bench_function("seal/1", |b| {
        b.iter(|| demo.seal_with_nonce(black_box(&nonce), black_box(&msg), None))
    });
    group.bench_function("seal/10", |b| {
        b.iter(|| standard.seal_with_nonce(black_box(&nonce), black_box(&msg), None))
    });
    group.bench_function("open/1", |b| {
        let mut out = [0u8; 15];
        b.iter(|| demo.open_in_place(black_box(&nonce), black_box(&ct_demo), None, &mut out))
    });
    group.bench_function("open/10", |b| {
        let mut out = [0u8; 15];
        b.iter(|| standard.open_in_place(black_box(&nonce), black_box(&ct_standard), None, &mut out))
    });

    group.finish();
}

criterion_group!(benches, bench_block, bench_short);
criterion_main!(benches);
