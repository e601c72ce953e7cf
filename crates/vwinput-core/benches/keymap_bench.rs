//! Criterion benchmarks for the native key translation tables.
//!
//! Every native key event crosses one of these lookups, so the forward
//! direction must stay in the sub-microsecond class. The inverse direction
//! only runs when the rebinding UI renders labels, but it is measured here
//! too.
//!
//! Run with:
//! ```bash
//! cargo bench --package vwinput-core --bench keymap_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vwinput_core::{Key, KeyTranslator};

/// Windows VK codes covering the common keys plus one unmapped code.
const BENCH_VK_CODES: &[u16] = &[
    0x41, // 'A'
    0x5A, // 'Z'
    0x0D, // VK_RETURN
    0x1B, // VK_ESCAPE
    0x20, // VK_SPACE
    0x70, // VK_F1
    0x7B, // VK_F12
    0x10, // VK_SHIFT
    0x11, // VK_CONTROL
    0x25, // VK_LEFT
    0x28, // VK_DOWN
    0x60, // VK_NUMPAD0
    0xBA, // VK_OEM_1
    0xFF, // unmapped
];

/// Canonical keys covering the common cases plus the sentinel.
const BENCH_KEYS: &[Key] = &[
    Key::KeyA,
    Key::KeyZ,
    Key::Return,
    Key::Escape,
    Key::Space,
    Key::F1,
    Key::F12,
    Key::Shift,
    Key::Control,
    Key::ArrowLeft,
    Key::Numpad0,
    Key::None,
];

fn bench_forward_translation(c: &mut Criterion) {
    let windows = KeyTranslator::windows();
    let macos = KeyTranslator::macos();
    let sdl = KeyTranslator::sdl();

    let mut group = c.benchmark_group("translate_forward");

    group.bench_function("windows_single", |b| {
        b.iter(|| windows.translate(black_box(0x41)))
    });

    group.bench_function("windows_batch_14", |b| {
        b.iter(|| {
            BENCH_VK_CODES
                .iter()
                .map(|&vk| windows.translate(black_box(vk)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("macos_single", |b| b.iter(|| macos.translate(black_box(0x00))));
    group.bench_function("sdl_single", |b| b.iter(|| sdl.translate(black_box(0x61))));

    group.finish();
}

fn bench_inverse_translation(c: &mut Criterion) {
    let windows = KeyTranslator::windows();

    let mut group = c.benchmark_group("translate_inverse");

    for key in [Key::KeyA, Key::Shift, Key::None] {
        group.bench_with_input(BenchmarkId::new("windows", format!("{key:?}")), &key, |b, &k| {
            b.iter(|| windows.inverse_translate(black_box(k)))
        });
    }

    group.bench_function("windows_batch_12", |b| {
        b.iter(|| {
            BENCH_KEYS
                .iter()
                .map(|&k| windows.inverse_translate(black_box(k)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

fn bench_numlock_off_translation(c: &mut Criterion) {
    let windows = KeyTranslator::windows();

    let mut group = c.benchmark_group("translate_numlock_off");

    // Overlay hit (numpad 2) and overlay miss falling through (letter A).
    group.bench_function("overlay_hit", |b| {
        b.iter(|| windows.translate_numlock_off(black_box(0x62)))
    });
    group.bench_function("overlay_miss", |b| {
        b.iter(|| windows.translate_numlock_off(black_box(0x41)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_forward_translation,
    bench_inverse_translation,
    bench_numlock_off_translation,
);
criterion_main!(benches);
