//! Criterion benchmarks for the matching strategies.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fastlike_core::{
    count_matches, LineMatcher, Pattern, PatternValues, Strategy, WindowedMatcher,
};

fn corpus(lines: usize, width: usize) -> Vec<String> {
    let mut state = 0x2545_f491_u32;
    (0..lines)
        .map(|_| {
            (0..width)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 17;
                    state ^= state << 5;
                    char::from(b'a' + (state % 26) as u8)
                })
                .collect()
        })
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let lines = corpus(200, 512);
    let patterns = ["ab_d", "ly__pe__al", "a_b_c_d_e_f_g_h_i_j_k_l_"];

    let mut group = c.benchmark_group("naive");
    for p in patterns {
        let pattern = Pattern::new(p).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(p.len()), &pattern, |b, pattern| {
            b.iter(|| lines.iter().map(|l| count_matches(pattern, l)).sum::<u32>());
        });
    }
    group.finish();

    for strategy in [Strategy::Standard, Strategy::Faster] {
        let mut group = c.benchmark_group(strategy.name());
        for p in patterns {
            let pattern = Pattern::new(p).unwrap();
            let owner = PatternValues::new(&pattern, strategy.layout(pattern.len()).unwrap()).unwrap();
            let spectrum = owner.spectrum().unwrap();
            group.bench_with_input(BenchmarkId::from_parameter(p.len()), &spectrum, |b, spectrum| {
                let mut matcher = WindowedMatcher::new(spectrum);
                b.iter(|| lines.iter().map(|l| matcher.count(l).unwrap()).sum::<u32>());
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
