//! Property-based tests for the transform engine.

use proptest::prelude::*;

use fastlike_fft::{convolve_sequences, Transform};

fn direct_convolution(a: &[i64], b: &[i64]) -> Vec<i64> {
    let mut out = vec![0i64; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    /// Forward then inverse reproduces the buffer for every length 2^1..2^12.
    #[test]
    fn forward_inverse_roundtrip(
        k in 1u32..=12,
        seed in prop::collection::vec(-1000.0f64..1000.0, 1..64),
    ) {
        let n = 1usize << k;
        let values: Vec<f64> = (0..n).map(|i| seed[i % seed.len()] * (i as f64 + 1.0).sqrt()).collect();

        let mut t = Transform::new(n);
        t.load_reals(&values).unwrap();
        t.forward();
        t.inverse();

        for (i, (got, expected)) in t.values().iter().zip(&values).enumerate() {
            prop_assert!((got.re - expected).abs() < 1e-6, "re mismatch at {}: {} vs {}", i, got.re, expected);
            prop_assert!(got.im.abs() < 1e-6, "im residue at {}: {}", i, got.im);
        }
    }

    /// FFT convolution agrees with O(n^2) summation on small integer inputs.
    #[test]
    fn convolution_matches_direct_sum(
        a in prop::collection::vec(-200i64..200, 1..48),
        b in prop::collection::vec(-200i64..200, 1..48),
    ) {
        let fast = convolve_sequences(&a, &b).unwrap();
        prop_assert_eq!(fast, direct_convolution(&a, &b));
    }
}

#[test]
fn sibling_transform_matches_owner_output() {
    let mut owner = Transform::new(16);
    owner.load_reals(&[1.0, 5.0, -2.0, 8.0]).unwrap();
    owner.forward();

    let mut sibling = Transform::sibling_of(&owner);
    sibling.load_reals(&[1.0, 5.0, -2.0, 8.0]).unwrap();
    sibling.forward();

    for (a, b) in owner.values().iter().zip(sibling.values()) {
        assert_eq!(a, b);
    }
}
