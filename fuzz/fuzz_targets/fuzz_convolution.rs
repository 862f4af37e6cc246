#![no_main]

use libfuzzer_sys::fuzz_target;

use fastlike_fft::convolve_sequences;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let split = 1 + usize::from(data[0]) % (data.len() - 1);
    let a: Vec<i64> = data[1..=split].iter().map(|&b| i64::from(b) - 128).collect();
    let b: Vec<i64> = data[split + 1..].iter().map(|&b| i64::from(b) - 128).collect();

    let got = convolve_sequences(&a, &b).unwrap();
    if a.is_empty() || b.is_empty() {
        assert!(got.is_empty());
        return;
    }
    let mut expected = vec![0i64; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            expected[i + j] += x * y;
        }
    }
    assert_eq!(got, expected);
});
