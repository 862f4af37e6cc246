#![no_main]

use libfuzzer_sys::fuzz_target;

use fastlike_core::{count_line, Strategy};

const ALPHABET: &[u8] = b"abAB .,-:?!;_";

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks the pattern length, the rest is mapped onto a small
    // alphabet so matches are frequent.
    let pattern_len = 1 + usize::from(data[0]) % 16;
    let text: String = data[1..]
        .iter()
        .map(|&b| ALPHABET[usize::from(b) % ALPHABET.len()] as char)
        .collect();
    if text.len() < pattern_len {
        return;
    }
    let (pattern, line) = text.split_at(pattern_len);

    let naive = count_line(pattern, line, Strategy::Naive).unwrap();
    let standard = count_line(pattern, line, Strategy::Standard).unwrap();
    let faster = count_line(pattern, line, Strategy::Faster).unwrap();
    assert_eq!(naive, standard, "standard != naive for {pattern:?} in {line:?}");
    assert_eq!(naive, faster, "faster != naive for {pattern:?} in {line:?}");
});
