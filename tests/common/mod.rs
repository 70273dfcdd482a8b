#![allow(dead_code)]

use rand::Rng;
use rand::seq::SliceRandom;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const MASK: &[char] = &['.', '/', '-'];

/// Generates a random 12-character base that is never the all-zero sentinel.
pub fn random_base<R: Rng>(rng: &mut R) -> String {
    loop {
        let base: String = (0..12)
            .map(|_| char::from(*ALPHABET.choose(rng).unwrap()))
            .collect();
        if base != "000000000000" {
            return base;
        }
    }
}

/// Inserts mask characters at random positions.
pub fn sprinkle_mask<R: Rng>(rng: &mut R, s: &str) -> String {
    let mut out = String::new();
    for c in s.chars() {
        if rng.gen_bool(0.3) {
            out.push(*MASK.choose(rng).unwrap());
        }
        out.push(c);
    }
    if rng.gen_bool(0.3) {
        out.push(*MASK.choose(rng).unwrap());
    }
    out
}

/// Replaces one random position with a character outside the accepted alphabet.
pub fn corrupt<R: Rng>(rng: &mut R, s: &str) -> String {
    const BAD: &[char] = &['a', 'z', ' ', '_', '@', '#', '\t', 'ç', 'É', '+'];
    let mut chars: Vec<char> = s.chars().collect();
    let idx = rng.gen_range(0..chars.len());
    chars[idx] = *BAD.choose(rng).unwrap();
    chars.into_iter().collect()
}
