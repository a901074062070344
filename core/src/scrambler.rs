use alloc::string::String;
use alloc::vec::Vec;
use rand::prelude::*;

/// Unbiased in-place Fisher-Yates shuffle, every ordering is equally likely.
pub fn permute<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns the characters of `word` in random order.
///
/// The result can be identical to the input, callers must not rely on it looking different.
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    permute(&mut chars, rng);
    chars.into_iter().collect()
}
