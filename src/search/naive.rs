//! Brute-force substring search.

use smallvec::SmallVec;

/// Search `haystack` for the first occurrence of `needle` by comparing the
/// pattern against every candidate offset.
///
/// Returns the character offset of the first match, or `None`. The empty
/// needle matches trivially at offset 0, and a needle longer than the
/// haystack has no candidate offsets at all. O((n - m + 1) * m) worst case.
pub fn naive_search(needle: &str, haystack: &str) -> Option<usize> {
    let needle_chars: SmallVec<[char; 32]> = needle.chars().collect();
    let m = needle_chars.len();

    if m == 0 {
        return Some(0);
    }

    let haystack_chars: SmallVec<[char; 32]> = haystack.chars().collect();
    let n = haystack_chars.len();

    // Guard before computing n - m; the subtraction underflows when the
    // needle is longer than the haystack.
    if m > n {
        return None;
    }

    (0..=n - m).find(|&i| haystack_chars[i..i + m] == needle_chars[..m])
}
