//! Knuth-Morris-Pratt substring search.

use smallvec::SmallVec;

/// Compute the KMP prefix function for a pattern.
///
/// `table[q]` holds the length of the longest proper prefix of the pattern
/// that is also a suffix of `needle[0..=q]`. The table depends only on the
/// pattern, never on the text, and `table[0]` is always 0.
fn prefix_function(needle: &[char]) -> Vec<usize> {
    let m = needle.len();
    let mut table = vec![0usize; m];

    let mut k = 0;
    for q in 1..m {
        while k > 0 && needle[k] != needle[q] {
            k = table[k - 1];
        }
        if needle[k] == needle[q] {
            k += 1;
        }
        table[q] = k;
    }

    table
}

/// Search `haystack` for the first occurrence of `needle` using the
/// Knuth-Morris-Pratt algorithm.
///
/// Returns the character offset of the first match, or `None`. The empty
/// needle matches trivially at offset 0. Total work is O(n + m): the prefix
/// table is built in one pass over the pattern, then the text is scanned once
/// with failure-function backtracking, so no text character is reexamined
/// more than a bounded number of times.
///
/// The prefix table is allocated per call and dropped when the function
/// returns, whether by early match or full scan.
pub fn kmp_search(needle: &str, haystack: &str) -> Option<usize> {
    let needle_chars: SmallVec<[char; 32]> = needle.chars().collect();
    let m = needle_chars.len();

    if m == 0 {
        return Some(0);
    }

    let haystack_chars: SmallVec<[char; 32]> = haystack.chars().collect();
    let n = haystack_chars.len();

    if m > n {
        return None;
    }

    let table = prefix_function(&needle_chars);

    let mut q = 0;
    for (i, &c) in haystack_chars.iter().enumerate() {
        while q > 0 && needle_chars[q] != c {
            q = table[q - 1];
        }
        if needle_chars[q] == c {
            q += 1;
        }
        if q == m {
            return Some(i + 1 - m);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_for(pattern: &str) -> Vec<usize> {
        let chars: Vec<char> = pattern.chars().collect();
        prefix_function(&chars)
    }

    #[test]
    fn test_prefix_function_values() {
        assert_eq!(table_for("AAAA"), vec![0, 1, 2, 3]);
        assert_eq!(table_for("ABAB"), vec![0, 0, 1, 2]);
        assert_eq!(table_for("ABABAC"), vec![0, 0, 1, 2, 3, 0]);
        assert_eq!(table_for("ABCDE"), vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_prefix_function_border_fallback() {
        // The longest border of "AABAAA" is "AA", not "A"; a fallback that
        // reads the table one slot too high gets this wrong.
        assert_eq!(table_for("AABAAA"), vec![0, 1, 0, 1, 2, 2]);
    }

    #[test]
    fn test_prefix_function_single_char() {
        assert_eq!(table_for("X"), vec![0]);
        assert_eq!(table_for(""), Vec::<usize>::new());
    }

    #[test]
    fn test_kmp_basic_match() {
        assert_eq!(kmp_search("ABABC", "ABABDABABCABAB"), Some(5));
        assert_eq!(kmp_search("needle", "haystack with a needle inside"), Some(16));
    }

    #[test]
    fn test_kmp_no_match() {
        assert_eq!(kmp_search("XYZ", "ABCDEF"), None);
    }

    #[test]
    fn test_kmp_match_at_start_and_end() {
        assert_eq!(kmp_search("ABC", "ABCDEF"), Some(0));
        assert_eq!(kmp_search("DEF", "ABCDEF"), Some(3));
    }

    #[test]
    fn test_kmp_first_of_overlapping_matches() {
        assert_eq!(kmp_search("AA", "AAAA"), Some(0));
        assert_eq!(kmp_search("ABA", "ABABA"), Some(0));
    }

    #[test]
    fn test_kmp_empty_needle_matches_at_zero() {
        assert_eq!(kmp_search("", "ABC"), Some(0));
        assert_eq!(kmp_search("", ""), Some(0));
    }

    #[test]
    fn test_kmp_needle_longer_than_haystack() {
        assert_eq!(kmp_search("ABCDEF", "ABC"), None);
        assert_eq!(kmp_search("A", ""), None);
    }

    #[test]
    fn test_kmp_self_similar_pattern() {
        // Heavy backtracking: pattern borders are exercised on mismatch.
        assert_eq!(kmp_search("AABAAA", "AABAABAAA"), Some(3));
        assert_eq!(kmp_search("AAAB", "AAAAAAB"), Some(3));
    }

    #[test]
    fn test_kmp_unicode_offsets_are_chars() {
        assert_eq!(kmp_search("本語", "日本語"), Some(1));
        assert_eq!(kmp_search("é", "café"), Some(3));
    }
}
