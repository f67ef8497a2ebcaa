//! Levenshtein distance (Wagner-Fischer dynamic programming).

use smallvec::SmallVec;

/// Compute the Levenshtein distance between two strings.
///
/// Uses dynamic programming to compute the minimum number of
/// single-character edits (insertions, deletions, substitutions) required to
/// transform `a` into `b`. Characters are compared as `char`s, so the result
/// counts Unicode scalar values, not bytes.
///
/// The full DP table has `(len(a)+1) x (len(b)+1)` cells with `d[i][0] = i`
/// and `d[0][j] = j`; since each cell depends only on its left, top, and
/// top-left neighbors, the implementation keeps two heap-allocated rows
/// instead of the whole grid. The observable result is unchanged, and the
/// rows are dropped when the call returns.
///
/// # Example
///
/// ```rust
/// use libstralg::distance::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("test", "test"), 0);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: SmallVec<[char; 32]> = a.chars().collect();
    let b_chars: SmallVec<[char; 32]> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    // Either string empty: the distance is the length of the other, exactly
    // what the base row and column of the full table would produce.
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev_row = vec![0; n + 1];
    let mut curr_row = vec![0; n + 1];

    // Row 0: transforming the empty prefix of `a` into the first j
    // characters of `b` takes j insertions.
    for (j, item) in prev_row.iter_mut().enumerate().take(n + 1) {
        *item = j;
    }

    for i in 1..=m {
        // Column 0: deleting i characters transforms the prefix of `a`
        // into the empty string.
        curr_row[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}
