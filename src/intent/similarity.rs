//! Edit-distance string similarity.
//!
//! `ratio` scores two strings on a 0-100 scale using the insert/delete edit
//! distance (substitutions count as a delete plus an insert). This is the
//! same normalization as the classic SequenceMatcher-style ratio: identical
//! strings score 100, disjoint strings score 0.

use std::cmp::min;

/// Insert/delete edit distance between two strings.
///
/// A substitution is counted as one deletion plus one insertion, so the
/// result is `len(a) + len(b) - 2 * lcs(a, b)`.
pub fn indel_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let len_a = a_chars.len();
    let len_b = b_chars.len();

    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }

    let mut matrix = vec![vec![0usize; len_b + 1]; len_a + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=len_b {
        matrix[0][j] = j;
    }

    for i in 1..=len_a {
        for j in 1..=len_b {
            let substitution_cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 2 };

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + substitution_cost,
            );
        }
    }

    matrix[len_a][len_b]
}

/// Normalized similarity ratio on a 0-100 scale.
///
/// Two empty strings are considered identical (100).
pub fn ratio(a: &str, b: &str) -> u8 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 100;
    }

    let distance = indel_distance(a, b);
    let score = (total - distance) as f64 / total as f64 * 100.0;
    score.round() as u8
}
