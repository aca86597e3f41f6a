//! Shannon diversity index over categorical counts.

use dwd_utils::numbers::round2;

/// Shannon entropy `-Σ p ln p` of a count distribution.
///
/// Zero counts contribute nothing, and a distribution whose total is 0 has no
/// diversity (0.0).
pub fn shannon_index(counts: &[u64]) -> f64 {
    let total: f64 = counts.iter().map(|&count| count as f64).sum();
    if total == 0.0 {
        return 0.0;
    }
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| count as f64 / total)
        .fold(0.0, |acc, p| acc - p * p.ln())
}

/// [`shannon_index`] rounded to 2 decimals, as displayed.
pub fn shannon_index_rounded(counts: &[u64]) -> f64 {
    round2(shannon_index(counts))
}
