//! N-gram overlap distance
//!
//! Compares two strings by the contiguous substrings of length `n` they share.
//! Matching is one-to-one: each n-gram occurrence in the second string can
//! consume at most one unmatched occurrence of the same n-gram in the first.
//!
//! The distance is `1 - g / (G - g)` where `g` is the number of matched
//! occurrences and `G` the total number of n-grams in both strings. This is
//! not the textbook Jaccard index and is kept as-is for scoring stability.

use ahash::AHashMap;

/// Default n-gram length (bigrams)
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Number of n-grams of length `n` in a string of `len` characters
#[inline]
fn gram_count(len: usize, n: usize) -> usize {
    (len + 1).saturating_sub(n)
}

/// Count matched n-gram occurrences between `a` and `b` with one-to-one consumption
fn matching_ngram_count(a: &[char], b: &[char], n: usize) -> usize {
    if n == 0 || a.len() < n || b.len() < n {
        return 0;
    }

    let mut remaining: AHashMap<&[char], usize> = AHashMap::with_capacity(a.len());
    for gram in a.windows(n) {
        *remaining.entry(gram).or_insert(0) += 1;
    }

    let mut matched = 0;
    for gram in b.windows(n) {
        if let Some(count) = remaining.get_mut(gram) {
            if *count > 0 {
                *count -= 1;
                matched += 1;
            }
        }
    }
    matched
}

/// N-gram distance between two strings, in [0.0, 1.0] where 0.0 means identical.
///
/// - Either string empty: 1.0
/// - Exact match: 0.0
/// - No unmatched grams at all (including both strings shorter than `n`): 1.0
pub fn ngram_distance(a: &str, b: &str, n: usize) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 1.0;
    }
    if a == b {
        return 0.0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = gram_count(a.len(), n) + gram_count(b.len(), n);
    let matched = matching_ngram_count(&a, &b, n);

    if total == matched {
        return 1.0;
    }

    1.0 - matched as f64 / (total - matched) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_identical_strings() {
        assert_eq!(ngram_distance("prism", "prism", 2), 0.0);
    }

    #[test]
    fn test_unrelated_strings() {
        assert_eq!(ngram_distance("prism", "contact", 2), 1.0);
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(ngram_distance("", "contact", 2), 1.0);
        assert_eq!(ngram_distance("prism", "", 2), 1.0);
        assert_eq!(ngram_distance("", "", 2), 1.0);
    }

    #[test]
    fn test_partial_overlap() {
        // pr, ri, is shared; G = 4 + 9 = 13
        let d = ngram_distance("prism", "unpristine", 2);
        assert!((d - 0.7).abs() < EPS, "got {}", d);

        let d = ngram_distance("unifold prismatic", "unpristine interface", 2);
        assert!(d > 0.0 && d < 1.0);
    }

    #[test]
    fn test_closer_strings_have_lower_distance() {
        let lower = ngram_distance("prism", "claxon unprismatic", 2);
        let higher = ngram_distance("prism", "claxon charismatic", 2);
        assert!(lower < higher, "{} !< {}", lower, higher);
    }

    #[test]
    fn test_n_larger_than_strings() {
        assert_eq!(ngram_distance("abc", "gfh", 4), 1.0);
        assert_eq!(ngram_distance("abc", "abd", 4), 1.0);
    }

    #[test]
    fn test_repeated_grams_are_consumed_once() {
        // "aa" x3 in a, "aa" x1 in b: one match, G = 4
        let d = ngram_distance("aaaa", "aa", 2);
        assert!((d - (1.0 - 1.0 / 3.0)).abs() < EPS, "got {}", d);

        // "ab" x2, "ba" x1 against a single "ab"
        let d = ngram_distance("abab", "ab", 2);
        assert!((d - (1.0 - 1.0 / 3.0)).abs() < EPS, "got {}", d);
    }

    #[test]
    fn test_unigrams() {
        // a: n,i,g,h,t  b: n,a,c,h,t -> n,h,t shared
        let d = ngram_distance("night", "nacht", 1);
        assert!((d - (1.0 - 3.0 / 7.0)).abs() < EPS, "got {}", d);
    }

    #[test]
    fn test_multibyte_characters() {
        let d = ngram_distance("café", "cafe", 2);
        // ca, af shared; G = 6
        assert!((d - 0.5).abs() < EPS, "got {}", d);
    }

    #[test]
    fn test_matching_count_symmetry_of_multisets() {
        let a: Vec<char> = "banana".chars().collect();
        let b: Vec<char> = "ananas".chars().collect();
        assert_eq!(matching_ngram_count(&a, &b, 2), 4);
        assert_eq!(matching_ngram_count(&b, &a, 2), 4);
    }
}
