//! Jaro-Winkler distance
//!
//! Bounded sliding-window character alignment (Jaro) with a bonus for a
//! shared prefix of up to four characters (Winkler). The prefix bonus only
//! applies when the Jaro similarity is already above 0.7.

/// Default prefix scaling factor
pub const DEFAULT_PREFIX_SCALE: f64 = 0.1;

/// Longest shared prefix that earns a bonus
pub const MAX_PREFIX_LEN: usize = 4;

/// Jaro similarity must exceed this before the prefix bonus is applied
pub const BOOST_THRESHOLD: f64 = 0.7;

/// Jaro-Winkler distance between two strings, in [0.0, 1.0] where 0.0 means identical.
///
/// `prefix_scale` is the Winkler `p`; values above 0.25 can push the
/// similarity past 1.0.
pub fn jaro_winkler_distance(a: &str, b: &str, prefix_scale: f64) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 1.0;
    }
    if a == b {
        return 0.0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let (matches, a_matched, b_matched) = match_window(&a, &b);
    if matches == 0 {
        return 1.0;
    }

    let transpositions = count_transpositions(&a, &b, &a_matched, &b_matched);

    let m = matches as f64;
    let mut weight =
        (m / a.len() as f64 + m / b.len() as f64 + (m - transpositions as f64 / 2.0) / m) / 3.0;

    if weight > BOOST_THRESHOLD {
        let prefix = a
            .iter()
            .zip(b.iter())
            .take(MAX_PREFIX_LEN)
            .take_while(|(x, y)| x == y)
            .count();
        weight += prefix as f64 * prefix_scale * (1.0 - weight);
    }

    1.0 - weight
}

/// Mark characters of `a` that have an unconsumed equal character in `b`
/// within the match window. Returns the hit count and both match masks.
fn match_window(a: &[char], b: &[char]) -> (usize, Vec<bool>, Vec<bool>) {
    // May be -1 for single-character inputs, which yields an empty window.
    let range = (a.len().max(b.len()) / 2) as isize - 1;
    let last = b.len() as isize - 1;

    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0;

    for (i, &ch) in a.iter().enumerate() {
        let i = i as isize;
        let low = if i >= range { i - range } else { 0 };
        let high = (i + range).min(last);
        if low > high {
            continue;
        }

        for j in low as usize..=high as usize {
            if !b_matched[j] && b[j] == ch {
                a_matched[i as usize] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    (matches, a_matched, b_matched)
}

/// Walk matched characters of `a` and `b` in order, counting positions where
/// they differ. A single forward pointer runs through `b`.
fn count_transpositions(a: &[char], b: &[char], a_matched: &[bool], b_matched: &[bool]) -> usize {
    let mut k = 0;
    let mut transpositions = 0;

    for (i, &hit) in a_matched.iter().enumerate() {
        if !hit {
            continue;
        }
        while k < b.len() && !b_matched[k] {
            k += 1;
        }
        if k < b.len() {
            if a[i] != b[k] {
                transpositions += 1;
            }
            k += 1;
        }
    }

    transpositions
}
