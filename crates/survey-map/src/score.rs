//! Fuzzy similarity metrics for question matching.
//!
//! Both metrics are built on the normalized Indel similarity from
//! `rapidfuzz` and reported on a 0-100 scale. Inputs are expected to be
//! normalized already (see [`crate::normalize`]).

use std::cmp::Ordering;

use rapidfuzz::fuzz;

/// Indel similarity of two strings, 0-100.
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    fuzz::ratio(a.chars(), b.chars()) * 100.0
}

/// Best [`ratio`] of the shorter string against any same-length window of
/// the longer one.
///
/// Windows hanging over either end of the longer string are considered too,
/// so a needle that only partially overlaps the start or end still scores.
/// Strings of equal length are aligned both ways and the better score wins,
/// so the result never depends on argument order.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    match a.len().cmp(&b.len()) {
        Ordering::Less => best_window(&a, &b),
        Ordering::Greater => best_window(&b, &a),
        Ordering::Equal => best_window(&a, &b).max(best_window(&b, &a)),
    }
}

fn best_window(short: &[char], long: &[char]) -> f64 {
    if short.is_empty() {
        return 0.0;
    }

    let width = short.len();
    let edges = (1..width).flat_map(|len| [&long[..len], &long[long.len() - len..]]);
    let mut best = 0.0_f64;
    for window in long.windows(width).chain(edges) {
        let score = fuzz::ratio(short.iter().copied(), window.iter().copied());
        if score > best {
            best = score;
            if best >= 1.0 {
                break;
            }
        }
    }
    best * 100.0
}

/// [`ratio`] after sorting the whitespace-separated tokens of both strings.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

fn sorted_tokens(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Score of a question against a reference question: the better of
/// [`partial_ratio`] and [`token_sort_ratio`].
pub fn question_similarity(question: &str, reference: &str) -> f64 {
    partial_ratio(question, reference).max(token_sort_ratio(question, reference))
}
