//! Static reference data shown next to each algorithm

use super::Algorithm;

/// How favourable a complexity class is, used to colour it in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub notation: &'static str,
    pub rating: Rating,
}

const fn c(notation: &'static str, rating: Rating) -> Complexity {
    Complexity { notation, rating }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub best: Complexity,
    pub average: Complexity,
    pub worst: Complexity,
    pub space: Complexity,
    /// Equal keys keep their input order
    pub stable: bool,
    pub summary: &'static str,
}

pub(super) fn info(algorithm: Algorithm) -> AlgorithmInfo {
    use Rating::*;

    match algorithm {
        Algorithm::Bubble => AlgorithmInfo {
            best: c("O(n²)", Poor),
            average: c("O(n²)", Poor),
            worst: c("O(n²)", Poor),
            space: c("O(1)", Good),
            stable: true,
            summary: "Repeatedly steps through the list comparing adjacent pairs and \
                      swapping them when out of order. Each pass bubbles the largest \
                      remaining value to the end of the unsorted region. Every pass \
                      runs even when the list is already sorted.",
        },
        Algorithm::Selection => AlgorithmInfo {
            best: c("O(n²)", Poor),
            average: c("O(n²)", Poor),
            worst: c("O(n²)", Poor),
            space: c("O(1)", Good),
            stable: false,
            summary: "Scans the unsorted region for its smallest value and swaps it to \
                      the front, growing the sorted prefix by one slot per pass with at \
                      most one swap each time.",
        },
        Algorithm::Insertion => AlgorithmInfo {
            best: c("O(n)", Fair),
            average: c("O(n²)", Poor),
            worst: c("O(n²)", Poor),
            space: c("O(1)", Good),
            stable: true,
            summary: "Takes each value in turn and shifts larger values of the sorted \
                      prefix one slot right until the value's position is found.",
        },
        Algorithm::Merge => AlgorithmInfo {
            best: c("O(n log n)", Fair),
            average: c("O(n log n)", Fair),
            worst: c("O(n log n)", Fair),
            space: c("O(n)", Fair),
            stable: true,
            summary: "Splits the range in half, sorts both halves recursively, then \
                      merges them back by repeatedly taking the smaller head value.",
        },
        Algorithm::Quick => AlgorithmInfo {
            best: c("O(n log n)", Fair),
            average: c("O(n log n)", Fair),
            worst: c("O(n²)", Poor),
            space: c("O(log n)", Good),
            stable: false,
            summary: "Picks the middle value as pivot and partitions the range with two \
                      converging pointers so smaller values end up left and larger ones \
                      right, then recurses into both sides.",
        },
        Algorithm::Radix => AlgorithmInfo {
            best: c("O(nk)", Good),
            average: c("O(nk)", Good),
            worst: c("O(nk)", Good),
            space: c("O(n+k)", Fair),
            stable: true,
            summary: "Distributes values into ten buckets by one decimal digit at a time, \
                      least significant first, and reads them back in bucket order. No \
                      two values are ever compared.",
        },
        Algorithm::Bucket => AlgorithmInfo {
            best: c("O(n+k)", Good),
            average: c("O(n+n²/k+k)", Fair),
            worst: c("O(n²)", Poor),
            space: c("O(n+k)", Fair),
            stable: true,
            summary: "Spreads values over fixed-width buckets covering the value range, \
                      sorts each bucket on its own and concatenates the buckets in order.",
        },
    }
}
