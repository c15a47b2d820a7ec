//! Nearest-value score/rank resolution.
//!
//! Observed cutoff scores are discontinuous: most integer scores have no
//! admitted record in a given year. Resolution therefore picks the observed
//! pair whose score (or rank) is numerically closest to the query.
//!
//! # Tie-break
//!
//! The scan keeps the first pair reaching the minimal distance and only
//! replaces it on a strictly smaller one. Repositories return pairs ordered by
//! the matched field ascending (then record id), so among equidistant pairs the
//! one with the lower score (or rank) wins.

use crate::domain::entities::ScoreRankPair;

/// Fetch order requested from the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOrder {
    ByScore,
    ByRank,
}

/// Returns the pair minimizing `|pair.score - score|`.
pub fn nearest_by_score(pairs: &[ScoreRankPair], score: f64) -> Option<ScoreRankPair> {
    nearest_by(pairs, |p| (p.score - score).abs())
}

/// Returns the pair minimizing `|pair.rank - rank|`.
pub fn nearest_by_rank(pairs: &[ScoreRankPair], rank: i64) -> Option<ScoreRankPair> {
    nearest_by(pairs, |p| p.rank.abs_diff(rank) as f64)
}

fn nearest_by<F>(pairs: &[ScoreRankPair], distance: F) -> Option<ScoreRankPair>
where
    F: Fn(&ScoreRankPair) -> f64,
{
    let mut iter = pairs.iter();
    let first = iter.next()?;
    let mut best = (first, distance(first));

    for pair in iter {
        let d = distance(pair);
        if d < best.1 {
            best = (pair, d);
        }
    }

    Some(*best.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(score: f64, rank: i64) -> ScoreRankPair {
        ScoreRankPair { score, rank }
    }

    fn sample() -> Vec<ScoreRankPair> {
        vec![pair(490.0, 50000), pair(495.0, 45000), pair(500.0, 40000)]
    }

    #[test]
    fn test_nearest_by_score_literal_example() {
        // |490-493| = 3, |495-493| = 2
        let found = nearest_by_score(&sample(), 493.0).unwrap();
        assert_eq!(found, pair(495.0, 45000));
    }

    #[test]
    fn test_nearest_by_score_exact_hit() {
        assert_eq!(nearest_by_score(&sample(), 500.0), Some(pair(500.0, 40000)));
    }

    #[test]
    fn test_nearest_by_score_outside_range() {
        assert_eq!(nearest_by_score(&sample(), 750.0), Some(pair(500.0, 40000)));
        assert_eq!(nearest_by_score(&sample(), 100.0), Some(pair(490.0, 50000)));
    }

    #[test]
    fn test_nearest_by_rank() {
        assert_eq!(nearest_by_rank(&sample(), 44000), Some(pair(495.0, 45000)));
        assert_eq!(nearest_by_rank(&sample(), 1), Some(pair(500.0, 40000)));
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert_eq!(nearest_by_score(&[], 500.0), None);
        assert_eq!(nearest_by_rank(&[], 500), None);
    }

    #[test]
    fn test_tie_keeps_first_seen() {
        // 490 and 496 are both 3 away from 493; ascending order puts 490 first.
        let pairs = vec![pair(490.0, 50000), pair(496.0, 44000)];
        assert_eq!(nearest_by_score(&pairs, 493.0), Some(pair(490.0, 50000)));

        let reversed = vec![pair(496.0, 44000), pair(490.0, 50000)];
        assert_eq!(nearest_by_score(&reversed, 493.0), Some(pair(496.0, 44000)));
    }

    #[test]
    fn test_duplicate_scores_keep_first_rank() {
        let pairs = vec![pair(600.0, 9000), pair(600.0, 9100)];
        assert_eq!(nearest_by_score(&pairs, 601.0), Some(pair(600.0, 9000)));
    }

    #[test]
    fn test_rank_tie_keeps_first_seen() {
        let pairs = vec![pair(520.0, 30000), pair(510.0, 30200)];
        assert_eq!(nearest_by_rank(&pairs, 30100), Some(pair(520.0, 30000)));
    }

    #[test]
    fn test_result_minimizes_distance_over_dense_set() {
        let pairs: Vec<_> = (0..200)
            .map(|i| pair(400.0 + (i as f64) * 1.5, 90000 - i * 300))
            .collect();

        for query in [401.0, 455.2, 512.75, 698.0] {
            let found = nearest_by_score(&pairs, query).unwrap();
            let best = pairs
                .iter()
                .map(|p| (p.score - query).abs())
                .fold(f64::INFINITY, f64::min);
            assert_eq!((found.score - query).abs(), best);
        }
    }
}
