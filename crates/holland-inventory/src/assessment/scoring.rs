use super::domain::{Dimension, TOTAL_ITEMS};
use serde::{Deserialize, Serialize};

/// Stateless scoring engine for the completed (or partially completed)
/// answer array. Every call re-derives the full report from scratch; it
/// never updates a previous result incrementally.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Computes the six dimension scores and the top-3 ranking.
    ///
    /// Unanswered attitude slots are excluded from aggregation rather than
    /// treated as zeros; an unanswered self-rating contributes 0. Pure and
    /// idempotent: the same snapshot always yields the same report.
    pub fn score(answers: &[Option<u8>; TOTAL_ITEMS]) -> ScoreReport {
        let mut scores = Vec::with_capacity(Dimension::COUNT);

        for dimension in Dimension::ordered() {
            let block = &answers[dimension.attitude_range()];
            let values = block.iter().flatten();

            let sum: u16 = values.clone().map(|v| u16::from(*v)).sum();
            let fives = values.clone().filter(|v| **v == 5).count() as u16;
            let fours = values.filter(|v| **v == 4).count() as u16;
            let sub = 2 * fives + fours;

            // Rescales the 1-6 self-rating onto 0-10. The divisor is 6, so
            // value 6 maps to 50/6, not to 10.
            let self_rating = match answers[dimension.self_rating_index()] {
                Some(value) => f32::from(value - 1) / 6.0 * 10.0,
                None => 0.0,
            };

            let p = f32::from(sum) + 0.1 * f32::from(sub);
            let t = p + 0.5 * self_rating;

            scores.push(DimensionScore {
                dimension,
                sum,
                sub,
                p,
                self_rating,
                t,
            });
        }

        // Stable sort over the declaration-ordered scores, so equal totals
        // keep the fixed R,I,A,S,E,C order.
        let mut ranked = scores.clone();
        ranked.sort_by(|a, b| b.t.total_cmp(&a.t));
        let top3 = [ranked[0].dimension, ranked[1].dimension, ranked[2].dimension];

        ScoreReport { scores, top3 }
    }
}

/// Aggregates for a single dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    /// Raw total of the answered attitude items (0-50).
    pub sum: u16,
    /// Strong-agreement bonus: two points per 5, one per 4 (0-20).
    pub sub: u16,
    /// Combined primary score: sum + 0.1 * sub.
    pub p: f32,
    /// Self-rating rescaled onto 0-10; 0 when unanswered.
    pub self_rating: f32,
    /// Final weighted total: p + 0.5 * self_rating.
    pub t: f32,
}

/// Full scoring output: one record per dimension in declaration order, plus
/// the three dominant dimensions ranked by final total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub scores: Vec<DimensionScore>,
    pub top3: [Dimension; 3],
}

impl ScoreReport {
    pub fn score_for(&self, dimension: Dimension) -> &DimensionScore {
        self.scores
            .iter()
            .find(|score| score.dimension == dimension)
            .expect("report holds every dimension")
    }

    /// Top-3 as one-letter codes, the shape the submission payload carries.
    pub fn top3_codes(&self) -> [&'static str; 3] {
        [
            self.top3[0].code(),
            self.top3[1].code(),
            self.top3[2].code(),
        ]
    }
}
