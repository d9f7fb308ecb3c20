//! Per-side weighted totals.

use serde::{Deserialize, Serialize};

use super::item::ScoredItem;

/// Weighted sums per side and their absolute difference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub pro_total: f64,
    pub con_total: f64,

    /// `|pro_total - con_total|`
    pub diff: f64,
}

impl Totals {
    pub fn from_scored(pros: &[ScoredItem], cons: &[ScoredItem]) -> Self {
        let pro_total: f64 = pros.iter().map(|it| it.weighted).sum();
        let con_total: f64 = cons.iter().map(|it| it.weighted).sum();
        Self {
            pro_total,
            con_total,
            diff: (pro_total - con_total).abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::{Item, Side};
    use serde_json::json;

    fn scored(side: Side, importance: f64, confidence: f64) -> ScoredItem {
        let item: Item = serde_json::from_value(
            json!({ "importance": importance, "confidence": confidence }),
        )
        .unwrap();
        item.into_scored(side)
    }

    #[test]
    fn totals_sum_weighted_scores_per_side() {
        let pros = vec![scored(Side::Pro, 8.0, 5.0), scored(Side::Pro, 2.0, 3.0)];
        let cons = vec![scored(Side::Con, 3.0, 2.0)];

        let totals = Totals::from_scored(&pros, &cons);
        assert_eq!(totals.pro_total, 46.0);
        assert_eq!(totals.con_total, 6.0);
        assert_eq!(totals.diff, 40.0);
    }

    #[test]
    fn diff_is_absolute() {
        let pros = vec![scored(Side::Pro, 1.0, 1.0)];
        let cons = vec![scored(Side::Con, 5.0, 5.0)];

        let totals = Totals::from_scored(&pros, &cons);
        assert_eq!(totals.diff, 24.0);
    }

    #[test]
    fn empty_sides_total_zero() {
        let totals = Totals::from_scored(&[], &[]);
        assert_eq!(totals.pro_total, 0.0);
        assert_eq!(totals.con_total, 0.0);
        assert_eq!(totals.diff, 0.0);
    }
}
