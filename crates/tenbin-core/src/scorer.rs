//! Decision Scorer: the whole computation, as one pure function.
//!
//! 入力（賛成/反対の項目と設定）から、重み付きスコア・合計・上位N件・
//! decision gate をまとめた応答を作ります。副作用なし・失敗なし。

use serde::{Deserialize, Serialize};

use crate::domain::{DecisionGate, Item, ScoredItem, ScoringConfig, Side, Totals};

/// Full scoring output. Serializes verbatim to the response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub pros_scored: Vec<ScoredItem>,
    pub cons_scored: Vec<ScoredItem>,
    pub totals: Totals,
    pub top_items: Vec<ScoredItem>,
    pub decision_gate: DecisionGate,
}

/// Score both sides and evaluate the decision gate.
///
/// Infallible by contract: malformed numeric fields were already degraded
/// to zero at deserialization, so every input yields a best-effort score.
pub fn score(pros: Vec<Item>, cons: Vec<Item>, config: &ScoringConfig) -> ScoreResponse {
    let pros_scored: Vec<ScoredItem> = pros
        .into_iter()
        .map(|it| it.into_scored(Side::Pro))
        .collect();
    let cons_scored: Vec<ScoredItem> = cons
        .into_iter()
        .map(|it| it.into_scored(Side::Con))
        .collect();

    let totals = Totals::from_scored(&pros_scored, &cons_scored);
    let top_items = top_by_weight(&pros_scored, &cons_scored, config.top_n);
    let decision_gate = DecisionGate::evaluate(&totals, &top_items, config);

    ScoreResponse {
        pros_scored,
        cons_scored,
        totals,
        top_items,
        decision_gate,
    }
}

/// Top `n` items across both sides, by weighted score descending.
///
/// The sort is stable, so ties keep the concatenation order
/// (pros first, then cons).
fn top_by_weight(pros: &[ScoredItem], cons: &[ScoredItem], n: i64) -> Vec<ScoredItem> {
    if n <= 0 {
        return Vec::new();
    }
    let mut all: Vec<ScoredItem> = pros.iter().chain(cons.iter()).cloned().collect();
    all.sort_by(|a, b| b.weighted.total_cmp(&a.weighted));
    all.truncate(n as usize);
    all
}
