//! Decision gate: should a human double-check this result?
//!
//! 2つの独立した条件を評価します:
//! - 条件A: 賛否の合計が僅差（diff <= diff_threshold）
//! - 条件B: 上位項目に確度の低いものが含まれる

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::config::ScoringConfig;
use super::item::ScoredItem;
use super::totals::Totals;

/// Named flags for the two gate conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateFlags {
    pub diff_within_threshold: bool,
    pub low_confidence_in_top_items: bool,
}

/// The verification-needed determination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionGate {
    pub needs_verification: bool,

    /// Human-readable explanations, condition A first, then B.
    pub reasons: Vec<String>,

    pub flags: GateFlags,

    /// Identifiers (`item_id`, else `label`) of low-confidence top items,
    /// in top-items order. Duplicates are kept.
    pub verification_targets: Vec<Value>,
}

impl DecisionGate {
    /// Evaluate both conditions against the totals and the top items.
    ///
    /// Reason texts interpolate the configured thresholds rather than
    /// hard-coding the defaults.
    pub fn evaluate(totals: &Totals, top_items: &[ScoredItem], config: &ScoringConfig) -> Self {
        let diff_within_threshold = totals.diff <= config.diff_threshold;
        let low_confidence_in_top_items = top_items
            .iter()
            .any(|it| it.item.confidence <= config.low_confidence_threshold);

        let mut reasons = Vec::new();
        if diff_within_threshold {
            reasons.push(format!("条件A:差分が{}点以内", config.diff_threshold));
        }
        if low_confidence_in_top_items {
            reasons.push(format!(
                "条件B:上位{}に確度{}以下が含まれる",
                config.top_n, config.low_confidence_threshold
            ));
        }

        let verification_targets = top_items
            .iter()
            .filter(|it| it.item.confidence <= config.low_confidence_threshold)
            .map(|it| it.identifier().cloned().unwrap_or(Value::Null))
            .collect();

        Self {
            needs_verification: diff_within_threshold || low_confidence_in_top_items,
            reasons,
            flags: GateFlags {
                diff_within_threshold,
                low_confidence_in_top_items,
            },
            verification_targets,
        }
    }
}
