//! Scoring configuration: caller-supplied thresholds with fixed defaults.

use serde::{Deserialize, Serialize};

/// Per-request thresholds.
///
/// すべて呼び出し側が指定でき、型変換以上のバリデーションは行いません。
/// 範囲外の値もそのまま尊重されます。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Condition A: totals closer than this need human verification.
    #[serde(default = "default_diff_threshold")]
    pub diff_threshold: f64,

    /// How many top-weighted items to inspect. `<= 0` means none.
    #[serde(default = "default_top_n")]
    pub top_n: i64,

    /// Condition B: top items at or below this confidence need verification.
    #[serde(default = "default_low_confidence_threshold")]
    pub low_confidence_threshold: f64,
}

fn default_diff_threshold() -> f64 {
    10.0
}

fn default_top_n() -> i64 {
    3
}

fn default_low_confidence_threshold() -> f64 {
    2.0
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            diff_threshold: default_diff_threshold(),
            top_n: default_top_n(),
            low_confidence_threshold: default_low_confidence_threshold(),
        }
    }
}
