//! Request body: the scorer's input contract, defaults included.

use serde::Deserialize;
use serde_json::Value;

use super::config::ScoringConfig;
use super::item::Item;
use super::lenient::de_seq_or_empty;
use crate::scorer::{ScoreResponse, score};

/// Deserialized `POST /api/compute` body.
///
/// `pros` / `cons` は欠落・非配列なら空列として扱います。
/// しきい値は [`ScoringConfig`] の既定値で補われます。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreRequest {
    /// The decision being weighed. Accepted but unused by scoring.
    #[serde(default)]
    pub decision: Option<Value>,

    #[serde(default, deserialize_with = "de_seq_or_empty")]
    pub pros: Vec<Item>,

    #[serde(default, deserialize_with = "de_seq_or_empty")]
    pub cons: Vec<Item>,

    #[serde(flatten)]
    pub config: ScoringConfig,
}

impl ScoreRequest {
    /// Run the Decision Scorer on this request.
    pub fn evaluate(self) -> ScoreResponse {
        score(self.pros, self.cons, &self.config)
    }
}
