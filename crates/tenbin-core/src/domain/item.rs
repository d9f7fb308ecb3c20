//! Item model: submitted pro/con entries and their scored form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient::de_number_or_zero;

/// Which list an item was submitted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Pro,
    Con,
}

/// A submitted pro/con item.
///
/// `importance` / `confidence` は parse-or-zero で数値化されます。
/// それ以外のフィールドは `extra` に保持され、出力へそのまま透過します。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "de_number_or_zero")]
    pub importance: f64,

    #[serde(default, deserialize_with = "de_number_or_zero")]
    pub confidence: f64,

    /// Opaque identifier. Any JSON value; absent if not submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<Value>,

    /// Fallback identifier used when `item_id` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Value>,

    /// Pass-through fields preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Tag with a side and derive the weighted score.
    pub fn into_scored(self, side: Side) -> ScoredItem {
        let weighted = self.importance * self.confidence;
        ScoredItem {
            side,
            weighted,
            item: self,
        }
    }
}

/// An [`Item`] tagged with its side and weighted score.
///
/// 一度構築されたら変更されない（derived, never mutated）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredItem {
    pub side: Side,

    /// importance * confidence
    pub weighted: f64,

    #[serde(flatten)]
    pub item: Item,
}

impl ScoredItem {
    /// `item_id`, falling back to `label` when `item_id` is absent or null.
    pub fn identifier(&self) -> Option<&Value> {
        self.item
            .item_id
            .as_ref()
            .filter(|v| !v.is_null())
            .or(self.item.label.as_ref())
    }
}
