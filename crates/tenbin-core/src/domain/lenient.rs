//! Lenient numeric coercion - 入力を拒否せず 0 に落とす方針の実装。
//!
//! 不正・欠落した数値フィールドはエラーにせず 0 として扱います
//! （degrade-to-zero）。暗黙の型変換に埋め込むのではなく、
//! 明示的な parse-or-zero ヘルパとして見える形で実装します。

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a JSON value to f64, degrading to 0.0 on failure.
///
/// - number → その値
/// - 数値としてパースできる文字列 → パース結果
/// - それ以外（bool / null / array / object / パース不能な文字列）→ 0.0
pub fn number_or_zero(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// serde adapter: deserialize any JSON value through [`number_or_zero`].
///
/// フィールド欠落時は `#[serde(default)]` 側で 0.0 になる。
pub fn de_number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_or_zero(&value))
}

/// serde adapter: deserialize a sequence, treating non-arrays as empty.
///
/// 配列要素が T にデコードできない場合も既定値に落とす（要素単位の leniency）。
pub fn de_seq_or_empty<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    T: DeserializeOwned + Default,
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
