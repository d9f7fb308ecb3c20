//! tenbin-core
//!
//! Pros/Cons 判断スコアラーのコア実装。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（item, config, totals, gate, request, lenient）
//! - **scorer**: 重み付きスコア計算と decision gate 評価（純関数）
//!
//! コアは同期・無状態の純関数であり、I/O も共有状態も持ちません。
//! HTTP 層（tenbin-server）はこのクレートの薄いラッパーです。

pub mod domain;
pub mod scorer;

pub use domain::{
    DecisionGate, GateFlags, Item, ScoreRequest, ScoredItem, ScoringConfig, Side, Totals,
};
pub use scorer::{ScoreResponse, score};
