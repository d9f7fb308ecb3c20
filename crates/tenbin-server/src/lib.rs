//! tenbin-server
//!
//! tenbin-core の薄い HTTP 層。`POST /api/compute` でスコア計算を提供します。
//! スコアラーは無状態なので、リクエスト間で共有する可変状態はありません。

pub mod error;
pub mod routes;

pub use routes::router;
