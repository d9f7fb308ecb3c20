//! Domain model (items, configuration, totals, decision gate, request body).

pub mod config;
pub mod gate;
pub mod item;
pub mod lenient;
pub mod request;
pub mod totals;

pub use config::ScoringConfig;
pub use gate::{DecisionGate, GateFlags};
pub use item::{Item, ScoredItem, Side};
pub use request::ScoreRequest;
pub use totals::Totals;
