//! taskrank-core: task model and the prioritization engine

pub mod classify;
pub mod effort;
pub mod model;
pub mod normalize;
pub mod rank;
pub mod scoring;
pub mod summary;
pub mod task;
pub mod time;

pub use classify::{Confidence, Status};
pub use effort::{daily_hours, estimated_hours, round1};
pub use model::LinearModel;
pub use normalize::{normalize, Normalized, RawAttributes};
pub use rank::{rank, summary_input, Prioritization, Prioritizer, ScoredTask};
pub use scoring::{Score, ScoringStrategy};
pub use summary::{CompletionCounts, Summary};
pub use task::{Task, DEFAULT_SCORE, SCORE_MAX, SCORE_MIN};
pub use time::today_in;
