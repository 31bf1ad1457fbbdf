pub mod advisory;
pub mod assembler;
pub mod pipeline;
pub mod providers;
pub mod recommendation;
pub mod scoring;
pub mod season_filter;

pub use assembler::{AlwaysReplace, NeverReplace, RandomTieBreaker, TieBreaker};
pub use recommendation::RecommendationService;
