#![forbid(unsafe_code)]

mod scorer;
mod weights;

pub use scorer::{Ranking, ScoredDriver, score, select};
pub use weights::Weights;
