// Core algorithm exports
pub mod sampler;

pub use sampler::{sample_names, Recommender, DEFAULT_PICK_COUNT};
