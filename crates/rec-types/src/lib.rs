//! Core types and traits for link-prediction based friend recommendation.
//!
//! Graph stores, scorers, the recommender, and the evaluator all speak in terms of these types.

mod config;
mod dto;
mod node;
mod traits;

pub use config::*;
pub use dto::*;
pub use node::NodeId;
pub use traits::*;
