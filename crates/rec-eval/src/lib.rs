//! Offline evaluation of link-prediction scorers.

mod agreement;
mod validation;

pub use rec_types::{
    AgreementEntry, EvalConfig, EvalError, ScorerRankSummary, ValidationOutcome, ValidationReport,
};
pub use validation::Evaluator;
