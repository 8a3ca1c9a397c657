pub mod dto;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Result, ScoringError};
pub use services::breakdown::compute_breakdown;
pub use services::ranking::rank;
pub use services::validation::{SubmissionRule, SubmissionValidator, validate};
